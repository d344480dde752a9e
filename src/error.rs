use crate::consts::{MAX_MONTH, MAX_YEAR};
use crate::prelude::*;
use crate::types::CalendarDate;

/// Why a year/month/day triple is not a real Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CalendarError {
    #[display(fmt = "year {} is out of range (must be 1-{})", "_0", "MAX_YEAR")]
    InvalidYear(u16),
    #[display(fmt = "month {} is out of range (must be 1-{})", "_0", "MAX_MONTH")]
    InvalidMonth(u8),
    #[display(fmt = "day {day} is out of range for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
}

impl std::error::Error for CalendarError {}

/// Error type for every fallible fuzzy date operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FuzzyDateError {
    /// Text does not follow the date grammar.
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Text follows the grammar but names a day that does not exist.
    #[error("invalid calendar date: {0}")]
    InvalidCalendarDate(#[from] CalendarError),

    /// Persisted modifier column holds an unknown code.
    #[error("invalid modifier code: {0}")]
    InvalidModifierCode(i16),

    /// Range whose start falls after its end.
    #[error("invalid date range: start ({lower}) is after end ({upper})")]
    InvertedRange { lower: CalendarDate, upper: CalendarDate },
}

pub type Result<T> = std::result::Result<T, FuzzyDateError>;
