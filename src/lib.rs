//! Approximate historical dates.
//!
//! A [`FuzzyDate`] records that something happened at an unknown point
//! between two calendar days (inclusive), optionally qualified as circa or
//! uncertain. It is typed by people as `1970`, `10-1970`, `25-10-1970`,
//! `1970 to 1975`, `c. 1972` or `?1970`, stored as two concrete dates plus a
//! modifier code, and rendered back to the shortest text that reproduces
//! those dates.
//!
//! ```
//! use fuzzydate::{DateOrder, FuzzyDate};
//!
//! let date = FuzzyDate::parse_with("c. 1970 to 1975", DateOrder::DayMonthYear)?;
//! assert_eq!(date.lower_bound().map(|d| d.to_string()).as_deref(), Some("1970-01-01"));
//! assert_eq!(date.upper_bound().map(|d| d.to_string()).as_deref(), Some("1975-12-31"));
//! assert_eq!(date.render_with(DateOrder::DayMonthYear), "c. 1970 to 1975");
//! assert_eq!(date.render_prose(), "from c. 1970 to c. 1975");
//! # Ok::<(), fuzzydate::FuzzyDateError>(())
//! ```

mod columns;
mod config;
mod consts;
mod error;
mod form;
mod modifier;
mod parse;
mod partial;
mod prelude;
mod render;
mod types;

pub use columns::{ColumnNames, FuzzyDateColumns, MODIFIER_SUFFIX, UPPER_BOUND_SUFFIX};
pub use config::{ConfigError, DATE_ORDER_ENV, DateOrder, date_order, init_from_env, set_date_order};
pub use consts::*;
pub use error::{CalendarError, FuzzyDateError, Result};
pub use form::{
    ValidationError, clean, clean_with, display_value, format_help, help_text, help_text_with,
};
pub use modifier::Modifier;
pub use parse::parse_token;
pub use partial::{Bound, PartialDate, Precision};
pub use types::{CalendarDate, Day, Month, Year, days_in_month, is_leap_year};

use std::fmt;
use std::str::FromStr;

/// An approximate date: an inclusive range of calendar days plus a modifier.
///
/// The default value is the undefined date ("no date"), which is distinct
/// from every concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FuzzyDate {
    bounds: Option<(CalendarDate, CalendarDate)>,
    modifier: Modifier,
}

impl FuzzyDate {
    /// The "no date" value
    pub const fn undefined() -> Self {
        Self {
            bounds: None,
            modifier: Modifier::None,
        }
    }

    /// Creates a date from explicit bounds.
    ///
    /// # Errors
    /// Returns `FuzzyDateError::InvertedRange` if `lower > upper`.
    pub fn new(lower: CalendarDate, upper: CalendarDate, modifier: Modifier) -> Result<Self> {
        if lower > upper {
            return Err(FuzzyDateError::InvertedRange { lower, upper });
        }
        Ok(Self {
            bounds: Some((lower, upper)),
            modifier,
        })
    }

    /// A single known day
    pub const fn on(date: CalendarDate, modifier: Modifier) -> Self {
        Self {
            bounds: Some((date, date)),
            modifier,
        }
    }

    /// Creates the range from the start of `start` to the end of `end`.
    ///
    /// # Errors
    /// Returns `FuzzyDateError::InvertedRange` if `start` begins after `end` ends.
    pub fn from_partial(start: PartialDate, end: PartialDate, modifier: Modifier) -> Result<Self> {
        Self::new(start.earliest(), end.latest(), modifier)
    }

    /// Parses free text using the process-wide [`DateOrder`].
    ///
    /// # Errors
    /// `InvalidDateFormat`, `InvalidCalendarDate` or `InvertedRange`.
    pub fn parse(text: &str) -> Result<Self> {
        parse::parse(text)
    }

    /// Parses free text using an explicit [`DateOrder`].
    ///
    /// # Errors
    /// `InvalidDateFormat`, `InvalidCalendarDate` or `InvertedRange`.
    pub fn parse_with(text: &str, order: DateOrder) -> Result<Self> {
        parse::parse_with(text, order)
    }

    pub const fn is_undefined(&self) -> bool {
        self.bounds.is_none()
    }

    /// First day the date may fall on
    pub fn lower_bound(&self) -> Option<CalendarDate> {
        self.bounds.map(|(lower, _)| lower)
    }

    /// Last day the date may fall on (inclusive)
    pub fn upper_bound(&self) -> Option<CalendarDate> {
        self.bounds.map(|(_, upper)| upper)
    }

    pub const fn bounds(&self) -> Option<(CalendarDate, CalendarDate)> {
        self.bounds
    }

    pub const fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub const fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier = modifier;
    }

    /// Replaces both bounds, keeping the modifier.
    ///
    /// # Errors
    /// Returns `FuzzyDateError::InvertedRange` if `lower > upper`; the value is left unchanged.
    pub fn set_bounds(&mut self, lower: CalendarDate, upper: CalendarDate) -> Result<()> {
        *self = Self::new(lower, upper, self.modifier)?;
        Ok(())
    }

    /// Re-reads the value from free text in the process-wide order.
    ///
    /// # Errors
    /// Any parse error; the value is left unchanged.
    pub fn assign(&mut self, text: &str) -> Result<()> {
        *self = Self::parse(text)?;
        Ok(())
    }
}

impl fmt::Display for FuzzyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for FuzzyDate {
    type Err = FuzzyDateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl serde::Serialize for FuzzyDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.render())
    }
}

impl<'de> serde::Deserialize<'de> for FuzzyDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
