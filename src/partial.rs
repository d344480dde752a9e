use crate::config::DateOrder;
use crate::consts::{DATE_SEPARATOR, DECEMBER, JANUARY, MIN_DAY};
use crate::error::FuzzyDateError;
use crate::prelude::*;
use crate::types::{self, CalendarDate};

/// How much of a date is known.
/// Ordered from least to most precise: `Year < Month < Day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    Year,
    Month,
    Day,
}

impl Precision {
    /// From most to least precise
    pub const DESCENDING: [Self; 3] = [Self::Day, Self::Month, Self::Year];
}

/// Which end of a range a concrete date stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Filled in with the earliest consistent day
    Lower,
    /// Filled in with the latest consistent day
    Upper,
}

/// A date with varying levels of precision, as a person would type it.
/// Missing components are never fabricated; they are only filled in when
/// the date is expanded into a concrete bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PartialDate {
    /// Full date with day, month, and year
    #[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
    Day {
        year: types::Year,
        month: types::Month,
        day: types::Day,
    },
    /// Month and year only
    #[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
    Month {
        year: types::Year,
        month: types::Month,
    },
    /// Year only
    #[display(fmt = "{:04}", "year.get()")]
    Year { year: types::Year },
}

impl PartialDate {
    /// Builds a partial date from raw components, validating each one.
    ///
    /// # Errors
    /// Returns `InvalidCalendarDate` for out-of-range components and
    /// `InvalidDateFormat` for a day given without a month.
    pub fn from_components(
        year: u16,
        month: Option<u8>,
        day: Option<u8>,
    ) -> Result<Self, FuzzyDateError> {
        let year = types::Year::new(year)?;
        match (month, day) {
            (Some(m), Some(d)) => {
                let month = types::Month::new(m)?;
                let day = types::Day::new(d, year, month)?;
                Ok(Self::Day { year, month, day })
            }
            (Some(m), None) => Ok(Self::Month {
                year,
                month: types::Month::new(m)?,
            }),
            (None, None) => Ok(Self::Year { year }),
            (None, Some(d)) => Err(FuzzyDateError::InvalidDateFormat(format!(
                "cannot have day {d} without month"
            ))),
        }
    }

    /// Keeps the components of `date` down to `precision`.
    pub const fn truncate(date: CalendarDate, precision: Precision) -> Self {
        let year = date.year_typed();
        match precision {
            Precision::Year => Self::Year { year },
            Precision::Month => Self::Month {
                year,
                month: date.month_typed(),
            },
            Precision::Day => Self::Day {
                year,
                month: date.month_typed(),
                day: date.day_typed(),
            },
        }
    }

    /// Shortest truncation of `date` that expands back to exactly `date`
    /// when read as the given end of a range.
    ///
    /// `1970-12-31` reduces to `1970` as an upper bound but stays a full
    /// date as a lower bound.
    pub fn reduce(date: CalendarDate, bound: Bound) -> Self {
        let mut shortest = Self::truncate(date, Precision::Day);
        for precision in Precision::DESCENDING {
            let candidate = Self::truncate(date, precision);
            if candidate.expand(bound) == date {
                shortest = candidate;
            }
        }
        shortest
    }

    pub const fn precision(&self) -> Precision {
        match self {
            Self::Year { .. } => Precision::Year,
            Self::Month { .. } => Precision::Month,
            Self::Day { .. } => Precision::Day,
        }
    }

    /// Returns the year component (always present)
    pub const fn year(&self) -> u16 {
        match self {
            Self::Day { year, .. } | Self::Month { year, .. } | Self::Year { year } => year.get(),
        }
    }

    /// Returns the month component if present
    pub const fn month(&self) -> Option<u8> {
        match self {
            Self::Day { month, .. } | Self::Month { month, .. } => Some(month.get()),
            Self::Year { .. } => None,
        }
    }

    /// Returns the day component if present
    pub const fn day(&self) -> Option<u8> {
        match self {
            Self::Day { day, .. } => Some(day.get()),
            Self::Month { .. } | Self::Year { .. } => None,
        }
    }

    /// Earliest concrete date consistent with this value (minimal expansion).
    pub fn earliest(&self) -> CalendarDate {
        match *self {
            Self::Day { year, month, day } => CalendarDate::from_parts(year, month, day),
            Self::Month { year, month } => {
                CalendarDate::from_parts(year, month, first_day(year, month))
            }
            Self::Year { year } => {
                let month = month_of(JANUARY);
                CalendarDate::from_parts(year, month, first_day(year, month))
            }
        }
    }

    /// Latest concrete date consistent with this value (maximal expansion).
    pub fn latest(&self) -> CalendarDate {
        match *self {
            Self::Day { year, month, day } => CalendarDate::from_parts(year, month, day),
            Self::Month { year, month } => {
                CalendarDate::from_parts(year, month, types::Day::last_of(year, month))
            }
            Self::Year { year } => {
                let month = month_of(DECEMBER);
                CalendarDate::from_parts(year, month, types::Day::last_of(year, month))
            }
        }
    }

    /// Expands to the concrete date standing for the given end of a range.
    pub fn expand(&self, bound: Bound) -> CalendarDate {
        match bound {
            Bound::Lower => self.earliest(),
            Bound::Upper => self.latest(),
        }
    }

    /// Compact text in the given component order.
    ///
    /// Day-month-year drops leading zeros (`3-1970`); year-month-day is
    /// zero-padded ISO (`1970-03`).
    pub fn format(&self, order: DateOrder) -> String {
        match order {
            DateOrder::YearMonthDay => self.to_string(),
            DateOrder::DayMonthYear => match *self {
                Self::Day { year, month, day } => {
                    format!("{day}{DATE_SEPARATOR}{month}{DATE_SEPARATOR}{year}")
                }
                Self::Month { year, month } => format!("{month}{DATE_SEPARATOR}{year}"),
                Self::Year { year } => year.to_string(),
            },
        }
    }

    /// Text for public display, e.g. `25 October 1970`.
    pub fn prose(&self) -> String {
        match *self {
            Self::Day { year, month, day } => format!("{day} {} {year}", month.name()),
            Self::Month { year, month } => format!("{} {year}", month.name()),
            Self::Year { year } => year.to_string(),
        }
    }
}

// January and December always validate, and so does day 1.
fn month_of(value: u8) -> types::Month {
    types::Month::new(value).unwrap_or_else(|_| unreachable!("constant month {value}"))
}

fn first_day(year: types::Year, month: types::Month) -> types::Day {
    types::Day::new(MIN_DAY, year, month).unwrap_or_else(|_| unreachable!("first day of month"))
}
