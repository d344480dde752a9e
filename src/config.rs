//! Process-wide date order setting.
//!
//! Whether typed dates read day-month-year (`25-10-1970`) or
//! year-month-day (`1970-10-25`) is a single setting shared by the whole
//! process. Every operation that depends on it also has a `*_with` variant
//! that takes the order explicitly.

use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable read by [`init_from_env`]
pub const DATE_ORDER_ENV: &str = "FUZZYDATE_DATE_ORDER";

/// Order of the components in a typed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DateOrder {
    /// `dd-mm-yyyy`, rendered without leading zeros
    #[default]
    DayMonthYear = 0,
    /// `yyyy-mm-dd`, rendered zero-padded
    YearMonthDay = 1,
}

impl DateOrder {
    const fn from_repr(value: u8) -> Self {
        match value {
            1 => Self::YearMonthDay,
            _ => Self::DayMonthYear,
        }
    }

    /// Example of a full date in this order, for user-facing messages
    pub const fn day_example(self) -> &'static str {
        match self {
            Self::DayMonthYear => "dd-mm-yyyy",
            Self::YearMonthDay => "yyyy-mm-dd",
        }
    }

    /// Example of a month date in this order, for user-facing messages
    pub const fn month_example(self) -> &'static str {
        match self {
            Self::DayMonthYear => "mm-yyyy",
            Self::YearMonthDay => "yyyy-mm",
        }
    }

    /// 25 October 1970 written in this order
    pub const fn sample_day(self) -> &'static str {
        match self {
            Self::DayMonthYear => "25-10-1970",
            Self::YearMonthDay => "1970-10-25",
        }
    }

    /// October 1970 written in this order
    pub const fn sample_month(self) -> &'static str {
        match self {
            Self::DayMonthYear => "10-1970",
            Self::YearMonthDay => "1970-10",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}' (expected dmy or ymd)")]
    InvalidDateOrder { var: &'static str, value: String },
}

impl FromStr for DateOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dmy" | "uk" | "day-month-year" | "day_month_year" => Ok(Self::DayMonthYear),
            "ymd" | "iso" | "year-month-day" | "year_month_day" => Ok(Self::YearMonthDay),
            _ => Err(ConfigError::InvalidDateOrder {
                var: DATE_ORDER_ENV,
                value: s.to_owned(),
            }),
        }
    }
}

static DATE_ORDER: AtomicU8 = AtomicU8::new(DateOrder::DayMonthYear as u8);

/// Current process-wide date order
pub fn date_order() -> DateOrder {
    DateOrder::from_repr(DATE_ORDER.load(Ordering::Relaxed))
}

/// Changes the process-wide date order
pub fn set_date_order(order: DateOrder) {
    DATE_ORDER.store(order as u8, Ordering::Relaxed);
    info!(?order, "fuzzy date order configured");
}

/// Sets the date order from `FUZZYDATE_DATE_ORDER`, keeping the current
/// order when the variable is unset.
///
/// # Errors
/// Returns `ConfigError::InvalidDateOrder` if the variable holds an unknown value.
pub fn init_from_env() -> Result<DateOrder, ConfigError> {
    match std::env::var(DATE_ORDER_ENV) {
        Ok(value) => {
            let order = value.parse()?;
            set_date_order(order);
            Ok(order)
        }
        Err(_) => Ok(date_order()),
    }
}
