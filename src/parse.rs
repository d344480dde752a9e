//! Free text to [`FuzzyDate`].
//!
//! Accepted input is an optional leading modifier (`c.` or `?`) followed by
//! one date or two dates forming an inclusive range. Dates are one to three
//! numeric groups separated by `-` or `/`, in the configured order. The two
//! ends of a range are separated by `to`, a spaced hyphen, a comma or plain
//! whitespace:
//!
//! ```text
//! 1970    03-1970    25-10-1970    1970 to 1975    c. 1972    ?1970 - 1975
//! ```

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::config::{self, DateOrder};
use crate::consts::{ALT_DATE_SEPARATOR, CIRCA_MARKER, DATE_SEPARATOR, UNCERTAIN_MARKER};
use crate::error::FuzzyDateError;
use crate::modifier::Modifier;
use crate::partial::PartialDate;
use crate::FuzzyDate;

#[allow(clippy::expect_used)]
static RANGE_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+to\s+|\s+-\s+|\s*,\s+|\s+").expect("range separator pattern compiles")
});

#[allow(clippy::expect_used)]
static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2}[/-])?([0-9]{1,2}[/-])?[0-9]{1,4}$")
        .expect("day-month-year pattern compiles")
});

#[allow(clippy::expect_used)]
static YEAR_MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,4}([/-][0-9]{1,2})?([/-][0-9]{1,2})?$")
        .expect("year-month-day pattern compiles")
});

fn token_pattern(order: DateOrder) -> &'static Regex {
    match order {
        DateOrder::DayMonthYear => &*DAY_MONTH_YEAR,
        DateOrder::YearMonthDay => &*YEAR_MONTH_DAY,
    }
}

/// Splits off a leading modifier marker.
/// The circa marker wins; a `?` right after it is dropped.
pub(crate) fn split_modifier(text: &str) -> (Modifier, &str) {
    if let Some(rest) = text.strip_prefix(CIRCA_MARKER) {
        let rest = rest.trim_start();
        let rest = rest.strip_prefix(UNCERTAIN_MARKER).unwrap_or(rest);
        (Modifier::Circa, rest.trim_start())
    } else if let Some(rest) = text.strip_prefix(UNCERTAIN_MARKER) {
        (Modifier::Uncertain, rest.trim_start())
    } else {
        (Modifier::None, text)
    }
}

/// Parses a single date token such as `25-10-1970`, `3/1970` or `1970`.
///
/// # Errors
/// `InvalidDateFormat` if the token does not follow the grammar for `order`,
/// `InvalidCalendarDate` if it names a day that does not exist.
pub fn parse_token(token: &str, order: DateOrder) -> Result<PartialDate, FuzzyDateError> {
    if !token_pattern(order).is_match(token) {
        return Err(FuzzyDateError::InvalidDateFormat(format!(
            "'{token}' is not a recognised date"
        )));
    }

    let mut groups = token
        .split([DATE_SEPARATOR, ALT_DATE_SEPARATOR])
        .map(|group| {
            group.parse::<u16>().map_err(|_| {
                FuzzyDateError::InvalidDateFormat(format!("'{group}' is not a number"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if order == DateOrder::DayMonthYear {
        groups.reverse();
    }

    // the grammar caps day and month groups at two digits
    let small = |value: u16| u8::try_from(value).unwrap_or(u8::MAX);
    match groups.as_slice() {
        [year] => PartialDate::from_components(*year, None, None),
        [year, month] => PartialDate::from_components(*year, Some(small(*month)), None),
        [year, month, day] => {
            PartialDate::from_components(*year, Some(small(*month)), Some(small(*day)))
        }
        _ => Err(FuzzyDateError::InvalidDateFormat(format!(
            "'{token}' has too many components"
        ))),
    }
}

/// Parses free text in the given order.
///
/// Empty text is the undefined date. Whitespace-only text is not empty
/// and is rejected like any other malformed input.
///
/// # Errors
/// `InvalidDateFormat`, `InvalidCalendarDate` or `InvertedRange`.
pub fn parse_with(text: &str, order: DateOrder) -> Result<FuzzyDate, FuzzyDateError> {
    if text.is_empty() {
        return Ok(FuzzyDate::undefined());
    }

    let result = parse_range(text.trim(), order);
    match &result {
        Ok(date) => trace!(input = text, parsed = ?date, "parsed fuzzy date"),
        Err(err) => debug!(input = text, %err, "rejected fuzzy date"),
    }
    result
}

fn parse_range(text: &str, order: DateOrder) -> Result<FuzzyDate, FuzzyDateError> {
    let (modifier, rest) = split_modifier(text);

    let tokens: Vec<&str> = RANGE_SPLIT.split(rest).collect();
    let (start, end) = match tokens.as_slice() {
        [single] => {
            let date = parse_token(single, order)?;
            (date, date)
        }
        [start, end] => (parse_token(start, order)?, parse_token(end, order)?),
        _ => {
            return Err(FuzzyDateError::InvalidDateFormat(format!(
                "expected a date or a range of two dates, found {} parts",
                tokens.len()
            )));
        }
    };

    FuzzyDate::from_partial(start, end, modifier)
}

/// Parses free text in the process-wide order.
///
/// # Errors
/// See [`parse_with`].
pub fn parse(text: &str) -> Result<FuzzyDate, FuzzyDateError> {
    parse_with(text, config::date_order())
}

impl FromStr for PartialDate {
    type Err = FuzzyDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(s.trim(), config::date_order())
    }
}
