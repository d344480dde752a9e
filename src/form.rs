//! Input-form side of a fuzzy date field: cleaning typed text, the error
//! shown next to the input, and the help text under it.

use crate::config::{self, DateOrder};
use crate::error::FuzzyDateError;
use crate::FuzzyDate;

/// Typed text that could not be read as a fuzzy date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Invalid date format. Examples: '{day}', '{month}', 'yyyy', 'yyyy to yyyy', 'c. yyyy', '?yyyy' ({source})"
)]
pub struct ValidationError {
    day: &'static str,
    month: &'static str,
    source: FuzzyDateError,
}

impl ValidationError {
    fn new(source: FuzzyDateError, order: DateOrder) -> Self {
        Self {
            day: order.day_example(),
            month: order.month_example(),
            source,
        }
    }

    /// The underlying parse failure
    pub const fn reason(&self) -> &FuzzyDateError {
        &self.source
    }
}

/// Reads a submitted value in the process-wide order.
///
/// # Errors
/// Returns a `ValidationError` describing the accepted formats.
pub fn clean(input: &str) -> Result<FuzzyDate, ValidationError> {
    clean_with(input, config::date_order())
}

/// Reads a submitted value in the given order.
///
/// # Errors
/// Returns a `ValidationError` describing the accepted formats.
pub fn clean_with(input: &str, order: DateOrder) -> Result<FuzzyDate, ValidationError> {
    FuzzyDate::parse_with(input, order).map_err(|err| ValidationError::new(err, order))
}

/// Help describing the accepted formats, with examples in the given order.
pub fn format_help(order: DateOrder) -> String {
    format!(
        "Date format: {}. e.g. '{}' (on that day), '{}' (sometime that month) or \
'1970' (sometime that year). \
Date ranges: e.g. '1970 to 1975' (started in 1970 and finished in 1975). \
Uncertainty: e.g. 'c. 1972' (circa 1972), '?1972' (probably in 1972 but might be another year), \
'?1970 to 1975' (sometime between 1970 and 1975).",
        order.day_example(),
        order.sample_day(),
        order.sample_month(),
    )
}

/// Help for a field in the process-wide order: its own help text, if any,
/// followed by [`format_help`].
pub fn help_text(existing: Option<&str>) -> String {
    help_text_with(existing, config::date_order())
}

pub fn help_text_with(existing: Option<&str>, order: DateOrder) -> String {
    let help = format_help(order);
    match existing {
        Some(own) if !own.is_empty() => format!("{own}\n{help}"),
        _ => help,
    }
}

/// Text to pre-fill an input with.
pub fn display_value(value: Option<&FuzzyDate>) -> String {
    value.map(FuzzyDate::render).unwrap_or_default()
}
