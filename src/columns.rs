//! Mapping between [`FuzzyDate`] and the physical columns that store it.
//!
//! A fuzzy date field named `date` occupies `date` (lower bound), `date_to`
//! (upper bound) and, when the field carries a modifier, `date_mod` (the
//! modifier code). Nothing here talks to a database; the persistence layer
//! binds the values however it likes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FuzzyDateError, Result};
use crate::modifier::Modifier;
use crate::types::CalendarDate;
use crate::FuzzyDate;

/// Suffix of the upper bound column
pub const UPPER_BOUND_SUFFIX: &str = "_to";
/// Suffix of the modifier column
pub const MODIFIER_SUFFIX: &str = "_mod";

/// Column values of one fuzzy date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FuzzyDateColumns {
    pub lower_bound: Option<CalendarDate>,
    pub upper_bound: Option<CalendarDate>,
    /// Always 0 for fields stored without a modifier column
    #[serde(default)]
    pub modifier_code: i16,
}

/// Physical column names of one fuzzy date field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnNames {
    pub lower_bound: String,
    pub upper_bound: String,
    pub modifier: Option<String>,
}

impl ColumnNames {
    pub fn for_field(field: &str, with_modifier: bool) -> Self {
        Self {
            lower_bound: field.to_owned(),
            upper_bound: format!("{field}{UPPER_BOUND_SUFFIX}"),
            modifier: with_modifier.then(|| format!("{field}{MODIFIER_SUFFIX}")),
        }
    }
}

impl FuzzyDate {
    /// Converts to database columns: (`lower_bound`, `upper_bound`, `modifier_code`)
    pub fn to_columns(&self) -> FuzzyDateColumns {
        FuzzyDateColumns {
            lower_bound: self.lower_bound(),
            upper_bound: self.upper_bound(),
            modifier_code: self.modifier.code(),
        }
    }

    /// Creates from database columns.
    ///
    /// A missing lower bound is the undefined date. A missing upper bound
    /// means the single day given by the lower bound.
    ///
    /// # Errors
    /// `InvalidModifierCode` for corrupt modifier columns, `InvertedRange`
    /// if the stored lower bound is after the upper bound.
    pub fn from_columns(columns: FuzzyDateColumns) -> Result<Self> {
        let modifier = Modifier::from_code(columns.modifier_code).inspect_err(|_| {
            warn!(
                code = columns.modifier_code,
                "corrupt modifier code in stored fuzzy date"
            );
        })?;

        let Some(lower) = columns.lower_bound else {
            return Ok(Self::undefined());
        };
        let upper = columns.upper_bound.unwrap_or(lower);
        Self::new(lower, upper, modifier)
    }
}

impl From<&FuzzyDate> for FuzzyDateColumns {
    fn from(date: &FuzzyDate) -> Self {
        date.to_columns()
    }
}

impl TryFrom<FuzzyDateColumns> for FuzzyDate {
    type Error = FuzzyDateError;

    fn try_from(columns: FuzzyDateColumns) -> Result<Self> {
        Self::from_columns(columns)
    }
}

impl TryFrom<(Option<CalendarDate>, Option<CalendarDate>, i16)> for FuzzyDate {
    type Error = FuzzyDateError;

    fn try_from(value: (Option<CalendarDate>, Option<CalendarDate>, i16)) -> Result<Self> {
        Self::from_columns(FuzzyDateColumns {
            lower_bound: value.0,
            upper_bound: value.1,
            modifier_code: value.2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateOrder;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_column_names() {
        let names = ColumnNames::for_field("beginning_regnal_year", true);
        assert_eq!(names.lower_bound, "beginning_regnal_year");
        assert_eq!(names.upper_bound, "beginning_regnal_year_to");
        assert_eq!(names.modifier.as_deref(), Some("beginning_regnal_year_mod"));

        let names = ColumnNames::for_field("date", false);
        assert_eq!(names.upper_bound, "date_to");
        assert_eq!(names.modifier, None);
    }

    #[test]
    fn test_to_columns_and_from_columns() {
        let fd = FuzzyDate::parse_with("c. 3-1970 to 1971", DateOrder::DayMonthYear).unwrap();
        let columns = fd.to_columns();
        assert_eq!(
            columns,
            FuzzyDateColumns {
                lower_bound: Some(date(1970, 3, 1)),
                upper_bound: Some(date(1971, 12, 31)),
                modifier_code: 1,
            }
        );
        let restored = FuzzyDate::from_columns(columns).unwrap();
        assert_eq!(restored, fd);
        assert_eq!(restored.render_with(DateOrder::DayMonthYear), "c. 3-1970 to 12-1971");
    }

    #[test]
    fn test_undefined_columns() {
        let columns = FuzzyDate::undefined().to_columns();
        assert_eq!(columns, FuzzyDateColumns::default());
        assert!(FuzzyDate::from_columns(columns).unwrap().is_undefined());

        // an upper bound without a lower bound is not a date
        let restored: FuzzyDate = (None, Some(date(1970, 1, 1)), 0).try_into().unwrap();
        assert!(restored.is_undefined());
    }

    #[test]
    fn test_missing_upper_bound_means_single_day() {
        let restored: FuzzyDate = (Some(date(1970, 10, 25)), None, 2).try_into().unwrap();
        assert_eq!(
            restored.bounds(),
            Some((date(1970, 10, 25), date(1970, 10, 25)))
        );
        assert_eq!(restored.modifier(), Modifier::Uncertain);
    }

    #[test]
    fn test_corrupt_modifier_code() {
        let result: Result<FuzzyDate> =
            (Some(date(1970, 1, 1)), Some(date(1970, 12, 31)), 9).try_into();
        assert_eq!(result, Err(FuzzyDateError::InvalidModifierCode(9)));

        // the code is checked even when there is no date
        let result: Result<FuzzyDate> = (None, None, -1).try_into();
        assert_eq!(result, Err(FuzzyDateError::InvalidModifierCode(-1)));
    }

    #[test]
    fn test_inverted_columns() {
        let result: Result<FuzzyDate> =
            (Some(date(1971, 1, 1)), Some(date(1970, 1, 1)), 0).try_into();
        assert!(matches!(result, Err(FuzzyDateError::InvertedRange { .. })));
    }

    #[test]
    fn test_columns_serde() {
        let columns = FuzzyDateColumns {
            lower_bound: Some(date(1970, 1, 1)),
            upper_bound: Some(date(1970, 12, 31)),
            modifier_code: 1,
        };
        let json = serde_json::to_string(&columns).unwrap();
        assert_eq!(
            json,
            r#"{"lower_bound":"1970-01-01","upper_bound":"1970-12-31","modifier_code":1}"#
        );

        // two-column fields have no modifier
        let parsed: FuzzyDateColumns = serde_json::from_str(
            r#"{"lower_bound":"1970-01-01","upper_bound":"1970-12-31"}"#,
        )
        .unwrap();
        assert_eq!(parsed.modifier_code, 0);
        let fd = FuzzyDate::try_from(parsed).unwrap();
        assert_eq!(fd.render_with(DateOrder::DayMonthYear), "1970");
    }

    #[test]
    fn test_from_reference() {
        let fd = FuzzyDate::parse_with("?1970", DateOrder::DayMonthYear).unwrap();
        let columns = FuzzyDateColumns::from(&fd);
        assert_eq!(columns.modifier_code, 2);
    }
}
