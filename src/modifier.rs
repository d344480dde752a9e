use serde::{Deserialize, Serialize};

use crate::error::FuzzyDateError;
use crate::prelude::*;

/// Confidence annotation attached to a fuzzy date.
///
/// `Display` yields the symbol written in front of the date. The numeric
/// code is what gets persisted, so existing codes must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum Modifier {
    /// No annotation
    #[default]
    #[display(fmt = "")]
    None,
    /// Approximately ("circa")
    #[display(fmt = "c. ")]
    Circa,
    /// Probably, but might be another date
    #[display(fmt = "?")]
    Uncertain,
}

impl Modifier {
    /// Every modifier, in persisted code order
    pub const ALL: [Self; 3] = [Self::None, Self::Circa, Self::Uncertain];

    /// Symbol written in front of a rendered date
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Circa => "c. ",
            Self::Uncertain => "?",
        }
    }

    /// Stable code stored in the modifier column
    pub const fn code(self) -> i16 {
        match self {
            Self::None => 0,
            Self::Circa => 1,
            Self::Uncertain => 2,
        }
    }

    /// Looks up a modifier by its persisted code.
    ///
    /// # Errors
    /// Returns `FuzzyDateError::InvalidModifierCode` for codes that were never assigned.
    pub fn from_code(code: i16) -> Result<Self, FuzzyDateError> {
        Self::ALL
            .into_iter()
            .find(|modifier| modifier.code() == code)
            .ok_or(FuzzyDateError::InvalidModifierCode(code))
    }
}

impl TryFrom<i16> for Modifier {
    type Error = FuzzyDateError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<Modifier> for i16 {
    fn from(modifier: Modifier) -> Self {
        modifier.code()
    }
}
