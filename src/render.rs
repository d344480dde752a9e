//! [`FuzzyDate`] to text.
//!
//! Both ends are reduced to the shortest form that re-expands to the stored
//! bound, then rendered at a common precision. That common precision is the
//! finer of the two reductions: dropping components from the finer end would
//! widen the range on the next parse.

use crate::config::{self, DateOrder};
use crate::consts::{RANGE_SEPARATOR, YEAR_RANGE_CIRCA, YEAR_RANGE_SEPARATOR, YEAR_RANGE_UNDEFINED};
use crate::modifier::Modifier;
use crate::partial::{Bound, PartialDate};
use crate::FuzzyDate;

impl FuzzyDate {
    /// Both ends as the partial dates a person would have typed, at a
    /// common precision. `None` for the undefined date.
    pub fn reduced(&self) -> Option<(PartialDate, PartialDate)> {
        let (lower, upper) = self.bounds?;
        let precision = PartialDate::reduce(lower, Bound::Lower)
            .precision()
            .max(PartialDate::reduce(upper, Bound::Upper).precision());
        Some((
            PartialDate::truncate(lower, precision),
            PartialDate::truncate(upper, precision),
        ))
    }

    /// Compact text in the process-wide order; parses back to the same value.
    pub fn render(&self) -> String {
        self.render_with(config::date_order())
    }

    /// Compact text in the given order, e.g. `c. 1970 to 3-1975`.
    pub fn render_with(&self, order: DateOrder) -> String {
        let Some((start, end)) = self.reduced() else {
            return String::new();
        };
        let symbol = self.modifier.symbol();
        if start == end {
            format!("{symbol}{}", start.format(order))
        } else {
            format!(
                "{symbol}{}{RANGE_SEPARATOR}{}",
                start.format(order),
                end.format(order)
            )
        }
    }

    /// Text for public display, e.g. `from c. 1970 to c. March 1975`.
    pub fn render_prose(&self) -> String {
        let Some((start, end)) = self.reduced() else {
            return String::new();
        };
        let (from, to) = (start.prose(), end.prose());
        if start == end {
            match self.modifier {
                Modifier::None => from,
                Modifier::Circa => format!("c. {from}"),
                Modifier::Uncertain => format!("?{from}"),
            }
        } else {
            match self.modifier {
                Modifier::None => format!("from {from} to {to}"),
                Modifier::Circa => format!("from c. {from} to c. {to}"),
                Modifier::Uncertain => format!("sometime between {from} and {to}"),
            }
        }
    }

    /// Years only, e.g. `1970`, `1970-1975` or `c.1970`; `?` when undefined.
    pub fn render_year_range(&self) -> String {
        let Some((lower, upper)) = self.bounds else {
            return YEAR_RANGE_UNDEFINED.to_owned();
        };
        let years = if lower.year() == upper.year() {
            lower.year().to_string()
        } else {
            format!("{}{YEAR_RANGE_SEPARATOR}{}", lower.year(), upper.year())
        };
        if self.modifier == Modifier::Circa {
            format!("{YEAR_RANGE_CIRCA}{years}")
        } else {
            years
        }
    }
}
