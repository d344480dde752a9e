use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
};
use crate::error::{CalendarError, FuzzyDateError};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU16::new(value).ok_or(CalendarError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(CalendarError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Full English name of the month
    pub const fn name(self) -> &'static str {
        crate::consts::MONTH_NAMES[(self.0.get() - 1) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid)?;
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Last day of the given month
    pub fn last_of(year: Year, month: Month) -> Self {
        let last = days_in_month(year.get(), month.get());
        // month lengths are never zero
        Self(NonZeroU8::new(last).unwrap_or(NonZeroU8::MIN))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A concrete Gregorian calendar date.
///
/// Ordering follows the calendar. Displays, parses and serializes as
/// zero-padded ISO 8601 (`YYYY-MM-DD`), which is also how it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

impl CalendarDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the first `CalendarError` found, checking year, then month, then day.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from components that are already validated.
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{sep}{:02}{sep}{:02}",
            self.year(),
            self.month(),
            self.day(),
            sep = DATE_SEPARATOR
        )
    }
}

impl FromStr for CalendarDate {
    type Err = FuzzyDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || FuzzyDateError::InvalidDateFormat(format!("'{s}' is not a YYYY-MM-DD date"));

        let parts: Vec<&str> = s.trim().split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(invalid());
        };
        let well_formed = [(*year, 4), (*month, 2), (*day, 2)]
            .iter()
            .all(|(part, len)| part.len() == *len && part.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(invalid());
        }

        let year = year.parse::<u16>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let day = day.parse::<u8>().map_err(|_| invalid())?;
        Ok(Self::new(year, month, day)?)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of a month, or 0 for a month outside `1..=12`
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        0
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(value: u16) -> Year {
        Year::new(value).unwrap()
    }

    fn month(value: u8) -> Month {
        Month::new(value).unwrap()
    }

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(1970).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(CalendarError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(CalendarError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_conversions() {
        let y: Year = 1066.try_into().unwrap();
        assert_eq!(y.get(), 1066);
        assert_eq!(u16::from(y), 1066);
        assert_eq!(y.to_string(), "1066");
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(CalendarError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(CalendarError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month(1).name(), "January");
        assert_eq!(month(10).name(), "October");
        assert_eq!(month(12).name(), "December");
    }

    #[test]
    fn test_day_new() {
        assert!(Day::new(31, year(2024), month(1)).is_ok());
        assert!(Day::new(29, year(2023), month(2)).is_err());
        assert!(Day::new(29, year(2024), month(2)).is_ok());
        assert!(Day::new(31, year(2024), month(4)).is_err());
        assert!(matches!(
            Day::new(0, year(2024), month(1)),
            Err(CalendarError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn test_day_last_of() {
        assert_eq!(Day::last_of(year(1972), month(2)).get(), 29);
        assert_eq!(Day::last_of(year(1970), month(2)).get(), 28);
        assert_eq!(Day::last_of(year(1970), month(9)).get(), 30);
        assert_eq!(Day::last_of(year(1970), month(12)).get(), 31);
    }

    #[test]
    fn test_calendar_date_new_reports_first_problem() {
        assert!(matches!(
            CalendarDate::new(0, 13, 40),
            Err(CalendarError::InvalidYear(0))
        ));
        assert!(matches!(
            CalendarDate::new(1970, 13, 40),
            Err(CalendarError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::new(1970, 2, 31),
            Err(CalendarError::InvalidDay {
                year: 1970,
                month: 2,
                day: 31
            })
        ));
    }

    #[test]
    fn test_calendar_date_ordering() {
        let a = CalendarDate::new(1970, 12, 31).unwrap();
        let b = CalendarDate::new(1971, 1, 1).unwrap();
        let c = CalendarDate::new(1971, 1, 2).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_calendar_date_display_and_parse() {
        let date = CalendarDate::new(812, 3, 5).unwrap();
        assert_eq!(date.to_string(), "0812-03-05");
        assert_eq!("0812-03-05".parse::<CalendarDate>().unwrap(), date);
    }

    #[test]
    fn test_calendar_date_parse_rejects_loose_forms() {
        for input in [
            "812-03-05",
            "1970-3-05",
            "1970/03/05",
            "1970-03",
            "05-03-1970",
            "abcd-ef-gh",
        ] {
            assert!(
                matches!(
                    input.parse::<CalendarDate>(),
                    Err(FuzzyDateError::InvalidDateFormat(_))
                ),
                "{input} should be rejected"
            );
        }
        assert!(matches!(
            "1970-02-30".parse::<CalendarDate>(),
            Err(FuzzyDateError::InvalidCalendarDate(_))
        ));
    }

    #[test]
    fn test_calendar_date_serde() {
        let date = CalendarDate::new(1970, 10, 25).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1970-10-25""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""1970-02-29""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 1972,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 1970,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 1600,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(1970, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(1972, 2), 29);
    }

    #[test]
    fn test_days_in_month_out_of_range() {
        assert_eq!(days_in_month(1970, 0), 0);
        assert_eq!(days_in_month(1970, 13), 0);
        assert_eq!(days_in_month(1972, u8::MAX), 0);
    }
}
