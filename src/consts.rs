/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names used for prose rendering, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator used when rendering
pub const DATE_SEPARATOR: char = '-';
/// Alternative component separator accepted on input
pub const ALT_DATE_SEPARATOR: char = '/';

/// Leading marker for circa dates on input
pub const CIRCA_MARKER: &str = "c.";
/// Leading marker for uncertain dates on input
pub const UNCERTAIN_MARKER: char = '?';
/// Separator between the two ends of a rendered range
pub const RANGE_SEPARATOR: &str = " to ";

/// Separator between years in the compact year-only form
pub const YEAR_RANGE_SEPARATOR: char = '-';
/// Circa prefix in the compact year-only form
pub const YEAR_RANGE_CIRCA: &str = "c.";
/// Year-only rendering of a date that was never set
pub const YEAR_RANGE_UNDEFINED: &str = "?";
