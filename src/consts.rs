/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Last day offered by the day select (longest month)
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

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

/// Abbreviated month names, indexed by `month - 1`
pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names, indexed by `month - 1`
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

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Pattern applied when no `format` is configured
pub const DEFAULT_FORMAT: &str = "MMddyyyy";
/// Sentinel format meaning "no date fields, quick dates only"
pub const EMPTY_FORMAT: &str = "empty";

/// Pattern letter mapping to the day field
pub const DAY_PATTERN_CHAR: char = 'd';
/// Pattern letter mapping to the month field
pub const MONTH_PATTERN_CHAR: char = 'M';
/// Pattern letter mapping to the year field
pub const YEAR_PATTERN_CHAR: char = 'y';

/// Placeholder label heading the quick-dates select
pub const QUICK_DATES_LABEL: &str = "Quick Dates";

/// Years offered on each side of the bound value when no bound limits the
/// year select
pub const DEFAULT_YEAR_SPAN: u16 = 10;
