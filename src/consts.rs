/// Earliest LNMP year accepted by the parser (inclusive)
pub const MIN_LNMP_YEAR: u16 = 1900;
/// Latest LNMP year accepted by the parser (inclusive)
pub const MAX_LNMP_YEAR: u16 = 2100;

/// Maximum valid calendar year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, the last month that wraps back a year under Naegele's rule
pub const MARCH: u8 = 3;
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (`dd/mm/yyyy`)
pub const DATE_SEPARATOR: char = '/';
/// Exact length of an LNMP string
pub const DATE_TEXT_LEN: usize = 10;

/// Days added to the LNMP day under Naegele's rule
pub const EDD_DAY_OFFSET: u8 = 7;
/// Months taken off the LNMP month under Naegele's rule (or nine added, a year back)
pub const EDD_MONTH_OFFSET: u8 = 3;

/// Days in a week, used to split elapsed days into weeks
pub const DAYS_PER_WEEK: u32 = 7;
/// Seconds in a civil day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Minimum output capacity, in bytes, for a date written through the bridge
pub const DATE_STR_MAX_LEN: usize = 16;
/// Minimum output capacity, in bytes, for a WOA string written through the bridge
pub const WOA_STR_MAX_LEN: usize = 32;
