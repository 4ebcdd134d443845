/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;

/// Month number for February
pub const FEBRUARY: u32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
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
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Last year a two-digit year expands into. `29` parses as 2029, `30` as 1930.
pub const TWO_DIGIT_YEAR_MAX: i32 = 2029;

/// Format spec selecting the culture's short date pattern
pub const SHORT_DATE_SPEC: &str = "d";
/// Format spec selecting the culture's long date pattern
pub const LONG_DATE_SPEC: &str = "D";

/// Placeholder in patterns replaced by the culture's date separator
pub const DATE_SEPARATOR_PLACEHOLDER: char = '/';
/// Time separator used by patterns and accepted by the parser
pub const TIME_SEPARATOR: char = ':';
/// Separator between the date and time halves of an ISO 8601 timestamp
pub const ISO_TIME_DESIGNATOR: char = 'T';

/// Era designator for the Gregorian calendar
pub const ERA_DESIGNATOR: &str = "A.D.";
