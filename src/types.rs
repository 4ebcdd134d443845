use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_DAY,
};
use crate::RangeError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A year value guaranteed to lie within the range chrono can represent.
/// Year 0 and negative years are valid (proleptic Gregorian, astronomical numbering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a new Year, validating that every day of it is representable
    ///
    /// # Errors
    /// Returns `RangeError::InvalidYear` if the year falls outside chrono's range.
    pub fn new(value: i32) -> Result<Self, RangeError> {
        let first = NaiveDate::from_ymd_opt(value, 1, 1);
        let last = NaiveDate::from_ymd_opt(value, MAX_MONTH, DAYS_IN_MONTH[MAX_MONTH as usize]);
        if first.is_none() || last.is_none() {
            return Err(RangeError::InvalidYear(value));
        }
        Ok(Self(value))
    }

    /// Returns the year value
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Year {
    type Error = RangeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `RangeError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u32) -> Result<Self, RangeError> {
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .filter(|month| u32::from(month.get()) <= MAX_MONTH)
            .map(Self)
            .ok_or(RangeError::InvalidMonth(value))
    }

    /// Returns the month value
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get() as u32
    }
}

impl TryFrom<u32> for Month {
    type Error = RangeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `RangeError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u32, year: Year, month: Month) -> Result<Self, RangeError> {
        let invalid = RangeError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };

        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid);
        }

        u8::try_from(value).ok().and_then(NonZeroU8::new).map(Self).ok_or(invalid)
    }

    /// Returns the day value
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get() as u32
    }
}

impl TryFrom<u32> for Day {
    type Error = RangeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so only check the bounds
        // every month shares
        let invalid = RangeError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        };
        if !(MIN_DAY..=DAYS_IN_MONTH[1]).contains(&value) {
            return Err(invalid);
        }
        u8::try_from(value).ok().and_then(NonZeroU8::new).map(Self).ok_or(invalid)
    }
}

impl From<Day> for u32 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
