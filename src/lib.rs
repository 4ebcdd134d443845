//! A calendar date without time of day or time zone, built on chrono.
//!
//! [`Date`] normalizes any timestamp to its calendar day, compares and hashes
//! by that day alone, and formats and parses with culture conventions taken
//! from a [`Culture`] or, when none is given, from the [`CultureProvider`].

mod absent;
mod consts;
mod convert;
mod culture;
mod error;
mod format;
mod parse;
mod prelude;
mod provider;
#[cfg(test)]
mod test_utils;
mod types;

pub use absent::{DateOperand, NullableDate};
pub use chrono::{NaiveDateTime, TimeDelta, Weekday};
pub use consts::*;
pub use convert::{BaseConverter, DateConverter, TypeConverter, Value, ValueKind};
pub use culture::{CalendarNames, Culture, DateOrder};
pub use error::{DateError, FormatError, RangeError};
pub use provider::{CultureGuard, CultureProvider, LOCALE_ENV_VARS, host_culture};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A calendar date: year, month and day, nothing else.
///
/// Built from a timestamp, the time of day is dropped. Equality, ordering and
/// hashing look at the date alone, so a `Date` can key a `HashMap` or a
/// `BTreeMap` directly. An absent date is spelled `Option<Date>`; see
/// [`NullableDate`] for its comparison rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize)]
#[serde(try_from = "PersistedDate", into = "PersistedDate")]
pub struct Date(NaiveDate);

/// The persisted form of a [`Date`]: its midnight timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDate {
    pub value: Option<NaiveDateTime>,
}

impl Date {
    /// The date of the earliest representable timestamp. A sentinel, not
    /// the same thing as an absent date.
    pub const EMPTY: Self = Self(NaiveDate::MIN);

    /// The latest representable date.
    pub const MAX: Self = Self(NaiveDate::MAX);

    /// Truncates a timestamp to its calendar day.
    pub fn from_timestamp(timestamp: NaiveDateTime) -> Self {
        Self(timestamp.date())
    }

    /// Creates a date from its components
    ///
    /// # Errors
    /// Returns a `RangeError` naming the first component that does not fit:
    /// the year, then the month, then the day for that month.
    pub fn from_components(year: i32, month: u32, day: u32) -> Result<Self, RangeError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Self::new(year, month, day)
    }

    /// Creates a date from validated components
    ///
    /// # Errors
    /// Returns `RangeError::InvalidDay` if `day` was validated against a
    /// different year or month.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, RangeError> {
        NaiveDate::from_ymd_opt(year.get(), month.get(), day.get())
            .map(Self)
            .ok_or(RangeError::InvalidDay {
                year: year.get(),
                month: month.get(),
                day: day.get(),
            })
    }

    /// Parses a date under `culture`, or under the current culture when `None`.
    ///
    /// # Errors
    /// Returns a `FormatError` if the text is not a date in that culture.
    pub fn parse(text: &str, culture: Option<&Culture>) -> Result<Self, FormatError> {
        Self::parse_using(text, culture, CultureProvider::global())
    }

    /// Like [`parse`](Self::parse), falling back to `provider` instead of the
    /// global provider.
    ///
    /// # Errors
    /// Returns a `FormatError` if the text is not a date in that culture.
    pub fn parse_using(
        text: &str,
        culture: Option<&Culture>,
        provider: &CultureProvider,
    ) -> Result<Self, FormatError> {
        parse::parse(text, &provider.resolve(culture))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn day_of_week(&self) -> Weekday {
        self.0.weekday()
    }

    /// 1-based day of the year
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Returns (year, month, day)
    pub fn to_components(&self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day())
    }

    /// Midnight at the start of this date.
    pub fn to_timestamp(self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    pub const fn to_naive_date(self) -> NaiveDate {
        self.0
    }

    /// Adds (or with a negative `days`, subtracts) whole days.
    ///
    /// # Errors
    /// Returns `RangeError::Overflow` past the representable range.
    pub fn add_days(self, days: i64) -> Result<Self, RangeError> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .ok_or(RangeError::Overflow)
    }

    /// Adds calendar months, clamping the day to the end of a shorter month
    /// (January 31 plus one month is the last day of February).
    ///
    /// # Errors
    /// Returns `RangeError::Overflow` past the representable range.
    pub fn add_months(self, months: i32) -> Result<Self, RangeError> {
        let delta = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.0.checked_add_months(delta)
        } else {
            self.0.checked_sub_months(delta)
        };
        shifted.map(Self).ok_or(RangeError::Overflow)
    }

    /// Adds calendar years; February 29 becomes February 28 in a common year.
    ///
    /// # Errors
    /// Returns `RangeError::Overflow` past the representable range.
    pub fn add_years(self, years: i32) -> Result<Self, RangeError> {
        let months = years.checked_mul(12).ok_or(RangeError::Overflow)?;
        self.add_months(months)
    }

    /// Midnight of this date plus a time offset. Returns a full timestamp,
    /// not a `Date`.
    ///
    /// # Errors
    /// Returns `RangeError::Overflow` past the representable range.
    pub fn add_time(self, hours: i64, minutes: i64, seconds: i64) -> Result<NaiveDateTime, RangeError> {
        let delta = [
            TimeDelta::try_hours(hours),
            TimeDelta::try_minutes(minutes),
            TimeDelta::try_seconds(seconds),
        ]
        .into_iter()
        .try_fold(TimeDelta::zero(), |total, part| total.checked_add(&part?))
        .ok_or(RangeError::Overflow)?;

        self.add_duration(delta)
    }

    /// Midnight of this date plus `duration`.
    ///
    /// # Errors
    /// Returns `RangeError::Overflow` past the representable range.
    pub fn add_duration(self, duration: TimeDelta) -> Result<NaiveDateTime, RangeError> {
        self.to_timestamp()
            .checked_add_signed(duration)
            .ok_or(RangeError::Overflow)
    }

    /// Short date in the current culture. Same as `to_string()`.
    pub fn to_short_date_string(&self) -> String {
        self.format(None, None)
    }

    pub fn to_short_date_string_in(&self, culture: &Culture) -> String {
        format::render(self.0, culture.short_date_pattern(), culture)
    }

    /// Long date in the current culture.
    pub fn to_long_date_string(&self) -> String {
        self.format(Some(LONG_DATE_SPEC), None)
    }

    pub fn to_long_date_string_in(&self, culture: &Culture) -> String {
        format::render(self.0, culture.long_date_pattern(), culture)
    }

    /// Formats with a format spec and culture.
    ///
    /// `spec` of `None` or [`SHORT_DATE_SPEC`] gives the short date,
    /// [`LONG_DATE_SPEC`] the long date, and anything else is used as a custom
    /// pattern such as `"yyyy-MM-dd"`. An empty spec is an empty custom
    /// pattern and renders as `""`. `culture` of `None` uses
    /// [`CultureProvider::global`].
    pub fn format(&self, spec: Option<&str>, culture: Option<&Culture>) -> String {
        self.format_using(spec, culture, CultureProvider::global())
    }

    /// Like [`format`](Self::format), falling back to `provider` instead of
    /// the global provider.
    pub fn format_using(&self, spec: Option<&str>, culture: Option<&Culture>, provider: &CultureProvider) -> String {
        let culture = provider.resolve(culture);
        let pattern = match spec {
            None | Some(SHORT_DATE_SPEC) => culture.short_date_pattern(),
            Some(LONG_DATE_SPEC) => culture.long_date_pattern(),
            Some(custom) => custom,
        };
        format::render(self.0, pattern, &culture)
    }

    /// Three-way comparison against a dynamically typed value.
    ///
    /// Dates and timestamps compare by calendar day. A null value, or an
    /// empty optional timestamp, sorts before every date.
    ///
    /// # Errors
    /// Returns `DateError::TypeMismatch` for values that are not date-like.
    pub fn compare_value(&self, other: &Value) -> Result<Ordering, DateError> {
        Ok(other
            .as_date()?
            .map_or(Ordering::Greater, |other| self.cmp(&other)))
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<NaiveDateTime> for Date {
    fn from(timestamp: NaiveDateTime) -> Self {
        Self::from_timestamp(timestamp)
    }
}

impl From<Date> for NaiveDateTime {
    fn from(date: Date) -> Self {
        date.to_timestamp()
    }
}

impl TryFrom<(i32, u32, u32)> for Date {
    type Error = RangeError;

    fn try_from(value: (i32, u32, u32)) -> Result<Self, Self::Error> {
        Self::from_components(value.0, value.1, value.2)
    }
}

/// Compares against the timestamp's calendar day; its time of day is ignored.
impl PartialEq<NaiveDateTime> for Date {
    fn eq(&self, other: &NaiveDateTime) -> bool {
        self.0 == other.date()
    }
}

impl PartialOrd<NaiveDateTime> for Date {
    fn partial_cmp(&self, other: &NaiveDateTime) -> Option<Ordering> {
        Some(self.0.cmp(&other.date()))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_short_date_string())
    }
}

impl FromStr for Date {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

impl From<Date> for PersistedDate {
    fn from(date: Date) -> Self {
        Self {
            value: Some(date.to_timestamp()),
        }
    }
}

impl TryFrom<PersistedDate> for Date {
    type Error = DateError;

    fn try_from(persisted: PersistedDate) -> Result<Self, Self::Error> {
        error::require(persisted.value, "value").map(Self::from_timestamp)
    }
}
