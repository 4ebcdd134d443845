//! Builders shared by the unit tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{NaiveDate, NaiveDateTime};

use crate::Date;

static GLOBAL_CULTURE: Mutex<()> = Mutex::new(());

pub fn date(year: i32, month: u32, day: u32) -> Date {
    Date::from_components(year, month, day).expect("test date should be valid")
}

pub fn naive(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should be valid")
}

pub fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    naive(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("test time should be valid")
}

/// Serializes tests that touch `CultureProvider::global()`.
pub fn lock_global_culture() -> MutexGuard<'static, ()> {
    GLOBAL_CULTURE.lock().unwrap_or_else(PoisonError::into_inner)
}
