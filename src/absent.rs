//! Null-aware comparisons for optional dates.
//!
//! `Option<Date>`'s own `PartialOrd` sorts `None` first, which is what
//! containers want. These methods follow database-style null rules instead:
//! two absent dates are equal, and any ordering question involving an absent
//! date is answered `false`. The other side may be a date or a timestamp;
//! timestamps compare by calendar day, as `Date`'s own `PartialOrd` does.

use chrono::NaiveDateTime;

use crate::Date;

/// The right-hand side of a null-aware comparison.
pub trait DateOperand {
    /// The calendar day this operand stands for, or `None` when absent.
    fn to_date(self) -> Option<Date>;
}

impl DateOperand for Date {
    fn to_date(self) -> Option<Date> {
        Some(self)
    }
}

impl DateOperand for Option<Date> {
    fn to_date(self) -> Option<Date> {
        self
    }
}

impl DateOperand for NaiveDateTime {
    fn to_date(self) -> Option<Date> {
        Some(Date::from(self))
    }
}

impl DateOperand for Option<NaiveDateTime> {
    fn to_date(self) -> Option<Date> {
        self.map(Date::from)
    }
}

/// Comparisons and narrowing conversions for a date that may be absent.
pub trait NullableDate: Copy {
    /// Equal when both are absent or both hold the same date.
    fn date_eq(self, other: impl DateOperand) -> bool;

    fn date_ne(self, other: impl DateOperand) -> bool {
        !self.date_eq(other)
    }

    /// `false` whenever either side is absent.
    fn date_lt(self, other: impl DateOperand) -> bool;
    /// `false` whenever either side is absent.
    fn date_le(self, other: impl DateOperand) -> bool;
    /// `false` whenever either side is absent.
    fn date_gt(self, other: impl DateOperand) -> bool;
    /// `false` whenever either side is absent.
    fn date_ge(self, other: impl DateOperand) -> bool;

    /// Midnight of the date, or [`NaiveDateTime::MIN`] when absent.
    fn to_timestamp(self) -> NaiveDateTime;

    /// Midnight of the date, or `None` when absent.
    fn to_optional_timestamp(self) -> Option<NaiveDateTime>;
}

impl NullableDate for Option<Date> {
    fn date_eq(self, other: impl DateOperand) -> bool {
        self == other.to_date()
    }

    fn date_lt(self, other: impl DateOperand) -> bool {
        matches!((self, other.to_date()), (Some(a), Some(b)) if a < b)
    }

    fn date_le(self, other: impl DateOperand) -> bool {
        matches!((self, other.to_date()), (Some(a), Some(b)) if a <= b)
    }

    fn date_gt(self, other: impl DateOperand) -> bool {
        matches!((self, other.to_date()), (Some(a), Some(b)) if a > b)
    }

    fn date_ge(self, other: impl DateOperand) -> bool {
        matches!((self, other.to_date()), (Some(a), Some(b)) if a >= b)
    }

    fn to_timestamp(self) -> NaiveDateTime {
        self.map_or(NaiveDateTime::MIN, Date::to_timestamp)
    }

    fn to_optional_timestamp(self) -> Option<NaiveDateTime> {
        self.map(Date::to_timestamp)
    }
}
