//! Property-based tests for `Date`
//!
//! These tests use proptest to verify invariants across many random inputs.

use plain_date::{Culture, Date, NaiveDateTime, NullableDate, TimeDelta, days_in_month};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Every year a `Date` can hold, negative years included.
fn any_year() -> impl Strategy<Value = i32> {
    Date::EMPTY.year()..=Date::MAX.year()
}

fn any_date() -> impl Strategy<Value = Date> {
    (any_year(), 1u32..=12)
        .prop_flat_map(|(year, month)| (Just(year), Just(month), 1..=days_in_month(year, month)))
        .prop_map(|(year, month, day)| Date::from_components(year, month, day).unwrap())
}

fn any_optional_date() -> impl Strategy<Value = Option<Date>> {
    prop_oneof![Just(None), any_date().prop_map(Some)]
}

// ============================================================================
// Construction
// ============================================================================

mod construction_tests {
    use super::*;

    proptest! {
        #[test]
        fn time_of_day_is_discarded(date in any_date(), seconds in 0i64..86_400) {
            let midnight = date.to_timestamp();
            let later = midnight + TimeDelta::seconds(seconds);
            prop_assert_eq!(Date::from(midnight), Date::from(later));
        }

        #[test]
        fn components_round_trip(year in any_year(), month in 1u32..=12, day in 1u32..=28) {
            let date = Date::from_components(year, month, day).unwrap();
            prop_assert_eq!(date.to_components(), (year, month, day));
        }

        #[test]
        fn invalid_months_rejected(year in any_year(), month in 13u32..1000, day in 1u32..=28) {
            prop_assert!(Date::from_components(year, month, day).is_err());
        }

        #[test]
        fn days_past_month_end_rejected(year in any_year(), month in 1u32..=12, extra in 1u32..10) {
            let day = days_in_month(year, month) + extra;
            prop_assert!(Date::from_components(year, month, day).is_err());
        }
    }
}

// ============================================================================
// Equality and ordering
// ============================================================================

mod ordering_tests {
    use super::*;

    proptest! {
        #[test]
        fn ordering_agrees_with_equality(a in any_date(), b in any_date()) {
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn ordering_is_transitive(a in any_date(), b in any_date(), c in any_date()) {
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
        }

        #[test]
        fn native_equality_strips_time(date in any_date(), seconds in 1i64..86_400) {
            let timestamp: NaiveDateTime = date.to_timestamp() + TimeDelta::seconds(seconds);
            prop_assert!(date == timestamp);
            prop_assert!(date.to_timestamp() != timestamp);
        }

        #[test]
        fn absent_dates_never_order(date in any_optional_date()) {
            let none: Option<Date> = None;
            prop_assert!(!none.date_lt(date));
            prop_assert!(!none.date_le(date));
            prop_assert!(!none.date_gt(date));
            prop_assert!(!none.date_ge(date));
            prop_assert!(!date.date_lt(none));
            prop_assert!(!date.date_ge(none));
            prop_assert_eq!(none.date_eq(date), date.is_none());
        }

        #[test]
        fn timestamps_compare_by_day_when_present(
            date in any_optional_date(),
            other in any_optional_date(),
            seconds in 0i64..86_400,
        ) {
            let timestamp = other.map(|day| day.to_timestamp() + TimeDelta::seconds(seconds));
            prop_assert_eq!(date.date_eq(timestamp), date.date_eq(other));
            prop_assert_eq!(date.date_lt(timestamp), date.date_lt(other));
            prop_assert_eq!(date.date_ge(timestamp), date.date_ge(other));
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

mod arithmetic_tests {
    use super::*;

    proptest! {
        #[test]
        fn adding_and_removing_days_is_identity(date in any_date(), days in -10_000i64..10_000) {
            let there = date.add_days(days);
            prop_assume!(there.is_ok());
            let there = there.unwrap();
            prop_assert_eq!(there.add_days(-days).unwrap(), date);
        }

        #[test]
        fn adding_days_moves_forward(date in any_date(), days in 1i64..10_000) {
            let later = date.add_days(days);
            prop_assume!(later.is_ok());
            prop_assert!(later.unwrap() > date);
        }

        #[test]
        fn adding_months_never_overshoots_month_end(date in any_date(), months in -120i32..120) {
            let shifted = date.add_months(months);
            prop_assume!(shifted.is_ok());
            let shifted = shifted.unwrap();
            prop_assert!(shifted.day() <= date.day());
        }
    }
}

// ============================================================================
// Formatting, parsing and serialization
// ============================================================================

mod text_tests {
    use super::*;

    proptest! {
        #[test]
        fn short_date_parses_back(date in any_date(), index in 0usize..Culture::BUILT_IN.len()) {
            let culture = Culture::BUILT_IN[index];
            let text = date.to_short_date_string_in(&culture);
            prop_assert_eq!(Date::parse(&text, Some(&culture)), Ok(date));
        }

        #[test]
        fn long_date_parses_back(date in any_date(), index in 0usize..Culture::BUILT_IN.len()) {
            let culture = Culture::BUILT_IN[index];
            let text = date.to_long_date_string_in(&culture);
            prop_assert_eq!(Date::parse(&text, Some(&culture)), Ok(date));
        }

        #[test]
        fn iso_pattern_is_culture_independent(date in any_date(), index in 0usize..Culture::BUILT_IN.len()) {
            let culture = Culture::BUILT_IN[index];
            let sign = if date.year() < 0 { "-" } else { "" };
            let expected = format!(
                "{sign}{:04}-{:02}-{:02}",
                date.year().unsigned_abs(),
                date.month(),
                date.day()
            );
            prop_assert_eq!(date.format(Some("yyyy-MM-dd"), Some(&culture)), expected);
        }

        #[test]
        fn iso_pattern_parses_back(date in any_date(), index in 0usize..Culture::BUILT_IN.len()) {
            let culture = Culture::BUILT_IN[index];
            let text = date.format(Some("yyyy-MM-dd"), Some(&culture));
            prop_assert_eq!(Date::parse(&text, Some(&culture)), Ok(date));
        }


        #[test]
        fn serde_round_trip(date in any_date()) {
            let json = serde_json::to_string(&date).unwrap();
            let parsed: Date = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, date);
        }
    }
}
