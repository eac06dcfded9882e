//! Property-based tests for date resolution.

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

use super::resolver::DateResolver;

/// Any date between 1900-01-01 and 2100-12-31.
fn supported_date() -> impl Strategy<Value = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    (0u64..73_414).prop_map(move |offset| start + Days::new(offset))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// ISO text round-trips for every supported date.
    #[test]
    fn prop_iso_round_trip(date in supported_date()) {
        let text = DateResolver::format_iso(date);
        prop_assert_eq!(DateResolver::resolve(text.as_str()), Some(date));
        prop_assert_eq!(DateResolver::format_iso(DateResolver::resolve(text.as_str()).unwrap()), text);
    }

    /// Day-first text with day > 12 is unambiguous and round-trips.
    #[test]
    fn prop_unambiguous_day_first_round_trip(
        date in supported_date().prop_filter("day > 12", |d| d.day() > 12),
    ) {
        let text = DateResolver::format_day_first(date);
        let resolved = DateResolver::resolve(text.as_str());
        prop_assert_eq!(resolved, Some(date));
        prop_assert_eq!(DateResolver::format_day_first(resolved.unwrap()), text);
    }

    /// Both resolvers agree on every day-first string.
    #[test]
    fn prop_strict_and_heuristic_agree_on_day_first(date in supported_date()) {
        let text = DateResolver::format_day_first(date);
        prop_assert_eq!(
            DateResolver::resolve_day_first(text.as_str()),
            DateResolver::resolve(text.as_str())
        );
    }

    /// Arbitrary text never panics.
    #[test]
    fn prop_resolve_is_total(text in ".{0,40}") {
        let _ = DateResolver::resolve(text.as_str());
        let _ = DateResolver::resolve_day_first(text.as_str());
    }
}
