//! Property-based tests for valuation.
//!
//! - Book value and depreciation percent stay in range
//! - Book value never increases with age
//! - Full write-off once rate x age reaches 100%
//! - Disposed assets stop depreciating at their disposal date

use assetlens_shared::types::Money;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::depreciation::DepreciationEngine;
use crate::asset::{AssetStatus, DepreciationRate};

/// Purchase values from 0.00 to 10,000,000.00.
fn purchase_value() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Rates from -50% to 150% so clamping is exercised.
fn any_rate() -> impl Strategy<Value = DepreciationRate> {
    (-5_000i64..15_000i64).prop_map(|bp| DepreciationRate::new(Decimal::new(bp, 2)))
}

/// Ages from 0 to 60 years with 4 decimal places.
fn age() -> impl Strategy<Value = Decimal> {
    (0i64..600_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Book value lies in [0, value] and percent in [0, 100].
    #[test]
    fn prop_results_in_range(
        value in purchase_value(),
        rate in any_rate(),
        age in age(),
    ) {
        let result = DepreciationEngine::depreciate_for_age(value, rate, age);
        let amount = value.amount();

        prop_assert!(result.book_value >= Decimal::ZERO);
        prop_assert!(result.book_value <= amount);
        prop_assert!(result.depreciation_percent >= Decimal::ZERO);
        prop_assert!(result.depreciation_percent <= Decimal::ONE_HUNDRED);
    }

    /// Older assets are never worth more.
    #[test]
    fn prop_book_value_monotonic_in_age(
        value in purchase_value(),
        rate in any_rate(),
        younger in age(),
        extra in age(),
    ) {
        let older = younger + extra;
        let young_result = DepreciationEngine::depreciate_for_age(value, rate, younger);
        let old_result = DepreciationEngine::depreciate_for_age(value, rate, older);

        prop_assert!(old_result.book_value <= young_result.book_value);
    }

    /// rate x age >= 100% writes the asset off completely.
    #[test]
    fn prop_full_write_off_when_capped(
        cents in 1i64..1_000_000_000i64,
        rate_pct in 1i64..=100i64,
        surplus in 0i64..50i64,
    ) {
        let value = Money::new(Decimal::new(cents, 2));
        let rate = DepreciationRate::new(Decimal::from(rate_pct));
        // Smallest age reaching 100%, plus a surplus
        let age = Decimal::ONE_HUNDRED / Decimal::from(rate_pct) + Decimal::from(surplus);

        let result = DepreciationEngine::depreciate_for_age(value, rate, age);
        prop_assert_eq!(result.book_value, Decimal::ZERO);
        prop_assert_eq!(result.depreciation_percent, Decimal::ONE_HUNDRED);
    }

    /// A retired asset is valued as of its disposal date, whatever "today" is.
    #[test]
    fn prop_disposal_freezes_book_value(
        value in purchase_value(),
        rate in any_rate(),
        held_days in 0u64..7_000,
        later_a in 0u64..10_000,
        later_b in 0u64..10_000,
    ) {
        let purchased = base_date();
        let disposed = purchased + Days::new(held_days);
        let today_a = disposed + Days::new(later_a);
        let today_b = disposed + Days::new(later_b);

        let a = DepreciationEngine::depreciate(
            value, rate, Some(purchased), AssetStatus::Retired, Some(disposed), today_a,
        );
        let b = DepreciationEngine::depreciate(
            value, rate, Some(purchased), AssetStatus::Retired, Some(disposed), today_b,
        );
        prop_assert_eq!(a, b);
    }

    /// Non-disposed assets ignore a stray disposal date.
    #[test]
    fn prop_active_assets_ignore_disposal_date(
        value in purchase_value(),
        held_days in 1u64..3_000,
        later in 400u64..3_000,
    ) {
        let purchased = base_date();
        let disposed = purchased + Days::new(held_days);
        let today = disposed + Days::new(later);
        let rate = DepreciationRate::default();

        let with_stray = DepreciationEngine::depreciate(
            value, rate, Some(purchased), AssetStatus::Assigned, Some(disposed), today,
        );
        let without = DepreciationEngine::depreciate(
            value, rate, Some(purchased), AssetStatus::Assigned, None, today,
        );
        prop_assert_eq!(with_stray, without);
    }
}
