//! Straight-line depreciation and book value.
//!
//! Depreciation is simple (non-compounding): `value * rate * years`, applied
//! once per valuation and capped at the full purchase value. Disposed assets
//! are valued as of their disposal date.

use assetlens_shared::types::Money;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::age::AssetAgeCalculator;
use super::types::{Depreciation, DerivedValuation};
use crate::asset::{Asset, AssetStatus, DepreciationRate};

/// Depreciation engine.
pub struct DepreciationEngine;

impl DepreciationEngine {
    /// Depreciates a purchase value over an already-known age.
    ///
    /// ```
    /// use assetlens_core::asset::DepreciationRate;
    /// use assetlens_core::valuation::DepreciationEngine;
    /// use assetlens_shared::types::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let result = DepreciationEngine::depreciate_for_age(
    ///     Money::new(dec!(100000)),
    ///     DepreciationRate::new(dec!(20)),
    ///     dec!(3),
    /// );
    /// assert_eq!(result.book_value, dec!(40000));
    /// assert_eq!(result.depreciation_percent, dec!(60));
    /// ```
    #[must_use]
    pub fn depreciate_for_age(
        purchase_value: Money,
        rate: DepreciationRate,
        age_in_years: Decimal,
    ) -> Depreciation {
        let value = purchase_value.amount();

        if age_in_years <= Decimal::ZERO {
            return Depreciation {
                age_in_years: Decimal::ZERO,
                depreciation_percent: Decimal::ZERO,
                book_value: value,
            };
        }

        // An overflowing product is necessarily larger than the value itself.
        let raw = value
            .checked_mul(rate.fraction())
            .and_then(|v| v.checked_mul(age_in_years))
            .unwrap_or(value);
        let capped = raw.min(value);

        // Rounding must not lift a fractional value above what was paid.
        let book_value = round_whole(value - capped).clamp(Decimal::ZERO, value);
        let depreciation_percent = if value.is_zero() {
            Decimal::ZERO
        } else {
            round_whole(capped / value * Decimal::ONE_HUNDRED)
        };

        Depreciation {
            age_in_years: age_in_years.round_dp(2),
            depreciation_percent,
            book_value,
        }
    }

    /// Depreciates from purchase date to today, or to the disposal date for
    /// disposed assets.
    #[must_use]
    pub fn depreciate(
        purchase_value: Money,
        rate: DepreciationRate,
        purchase_date: Option<NaiveDate>,
        status: AssetStatus,
        disposal_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Depreciation {
        let end_date = AssetAgeCalculator::end_date_for(status, disposal_date, today);
        let age_in_years = AssetAgeCalculator::age_in_years(purchase_date, end_date);
        Self::depreciate_for_age(purchase_value, rate, age_in_years)
    }

    /// Full derived valuation of an asset.
    #[must_use]
    pub fn valuate(asset: &Asset, today: NaiveDate) -> DerivedValuation {
        let depreciation = Self::depreciate(
            asset.purchase_value,
            asset.depreciation_rate,
            asset.purchase_date,
            asset.status,
            asset.disposal_date,
            today,
        );

        DerivedValuation {
            age_in_years: depreciation.age_in_years,
            age_label: AssetAgeCalculator::age_label(
                asset.purchase_date,
                asset.status,
                asset.disposal_date,
                today,
            ),
            depreciation_percent: depreciation.depreciation_percent,
            book_value: depreciation.book_value,
        }
    }
}

fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetlens_shared::types::AssetId;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rate(percent: Decimal) -> DepreciationRate {
        DepreciationRate::new(percent)
    }

    #[test]
    fn test_partial_depreciation() {
        let result =
            DepreciationEngine::depreciate_for_age(Money::new(dec!(100000)), rate(dec!(20)), dec!(3));
        assert_eq!(result.book_value, dec!(40000));
        assert_eq!(result.depreciation_percent, dec!(60));
        assert_eq!(result.age_in_years, dec!(3));
    }

    #[test]
    fn test_depreciation_capped_at_full_value() {
        let result =
            DepreciationEngine::depreciate_for_age(Money::new(dec!(50000)), rate(dec!(30)), dec!(4));
        assert_eq!(result.book_value, dec!(0));
        assert_eq!(result.depreciation_percent, dec!(100));
    }

    #[test]
    fn test_zero_age_keeps_value_unrounded() {
        let result = DepreciationEngine::depreciate_for_age(
            Money::new(dec!(1234.56)),
            rate(dec!(20)),
            Decimal::ZERO,
        );
        assert_eq!(result.book_value, dec!(1234.56));
        assert_eq!(result.depreciation_percent, dec!(0));
        assert_eq!(result.age_in_years, dec!(0));
    }

    #[test]
    fn test_zero_value_guards_division() {
        let result = DepreciationEngine::depreciate_for_age(Money::zero(), rate(dec!(20)), dec!(2));
        assert_eq!(result.book_value, dec!(0));
        assert_eq!(result.depreciation_percent, dec!(0));
    }

    #[test]
    fn test_zero_rate_never_depreciates() {
        let result =
            DepreciationEngine::depreciate_for_age(Money::new(dec!(900)), rate(dec!(0)), dec!(10));
        assert_eq!(result.book_value, dec!(900));
        assert_eq!(result.depreciation_percent, dec!(0));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 1000 * 0.2 * 0.0025 = 0.5 depreciation -> book 999.5 -> 1000
        let result =
            DepreciationEngine::depreciate_for_age(Money::new(dec!(1000)), rate(dec!(20)), dec!(0.0025));
        assert_eq!(result.book_value, dec!(1000));
        assert_eq!(result.age_in_years, dec!(0.00));
    }

    #[test]
    fn test_fractional_value_never_rounds_up() {
        let value = Money::new(dec!(100.60));
        let at_purchase = DepreciationEngine::depreciate_for_age(value, rate(dec!(1)), Decimal::ZERO);
        let one_day = DepreciationEngine::depreciate_for_age(
            value,
            rate(dec!(1)),
            Decimal::ONE / crate::valuation::DAYS_PER_YEAR,
        );

        assert_eq!(at_purchase.book_value, dec!(100.60));
        assert_eq!(one_day.book_value, dec!(100.60));
        assert!(one_day.book_value <= at_purchase.book_value);
        assert_eq!(one_day.depreciation_percent, dec!(0));
    }

    #[test]
    fn test_huge_value_does_not_overflow() {
        let value = Money::new(Decimal::MAX);
        let result = DepreciationEngine::depreciate_for_age(value, rate(dec!(100)), dec!(200));
        assert_eq!(result.book_value, dec!(0));
        assert_eq!(result.depreciation_percent, dec!(100));
    }

    #[test]
    fn test_lost_asset_frozen_at_disposal() {
        let result = DepreciationEngine::depreciate(
            Money::new(dec!(100000)),
            rate(dec!(25)),
            Some(date(2023, 1, 10)),
            AssetStatus::Lost,
            Some(date(2024, 1, 10)),
            date(2025, 6, 1),
        );
        assert_eq!(result.depreciation_percent, dec!(25));
        assert_eq!(result.age_in_years, dec!(1.00));
        assert_eq!(result.book_value, dec!(75017));
    }

    #[test]
    fn test_disposed_without_date_runs_to_today() {
        let frozen = DepreciationEngine::depreciate(
            Money::new(dec!(1000)),
            rate(dec!(10)),
            Some(date(2020, 1, 1)),
            AssetStatus::Retired,
            None,
            date(2022, 1, 1),
        );
        // 731 days / 365.25 = 2.0014 years
        assert_eq!(frozen.depreciation_percent, dec!(20));
        assert_eq!(frozen.book_value, dec!(800));
    }

    #[test]
    fn test_future_purchase_not_depreciated() {
        let result = DepreciationEngine::depreciate(
            Money::new(dec!(5000)),
            rate(dec!(20)),
            Some(date(2030, 1, 1)),
            AssetStatus::Available,
            None,
            date(2025, 1, 1),
        );
        assert_eq!(result.book_value, dec!(5000));
        assert_eq!(result.depreciation_percent, dec!(0));
    }

    #[test]
    fn test_valuate_combines_age_and_depreciation() {
        let asset = Asset::new(
            AssetId::parse("LAP-9").unwrap(),
            Money::new(dec!(60000)),
            AssetStatus::Assigned,
        )
        .with_purchase_date(date(2022, 1, 1))
        .with_rate(rate(dec!(20)));

        let valuation = DepreciationEngine::valuate(&asset, date(2024, 4, 5));
        assert_eq!(valuation.age_label, "2 Years 3 Months");
        assert_eq!(valuation.age_in_years, dec!(2.26));
        assert_eq!(valuation.depreciation_percent, dec!(45));
        assert_eq!(valuation.book_value, dec!(32895));
    }

    #[test]
    fn test_valuate_unknown_purchase_date() {
        let asset = Asset::new(
            AssetId::parse("CHR-1").unwrap(),
            Money::new(dec!(300)),
            AssetStatus::Available,
        );
        let valuation = DepreciationEngine::valuate(&asset, date(2024, 4, 5));
        assert_eq!(valuation.age_label, "Unknown");
        assert_eq!(valuation.book_value, dec!(300));
        assert_eq!(valuation.depreciation_percent, dec!(0));
    }
}
