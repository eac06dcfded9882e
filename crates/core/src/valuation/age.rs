//! Asset age calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::duration::{DAYS_PER_YEAR, ElapsedParts, whole_days_between};
use crate::asset::AssetStatus;

/// Label for assets without a usable purchase date.
pub const UNKNOWN_AGE_LABEL: &str = "Unknown";

/// Label for assets whose purchase date lies after the end date.
pub const FUTURE_DATE_LABEL: &str = "Future Date";

/// Computes elapsed time since purchase.
pub struct AssetAgeCalculator;

impl AssetAgeCalculator {
    /// End of the age window: the disposal date for disposed assets that
    /// have one, `today` otherwise.
    #[must_use]
    pub fn end_date_for(
        status: AssetStatus,
        disposal_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> NaiveDate {
        match disposal_date {
            Some(disposed_on) if status.is_disposed() => disposed_on,
            _ => today,
        }
    }

    /// Fractional years from purchase to `end_date`.
    ///
    /// Returns zero for an unknown purchase date or a purchase after `end_date`.
    #[must_use]
    pub fn age_in_years(purchase_date: Option<NaiveDate>, end_date: NaiveDate) -> Decimal {
        let Some(purchased_on) = purchase_date else {
            return Decimal::ZERO;
        };

        let days = whole_days_between(purchased_on, end_date);
        if days <= 0 {
            return Decimal::ZERO;
        }

        Decimal::from(days) / DAYS_PER_YEAR
    }

    /// Human-readable age, frozen at the disposal date for disposed assets.
    ///
    /// ```
    /// use assetlens_core::asset::AssetStatus;
    /// use assetlens_core::valuation::AssetAgeCalculator;
    /// use chrono::NaiveDate;
    ///
    /// let purchased = NaiveDate::from_ymd_opt(2022, 1, 1);
    /// let today = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap();
    /// let label = AssetAgeCalculator::age_label(purchased, AssetStatus::Assigned, None, today);
    /// assert_eq!(label, "2 Years 3 Months");
    /// ```
    #[must_use]
    pub fn age_label(
        purchase_date: Option<NaiveDate>,
        status: AssetStatus,
        disposal_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> String {
        let Some(purchased_on) = purchase_date else {
            return UNKNOWN_AGE_LABEL.to_string();
        };

        let end_date = Self::end_date_for(status, disposal_date, today);
        let days = whole_days_between(purchased_on, end_date);
        if days < 0 {
            return FUTURE_DATE_LABEL.to_string();
        }

        ElapsedParts::from_days(days).label()
    }
}
