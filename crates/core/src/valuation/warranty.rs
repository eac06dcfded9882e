//! Warranty status evaluation from free-text warranty periods.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::duration::{DAYS_PER_MONTH, DAYS_PER_YEAR, ElapsedParts, whole_days_between};
use super::types::{ValuationPolicy, WarrantyState, WarrantyStatus};

/// First numeric token: `2`, `18`, `1.5`.
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("Invalid regex pattern"));

const NOT_AVAILABLE: &str = "Warranty information not available";
const INVALID_FORMAT: &str = "Invalid warranty period format";
const CALCULATION_ERROR: &str = "Error calculating warranty status";

/// Unit of a warranty period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarrantyUnit {
    /// Average years.
    Years,
    /// Average months.
    Months,
    /// Calendar days.
    Days,
}

/// A parsed warranty period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarrantyPeriod {
    /// Positive amount.
    pub amount: Decimal,
    /// Unit of `amount`.
    pub unit: WarrantyUnit,
}

impl WarrantyPeriod {
    /// Parses text like `"2 years"`, `"18 months"`, `"90 days"`, or a bare
    /// number (taken as months).
    ///
    /// Returns `None` when no positive number is present.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let lowered = text.trim().to_lowercase();
        let amount = AMOUNT_PATTERN
            .captures(&lowered)
            .and_then(|caps| caps.get(1))
            .and_then(|m| Decimal::from_str(m.as_str()).ok())?;

        if amount <= Decimal::ZERO {
            return None;
        }

        // Keyword precedence follows the order units are usually written in.
        let unit = if lowered.contains("year") {
            WarrantyUnit::Years
        } else if lowered.contains("month") {
            WarrantyUnit::Months
        } else if lowered.contains("day") {
            WarrantyUnit::Days
        } else {
            WarrantyUnit::Months
        };

        Some(Self { amount, unit })
    }

    /// Length in whole days (fractional days truncated).
    ///
    /// Returns `None` if the length does not fit in the supported range.
    #[must_use]
    pub fn whole_days(&self) -> Option<u64> {
        let per_unit = match self.unit {
            WarrantyUnit::Years => DAYS_PER_YEAR,
            WarrantyUnit::Months => DAYS_PER_MONTH,
            WarrantyUnit::Days => Decimal::ONE,
        };
        self.amount.checked_mul(per_unit)?.trunc().to_u64()
    }
}

/// Evaluates warranty coverage against a reference date.
pub struct WarrantyStatusEvaluator {
    expiring_soon_days: i64,
}

impl WarrantyStatusEvaluator {
    /// Creates an evaluator using the policy's expiring-soon window.
    #[must_use]
    pub const fn new(policy: &ValuationPolicy) -> Self {
        Self {
            expiring_soon_days: policy.expiring_soon_days,
        }
    }

    /// Parses a free-text warranty period.
    #[must_use]
    pub fn parse_period(text: &str) -> Option<WarrantyPeriod> {
        WarrantyPeriod::parse(text)
    }

    /// Classifies warranty coverage as of `today`. Never panics.
    ///
    /// ```
    /// use assetlens_core::valuation::{ValuationPolicy, WarrantyStatus, WarrantyStatusEvaluator};
    /// use chrono::NaiveDate;
    ///
    /// let evaluator = WarrantyStatusEvaluator::new(&ValuationPolicy::default());
    /// let state = evaluator.evaluate(
    ///     NaiveDate::from_ymd_opt(2024, 1, 1),
    ///     Some("18 months"),
    ///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    /// );
    /// assert_eq!(state.status, WarrantyStatus::Active);
    /// ```
    #[must_use]
    pub fn evaluate(
        &self,
        purchase_date: Option<NaiveDate>,
        warranty_period: Option<&str>,
        today: NaiveDate,
    ) -> WarrantyState {
        let (Some(purchased_on), Some(text)) = (
            purchase_date,
            warranty_period.filter(|t| !t.trim().is_empty()),
        ) else {
            return WarrantyState::unknown(NOT_AVAILABLE);
        };

        let Some(period) = Self::parse_period(text) else {
            tracing::debug!(warranty_period = text, "unparseable warranty period");
            return WarrantyState::unknown(INVALID_FORMAT);
        };

        let Some(ends_on) = period
            .whole_days()
            .and_then(|days| purchased_on.checked_add_days(Days::new(days)))
        else {
            return WarrantyState::unknown(CALCULATION_ERROR);
        };

        let days_until_expiry = whole_days_between(today, ends_on);
        let remaining = ElapsedParts::from_days(days_until_expiry).message();

        let (status, message) = if days_until_expiry < 0 {
            (WarrantyStatus::Expired, format!("Expired {remaining} ago"))
        } else if days_until_expiry == 0 {
            (WarrantyStatus::ExpiringSoon, "Expires today".to_string())
        } else if days_until_expiry <= self.expiring_soon_days {
            (WarrantyStatus::ExpiringSoon, format!("Expires in {remaining}"))
        } else {
            (WarrantyStatus::Active, format!("Expires in {remaining}"))
        };

        WarrantyState {
            status,
            message,
            days_remaining: Some(days_until_expiry),
        }
    }
}

impl Default for WarrantyStatusEvaluator {
    fn default() -> Self {
        Self::new(&ValuationPolicy::default())
    }
}
