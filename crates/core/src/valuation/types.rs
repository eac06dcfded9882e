//! Valuation data types.

use assetlens_shared::config::ValuationConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::asset::DepreciationRate;

/// Policy knobs for the valuation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuationPolicy {
    /// Rate applied when a record carries none.
    pub default_depreciation_rate: DepreciationRate,
    /// Warranties ending within this many days are "Expiring Soon".
    pub expiring_soon_days: i64,
}

impl Default for ValuationPolicy {
    fn default() -> Self {
        Self {
            default_depreciation_rate: DepreciationRate::default(),
            expiring_soon_days: 30,
        }
    }
}

impl From<&ValuationConfig> for ValuationPolicy {
    fn from(config: &ValuationConfig) -> Self {
        Self {
            default_depreciation_rate: DepreciationRate::new(config.default_depreciation_rate),
            expiring_soon_days: config.expiring_soon_days.max(0),
        }
    }
}

/// Result of depreciating one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depreciation {
    /// Elapsed years used for the calculation, rounded to 2 places.
    pub age_in_years: Decimal,
    /// Share of purchase value written off, whole percent in `[0, 100]`.
    pub depreciation_percent: Decimal,
    /// Remaining value, whole units, never negative.
    pub book_value: Decimal,
}

/// Derived per-asset valuation. Never persisted; recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedValuation {
    /// Elapsed years, rounded to 2 places.
    pub age_in_years: Decimal,
    /// Human-readable age ("2 Years 3 Months", "Unknown", "Future Date").
    pub age_label: String,
    /// Whole percent written off.
    pub depreciation_percent: Decimal,
    /// Remaining value.
    pub book_value: Decimal,
}

/// Warranty classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarrantyStatus {
    /// More than the expiring-soon window remains.
    Active,
    /// Ends within the expiring-soon window.
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
    /// Already ended.
    Expired,
    /// Not enough information to tell.
    Unknown,
}

impl WarrantyStatus {
    /// Returns the display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::ExpiringSoon => "Expiring Soon",
            Self::Expired => "Expired",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for WarrantyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Warranty evaluation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyState {
    /// Classification.
    pub status: WarrantyStatus,
    /// Countdown or diagnostic message.
    pub message: String,
    /// Days until expiry (negative once expired); `None` when unknown.
    pub days_remaining: Option<i64>,
}

impl WarrantyState {
    /// Creates an `Unknown` state with a diagnostic message.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            status: WarrantyStatus::Unknown,
            message: message.into(),
            days_remaining: None,
        }
    }
}
