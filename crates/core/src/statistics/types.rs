//! Statistics data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::asset::AssetStatus;

/// Key used for assets without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Key used for assets without a department.
pub const UNASSIGNED_DEPARTMENT: &str = "Unassigned";

/// Totals for one status bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusTotals {
    /// Sum of purchase values.
    pub purchased_value: Decimal,
    /// Sum of book values. Always zero for statuses excluded from book value.
    pub book_value: Decimal,
    /// Number of assets.
    pub count: u64,
}

/// Count and purchased value for a category or department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupTotals {
    /// Number of assets.
    pub count: u64,
    /// Sum of purchase values.
    pub purchased_value: Decimal,
}

/// Portfolio statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetStatistics {
    /// Totals for every status, including empty ones.
    pub by_status: BTreeMap<AssetStatus, StatusTotals>,
    /// Purchase value of available and assigned assets.
    pub active_items_purchased_value: Decimal,
    /// Book value of available and assigned assets.
    pub active_items_book_value: Decimal,
    /// Book value written off through lost assets.
    pub loss_on_lost: Decimal,
    /// Book value written off through damaged assets.
    pub loss_on_damaged: Decimal,
    /// Purchase value of every asset.
    pub total_purchased_value: Decimal,
    /// Book value of every asset not excluded from book value.
    pub total_book_value: Decimal,
    /// Number of assets.
    pub total_count: u64,
    /// Breakdown by category.
    pub by_category: BTreeMap<String, GroupTotals>,
    /// Breakdown by department.
    pub by_department: BTreeMap<String, GroupTotals>,
}

impl Default for AssetStatistics {
    fn default() -> Self {
        Self {
            by_status: AssetStatus::ALL
                .into_iter()
                .map(|status| (status, StatusTotals::default()))
                .collect(),
            active_items_purchased_value: Decimal::ZERO,
            active_items_book_value: Decimal::ZERO,
            loss_on_lost: Decimal::ZERO,
            loss_on_damaged: Decimal::ZERO,
            total_purchased_value: Decimal::ZERO,
            total_book_value: Decimal::ZERO,
            total_count: 0,
            by_category: BTreeMap::new(),
            by_department: BTreeMap::new(),
        }
    }
}

impl AssetStatistics {
    /// Totals for one status.
    #[must_use]
    pub fn status(&self, status: AssetStatus) -> StatusTotals {
        self.by_status.get(&status).copied().unwrap_or_default()
    }

    /// Combined loss on lost and damaged assets.
    #[must_use]
    pub fn total_loss(&self) -> Decimal {
        self.loss_on_lost.saturating_add(self.loss_on_damaged)
    }
}

/// Values for a category filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryValues {
    /// The category filtered on; `None` means every asset.
    pub category: Option<String>,
    /// Number of matching assets.
    pub count: u64,
    /// Sum of purchase values.
    pub purchased_value: Decimal,
    /// Sum of book values, excluding lost and damaged assets.
    pub book_value: Decimal,
}
