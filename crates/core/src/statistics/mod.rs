//! Portfolio statistics.
//!
//! Rolls every asset's derived book value up by status, category and
//! department. Lost and damaged assets are reported as losses rather than
//! as book value.

pub mod aggregator;
pub mod types;


pub use aggregator::StatisticsAggregator;
pub use types::{AssetStatistics, CategoryValues, GroupTotals, StatusTotals};
