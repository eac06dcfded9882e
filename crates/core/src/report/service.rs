//! Report assembly.

use chrono::NaiveDate;

use super::types::{AssetReport, ReportRow};
use crate::asset::Asset;
use crate::dates::DateResolver;
use crate::statistics::StatisticsAggregator;
use crate::valuation::DepreciationEngine;

/// Builds [`AssetReport`]s.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Values every asset and aggregates the portfolio as of `today`.
    ///
    /// Rows keep the input order.
    #[must_use]
    pub fn build(assets: &[Asset], today: NaiveDate) -> AssetReport {
        let rows = assets
            .iter()
            .map(|asset| {
                let valuation = DepreciationEngine::valuate(asset, today);
                ReportRow {
                    asset_id: asset.id.to_string(),
                    name: asset.name.clone(),
                    status: asset.status,
                    age: valuation.age_label,
                    purchase_value: asset.purchase_value.amount(),
                    book_value: valuation.book_value,
                    depreciation_percent: valuation.depreciation_percent,
                    disposal_date: asset
                        .effective_disposal_date()
                        .map(DateResolver::format_day_first),
                }
            })
            .collect();

        AssetReport {
            as_of: today,
            rows,
            statistics: StatisticsAggregator::aggregate(assets, today),
        }
    }
}
