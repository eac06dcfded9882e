//! Parallel statistics fold over an asset snapshot.

use chrono::NaiveDate;
use rayon::prelude::*;
use rust_decimal::Decimal;

use super::types::{
    AssetStatistics, CategoryValues, GroupTotals, StatusTotals, UNASSIGNED_DEPARTMENT,
    UNCATEGORIZED,
};
use crate::asset::{Asset, AssetStatus};
use crate::valuation::DepreciationEngine;

/// Aggregates derived valuations across a portfolio.
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    /// Aggregates every asset as of `today`.
    ///
    /// The slice is folded in parallel; partial results are merged with
    /// exact decimal addition, so the outcome does not depend on input order.
    #[must_use]
    pub fn aggregate(assets: &[Asset], today: NaiveDate) -> AssetStatistics {
        let stats = assets
            .par_iter()
            .fold(AssetStatistics::default, |mut acc, asset| {
                let book_value = DepreciationEngine::valuate(asset, today).book_value;
                acc.absorb(asset, book_value);
                acc
            })
            .reduce(AssetStatistics::default, AssetStatistics::merge);

        tracing::debug!(
            assets = stats.total_count,
            total_book_value = %stats.total_book_value,
            "aggregated asset statistics"
        );
        stats
    }

    /// Purchase and book value of the assets in one category.
    ///
    /// Category names match case-insensitively; `None` selects every asset.
    /// Lost and damaged assets count towards purchase value only.
    #[must_use]
    pub fn aggregate_filtered(
        assets: &[Asset],
        today: NaiveDate,
        category: Option<&str>,
    ) -> CategoryValues {
        let wanted = category.map(str::trim).filter(|c| !c.is_empty());

        let (count, purchased_value, book_value) = assets
            .par_iter()
            .filter(|asset| wanted.is_none_or(|c| category_key(asset).eq_ignore_ascii_case(c)))
            .map(|asset| {
                let book_value = if asset.status.excluded_from_book_value() {
                    Decimal::ZERO
                } else {
                    DepreciationEngine::valuate(asset, today).book_value
                };
                (1_u64, asset.purchase_value.amount(), book_value)
            })
            .reduce(
                || (0, Decimal::ZERO, Decimal::ZERO),
                |a, b| (a.0 + b.0, a.1.saturating_add(b.1), a.2.saturating_add(b.2)),
            );

        CategoryValues {
            category: wanted.map(str::to_string),
            count,
            purchased_value,
            book_value,
        }
    }
}

impl AssetStatistics {
    fn absorb(&mut self, asset: &Asset, book_value: Decimal) {
        let status = asset.status;
        let purchased = asset.purchase_value.amount();
        let counted_book = if status.excluded_from_book_value() {
            Decimal::ZERO
        } else {
            book_value
        };

        let bucket = self.by_status.entry(status).or_default();
        bucket.count += 1;
        bucket.purchased_value = bucket.purchased_value.saturating_add(purchased);
        bucket.book_value = bucket.book_value.saturating_add(counted_book);

        match status {
            AssetStatus::Lost => self.loss_on_lost = self.loss_on_lost.saturating_add(book_value),
            AssetStatus::Damaged => {
                self.loss_on_damaged = self.loss_on_damaged.saturating_add(book_value);
            }
            _ => {}
        }

        if status.is_active() {
            self.active_items_purchased_value =
                self.active_items_purchased_value.saturating_add(purchased);
            self.active_items_book_value = self.active_items_book_value.saturating_add(book_value);
        }

        self.total_count += 1;
        self.total_purchased_value = self.total_purchased_value.saturating_add(purchased);
        self.total_book_value = self.total_book_value.saturating_add(counted_book);

        add_to_group(&mut self.by_category, category_key(asset), purchased);
        add_to_group(&mut self.by_department, department_key(asset), purchased);
    }

    fn merge(mut self, other: Self) -> Self {
        for (status, totals) in other.by_status {
            let bucket = self.by_status.entry(status).or_default();
            *bucket = bucket.combine(totals);
        }
        for (name, totals) in other.by_category {
            let group = self.by_category.entry(name).or_default();
            *group = group.combine(totals);
        }
        for (name, totals) in other.by_department {
            let group = self.by_department.entry(name).or_default();
            *group = group.combine(totals);
        }

        self.active_items_purchased_value = self
            .active_items_purchased_value
            .saturating_add(other.active_items_purchased_value);
        self.active_items_book_value = self
            .active_items_book_value
            .saturating_add(other.active_items_book_value);
        self.loss_on_lost = self.loss_on_lost.saturating_add(other.loss_on_lost);
        self.loss_on_damaged = self.loss_on_damaged.saturating_add(other.loss_on_damaged);
        self.total_purchased_value = self
            .total_purchased_value
            .saturating_add(other.total_purchased_value);
        self.total_book_value = self.total_book_value.saturating_add(other.total_book_value);
        self.total_count += other.total_count;
        self
    }
}

impl StatusTotals {
    fn combine(self, other: Self) -> Self {
        Self {
            purchased_value: self.purchased_value.saturating_add(other.purchased_value),
            book_value: self.book_value.saturating_add(other.book_value),
            count: self.count + other.count,
        }
    }
}

impl GroupTotals {
    fn combine(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            purchased_value: self.purchased_value.saturating_add(other.purchased_value),
        }
    }
}

fn add_to_group(
    groups: &mut std::collections::BTreeMap<String, GroupTotals>,
    key: &str,
    purchased: Decimal,
) {
    let group = groups.entry(key.to_string()).or_default();
    group.count += 1;
    group.purchased_value = group.purchased_value.saturating_add(purchased);
}

fn category_key(asset: &Asset) -> &str {
    non_blank(asset.category.as_deref()).unwrap_or(UNCATEGORIZED)
}

fn department_key(asset: &Asset) -> &str {
    non_blank(asset.department.as_deref()).unwrap_or(UNASSIGNED_DEPARTMENT)
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}
