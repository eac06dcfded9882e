//! Assembles the lifetime history of one asset.

use std::collections::HashSet;

use assetlens_shared::types::Money;
use chrono::NaiveDate;

use super::types::{
    AssetHistory, AssignmentRecord, AssignmentUsage, MaintenanceRecord, MaintenanceStatus,
    ReturnRecord, TimelineEvent, TimelineEventKind,
};
use crate::asset::Asset;
use crate::dates::DateResolver;
use crate::valuation::duration::{ElapsedParts, whole_days_between};
use crate::valuation::{DepreciationEngine, ValuationPolicy, WarrantyStatusEvaluator};

/// Duration shown when assignment and return fall on the same day.
pub const SAME_DAY_LABEL: &str = "Same day";

/// Duration shown when an assignment's dates cannot be resolved, and the
/// total when no assignment has resolvable dates.
pub const UNKNOWN_USAGE_LABEL: &str = "Unknown";

/// Builds [`AssetHistory`] views.
pub struct AssetHistoryAssembler {
    warranty: WarrantyStatusEvaluator,
}

impl AssetHistoryAssembler {
    /// Creates an assembler using the policy's warranty window.
    #[must_use]
    pub const fn new(policy: &ValuationPolicy) -> Self {
        Self {
            warranty: WarrantyStatusEvaluator::new(policy),
        }
    }

    /// Assembles the history of `asset` as of `today`.
    ///
    /// Records belonging to other assets are ignored. Records whose dates
    /// cannot be resolved sort after dated ones and are left out of the
    /// timeline.
    #[must_use]
    pub fn assemble(
        &self,
        asset: &Asset,
        assignments: &[AssignmentRecord],
        returns: &[ReturnRecord],
        maintenance: &[MaintenanceRecord],
        today: NaiveDate,
    ) -> AssetHistory {
        let mut assignments: Vec<AssignmentUsage> = assignments
            .iter()
            .filter(|record| record.asset_id == asset.id)
            .map(|record| usage_of(record, today))
            .collect();
        assignments.sort_by_key(|usage| date_key(usage.assigned_on));

        let mut returns: Vec<ReturnRecord> = returns
            .iter()
            .filter(|record| record.asset_id == asset.id)
            .cloned()
            .collect();
        returns.sort_by_key(|record| date_key(resolve(record.return_date.as_deref())));

        let mut maintenance: Vec<MaintenanceRecord> = maintenance
            .iter()
            .filter(|record| record.asset_id == asset.id)
            .cloned()
            .collect();
        maintenance.sort_by_key(|record| date_key(resolve(record.scheduled_date.as_deref())));

        let dated_usage: Vec<i64> = assignments
            .iter()
            .filter_map(|usage| usage.usage_days)
            .collect();
        let total_usage_days = dated_usage.iter().copied().fold(0, i64::saturating_add);
        let total_usage = if dated_usage.is_empty() {
            UNKNOWN_USAGE_LABEL.to_string()
        } else {
            usage_label(total_usage_days)
        };

        let total_maintenance_cost: Money =
            maintenance.iter().filter_map(|record| record.cost).sum();

        let completed_maintenance = maintenance
            .iter()
            .filter(|record| {
                record.status == MaintenanceStatus::Complete
                    && resolve(record.completed_date.as_deref()).is_some()
            })
            .count();

        let timeline = build_timeline(&assignments, &returns, &maintenance);

        tracing::debug!(
            asset_id = %asset.id,
            assignments = assignments.len(),
            returns = returns.len(),
            maintenance = maintenance.len(),
            "assembled asset history"
        );

        AssetHistory {
            asset_id: asset.id.clone(),
            asset_name: asset.name.clone(),
            valuation: DepreciationEngine::valuate(asset, today),
            warranty: self.warranty.evaluate(
                asset.purchase_date,
                asset.warranty_period.as_deref(),
                today,
            ),
            total_usage,
            total_usage_days,
            maintenance_count: maintenance.len(),
            total_maintenance_cost,
            completed_maintenance,
            timeline,
            assignments,
            returns,
            maintenance,
        }
    }
}

impl Default for AssetHistoryAssembler {
    fn default() -> Self {
        Self::new(&ValuationPolicy::default())
    }
}

fn resolve(raw: Option<&str>) -> Option<NaiveDate> {
    DateResolver::resolve(raw)
}

/// Undated records sort last.
fn date_key(date: Option<NaiveDate>) -> (bool, Option<NaiveDate>) {
    (date.is_none(), date)
}

fn usage_of(record: &AssignmentRecord, today: NaiveDate) -> AssignmentUsage {
    let is_active = record
        .return_date
        .as_deref()
        .is_none_or(|text| text.trim().is_empty());

    let assigned_on = resolve(record.assignment_date.as_deref());
    let ended_on = if is_active {
        Some(today)
    } else {
        resolve(record.return_date.as_deref())
    };

    let usage_days = assigned_on
        .zip(ended_on)
        .map(|(start, end)| whole_days_between(start, end).abs());

    AssignmentUsage {
        record: record.clone(),
        assigned_on,
        ended_on,
        usage_days,
        usage_duration: usage_days.map_or_else(|| UNKNOWN_USAGE_LABEL.to_string(), usage_label),
        is_active,
    }
}

/// `"Same day"` for zero, otherwise the two largest units.
fn usage_label(days: i64) -> String {
    if days == 0 {
        SAME_DAY_LABEL.to_string()
    } else {
        ElapsedParts::from_days(days).label()
    }
}

fn build_timeline(
    assignments: &[AssignmentUsage],
    returns: &[ReturnRecord],
    maintenance: &[MaintenanceRecord],
) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    let mut recorded_returns = HashSet::new();
    for record in returns {
        if let Some(date) = resolve(record.return_date.as_deref()) {
            recorded_returns.insert((date, record.employee_name.as_str()));
            events.push(event(date, TimelineEventKind::Returned, &record.employee_name));
        }
    }

    for usage in assignments {
        let employee = usage.record.employee_name.as_str();
        if let Some(date) = usage.assigned_on {
            events.push(event(date, TimelineEventKind::Assigned, employee));
        }
        // A return may be recorded both on the assignment and as a return record.
        if !usage.is_active
            && let Some(date) = usage.ended_on
            && !recorded_returns.contains(&(date, employee))
        {
            events.push(event(date, TimelineEventKind::Returned, employee));
        }
    }

    for record in maintenance {
        if let Some(date) = resolve(record.scheduled_date.as_deref()) {
            events.push(event(
                date,
                TimelineEventKind::MaintenanceScheduled,
                &record.provider,
            ));
        }
        if let Some(date) = resolve(record.completed_date.as_deref()) {
            events.push(event(
                date,
                TimelineEventKind::MaintenanceCompleted,
                &record.provider,
            ));
        }
    }

    events.sort_by_key(|e| (e.date, e.kind));
    events
}

fn event(date: NaiveDate, kind: TimelineEventKind, party: &str) -> TimelineEvent {
    TimelineEvent {
        date,
        kind,
        party: party.to_string(),
    }
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod tests;
