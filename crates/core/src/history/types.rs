//! History record and output types.

use assetlens_shared::types::{AssetId, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::valuation::{DerivedValuation, WarrantyState};

/// An assignment of an asset to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecord {
    /// Asset this record belongs to.
    #[serde(alias = "asset_id")]
    pub asset_id: AssetId,
    /// Employee identifier.
    #[serde(default, alias = "employee_id")]
    pub employee_id: Option<String>,
    /// Employee display name.
    #[serde(default, alias = "employee_name")]
    pub employee_name: String,
    /// Date the asset was handed over.
    #[serde(default, alias = "assignment_date")]
    pub assignment_date: Option<String>,
    /// Date the asset came back; absent while the assignment is active.
    #[serde(default, alias = "return_date")]
    pub return_date: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// A processed return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRecord {
    /// Asset this record belongs to.
    #[serde(alias = "asset_id")]
    pub asset_id: AssetId,
    /// Employee display name.
    #[serde(default, alias = "employee_name")]
    pub employee_name: String,
    /// Original assignment date.
    #[serde(default, alias = "assigned_date")]
    pub assigned_date: Option<String>,
    /// Return date.
    #[serde(default, alias = "return_date")]
    pub return_date: Option<String>,
    /// Condition on return ("Good", "Need Maintenance", "Lost").
    #[serde(default, alias = "return_condition")]
    pub return_condition: Option<String>,
}

/// Maintenance job state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    /// Scheduled, not started.
    #[default]
    #[serde(alias = "pending")]
    Pending,
    /// In progress.
    #[serde(alias = "ongoing")]
    Ongoing,
    /// Finished.
    #[serde(alias = "complete")]
    Complete,
}

/// A maintenance job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    /// Asset this record belongs to.
    #[serde(alias = "asset_id")]
    pub asset_id: AssetId,
    /// Vendor performing the work.
    #[serde(default, alias = "maintenance_provider")]
    pub provider: String,
    /// Scheduled date.
    #[serde(default, alias = "scheduled_date")]
    pub scheduled_date: Option<String>,
    /// Completion date.
    #[serde(default, alias = "completed_date")]
    pub completed_date: Option<String>,
    /// Job state.
    #[serde(default)]
    pub status: MaintenanceStatus,
    /// Cost, when known.
    #[serde(default)]
    pub cost: Option<Money>,
    /// Work description.
    #[serde(default)]
    pub description: Option<String>,
}

/// An assignment with its derived usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentUsage {
    /// The source record.
    pub record: AssignmentRecord,
    /// Resolved assignment date.
    pub assigned_on: Option<NaiveDate>,
    /// Resolved return date, or today for active assignments.
    pub ended_on: Option<NaiveDate>,
    /// Whole days in use; `None` when either end is unresolvable.
    pub usage_days: Option<i64>,
    /// Display duration ("Same day", "15 Days", "1 Year 2 Months").
    pub usage_duration: String,
    /// The asset has not been returned yet.
    pub is_active: bool,
}

/// Kind of timeline event. Events on the same day sort in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimelineEventKind {
    /// Handed to an employee.
    Assigned,
    /// Returned by an employee.
    Returned,
    /// Maintenance scheduled.
    MaintenanceScheduled,
    /// Maintenance finished.
    MaintenanceCompleted,
}

/// One entry of the merged timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Event date.
    pub date: NaiveDate,
    /// Event kind.
    pub kind: TimelineEventKind,
    /// Employee name or maintenance provider.
    pub party: String,
}

/// Lifetime history of a single asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetHistory {
    /// Asset tag.
    pub asset_id: AssetId,
    /// Asset display name.
    pub asset_name: String,
    /// Current derived valuation.
    pub valuation: DerivedValuation,
    /// Current warranty state.
    pub warranty: WarrantyState,
    /// Assignments, oldest first.
    pub assignments: Vec<AssignmentUsage>,
    /// Returns, oldest first.
    pub returns: Vec<ReturnRecord>,
    /// Maintenance jobs, oldest scheduled first.
    pub maintenance: Vec<MaintenanceRecord>,
    /// Days in use across all assignments with known dates.
    pub total_usage_days: i64,
    /// Display form of `total_usage_days`; "Unknown" without dated assignments.
    pub total_usage: String,
    /// Number of maintenance jobs.
    pub maintenance_count: usize,
    /// Sum of known maintenance costs.
    pub total_maintenance_cost: Money,
    /// Jobs marked complete with a completion date.
    pub completed_maintenance: usize,
    /// All dated events, oldest first.
    pub timeline: Vec<TimelineEvent>,
}
