//! Per-asset lifetime history.
//!
//! Assignment, return, and maintenance records are written by other
//! subsystems and reference assets by id. The assembler filters them to one
//! asset, orders them, and derives usage durations and a merged timeline.

pub mod assembler;
pub mod types;

pub use assembler::AssetHistoryAssembler;
pub use types::{
    AssetHistory, AssignmentRecord, AssignmentUsage, MaintenanceRecord, MaintenanceStatus,
    ReturnRecord, TimelineEvent, TimelineEventKind,
};
