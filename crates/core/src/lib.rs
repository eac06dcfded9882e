//! Core valuation engine for AssetLens.
//!
//! This crate contains pure business logic with ZERO file, network, or clock
//! access. The reference date is always passed in by the caller.
//!
//! # Modules
//!
//! - `dates` - Date resolution for loosely formatted input
//! - `asset` - Asset records, statuses, and intake validation
//! - `valuation` - Age, straight-line depreciation, and warranty status
//! - `statistics` - Portfolio roll-ups by status, category, and department
//! - `history` - Assignment, return, and maintenance history per asset
//! - `report` - Printable portfolio report

pub mod asset;
pub mod dates;
pub mod history;
pub mod report;
pub mod statistics;
pub mod valuation;
