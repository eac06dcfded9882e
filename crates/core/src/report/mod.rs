//! Printable portfolio report.
//!
//! [`ReportBuilder`] collects every derived value up front; rendering the
//! [`AssetReport`] only formats what was computed.

pub mod service;
pub mod types;


pub use service::ReportBuilder;
pub use types::{AssetReport, ReportRow};
