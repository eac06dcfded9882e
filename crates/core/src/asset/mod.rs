//! Asset records, statuses, and the intake boundary.

pub mod error;
pub mod intake;
pub mod types;

pub use error::AssetError;
pub use intake::{AssetIntake, IntakeOutcome, RejectedRecord};
pub use types::{Asset, AssetRecord, AssetStatus, DepreciationRate, RawNumber};
