//! Asset intake error types.

use assetlens_shared::AppError;
use assetlens_shared::types::AssetId;
use thiserror::Error;

/// Errors raised while admitting raw records into the engine.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Status text is not one of the known lifecycle states.
    #[error("Unknown asset status: {0}")]
    UnknownStatus(String),

    /// Two records in one snapshot carry the same id.
    #[error("Duplicate asset id: {0}")]
    DuplicateId(AssetId),
}

impl From<AssetError> for AppError {
    fn from(err: AssetError) -> Self {
        Self::Validation(err.to_string())
    }
}
