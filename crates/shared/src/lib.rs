//! Shared value objects, errors, and configuration for AssetLens.
//!
//! This crate provides common types used across all other crates:
//! - Money type with decimal precision, normalized at intake
//! - Asset identifiers
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
