//! Asset valuation: age, depreciation, and warranty.
//!
//! Every function here is pure. The reference date (`today`) is always an
//! argument; nothing in this module reads the clock.

pub mod age;
pub mod depreciation;
pub mod duration;
pub mod types;
pub mod warranty;

#[cfg(test)]
mod props;

pub use age::AssetAgeCalculator;
pub use depreciation::DepreciationEngine;
pub use duration::{DAYS_PER_MONTH, DAYS_PER_YEAR, ElapsedParts};
pub use types::{Depreciation, DerivedValuation, ValuationPolicy, WarrantyState, WarrantyStatus};
pub use warranty::{WarrantyPeriod, WarrantyStatusEvaluator, WarrantyUnit};
