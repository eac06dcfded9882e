//! Application configuration management.

use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Valuation policy knobs.
    #[serde(default)]
    pub valuation: ValuationConfig,
    /// Report generation settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Valuation policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationConfig {
    /// Annual depreciation rate (percent) applied when a record carries none.
    #[serde(default = "default_depreciation_rate")]
    pub default_depreciation_rate: Decimal,
    /// Warranties ending within this many days are "Expiring Soon".
    #[serde(default = "default_expiring_soon_days")]
    pub expiring_soon_days: i64,
}

fn default_depreciation_rate() -> Decimal {
    Decimal::from(20)
}

fn default_expiring_soon_days() -> i64 {
    30
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            default_depreciation_rate: default_depreciation_rate(),
            expiring_soon_days: default_expiring_soon_days(),
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Asset snapshot to read (JSON array of asset records).
    pub input_path: Option<PathBuf>,
    /// Fixed "today" for reproducible reports. Uses the system clock when unset.
    pub reference_date: Option<NaiveDate>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ASSETLENS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
