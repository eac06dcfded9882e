//! AssetLens report
//!
//! Reads an asset snapshot (JSON array of asset records) and prints the
//! valuation report to stdout.
//!
//! Usage: assetlens [INPUT]

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assetlens_core::asset::{AssetIntake, AssetRecord, RejectedRecord};
use assetlens_core::report::ReportBuilder;
use assetlens_core::valuation::ValuationPolicy;
use assetlens_shared::{AppConfig, AppError, AppResult};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assetlens=info,assetlens_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let input: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.report.input_path.clone())
        .context("No input file given; pass a path or set ASSETLENS__REPORT__INPUT_PATH")?;

    let records = read_snapshot(&input)
        .inspect_err(|e| {
            error!(
                code = e.error_code(),
                input_error = e.is_input_error(),
                input = %input.display(),
                "Cannot load snapshot"
            );
        })
        .with_context(|| format!("Failed to load asset records from {}", input.display()))?;

    let policy = ValuationPolicy::from(&config.valuation);
    let outcome = AssetIntake::new(&policy).admit_all(&records);
    let rejected = outcome.rejected.len();
    for RejectedRecord { index, error } in outcome.rejected {
        let error = AppError::from(error);
        warn!(index, code = error.error_code(), %error, "Skipping asset record");
    }

    let today = config
        .report
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());
    info!(
        input = %input.display(),
        assets = outcome.assets.len(),
        rejected,
        %today,
        "Building asset report"
    );

    let report = ReportBuilder::build(&outcome.assets, today);
    print!("{report}");

    Ok(())
}

/// Reads a JSON array of asset records.
fn read_snapshot(path: &Path) -> AppResult<Vec<AssetRecord>> {
    if !path.is_file() {
        return Err(AppError::NotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
