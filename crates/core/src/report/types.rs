//! Report data types and text rendering.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::asset::AssetStatus;
use crate::dates::DateResolver;
use crate::statistics::AssetStatistics;

const HEADERS: [&str; 8] = [
    "Asset ID",
    "Name",
    "Status",
    "Age",
    "Purchase Value",
    "Book Value",
    "Depr %",
    "Disposal Date",
];

/// Columns rendered right-aligned.
const NUMERIC_COLUMNS: [bool; 8] = [false, false, false, false, true, true, true, false];

const NO_DATE: &str = "-";

/// One asset line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Asset tag.
    pub asset_id: String,
    /// Display name.
    pub name: String,
    /// Lifecycle status.
    pub status: AssetStatus,
    /// Age label.
    pub age: String,
    /// Normalized purchase value.
    pub purchase_value: Decimal,
    /// Current book value.
    pub book_value: Decimal,
    /// Whole percent written off.
    pub depreciation_percent: Decimal,
    /// Disposal date as `DD/MM/YYYY`, for disposed assets only.
    pub disposal_date: Option<String>,
}

impl ReportRow {
    fn cells(&self) -> [String; 8] {
        [
            self.asset_id.clone(),
            self.name.clone(),
            self.status.to_string(),
            self.age.clone(),
            self.purchase_value.normalize().to_string(),
            self.book_value.normalize().to_string(),
            self.depreciation_percent.normalize().to_string(),
            self.disposal_date.clone().unwrap_or_else(|| NO_DATE.to_string()),
        ]
    }
}

/// Portfolio report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetReport {
    /// Reference date of every derived value.
    pub as_of: NaiveDate,
    /// One row per asset.
    pub rows: Vec<ReportRow>,
    /// Portfolio statistics.
    pub statistics: AssetStatistics,
}

impl AssetReport {
    fn write_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 8]> = self.rows.iter().map(ReportRow::cells).collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_line(f, &HEADERS.map(str::to_string), &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("  "))?;
        for row in &cells {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.statistics;

        writeln!(f, "Summary")?;
        writeln!(f, "  {:<22}{}", "Total assets", stats.total_count)?;
        writeln!(f, "  {:<22}{}", "Total purchase value", stats.total_purchased_value.normalize())?;
        writeln!(f, "  {:<22}{}", "Total book value", stats.total_book_value.normalize())?;
        writeln!(
            f,
            "  {:<22}{} (book {})",
            "Active items value",
            stats.active_items_purchased_value.normalize(),
            stats.active_items_book_value.normalize()
        )?;
        writeln!(f, "  {:<22}{}", "Loss on lost", stats.loss_on_lost.normalize())?;
        writeln!(f, "  {:<22}{}", "Loss on damaged", stats.loss_on_damaged.normalize())?;

        writeln!(f)?;
        writeln!(f, "By status")?;
        for status in AssetStatus::ALL {
            let totals = stats.status(status);
            writeln!(
                f,
                "  {:<12}{:>6}  purchased {:<14} book {}",
                status.as_str(),
                totals.count,
                totals.purchased_value.normalize().to_string(),
                totals.book_value.normalize()
            )?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String; 8], widths: &[usize; 8]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(NUMERIC_COLUMNS)
        .map(|((cell, &width), numeric)| {
            if numeric {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect();
    writeln!(f, "{}", padded.join("  ").trim_end())
}

impl fmt::Display for AssetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Asset report as of {}", DateResolver::format_day_first(self.as_of))?;
        writeln!(f)?;
        self.write_table(f)?;
        writeln!(f)?;
        self.write_summary(f)
    }
}
