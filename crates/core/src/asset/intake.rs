//! Intake boundary: raw CRUD records in, validated assets out.
//!
//! This is the only place that looks at loosely formatted values. Dirty data
//! degrades (unknown date, zero value, default rate) and is logged; only
//! records that cannot be classified at all are rejected.

use std::collections::HashSet;
use std::str::FromStr;

use assetlens_shared::types::{AssetId, Money};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::AssetError;
use super::types::{Asset, AssetRecord, AssetStatus, DepreciationRate, RawNumber};
use crate::dates::DateResolver;
use crate::valuation::ValuationPolicy;

/// A record that could not be admitted.
#[derive(Debug)]
pub struct RejectedRecord {
    /// Position of the record in the input.
    pub index: usize,
    /// Why it was rejected.
    pub error: AssetError,
}

/// Result of admitting a batch of records.
#[derive(Debug, Default)]
pub struct IntakeOutcome {
    /// Admitted assets, in input order.
    pub assets: Vec<Asset>,
    /// Rejected records.
    pub rejected: Vec<RejectedRecord>,
}

/// Converts raw records into validated assets.
pub struct AssetIntake<'a> {
    policy: &'a ValuationPolicy,
}

impl<'a> AssetIntake<'a> {
    /// Creates an intake using the given policy for defaults.
    #[must_use]
    pub const fn new(policy: &'a ValuationPolicy) -> Self {
        Self { policy }
    }

    /// Admits a single record.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::UnknownStatus` if the status text is not a known status.
    pub fn admit(&self, record: &AssetRecord) -> Result<Asset, AssetError> {
        let status = match record.status.as_deref().map(str::trim) {
            None | Some("") => AssetStatus::Available,
            Some(text) => AssetStatus::from_str(text)?,
        };

        let id = record
            .id
            .as_deref()
            .and_then(AssetId::parse)
            .unwrap_or_else(|| {
                let generated = AssetId::generate();
                tracing::debug!(asset_id = %generated, "record without id, generated one");
                generated
            });

        let purchase_value = match &record.purchase_value {
            Some(RawNumber::Number(amount)) => Money::new(*amount),
            Some(RawNumber::Text(text)) => Money::parse_lenient(text),
            None => Money::zero(),
        };

        let purchase_date = Self::admit_date(&id, "purchase_date", record.purchase_date.as_deref());
        let disposal_date = Self::admit_date(&id, "disposal_date", record.disposal_date.as_deref());
        if disposal_date.is_some() && !status.is_disposed() {
            tracing::debug!(asset_id = %id, %status, "disposal date ignored for non-disposed status");
        }

        let depreciation_rate = record
            .depreciation_rate
            .as_ref()
            .and_then(Self::parse_rate)
            .map_or(self.policy.default_depreciation_rate, DepreciationRate::new);

        let warranty_period = record
            .warranty_period
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        let name = record
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| id.to_string(), str::to_string);

        Ok(Asset {
            id,
            name,
            category: Self::non_blank(record.category.as_deref()),
            department: Self::non_blank(record.department.as_deref()),
            purchase_value,
            purchase_date,
            depreciation_rate,
            status,
            disposal_date,
            warranty_period,
        })
    }

    /// Admits a batch, rejecting unclassifiable records and duplicate ids.
    ///
    /// Rejections are returned, not logged; the caller decides how to report them.
    #[must_use]
    pub fn admit_all(&self, records: &[AssetRecord]) -> IntakeOutcome {
        let mut outcome = IntakeOutcome::default();
        let mut seen = HashSet::new();

        for (index, record) in records.iter().enumerate() {
            let admitted = self.admit(record).and_then(|asset| {
                if seen.insert(asset.id.clone()) {
                    Ok(asset)
                } else {
                    Err(AssetError::DuplicateId(asset.id))
                }
            });

            match admitted {
                Ok(asset) => outcome.assets.push(asset),
                Err(error) => outcome.rejected.push(RejectedRecord { index, error }),
            }
        }

        outcome
    }

    fn admit_date(id: &AssetId, field: &'static str, raw: Option<&str>) -> Option<NaiveDate> {
        let resolved = DateResolver::resolve_day_first(raw);
        if resolved.is_none() && raw.is_some_and(|text| !text.trim().is_empty()) {
            tracing::warn!(asset_id = %id, field, raw = raw.unwrap_or_default(), "unresolvable date treated as unknown");
        }
        resolved
    }

    fn parse_rate(raw: &RawNumber) -> Option<Decimal> {
        match raw {
            RawNumber::Number(rate) => Some(*rate),
            RawNumber::Text(text) => {
                Decimal::from_str(text.trim().trim_end_matches('%').trim()).ok()
            }
        }
    }

    fn non_blank(text: Option<&str>) -> Option<String> {
        text.map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(id: &str, status: &str) -> AssetRecord {
        AssetRecord {
            id: Some(id.to_string()),
            status: Some(status.to_string()),
            ..AssetRecord::default()
        }
    }

    #[test]
    fn test_admit_normalizes_fields() {
        let policy = ValuationPolicy::default();
        let intake = AssetIntake::new(&policy);
        let raw = AssetRecord {
            name: Some("  ThinkPad T14 ".to_string()),
            category: Some("Electronics".to_string()),
            department: Some("   ".to_string()),
            purchase_value: Some(RawNumber::Text("Rs. 1,20,000".to_string())),
            purchase_date: Some("31/01/2023".to_string()),
            depreciation_rate: Some(RawNumber::Text("25%".to_string())),
            disposal_date: Some("2024-06-30".to_string()),
            warranty_period: Some(" 2 years ".to_string()),
            ..record("LAP-1", "retired")
        };

        let asset = intake.admit(&raw).unwrap();
        assert_eq!(asset.id.as_str(), "LAP-1");
        assert_eq!(asset.name, "ThinkPad T14");
        assert_eq!(asset.category.as_deref(), Some("Electronics"));
        assert_eq!(asset.department, None);
        assert_eq!(asset.purchase_value.amount(), dec!(120000));
        assert_eq!(asset.purchase_date, NaiveDate::from_ymd_opt(2023, 1, 31));
        assert_eq!(asset.depreciation_rate.percent(), dec!(25));
        assert_eq!(asset.status, AssetStatus::Retired);
        assert_eq!(asset.disposal_date, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(asset.warranty_period.as_deref(), Some("2 years"));
    }

    #[test]
    fn test_admit_degrades_dirty_values() {
        let policy = ValuationPolicy::default();
        let intake = AssetIntake::new(&policy);
        let raw = AssetRecord {
            purchase_value: Some(RawNumber::Text("TBD".to_string())),
            purchase_date: Some("01/31/2023".to_string()),
            depreciation_rate: Some(RawNumber::Number(dec!(250))),
            ..record("LAP-2", "Available")
        };

        let asset = intake.admit(&raw).unwrap();
        assert!(asset.purchase_value.is_zero());
        assert_eq!(asset.purchase_date, None);
        assert_eq!(asset.depreciation_rate.percent(), dec!(100));
        assert_eq!(asset.name, "LAP-2");
    }

    #[test]
    fn test_admit_defaults() {
        let policy = ValuationPolicy {
            default_depreciation_rate: DepreciationRate::new(dec!(15)),
            ..ValuationPolicy::default()
        };
        let intake = AssetIntake::new(&policy);

        let asset = intake.admit(&AssetRecord::default()).unwrap();
        assert_eq!(asset.status, AssetStatus::Available);
        assert_eq!(asset.depreciation_rate.percent(), dec!(15));
        assert!(!asset.id.as_str().is_empty());
        assert!(asset.purchase_value.is_zero());

        let unparseable_rate = AssetRecord {
            depreciation_rate: Some(RawNumber::Text("fast".to_string())),
            ..AssetRecord::default()
        };
        let asset = intake.admit(&unparseable_rate).unwrap();
        assert_eq!(asset.depreciation_rate.percent(), dec!(15));
    }

    #[test]
    fn test_admit_rejects_unknown_status() {
        let policy = ValuationPolicy::default();
        let intake = AssetIntake::new(&policy);
        let err = intake.admit(&record("X-1", "Stolen")).unwrap_err();
        assert!(matches!(err, AssetError::UnknownStatus(_)));
    }

    #[test]
    fn test_admit_all_reports_rejections() {
        let policy = ValuationPolicy::default();
        let intake = AssetIntake::new(&policy);
        let records = vec![
            record("A-1", "Available"),
            record("A-2", "Vanished"),
            record("A-1", "Lost"),
            record("A-3", "Lost"),
        ];

        let outcome = intake.admit_all(&records);
        let admitted: Vec<_> = outcome.assets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(admitted, vec!["A-1", "A-3"]);

        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(outcome.rejected[0].index, 1);
        assert!(matches!(outcome.rejected[0].error, AssetError::UnknownStatus(_)));
        assert_eq!(outcome.rejected[1].index, 2);
        assert!(matches!(
            &outcome.rejected[1].error,
            AssetError::DuplicateId(id) if id.as_str() == "A-1"
        ));
    }
}
