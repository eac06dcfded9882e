//! Asset data types.

use std::fmt;
use std::str::FromStr;

use assetlens_shared::types::{AssetId, Money};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::AssetError;

/// Lifecycle status of an asset.
///
/// Aggregation and depreciation query the capability flags below instead of
/// comparing status names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    /// In stock, ready to assign.
    Available,
    /// Issued to an employee.
    Assigned,
    /// Out for repair or servicing.
    Maintenance,
    /// Damaged beyond use.
    Damaged,
    /// Retired from service.
    Retired,
    /// Lost.
    Lost,
}

impl AssetStatus {
    /// All statuses, in display order.
    pub const ALL: [Self; 6] = [
        Self::Available,
        Self::Assigned,
        Self::Maintenance,
        Self::Damaged,
        Self::Retired,
        Self::Lost,
    ];

    /// Disposed assets stop depreciating at their disposal date.
    #[must_use]
    pub const fn is_disposed(self) -> bool {
        matches!(self, Self::Lost | Self::Damaged | Self::Retired)
    }

    /// Book value of these assets is reported as a loss, not as an asset.
    #[must_use]
    pub const fn excluded_from_book_value(self) -> bool {
        matches!(self, Self::Lost | Self::Damaged)
    }

    /// Assets in productive use.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Available | Self::Assigned)
    }

    /// Returns the canonical status name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Assigned => "Assigned",
            Self::Maintenance => "Maintenance",
            Self::Damaged => "Damaged",
            Self::Retired => "Retired",
            Self::Lost => "Lost",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AssetError::UnknownStatus(s.to_string()))
    }
}

/// Annual depreciation rate in percent, clamped to `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepreciationRate(Decimal);

impl DepreciationRate {
    /// Rate used when a record does not carry one.
    pub const DEFAULT_PERCENT: Decimal = dec!(20);

    /// Creates a rate, clamping out-of-range values.
    #[must_use]
    pub fn new(percent: Decimal) -> Self {
        Self(percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }

    /// Returns the rate in percent.
    #[must_use]
    pub const fn percent(self) -> Decimal {
        self.0
    }

    /// Returns the rate as a fraction of one.
    #[must_use]
    pub fn fraction(self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }
}

impl Default for DepreciationRate {
    fn default() -> Self {
        Self(Self::DEFAULT_PERCENT)
    }
}

/// A validated asset.
///
/// Built once at intake; the valuation engine never re-parses its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset tag.
    pub id: AssetId,
    /// Display name.
    pub name: String,
    /// Category (e.g., "Electronics", "Furniture").
    pub category: Option<String>,
    /// Owning department.
    pub department: Option<String>,
    /// Normalized purchase value.
    pub purchase_value: Money,
    /// Purchase date; `None` when missing or unresolvable.
    pub purchase_date: Option<NaiveDate>,
    /// Annual depreciation rate.
    pub depreciation_rate: DepreciationRate,
    /// Current lifecycle status.
    pub status: AssetStatus,
    /// Date the asset left service. Only consulted for disposed statuses.
    pub disposal_date: Option<NaiveDate>,
    /// Free-text warranty period ("2 years", "18 months").
    pub warranty_period: Option<String>,
}

impl Asset {
    /// Creates an asset with default rate and no dates.
    #[must_use]
    pub fn new(id: AssetId, purchase_value: Money, status: AssetStatus) -> Self {
        Self {
            name: id.to_string(),
            id,
            category: None,
            department: None,
            purchase_value,
            purchase_date: None,
            depreciation_rate: DepreciationRate::default(),
            status,
            disposal_date: None,
            warranty_period: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Sets the purchase date.
    #[must_use]
    pub const fn with_purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchase_date = Some(date);
        self
    }

    /// Sets the annual depreciation rate.
    #[must_use]
    pub const fn with_rate(mut self, rate: DepreciationRate) -> Self {
        self.depreciation_rate = rate;
        self
    }

    /// Sets the disposal date.
    #[must_use]
    pub const fn with_disposal_date(mut self, date: NaiveDate) -> Self {
        self.disposal_date = Some(date);
        self
    }

    /// Sets the warranty period text.
    #[must_use]
    pub fn with_warranty(mut self, period: impl Into<String>) -> Self {
        self.warranty_period = Some(period.into());
        self
    }

    /// Disposal date that actually stops the depreciation clock.
    #[must_use]
    pub fn effective_disposal_date(&self) -> Option<NaiveDate> {
        self.disposal_date.filter(|_| self.status.is_disposed())
    }
}

/// A number as the data layer stores it: either numeric or formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// A plain number (or numeric string).
    Number(Decimal),
    /// Text with formatting noise.
    Text(String),
}

/// An asset as it arrives from the CRUD layer.
///
/// Every field is optional and loosely typed. Both camelCase and the API's
/// snake_case keys are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Asset tag; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Category.
    #[serde(default)]
    pub category: Option<String>,
    /// Department.
    #[serde(default)]
    pub department: Option<String>,
    /// Purchase value.
    #[serde(default, alias = "value", alias = "purchase_value")]
    pub purchase_value: Option<RawNumber>,
    /// Purchase date text.
    #[serde(default, alias = "purchase_date")]
    pub purchase_date: Option<String>,
    /// Annual depreciation rate.
    #[serde(default, alias = "depreciation_rate")]
    pub depreciation_rate: Option<RawNumber>,
    /// Status text.
    #[serde(default)]
    pub status: Option<String>,
    /// Disposal date text.
    #[serde(default, alias = "disposal_date")]
    pub disposal_date: Option<String>,
    /// Warranty period text.
    #[serde(default, alias = "warranty_period")]
    pub warranty_period: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_capability_flags() {
        let disposed: Vec<_> = AssetStatus::ALL
            .into_iter()
            .filter(|s| s.is_disposed())
            .collect();
        assert_eq!(
            disposed,
            vec![AssetStatus::Damaged, AssetStatus::Retired, AssetStatus::Lost]
        );

        let excluded: Vec<_> = AssetStatus::ALL
            .into_iter()
            .filter(|s| s.excluded_from_book_value())
            .collect();
        assert_eq!(excluded, vec![AssetStatus::Damaged, AssetStatus::Lost]);

        let active: Vec<_> = AssetStatus::ALL
            .into_iter()
            .filter(|s| s.is_active())
            .collect();
        assert_eq!(active, vec![AssetStatus::Available, AssetStatus::Assigned]);
    }

    #[test]
    fn test_status_from_str_is_case_insensitive() {
        assert_eq!("lost".parse::<AssetStatus>().unwrap(), AssetStatus::Lost);
        assert_eq!(
            " MAINTENANCE ".parse::<AssetStatus>().unwrap(),
            AssetStatus::Maintenance
        );
        assert!(matches!(
            "Stolen".parse::<AssetStatus>(),
            Err(AssetError::UnknownStatus(s)) if s == "Stolen"
        ));
    }

    #[test]
    fn test_status_display_round_trips() {
        for status in AssetStatus::ALL {
            assert_eq!(status.to_string().parse::<AssetStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_depreciation_rate_clamps() {
        assert_eq!(DepreciationRate::new(dec!(-5)).percent(), dec!(0));
        assert_eq!(DepreciationRate::new(dec!(150)).percent(), dec!(100));
        assert_eq!(DepreciationRate::new(dec!(25)).fraction(), dec!(0.25));
        assert_eq!(DepreciationRate::default().percent(), dec!(20));
    }

    #[test]
    fn test_effective_disposal_date_requires_disposed_status() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let id = AssetId::parse("A-1").unwrap();

        let retired = Asset::new(id.clone(), Money::zero(), AssetStatus::Retired).with_disposal_date(d);
        assert_eq!(retired.effective_disposal_date(), Some(d));

        let assigned = Asset::new(id, Money::zero(), AssetStatus::Assigned).with_disposal_date(d);
        assert_eq!(assigned.effective_disposal_date(), None);
    }

    #[test]
    fn test_record_accepts_api_keys() {
        let json = r#"{
            "id": "LAP-1",
            "value": "1,20,000",
            "purchase_date": "31/01/2023",
            "depreciation_rate": 25,
            "status": "Assigned",
            "warranty_period": "2 years"
        }"#;
        let record: AssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("LAP-1"));
        assert_eq!(
            record.purchase_value,
            Some(RawNumber::Text("1,20,000".to_string()))
        );
        assert_eq!(record.depreciation_rate, Some(RawNumber::Number(dec!(25))));
        assert_eq!(record.purchase_date.as_deref(), Some("31/01/2023"));
        assert_eq!(record.warranty_period.as_deref(), Some("2 years"));
    }

    #[test]
    fn test_record_accepts_camel_case_keys() {
        let json = r#"{"purchaseValue": 5000, "disposalDate": null, "status": "Lost"}"#;
        let record: AssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.purchase_value, Some(RawNumber::Number(dec!(5000))));
        assert!(record.disposal_date.is_none());
        assert!(record.id.is_none());
    }
}
