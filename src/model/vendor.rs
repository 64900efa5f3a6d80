//! Vendor records - the monitored entities shown on the dashboard

use crate::error::DataError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a vendor, unique within a record set
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VendorId(String);

impl VendorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A percentage-style score, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Validate a raw score; `field` names the column in the error
    pub fn new(value: i64, field: &'static str) -> Result<Self, DataError> {
        if (0..=100).contains(&value) {
            Ok(Score(value as u8))
        } else {
            Err(DataError::ScoreOutOfRange { field, value })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Colour band used for score text and bars
    pub fn band(self) -> ScoreBand {
        match self.0 {
            80..=100 => ScoreBand::Good,
            60..=79 => ScoreBand::Fair,
            40..=59 => ScoreBand::Poor,
            _ => ScoreBand::Bad,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
    Bad,
}

/// Monitoring status of a vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorStatus {
    Active,
    Review,
    Suspended,
}

impl VendorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Active => "active",
            VendorStatus::Review => "review",
            VendorStatus::Suspended => "suspended",
        }
    }

    /// Capitalized label for badges
    pub fn label(&self) -> &'static str {
        match self {
            VendorStatus::Active => "Active",
            VendorStatus::Review => "Review",
            VendorStatus::Suspended => "Suspended",
        }
    }
}

impl FromStr for VendorStatus {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(VendorStatus::Active),
            "review" => Ok(VendorStatus::Review),
            "suspended" => Ok(VendorStatus::Suspended),
            _ => Err(DataError::UnknownStatus(s.to_string())),
        }
    }
}

/// Risk classification, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// High and critical vendors count as open critical issues
    pub fn is_critical_issue(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

impl FromStr for RiskLevel {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            _ => Err(DataError::UnknownRiskLevel(s.to_string())),
        }
    }
}

/// One monitored vendor
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub category: String,
    pub security_score: Score,
    pub status: VendorStatus,
    pub risk_level: RiskLevel,
    pub last_audit: NaiveDate,
    pub compliance: Score,
}

impl Vendor {
    /// Audit date in the ISO form used for display and text ordering
    pub fn last_audit_str(&self) -> String {
        self.last_audit.format("%Y-%m-%d").to_string()
    }
}

/// Flat on-disk form of a vendor, shared by the JSON, YAML and CSV readers
/// and by report export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(alias = "security_score")]
    pub security_score: i64,
    pub status: String,
    #[serde(alias = "risk_level")]
    pub risk_level: String,
    pub compliance: i64,
    #[serde(alias = "last_audit")]
    pub last_audit: String,
}

impl TryFrom<VendorRecord> for Vendor {
    type Error = DataError;

    fn try_from(record: VendorRecord) -> Result<Self, Self::Error> {
        let last_audit = NaiveDate::parse_from_str(record.last_audit.trim(), "%Y-%m-%d")
            .map_err(|_| DataError::InvalidDate(record.last_audit.clone()))?;

        Ok(Vendor {
            id: VendorId::new(record.id),
            name: record.name,
            category: record.category,
            security_score: Score::new(record.security_score, "securityScore")?,
            status: record.status.parse()?,
            risk_level: record.risk_level.parse()?,
            last_audit,
            compliance: Score::new(record.compliance, "compliance")?,
        })
    }
}

impl From<&Vendor> for VendorRecord {
    fn from(vendor: &Vendor) -> Self {
        VendorRecord {
            id: vendor.id.to_string(),
            name: vendor.name.clone(),
            category: vendor.category.clone(),
            security_score: vendor.security_score.value() as i64,
            status: vendor.status.as_str().to_string(),
            risk_level: vendor.risk_level.as_str().to_string(),
            compliance: vendor.compliance.value() as i64,
            last_audit: vendor.last_audit_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VendorRecord {
        VendorRecord {
            id: "1".to_string(),
            name: "CloudStore Inc".to_string(),
            category: "Cloud Storage".to_string(),
            security_score: 92,
            status: "active".to_string(),
            risk_level: "low".to_string(),
            compliance: 95,
            last_audit: "2024-11-15".to_string(),
        }
    }

    #[test]
    fn test_score_bounds() {
        assert_eq!(Score::new(0, "s").unwrap().value(), 0);
        assert_eq!(Score::new(100, "s").unwrap().value(), 100);
        assert!(matches!(
            Score::new(101, "s"),
            Err(DataError::ScoreOutOfRange { value: 101, .. })
        ));
        assert!(Score::new(-1, "s").is_err());
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(Score::new(80, "s").unwrap().band(), ScoreBand::Good);
        assert_eq!(Score::new(79, "s").unwrap().band(), ScoreBand::Fair);
        assert_eq!(Score::new(60, "s").unwrap().band(), ScoreBand::Fair);
        assert_eq!(Score::new(45, "s").unwrap().band(), ScoreBand::Poor);
        assert_eq!(Score::new(39, "s").unwrap().band(), ScoreBand::Bad);
    }

    #[test]
    fn test_risk_level_order() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert!(RiskLevel::High.is_critical_issue());
        assert!(!RiskLevel::Medium.is_critical_issue());
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("Review".parse::<VendorStatus>().unwrap(), VendorStatus::Review);
        assert_eq!(" critical ".parse::<RiskLevel>().unwrap(), RiskLevel::Critical);
        assert!(matches!(
            "paused".parse::<VendorStatus>(),
            Err(DataError::UnknownStatus(_))
        ));
        assert!(matches!(
            "severe".parse::<RiskLevel>(),
            Err(DataError::UnknownRiskLevel(_))
        ));
    }

    #[test]
    fn test_record_conversion() {
        let vendor = Vendor::try_from(record()).unwrap();
        assert_eq!(vendor.id.as_str(), "1");
        assert_eq!(vendor.security_score.value(), 92);
        assert_eq!(vendor.status, VendorStatus::Active);
        assert_eq!(vendor.last_audit_str(), "2024-11-15");

        let back = VendorRecord::from(&vendor);
        assert_eq!(back, record());
    }

    #[test]
    fn test_record_rejects_bad_values() {
        let mut bad = record();
        bad.compliance = 120;
        assert!(matches!(
            Vendor::try_from(bad),
            Err(DataError::ScoreOutOfRange { field: "compliance", value: 120 })
        ));

        let mut bad = record();
        bad.last_audit = "15/11/2024".to_string();
        assert!(matches!(Vendor::try_from(bad), Err(DataError::InvalidDate(_))));
    }

    #[test]
    fn test_record_json_field_names() {
        let json = r#"{
            "id": "2",
            "name": "DataSync Solutions",
            "category": "Data Analytics",
            "securityScore": 45,
            "status": "review",
            "lastAudit": "2024-10-28",
            "riskLevel": "critical",
            "compliance": 62
        }"#;
        let record: VendorRecord = serde_json::from_str(json).unwrap();
        let vendor = Vendor::try_from(record).unwrap();
        assert_eq!(vendor.risk_level, RiskLevel::Critical);
        assert_eq!(vendor.compliance.value(), 62);
    }
}
