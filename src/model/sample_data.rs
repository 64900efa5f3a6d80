//! Built-in demo data for the dashboard
//!
//! Used when no vendor file is given, and as fixtures in tests.

use super::activity::{Activity, ActivityStatus, Notification, NotificationLevel};
use super::metrics::{ComplianceScore, TrendPoint};
use super::vendor::{Vendor, VendorRecord};

/// (id, name, category, security score, status, last audit, risk, compliance)
const VENDORS: [(&str, &str, &str, i64, &str, &str, &str, i64); 12] = [
    ("1", "CloudStore Inc", "Cloud Storage", 92, "active", "2024-11-15", "low", 95),
    ("2", "DataSync Solutions", "Data Analytics", 45, "review", "2024-10-28", "critical", 62),
    ("3", "SecureAuth Pro", "Authentication", 88, "active", "2024-11-20", "low", 92),
    ("4", "PaymentGate", "Payment Processing", 78, "active", "2024-11-10", "medium", 85),
    ("5", "MailerPro", "Email Services", 65, "review", "2024-10-05", "high", 70),
    ("6", "Analytics360", "Business Intelligence", 82, "active", "2024-11-18", "low", 88),
    ("7", "CDN Express", "Content Delivery", 75, "active", "2024-11-12", "medium", 80),
    ("8", "BackupVault", "Data Backup", 90, "active", "2024-11-22", "low", 94),
    ("9", "APIHub Services", "API Management", 58, "review", "2024-09-30", "high", 68),
    ("10", "MonitorMax", "System Monitoring", 85, "active", "2024-11-25", "low", 90),
    ("11", "CryptoSafe", "Encryption", 95, "active", "2024-11-28", "low", 98),
    ("12", "LogStream", "Log Management", 72, "active", "2024-11-08", "medium", 78),
];

/// The twelve demo vendors, in listing order
pub fn mock_vendors() -> Vec<Vendor> {
    VENDORS
        .iter()
        .filter_map(
            |&(id, name, category, security_score, status, last_audit, risk_level, compliance)| {
                let record = VendorRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    category: category.to_string(),
                    security_score,
                    status: status.to_string(),
                    risk_level: risk_level.to_string(),
                    compliance,
                    last_audit: last_audit.to_string(),
                };
                Vendor::try_from(record).ok()
            },
        )
        .collect()
}

pub fn recent_activities() -> Vec<Activity> {
    vec![
        Activity::new("Security audit completed", "CryptoSafe", "5 minutes ago", ActivityStatus::Success),
        Activity::new("Risk level increased", "DataSync Solutions", "23 minutes ago", ActivityStatus::Warning),
        Activity::new("Compliance certification renewed", "CloudStore Inc", "1 hour ago", ActivityStatus::Success),
        Activity::new("Vulnerability detected", "MailerPro", "2 hours ago", ActivityStatus::Error),
        Activity::new("New vendor onboarded", "MonitorMax", "3 hours ago", ActivityStatus::Info),
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification::new(
            NotificationLevel::Critical,
            "2 mins ago",
            "Security Alert: VendorX",
            "High-risk vulnerability detected",
        ),
        Notification::new(
            NotificationLevel::Warning,
            "1 hour ago",
            "Compliance Update Required",
            "3 vendors need attention",
        ),
        Notification::new(
            NotificationLevel::Info,
            "3 hours ago",
            "Monthly Report Ready",
            "Security assessment complete",
        ),
    ]
}

/// Monthly average score and incident count
pub fn security_trend() -> Vec<TrendPoint> {
    [
        ("Jan", 78, 12),
        ("Feb", 82, 8),
        ("Mar", 79, 15),
        ("Apr", 85, 6),
        ("May", 88, 4),
        ("Jun", 91, 3),
    ]
    .into_iter()
    .map(|(month, score, incidents)| TrendPoint {
        month,
        score,
        incidents,
    })
    .collect()
}

pub fn compliance_scores() -> Vec<ComplianceScore> {
    [
        ("SOC 2", 95),
        ("ISO 27001", 88),
        ("GDPR", 92),
        ("HIPAA", 85),
        ("PCI DSS", 90),
    ]
    .into_iter()
    .map(|(framework, score)| ComplianceScore { framework, score })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mock_vendors_are_valid() {
        let vendors = mock_vendors();
        assert_eq!(vendors.len(), VENDORS.len());

        let ids: HashSet<_> = vendors.iter().map(|v| v.id.clone()).collect();
        assert_eq!(ids.len(), vendors.len());
    }

    #[test]
    fn test_mock_vendor_scores_in_listing_order() {
        let scores: Vec<u8> = mock_vendors()
            .iter()
            .map(|v| v.security_score.value())
            .collect();
        assert_eq!(scores, vec![92, 45, 88, 78, 65, 82, 75, 90, 58, 85, 95, 72]);
    }

    #[test]
    fn test_chart_series_lengths() {
        assert_eq!(security_trend().len(), 6);
        assert_eq!(compliance_scores().len(), 5);
        assert_eq!(notifications().len(), 3);
        assert_eq!(recent_activities().len(), 5);
    }
}
