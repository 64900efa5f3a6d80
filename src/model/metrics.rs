//! Dashboard aggregates - stat card values and chart series

use super::vendor::{RiskLevel, Vendor};

/// One month of the security trend charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub score: u64,
    pub incidents: u64,
}

/// Score against one compliance framework
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplianceScore {
    pub framework: &'static str,
    pub score: u64,
}

/// Values behind the four stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_vendors: usize,
    pub avg_security_score: u32,
    pub critical_issues: usize,
    pub compliance_rate: u32,
}

impl DashboardStats {
    pub fn compute(vendors: &[Vendor]) -> Self {
        let total_vendors = vendors.len();
        let security_sum: u32 = vendors.iter().map(|v| v.security_score.value() as u32).sum();
        let compliance_sum: u32 = vendors.iter().map(|v| v.compliance.value() as u32).sum();

        Self {
            total_vendors,
            avg_security_score: rounded_mean(security_sum, total_vendors),
            critical_issues: vendors
                .iter()
                .filter(|v| v.risk_level.is_critical_issue())
                .count(),
            compliance_rate: rounded_mean(compliance_sum, total_vendors),
        }
    }
}

/// Mean rounded half-up; 0 for an empty set
fn rounded_mean(sum: u32, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let count = count as u32;
    (2 * sum + count) / (2 * count)
}

/// Vendor count for every risk level, lowest risk first
pub fn risk_distribution(vendors: &[Vendor]) -> Vec<(RiskLevel, u64)> {
    RiskLevel::ALL
        .iter()
        .map(|level| {
            let count = vendors.iter().filter(|v| v.risk_level == *level).count() as u64;
            (*level, count)
        })
        .collect()
}

/// Share of the total as a whole percentage
pub fn percent_of(part: u64, total: u64) -> u64 {
    if total == 0 {
        0
    } else {
        (part * 100 + total / 2) / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data;

    #[test]
    fn test_stats_for_mock_vendors() {
        let stats = DashboardStats::compute(&sample_data::mock_vendors());
        assert_eq!(stats.total_vendors, 12);
        // 925 / 12 = 77.08
        assert_eq!(stats.avg_security_score, 77);
        // DataSync (critical), MailerPro and APIHub (high)
        assert_eq!(stats.critical_issues, 3);
        // 1000 / 12 = 83.33
        assert_eq!(stats.compliance_rate, 83);
    }

    #[test]
    fn test_stats_for_empty_set() {
        assert_eq!(DashboardStats::compute(&[]), DashboardStats::default());
    }

    #[test]
    fn test_rounded_mean_rounds_half_up() {
        assert_eq!(rounded_mean(5, 2), 3);
        assert_eq!(rounded_mean(7, 3), 2);
        assert_eq!(rounded_mean(8, 3), 3);
    }

    #[test]
    fn test_risk_distribution() {
        let distribution = risk_distribution(&sample_data::mock_vendors());
        assert_eq!(
            distribution,
            vec![
                (RiskLevel::Low, 6),
                (RiskLevel::Medium, 3),
                (RiskLevel::High, 2),
                (RiskLevel::Critical, 1),
            ]
        );
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(6, 12), 50);
        assert_eq!(percent_of(1, 12), 8);
        assert_eq!(percent_of(3, 0), 0);
    }
}
