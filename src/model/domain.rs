//! Domain state - business data separate from UI concerns

use super::activity::{Activity, ActivityFeed, Notification};
use super::metrics::{ComplianceScore, DashboardStats, TrendPoint};
use super::sample_data;
use super::vendor::{Vendor, VendorId};

/// Where the vendor records came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    BuiltIn,
    File(String),
}

impl DataSource {
    pub fn describe(&self) -> String {
        match self {
            DataSource::BuiltIn => "built-in demo data".to_string(),
            DataSource::File(path) => path.clone(),
        }
    }
}

/// Domain state containing all business data
pub struct DomainState {
    /// Vendor records in their source order
    pub vendors: Vec<Vendor>,

    pub source: DataSource,

    pub activities: ActivityFeed,

    pub notifications: Vec<Notification>,

    /// Monthly score and incident series
    pub security_trend: Vec<TrendPoint>,

    pub compliance_scores: Vec<ComplianceScore>,
}

impl Default for DomainState {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainState {
    /// Domain state seeded with the built-in demo data
    pub fn new() -> Self {
        Self::with_vendors(sample_data::mock_vendors(), DataSource::BuiltIn)
    }

    pub fn with_vendors(vendors: Vec<Vendor>, source: DataSource) -> Self {
        Self {
            vendors,
            source,
            activities: ActivityFeed::new(sample_data::recent_activities()),
            notifications: sample_data::notifications(),
            security_trend: sample_data::security_trend(),
            compliance_scores: sample_data::compliance_scores(),
        }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.vendors)
    }

    pub fn vendor(&self, id: &VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|v| &v.id == id)
    }

    pub fn vendor_mut(&mut self, id: &VendorId) -> Option<&mut Vendor> {
        self.vendors.iter_mut().find(|v| &v.id == id)
    }

    /// Vendors whose name or category contains the query, case-insensitively
    pub fn search(&self, query: &str) -> Vec<Vendor> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.vendors.clone();
        }
        self.vendors
            .iter()
            .filter(|v| {
                v.name.to_lowercase().contains(&query) || v.category.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    pub fn record_activity(&mut self, activity: Activity) {
        self.activities.push(activity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_name_and_category() {
        let domain = DomainState::new();

        let hits = domain.search("DATA");
        let names: Vec<&str> = hits.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["DataSync Solutions", "BackupVault"]);

        assert_eq!(domain.search("  ").len(), domain.vendors.len());
        assert!(domain.search("no such vendor").is_empty());
    }

    #[test]
    fn test_vendor_lookup() {
        let mut domain = DomainState::new();
        let id = VendorId::new("11");
        assert_eq!(domain.vendor(&id).map(|v| v.name.as_str()), Some("CryptoSafe"));

        if let Some(vendor) = domain.vendor_mut(&id) {
            vendor.name = "CryptoSafe Ltd".to_string();
        }
        assert_eq!(domain.vendor(&id).unwrap().name, "CryptoSafe Ltd");
        assert!(domain.vendor(&VendorId::new("99")).is_none());
    }
}
