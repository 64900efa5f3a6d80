//! Typed errors for vendor data
//!
//! Application plumbing uses `anyhow`; these are the failures a caller may
//! want to match on when a vendor file is rejected.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("score {value} for {field} is outside 0..=100")]
    ScoreOutOfRange { field: &'static str, value: i64 },

    #[error("unknown vendor status '{0}' (expected active, review or suspended)")]
    UnknownStatus(String),

    #[error("unknown risk level '{0}' (expected low, medium, high or critical)")]
    UnknownRiskLevel(String),

    #[error("invalid audit date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("duplicate vendor id '{0}'")]
    DuplicateId(String),

    #[error("unsupported vendor file '{}' (use .json, .yaml, .yml or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON vendor data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML vendor data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid CSV vendor data: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DataError::ScoreOutOfRange {
            field: "compliance",
            value: 140,
        };
        assert_eq!(err.to_string(), "score 140 for compliance is outside 0..=100");

        let err = DataError::UnsupportedFormat(PathBuf::from("vendors.txt"));
        assert!(err.to_string().contains("vendors.txt"));
    }
}
