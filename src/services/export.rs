//! CSV report export

use crate::model::vendor::{Vendor, VendorRecord};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Report file name, e.g. `vendor-report-all-20241115-093000.csv`
pub fn report_file_name(label: &str, now: DateTime<Local>) -> String {
    let slug: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    format!("vendor-report-{}-{}.csv", slug, now.format("%Y%m%d-%H%M%S"))
}

/// Report columns, matching the vendor file CSV layout
const REPORT_HEADER: [&str; 8] = [
    "id",
    "name",
    "category",
    "securityScore",
    "status",
    "riskLevel",
    "compliance",
    "lastAudit",
];

/// Write vendors as CSV in the given order
///
/// The header row is written even when there are no vendors.
pub fn write_report<W: Write>(writer: W, vendors: &[&Vendor]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(REPORT_HEADER)?;
    for vendor in vendors {
        csv_writer.serialize(VendorRecord::from(*vendor))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a report file into `dir` and return its path
pub fn export_report(dir: &Path, label: &str, vendors: &[&Vendor]) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report directory {}", dir.display()))?;
    }

    let path = dir.join(report_file_name(label, Local::now()));
    let file = fs::File::create(&path)
        .with_context(|| format!("Failed to create report {}", path.display()))?;
    write_report(file, vendors)?;

    log::info!("Exported {} vendors to {}", vendors.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data;
    use crate::services::vendors::{parse_vendors, DataFormat};
    use chrono::TimeZone;

    #[test]
    fn test_report_file_name() {
        let now = Local.with_ymd_and_hms(2024, 11, 15, 9, 30, 0).unwrap();
        assert_eq!(
            report_file_name("CloudStore Inc.", now),
            "vendor-report-cloudstore-inc-20241115-093000.csv"
        );
        assert_eq!(
            report_file_name("all", now),
            "vendor-report-all-20241115-093000.csv"
        );
    }

    #[test]
    fn test_report_reads_back_as_vendor_file() {
        let vendors = sample_data::mock_vendors();
        let rows: Vec<&Vendor> = vendors.iter().rev().collect();

        let mut buffer = Vec::new();
        write_report(&mut buffer, &rows).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with(
            "id,name,category,securityScore,status,riskLevel,compliance,lastAudit\n"
        ));

        let parsed = parse_vendors(&text, DataFormat::Csv).unwrap();
        assert_eq!(parsed.len(), vendors.len());
        assert_eq!(parsed[0].name, "LogStream");
    }

    #[test]
    fn test_export_report_creates_file() {
        let dir = std::env::temp_dir().join(format!("securevendor-export-{}", std::process::id()));
        let vendors = sample_data::mock_vendors();
        let rows: Vec<&Vendor> = vendors.iter().take(2).collect();

        let path = export_report(&dir, "all", &rows).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_empty_report_keeps_header() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &[]).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(
            text,
            "id,name,category,securityScore,status,riskLevel,compliance,lastAudit\n"
        );
        assert!(parse_vendors(&text, DataFormat::Csv).unwrap().is_empty());
    }
}
