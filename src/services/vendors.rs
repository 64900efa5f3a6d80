//! Vendor file loading
//!
//! A vendor file is a JSON or YAML list of vendor records (optionally wrapped
//! in a `vendors:` key) or a CSV file with one record per row.

use crate::error::DataError;
use crate::model::vendor::{Vendor, VendorRecord};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Supported vendor file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Csv,
}

impl DataFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(DataFormat::Json),
            Some("yaml") | Some("yml") => Ok(DataFormat::Yaml),
            Some("csv") => Ok(DataFormat::Csv),
            _ => Err(DataError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VendorDocument {
    List(Vec<VendorRecord>),
    Wrapped { vendors: Vec<VendorRecord> },
}

impl VendorDocument {
    fn into_records(self) -> Vec<VendorRecord> {
        match self {
            VendorDocument::List(records) => records,
            VendorDocument::Wrapped { vendors } => vendors,
        }
    }
}

/// Read and validate a vendor file
pub fn load_vendors<P: AsRef<Path>>(path: P) -> Result<Vec<Vendor>, DataError> {
    let path = path.as_ref();
    let format = DataFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let vendors = parse_vendors(&contents, format)?;
    log::info!("Loaded {} vendors from {}", vendors.len(), path.display());
    Ok(vendors)
}

/// Parse vendor records from text in the given format
pub fn parse_vendors(contents: &str, format: DataFormat) -> Result<Vec<Vendor>, DataError> {
    let records = match format {
        DataFormat::Json => serde_json::from_str::<VendorDocument>(contents)?.into_records(),
        DataFormat::Yaml => serde_yaml::from_str::<VendorDocument>(contents)?.into_records(),
        DataFormat::Csv => {
            let mut reader = csv::Reader::from_reader(contents.as_bytes());
            reader
                .deserialize::<VendorRecord>()
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    validate(records)
}

/// Convert records to vendors, rejecting bad values and repeated ids
pub fn validate(records: Vec<VendorRecord>) -> Result<Vec<Vendor>, DataError> {
    let mut seen = HashSet::new();
    let mut vendors = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id.clone()) {
            return Err(DataError::DuplicateId(record.id));
        }
        vendors.push(Vendor::try_from(record)?);
    }

    Ok(vendors)
}
