//! Services that touch the filesystem
//!
//! - Vendor file loading (JSON, YAML, CSV)
//! - CSV report export

pub mod export;
pub mod vendors;

pub use export::export_report;
pub use vendors::load_vendors;
