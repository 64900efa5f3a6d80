//! Model layer - centralized state management
//!
//! - `Vendor` and friends - the monitored records
//! - `TableState` / `PageView` - sort and pagination of the vendor table
//! - `DomainState` - business data (vendors, activity, chart series)
//! - `ModalStack` - modal overlay management

pub mod activity;
pub mod domain;
pub mod metrics;
pub mod modal;
pub mod sample_data;
pub mod table;
pub mod ui;
pub mod vendor;

pub use domain::{DataSource, DomainState};
pub use table::{compute_visible_slice, PageNumber, PageView, SortColumn, SortDirection, TableState};
pub use vendor::{RiskLevel, Score, ScoreBand, Vendor, VendorId, VendorStatus};
