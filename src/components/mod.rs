//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Changes to vendor data travel as Actions through the App.

pub mod activity;
pub mod charts;
pub mod dashboard;
pub mod header;
pub mod help_dialog;
pub mod layout;
pub mod menu_dialog;
pub mod notifications_dialog;
pub mod quit_dialog;
pub mod sidebar;
pub mod splash;
pub mod stat_card;
pub mod vendor_detail_dialog;
pub mod vendor_table;

pub use dashboard::{draw_dashboard_screen, DashboardRenderContext};
pub use header::HeaderComponent;
pub use help_dialog::HelpDialog;
pub use layout::centered_popup;
pub use menu_dialog::MenuDialog;
pub use notifications_dialog::NotificationsDialog;
pub use quit_dialog::QuitDialog;
pub use sidebar::SidebarComponent;
pub use splash::SplashComponent;
pub use vendor_detail_dialog::VendorDetailDialog;
pub use vendor_table::VendorTableComponent;
