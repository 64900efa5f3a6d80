//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It routes actions and applies vendor actions to the domain state; sorting
//! and paging stay inside the vendor table.

use crate::action::Action;
use crate::component::Component;
use crate::components::header::{ACCOUNT_EMAIL, ACCOUNT_NAME};
use crate::components::menu_dialog::{account_menu_entries, vendor_menu_entries};
use crate::components::{
    draw_dashboard_screen, DashboardRenderContext, HeaderComponent, HelpDialog, MenuDialog,
    NotificationsDialog, QuitDialog, SidebarComponent, SplashComponent, VendorDetailDialog,
    VendorTableComponent,
};
use crate::config::Config;
use crate::model::activity::{Activity, ActivityStatus};
use crate::model::modal::{AccountAction, Modal, ModalStack, VendorAction};
use crate::model::ui::{AppMode, Section};
use crate::model::{DomainState, VendorId, VendorStatus};
use crate::services::export_report;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::path::Path;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Domain state (business data)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Effective config, CLI overrides applied
    pub config: Config,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Write theme changes back to the config file
    pub persist_theme: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub sidebar: SidebarComponent,
    pub header: HeaderComponent,
    pub vendor_table: VendorTableComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub notifications_dialog: NotificationsDialog,
    pub menu_dialog: MenuDialog,
    pub detail_dialog: VendorDetailDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the app around already loaded data
    ///
    /// `load_error` is shown in the status bar when the configured vendor
    /// file could not be used and the demo data was loaded instead.
    pub fn new(config: Config, domain: DomainState, load_error: Option<String>) -> App {
        let mode = if config.show_splash {
            AppMode::Splash
        } else {
            AppMode::Running
        };

        let mut header = HeaderComponent::new();
        header.set_theme(config.theme);
        header.set_notification_count(domain.notifications.len());

        let mut vendor_table = VendorTableComponent::new(config.page_size);
        vendor_table.set_records(domain.vendors.clone());

        let status_message = Some(format!(
            "Loaded {} vendors from {}",
            domain.vendors.len(),
            domain.source.describe()
        ));

        App {
            mode,
            domain,
            modals: ModalStack::new(),
            config,
            should_quit: false,
            error: load_error,
            status_message,
            persist_theme: true,
            splash: SplashComponent::new(),
            sidebar: SidebarComponent::new(),
            header,
            vendor_table,
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
            notifications_dialog: NotificationsDialog::default(),
            menu_dialog: MenuDialog::default(),
            detail_dialog: VendorDetailDialog::default(),
        }
    }

    /// Re-run the header search and hand the result to the table
    fn refresh_table(&mut self) {
        let records = self.domain.search(&self.header.search_query);
        self.vendor_table.set_records(records);
    }

    fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        self.header.set_theme(self.config.theme);
        log::info!("Theme changed to {}", self.config.theme.name());

        if !self.persist_theme {
            return;
        }

        // Only the theme is written back; other CLI overrides stay per-run
        let mut stored = Config::load().unwrap_or_default();
        stored.theme = self.config.theme;
        if let Err(e) = stored.save() {
            log::warn!("Failed to save theme: {}", e);
        }
    }

    fn export_all(&mut self) {
        let records = self.vendor_table.sorted_records();
        let count = records.len();
        match export_report(Path::new(&self.config.report_dir), "all", &records) {
            Ok(path) => {
                self.status_message = Some(format!("Exported {} vendors to {}", count, path.display()));
            }
            Err(e) => {
                log::error!("Export failed: {:#}", e);
                self.error = Some(format!("Export failed: {}", e));
            }
        }
    }

    fn apply_vendor_action(&mut self, vendor_id: &VendorId, action: VendorAction) {
        let Some(vendor) = self.domain.vendor(vendor_id).cloned() else {
            self.error = Some(format!("Vendor {} no longer exists", vendor_id));
            return;
        };

        match action {
            VendorAction::ViewDetails => {
                self.modals.push(Modal::VendorDetails {
                    vendor_id: vendor_id.clone(),
                });
            }
            VendorAction::RunAudit => {
                let today = Local::now().date_naive();
                if let Some(v) = self.domain.vendor_mut(vendor_id) {
                    v.last_audit = today;
                }
                self.domain.record_activity(Activity::new(
                    "Security audit completed",
                    &vendor.name,
                    "just now",
                    ActivityStatus::Success,
                ));
                log::info!("Audit recorded for {} ({})", vendor.name, vendor_id);
                self.status_message = Some(format!("Audit completed for {}", vendor.name));
                self.refresh_table();
            }
            VendorAction::GenerateReport => {
                match export_report(Path::new(&self.config.report_dir), &vendor.name, &[&vendor]) {
                    Ok(path) => {
                        self.domain.record_activity(Activity::new(
                            "Report generated",
                            &vendor.name,
                            "just now",
                            ActivityStatus::Info,
                        ));
                        self.status_message = Some(format!("Report written to {}", path.display()));
                    }
                    Err(e) => {
                        log::error!("Report for {} failed: {:#}", vendor.name, e);
                        self.error = Some(format!("Report failed: {}", e));
                    }
                }
            }
            VendorAction::Suspend => {
                if let Some(v) = self.domain.vendor_mut(vendor_id) {
                    v.status = VendorStatus::Suspended;
                }
                self.domain.record_activity(Activity::new(
                    "Vendor suspended",
                    &vendor.name,
                    "just now",
                    ActivityStatus::Warning,
                ));
                log::info!("Suspended {} ({})", vendor.name, vendor_id);
                self.status_message = Some(format!("{} suspended", vendor.name));
                self.refresh_table();
            }
        }
    }

    fn apply_account_action(&mut self, action: AccountAction) {
        match action {
            AccountAction::Profile => {
                self.status_message = Some(format!("Signed in as {} ({})", ACCOUNT_NAME, ACCOUNT_EMAIL));
            }
            AccountAction::Settings => {
                self.sidebar.active = Section::Settings;
            }
            AccountAction::Team => {
                self.status_message = Some("Team management is not available yet".to_string());
            }
            AccountAction::LogOut => {
                self.modals.push(Modal::QuitConfirm);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else if self.header.search_mode {
                    self.header.handle_key_event(key)
                } else {
                    self.handle_main_key_event(key)
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode != AppMode::Running || !self.modals.is_empty() {
            return Ok(None);
        }

        if let Some(action) = self.sidebar.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }
        if let Some(action) = self.header.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }
        if self.sidebar.active == Section::Dashboard {
            return self.vendor_table.handle_mouse_event(mouse);
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Sidebar
            // ─────────────────────────────────────────────────────────────────
            Action::NextSection | Action::PrevSection | Action::SelectSection(_) => {
                self.sidebar.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Vendor Table (sorting, paging and the row cursor)
            // ─────────────────────────────────────────────────────────────────
            Action::SortBy(_)
            | Action::CycleSort
            | Action::NextPage
            | Action::PrevPage
            | Action::GoToPage(_)
            | Action::FirstPage
            | Action::LastPage
            | Action::NextRow
            | Action::PrevRow => {
                self.vendor_table.update(action)?;
            }
            Action::OpenVendorActions => {
                if let Some(vendor) = self.vendor_table.selected_vendor() {
                    self.modals.push(Modal::VendorActions {
                        vendor_id: vendor.id.clone(),
                        selected_index: 0,
                    });
                }
            }
            Action::ExportReport => self.export_all(),

            // ─────────────────────────────────────────────────────────────────
            // Header
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleTheme => self.toggle_theme(),
            Action::EnterSearchMode => {
                self.sidebar.active = Section::Dashboard;
                self.header.update(action)?;
            }
            Action::ExitSearchMode => {
                self.header.update(action)?;
            }
            Action::SearchInput(_) | Action::SearchBackspace => {
                self.header.update(action)?;
                self.refresh_table();
            }
            Action::OpenNotifications => {
                if self.modals.top() == Some(&Modal::Notifications) {
                    self.modals.pop();
                } else {
                    self.modals.push(Modal::Notifications);
                }
            }
            Action::OpenAccountMenu => {
                self.modals.push(Modal::AccountMenu { selected_index: 0 });
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ModalUp => self.modals.move_selection(true),
            Action::ModalDown => self.modals.move_selection(false),
            Action::ConfirmModal => {
                if let Some(modal) = self.modals.pop() {
                    match modal {
                        Modal::QuitConfirm => {
                            self.should_quit = true;
                        }
                        Modal::AccountMenu { selected_index } => {
                            if let Some(entry) = AccountAction::ALL.get(selected_index) {
                                self.apply_account_action(*entry);
                            }
                        }
                        Modal::VendorActions {
                            vendor_id,
                            selected_index,
                        } => {
                            if let Some(entry) = VendorAction::ALL.get(selected_index) {
                                self.apply_vendor_action(&vendor_id, *entry);
                            }
                        }
                        Modal::Help | Modal::Notifications | Modal::VendorDetails { .. } => {}
                    }
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let palette = self.config.theme.palette();
                let ctx = DashboardRenderContext {
                    domain: &self.domain,
                    palette,
                    error: self.error.as_deref(),
                    status_message: self.status_message.as_deref(),
                };

                draw_dashboard_screen(
                    frame,
                    area,
                    &mut self.sidebar,
                    &mut self.header,
                    &mut self.vendor_table,
                    &ctx,
                )?;

                // Draw modal overlay if active
                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_main_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Tab => Some(Action::NextSection),
            KeyCode::BackTab => Some(Action::PrevSection),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('T') => Some(Action::ToggleTheme),
            KeyCode::Char('n') => Some(Action::OpenNotifications),
            KeyCode::Char('a') => Some(Action::OpenAccountMenu),
            KeyCode::Esc => {
                self.error = None;
                self.status_message = None;
                None
            }
            _ if self.sidebar.active == Section::Dashboard => {
                return self.vendor_table.handle_key_event(key);
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::Notifications => self.notifications_dialog.handle_key_event(key),
            Modal::AccountMenu { .. } | Modal::VendorActions { .. } => {
                self.menu_dialog.handle_key_event(key)
            }
            Modal::VendorDetails { .. } => self.detail_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        let palette = self.config.theme.palette();
        match modal {
            Modal::QuitConfirm => {
                self.quit_dialog.set_palette(palette);
                self.quit_dialog.draw(frame, area)?;
            }
            Modal::Help => {
                self.help_dialog.set_palette(palette);
                self.help_dialog.draw(frame, area)?;
            }
            Modal::Notifications => {
                self.notifications_dialog.set_palette(palette);
                self.notifications_dialog
                    .set_notifications(&self.domain.notifications);
                self.notifications_dialog.draw(frame, area)?;
            }
            Modal::AccountMenu { selected_index } => {
                self.menu_dialog.set_palette(palette);
                self.menu_dialog
                    .set_menu(ACCOUNT_NAME, account_menu_entries(), *selected_index);
                self.menu_dialog.draw(frame, area)?;
            }
            Modal::VendorActions {
                vendor_id,
                selected_index,
            } => {
                let title = self
                    .domain
                    .vendor(vendor_id)
                    .map(|v| v.name.clone())
                    .unwrap_or_else(|| vendor_id.to_string());
                self.menu_dialog.set_palette(palette);
                self.menu_dialog
                    .set_menu(title, vendor_menu_entries(), *selected_index);
                self.menu_dialog.draw(frame, area)?;
            }
            Modal::VendorDetails { vendor_id } => {
                self.detail_dialog.set_palette(palette);
                self.detail_dialog
                    .set_vendor(self.domain.vendor(vendor_id).cloned());
                self.detail_dialog.draw(frame, area)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortColumn;
    use std::fs;

    fn test_app() -> App {
        let config = Config {
            show_splash: false,
            report_dir: std::env::temp_dir()
                .join(format!("securevendor-app-{}", std::process::id()))
                .to_string_lossy()
                .to_string(),
            ..Config::default()
        };
        let mut app = App::new(config, DomainState::new(), None);
        app.persist_theme = false;
        app
    }

    /// Feed one key through the same path the event loop uses
    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        let mut current = app.handle_key_event(key).unwrap();
        while let Some(action) = current {
            current = app.update(action).unwrap();
        }
    }

    fn visible_names(app: &App) -> Vec<String> {
        app.vendor_table
            .view()
            .rows
            .iter()
            .map(|v| v.name.clone())
            .collect()
    }

    #[test]
    fn test_starts_on_dashboard_without_splash() {
        let app = test_app();
        assert_eq!(app.mode, AppMode::Running);
        assert_eq!(app.sidebar.active, Section::Dashboard);
        assert_eq!(app.vendor_table.view().total_records, 12);
        assert_eq!(app.status_message.as_deref(), Some("Loaded 12 vendors from built-in demo data"));
    }

    #[test]
    fn test_splash_then_running() {
        let config = Config::default();
        let mut app = App::new(config, DomainState::new(), None);
        assert_eq!(app.mode, AppMode::Splash);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.mode, AppMode::Running);
    }

    #[test]
    fn test_sort_and_page_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Right);
        assert_eq!(visible_names(&app)[0], "LogStream");

        // Sorting keeps the page
        press(&mut app, KeyCode::Char('1'));
        let state = app.vendor_table.state();
        assert_eq!(state.sort_column(), SortColumn::Name);
        assert_eq!(state.current_page(), 2);

        assert_eq!(visible_names(&app), vec!["CDN Express", "BackupVault", "APIHub Services", "Analytics360"]);

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(visible_names(&app)[0], "SecureAuth Pro");
    }

    #[test]
    fn test_search_filters_and_clamps_page() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.vendor_table.state().current_page(), 2);

        press(&mut app, KeyCode::Char('/'));
        for c in "cloud".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(!app.header.search_mode);
        assert_eq!(visible_names(&app), vec!["CloudStore Inc"]);
        assert_eq!(app.vendor_table.state().current_page(), 1);
    }

    #[test]
    fn test_search_mode_captures_table_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.header.search_query, "2");
        assert_eq!(app.vendor_table.state().sort_column(), SortColumn::SecurityScore);
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key_event(key).unwrap(), Some(Action::ForceQuit));
    }

    #[test]
    fn test_suspend_vendor() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.modals.top(), Some(Modal::VendorActions { .. })));

        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.modals.is_empty());
        let vendor = app.domain.vendor(&VendorId::new("11")).unwrap();
        assert_eq!(vendor.status, VendorStatus::Suspended);
        assert_eq!(app.domain.activities.entries()[0].action, "Vendor suspended");
        assert_eq!(app.vendor_table.view().rows[0].status, VendorStatus::Suspended);
    }

    #[test]
    fn test_run_audit_sets_today() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        let id = app.vendor_table.selected_vendor().unwrap().id.clone();

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        let vendor = app.domain.vendor(&id).unwrap();
        assert_eq!(vendor.last_audit, Local::now().date_naive());
        assert_eq!(app.domain.activities.entries()[0].vendor, vendor.name);
    }

    #[test]
    fn test_view_details_opens_dialog() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.modals.top(),
            Some(&Modal::VendorDetails {
                vendor_id: VendorId::new("11")
            })
        );
        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_log_out_asks_to_quit() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('j'));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
    }

    #[test]
    fn test_account_settings_selects_section() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.sidebar.active, Section::Settings);

        // Table keys are ignored outside the dashboard
        press(&mut app, KeyCode::Right);
        assert_eq!(app.vendor_table.state().current_page(), 1);
    }

    #[test]
    fn test_theme_toggle() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('T'));
        assert_eq!(app.config.theme, crate::model::ui::Theme::Light);
        press(&mut app, KeyCode::Char('T'));
        assert_eq!(app.config.theme, crate::model::ui::Theme::Dark);
    }

    #[test]
    fn test_export_writes_sorted_report() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('x'));

        assert!(app.error.is_none(), "{:?}", app.error);
        let message = app.status_message.clone().unwrap();
        assert!(message.starts_with("Exported 12 vendors to "));

        let path = message.trim_start_matches("Exported 12 vendors to ");
        let text = fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 13);
        assert!(text.lines().nth(1).unwrap().contains("CryptoSafe"));

        let _ = fs::remove_file(path);
    }
}
