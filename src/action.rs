//! Action enum - All possible application actions
//!
//! Components turn key and mouse events into Actions; the App applies them.

use crate::model::{PageNumber, SortColumn};
use crate::model::ui::Section;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Leave the splash screen
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Sidebar
    // ─────────────────────────────────────────────────────────────────────────
    NextSection,
    PrevSection,
    SelectSection(Section),

    // ─────────────────────────────────────────────────────────────────────────
    // Vendor Table
    // ─────────────────────────────────────────────────────────────────────────
    /// Column header activated
    SortBy(SortColumn),
    /// Activate the header after the current sort column
    CycleSort,
    NextPage,
    PrevPage,
    GoToPage(PageNumber),
    FirstPage,
    LastPage,
    /// Move the row cursor within the visible page
    NextRow,
    PrevRow,
    /// Open the actions menu for the row under the cursor
    OpenVendorActions,
    /// Export the sorted vendor list as CSV
    ExportReport,

    // ─────────────────────────────────────────────────────────────────────────
    // Header
    // ─────────────────────────────────────────────────────────────────────────
    ToggleTheme,
    EnterSearchMode,
    ExitSearchMode,
    SearchInput(char),
    SearchBackspace,
    OpenNotifications,
    OpenAccountMenu,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,
    /// Confirm the highlighted entry of the top modal
    ConfirmModal,
    ModalUp,
    ModalDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextSection => write!(f, "NextSection"),
            Action::PrevSection => write!(f, "PrevSection"),
            Action::SelectSection(section) => write!(f, "SelectSection({})", section.label()),
            Action::SortBy(column) => write!(f, "SortBy({})", column.label()),
            Action::CycleSort => write!(f, "CycleSort"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::GoToPage(page) => write!(f, "GoToPage({})", page.get()),
            Action::FirstPage => write!(f, "FirstPage"),
            Action::LastPage => write!(f, "LastPage"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::OpenVendorActions => write!(f, "OpenVendorActions"),
            Action::ExportReport => write!(f, "ExportReport"),
            Action::ToggleTheme => write!(f, "ToggleTheme"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::OpenNotifications => write!(f, "OpenNotifications"),
            Action::OpenAccountMenu => write!(f, "OpenAccountMenu"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
        }
    }
}
