//! UI state - presentation enums shared by the components

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Sidebar navigation sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Vendors,
    SecurityScore,
    RiskAssessment,
    Compliance,
    Analytics,
    DataManagement,
    Settings,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Dashboard,
        Section::Vendors,
        Section::SecurityScore,
        Section::RiskAssessment,
        Section::Compliance,
        Section::Analytics,
        Section::DataManagement,
        Section::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Vendors => "Vendors",
            Section::SecurityScore => "Security Score",
            Section::RiskAssessment => "Risk Assessment",
            Section::Compliance => "Compliance",
            Section::Analytics => "Analytics",
            Section::DataManagement => "Data Management",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "▦",
            Section::Vendors => "◉",
            Section::SecurityScore => "⛨",
            Section::RiskAssessment => "⚠",
            Section::Compliance => "☰",
            Section::Analytics => "↗",
            Section::DataManagement => "⛁",
            Section::Settings => "⚙",
        }
    }

    /// Page heading for the placeholder of unfinished sections
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Vendors => "Vendors",
            Section::SecurityScore => "Security",
            Section::RiskAssessment => "Risks",
            Section::Compliance => "Compliance",
            Section::Analytics => "Analytics",
            Section::DataManagement => "Database",
            Section::Settings => "Settings",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Section {
        let index = self.index();
        if index == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[index - 1]
        }
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Rgb(9, 9, 11),
                foreground: Color::White,
                muted: Color::DarkGray,
                border: Color::DarkGray,
                primary: Color::Cyan,
                on_primary: Color::Black,
                accent: Color::Rgb(39, 39, 42),
            },
            Theme::Light => Palette {
                background: Color::Rgb(250, 250, 250),
                foreground: Color::Black,
                muted: Color::Gray,
                border: Color::Gray,
                primary: Color::Blue,
                on_primary: Color::White,
                accent: Color::Rgb(228, 228, 231),
            },
        }
    }
}

/// Theme colours resolved for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub accent: Color,
}

/// Status colours shared by badges, bars and the activity feed
pub mod colors {
    use ratatui::style::Color;

    pub const GREEN: Color = Color::Rgb(16, 185, 129);
    pub const YELLOW: Color = Color::Rgb(245, 158, 11);
    pub const ORANGE: Color = Color::Rgb(249, 115, 22);
    pub const RED: Color = Color::Rgb(239, 68, 68);
    pub const BLUE: Color = Color::Rgb(59, 130, 246);
}
