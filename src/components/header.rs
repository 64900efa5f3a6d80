//! Header component - search box, theme toggle, notifications and account
//!
//! Owns the search query; the App re-filters the vendor table whenever a
//! search action passes through `update`.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::hit;
use crate::model::ui::{colors, Palette, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const ACCOUNT_NAME: &str = "Admin User";
pub const ACCOUNT_EMAIL: &str = "admin@securevendor.io";

#[derive(Default)]
struct HeaderAreas {
    search: Rect,
    theme: Rect,
    notifications: Rect,
    account: Rect,
}

pub struct HeaderComponent {
    pub search_query: String,
    pub search_mode: bool,
    theme: Theme,
    notification_count: usize,
    areas: HeaderAreas,
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderComponent {
    pub fn new() -> Self {
        Self {
            search_query: String::new(),
            search_mode: false,
            theme: Theme::Dark,
            notification_count: 0,
            areas: HeaderAreas::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_notification_count(&mut self, count: usize) {
        self.notification_count = count;
    }

    fn palette(&self) -> Palette {
        self.theme.palette()
    }
}

impl Component for HeaderComponent {
    /// Keys while the search box has focus
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let (column, row) = (mouse.column, mouse.row);
        let action = if hit(self.areas.search, column, row) {
            Some(Action::EnterSearchMode)
        } else if hit(self.areas.theme, column, row) {
            Some(Action::ToggleTheme)
        } else if hit(self.areas.notifications, column, row) {
            Some(Action::OpenNotifications)
        } else if hit(self.areas.account, column, row) {
            Some(Action::OpenAccountMenu)
        } else {
            None
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::EnterSearchMode => self.search_mode = true,
            Action::ExitSearchMode => self.search_mode = false,
            Action::SearchInput(c) => self.search_query.push(c),
            Action::SearchBackspace => {
                self.search_query.pop();
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.palette();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Single content row, vertically centred
        let row = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1) / 2, inner.width, inner.height.min(1));
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),
                Constraint::Length(10),
                Constraint::Length(7),
                Constraint::Length(38),
            ])
            .split(row);

        // Search box
        let search_line = if self.search_mode {
            Line::from(vec![
                Span::styled(" ⌕ ", Style::default().fg(palette.primary)),
                Span::styled(
                    format!("{}_", self.search_query),
                    Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
                ),
            ])
        } else if self.search_query.is_empty() {
            Line::from(vec![
                Span::styled(" ⌕ ", Style::default().fg(palette.muted)),
                Span::styled("Search vendors...", Style::default().fg(palette.muted)),
            ])
        } else {
            Line::from(vec![
                Span::styled(" ⌕ ", Style::default().fg(palette.muted)),
                Span::styled(self.search_query.clone(), Style::default().fg(palette.foreground)),
            ])
        };
        frame.render_widget(Paragraph::new(search_line), chunks[0]);

        // Theme toggle
        let theme_label = match self.theme {
            Theme::Dark => " ☾ Dark ",
            Theme::Light => " ☀ Light ",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(theme_label, Style::default().fg(palette.foreground).bg(palette.accent))),
            chunks[1],
        );

        // Notification bell with badge
        let mut bell = vec![Span::styled(" ⚑", Style::default().fg(palette.foreground))];
        if self.notification_count > 0 {
            bell.push(Span::styled(
                format!(" {} ", self.notification_count),
                Style::default()
                    .fg(colors::RED)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(bell)), chunks[2]);

        // Account
        let account = Line::from(vec![
            Span::styled(
                format!(" {} ", ACCOUNT_NAME),
                Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
            ),
            Span::styled(ACCOUNT_EMAIL, Style::default().fg(palette.muted)),
            Span::styled(" ▾", Style::default().fg(palette.muted)),
        ]);
        frame.render_widget(Paragraph::new(account), chunks[3]);

        self.areas = HeaderAreas {
            search: chunks[0],
            theme: chunks[1],
            notifications: chunks[2],
            account: chunks[3],
        };
        Ok(())
    }
}
