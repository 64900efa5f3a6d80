//! Menu dialog - shared by the account menu and the vendor actions menu
//!
//! The highlighted entry lives on the modal stack; the App hands the entries
//! and the current selection in before each draw.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::modal::{AccountAction, VendorAction};
use crate::model::ui::{colors, Palette, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub destructive: bool,
}

pub fn vendor_menu_entries() -> Vec<MenuEntry> {
    VendorAction::ALL
        .iter()
        .map(|a| MenuEntry {
            label: a.label(),
            destructive: a.is_destructive(),
        })
        .collect()
}

pub fn account_menu_entries() -> Vec<MenuEntry> {
    AccountAction::ALL
        .iter()
        .map(|a| MenuEntry {
            label: a.label(),
            destructive: a.is_destructive(),
        })
        .collect()
}

pub struct MenuDialog {
    title: String,
    entries: Vec<MenuEntry>,
    selected: usize,
    palette: Palette,
}

impl Default for MenuDialog {
    fn default() -> Self {
        Self {
            title: String::new(),
            entries: Vec::new(),
            selected: 0,
            palette: Theme::Dark.palette(),
        }
    }
}

impl MenuDialog {
    pub fn set_menu(&mut self, title: impl Into<String>, entries: Vec<MenuEntry>, selected: usize) {
        self.title = title.into();
        self.entries = entries;
        self.selected = selected;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

impl Component for MenuDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ModalDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ModalUp),
            KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.palette;
        let width = self
            .entries
            .iter()
            .map(|e| e.label.len())
            .chain(std::iter::once(self.title.len()))
            .max()
            .unwrap_or(0) as u16
            + 8;
        let popup_area = centered_popup(area, width, self.entries.len() as u16 + 2);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let color = if entry.destructive {
                    colors::RED
                } else {
                    palette.foreground
                };
                ListItem::new(Line::from(Span::styled(
                    format!(" {}", entry.label),
                    Style::default().fg(color),
                )))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.primary))
                    .style(Style::default().bg(palette.background))
                    .title(format!(" {} ", self.title))
                    .title_style(Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)),
            )
            .highlight_style(
                Style::default()
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸");

        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, popup_area, &mut state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_menu_keys() {
        let mut menu = MenuDialog::default();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(menu.handle_key_event(press(KeyCode::Char('j'))).unwrap(), Some(Action::ModalDown));
        assert_eq!(menu.handle_key_event(press(KeyCode::Up)).unwrap(), Some(Action::ModalUp));
        assert_eq!(menu.handle_key_event(press(KeyCode::Enter)).unwrap(), Some(Action::ConfirmModal));
        assert_eq!(menu.handle_key_event(press(KeyCode::Esc)).unwrap(), Some(Action::CloseModal));
    }

    #[test]
    fn test_vendor_menu_renders_entries() {
        let mut menu = MenuDialog::default();
        menu.set_menu("CryptoSafe", vendor_menu_entries(), 1);

        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|frame| {
                menu.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("CryptoSafe"));
        assert!(text.contains("View Details"));
        assert!(text.contains("▸ Run Audit"));
        assert!(text.contains("Suspend Vendor"));
    }

    #[test]
    fn test_destructive_entries() {
        let entries = account_menu_entries();
        let destructive: Vec<&str> = entries
            .iter()
            .filter(|e| e.destructive)
            .map(|e| e.label)
            .collect();
        assert_eq!(destructive, vec!["Log out"]);
    }
}
