//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use crate::model::ui::{Palette, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
pub struct HelpDialog {
    pub scroll_offset: usize,
    palette: Palette,
}

impl Default for HelpDialog {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            palette: Theme::Dark.palette(),
        }
    }
}

impl HelpDialog {
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.scroll_offset = 0;
                Some(Action::CloseModal)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.palette;
        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin / 2,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin),
        );
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content(&palette);
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(palette.primary).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(palette.primary))
                    .style(Style::default().bg(palette.background)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let heading = Style::default().fg(palette.primary).add_modifier(Modifier::BOLD);
    let rule = Style::default().fg(palette.border);
    let key_style = Style::default().fg(palette.primary).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(palette.foreground);

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {} ", title), heading)));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            rule,
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:14}", key), key_style),
            Span::styled(description.to_string(), text),
        ]));
    };

    add_section(&mut lines, "Navigation");
    add_shortcut(&mut lines, "Tab", "Next sidebar section");
    add_shortcut(&mut lines, "Shift+Tab", "Previous sidebar section");
    add_shortcut(&mut lines, "j / ↓", "Move to next vendor");
    add_shortcut(&mut lines, "k / ↑", "Move to previous vendor");

    add_section(&mut lines, "Vendor Table");
    add_shortcut(&mut lines, "1 - 6", "Sort by column (again to reverse)");
    add_shortcut(&mut lines, "s", "Cycle sort column");
    add_shortcut(&mut lines, "← / [", "Previous page");
    add_shortcut(&mut lines, "→ / ]", "Next page");
    add_shortcut(&mut lines, "g / Home", "First page");
    add_shortcut(&mut lines, "G / End", "Last page");
    add_shortcut(&mut lines, "Enter", "Open vendor actions");
    add_shortcut(&mut lines, "x", "Export the current view to CSV");

    add_section(&mut lines, "Search");
    add_shortcut(&mut lines, "/", "Search vendors by name or category");
    add_shortcut(&mut lines, "Esc / Enter", "Leave search, keep the filter");
    add_shortcut(&mut lines, "Backspace", "Delete last character");

    add_section(&mut lines, "Dialogs");
    add_shortcut(&mut lines, "n", "Notifications");
    add_shortcut(&mut lines, "a", "Account menu");
    add_shortcut(&mut lines, "T", "Toggle light/dark theme");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit / Close dialog");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    add_section(&mut lines, "Mouse");
    add_shortcut(&mut lines, "Click header", "Sort by that column");
    add_shortcut(&mut lines, "Click page", "Jump to that page");
    add_shortcut(&mut lines, "Wheel", "Move the row cursor");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(palette.muted),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_scroll_is_clamped_on_draw() {
        let mut dialog = HelpDialog::default();
        for _ in 0..5 {
            dialog
                .handle_key_event(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE))
                .unwrap();
        }
        assert_eq!(dialog.scroll_offset, 50);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                dialog.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let total = build_help_content(&Theme::Dark.palette()).len();
        assert_eq!(dialog.scroll_offset, total - 18);
    }

    #[test]
    fn test_close_resets_scroll() {
        let mut dialog = HelpDialog {
            scroll_offset: 4,
            ..HelpDialog::default()
        };
        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
        assert_eq!(dialog.scroll_offset, 0);
    }
}
