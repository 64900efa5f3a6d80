//! Notifications dialog - opened from the header bell

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::activity::{Notification, NotificationLevel};
use crate::model::ui::{colors, Palette, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct NotificationsDialog {
    notifications: Vec<Notification>,
    palette: Palette,
}

impl Default for NotificationsDialog {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
            palette: Theme::Dark.palette(),
        }
    }
}

impl NotificationsDialog {
    pub fn set_notifications(&mut self, notifications: &[Notification]) {
        self.notifications = notifications.to_vec();
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

fn level_color(level: NotificationLevel) -> Color {
    match level {
        NotificationLevel::Critical => colors::RED,
        NotificationLevel::Warning => colors::YELLOW,
        NotificationLevel::Info => colors::BLUE,
    }
}

impl Component for NotificationsDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('n') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.palette;
        // Three lines per entry plus borders and footer
        let height = (self.notifications.len() as u16 * 3).max(1) + 4;
        let popup_area = centered_popup(area, 56, height);
        frame.render_widget(Clear, popup_area);

        let mut lines = Vec::new();
        if self.notifications.is_empty() {
            lines.push(Line::from(Span::styled(
                " No notifications",
                Style::default().fg(palette.muted),
            )));
        }
        for notification in &self.notifications {
            let color = level_color(notification.level);
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", notification.level.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    notification.title.clone(),
                    Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!(" {}", notification.detail),
                Style::default().fg(palette.foreground),
            )));
            lines.push(Line::from(Span::styled(
                format!(" {}", notification.age),
                Style::default().fg(palette.muted),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Esc to close",
            Style::default().fg(palette.muted),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.primary))
                .style(Style::default().bg(palette.background))
                .title(format!(" Notifications ({}) ", self.notifications.len()))
                .title_style(Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_lists_every_level() {
        let mut dialog = NotificationsDialog::default();
        dialog.set_notifications(&sample_data::notifications());

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                dialog.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Notifications (3)"));
        assert!(text.contains("Critical"));
        assert!(text.contains("Monthly Report Ready"));
        assert!(text.contains("2 mins ago"));
    }
}
