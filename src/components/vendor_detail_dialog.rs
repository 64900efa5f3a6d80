//! Vendor details dialog

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::components::vendor_table::{band_color, risk_color, status_color};
use crate::model::ui::{Palette, Theme};
use crate::model::Vendor;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct VendorDetailDialog {
    vendor: Option<Vendor>,
    palette: Palette,
}

impl Default for VendorDetailDialog {
    fn default() -> Self {
        Self {
            vendor: None,
            palette: Theme::Dark.palette(),
        }
    }
}

impl VendorDetailDialog {
    pub fn set_vendor(&mut self, vendor: Option<Vendor>) {
        self.vendor = vendor;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    fn field<'a>(&self, label: &'a str, value: String, color: Color) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!(" {:<16}", label), Style::default().fg(self.palette.muted)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    }
}

impl Component for VendorDetailDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.palette;
        let popup_area = centered_popup(area, 52, 13);
        frame.render_widget(Clear, popup_area);

        let (title, lines) = match &self.vendor {
            Some(vendor) => (
                format!(" {} ", vendor.name),
                vec![
                    self.field("ID", vendor.id.to_string(), palette.foreground),
                    self.field("Category", vendor.category.clone(), palette.foreground),
                    self.field(
                        "Security Score",
                        vendor.security_score.to_string(),
                        band_color(vendor.security_score.band()),
                    ),
                    self.field(
                        "Compliance",
                        format!("{}%", vendor.compliance),
                        band_color(vendor.compliance.band()),
                    ),
                    self.field("Status", vendor.status.label().to_string(), status_color(vendor.status)),
                    self.field(
                        "Risk Level",
                        vendor.risk_level.label().to_string(),
                        risk_color(vendor.risk_level),
                    ),
                    self.field("Last Audit", vendor.last_audit_str(), palette.foreground),
                    Line::from(""),
                    Line::from(Span::styled(" Esc to close", Style::default().fg(palette.muted))),
                ],
            ),
            None => (
                " Vendor ".to_string(),
                vec![Line::from(Span::styled(
                    " Vendor no longer exists",
                    Style::default().fg(palette.muted),
                ))],
            ),
        };

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.primary))
                .style(Style::default().bg(palette.background))
                .title(title)
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

    fn render(dialog: &mut VendorDetailDialog) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|frame| {
                dialog.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_shows_vendor_fields() {
        let vendor = sample_data::mock_vendors()
            .into_iter()
            .find(|v| v.name == "MailerPro")
            .unwrap();
        let mut dialog = VendorDetailDialog::default();
        dialog.set_vendor(Some(vendor));

        let text = render(&mut dialog);
        assert!(text.contains("MailerPro"));
        assert!(text.contains("Security Score"));
        assert!(text.contains("65"));
    }

    #[test]
    fn test_missing_vendor() {
        let mut dialog = VendorDetailDialog::default();
        let text = render(&mut dialog);
        assert!(text.contains("Vendor no longer exists"));
    }
}
