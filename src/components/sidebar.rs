//! Sidebar component - section navigation and system status

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::hit;
use crate::model::ui::{colors, Palette, Section, Theme};
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Share of monitored systems reporting healthy
const SYSTEM_HEALTH_PERCENT: u16 = 94;

pub struct SidebarComponent {
    pub active: Section,
    palette: Palette,
    /// Section rows of the last frame, for mouse selection
    item_areas: Vec<(Rect, Section)>,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            active: Section::Dashboard,
            palette: Theme::Dark.palette(),
            item_areas: Vec::new(),
        }
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

impl Component for SidebarComponent {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        Ok(self
            .item_areas
            .iter()
            .find(|(rect, _)| hit(*rect, mouse.column, mouse.row))
            .map(|(_, section)| Action::SelectSection(*section)))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextSection => self.active = self.active.next(),
            Action::PrevSection => self.active = self.active.previous(),
            Action::SelectSection(section) => self.active = section,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.palette;
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(5),
            ])
            .split(inner);

        // Brand
        let brand = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(" ⛨ ", Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)),
                Span::styled(
                    "SecureVendor",
                    Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
                ),
            ]),
        ]);
        frame.render_widget(brand, chunks[0]);

        // Sections, one row each
        self.item_areas.clear();
        let nav = chunks[1];
        for (i, section) in Section::ALL.iter().enumerate() {
            let y = nav.y + 1 + i as u16;
            if y >= nav.y + nav.height {
                break;
            }
            let row = Rect::new(nav.x, y, nav.width, 1);
            let style = if *section == self.active {
                Style::default()
                    .fg(palette.on_primary)
                    .bg(palette.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            let text = format!(" {} {}", section.icon(), section.label());
            frame.render_widget(Paragraph::new(Span::styled(text, style)).style(style), row);
            self.item_areas.push((row, *section));
        }

        // Status footer
        let footer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(chunks[2]);

        frame.render_widget(
            Paragraph::new(Span::styled(
                " Security Status",
                Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
            )),
            footer[1],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                " All systems operational",
                Style::default().fg(palette.muted),
            )),
            footer[2],
        );
        let gauge_area = Rect::new(
            footer[3].x + 1,
            footer[3].y,
            footer[3].width.saturating_sub(2),
            footer[3].height,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(colors::GREEN).bg(palette.accent))
                .percent(SYSTEM_HEALTH_PERCENT)
                .label(format!("{}%", SYSTEM_HEALTH_PERCENT)),
            gauge_area,
        );

        Ok(())
    }
}
