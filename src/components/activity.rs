//! Recent activity panel

use crate::model::activity::{Activity, ActivityStatus};
use crate::model::ui::{colors, Palette};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn status_color(status: ActivityStatus) -> Color {
    match status {
        ActivityStatus::Success => colors::GREEN,
        ActivityStatus::Warning => colors::YELLOW,
        ActivityStatus::Error => colors::RED,
        ActivityStatus::Info => colors::BLUE,
    }
}

pub fn render_recent_activity(frame: &mut Frame, area: Rect, entries: &[Activity], palette: &Palette) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(status_color(entry.status))),
                    Span::styled(
                        entry.action.clone(),
                        Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(entry.vendor.clone(), Style::default().fg(palette.primary)),
                    Span::styled(format!(" · {}", entry.time), Style::default().fg(palette.muted)),
                ]),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(" Recent Activity ")
            .title_style(Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(list, area);
}
