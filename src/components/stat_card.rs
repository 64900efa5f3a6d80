//! Stat cards - the four headline numbers above the charts

use crate::model::metrics::DashboardStats;
use crate::model::ui::{colors, Palette};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    fn color(self) -> Color {
        match self {
            Trend::Up => colors::GREEN,
            Trend::Down => colors::RED,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub change: &'static str,
    pub description: &'static str,
    pub trend: Trend,
}

/// Cards for Total Vendors, Avg Security Score, Critical Issues and Compliance Rate
pub fn stat_cards(stats: &DashboardStats) -> [StatCard; 4] {
    [
        StatCard {
            title: "Total Vendors",
            icon: "◉",
            value: stats.total_vendors.to_string(),
            change: "+3 this month",
            description: "from last month",
            trend: Trend::Up,
        },
        StatCard {
            title: "Avg Security Score",
            icon: "⛨",
            value: stats.avg_security_score.to_string(),
            change: "+5.2%",
            description: "vs last month",
            trend: Trend::Up,
        },
        StatCard {
            title: "Critical Issues",
            icon: "⚠",
            value: stats.critical_issues.to_string(),
            change: "-2 resolved",
            description: "vs last week",
            trend: Trend::Down,
        },
        StatCard {
            title: "Compliance Rate",
            icon: "✔",
            value: format!("{}%", stats.compliance_rate),
            change: "+2.1%",
            description: "across all vendors",
            trend: Trend::Up,
        },
    ]
}

pub fn render_stat_card(frame: &mut Frame, area: Rect, card: &StatCard, palette: &Palette) {
    let trend_color = card.trend.color();

    let title = Line::from(vec![
        Span::styled(format!(" {} ", card.title), Style::default().fg(palette.muted)),
        Span::styled(format!("{} ", card.icon), Style::default().fg(trend_color)),
    ]);

    let lines = vec![
        Line::from(Span::styled(
            card.value.clone(),
            Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                card.change,
                Style::default().fg(trend_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", card.description), Style::default().fg(palette.muted)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(title),
    );
    frame.render_widget(paragraph, area);
}
