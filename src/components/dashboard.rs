//! Dashboard screen - composes sidebar, header, cards, charts and the vendor table
//!
//! Layout, status bar and help bar live here; each panel draws itself.

use crate::component::Component;
use crate::components::activity::render_recent_activity;
use crate::components::charts::{
    render_compliance, render_incidents, render_risk_distribution, render_security_trend,
};
use crate::components::layout::{calculate_dashboard_layout, calculate_main_layout};
use crate::components::stat_card::{render_stat_card, stat_cards};
use crate::components::{HeaderComponent, SidebarComponent, VendorTableComponent};
use crate::model::metrics::risk_distribution;
use crate::model::ui::{Palette, Section};
use crate::model::DomainState;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Rows used by the page heading
const HEADING_HEIGHT: u16 = 2;

/// Context needed for rendering the main screen
pub struct DashboardRenderContext<'a> {
    pub domain: &'a DomainState,
    pub palette: Palette,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the main screen
pub fn draw_dashboard_screen(
    frame: &mut Frame,
    area: Rect,
    sidebar: &mut SidebarComponent,
    header: &mut HeaderComponent,
    vendor_table: &mut VendorTableComponent,
    ctx: &DashboardRenderContext,
) -> Result<()> {
    let palette = ctx.palette;
    let layout = calculate_main_layout(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        area,
    );

    sidebar.set_palette(palette);
    sidebar.draw(frame, layout.sidebar)?;
    header.draw(frame, layout.header)?;

    match sidebar.active {
        Section::Dashboard => draw_dashboard_content(frame, layout.content, vendor_table, ctx)?,
        section => render_placeholder(frame, layout.content, section, &palette),
    }

    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, header, &palette);
    Ok(())
}

fn draw_dashboard_content(
    frame: &mut Frame,
    area: Rect,
    vendor_table: &mut VendorTableComponent,
    ctx: &DashboardRenderContext,
) -> Result<()> {
    let palette = ctx.palette;
    let area = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADING_HEIGHT), Constraint::Min(0)])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Dashboard",
            Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Monitor and manage your vendor security landscape",
            Style::default().fg(palette.muted),
        )),
    ]);
    frame.render_widget(heading, chunks[0]);

    let body = chunks[1];
    let table_height = vendor_table.required_height();
    let cards = stat_cards(&ctx.domain.stats());

    vendor_table.set_palette(palette);

    // Full dashboard when everything fits: cards 5, charts 8 + 8, table
    if body.height >= table_height.saturating_add(21) {
        let layout = calculate_dashboard_layout(body, table_height);
        for (card, card_area) in cards.iter().zip(layout.stat_cards.iter()) {
            render_stat_card(frame, *card_area, card, &palette);
        }
        render_security_trend(frame, layout.trend_chart, &ctx.domain.security_trend, &palette);
        render_risk_distribution(
            frame,
            layout.risk_chart,
            &risk_distribution(&ctx.domain.vendors),
            &palette,
        );
        vendor_table.draw(frame, layout.table)?;
        render_incidents(frame, layout.incidents_chart, &ctx.domain.security_trend, &palette);
        render_compliance(frame, layout.compliance_chart, &ctx.domain.compliance_scores, &palette);
        render_recent_activity(frame, layout.activity, ctx.domain.activities.entries(), &palette);
    } else if body.height >= table_height.saturating_add(5) {
        // Cards and table only
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(body);
        let card_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[0]);
        for (card, card_area) in cards.iter().zip(card_areas.iter()) {
            render_stat_card(frame, *card_area, card, &palette);
        }
        vendor_table.draw(frame, rows[1])?;
    } else {
        vendor_table.draw(frame, body)?;
    }

    Ok(())
}

/// Heading and notice for sections that have no screen yet
fn render_placeholder(frame: &mut Frame, area: Rect, section: Section, palette: &Palette) {
    let top = area.y + area.height.saturating_sub(2) / 2;
    let message_area = Rect::new(area.x, top, area.width, area.height.min(2));

    let message = Paragraph::new(vec![
        Line::from(Span::styled(
            section.title(),
            Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This section is under construction",
            Style::default().fg(palette.muted),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(message, message_area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &DashboardRenderContext) {
    let palette = ctx.palette;
    let mut spans = vec![
        Span::styled(
            format!(" {} ", ctx.domain.source.describe()),
            Style::default()
                .fg(palette.on_primary)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    if let Some(error) = ctx.error {
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hint(key: &'static str, color: Color) -> Span<'static> {
    Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

fn render_help_bar(frame: &mut Frame, area: Rect, header: &HeaderComponent, palette: &Palette) {
    let help_spans = if header.search_mode {
        vec![
            key_hint(" Esc/Enter ", Color::Yellow),
            Span::raw("Done  "),
            key_hint(" Backspace ", Color::Cyan),
            Span::raw("Delete  "),
            Span::styled(
                format!("Search: {}", header.search_query),
                Style::default().fg(palette.primary),
            ),
        ]
    } else {
        vec![
            key_hint(" q ", Color::Yellow),
            Span::raw("Quit "),
            key_hint(" Tab ", Color::Cyan),
            Span::raw("Section "),
            key_hint(" / ", Color::Cyan),
            Span::raw("Search "),
            key_hint(" 1-6 ", Color::Green),
            Span::raw("Sort "),
            key_hint(" ←/→ ", Color::Green),
            Span::raw("Page "),
            key_hint(" Enter ", Color::Green),
            Span::raw("Actions "),
            key_hint(" x ", Color::Magenta),
            Span::raw("Export "),
            key_hint(" T ", Color::Blue),
            Span::raw("Theme "),
            key_hint(" n ", Color::Blue),
            Span::raw("Alerts "),
            key_hint(" ? ", Color::White),
            Span::raw("Help"),
        ]
    };

    frame.render_widget(
        Paragraph::new(Line::from(help_spans)).alignment(Alignment::Left),
        area,
    );
}
