//! Dashboard charts - score trend, risk distribution, incidents and compliance

use crate::components::vendor_table::risk_color;
use crate::model::metrics::{percent_of, ComplianceScore, TrendPoint};
use crate::model::ui::{colors, Palette};
use crate::model::RiskLevel;
use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

fn chart_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD))
}

/// Plot points for one series, x = month index
fn series(trend: &[TrendPoint], value: impl Fn(&TrendPoint) -> u64) -> Vec<(f64, f64)> {
    trend
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, value(point) as f64))
        .collect()
}

/// Y-axis bounds padded to the nearest multiple of `step` around the data
fn padded_bounds(points: &[(f64, f64)], step: f64) -> [f64; 2] {
    let min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [0.0, step];
    }
    let low = ((min / step).floor() * step).max(0.0);
    let mut high = (max / step).ceil() * step;
    if high <= low {
        high = low + step;
    }
    [low, high]
}

fn month_labels<'a>(trend: &[TrendPoint], palette: &Palette) -> Vec<Span<'a>> {
    trend
        .iter()
        .map(|p| Span::styled(p.month, Style::default().fg(palette.muted)))
        .collect()
}

fn value_labels<'a>(bounds: [f64; 2], palette: &Palette) -> Vec<Span<'a>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::styled(format!("{:.0}", v), Style::default().fg(palette.muted)))
        .collect()
}

/// How one monthly series is drawn
struct LineSeries {
    title: &'static str,
    /// Y-axis bounds snap to multiples of this
    step: f64,
    color: Color,
}

fn line_chart(
    frame: &mut Frame,
    area: Rect,
    line: LineSeries,
    trend: &[TrendPoint],
    points: &[(f64, f64)],
    palette: &Palette,
) {
    let bounds = padded_bounds(points, line.step);
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(line.color))
        .data(points);

    let chart = Chart::new(vec![dataset])
        .block(chart_block(line.title, palette))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(palette.border))
                .bounds([0.0, trend.len().saturating_sub(1).max(1) as f64])
                .labels(month_labels(trend, palette)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(palette.border))
                .bounds(bounds)
                .labels(value_labels(bounds, palette)),
        );

    frame.render_widget(chart, area);
}

pub fn render_security_trend(frame: &mut Frame, area: Rect, trend: &[TrendPoint], palette: &Palette) {
    let points = series(trend, |p| p.score);
    let line = LineSeries {
        title: "Security Score Trend",
        step: 10.0,
        color: palette.primary,
    };
    line_chart(frame, area, line, trend, &points, palette);
}

pub fn render_incidents(frame: &mut Frame, area: Rect, trend: &[TrendPoint], palette: &Palette) {
    let points = series(trend, |p| p.incidents);
    let line = LineSeries {
        title: "Security Incidents",
        step: 5.0,
        color: colors::RED,
    };
    line_chart(frame, area, line, trend, &points, palette);
}

/// Vendor count per risk level, each bar labelled with its share
pub fn render_risk_distribution(
    frame: &mut Frame,
    area: Rect,
    distribution: &[(RiskLevel, u64)],
    palette: &Palette,
) {
    let total: u64 = distribution.iter().map(|(_, count)| count).sum();
    let bars: Vec<Bar> = distribution
        .iter()
        .map(|(level, count)| {
            Bar::default()
                .value(*count)
                .label(level.label().into())
                .text_value(format!("{} {}%", count, percent_of(*count, total)))
                .style(Style::default().fg(risk_color(*level)))
                .value_style(
                    Style::default()
                        .fg(palette.on_primary)
                        .bg(risk_color(*level))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let slots = distribution.len().max(1) as u16;
    let bar_width = (inner_width / slots).saturating_sub(1).max(1);

    let chart = BarChart::default()
        .block(chart_block("Risk Distribution", palette))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

/// Horizontal bars, one per framework
pub fn render_compliance(frame: &mut Frame, area: Rect, scores: &[ComplianceScore], palette: &Palette) {
    let bars: Vec<Bar> = scores
        .iter()
        .map(|score| {
            Bar::default()
                .value(score.score)
                .label(score.framework.into())
                .text_value(format!("{}%", score.score))
                .style(Style::default().fg(palette.primary))
                .value_style(
                    Style::default()
                        .fg(palette.on_primary)
                        .bg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block("Compliance Scores", palette))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .max(100);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::metrics::risk_distribution;
    use crate::model::sample_data;
    use crate::model::ui::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_padded_bounds() {
        let points = series(&sample_data::security_trend(), |p| p.score);
        assert_eq!(padded_bounds(&points, 10.0), [70.0, 100.0]);

        let points = series(&sample_data::security_trend(), |p| p.incidents);
        assert_eq!(padded_bounds(&points, 5.0), [0.0, 15.0]);

        assert_eq!(padded_bounds(&[], 5.0), [0.0, 5.0]);
        assert_eq!(padded_bounds(&[(0.0, 20.0)], 10.0), [20.0, 30.0]);
    }

    #[test]
    fn test_charts_render() {
        let palette = Theme::Dark.palette();
        let trend = sample_data::security_trend();
        let distribution = risk_distribution(&sample_data::mock_vendors());
        let compliance = sample_data::compliance_scores();

        let mut terminal = Terminal::new(TestBackend::new(120, 24)).unwrap();
        terminal
            .draw(|frame| {
                render_security_trend(frame, Rect::new(0, 0, 60, 12), &trend, &palette);
                render_risk_distribution(frame, Rect::new(60, 0, 60, 12), &distribution, &palette);
                render_incidents(frame, Rect::new(0, 12, 60, 12), &trend, &palette);
                render_compliance(frame, Rect::new(60, 12, 60, 12), &compliance, &palette);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Security Score Trend"));
        assert!(text.contains("Risk Distribution"));
        assert!(text.contains("Security Incidents"));
        assert!(text.contains("Compliance Scores"));
    }
}
