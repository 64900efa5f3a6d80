//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 26;

/// Main screen layout areas
pub struct MainLayout {
    pub sidebar: Rect,
    pub header: Rect,
    pub content: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Dashboard content areas, top to bottom
pub struct DashboardLayout {
    pub stat_cards: [Rect; 4],
    pub trend_chart: Rect,
    pub risk_chart: Rect,
    pub table: Rect,
    pub incidents_chart: Rect,
    pub compliance_chart: Rect,
    pub activity: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Whether a terminal cell lies inside `rect`
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    // Sidebar on the left, everything else on the right
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    // Right side: header + content + status line + help bar
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(horizontal_chunks[1]);

    MainLayout {
        sidebar: horizontal_chunks[0],
        header: right_chunks[0],
        content: right_chunks[1],
        status: right_chunks[2],
        help: right_chunks[3],
    }
}

/// Split the dashboard content into cards, charts, table and activity
///
/// The vendor table gets `table_height` rows; the chart rows share the rest.
pub fn calculate_dashboard_layout(area: Rect, table_height: u16) -> DashboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(table_height),
            Constraint::Min(8),
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ])
        .split(rows[3]);

    DashboardLayout {
        stat_cards: [cards[0], cards[1], cards[2], cards[3]],
        trend_chart: charts[0],
        risk_chart: charts[1],
        table: rows[2],
        incidents_chart: bottom[0],
        compliance_chart: bottom[1],
        activity: bottom[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_clamped() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_popup(area, 10, 4), Rect::new(10, 3, 10, 4));
        assert_eq!(centered_popup(area, 50, 20), Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_hit() {
        let rect = Rect::new(5, 2, 4, 2);
        assert!(hit(rect, 5, 2));
        assert!(hit(rect, 8, 3));
        assert!(!hit(rect, 9, 3));
        assert!(!hit(rect, 5, 4));
        assert!(!hit(Rect::default(), 0, 0));
    }

    #[test]
    fn test_main_layout() {
        let layout = calculate_main_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.help.y, 39);
        assert_eq!(layout.content.x, SIDEBAR_WIDTH);
    }
}
