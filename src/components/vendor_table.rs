//! Vendor table component
//!
//! Owns the table's `TableState` and the record set it pages over. Every
//! frame re-derives the `PageView` from those two values, so sorting, paging
//! and the pager line can never disagree.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::hit;
use crate::model::table::sort_records;
use crate::model::ui::{colors, Palette, Theme};
use crate::model::{
    compute_visible_slice, PageNumber, PageView, RiskLevel, Score, ScoreBand, SortColumn,
    TableState, Vendor, VendorStatus,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{self, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use std::num::NonZeroUsize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cells in a score bar
const BAR_WIDTH: usize = 8;

/// Most page buttons shown at once
const MAX_PAGE_BUTTONS: usize = 7;

// ═══════════════════════════════════════════════════════════════════════════════
// Columns
// ═══════════════════════════════════════════════════════════════════════════════

/// Displayed columns, left to right; status is the only one that can't sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DisplayColumn {
    Sortable(SortColumn),
    Status,
}

const COLUMNS: [DisplayColumn; 7] = [
    DisplayColumn::Sortable(SortColumn::Name),
    DisplayColumn::Sortable(SortColumn::Category),
    DisplayColumn::Sortable(SortColumn::SecurityScore),
    DisplayColumn::Status,
    DisplayColumn::Sortable(SortColumn::RiskLevel),
    DisplayColumn::Sortable(SortColumn::Compliance),
    DisplayColumn::Sortable(SortColumn::LastAudit),
];

fn column_widths() -> [Constraint; 7] {
    [
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(11),
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Length(12),
    ]
}

/// Pager buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagerTarget {
    Prev,
    Next,
    Page(PageNumber),
}

impl PagerTarget {
    fn action(self) -> Action {
        match self {
            PagerTarget::Prev => Action::PrevPage,
            PagerTarget::Next => Action::NextPage,
            PagerTarget::Page(page) => Action::GoToPage(page),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Vendor Table Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct VendorTableComponent {
    state: TableState,

    /// Record set the table pages over (already filtered by search)
    records: Vec<Vendor>,

    /// Row cursor within the visible page
    cursor: usize,

    palette: Palette,

    /// Header cells of the last frame, for mouse sorting
    header_areas: Vec<(Rect, SortColumn)>,

    /// Pager buttons of the last frame
    pager_areas: Vec<(Rect, PagerTarget)>,
}

impl Default for VendorTableComponent {
    fn default() -> Self {
        Self::new(TableState::default().page_size())
    }
}

impl VendorTableComponent {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            state: TableState::new(page_size),
            records: Vec::new(),
            cursor: 0,
            palette: Theme::Dark.palette(),
            header_areas: Vec::new(),
            pager_areas: Vec::new(),
        }
    }

    pub fn state(&self) -> TableState {
        self.state
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Replace the record set, pulling the page back into range
    pub fn set_records(&mut self, records: Vec<Vendor>) {
        let total_pages = records.len().div_ceil(self.state.page_size().get());
        self.records = records;
        self.state = self.state.clamp_to(total_pages);
        self.clamp_cursor();
    }

    pub fn records(&self) -> &[Vendor] {
        &self.records
    }

    pub fn view(&self) -> PageView<'_> {
        compute_visible_slice(&self.records, &self.state)
    }

    /// Vendor under the row cursor
    pub fn selected_vendor(&self) -> Option<&Vendor> {
        compute_visible_slice(&self.records, &self.state)
            .rows
            .get(self.cursor)
            .copied()
    }

    /// Whole record set in the current sort order
    pub fn sorted_records(&self) -> Vec<&Vendor> {
        sort_records(
            &self.records,
            self.state.sort_column(),
            self.state.sort_direction(),
        )
    }

    /// Rows needed to draw a full page with header, borders and pager
    pub fn required_height(&self) -> u16 {
        let rows = self.state.page_size().get().min(u16::MAX as usize) as u16;
        rows.saturating_add(5)
    }

    fn clamp_cursor(&mut self) {
        let visible = self.view().rows.len();
        self.cursor = self.cursor.min(visible.saturating_sub(1));
    }

    fn replace_state(&mut self, state: TableState) {
        if state.current_page() != self.state.current_page() {
            self.cursor = 0;
        }
        self.state = state;
        log::debug!(
            "Vendor table: {} {} page {}",
            self.state.sort_column().label(),
            self.state.sort_direction().name(),
            self.state.current_page()
        );
    }
}

impl Component for VendorTableComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Sorting
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                Some(Action::SortBy(SortColumn::ALL[index]))
            }
            KeyCode::Char('s') => Some(Action::CycleSort),

            // Paging
            KeyCode::Left | KeyCode::Char('[') => Some(Action::PrevPage),
            KeyCode::Right | KeyCode::Char(']') => Some(Action::NextPage),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstPage),
            KeyCode::End | KeyCode::Char('G') => Some(Action::LastPage),

            // Rows
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Enter => Some(Action::OpenVendorActions),
            KeyCode::Char('x') => Some(Action::ExportReport),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let header = self
                    .header_areas
                    .iter()
                    .find(|(rect, _)| hit(*rect, mouse.column, mouse.row))
                    .map(|(_, column)| Action::SortBy(*column));

                header.or_else(|| {
                    self.pager_areas
                        .iter()
                        .find(|(rect, _)| hit(*rect, mouse.column, mouse.row))
                        .map(|(_, target)| target.action())
                })
            }
            MouseEventKind::ScrollDown => Some(Action::NextRow),
            MouseEventKind::ScrollUp => Some(Action::PrevRow),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let total_pages = self.view().total_pages;
        match action {
            Action::SortBy(column) => self.replace_state(self.state.with_sort(column)),
            Action::CycleSort => {
                let column = self.state.sort_column().next();
                self.replace_state(self.state.with_sort(column));
            }
            Action::NextPage => self.replace_state(self.state.next_page(total_pages)),
            Action::PrevPage => self.replace_state(self.state.prev_page()),
            Action::GoToPage(page) => {
                // A page taken from an older view may no longer exist
                self.replace_state(self.state.set_page(page).clamp_to(total_pages))
            }
            Action::FirstPage => self.replace_state(self.state.first_page()),
            Action::LastPage => self.replace_state(self.state.last_page(total_pages)),
            Action::NextRow => {
                let visible = self.view().rows.len();
                if self.cursor + 1 < visible {
                    self.cursor += 1;
                }
            }
            Action::PrevRow => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.palette;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let view = compute_visible_slice(&self.records, &self.state);

        let title = format!(
            " Vendors ({}) │ {} {} ",
            view.total_records,
            self.state.sort_column().label(),
            self.state.sort_direction().arrow()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Style::default().fg(palette.primary).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(palette.border));

        // Header hit areas mirror the table's own column layout
        let inner = block.inner(chunks[0]);
        let header_row = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));
        let column_rects = Layout::horizontal(column_widths())
            .flex(Flex::Start)
            .spacing(1)
            .split(header_row);

        self.header_areas = COLUMNS
            .iter()
            .zip(column_rects.iter())
            .filter_map(|(column, rect)| match column {
                DisplayColumn::Sortable(sort) => Some((*rect, *sort)),
                DisplayColumn::Status => None,
            })
            .collect();

        let header_cells: Vec<Cell> = COLUMNS
            .iter()
            .map(|column| header_cell(*column, &self.state, &palette))
            .collect();

        if view.is_empty() {
            let message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No vendors match the current search",
                    Style::default().fg(palette.muted),
                )),
            ])
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
            frame.render_widget(message, chunks[0]);
        } else {
            let rows: Vec<Row> = view
                .rows
                .iter()
                .map(|vendor| vendor_row(vendor, &column_rects, &palette))
                .collect();

            let table = Table::new(rows, column_widths())
                .header(Row::new(header_cells).bottom_margin(1))
                .block(block)
                .flex(Flex::Start)
                .column_spacing(1)
                .highlight_style(
                    Style::default()
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                );

            let mut row_state = widgets::TableState::default().with_selected(Some(self.cursor));
            frame.render_stateful_widget(table, chunks[0], &mut row_state);
        }

        self.pager_areas = render_pager(frame, chunks[1], &view, &palette);
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Helpers
// ═══════════════════════════════════════════════════════════════════════════════

fn header_cell(column: DisplayColumn, state: &TableState, palette: &Palette) -> Cell<'static> {
    let style = Style::default().fg(palette.muted).add_modifier(Modifier::BOLD);
    match column {
        DisplayColumn::Status => Cell::from(Span::styled("Status", style)),
        DisplayColumn::Sortable(sort) if sort == state.sort_column() => Cell::from(Line::from(vec![
            Span::styled(
                sort.label(),
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", state.sort_direction().arrow()),
                Style::default().fg(palette.primary),
            ),
        ])),
        DisplayColumn::Sortable(sort) => Cell::from(Span::styled(sort.label(), style)),
    }
}

fn vendor_row<'a>(vendor: &'a Vendor, column_rects: &[Rect], palette: &Palette) -> Row<'a> {
    let width = |index: usize| column_rects.get(index).map(|r| r.width as usize).unwrap_or(0);

    Row::new(vec![
        Cell::from(Span::styled(
            truncate(&vendor.name, width(0)),
            Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
        )),
        Cell::from(Span::styled(
            truncate(&vendor.category, width(1)),
            Style::default().fg(palette.muted),
        )),
        Cell::from(score_bar(vendor.security_score, palette)),
        Cell::from(Span::styled(
            vendor.status.label(),
            Style::default()
                .fg(status_color(vendor.status))
                .add_modifier(Modifier::BOLD),
        )),
        Cell::from(Span::styled(
            vendor.risk_level.label(),
            Style::default()
                .fg(risk_color(vendor.risk_level))
                .add_modifier(Modifier::BOLD),
        )),
        Cell::from(score_bar(vendor.compliance, palette)),
        Cell::from(Span::styled(
            vendor.last_audit_str(),
            Style::default().fg(palette.muted),
        )),
    ])
}

/// `92 ███████░` coloured by score band
fn score_bar(score: Score, palette: &Palette) -> Line<'static> {
    let filled = (score.value() as usize * BAR_WIDTH + 50) / 100;
    let color = band_color(score.band());
    Line::from(vec![
        Span::styled(
            format!("{:>3} ", score.value()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::default().fg(palette.border),
        ),
    ])
}

pub fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Good => colors::GREEN,
        ScoreBand::Fair => colors::YELLOW,
        ScoreBand::Poor => colors::ORANGE,
        ScoreBand::Bad => colors::RED,
    }
}

pub fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => colors::GREEN,
        RiskLevel::Medium => colors::YELLOW,
        RiskLevel::High => colors::ORANGE,
        RiskLevel::Critical => colors::RED,
    }
}

pub fn status_color(status: VendorStatus) -> Color {
    match status {
        VendorStatus::Active => colors::GREEN,
        VendorStatus::Review => colors::BLUE,
        VendorStatus::Suspended => colors::RED,
    }
}

/// Cut text to `width` display columns, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Page numbers worth a button: all of them, or a window around the current page
fn pager_window(view: &PageView) -> Vec<PageNumber> {
    let pages: Vec<PageNumber> = view.pages().collect();
    if pages.len() <= MAX_PAGE_BUTTONS {
        return pages;
    }

    let current = view.current_page.clamp(1, pages.len()) - 1;
    let start = current
        .saturating_sub(MAX_PAGE_BUTTONS / 2)
        .min(pages.len() - MAX_PAGE_BUTTONS);
    pages[start..start + MAX_PAGE_BUTTONS].to_vec()
}

/// Draw `Showing X to Y of N vendors` and the page buttons; returns the button areas
fn render_pager(
    frame: &mut Frame,
    area: Rect,
    view: &PageView,
    palette: &Palette,
) -> Vec<(Rect, PagerTarget)> {
    let summary = if view.total_records == 0 {
        "No vendors to show".to_string()
    } else if view.is_empty() {
        format!("Page {} is empty", view.current_page)
    } else {
        format!(
            "Showing {} to {} of {} vendors",
            view.first_shown, view.last_shown, view.total_records
        )
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", summary), Style::default().fg(palette.muted))),
        area,
    );

    if view.total_pages == 0 {
        return Vec::new();
    }

    let enabled = Style::default().fg(palette.foreground);
    let disabled = Style::default().fg(palette.border);

    let mut segments: Vec<(String, Style, Option<PagerTarget>)> = vec![(
        "‹ Prev".to_string(),
        if view.is_first_page() { disabled } else { enabled },
        Some(PagerTarget::Prev),
    )];
    for page in pager_window(view) {
        segments.push((" ".to_string(), Style::default(), None));
        if view.is_current(page) {
            segments.push((
                format!("[{}]", page.get()),
                Style::default()
                    .fg(palette.on_primary)
                    .bg(palette.primary)
                    .add_modifier(Modifier::BOLD),
                Some(PagerTarget::Page(page)),
            ));
        } else {
            segments.push((format!(" {} ", page.get()), enabled, Some(PagerTarget::Page(page))));
        }
    }
    segments.push((" ".to_string(), Style::default(), None));
    segments.push((
        "Next ›".to_string(),
        if view.is_last_page() { disabled } else { enabled },
        Some(PagerTarget::Next),
    ));
    segments.push((" ".to_string(), Style::default(), None));

    let total_width: u16 = segments.iter().map(|(text, _, _)| text.width() as u16).sum();
    let start_x = area.x + area.width.saturating_sub(total_width);

    let mut areas = Vec::new();
    let mut x = start_x;
    let mut spans = Vec::new();
    for (text, style, target) in segments {
        let width = text.width() as u16;
        if let Some(target) = target {
            areas.push((Rect::new(x, area.y, width, 1), target));
        }
        x = x.saturating_add(width);
        spans.push(Span::styled(text, style));
    }

    let pager_area = Rect::new(start_x, area.y, total_width.min(area.width), 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), pager_area);
    areas
}
