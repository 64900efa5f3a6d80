//! Vendor table view state - sorting and pagination
//!
//! `TableState` is a small `Copy` value. Every transition takes the state by
//! value and returns the replacement, so the host component swaps it in one
//! assignment and nothing can observe a half-applied change (for example a
//! new sort column still paired with the old direction).
//!
//! `compute_visible_slice` is the only place records are ordered and paged.
//! It borrows the record set, never mutates it, and returns a `PageView`
//! describing exactly what the table and pager should draw.

use super::vendor::Vendor;
use std::cmp::Ordering;
use std::num::NonZeroUsize;

/// Rows shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(size) => size,
    None => unreachable!(),
};

// ═══════════════════════════════════════════════════════════════════════════════
// Sort Column & Direction
// ═══════════════════════════════════════════════════════════════════════════════

/// Columns the vendor table can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    Category,
    SecurityScore,
    RiskLevel,
    Compliance,
    LastAudit,
}

impl SortColumn {
    /// Sortable columns in header order
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Name,
        SortColumn::Category,
        SortColumn::SecurityScore,
        SortColumn::RiskLevel,
        SortColumn::Compliance,
        SortColumn::LastAudit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Name => "Vendor Name",
            SortColumn::Category => "Category",
            SortColumn::SecurityScore => "Security Score",
            SortColumn::RiskLevel => "Risk Level",
            SortColumn::Compliance => "Compliance",
            SortColumn::LastAudit => "Last Audit",
        }
    }

    /// The column after this one, wrapping around
    pub fn next(&self) -> SortColumn {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Compare two vendors on this column in ascending polarity
    ///
    /// Scores compare numerically. Every other column compares its text form:
    /// risk level by its lowercase tag, audit date by its ISO string (whose
    /// text order is the chronological order).
    pub fn compare(&self, a: &Vendor, b: &Vendor) -> Ordering {
        match self {
            SortColumn::SecurityScore => a.security_score.cmp(&b.security_score),
            SortColumn::Compliance => a.compliance.cmp(&b.compliance),
            SortColumn::Name => collate(&a.name, &b.name),
            SortColumn::Category => collate(&a.category, &b.category),
            SortColumn::RiskLevel => collate(a.risk_level.as_str(), b.risk_level.as_str()),
            SortColumn::LastAudit => collate(&a.last_audit_str(), &b.last_audit_str()),
        }
    }
}

/// Comparator polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Locale-style text ordering
///
/// Letters compare case-insensitively first; strings that differ only in case
/// put lowercase first. This is not full Unicode collation: characters
/// compare by code point after lowercasing, so accented letters sort after `z`.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    // 'a' > 'A' in code points, so reversing the raw comparison puts lowercase first
    primary.then_with(|| b.cmp(a))
}

/// Stable sort of the record set by column and direction
///
/// Ties keep their input order in both directions.
pub fn sort_records<'a>(
    records: &'a [Vendor],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<&'a Vendor> {
    let mut sorted: Vec<&Vendor> = records.iter().collect();
    sorted.sort_by(|a, b| direction.apply(column.compare(a, b)));
    sorted
}

// ═══════════════════════════════════════════════════════════════════════════════
// Table State
// ═══════════════════════════════════════════════════════════════════════════════

/// Sort and page selection for the vendor table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableState {
    sort_column: SortColumn,
    sort_direction: SortDirection,
    /// 1-based
    current_page: usize,
    page_size: NonZeroUsize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    /// Fresh state: highest security score first, on page 1
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            sort_column: SortColumn::SecurityScore,
            sort_direction: SortDirection::Descending,
            current_page: 1,
            page_size,
        }
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Activate a column header
    ///
    /// The same column flips the direction; a different column becomes the
    /// sort column in descending order. The current page is left as is.
    pub fn with_sort(self, column: SortColumn) -> Self {
        if column == self.sort_column {
            Self {
                sort_direction: self.sort_direction.flipped(),
                ..self
            }
        } else {
            Self {
                sort_column: column,
                sort_direction: SortDirection::Descending,
                ..self
            }
        }
    }

    /// Advance one page, stopping at the last page
    pub fn next_page(self, total_pages: usize) -> Self {
        if total_pages == 0 {
            return self;
        }
        Self {
            current_page: (self.current_page + 1).min(total_pages),
            ..self
        }
    }

    /// Go back one page, stopping at page 1
    pub fn prev_page(self) -> Self {
        Self {
            current_page: self.current_page.saturating_sub(1).max(1),
            ..self
        }
    }

    /// Jump to a page enumerated from a `PageView`
    pub fn set_page(self, page: PageNumber) -> Self {
        Self {
            current_page: page.get(),
            ..self
        }
    }

    pub fn first_page(self) -> Self {
        Self {
            current_page: 1,
            ..self
        }
    }

    pub fn last_page(self, total_pages: usize) -> Self {
        Self {
            current_page: total_pages.max(1),
            ..self
        }
    }

    /// Pull the page back into range after the record set shrank
    ///
    /// Sorting never changes the record count, so only the host calls this,
    /// when it swaps in a different record set (e.g. a search filter).
    pub fn clamp_to(self, total_pages: usize) -> Self {
        Self {
            current_page: self.current_page.min(total_pages).max(1),
            ..self
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Page View
// ═══════════════════════════════════════════════════════════════════════════════

/// A page number known to exist in the view it was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    pub fn get(self) -> usize {
        self.0.get()
    }
}

/// The rendered window over the sorted record set
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// Records on the current page, in display order
    pub rows: Vec<&'a Vendor>,
    /// 1-based position of the first row shown
    pub first_shown: usize,
    /// 1-based position of the last row shown
    pub last_shown: usize,
    pub total_records: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl PageView<'_> {
    /// Every page of this view, in order; the only source of `PageNumber`s
    pub fn pages(&self) -> impl Iterator<Item = PageNumber> {
        (1..=self.total_pages).filter_map(|n| NonZeroUsize::new(n).map(PageNumber))
    }

    /// Look up a page by number, if it exists in this view
    pub fn page(&self, number: usize) -> Option<PageNumber> {
        if number <= self.total_pages {
            NonZeroUsize::new(number).map(PageNumber)
        } else {
            None
        }
    }

    pub fn is_current(&self, page: PageNumber) -> bool {
        page.get() == self.current_page
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sort the record set and cut out the current page
pub fn compute_visible_slice<'a>(records: &'a [Vendor], state: &TableState) -> PageView<'a> {
    let sorted = sort_records(records, state.sort_column, state.sort_direction);

    let page_size = state.page_size.get();
    let total_records = sorted.len();
    let total_pages = total_records.div_ceil(page_size);
    let start_index = (state.current_page - 1).saturating_mul(page_size);
    let last_shown = start_index.saturating_add(page_size).min(total_records);

    let rows = if start_index >= total_records {
        Vec::new()
    } else {
        sorted[start_index..last_shown].to_vec()
    };

    PageView {
        rows,
        first_shown: start_index + 1,
        last_shown,
        total_records,
        total_pages,
        current_page: state.current_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data;
    use crate::model::vendor::{RiskLevel, Score, VendorId, VendorStatus};
    use chrono::NaiveDate;

    fn vendor(id: usize, name: &str, score: i64) -> Vendor {
        Vendor {
            id: VendorId::new(id.to_string()),
            name: name.to_string(),
            category: "Testing".to_string(),
            security_score: Score::new(score, "securityScore").unwrap(),
            status: VendorStatus::Active,
            risk_level: RiskLevel::Low,
            last_audit: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            compliance: Score::new(50, "compliance").unwrap(),
        }
    }

    fn numbered(count: usize) -> Vec<Vendor> {
        (0..count)
            .map(|i| vendor(i, &format!("Vendor {:02}", i), (i * 7 % 101) as i64))
            .collect()
    }

    fn scores(view: &PageView) -> Vec<u8> {
        view.rows.iter().map(|v| v.security_score.value()).collect()
    }

    fn ids(rows: &[&Vendor]) -> Vec<String> {
        rows.iter().map(|v| v.id.to_string()).collect()
    }

    fn page_size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_default_state() {
        let state = TableState::default();
        assert_eq!(state.sort_column(), SortColumn::SecurityScore);
        assert_eq!(state.sort_direction(), SortDirection::Descending);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size().get(), 8);
    }

    #[test]
    fn test_default_view_of_mock_vendors() {
        let vendors = sample_data::mock_vendors();
        let state = TableState::default();

        let view = compute_visible_slice(&vendors, &state);
        assert_eq!(scores(&view), vec![95, 92, 90, 88, 85, 82, 78, 75]);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.first_shown, 1);
        assert_eq!(view.last_shown, 8);
        assert_eq!(view.total_records, 12);

        let state = state.next_page(view.total_pages);
        let view = compute_visible_slice(&vendors, &state);
        assert_eq!(scores(&view), vec![72, 65, 58, 45]);
        assert_eq!(view.first_shown, 9);
        assert_eq!(view.last_shown, 12);
    }

    #[test]
    fn test_same_column_flips_direction() {
        let state = TableState::default();

        let state = state.with_sort(SortColumn::SecurityScore);
        assert_eq!(state.sort_direction(), SortDirection::Ascending);

        let state = state.with_sort(SortColumn::SecurityScore);
        assert_eq!(state.sort_direction(), SortDirection::Descending);
        assert_eq!(state.sort_column(), SortColumn::SecurityScore);
    }

    #[test]
    fn test_new_column_resets_to_descending() {
        let ascending = TableState::default().with_sort(SortColumn::SecurityScore);
        assert_eq!(ascending.sort_direction(), SortDirection::Ascending);

        let state = ascending.with_sort(SortColumn::Name);
        assert_eq!(state.sort_column(), SortColumn::Name);
        assert_eq!(state.sort_direction(), SortDirection::Descending);

        let state = TableState::default().with_sort(SortColumn::Name);
        assert_eq!(state.sort_direction(), SortDirection::Descending);
    }

    #[test]
    fn test_sort_keeps_current_page() {
        let vendors = sample_data::mock_vendors();
        let state = TableState::default().next_page(2);
        assert_eq!(state.current_page(), 2);

        let state = state.with_sort(SortColumn::Name);
        assert_eq!(state.current_page(), 2);

        let view = compute_visible_slice(&vendors, &state);
        assert_eq!(view.rows.len(), 4);
    }

    #[test]
    fn test_reverse_direction_reverses_order_except_ties() {
        // Two tie groups (50 and 70) interleaved with a unique 60
        let vendors = vec![
            vendor(0, "a", 50),
            vendor(1, "b", 70),
            vendor(2, "c", 50),
            vendor(3, "d", 70),
            vendor(4, "e", 60),
        ];

        let asc = sort_records(&vendors, SortColumn::SecurityScore, SortDirection::Ascending);
        let desc = sort_records(&vendors, SortColumn::SecurityScore, SortDirection::Descending);

        assert_eq!(ids(&asc), vec!["0", "2", "4", "1", "3"]);
        assert_eq!(ids(&desc), vec!["1", "3", "4", "0", "2"]);
    }

    #[test]
    fn test_reverse_direction_is_exact_reverse_without_ties() {
        let vendors = sample_data::mock_vendors();
        for column in [SortColumn::Name, SortColumn::SecurityScore, SortColumn::Compliance] {
            let asc = sort_records(&vendors, column, SortDirection::Ascending);
            let mut desc = sort_records(&vendors, column, SortDirection::Descending);
            desc.reverse();
            assert_eq!(ids(&asc), ids(&desc), "column {:?}", column);
        }
    }

    #[test]
    fn test_text_columns_use_string_order() {
        let vendors = sample_data::mock_vendors();

        let by_risk = sort_records(&vendors, SortColumn::RiskLevel, SortDirection::Ascending);
        let risks: Vec<&str> = by_risk.iter().map(|v| v.risk_level.as_str()).collect();
        let first_low = risks.iter().position(|r| *r == "low").unwrap();
        assert_eq!(risks[0], "critical");
        assert!(risks[..first_low].iter().all(|r| *r == "critical" || *r == "high"));
        assert_eq!(*risks.last().unwrap(), "medium");

        let by_audit = sort_records(&vendors, SortColumn::LastAudit, SortDirection::Descending);
        assert_eq!(by_audit[0].name, "CryptoSafe");
        assert_eq!(by_audit.last().unwrap().name, "APIHub Services");
    }

    #[test]
    fn test_collate_is_case_insensitive() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("CDN Express", "CloudStore Inc"), Ordering::Less);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_name_sort() {
        let vendors = sample_data::mock_vendors();
        let state = TableState::default().with_sort(SortColumn::Name);
        let view = compute_visible_slice(&vendors, &state);
        assert_eq!(view.rows[0].name, "SecureAuth Pro");

        let state = state.with_sort(SortColumn::Name);
        let view = compute_visible_slice(&vendors, &state);
        assert_eq!(view.rows[0].name, "Analytics360");
        assert_eq!(view.rows[1].name, "APIHub Services");
    }

    #[test]
    fn test_pages_partition_records() {
        for count in 0..=20 {
            let vendors = numbered(count);
            for size in 1..=13 {
                let mut state = TableState::new(page_size(size));
                let first = compute_visible_slice(&vendors, &state);

                let mut seen = Vec::new();
                for page in first.pages() {
                    state = state.set_page(page);
                    let view = compute_visible_slice(&vendors, &state);
                    assert!(view.rows.len() <= size);
                    seen.extend(ids(&view.rows));
                }

                assert_eq!(seen.len(), count, "count {} size {}", count, size);
                let mut unique = seen.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), count, "count {} size {}", count, size);
            }
        }
    }

    #[test]
    fn test_visible_slice_is_idempotent() {
        let vendors = sample_data::mock_vendors();
        let state = TableState::default().with_sort(SortColumn::Category);
        let before = vendors.clone();

        let first = compute_visible_slice(&vendors, &state);
        let second = compute_visible_slice(&vendors, &state);
        assert_eq!(first, second);
        assert_eq!(vendors, before);
    }

    #[test]
    fn test_empty_record_set() {
        let vendors: Vec<Vendor> = Vec::new();
        let state = TableState::default();
        let view = compute_visible_slice(&vendors, &state);

        assert_eq!(view.total_pages, 0);
        assert!(view.is_empty());
        assert_eq!(view.pages().count(), 0);
        assert_eq!(view.last_shown, 0);

        let state = state.next_page(view.total_pages);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_single_record() {
        let vendors = vec![vendor(1, "Solo", 42)];
        let view = compute_visible_slice(&vendors, &TableState::default());
        assert_eq!(view.total_pages, 1);
        assert_eq!(ids(&view.rows), vec!["1"]);
        assert_eq!((view.first_shown, view.last_shown), (1, 1));
    }

    #[test]
    fn test_page_navigation_bounds() {
        let state = TableState::default();
        assert_eq!(state.prev_page().current_page(), 1);

        let state = state.next_page(3).next_page(3);
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.next_page(3).current_page(), 3);
        assert_eq!(state.prev_page().current_page(), 2);

        assert_eq!(state.first_page().current_page(), 1);
        assert_eq!(TableState::default().last_page(4).current_page(), 4);
        assert_eq!(TableState::default().last_page(0).current_page(), 1);
    }

    #[test]
    fn test_set_page_only_accepts_enumerated_pages() {
        let vendors = numbered(20);
        let view = compute_visible_slice(&vendors, &TableState::default());
        assert_eq!(view.total_pages, 3);
        assert!(view.page(0).is_none());
        assert!(view.page(4).is_none());

        let page = view.page(3).unwrap();
        let state = TableState::default().set_page(page);
        let view = compute_visible_slice(&vendors, &state);
        assert!(view.is_current(page));
        assert!(view.is_last_page());
        assert_eq!(view.rows.len(), 4);
    }

    #[test]
    fn test_out_of_range_page_after_shrink() {
        let vendors = numbered(20);
        let state = TableState::default().last_page(3);

        // Host swaps in a smaller record set without clamping
        let fewer = &vendors[..5];
        let view = compute_visible_slice(fewer, &state);
        assert_eq!(view.total_pages, 1);
        assert!(view.is_empty());
        assert!(!view.pages().any(|p| view.is_current(p)));

        let clamped = state.clamp_to(view.total_pages);
        assert_eq!(clamped.current_page(), 1);
        let view = compute_visible_slice(fewer, &clamped);
        assert_eq!(view.rows.len(), 5);

        assert_eq!(state.clamp_to(0).current_page(), 1);
    }

    #[test]
    fn test_column_cycle() {
        let mut column = SortColumn::Name;
        for _ in 0..SortColumn::ALL.len() {
            column = column.next();
        }
        assert_eq!(column, SortColumn::Name);
        assert_eq!(SortColumn::LastAudit.next(), SortColumn::Name);
    }
}
