//! # Screen State
//!
//! One struct per screen, holding only what that screen needs to remember
//! between key presses. Results are stored as owned feature keys so that a
//! screen can sit on the navigation stack while the user looks at a detail
//! view and come back exactly as it was left.
//!
//! ```text
//! Menu ─┬─► Search ──────────────┐
//!       ├─► Recent ──────────────┼─► Detail
//!       └─► Years ─► YearFeatures┘
//! ```

use crate::core::catalog::Catalog;
use crate::core::i18n::Text;
use crate::core::query::{self, Page, RecentEntry, ScrollWindow, YearCount};

/// A clamped selection over a list of `len` rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub selected: usize,
    pub len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + 1).min(self.len - 1);
        }
    }

    pub fn page_up(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    pub fn page_down(&mut self, step: usize) {
        if self.len > 0 {
            self.selected = (self.selected + step).min(self.len - 1);
        }
    }

    pub fn home(&mut self) {
        self.selected = 0;
    }

    pub fn end(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }

    /// Visible `start..end` rows for a window of `visible` rows.
    pub fn window(&self, visible: usize) -> std::ops::Range<usize> {
        ScrollWindow::new(visible).range(self.selected, self.len)
    }
}

// ============================================================================
// Main Menu
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    FreeSearch,
    Recent,
    BaselineTarget,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::FreeSearch,
        MenuItem::Recent,
        MenuItem::BaselineTarget,
        MenuItem::Exit,
    ];

    /// Maps a `1`-based digit shortcut to its item.
    pub fn from_shortcut(c: char) -> Option<Self> {
        let index = c.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub cursor: Cursor,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            cursor: Cursor::new(MenuItem::ALL.len()),
        }
    }
}

impl MenuState {
    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.cursor.selected.min(MenuItem::ALL.len() - 1)]
    }
}

// ============================================================================
// Free Text Search
// ============================================================================

/// Free text search with pagination.
///
/// `editing` is the search mode in which printable keys edit the term.
/// Digits `1`-`9` are page shortcuts in both modes and never reach the term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub term: String,
    pub editing: bool,
    pub page: usize,
    pub selected: usize,
    pub page_size: usize,
    results: Vec<String>,
}

impl SearchState {
    pub fn new(catalog: &Catalog, page_size: usize) -> Self {
        let mut state = Self {
            term: String::new(),
            editing: false,
            page: 0,
            selected: 0,
            page_size: page_size.max(1),
            results: Vec::new(),
        };
        state.refresh(catalog);
        state
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn current_page(&self) -> Page {
        Page::new(self.results.len(), self.page_size, self.page)
    }

    /// Keys shown on the current page.
    pub fn page_results(&self) -> &[String] {
        let page = self.current_page();
        &self.results[page.start..page.end]
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.page_results().get(self.selected).map(String::as_str)
    }

    pub fn push_char(&mut self, catalog: &Catalog, c: char) {
        self.term.push(c);
        self.refresh(catalog);
    }

    pub fn pop_char(&mut self, catalog: &Catalog) {
        if self.term.pop().is_some() {
            self.refresh(catalog);
        }
    }

    /// Clears the term and leaves search mode.
    pub fn clear(&mut self, catalog: &Catalog) {
        self.editing = false;
        if !self.term.is_empty() {
            self.term.clear();
            self.refresh(catalog);
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let len = self.current_page().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn next_page(&mut self) {
        let total = self.current_page().total_pages;
        if self.page + 1 < total {
            self.set_page(self.page + 1);
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.set_page(self.page - 1);
        }
    }

    pub fn first_page(&mut self) {
        self.jump_to_page(0);
    }

    pub fn last_page(&mut self) {
        let total = self.current_page().total_pages;
        self.jump_to_page(total.saturating_sub(1));
    }

    /// Jumps to the zero-based `page` if it exists.
    pub fn jump_to_page(&mut self, page: usize) {
        if page < self.current_page().total_pages {
            self.set_page(page);
        }
    }

    fn set_page(&mut self, page: usize) {
        self.page = page;
        self.selected = 0;
    }

    fn refresh(&mut self, catalog: &Catalog) {
        self.results = query::search(catalog, &self.term)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.page = 0;
        self.selected = 0;
    }
}

// ============================================================================
// Recent Updates
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentState {
    /// Widely-available entries followed by newly-available ones.
    pub entries: Vec<RecentEntry>,
    /// Number of leading entries that are widely available.
    pub high_count: usize,
    pub days: u32,
    pub cursor: Cursor,
}

impl RecentState {
    pub fn new(catalog: &Catalog, today: chrono::NaiveDate, days: u32) -> Self {
        let recent = query::recent(catalog, today, days);
        let high_count = recent.high.len();
        let entries: Vec<RecentEntry> = recent.high.into_iter().chain(recent.low).collect();
        let cursor = Cursor::new(entries.len());
        Self {
            entries,
            high_count,
            days,
            cursor,
        }
    }

    pub fn is_high(&self, index: usize) -> bool {
        index < self.high_count
    }

    pub fn low_count(&self) -> usize {
        self.entries.len() - self.high_count
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.entries
            .get(self.cursor.selected)
            .map(|entry| entry.key.as_str())
    }
}

// ============================================================================
// Baseline Target (by year)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearsState {
    pub years: Vec<YearCount>,
    pub cursor: Cursor,
}

impl YearsState {
    pub fn new(catalog: &Catalog) -> Self {
        let years = query::baseline_years(catalog);
        let cursor = Cursor::new(years.len());
        Self { years, cursor }
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.years.get(self.cursor.selected).map(|y| y.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearFeaturesState {
    pub year: i32,
    pub keys: Vec<String>,
    pub cursor: Cursor,
}

impl YearFeaturesState {
    pub fn new(catalog: &Catalog, year: i32) -> Self {
        let keys: Vec<String> = query::features_in_year(catalog, year)
            .into_iter()
            .map(str::to_string)
            .collect();
        let cursor = Cursor::new(keys.len());
        Self { year, keys, cursor }
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.keys.get(self.cursor.selected).map(String::as_str)
    }
}

// ============================================================================
// Detail
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    pub key: String,
    pub scroll: u16,
    /// Largest useful scroll offset, updated by the renderer once the
    /// content height is known.
    pub max_scroll: u16,
}

impl DetailState {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            scroll: 0,
            max_scroll: u16::MAX,
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        self.scroll = u16::try_from(next).unwrap_or(self.max_scroll);
    }

    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.scroll = self.scroll.min(max_scroll);
    }
}

// ============================================================================
// Screen
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu(MenuState),
    Search(SearchState),
    Recent(RecentState),
    Years(YearsState),
    YearFeatures(YearFeaturesState),
    Detail(DetailState),
}

impl Screen {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu(_) => "menu",
            Screen::Search(_) => "search",
            Screen::Recent(_) => "recent",
            Screen::Years(_) => "years",
            Screen::YearFeatures(_) => "year-features",
            Screen::Detail(_) => "detail",
        }
    }

    /// Breadcrumb label shown in the title bar.
    pub fn label(&self) -> Text {
        match self {
            Screen::Menu(_) => Text::CrumbMenu,
            Screen::Search(_) => Text::CrumbSearch,
            Screen::Recent(_) => Text::CrumbRecent,
            Screen::Years(_) => Text::CrumbYears,
            Screen::YearFeatures(_) => Text::CrumbYearFeatures,
            Screen::Detail(_) => Text::CrumbDetail,
        }
    }
}
