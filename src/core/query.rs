//! # Catalog Queries
//!
//! Pure functions over a [`Catalog`]: free-text search, pagination, the
//! recent-updates window and the by-year grouping. Nothing here knows about
//! screens or key presses.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::core::catalog::{BaselineDate, Catalog, FeatureEntry};

/// Case-insensitive substring search over feature keys and names.
///
/// A blank term matches every entry. Otherwise the term is matched as typed,
/// surrounding spaces included. Redirect entries (`moved`, `split`) only
/// match on their key.
pub fn search<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a str> {
    if term.trim().is_empty() {
        return catalog.iter().map(|(key, _)| key).collect();
    }
    let needle = term.to_lowercase();

    catalog
        .iter()
        .filter(|(key, entry)| {
            if key.to_lowercase().contains(&needle) {
                return true;
            }
            matches!(entry, FeatureEntry::Feature(data) if data.name.to_lowercase().contains(&needle))
        })
        .map(|(key, _)| key)
        .collect()
}

// ============================================================================
// Pagination
// ============================================================================

/// One page of a result list. `start..end` indexes into the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

impl Page {
    /// Computes page `index` of `total` items. Out-of-range pages clamp to
    /// the last one; an empty list has zero pages.
    pub fn new(total: usize, page_size: usize, index: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let index = index.min(total_pages.saturating_sub(1));
        let start = (index * page_size).min(total);
        let end = (start + page_size).min(total);
        Self {
            index,
            total_pages,
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// ============================================================================
// Scroll Window
// ============================================================================

/// A fixed-height viewport over a list that keeps the selection centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    pub visible: usize,
}

impl ScrollWindow {
    pub fn new(visible: usize) -> Self {
        Self {
            visible: visible.max(1),
        }
    }

    /// First visible row for `total` rows with `selected` highlighted.
    pub fn start(&self, selected: usize, total: usize) -> usize {
        let max_start = total.saturating_sub(self.visible);
        selected.saturating_sub(self.visible / 2).min(max_start)
    }

    /// Visible `start..end` range.
    pub fn range(&self, selected: usize, total: usize) -> std::ops::Range<usize> {
        let start = self.start(selected, total);
        start..(start + self.visible).min(total)
    }
}

// ============================================================================
// Recent Updates
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    pub key: String,
    pub date: BaselineDate,
}

/// Features that crossed a Baseline threshold inside the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentFeatures {
    /// Became widely available (`baseline_high_date` in window).
    pub high: Vec<RecentEntry>,
    /// Became newly available (`baseline_low_date` in window).
    pub low: Vec<RecentEntry>,
}

impl RecentFeatures {
    pub fn len(&self) -> usize {
        self.high.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.low.is_empty()
    }
}

/// Collects features whose high or low date falls in `[today - days, today]`.
/// Both lists are newest first. A window reaching past the calendar's first
/// day starts at [`NaiveDate::MIN`].
pub fn recent(catalog: &Catalog, today: NaiveDate, days: u32) -> RecentFeatures {
    let since = today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);
    let in_window = |date: &BaselineDate| date.date >= since && date.date <= today;

    let mut recent = RecentFeatures::default();
    for (key, data) in catalog.features() {
        let Some(status) = &data.status else {
            continue;
        };
        if let Some(date) = status.baseline_high_date.as_ref().filter(|d| in_window(d)) {
            recent.high.push(RecentEntry {
                key: key.to_string(),
                date: date.clone(),
            });
        }
        if let Some(date) = status.baseline_low_date.as_ref().filter(|d| in_window(d)) {
            recent.low.push(RecentEntry {
                key: key.to_string(),
                date: date.clone(),
            });
        }
    }

    let newest_first = |a: &RecentEntry, b: &RecentEntry| {
        b.date.date.cmp(&a.date.date).then_with(|| a.key.cmp(&b.key))
    };
    recent.high.sort_by(newest_first);
    recent.low.sort_by(newest_first);
    recent
}

// ============================================================================
// Baseline Years
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Years in which at least one feature became newly available, newest first.
pub fn baseline_years(catalog: &Catalog) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for (_, data) in catalog.features() {
        if let Some(date) = data.status.as_ref().and_then(|s| s.baseline_low_date.as_ref()) {
            *counts.entry(date.year()).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .rev()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Features that became newly available in `year`, oldest date first.
pub fn features_in_year(catalog: &Catalog, year: i32) -> Vec<&str> {
    let mut matches: Vec<(&str, &BaselineDate)> = catalog
        .features()
        .filter_map(|(key, data)| {
            let date = data.status.as_ref()?.baseline_low_date.as_ref()?;
            (date.year() == year).then_some((key, date))
        })
        .collect();
    matches.sort_by(|(ka, da), (kb, db)| da.date.cmp(&db.date).then_with(|| ka.cmp(kb)));
    matches.into_iter().map(|(key, _)| key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture_catalog, fixture_today};

    #[test]
    fn test_blank_search_returns_everything() {
        let catalog = fixture_catalog();
        assert_eq!(search(&catalog, "").len(), catalog.len());
        assert_eq!(search(&catalog, "   ").len(), catalog.len());
    }

    #[test]
    fn test_search_matches_key_and_name_case_insensitively() {
        let catalog = fixture_catalog();
        // Upper-case terms still match lower-case keys
        assert_eq!(search(&catalog, "CONTAINER"), vec!["container-queries"]);
        // Keys and names both contribute, results stay in key order
        assert_eq!(search(&catalog, "grid"), vec!["grid", "old-grid", "subgrid"]);
        assert_eq!(search(&catalog, "nest"), vec!["css-nesting"]);
    }

    #[test]
    fn test_search_keeps_surrounding_spaces() {
        let catalog = fixture_catalog();
        // No key or name contains " grid", so the padded term finds nothing
        assert!(search(&catalog, " grid").is_empty());
        assert!(search(&catalog, "grid ").is_empty());
        // Inner spaces still match names
        assert_eq!(search(&catalog, "container q"), vec!["container-queries"]);
    }

    #[test]
    fn test_search_does_not_match_description() {
        let catalog = fixture_catalog();
        assert!(search(&catalog, "two-dimensional").is_empty());
    }

    #[test]
    fn test_search_redirects_match_by_key_only() {
        let catalog = fixture_catalog();
        assert_eq!(search(&catalog, "old-grid"), vec!["old-grid"]);
    }

    #[test]
    fn test_page_arithmetic() {
        let page = Page::new(25, 10, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!((page.start, page.end), (20, 25));
        assert_eq!(page.len(), 5);

        let first = Page::new(25, 10, 0);
        assert_eq!((first.start, first.end), (0, 10));
    }

    #[test]
    fn test_page_clamps_past_end() {
        let page = Page::new(25, 10, 9);
        assert_eq!(page.index, 2);
        assert_eq!(page.start, 20);
    }

    #[test]
    fn test_empty_page() {
        let page = Page::new(0, 10, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_exact_multiple_page_count() {
        assert_eq!(Page::new(20, 10, 0).total_pages, 2);
        assert_eq!(Page::new(1, 10, 0).total_pages, 1);
    }

    #[test]
    fn test_scroll_window_centres_selection() {
        let window = ScrollWindow::new(10);
        assert_eq!(window.start(0, 30), 0);
        assert_eq!(window.start(4, 30), 0);
        assert_eq!(window.start(12, 30), 7);
        assert_eq!(window.start(29, 30), 20);
        assert_eq!(window.range(29, 30), 20..30);
    }

    #[test]
    fn test_scroll_window_short_list() {
        let window = ScrollWindow::new(10);
        assert_eq!(window.start(3, 4), 0);
        assert_eq!(window.range(3, 4), 0..4);
        assert_eq!(window.range(0, 0), 0..0);
    }

    #[test]
    fn test_recent_window_is_inclusive() {
        let catalog = fixture_catalog();
        let recent = recent(&catalog, fixture_today(), 28);

        let high: Vec<&str> = recent.high.iter().map(|e| e.key.as_str()).collect();
        let low: Vec<&str> = recent.low.iter().map(|e| e.key.as_str()).collect();

        // edge-of-window is exactly 28 days before today
        assert_eq!(high, vec!["dialog"]);
        assert_eq!(low, vec!["popover", "edge-of-window"]);
        assert_eq!(recent.len(), 3);
    }

    #[test]
    fn test_recent_excludes_future_dates() {
        let catalog = fixture_catalog();
        let recent = recent(&catalog, fixture_today(), 28);
        assert!(!recent.low.iter().any(|e| e.key == "future"));
    }

    #[test]
    fn test_recent_empty_when_window_misses() {
        let catalog = fixture_catalog();
        let long_ago = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        assert!(recent(&catalog, long_ago, 28).is_empty());
    }

    #[test]
    fn test_recent_lists_feature_in_both_groups() {
        let catalog = fixture_catalog();
        // A window back to 2021-12-01 covers both of dialog's dates
        let since = NaiveDate::from_ymd_opt(2021, 12, 1).unwrap();
        let days = u32::try_from((fixture_today() - since).num_days()).unwrap();
        let recent = recent(&catalog, fixture_today(), days);
        assert!(recent.high.iter().any(|e| e.key == "dialog"));
        assert!(recent.low.iter().any(|e| e.key == "dialog"));
    }

    #[test]
    fn test_recent_huge_window_saturates() {
        let catalog = fixture_catalog();
        let recent = recent(&catalog, fixture_today(), u32::MAX);
        // Everything dated up to today is in range, the future entry is not
        assert!(recent.low.iter().any(|e| e.key == "websockets"));
        assert!(!recent.low.iter().any(|e| e.key == "future"));
    }

    #[test]
    fn test_baseline_years_newest_first_with_counts() {
        let catalog = fixture_catalog();
        let years = baseline_years(&catalog);
        let pairs: Vec<(i32, usize)> = years.iter().map(|y| (y.year, y.count)).collect();
        assert_eq!(pairs, vec![(2024, 3), (2023, 3), (2022, 1), (2020, 1)]);
    }

    #[test]
    fn test_features_in_year_sorted_by_date() {
        let catalog = fixture_catalog();
        assert_eq!(
            features_in_year(&catalog, 2024),
            vec!["edge-of-window", "popover", "future"]
        );
        // Approximate dates count toward their year
        assert_eq!(features_in_year(&catalog, 2020), vec!["websockets"]);
        assert!(features_in_year(&catalog, 1990).is_empty());
    }
}
