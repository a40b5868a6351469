//! # Feature Detail Component
//!
//! Read-only dump of one catalog entry, scrollable with the arrow keys.
//!
//! ```text
//! === DIALOG Details ===          heading (key upper-cased)
//! ┌────────────────────────┐
//! │ kind: feature          │      body: wrapped, scrolled by DetailState
//! │ name: <dialog>         │
//! │ status:                │
//! │   baseline: high       │
//! │   ...                  │
//! └────────────────────────┘
//! Enter or ESC to go back        footer
//! ```
//!
//! Follows the persistent state + transient wrapper pattern: `DetailState`
//! lives on the navigation stack and `FeatureDetail` borrows it each frame.
//! Rendering writes the largest useful scroll offset back into the state,
//! since that depends on the wrapped height of the body.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::catalog::{Catalog, FeatureData, FeatureEntry, Status};
use crate::core::i18n::{Language, Text};
use crate::core::screens::DetailState;
use crate::tui::component::Component;
use crate::tui::components::list_row::{badge_color, heading, hint};

const INDENT: &str = "  ";

fn field_style() -> Style {
    Style::default().fg(Color::Cyan)
}

fn status_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn nested_style() -> Style {
    Style::default().fg(Color::Magenta)
}

fn index_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Builds the body lines for one entry.
struct DetailLines {
    lines: Vec<Line<'static>>,
    width: usize,
}

impl DetailLines {
    fn new(width: u16) -> Self {
        Self {
            lines: Vec::new(),
            width: width as usize,
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// `label: value` on one line.
    fn value(&mut self, depth: usize, label: &str, style: Style, value: impl ToString) {
        self.lines.push(Line::from(vec![
            Span::raw(INDENT.repeat(depth)),
            Span::styled(format!("{label}: "), style),
            Span::raw(value.to_string()),
        ]));
    }

    /// `label:` heading for a nested block.
    fn label(&mut self, depth: usize, label: &str, style: Style) {
        self.lines.push(Line::from(vec![
            Span::raw(INDENT.repeat(depth)),
            Span::styled(format!("{label}:"), style),
        ]));
    }

    /// `label:` followed by `[i]: item` rows. Nothing for an empty list.
    fn list(&mut self, depth: usize, label: &str, style: Style, items: &[String]) {
        if items.is_empty() {
            return;
        }
        self.label(depth, label, style);
        for (index, item) in items.iter().enumerate() {
            self.lines.push(Line::from(vec![
                Span::raw(INDENT.repeat(depth + 1)),
                Span::styled(format!("[{index}]: "), index_style()),
                Span::raw(item.clone()),
            ]));
        }
    }

    /// Long prose, wrapped under its label with a hanging indent.
    fn paragraph(&mut self, label: &str, text: &str) {
        self.label(0, label, field_style());
        let options = textwrap::Options::new(self.width.max(INDENT.len() + 1))
            .initial_indent(INDENT)
            .subsequent_indent(INDENT);
        for line in textwrap::wrap(text, options) {
            self.lines.push(Line::raw(line.into_owned()));
        }
    }

    fn baseline(&mut self, depth: usize, style: Style, status: &Status) {
        self.lines.push(Line::from(vec![
            Span::raw(INDENT.repeat(depth)),
            Span::styled("baseline: ", style),
            Span::styled(
                status.baseline.to_string(),
                Style::default().fg(badge_color(status.baseline)),
            ),
        ]));
        if let Some(date) = &status.baseline_low_date {
            self.value(depth, "baseline_low_date", style, date);
        }
        if let Some(date) = &status.baseline_high_date {
            self.value(depth, "baseline_high_date", style, date);
        }
    }

    fn support(&mut self, depth: usize, style: Style, status: &Status) {
        if status.support.is_empty() {
            return;
        }
        self.label(depth, "support", style);
        for (browser, version) in &status.support {
            self.lines.push(Line::from(vec![
                Span::raw(INDENT.repeat(depth + 1)),
                Span::styled(format!("{browser}: "), index_style()),
                Span::raw(version.clone()),
            ]));
        }
    }

    fn status(&mut self, status: &Status) {
        self.label(0, "status", field_style());
        self.baseline(1, status_style(), status);
        self.support(1, status_style(), status);

        if !status.by_compat_key.is_empty() {
            self.label(1, "by_compat_key", status_style());
            for (key, nested) in &status.by_compat_key {
                self.lines.push(Line::from(vec![
                    Span::raw(INDENT.repeat(2)),
                    Span::styled(format!("{key}:"), index_style()),
                ]));
                self.baseline(3, nested_style(), nested);
                self.support(3, nested_style(), nested);
            }
        }
        self.blank();
    }

    /// Each compat key with its own Baseline status when the dataset has one.
    fn compat_features(&mut self, data: &FeatureData) {
        if data.compat_features.is_empty() {
            return;
        }
        self.label(0, "compat_features", field_style());
        let per_key = data.status.as_ref().map(|s| &s.by_compat_key);
        for (index, compat) in data.compat_features.iter().enumerate() {
            self.lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(format!("[{index}]: "), index_style()),
                Span::raw(compat.clone()),
            ]));
            if let Some(status) = per_key.and_then(|map| map.get(compat)) {
                self.baseline(3, status_style(), status);
            }
        }
        self.blank();
    }

    fn feature(&mut self, data: &FeatureData) {
        if !data.name.is_empty() {
            self.value(0, "name", field_style(), &data.name);
            self.blank();
        }
        if !data.description.is_empty() {
            self.paragraph("description", &data.description);
            self.blank();
        }
        self.block_list("spec", &data.spec);
        self.block_list("group", &data.group);
        if let Some(status) = &data.status {
            self.status(status);
        }
        self.block_list("snapshot", &data.snapshot);
        self.block_list("caniuse", &data.caniuse);
        self.compat_features(data);

        if let Some(discouraged) = &data.discouraged {
            self.label(0, "discouraged", field_style());
            self.list(1, "according_to", status_style(), &discouraged.according_to);
            self.list(1, "alternatives", status_style(), &discouraged.alternatives);
            self.blank();
        }
    }

    /// A top-level list followed by a blank separator.
    fn block_list(&mut self, label: &str, items: &[String]) {
        if !items.is_empty() {
            self.list(0, label, field_style(), items);
            self.blank();
        }
    }

    fn entry(mut self, entry: &FeatureEntry) -> Vec<Line<'static>> {
        self.value(0, "kind", field_style(), entry.kind());
        self.blank();
        match entry {
            FeatureEntry::Feature(data) => self.feature(data),
            FeatureEntry::Moved { redirect_target } => {
                self.value(0, "redirect_target", field_style(), redirect_target);
            }
            FeatureEntry::Split { redirect_targets } => {
                self.list(0, "redirect_targets", field_style(), redirect_targets);
            }
        }
        while self.lines.last().is_some_and(|l| l.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}

/// Body lines for `entry`, with prose wrapped to `width` columns.
pub fn detail_lines(entry: &FeatureEntry, width: u16) -> Vec<Line<'static>> {
    DetailLines::new(width).entry(entry)
}

/// Transient render wrapper for the detail screen.
pub struct FeatureDetail<'a> {
    state: &'a mut DetailState,
    catalog: &'a Catalog,
    language: Language,
}

impl<'a> FeatureDetail<'a> {
    pub fn new(state: &'a mut DetailState, catalog: &'a Catalog, language: Language) -> Self {
        Self {
            state,
            catalog,
            language,
        }
    }
}

impl Component for FeatureDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [title_area, _, body_area, footer_area] =
            Layout::vertical([Length(1), Length(1), Min(0), Length(1)]).areas(area);

        let lang = self.language;
        let key = self.state.key.as_str();
        frame.render_widget(
            heading(lang.tr(Text::DetailTitle, &[&key.to_uppercase()])),
            title_area,
        );
        frame.render_widget(
            Line::styled(
                lang.text(Text::DetailNavigation),
                Style::default().fg(Color::Green),
            ),
            footer_area,
        );

        let lines = match self.catalog.get(key) {
            Some(entry) => detail_lines(entry, body_area.width),
            None => vec![hint(lang.tr(Text::DetailNotFound, &[&key]))],
        };

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(body_area.width);
        let max_scroll = content_height.saturating_sub(body_area.height as usize);
        self.state
            .set_max_scroll(u16::try_from(max_scroll).unwrap_or(u16::MAX));

        frame.render_widget(paragraph.scroll((self.state.scroll, 0)), body_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn render_rows(state: &mut DetailState, width: u16, height: u16) -> Vec<String> {
        let catalog = fixture_catalog();
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| FeatureDetail::new(state, &catalog, Language::En).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_feature_lines() {
        let catalog = fixture_catalog();
        let entry = catalog.get("dialog").unwrap();
        let text = text_of(&detail_lines(entry, 80));
        assert_eq!(text[0], "kind: feature");
        assert!(text.contains(&"name: <dialog>".to_string()));
        assert!(text.contains(&"  [0]: html-elements".to_string()));
        assert!(text.contains(&"  baseline: high".to_string()));
        assert!(text.contains(&"  baseline_high_date: 2024-06-10".to_string()));
        assert!(text.contains(&"    safari: 15.4".to_string()));
        assert!(text.contains(&"  by_compat_key:".to_string()));
        assert!(text.contains(&"    html.elements.dialog:".to_string()));
        assert!(text.contains(&"  [1]: html.elements.dialog".to_string()));
        // Empty lists are left out
        assert!(!text.iter().any(|l| l.starts_with("snapshot")));
        assert!(!text.iter().any(|l| l.starts_with("discouraged")));
    }

    #[test]
    fn test_approximate_dates_keep_prefix() {
        let catalog = fixture_catalog();
        let entry = catalog.get("websockets").unwrap();
        let text = text_of(&detail_lines(entry, 80));
        assert!(text.contains(&"  baseline_low_date: ≤2020-07-29".to_string()));
        assert!(text.contains(&"discouraged:".to_string()));
        assert!(text.contains(&"    [0]: https://example.com/discouraged".to_string()));
    }

    #[test]
    fn test_limited_baseline_prints_false() {
        let catalog = fixture_catalog();
        let text = text_of(&detail_lines(catalog.get("webgpu").unwrap(), 80));
        assert!(text.contains(&"  baseline: false".to_string()));
    }

    #[test]
    fn test_description_wraps_with_indent() {
        let catalog = fixture_catalog();
        let entry = catalog.get("grid").unwrap();
        let text = text_of(&detail_lines(entry, 20));
        let start = text.iter().position(|l| l == "description:").unwrap();
        assert!(text[start + 1].starts_with("  CSS grid"));
        assert!(text[start + 2].starts_with("  "));
        assert!(text[start + 1].chars().count() <= 20);
    }

    #[test]
    fn test_redirect_entries() {
        let catalog = fixture_catalog();
        let moved = text_of(&detail_lines(catalog.get("old-grid").unwrap(), 80));
        assert_eq!(moved, vec!["kind: moved", "", "redirect_target: grid"]);

        let split = text_of(&detail_lines(catalog.get("selectors-4").unwrap(), 80));
        assert_eq!(
            split,
            vec!["kind: split", "", "redirect_targets:", "  [0]: has", "  [1]: is"]
        );
    }

    #[test]
    fn test_render_title_and_footer() {
        let mut state = DetailState::new("dialog");
        let rows = render_rows(&mut state, 80, 40);
        assert!(rows[0].starts_with("=== DIALOG Details ==="));
        assert!(rows[2].starts_with("kind: feature"));
        assert!(rows[39].starts_with("Enter or ESC to go back"));
    }

    #[test]
    fn test_render_clamps_scroll() {
        let mut state = DetailState::new("dialog");
        state.scroll = 500;
        render_rows(&mut state, 80, 10);
        assert!(state.max_scroll > 0);
        assert_eq!(state.scroll, state.max_scroll);

        // Everything fits: nothing to scroll
        let mut state = DetailState::new("old-grid");
        render_rows(&mut state, 80, 10);
        assert_eq!(state.max_scroll, 0);
    }

    #[test]
    fn test_render_missing_key() {
        let mut state = DetailState::new("no-such-feature");
        let rows = render_rows(&mut state, 80, 10);
        assert!(rows[2].starts_with("Feature \"no-such-feature\" is not in the loaded data"));
    }
}
