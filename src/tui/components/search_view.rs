//! # Search View
//!
//! Free text search with pagination. Transient wrapper around the
//! `SearchState` on the navigation stack.
//!
//! ```text
//! === Free Text Search + Pagination ===
//!
//! Search keyword: grid|
//!
//! 3 features found (search: "grid")
//!
//! Page: 1/1 | Showing: 1-3
//!
//! ► ● Grid
//!     old-grid
//!   ● Subgrid
//!
//! Searching: ↑↓ to select | ←→ for page | Enter: confirm | ESC: end search
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::catalog::Catalog;
use crate::core::i18n::{Language, Text};
use crate::core::screens::SearchState;
use crate::tui::component::Component;
use crate::tui::components::list_row::{ListRow, heading, hint};

/// Page jump shortcuts stop at `9`.
const MAX_PAGE_SHORTCUT: usize = 9;

pub struct SearchView<'a> {
    state: &'a SearchState,
    catalog: &'a Catalog,
    language: Language,
}

impl<'a> SearchView<'a> {
    pub fn new(state: &'a SearchState, catalog: &'a Catalog, language: Language) -> Self {
        Self {
            state,
            catalog,
            language,
        }
    }

    fn keyword_line(&self) -> Line<'static> {
        let lang = self.language;
        let mut spans = vec![
            Span::styled(
                lang.text(Text::SearchKeyword),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(self.state.term.clone(), Style::default().fg(Color::White)),
        ];
        if self.state.editing {
            spans.push(Span::styled("|", Style::default().fg(Color::Gray)));
        } else if !self.state.term.is_empty() {
            spans.push(Span::styled(
                lang.text(Text::SearchClearHint),
                Style::default().fg(Color::Gray),
            ));
        }
        Line::from(spans)
    }

    fn summary_line(&self) -> Line<'static> {
        let lang = self.language;
        let count = self.state.results().len();
        let mut text = if count > 0 {
            lang.tr(Text::SearchResults, &[&count])
        } else {
            lang.text(Text::SearchNoResults).to_string()
        };
        if !self.state.term.is_empty() {
            text.push_str(&lang.tr(Text::SearchTermSuffix, &[&self.state.term]));
        }
        Line::styled(text, Style::default().fg(Color::Green))
    }
}

impl Component for SearchView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lang = self.language;
        let page = self.state.current_page();

        let mut lines = vec![
            heading(lang.text(Text::SearchTitle).to_string()),
            Line::default(),
            self.keyword_line(),
            Line::default(),
            self.summary_line(),
            Line::default(),
        ];

        if page.total_pages > 0 {
            lines.push(Line::styled(
                lang.tr(
                    Text::SearchPageInfo,
                    &[&(page.index + 1), &page.total_pages, &(page.start + 1), &page.end],
                ),
                Style::default().fg(Color::Yellow),
            ));
            lines.push(Line::default());
        }

        for (index, key) in self.state.page_results().iter().enumerate() {
            let entry = self.catalog.get(key);
            let label = entry.map_or(key.as_str(), |e| e.display_name(key));
            let badge = entry.and_then(|e| e.status()).map(|s| s.baseline);
            lines.push(
                ListRow::new(label, index == self.state.selected)
                    .badge(badge)
                    .into_line(area.width),
            );
        }

        lines.push(Line::default());
        let instructions = if self.state.editing {
            Text::SearchInstructionsEditing
        } else {
            Text::SearchInstructions
        };
        lines.push(hint(lang.text(instructions).to_string()));

        if !self.state.editing && page.total_pages > 1 {
            let last = page.total_pages.min(MAX_PAGE_SHORTCUT);
            lines.push(hint(lang.tr(Text::SearchPageJump, &[&last])));
        }

        if page.is_empty() && !self.state.term.is_empty() {
            lines.push(hint(lang.text(Text::SearchTryOtherKeywords).to_string()));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
