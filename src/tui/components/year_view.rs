//! # Baseline Target Views
//!
//! Two screens for browsing by the year a feature became newly available:
//! the year list with per-year counts, and the features of one year.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::catalog::Catalog;
use crate::core::i18n::{Language, Text};
use crate::core::screens::{YearFeaturesState, YearsState};
use crate::tui::component::Component;
use crate::tui::components::list_row::{ListRow, heading, hint, scroll_hint};

fn position_line(text: String) -> Line<'static> {
    Line::styled(text, Style::default().fg(Color::Cyan))
}

// ============================================================================
// Year Selection
// ============================================================================

pub struct YearsView<'a> {
    state: &'a YearsState,
    language: Language,
    visible_items: usize,
}

impl<'a> YearsView<'a> {
    pub fn new(state: &'a YearsState, language: Language, visible_items: usize) -> Self {
        Self {
            state,
            language,
            visible_items,
        }
    }
}

impl Component for YearsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lang = self.language;
        let total = self.state.years.len();
        let selected = self.state.cursor.selected;

        let mut lines = vec![
            heading(lang.text(Text::BaselineYearSelection).to_string()),
            Line::default(),
            Line::raw(lang.text(Text::BaselineYearNavigation)),
            Line::default(),
        ];

        if total == 0 {
            lines.push(hint(lang.text(Text::BaselineNoYears).to_string()));
        } else {
            lines.push(position_line(
                lang.tr(Text::BaselineYearPosition, &[&(selected + 1), &total]),
            ));
            lines.push(Line::default());

            let window = self.state.cursor.window(self.visible_items);
            for index in window.clone() {
                let year = &self.state.years[index];
                let label = format!(
                    "{} ({})",
                    year.year,
                    lang.tr(Text::BaselineYearCount, &[&year.count])
                );
                lines.push(ListRow::new(&label, index == selected).into_line(area.width));
            }

            if let Some(line) = scroll_hint(lang, &window, total, self.visible_items) {
                lines.push(Line::default());
                lines.push(line);
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

// ============================================================================
// Features of One Year
// ============================================================================

pub struct YearFeaturesView<'a> {
    state: &'a YearFeaturesState,
    catalog: &'a Catalog,
    language: Language,
    visible_items: usize,
}

impl<'a> YearFeaturesView<'a> {
    pub fn new(
        state: &'a YearFeaturesState,
        catalog: &'a Catalog,
        language: Language,
        visible_items: usize,
    ) -> Self {
        Self {
            state,
            catalog,
            language,
            visible_items,
        }
    }
}

impl Component for YearFeaturesView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lang = self.language;
        let total = self.state.keys.len();
        let selected = self.state.cursor.selected;

        let mut lines = vec![
            heading(lang.tr(Text::BaselineFeatureList, &[&self.state.year])),
            Line::default(),
            Line::raw(lang.text(Text::BaselineFeatureNavigation)),
            Line::default(),
            Line::styled(
                lang.tr(Text::SearchResults, &[&total]),
                Style::default().fg(Color::Green),
            ),
            Line::default(),
        ];

        if total == 0 {
            lines.push(hint(lang.text(Text::BaselineNoFeatures).to_string()));
        } else {
            lines.push(position_line(
                lang.tr(Text::BaselineFeaturePosition, &[&(selected + 1), &total]),
            ));
            lines.push(Line::default());

            let window = self.state.cursor.window(self.visible_items);
            for index in window.clone() {
                let key = &self.state.keys[index];
                let entry = self.catalog.get(key);
                let label = entry.map_or(key.as_str(), |e| e.display_name(key));
                let status = entry.and_then(|e| e.status());
                let mut row = ListRow::new(label, index == selected)
                    .badge(status.map(|s| s.baseline));
                if let Some(date) = status.and_then(|s| s.baseline_low_date.as_ref()) {
                    row = row.detail(format!(" ({date})"));
                }
                lines.push(row.into_line(area.width));
            }

            if let Some(line) = scroll_hint(lang, &window, total, self.visible_items) {
                lines.push(Line::default());
                lines.push(line);
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
