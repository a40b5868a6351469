//! # Recent Updates View
//!
//! Features that reached Baseline inside the recent window, widely available
//! first. Both groups share one cursor and one scroll window; a group's
//! header is shown whenever the group is non-empty.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::catalog::{Baseline, Catalog};
use crate::core::i18n::{Language, Text};
use crate::core::screens::RecentState;
use crate::tui::component::Component;
use crate::tui::components::list_row::{LOW_COLOR, ListRow, heading, hint, scroll_hint};

pub struct RecentView<'a> {
    state: &'a RecentState,
    catalog: &'a Catalog,
    language: Language,
    visible_items: usize,
}

impl<'a> RecentView<'a> {
    pub fn new(
        state: &'a RecentState,
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

    fn row(&self, index: usize, width: u16) -> Option<Line<'static>> {
        let entry = self.state.entries.get(index)?;
        let label = self
            .catalog
            .get(&entry.key)
            .map_or(entry.key.as_str(), |e| e.display_name(&entry.key));
        let badge = if self.state.is_high(index) {
            Baseline::High
        } else {
            Baseline::Low
        };
        Some(
            ListRow::new(label, index == self.state.cursor.selected)
                .badge(Some(badge))
                .detail(format!(" ({})", entry.date))
                .into_line(width),
        )
    }
}

impl Component for RecentView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lang = self.language;
        let total = self.state.entries.len();
        let window = self.state.cursor.window(self.visible_items);
        let high_count = self.state.high_count;

        let mut lines = vec![
            heading(lang.tr(Text::RecentTitle, &[&self.state.days])),
            Line::default(),
            Line::raw(lang.text(Text::RecentNavigation)),
            Line::default(),
        ];

        if high_count > 0 {
            lines.push(Line::styled(
                format!("{} ({})", lang.text(Text::RecentWidelyAvailable), high_count),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
            lines.extend(
                window
                    .clone()
                    .filter(|&i| i < high_count)
                    .filter_map(|i| self.row(i, area.width)),
            );
            lines.push(Line::default());
        }

        let low_count = self.state.low_count();
        if low_count > 0 {
            lines.push(Line::styled(
                format!("{} ({})", lang.text(Text::RecentNewlyAvailable), low_count),
                Style::default().fg(LOW_COLOR).add_modifier(Modifier::BOLD),
            ));
            lines.extend(
                window
                    .clone()
                    .filter(|&i| i >= high_count)
                    .filter_map(|i| self.row(i, area.width)),
            );
            lines.push(Line::default());
        }

        if total == 0 {
            lines.push(hint(lang.tr(Text::RecentNoResults, &[&self.state.days])));
        }

        if let Some(line) = scroll_hint(lang, &window, total, self.visible_items) {
            lines.push(line);
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture_catalog, fixture_today};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(state: &RecentState, catalog: &Catalog, visible: usize) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                RecentView::new(state, catalog, Language::En, visible).render(f, f.area())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_recent_view_groups() {
        let catalog = fixture_catalog();
        let state = RecentState::new(&catalog, fixture_today(), 28);
        let text = render_text(&state, &catalog, 10);
        assert!(text.contains("=== Recent Baseline Updates (Last 28 days) ==="));
        assert!(text.contains("Widely available (1)"));
        assert!(text.contains("► ● <dialog> (2024-06-10)"));
        assert!(text.contains("Newly available (2)"));
        assert!(text.contains("  ● Popover (2024-06-01)"));
        assert!(!text.contains("↑↓ to scroll"));
    }

    #[test]
    fn test_recent_view_scroll_window() {
        let catalog = fixture_catalog();
        let mut state = RecentState::new(&catalog, fixture_today(), 28);
        state.cursor.end();
        let text = render_text(&state, &catalog, 1);
        assert!(text.contains("Edge of window"));
        assert!(!text.contains("<dialog>"));
        assert!(text.contains("showing: 3-3 of 3"));
    }

    #[test]
    fn test_recent_view_empty() {
        let catalog = fixture_catalog();
        let state = RecentState::new(&catalog, fixture_today(), 1);
        let text = render_text(&state, &catalog, 10);
        assert!(text.contains("No features reached Baseline in the last 1 days"));
        assert!(!text.contains("Widely available"));
    }
}
