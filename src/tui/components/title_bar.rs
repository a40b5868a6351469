//! # TitleBar Component
//!
//! Top status bar: where the user is, what the badge colours mean and
//! which language is active.
//!
//! ```text
//! Baseline Search › Search › Detail    ● Widely available ● Newly available ● Limited availability  [en]
//! ```
//!
//! Stateless: all data arrives as props. When the terminal is too narrow the
//! legend is dropped first so the breadcrumb stays readable.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::Baseline;
use crate::core::i18n::{Language, Text};
use crate::tui::component::Component;
use crate::tui::components::list_row::{BADGE, badge_color};

const APP_NAME: &str = "Baseline Search";
const SEPARATOR: &str = " › ";

pub struct TitleBar {
    /// Localized screen labels from the menu to the current screen
    pub breadcrumb: Vec<&'static str>,
    pub language: Language,
}

impl TitleBar {
    pub fn new(breadcrumb: Vec<&'static str>, language: Language) -> Self {
        Self {
            breadcrumb,
            language,
        }
    }

    fn legend(&self) -> Vec<Span<'static>> {
        let entries = [
            (Baseline::High, Text::RecentWidelyAvailable),
            (Baseline::Low, Text::RecentNewlyAvailable),
            (Baseline::Limited, Text::LegendLimited),
        ];
        let mut spans = Vec::new();
        for (baseline, text) in entries {
            spans.push(Span::styled(
                BADGE,
                Style::default().fg(badge_color(baseline)),
            ));
            spans.push(Span::styled(
                format!("{} ", self.language.text(text)),
                Style::default().fg(Color::Gray),
            ));
        }
        spans
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut left = APP_NAME.to_string();
        // The menu is implied by the app name
        for name in self.breadcrumb.iter().skip(1) {
            left.push_str(SEPARATOR);
            left.push_str(name);
        }
        let language = format!(" [{}]", self.language.code());

        let mut spans = vec![Span::styled(
            left.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        let legend = self.legend();
        let legend_width: usize = legend.iter().map(|s| s.content.width()).sum();
        let used = left.width() + language.width();
        let available = area.width as usize;

        if used + legend_width + 2 <= available {
            let gap = available - used - legend_width;
            spans.push(Span::raw(" ".repeat(gap)));
            spans.extend(legend);
        } else {
            spans.push(Span::raw(" ".repeat(available.saturating_sub(used))));
        }
        spans.push(Span::styled(language, Style::default().fg(Color::Yellow)));

        frame.render_widget(Line::from(spans), area);
    }
}
