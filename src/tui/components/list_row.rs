//! # List Rows
//!
//! One row of a selectable list, shared by every screen:
//!
//! ```text
//! ► ● Popover (2024-06-01)      selected: black on cyan
//!   ● Grid                      badge colour follows the Baseline tier
//!   2023 (3 features)           rows without a badge
//! ```
//!
//! Labels are truncated by display width so CJK names never push the
//! trailing detail off the row.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::Baseline;
use crate::core::i18n::{Language, Text};

pub const POINTER: &str = "► ";
pub const NO_POINTER: &str = "  ";
pub const BADGE: &str = "● ";
const ELLIPSIS: char = '…';

pub const LOW_COLOR: Color = Color::Rgb(0x1D, 0x7A, 0xFC);
pub const LIMITED_COLOR: Color = Color::Rgb(0xE5, 0x69, 0x10);

pub fn badge_color(baseline: Baseline) -> Color {
    match baseline {
        Baseline::High => Color::Green,
        Baseline::Low => LOW_COLOR,
        Baseline::Limited => LIMITED_COLOR,
    }
}

/// Cut `text` to at most `max_width` columns, ending with `…` when shortened.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// Props for a single list row.
pub struct ListRow<'a> {
    pub label: &'a str,
    pub badge: Option<Baseline>,
    /// Greyed text after the label, e.g. ` (2024-06-01)`.
    pub detail: Option<String>,
    pub selected: bool,
}

impl<'a> ListRow<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            badge: None,
            detail: None,
            selected,
        }
    }

    pub fn badge(mut self, badge: Option<Baseline>) -> Self {
        self.badge = badge;
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Build the styled line, fitted to `width` columns.
    pub fn into_line(self, width: u16) -> Line<'static> {
        let base = if self.selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };

        let pointer = if self.selected { POINTER } else { NO_POINTER };
        let detail = self.detail.unwrap_or_default();
        let fixed = pointer.width()
            + if self.badge.is_some() { BADGE.width() } else { 0 }
            + detail.width();
        let label = truncate_to_width(self.label, (width as usize).saturating_sub(fixed));

        let mut spans = vec![Span::styled(pointer, base)];
        if let Some(badge) = self.badge {
            spans.push(Span::styled(BADGE, base.fg(badge_color(badge))));
        }
        spans.push(Span::styled(label, base));
        if !detail.is_empty() {
            let detail_style = if self.selected {
                base
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(detail, detail_style));
        }
        Line::from(spans)
    }
}

/// Bold coloured screen heading.
pub fn heading(text: String) -> Line<'static> {
    Line::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

pub fn hint(text: String) -> Line<'static> {
    Line::styled(text, Style::default().fg(Color::Gray))
}

/// "↑↓ to scroll (showing: 11-20 of 42)", only when the list overflows.
pub fn scroll_hint(
    language: Language,
    window: &std::ops::Range<usize>,
    total: usize,
    visible: usize,
) -> Option<Line<'static>> {
    (total > visible).then(|| {
        hint(language.tr(
            Text::ScrollInstructions,
            &[&(window.start + 1), &window.end, &total],
        ))
    })
}
