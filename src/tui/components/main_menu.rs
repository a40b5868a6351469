//! # Main Menu
//!
//! The bottom of the navigation stack. Four numbered entries; the selected
//! one is marked with the pointer and drawn in green.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::i18n::{Language, Text};
use crate::core::screens::{MenuItem, MenuState};
use crate::tui::component::Component;
use crate::tui::components::list_row::{NO_POINTER, POINTER, heading, hint};

pub struct MainMenu<'a> {
    state: &'a MenuState,
    language: Language,
    recent_days: u32,
}

impl<'a> MainMenu<'a> {
    pub fn new(state: &'a MenuState, language: Language, recent_days: u32) -> Self {
        Self {
            state,
            language,
            recent_days,
        }
    }

    fn label(&self, item: MenuItem) -> String {
        match item {
            MenuItem::FreeSearch => self.language.text(Text::MainMenuFreeSearch).to_string(),
            MenuItem::Recent => self.language.tr(Text::MainMenuRecent, &[&self.recent_days]),
            MenuItem::BaselineTarget => {
                self.language.text(Text::MainMenuBaselineTarget).to_string()
            }
            MenuItem::Exit => self.language.text(Text::MainMenuExit).to_string(),
        }
    }
}

impl Component for MainMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lang = self.language;
        let mut lines = vec![
            heading(lang.text(Text::MainTitle).to_string()),
            Line::raw(lang.text(Text::MainSubtitle)),
            Line::default(),
            Line::raw(lang.text(Text::MainMenuQuestion)),
            Line::default(),
        ];

        let selected = self.state.selected_item();
        for (index, item) in MenuItem::ALL.iter().enumerate() {
            let is_selected = *item == selected;
            let (pointer, color) = if is_selected {
                (POINTER, Color::Green)
            } else {
                (NO_POINTER, Color::White)
            };
            lines.push(Line::styled(
                format!("{pointer}{}. {}", index + 1, self.label(*item)),
                Style::default().fg(color),
            ));
        }

        lines.push(Line::default());
        lines.push(hint(
            lang.tr(Text::MainMenuNavigation, &[&MenuItem::ALL.len()]),
        ));

        frame.render_widget(Paragraph::new(lines), area);
    }
}
