//! # Application State
//!
//! Core business state for Baseline Search. This module contains domain
//! logic only - no TUI-specific types. Presentation lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog          // loaded feature data
//! ├── language: Language        // display language
//! ├── today: NaiveDate          // anchor for the recent window
//! ├── page_size: usize          // search results per page
//! ├── visible_items: usize      // rows in scrolling lists
//! ├── recent_days: u32          // recent window length
//! └── stack: Vec<Screen>        // navigation stack, menu at the bottom
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::NaiveDate;
use log::info;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::i18n::Language;
use crate::core::screens::{MenuState, Screen};

pub struct App {
    pub catalog: Catalog,
    pub language: Language,
    pub today: NaiveDate,
    pub page_size: usize,
    pub visible_items: usize,
    pub recent_days: u32,
    stack: Vec<Screen>,
}

impl App {
    pub fn new(catalog: Catalog, config: &ResolvedConfig, today: NaiveDate) -> Self {
        Self {
            catalog,
            language: config.language,
            today,
            page_size: config.page_size.max(1),
            visible_items: config.visible_items.max(1),
            recent_days: config.recent_days.max(1),
            stack: vec![Screen::Menu(MenuState::default())],
        }
    }

    /// The screen currently shown.
    pub fn screen(&self) -> &Screen {
        // The menu is never popped, so the stack is never empty
        &self.stack[self.stack.len() - 1]
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }

    /// Number of screens on the stack, including the menu.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Screens from the menu up to the current one.
    pub fn screens(&self) -> &[Screen] {
        &self.stack
    }

    /// Splits the borrow so a screen can be updated against the catalog.
    pub(crate) fn parts_mut(&mut self) -> (&Catalog, &mut Screen) {
        let top = self.stack.len() - 1;
        (&self.catalog, &mut self.stack[top])
    }

    pub(crate) fn push(&mut self, screen: Screen) {
        info!("Opening {} screen", screen.name());
        self.stack.push(screen);
    }

    /// Returns to the previous screen. The menu stays put.
    pub(crate) fn pop(&mut self) {
        if self.stack.len() > 1
            && let Some(screen) = self.stack.pop()
        {
            info!("Leaving {} screen", screen.name());
        }
    }
}
