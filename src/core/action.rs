//! # Actions
//!
//! Everything the user can do becomes an `Action`. The TUI translates key
//! presses into actions; `update()` applies them to the screen on top of the
//! navigation stack and returns an `Effect` for the event loop.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! No I/O happens here, so whole navigation flows can be replayed in tests.

use log::{debug, info};

use crate::core::catalog::Catalog;
use crate::core::screens::{
    Cursor, DetailState, MenuItem, MenuState, RecentState, Screen, SearchState, YearFeaturesState,
    YearsState,
};
use crate::core::state::App;

/// Lines scrolled by PageUp/PageDown on the detail screen.
const DETAIL_PAGE_STEP: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Escape,
    Backspace,
    Char(char),
    /// Ctrl+C: clears the search term, quits elsewhere.
    Clear,
    /// Quit from any screen.
    ForceQuit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// How the navigation stack changes after a screen handles an action.
enum Transition {
    Stay,
    Push(Screen),
    Pop,
    Quit,
}

/// Values a screen needs that live on `App` rather than in the screen.
#[derive(Clone, Copy)]
struct Settings {
    today: chrono::NaiveDate,
    page_size: usize,
    visible_items: usize,
    recent_days: u32,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action {:?} on {} screen", action, app.screen().name());

    if action == Action::ForceQuit {
        info!("Force quit requested");
        return Effect::Quit;
    }

    let settings = Settings {
        today: app.today,
        page_size: app.page_size,
        visible_items: app.visible_items,
        recent_days: app.recent_days,
    };

    let (catalog, screen) = app.parts_mut();
    let transition = match screen {
        Screen::Menu(state) => update_menu(state, action, catalog, settings),
        Screen::Search(state) => update_search(state, action, catalog),
        Screen::Recent(state) => update_recent(state, action, settings),
        Screen::Years(state) => update_years(state, action, catalog, settings),
        Screen::YearFeatures(state) => update_year_features(state, action, settings),
        Screen::Detail(state) => update_detail(state, action),
    };

    match transition {
        Transition::Stay => Effect::None,
        Transition::Push(screen) => {
            app.push(screen);
            Effect::None
        }
        Transition::Pop => {
            app.pop();
            Effect::None
        }
        Transition::Quit => {
            info!("Quit requested from {} screen", app.screen().name());
            Effect::Quit
        }
    }
}

fn open_menu_item(item: MenuItem, catalog: &Catalog, settings: Settings) -> Transition {
    match item {
        MenuItem::FreeSearch => {
            Transition::Push(Screen::Search(SearchState::new(catalog, settings.page_size)))
        }
        MenuItem::Recent => Transition::Push(Screen::Recent(RecentState::new(
            catalog,
            settings.today,
            settings.recent_days,
        ))),
        MenuItem::BaselineTarget => Transition::Push(Screen::Years(YearsState::new(catalog))),
        MenuItem::Exit => Transition::Quit,
    }
}

fn update_menu(
    state: &mut MenuState,
    action: Action,
    catalog: &Catalog,
    settings: Settings,
) -> Transition {
    match action {
        Action::Escape | Action::Clear | Action::Char('q') => Transition::Quit,
        Action::Up => {
            state.cursor.up();
            Transition::Stay
        }
        Action::Down => {
            state.cursor.down();
            Transition::Stay
        }
        Action::Enter => open_menu_item(state.selected_item(), catalog, settings),
        Action::Char(c) => match MenuItem::from_shortcut(c) {
            Some(item) => {
                state.cursor.selected = MenuItem::ALL
                    .iter()
                    .position(|i| *i == item)
                    .unwrap_or(state.cursor.selected);
                open_menu_item(item, catalog, settings)
            }
            None => Transition::Stay,
        },
        _ => Transition::Stay,
    }
}

fn update_search(state: &mut SearchState, action: Action, catalog: &Catalog) -> Transition {
    match action {
        Action::Escape if state.editing => {
            state.editing = false;
            Transition::Stay
        }
        Action::Escape => Transition::Pop,
        Action::Char('q') if !state.editing => Transition::Pop,
        Action::Enter => match state.selected_key() {
            Some(key) => Transition::Push(Screen::Detail(DetailState::new(key))),
            None => Transition::Stay,
        },
        Action::Char('/' | 's') if !state.editing => {
            state.editing = true;
            Transition::Stay
        }
        Action::Clear => {
            state.clear(catalog);
            Transition::Stay
        }
        Action::Up => {
            state.select_up();
            Transition::Stay
        }
        Action::Down => {
            state.select_down();
            Transition::Stay
        }
        Action::Left | Action::PageUp => {
            state.prev_page();
            Transition::Stay
        }
        Action::Right | Action::PageDown => {
            state.next_page();
            Transition::Stay
        }
        Action::Home => {
            state.first_page();
            Transition::Stay
        }
        Action::End => {
            state.last_page();
            Transition::Stay
        }
        Action::Backspace if state.editing => {
            state.pop_char(catalog);
            Transition::Stay
        }
        Action::Char(c @ '1'..='9') => {
            let page = c as usize - '1' as usize;
            state.jump_to_page(page);
            Transition::Stay
        }
        Action::Char(c) if state.editing && !c.is_control() => {
            state.push_char(catalog, c);
            Transition::Stay
        }
        _ => Transition::Stay,
    }
}

/// Cursor movement shared by the scrolling list screens.
/// Returns `false` when the action is not a movement.
fn move_cursor(cursor: &mut Cursor, action: Action, page_step: usize) -> bool {
    match action {
        Action::Up => cursor.up(),
        Action::Down => cursor.down(),
        Action::PageUp => cursor.page_up(page_step),
        Action::PageDown => cursor.page_down(page_step),
        Action::Home => cursor.home(),
        Action::End => cursor.end(),
        _ => return false,
    }
    true
}

fn open_detail(key: Option<&str>) -> Transition {
    match key {
        Some(key) => Transition::Push(Screen::Detail(DetailState::new(key))),
        None => Transition::Stay,
    }
}

fn update_recent(state: &mut RecentState, action: Action, settings: Settings) -> Transition {
    if move_cursor(&mut state.cursor, action, settings.visible_items) {
        return Transition::Stay;
    }
    match action {
        Action::Escape => Transition::Pop,
        Action::Clear => Transition::Quit,
        Action::Enter => open_detail(state.selected_key()),
        _ => Transition::Stay,
    }
}

fn update_years(
    state: &mut YearsState,
    action: Action,
    catalog: &Catalog,
    settings: Settings,
) -> Transition {
    if move_cursor(&mut state.cursor, action, settings.visible_items) {
        return Transition::Stay;
    }
    match action {
        Action::Escape => Transition::Pop,
        Action::Clear => Transition::Quit,
        Action::Enter => match state.selected_year() {
            Some(year) => {
                Transition::Push(Screen::YearFeatures(YearFeaturesState::new(catalog, year)))
            }
            None => Transition::Stay,
        },
        _ => Transition::Stay,
    }
}

fn update_year_features(
    state: &mut YearFeaturesState,
    action: Action,
    settings: Settings,
) -> Transition {
    if move_cursor(&mut state.cursor, action, settings.visible_items) {
        return Transition::Stay;
    }
    match action {
        Action::Escape => Transition::Pop,
        Action::Clear => Transition::Quit,
        Action::Enter => open_detail(state.selected_key()),
        _ => Transition::Stay,
    }
}

fn update_detail(state: &mut DetailState, action: Action) -> Transition {
    match action {
        Action::Enter | Action::Escape => Transition::Pop,
        Action::Clear => Transition::Quit,
        Action::Up => {
            state.scroll_by(-1);
            Transition::Stay
        }
        Action::Down => {
            state.scroll_by(1);
            Transition::Stay
        }
        Action::PageUp => {
            state.scroll_by(-DETAIL_PAGE_STEP);
            Transition::Stay
        }
        Action::PageDown => {
            state.scroll_by(DETAIL_PAGE_STEP);
            Transition::Stay
        }
        Action::Home => {
            state.scroll = 0;
            Transition::Stay
        }
        Action::End => {
            state.scroll = state.max_scroll;
            Transition::Stay
        }
        _ => Transition::Stay,
    }
}
