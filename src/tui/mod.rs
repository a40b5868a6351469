//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! screen, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks on input and only redraws after a
//! key press or a terminal resize. Every pending event is drained before the
//! next frame so fast typing in the search box never lags behind.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use log::{debug, info};

use crate::core::action::{Effect, update};
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Restores the cursor even if the event loop returns early with an error.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Constructed first so a failed escape sequence still restores the terminal
        let guard = Self;
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (cursor hidden)");
        Ok(guard)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        ratatui::restore();
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    info!(
        "TUI started ({} catalog entries, today is {})",
        app.catalog.len(),
        app.today
    );

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &mut app))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };

        // Process first event + drain ALL pending events before next draw
        needs_redraw = true;
        let mut pending = vec![first_event];
        while let Some(event) = poll_event_immediate()? {
            pending.push(event);
        }

        for event in pending {
            match event {
                TuiEvent::Resize => debug!("Terminal resized"),
                TuiEvent::Key(action) => {
                    if update(&mut app, action) == Effect::Quit {
                        info!("Shutting down");
                        return Ok(());
                    }
                }
            }
        }
    }
}
