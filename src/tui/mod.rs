//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, etc.)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (menu with its selection pulse): draws every ~80ms.
//! - **Idle** (inside a station): sleeps up to 500ms, only redraws on
//!   events or terminal resize. Animation math is also skipped.
//!
//! Every state transition happens synchronously inside the event drain;
//! there are no background tasks and nothing to cancel.

pub mod component;
pub mod components;
pub mod event;
pub mod modules;
pub mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::tui::components::{MainMenuState, MenuEvent, StationEvent, StationState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core navigation logic)
pub struct TuiState {
    /// Menu selection cursor (persists across station visits).
    pub menu: MainMenuState,
    /// Live station instance. `Some` exactly while a station screen is
    /// active; dropped on leave so modules remount fresh.
    pub station: Option<StationState>,
    /// Animation state for the menu's selection pulse.
    pub pulse_value: f32,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let station = match app.screen {
            Screen::Station(id) => Some(StationState::new(id, &app.config)),
            Screen::Menu => None,
        };
        Self {
            menu: MainMenuState::new(),
            station,
            pulse_value: 0.0,
        }
    }
}

/// Route one event to the active screen, keeping `tui.station` in lock-step
/// with `app.screen`: entering a station constructs fresh module instances,
/// leaving drops them. Returns the effect the caller should honor.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    // Resize just needs a redraw, which the loop already flags
    if matches!(event, TuiEvent::Resize) {
        return Effect::None;
    }

    // ForceQuit (Ctrl+C) always quits regardless of screen
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }

    match app.screen {
        Screen::Menu => match tui.menu.handle_event(event) {
            Some(MenuEvent::Select(id)) => {
                let effect = update(app, Action::EnterStation(id));
                // Fresh module instances on every entry
                tui.station = Some(StationState::new(id, &app.config));
                effect
            }
            Some(MenuEvent::Quit) => update(app, Action::Quit),
            None => Effect::None,
        },
        Screen::Station(_) => {
            if let Some(ref mut station) = tui.station
                && let Some(StationEvent::BackToMenu) = station.handle_event(event)
            {
                let effect = update(app, Action::LeaveStation);
                // Dropping the station discards all module state
                tui.station = None;
                return effect;
            }
            Effect::None
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // No text cursor anywhere in the UI: selection highlights carry focus
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (cursor hidden)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // The menu pulses its selected card; stations are static between events
        let animating = app.screen == Screen::Menu;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(&mut app, &mut tui, &event) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::StationId;

    #[test]
    fn test_tui_state_menu_has_no_station() {
        let app = App::new(ResolvedConfig::default());
        let tui = TuiState::new(&app);
        assert!(tui.station.is_none());
    }

    #[test]
    fn test_tui_state_start_station_is_mounted() {
        let config = ResolvedConfig {
            start_station: Some(StationId::Investment),
            ..ResolvedConfig::default()
        };
        let app = App::from_config(config);
        let tui = TuiState::new(&app);
        let station = tui.station.expect("station should be mounted");
        assert_eq!(station.descriptor.id, StationId::Investment);
    }

    #[test]
    fn test_dispatch_force_quit_from_anywhere() {
        let mut app = App::new(ResolvedConfig::default());
        let mut tui = TuiState::new(&app);
        assert_eq!(
            dispatch(&mut app, &mut tui, &TuiEvent::ForceQuit),
            Effect::Quit
        );
    }

    #[test]
    fn test_dispatch_keeps_station_in_lock_step() {
        let mut app = App::new(ResolvedConfig::default());
        let mut tui = TuiState::new(&app);

        dispatch(&mut app, &mut tui, &TuiEvent::Submit); // select Education
        assert_eq!(app.screen, Screen::Station(StationId::Education));
        assert!(tui.station.is_some());

        dispatch(&mut app, &mut tui, &TuiEvent::Escape); // back to menu
        assert_eq!(app.screen, Screen::Menu);
        assert!(tui.station.is_none());
    }
}
