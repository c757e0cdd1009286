//! # Actions
//!
//! Everything that can happen to the navigation state becomes an `Action`.
//! User picks a card on the menu? That's `Action::EnterStation(id)`.
//! User backs out of a station? That's `Action::LeaveStation`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the screen.
//! All transitions are total over the closed `StationId` set, so there is
//! no invalid-id or failure path to handle.

use log::info;

use crate::core::catalog::{self, StationId};
use crate::core::state::{App, Screen};

/// A navigation event. The closed set of things the user can do to the
/// top-level state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Menu → station transition.
    EnterStation(StationId),
    /// Station → menu transition. A no-op when already at the menu.
    LeaveStation,
    /// Exit the application.
    Quit,
}

/// What the caller should do after an update. The reducer itself never
/// performs I/O.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Apply an action to the app state. The only place navigation state mutates.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EnterStation(id) => {
            info!("Entering station {:?}", id);
            app.screen = Screen::Station(id);
            app.status_message = catalog::station(id).title.to_string();
            Effect::None
        }
        Action::LeaveStation => {
            if app.screen != Screen::Menu {
                info!("Leaving station, back to menu");
                app.screen = Screen::Menu;
                app.status_message = String::from("Pick a station");
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
