//! # Application State
//!
//! Core navigation state for Finwell. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen            // which view is active (menu or a station)
//! ├── status_message: String    // status bar text
//! └── config: ResolvedConfig    // resolved settings (read-only after start)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::catalog::StationId;
use crate::core::config::ResolvedConfig;

/// The single piece of top-level navigation state. Exactly one view is
/// active at any time; transitions only go menu→station or station→menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Station(StationId),
}

pub struct App {
    pub screen: Screen,
    pub status_message: String,
    pub config: ResolvedConfig,
}

impl App {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            screen: Screen::Menu,
            status_message: String::from("Welcome to Finwell!"),
            config,
        }
    }

    /// Build the initial App, honoring a configured start station.
    pub fn from_config(config: ResolvedConfig) -> Self {
        let mut app = Self::new(config);
        if let Some(id) = app.config.start_station {
            app.screen = Screen::Station(id);
            app.status_message = crate::core::catalog::station(id).title.to_string();
        }
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResolvedConfig;

    #[test]
    fn test_app_new_starts_at_menu() {
        let app = App::new(ResolvedConfig::default());
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.status_message, "Welcome to Finwell!");
    }

    #[test]
    fn test_from_config_honors_start_station() {
        let config = ResolvedConfig {
            start_station: Some(StationId::Protection),
            ..ResolvedConfig::default()
        };
        let app = App::from_config(config);
        assert_eq!(app.screen, Screen::Station(StationId::Protection));
        assert_eq!(app.status_message, "Protection");
    }
}
