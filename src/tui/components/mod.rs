//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing location and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `MainMenuState` / `MainMenu`: Station catalog cards with a selection cursor
//! - `StationState` / `StationScreen`: Tab strip + single mounted module
//! - `Form`: Labelled input fields shared by the calculator modules
//!
//! Stateful screens follow the persistent state + transient wrapper pattern:
//! the `*State` struct lives in `TuiState` across frames, and the wrapper is
//! created each frame with borrowed state.
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props" (function parameters), not by
//! directly accessing global state. This makes dependencies explicit and
//! components testable. Sub-modules of a station compose the shared `Form`
//! component rather than re-implementing field handling.

pub mod form;
pub mod main_menu;
pub mod station;
mod title_bar;

pub use form::{Field, Form, FormEvent};
pub use main_menu::{MainMenu, MainMenuState, MenuEvent};
pub use station::{StationEvent, StationScreen, StationState};
pub use title_bar::TitleBar;
