use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold internal state (via `&mut State` fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// The `render` method takes `&mut self` to allow components to:
/// 1. Update internal caches (e.g. layout calculations).
/// 2. Manage presentation state (e.g. scroll offsets) during rendering.
///
/// This aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` to allow updating internal presentation state
    /// or caches during the render pass.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

/// A station sub-module: a calculator or assessment leaf.
///
/// The object-safe sibling of `Component` + `EventHandler` — the generic
/// station screen holds its modules as trait objects, so the event type
/// collapses to a consumed/not-consumed flag. Modules own their form state
/// and derive their result on render; the station never reads it back.
pub trait Module {
    /// Handle an event. Returns true when the module consumed it.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> bool;

    /// Render the module body into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
