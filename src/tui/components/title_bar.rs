//! # TitleBar Component
//!
//! Top status bar showing where the user is and the latest status message.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational—it receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Foundation".to_string(), app.status_message.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! ### Props-in-Struct Pattern
//!
//! Rather than passing props as render() parameters, we store them as struct
//! fields. This is necessary for trait-based polymorphism—the Component trait
//! requires a fixed render() signature.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component showing location and status.
///
/// # Props
///
/// - `location`: Where the user is ("Menu" or the active station title)
/// - `status_message`: Transient status from the app state
pub struct TitleBar {
    pub location: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(location: String, status_message: String) -> Self {
        Self {
            location,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    ///
    /// The status segment is dropped when empty so the bar never ends in a
    /// dangling separator.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Finwell ({})", self.location)
        } else {
            format!("Finwell ({}) | {}", self.location, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
