//! # Station Screen Component
//!
//! The one implementation of the "selected-id switches rendered subtree"
//! pattern at station level: a header, a tab strip across the station's
//! modules, and exactly one mounted module rendering below. All four
//! stations are instances of this component, driven by their catalog
//! descriptor — there is no per-station view code.
//!
//! Module instances are constructed fresh when the station is entered and
//! dropped when it is left (reset-on-remount). Within one visit, switching
//! tabs keeps sibling module state alive.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `StationState` lives in `TuiState`
//! - `StationScreen` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};

use crate::core::catalog::{self, ModuleDescriptor, StationDescriptor, StationId};
use crate::core::config::ResolvedConfig;
use crate::tui::component::Module;
use crate::tui::event::TuiEvent;
use crate::tui::modules;
use crate::tui::ui::accent_color;

/// Persistent state for an entered station: its descriptor, one live
/// instance per module, and the active tab index.
pub struct StationState {
    pub descriptor: &'static StationDescriptor,
    modules: Vec<Box<dyn Module>>,
    pub active: usize,
}

impl StationState {
    /// Enter a station: construct fresh module instances from the catalog.
    pub fn new(id: StationId, config: &ResolvedConfig) -> Self {
        let descriptor = catalog::station(id);
        let modules = descriptor
            .modules
            .iter()
            .map(|m| modules::build(m.id, config))
            .collect();
        Self {
            descriptor,
            modules,
            active: 0,
        }
    }

    /// Descriptor of the currently mounted module.
    pub fn active_module(&self) -> &'static ModuleDescriptor {
        &self.descriptor.modules[self.active]
    }

    /// Handle a key event. Tab switching stays here; everything else goes
    /// to the single active module.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<StationEvent> {
        let count = self.modules.len();
        match event {
            TuiEvent::Escape => Some(StationEvent::BackToMenu),
            TuiEvent::NextTab => {
                self.active = (self.active + 1) % count;
                None
            }
            TuiEvent::PrevTab => {
                self.active = (self.active + count - 1) % count;
                None
            }
            _ => {
                self.modules[self.active].handle_event(event);
                None
            }
        }
    }
}

/// Events emitted by a station screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationEvent {
    BackToMenu,
}

/// Transient render wrapper for a station.
pub struct StationScreen<'a> {
    state: &'a mut StationState,
}

impl<'a> StationScreen<'a> {
    pub fn new(state: &'a mut StationState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, tabs_area, body_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let descriptor = self.state.descriptor;
        let accent = accent_color(descriptor.accent);

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("{} {}. {}  ", descriptor.icon, descriptor.number, descriptor.title),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(descriptor.subtitle, Style::default().fg(Color::Gray)),
            ]),
            Line::from(Span::styled(
                descriptor.description,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                self.state.active_module().hint,
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(header, header_area);

        let titles: Vec<Line> = descriptor
            .modules
            .iter()
            .map(|m| Line::from(m.title))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.state.active)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );
        frame.render_widget(tabs, tabs_area);

        // Exactly one module is mounted and rendered
        self.state.modules[self.state.active].render(frame, body_area);
    }
}
