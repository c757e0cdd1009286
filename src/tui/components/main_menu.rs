//! # Main Menu Component
//!
//! The station catalog rendered as selectable cards, one per descriptor in
//! catalog order. Selecting a card emits `MenuEvent::Select(id)`; the menu
//! itself holds nothing but the selection cursor.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MainMenuState` lives in `TuiState`
//! - `MainMenu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::catalog::{STATIONS, StationDescriptor, StationId};
use crate::tui::event::TuiEvent;
use crate::tui::ui::accent_color;

/// Height of one station card, borders included.
const CARD_HEIGHT: u16 = 5;
/// Preferred card width; narrower terminals get the full width.
const CARD_WIDTH: u16 = 72;

/// Persistent state for the main menu: just the selection cursor.
pub struct MainMenuState {
    pub selected: usize,
}

impl MainMenuState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Handle a key event, returning a MenuEvent when the menu should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::CursorUp | TuiEvent::CursorLeft => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::CursorRight => {
                self.selected = (self.selected + 1).min(STATIONS.len() - 1);
                None
            }
            TuiEvent::Submit => Some(MenuEvent::Select(STATIONS[self.selected].id)),
            TuiEvent::InputChar(c) if c.is_ascii_digit() => {
                let number = c.to_digit(10).unwrap_or(0) as u8;
                STATIONS
                    .iter()
                    .find(|s| s.number == number)
                    .map(|s| MenuEvent::Select(s.id))
            }
            TuiEvent::InputChar('q') | TuiEvent::Escape => Some(MenuEvent::Quit),
            _ => None,
        }
    }
}

impl Default for MainMenuState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Select(StationId),
    Quit,
}

/// Transient render wrapper for the menu.
pub struct MainMenu<'a> {
    state: &'a mut MainMenuState,
    /// 0..1 animation value for the selected card highlight.
    pulse: f32,
}

impl<'a> MainMenu<'a> {
    pub fn new(state: &'a mut MainMenuState, pulse: f32) -> Self {
        Self { state, pulse }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let total_height = CARD_HEIGHT * STATIONS.len() as u16 + 2;
        let [column] = Layout::horizontal([Constraint::Length(CARD_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(area);
        let [header_area, cards_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(total_height),
        ])
        .flex(Flex::Center)
        .areas(column);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Financial Wellbeing Showroom",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Pick a station — Enter opens, q quits",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, header_area);

        let constraints = vec![Constraint::Length(CARD_HEIGHT); STATIONS.len()];
        let card_areas = Layout::vertical(constraints).split(cards_area);

        for (i, descriptor) in STATIONS.iter().enumerate() {
            self.render_card(frame, card_areas[i], descriptor, i == self.state.selected);
        }
    }

    fn render_card(
        &self,
        frame: &mut Frame,
        area: Rect,
        descriptor: &StationDescriptor,
        selected: bool,
    ) {
        let accent = accent_color(descriptor.accent);
        let border_style = if selected {
            // Pulse between dim and bright accent while selected
            let style = Style::default().fg(accent);
            if self.pulse > 0.5 {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            }
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title_style = if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let tags = descriptor
            .tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join("  ");

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", descriptor.icon), title_style),
                Span::styled(
                    format!("{}. {}", descriptor.number, descriptor.title),
                    title_style,
                ),
            ]),
            Line::from(Span::styled(
                descriptor.subtitle,
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(tags, Style::default().fg(Color::DarkGray))),
        ];

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
