//! # Form Component
//!
//! A vertical list of labelled input fields: money amounts, percentages,
//! integer counts, and fixed-choice selectors. One field is selected at a
//! time; Up/Down move the selection, typing edits numeric fields in place,
//! Left/Right nudge numeric fields by their step (and cycle choices).
//!
//! ## Validation policy
//!
//! Numeric fields keep whatever the user typed in their buffer and parse on
//! read: an unparsable buffer falls back to the field's default, and parsed
//! values clamp to the field's range. Calculators therefore always receive
//! usable values and no error state needs to travel upward.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Width reserved for field labels; values start past this column.
const LABEL_WIDTH: usize = 26;

#[derive(Debug, Clone, PartialEq)]
enum FieldKind {
    /// Money amount, rendered with the currency prefix.
    Amount,
    /// Percentage, rendered with a % suffix.
    Percent,
    /// Whole number (years, months, age).
    Count,
    /// One of a fixed option set. Left/Right cycles.
    Choice {
        options: &'static [&'static str],
        selected: usize,
    },
}

/// One input field. Construct through the kind-specific builders and chain
/// `range`/`step` to tighten the bounds.
#[derive(Debug, Clone)]
pub struct Field {
    label: &'static str,
    kind: FieldKind,
    buffer: String,
    default: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl Field {
    fn numeric(label: &'static str, kind: FieldKind, default: f64, max: f64, step: f64) -> Self {
        Self {
            label,
            kind,
            buffer: format_number(default),
            default,
            min: 0.0,
            max,
            step,
        }
    }

    pub fn amount(label: &'static str, default: f64) -> Self {
        Self::numeric(label, FieldKind::Amount, default, 1_000_000_000.0, 100.0)
    }

    pub fn percent(label: &'static str, default: f64) -> Self {
        Self::numeric(label, FieldKind::Percent, default, 100.0, 0.5)
    }

    pub fn count(label: &'static str, default: u32) -> Self {
        Self::numeric(label, FieldKind::Count, default as f64, 120.0, 1.0)
    }

    pub fn choice(label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            label,
            kind: FieldKind::Choice {
                options,
                selected: 0,
            },
            buffer: String::new(),
            default: 0.0,
            min: 0.0,
            max: 0.0,
            step: 0.0,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Parse the buffer, falling back to the default and clamping to range.
    fn value(&self) -> f64 {
        self.buffer
            .trim()
            .parse::<f64>()
            .unwrap_or(self.default)
            .clamp(self.min, self.max)
    }

    fn nudge(&mut self, direction: f64) {
        match &mut self.kind {
            FieldKind::Choice { options, selected } => {
                if options.is_empty() {
                    return;
                }
                let len = options.len();
                *selected = if direction < 0.0 {
                    (*selected + len - 1) % len
                } else {
                    (*selected + 1) % len
                };
            }
            _ => {
                let next = (self.value() + direction * self.step).clamp(self.min, self.max);
                self.buffer = format_number(next);
            }
        }
    }

    fn accepts_char(&self, c: char) -> bool {
        !matches!(self.kind, FieldKind::Choice { .. }) && (c.is_ascii_digit() || c == '.')
    }

    fn display_value(&self, currency: &str) -> String {
        match &self.kind {
            FieldKind::Amount => format!("{}{}", currency, self.buffer),
            FieldKind::Percent => format!("{}%", self.buffer),
            FieldKind::Count => self.buffer.clone(),
            FieldKind::Choice { options, selected } => {
                format!("‹ {} ›", options.get(*selected).copied().unwrap_or(""))
            }
        }
    }
}

/// Drop a trailing ".0" so whole numbers read clean.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

/// High-level events emitted by the Form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Any field value changed; the module should recompute.
    Changed,
}

/// The form widget: owns its fields and the selection cursor.
pub struct Form {
    fields: Vec<Field>,
    selected: usize,
    currency: String,
}

impl Form {
    pub fn new(currency: &str, fields: Vec<Field>) -> Self {
        Self {
            fields,
            selected: 0,
            currency: currency.to_string(),
        }
    }

    /// Rendered height: one line per field plus the border.
    pub fn height(&self) -> u16 {
        self.fields.len() as u16 + 2
    }

    pub fn amount(&self, idx: usize) -> f64 {
        self.fields.get(idx).map(Field::value).unwrap_or(0.0)
    }

    pub fn percent(&self, idx: usize) -> f64 {
        self.amount(idx)
    }

    pub fn count(&self, idx: usize) -> u32 {
        self.amount(idx).round().max(0.0) as u32
    }

    /// Selected option index of a choice field (0 for non-choice fields).
    pub fn choice(&self, idx: usize) -> usize {
        match self.fields.get(idx).map(|f| &f.kind) {
            Some(FieldKind::Choice { selected, .. }) => *selected,
            _ => 0,
        }
    }
}

impl EventHandler for Form {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.fields.is_empty() {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.fields.len() - 1);
                None
            }
            TuiEvent::CursorLeft => {
                self.fields[self.selected].nudge(-1.0);
                Some(FormEvent::Changed)
            }
            TuiEvent::CursorRight => {
                self.fields[self.selected].nudge(1.0);
                Some(FormEvent::Changed)
            }
            TuiEvent::InputChar(c) => {
                let field = &mut self.fields[self.selected];
                if field.accepts_char(*c) {
                    field.buffer.push(*c);
                    Some(FormEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Backspace => {
                let field = &mut self.fields[self.selected];
                if matches!(field.kind, FieldKind::Choice { .. }) || field.buffer.is_empty() {
                    None
                } else {
                    field.buffer.pop();
                    Some(FormEvent::Changed)
                }
            }
            _ => None,
        }
    }
}

impl Component for Form {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let selected = i == self.selected;
                let label_style = if selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let value_style = if selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Cyan)
                };

                let label = pad_label(field.label);
                let marker = if selected { "› " } else { "  " };
                Line::from(vec![
                    Span::styled(marker, label_style),
                    Span::styled(label, label_style),
                    Span::styled(format!(" {} ", field.display_value(&self.currency)), value_style),
                ])
            })
            .collect();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Inputs ");

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Pad or truncate a label to the fixed label column width.
fn pad_label(label: &str) -> String {
    let width = label.width();
    if width >= LABEL_WIDTH {
        label.chars().take(LABEL_WIDTH).collect()
    } else {
        format!("{}{}", label, " ".repeat(LABEL_WIDTH - width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn sample_form() -> Form {
        Form::new(
            "$",
            vec![
                Field::amount("Monthly income", 4000.0),
                Field::percent("Rate", 5.0),
                Field::count("Years", 10).range(1.0, 50.0),
                Field::choice("Strategy", &["Avalanche", "Snowball"]),
            ],
        )
    }

    #[test]
    fn test_defaults_read_back() {
        let form = sample_form();
        assert_eq!(form.amount(0), 4000.0);
        assert_eq!(form.percent(1), 5.0);
        assert_eq!(form.count(2), 10);
        assert_eq!(form.choice(3), 0);
    }

    #[test]
    fn test_typing_edits_selected_field() {
        let mut form = sample_form();
        form.handle_event(&TuiEvent::Backspace);
        form.handle_event(&TuiEvent::Backspace);
        form.handle_event(&TuiEvent::Backspace);
        form.handle_event(&TuiEvent::Backspace);
        let res = form.handle_event(&TuiEvent::InputChar('7'));
        assert_eq!(res, Some(FormEvent::Changed));
        form.handle_event(&TuiEvent::InputChar('5'));
        assert_eq!(form.amount(0), 75.0);
    }

    #[test]
    fn test_non_numeric_chars_rejected() {
        let mut form = sample_form();
        assert_eq!(form.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(form.amount(0), 4000.0);
    }

    #[test]
    fn test_unparsable_buffer_falls_back_to_default() {
        let mut form = sample_form();
        form.handle_event(&TuiEvent::InputChar('.'));
        form.handle_event(&TuiEvent::InputChar('.'));
        // "4000.." doesn't parse — reads as the default
        assert_eq!(form.amount(0), 4000.0);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut form = sample_form();
        form.handle_event(&TuiEvent::CursorUp);
        assert_eq!(form.selected, 0);
        for _ in 0..10 {
            form.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(form.selected, 3);
    }

    #[test]
    fn test_nudge_steps_and_clamps() {
        let mut form = sample_form();
        form.handle_event(&TuiEvent::CursorRight);
        assert_eq!(form.amount(0), 4100.0);
        form.handle_event(&TuiEvent::CursorDown); // Rate
        for _ in 0..20 {
            form.handle_event(&TuiEvent::CursorLeft);
        }
        assert_eq!(form.percent(1), 0.0);
    }

    #[test]
    fn test_choice_cycles_both_directions() {
        let mut form = sample_form();
        for _ in 0..3 {
            form.handle_event(&TuiEvent::CursorDown);
        }
        form.handle_event(&TuiEvent::CursorRight);
        assert_eq!(form.choice(3), 1);
        form.handle_event(&TuiEvent::CursorRight);
        assert_eq!(form.choice(3), 0);
        form.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(form.choice(3), 1);
    }

    #[test]
    fn test_count_clamps_to_range() {
        let mut form = sample_form();
        form.handle_event(&TuiEvent::CursorDown);
        form.handle_event(&TuiEvent::CursorDown); // Years
        form.handle_event(&TuiEvent::Backspace);
        form.handle_event(&TuiEvent::Backspace);
        form.handle_event(&TuiEvent::InputChar('9'));
        form.handle_event(&TuiEvent::InputChar('9'));
        form.handle_event(&TuiEvent::InputChar('9'));
        assert_eq!(form.count(2), 50);
    }

    #[test]
    fn test_render_shows_labels_and_values() {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut form = sample_form();
        terminal.draw(|f| form.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Monthly income"));
        assert!(text.contains("$4000"));
        assert!(text.contains("Avalanche"));
    }
}
