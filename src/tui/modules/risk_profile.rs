//! Risk profiling questionnaire: answer five questions, get a profile and
//! a model allocation.
//!
//! Not form-driven like the calculators — this is a list-selection flow:
//! Up/Down pick an answer, Enter commits it, Backspace steps back one
//! question, and `r` restarts from the result view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph};

use crate::core::config::ResolvedConfig;
use crate::domain::risk::{self, QUESTIONS};
use crate::tui::component::Module;
use crate::tui::event::TuiEvent;

pub struct RiskProfile {
    /// Committed answer index per question, in order.
    choices: Vec<usize>,
    /// Highlighted answer for the current question.
    highlight: usize,
}

impl RiskProfile {
    pub fn new(_config: &ResolvedConfig) -> Self {
        Self {
            choices: Vec::new(),
            highlight: 0,
        }
    }

    fn done(&self) -> bool {
        self.choices.len() >= QUESTIONS.len()
    }

    fn render_question(&mut self, frame: &mut Frame, area: Rect) {
        let current = self.choices.len();
        let question = &QUESTIONS[current];

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Question {} of {} ", current + 1, QUESTIONS.len()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        let wrap_width = inner.width.saturating_sub(2).max(20) as usize;
        for wrapped in textwrap::wrap(question.text, wrap_width) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::default());

        for (i, answer) in question.answers.iter().enumerate() {
            let style = if i == self.highlight {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(
                format!("  {}  ", answer.label),
                style,
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "↑↓ choose   Enter confirm   Backspace previous",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_result(&mut self, frame: &mut Frame, area: Rect) {
        let score = risk::score(&self.choices);
        let profile = risk::profile_for(score);
        let allocation = profile.allocation();

        let [summary_area, stocks_area, bonds_area, cash_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(area);

        let summary = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Your profile:  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    profile.label(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({} of {} points)", score, risk::max_score()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(Span::styled(profile.summary(), Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                "Press r to retake the questionnaire",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Result "),
        );
        frame.render_widget(summary, summary_area);

        let bar = |title: &'static str, pct: u8, color: Color| {
            Gauge::default()
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(format!(" {title} ")),
                )
                .gauge_style(Style::default().fg(color))
                .ratio(pct as f64 / 100.0)
                .label(format!("{pct}%"))
        };
        frame.render_widget(bar("Stocks", allocation.stocks_pct, Color::Magenta), stocks_area);
        frame.render_widget(bar("Bonds", allocation.bonds_pct, Color::Cyan), bonds_area);
        frame.render_widget(bar("Cash", allocation.cash_pct, Color::Green), cash_area);
    }
}

impl Module for RiskProfile {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        if self.done() {
            if matches!(event, TuiEvent::InputChar('r')) {
                self.choices.clear();
                self.highlight = 0;
                return true;
            }
            return false;
        }
        let answers = QUESTIONS[self.choices.len()].answers.len();
        match event {
            TuiEvent::CursorUp => {
                self.highlight = self.highlight.saturating_sub(1);
                true
            }
            TuiEvent::CursorDown => {
                self.highlight = (self.highlight + 1).min(answers - 1);
                true
            }
            TuiEvent::Submit => {
                self.choices.push(self.highlight);
                self.highlight = 0;
                true
            }
            TuiEvent::Backspace => {
                if let Some(previous) = self.choices.pop() {
                    self.highlight = previous;
                }
                true
            }
            _ => false,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.done() {
            self.render_result(frame, area);
        } else {
            self.render_question(frame, area);
        }
    }
}
