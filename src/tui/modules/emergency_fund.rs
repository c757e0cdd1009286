//! Emergency fund calculator: months of expenses covered and the gap to a
//! target buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph};

use crate::core::config::ResolvedConfig;
use crate::domain::emergency;
use crate::tui::component::{Component, EventHandler, Module};
use crate::tui::components::{Field, Form};
use crate::tui::event::TuiEvent;
use crate::tui::modules::money;

pub struct EmergencyFund {
    form: Form,
    currency: String,
}

impl EmergencyFund {
    pub fn new(config: &ResolvedConfig) -> Self {
        let form = Form::new(
            &config.currency_symbol,
            vec![
                Field::amount("Current savings", 6000.0).step(250.0),
                Field::amount("Monthly expenses", 2500.0).step(100.0),
                Field::count("Target months", 6).range(1.0, 24.0),
            ],
        );
        Self {
            form,
            currency: config.currency_symbol.clone(),
        }
    }
}

impl Module for EmergencyFund {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        self.form.handle_event(event).is_some()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [form_area, result_area, gauge_area] = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .areas(area);

        self.form.render(frame, form_area);

        let target_months = self.form.count(2);
        let status = emergency::assess(
            self.form.amount(0),
            self.form.amount(1),
            target_months,
        );

        let funded = status.gap == 0.0;
        let months_style = if funded {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        };

        let second_line = if funded {
            Line::from(Span::styled(
                "Target met — your buffer is in place.",
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from(vec![
                Span::styled("Still to save  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    money(&self.currency, status.gap),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("  (target {})", money(&self.currency, status.target_amount)),
                    Style::default().fg(Color::Gray),
                ),
            ])
        };

        let result = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Covered for  ", Style::default().fg(Color::Gray)),
                Span::styled(format!("{:.1} months", status.months_covered), months_style),
            ]),
            second_line,
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Buffer "),
        );
        frame.render_widget(result, result_area);

        let progress = if target_months > 0 {
            (status.months_covered / target_months as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let gauge = Gauge::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" Progress to {target_months} months ")),
            )
            .gauge_style(Style::default().fg(if funded { Color::Green } else { Color::Yellow }))
            .ratio(progress);
        frame.render_widget(gauge, gauge_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_shows_coverage_and_gap() {
        let backend = TestBackend::new(80, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut module = EmergencyFund::new(&ResolvedConfig::default());
        terminal.draw(|f| module.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        // 6000 / 2500 = 2.4 months against a 6-month target
        assert!(text.contains("2.4 months"));
        assert!(text.contains("Still to save"));
        assert!(text.contains("Progress to 6 months"));
    }
}
