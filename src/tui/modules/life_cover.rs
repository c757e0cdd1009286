//! Life cover estimator: income replacement plus debt clearance, net of
//! what's already in place.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::config::ResolvedConfig;
use crate::domain::cover;
use crate::tui::component::{Component, EventHandler, Module};
use crate::tui::components::{Field, Form};
use crate::tui::event::TuiEvent;
use crate::tui::modules::money;

pub struct LifeCover {
    form: Form,
    currency: String,
}

impl LifeCover {
    pub fn new(config: &ResolvedConfig) -> Self {
        let form = Form::new(
            &config.currency_symbol,
            vec![
                Field::amount("Annual income", 60_000.0).step(1000.0),
                Field::count("Years to replace", 10).range(1.0, 30.0),
                Field::amount("Outstanding debts", 150_000.0).step(5000.0),
                Field::amount("Savings & cover in place", 50_000.0).step(5000.0),
            ],
        );
        Self {
            form,
            currency: config.currency_symbol.clone(),
        }
    }
}

impl Module for LifeCover {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        self.form.handle_event(event).is_some()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [form_area, result_area] = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Min(6),
        ])
        .areas(area);

        self.form.render(frame, form_area);

        let income = self.form.amount(0);
        let years = self.form.count(1);
        let debts = self.form.amount(2);
        let existing = self.form.amount(3);
        let need = cover::life_cover_need(income, years, debts, existing);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Recommended cover  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    money(&self.currency, need),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!("{years} years of income  "),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw(money(&self.currency, income * years as f64)),
            ]),
            Line::from(vec![
                Span::styled("Debts to clear      ", Style::default().fg(Color::Gray)),
                Span::raw(money(&self.currency, debts)),
            ]),
            Line::from(vec![
                Span::styled("Already provided    ", Style::default().fg(Color::Gray)),
                Span::raw(format!("-{}", money(&self.currency, existing))),
            ]),
        ];
        if need == 0.0 {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Existing provision already covers the need.",
                Style::default().fg(Color::Green),
            )));
        }

        let result = Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Estimate "),
        );
        frame.render_widget(result, result_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_shows_breakdown() {
        let backend = TestBackend::new(80, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut module = LifeCover::new(&ResolvedConfig::default());
        terminal.draw(|f| module.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        // 60k * 10 + 150k - 50k = 700k
        assert!(text.contains("Recommended cover"));
        assert!(text.contains("$700,000"));
        assert!(text.contains("10 years of income"));
    }
}
