//! Debt freedom simulator: two editable debts, a shared extra payment, and
//! the avalanche/snowball payoff plan.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::config::ResolvedConfig;
use crate::domain::debt::{self, Debt, Strategy};
use crate::tui::component::{Component, EventHandler, Module};
use crate::tui::components::{Field, Form};
use crate::tui::event::TuiEvent;
use crate::tui::modules::money;

/// Minimum payments follow the common card floor: 2% of balance, at least 25.
fn min_payment(balance: f64) -> f64 {
    (balance * 0.02).max(25.0)
}

pub struct DebtFreedom {
    form: Form,
    currency: String,
}

impl DebtFreedom {
    pub fn new(config: &ResolvedConfig) -> Self {
        let form = Form::new(
            &config.currency_symbol,
            vec![
                Field::amount("Credit card balance", 3000.0).step(250.0),
                Field::percent("Credit card APR", 22.0).range(0.0, 60.0),
                Field::amount("Car loan balance", 8000.0).step(250.0),
                Field::percent("Car loan APR", 7.0).range(0.0, 60.0),
                Field::amount("Extra payment / month", 300.0).step(50.0),
                Field::choice("Strategy", &["Avalanche", "Snowball"]),
            ],
        );
        Self {
            form,
            currency: config.currency_symbol.clone(),
        }
    }

    fn debts(&self) -> Vec<Debt> {
        vec![
            Debt {
                name: "Credit card".to_string(),
                balance: self.form.amount(0),
                apr_pct: self.form.percent(1),
                min_payment: min_payment(self.form.amount(0)),
            },
            Debt {
                name: "Car loan".to_string(),
                balance: self.form.amount(2),
                apr_pct: self.form.percent(3),
                min_payment: min_payment(self.form.amount(2)),
            },
        ]
    }

    fn strategy(&self) -> Strategy {
        if self.form.choice(5) == 0 {
            Strategy::Avalanche
        } else {
            Strategy::Snowball
        }
    }
}

impl Module for DebtFreedom {
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

        let strategy = self.strategy();
        let plan = debt::payoff_plan(&self.debts(), self.form.amount(4), strategy);

        let mut lines = Vec::new();
        if plan.stalled {
            lines.push(Line::from(Span::styled(
                "Payments never outrun the interest — this plan stalls.",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "Raise the extra payment to make progress.",
                Style::default().fg(Color::Gray),
            )));
        } else {
            let years = plan.months / 12;
            let months = plan.months % 12;
            let when = match (years, months) {
                (0, m) => format!("{m} months"),
                (y, 0) => format!("{y} years"),
                (y, m) => format!("{y} years {m} months"),
            };
            lines.push(Line::from(vec![
                Span::styled("Debt-free in  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    when,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({})", strategy.label()),
                    Style::default().fg(Color::Gray),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Interest paid  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    money(&self.currency, plan.total_interest),
                    Style::default().fg(Color::Red),
                ),
            ]));
            if !plan.payoff_order.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Cleared in order  ", Style::default().fg(Color::Gray)),
                    Span::raw(plan.payoff_order.join(" → ")),
                ]));
            }
        }

        let result = Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Plan "),
        );
        frame.render_widget(result, result_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(module: &mut DebtFreedom) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| module.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_plan() {
        let mut module = DebtFreedom::new(&ResolvedConfig::default());
        let text = rendered(&mut module);
        assert!(text.contains("Debt-free in"));
        assert!(text.contains("Interest paid"));
        assert!(text.contains("Avalanche"));
    }

    #[test]
    fn test_strategy_choice_switches_plan() {
        let mut module = DebtFreedom::new(&ResolvedConfig::default());
        // Move to the strategy field and flip it
        for _ in 0..5 {
            module.handle_event(&TuiEvent::CursorDown);
        }
        module.handle_event(&TuiEvent::CursorRight);
        assert_eq!(module.strategy(), Strategy::Snowball);
        let text = rendered(&mut module);
        assert!(text.contains("Snowball"));
    }

    #[test]
    fn test_min_payment_floor() {
        assert_eq!(min_payment(100.0), 25.0);
        assert_eq!(min_payment(5000.0), 100.0);
    }
}
