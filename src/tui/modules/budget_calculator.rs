//! 50/30/20 budget calculator: targets from income, gauges against actual
//! needs and wants spending.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph};

use crate::core::config::ResolvedConfig;
use crate::domain::budget::{self, BudgetInputs};
use crate::tui::component::{Component, EventHandler, Module};
use crate::tui::components::{Field, Form};
use crate::tui::event::TuiEvent;
use crate::tui::modules::money;

pub struct BudgetCalculator {
    form: Form,
    currency: String,
}

impl BudgetCalculator {
    pub fn new(config: &ResolvedConfig) -> Self {
        let form = Form::new(
            &config.currency_symbol,
            vec![
                Field::amount("Monthly income", 4500.0).step(100.0),
                Field::amount("Needs spending", 2300.0).step(100.0),
                Field::amount("Wants spending", 1400.0).step(100.0),
            ],
        );
        Self {
            form,
            currency: config.currency_symbol.clone(),
        }
    }

    fn gauge(&self, title: &'static str, actual: f64, target: f64, ratio: f64) -> Gauge<'_> {
        let over = ratio > 1.0;
        let color = if over { Color::Red } else { Color::Green };
        let label = format!(
            "{} / {} ({:.0}%)",
            money(&self.currency, actual),
            money(&self.currency, target),
            ratio * 100.0
        );
        Gauge::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" {title} ")),
            )
            .gauge_style(Style::default().fg(color))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(label)
    }
}

impl Module for BudgetCalculator {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        self.form.handle_event(event).is_some()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [form_area, needs_area, wants_area, savings_area] = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .areas(area);

        self.form.render(frame, form_area);

        let b = budget::breakdown(BudgetInputs {
            monthly_income: self.form.amount(0),
            needs_spend: self.form.amount(1),
            wants_spend: self.form.amount(2),
        });

        frame.render_widget(
            self.gauge("Needs (50%)", self.form.amount(1), b.needs_target, b.needs_ratio),
            needs_area,
        );
        frame.render_widget(
            self.gauge("Wants (30%)", self.form.amount(2), b.wants_target, b.wants_ratio),
            wants_area,
        );

        let on_track = b.savings_surplus >= 0.0;
        let verdict = if on_track {
            Span::styled(
                format!("ahead of the 20% target by {}", money(&self.currency, b.savings_surplus)),
                Style::default().fg(Color::Green),
            )
        } else {
            Span::styled(
                format!("behind the 20% target by {}", money(&self.currency, -b.savings_surplus)),
                Style::default().fg(Color::Red),
            )
        };
        let savings = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Left to save  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    money(&self.currency, b.actual_savings),
                    Style::default()
                        .fg(if on_track { Color::Green } else { Color::Red })
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  (target {})", money(&self.currency, b.savings_target)),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::from(verdict),
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Savings (20%) "),
        );
        frame.render_widget(savings, savings_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(module: &mut BudgetCalculator) -> String {
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
    fn test_render_shows_all_three_buckets() {
        let mut module = BudgetCalculator::new(&ResolvedConfig::default());
        let text = rendered(&mut module);
        assert!(text.contains("Needs (50%)"));
        assert!(text.contains("Wants (30%)"));
        assert!(text.contains("Savings (20%)"));
    }

    #[test]
    fn test_default_inputs_fall_short_of_target() {
        // 4500 income, 2300 + 1400 spent → 800 saved vs 900 target
        let mut module = BudgetCalculator::new(&ResolvedConfig::default());
        let text = rendered(&mut module);
        assert!(text.contains("behind the 20% target"));
        assert!(text.contains("$800"));
    }
}
