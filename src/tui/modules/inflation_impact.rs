//! Inflation impact explorer: what a present amount still buys, and what
//! today's prices grow into.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Sparkline};

use crate::core::config::ResolvedConfig;
use crate::domain::inflation;
use crate::tui::component::{Component, EventHandler, Module};
use crate::tui::components::{Field, Form};
use crate::tui::event::TuiEvent;
use crate::tui::modules::{money, spark_data};

pub struct InflationImpact {
    form: Form,
    currency: String,
}

impl InflationImpact {
    pub fn new(config: &ResolvedConfig) -> Self {
        let form = Form::new(
            &config.currency_symbol,
            vec![
                Field::amount("Amount today", 1000.0).step(100.0),
                Field::percent("Inflation rate", config.inflation_pct).range(0.0, 20.0),
                Field::count("Years", 20).range(1.0, 60.0),
            ],
        );
        Self {
            form,
            currency: config.currency_symbol.clone(),
        }
    }
}

impl Module for InflationImpact {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        self.form.handle_event(event).is_some()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [form_area, result_area, chart_area] = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .areas(area);

        self.form.render(frame, form_area);

        let amount = self.form.amount(0);
        let rate = self.form.percent(1);
        let years = self.form.count(2);

        let power = inflation::purchasing_power(amount, rate, years);
        let cost = inflation::future_cost(amount, rate, years);

        let result = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("{} buys the equivalent of  ", money(&self.currency, amount)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    money(&self.currency, power),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  in {years} years"), Style::default().fg(Color::Gray)),
            ]),
            Line::from(vec![
                Span::styled("Today's price tag becomes  ", Style::default().fg(Color::Gray)),
                Span::styled(money(&self.currency, cost), Style::default().fg(Color::Yellow)),
            ]),
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Purchasing power "),
        );
        frame.render_widget(result, result_area);

        let data = spark_data(&inflation::erosion_schedule(amount, rate, years));
        let chart = Sparkline::default()
            .data(&data)
            .style(Style::default().fg(Color::Red))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Erosion by year "),
            );
        frame.render_widget(chart, chart_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_shows_both_directions() {
        let backend = TestBackend::new(80, 22);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut module = InflationImpact::new(&ResolvedConfig::default());
        terminal.draw(|f| module.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("buys the equivalent of"));
        assert!(text.contains("price tag becomes"));
        assert!(text.contains("Erosion by year"));
    }

    #[test]
    fn test_inflation_default_comes_from_config() {
        let config = ResolvedConfig {
            inflation_pct: 4.0,
            ..ResolvedConfig::default()
        };
        let module = InflationImpact::new(&config);
        assert_eq!(module.form.percent(1), 4.0);
    }
}
