//! Retirement simulator: Monte Carlo percentile bands and the odds the
//! money lasts.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph, Sparkline};

use crate::core::config::ResolvedConfig;
use crate::domain::retirement::{self, MarketAssumptions, RetirementInputs};
use crate::tui::component::{Component, EventHandler, Module};
use crate::tui::components::{Field, Form};
use crate::tui::event::TuiEvent;
use crate::tui::modules::{money, spark_data};

pub struct RetirementSim {
    form: Form,
    currency: String,
    market: MarketAssumptions,
}

impl RetirementSim {
    pub fn new(config: &ResolvedConfig) -> Self {
        let form = Form::new(
            &config.currency_symbol,
            vec![
                Field::count("Current age", 35).range(18.0, 80.0),
                Field::count("Retirement age", 65).range(30.0, 80.0),
                Field::count("Plan until age", 90).range(50.0, 110.0),
                Field::amount("Current savings", 50_000.0).step(5000.0),
                Field::amount("Monthly contribution", 800.0).step(100.0),
                Field::amount("Monthly spending later", 3000.0).step(100.0),
            ],
        );
        Self {
            form,
            currency: config.currency_symbol.clone(),
            market: MarketAssumptions {
                mean_return_pct: config.mean_return_pct,
                volatility_pct: config.volatility_pct,
                inflation_pct: config.inflation_pct,
                trials: config.trials,
            },
        }
    }

    fn inputs(&self) -> RetirementInputs {
        RetirementInputs {
            current_age: self.form.count(0),
            retire_age: self.form.count(1),
            horizon_age: self.form.count(2),
            current_savings: self.form.amount(3),
            monthly_contribution: self.form.amount(4),
            monthly_spending: self.form.amount(5),
        }
    }
}

impl Module for RetirementSim {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        self.form.handle_event(event).is_some()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [form_area, gauge_area, result_area, chart_area] = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .areas(area);

        self.form.render(frame, form_area);

        let outcome = retirement::simulate(&self.inputs(), &self.market);
        let success_pct = outcome.success_rate * 100.0;
        let success_color = if success_pct >= 80.0 {
            Color::Green
        } else if success_pct >= 50.0 {
            Color::Yellow
        } else {
            Color::Red
        };

        let gauge = Gauge::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(
                        " Chance the money lasts ({} trials) ",
                        self.market.trials
                    )),
            )
            .gauge_style(Style::default().fg(success_color))
            .ratio(outcome.success_rate.clamp(0.0, 1.0))
            .label(format!("{success_pct:.0}%"));
        frame.render_widget(gauge, gauge_area);

        let horizon = outcome.bands.last();
        let result = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Median at retirement  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    money(&self.currency, outcome.median_at_retirement),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("At plan end           ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!(
                        "p10 {}   p50 {}   p90 {}",
                        money(&self.currency, horizon.map(|b| b.p10).unwrap_or(0.0)),
                        money(&self.currency, horizon.map(|b| b.p50).unwrap_or(0.0)),
                        money(&self.currency, horizon.map(|b| b.p90).unwrap_or(0.0)),
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Outcome (today's money) "),
        );
        frame.render_widget(result, result_area);

        let median_path: Vec<f64> = outcome.bands.iter().map(|b| b.p50).collect();
        let data = spark_data(&median_path);
        let chart = Sparkline::default()
            .data(&data)
            .style(Style::default().fg(Color::Magenta))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Median balance by age "),
            );
        frame.render_widget(chart, chart_area);
    }
}
