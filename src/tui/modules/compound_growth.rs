//! Compound growth explorer: starting amount plus monthly contributions,
//! projected over the chosen horizon.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Sparkline};

use crate::core::config::ResolvedConfig;
use crate::domain::compound;
use crate::tui::component::{Component, EventHandler, Module};
use crate::tui::components::{Field, Form};
use crate::tui::event::TuiEvent;
use crate::tui::modules::{money, spark_data};

pub struct CompoundGrowth {
    form: Form,
    currency: String,
}

impl CompoundGrowth {
    pub fn new(config: &ResolvedConfig) -> Self {
        let form = Form::new(
            &config.currency_symbol,
            vec![
                Field::amount("Starting amount", 1000.0).step(500.0),
                Field::amount("Monthly contribution", 200.0).step(50.0),
                Field::percent("Annual return", config.mean_return_pct).range(0.0, 30.0),
                Field::count("Years", 20).range(1.0, 60.0),
            ],
        );
        Self {
            form,
            currency: config.currency_symbol.clone(),
        }
    }
}

impl Module for CompoundGrowth {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        self.form.handle_event(event).is_some()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [form_area, result_area, chart_area] = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Length(5),
            Constraint::Min(3),
        ])
        .areas(area);

        self.form.render(frame, form_area);

        let principal = self.form.amount(0);
        let contribution = self.form.amount(1);
        let rate = self.form.percent(2);
        let years = self.form.count(3);

        let schedule = compound::growth_schedule(principal, contribution, rate, years);
        let final_balance = *schedule.last().unwrap_or(&principal);
        let contributed = compound::total_contributed(principal, contribution, years);
        let earned = final_balance - contributed;

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("After {years} years  "), Style::default().fg(Color::Gray)),
                Span::styled(
                    money(&self.currency, final_balance),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("You put in       ", Style::default().fg(Color::Gray)),
                Span::raw(money(&self.currency, contributed)),
            ]),
            Line::from(vec![
                Span::styled("Growth earned    ", Style::default().fg(Color::Gray)),
                Span::styled(
                    money(&self.currency, earned),
                    Style::default().fg(Color::Green),
                ),
            ]),
        ];
        let result = Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Projection "),
        );
        frame.render_widget(result, result_area);

        let data = spark_data(&schedule);
        let chart = Sparkline::default()
            .data(&data)
            .style(Style::default().fg(Color::Green))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Balance by year "),
            );
        frame.render_widget(chart, chart_area);
    }
}
