//! Income shield: the monthly gap disability cover would need to fill, and
//! how much of it an insurer would actually write.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph};

use crate::core::config::ResolvedConfig;
use crate::domain::cover;
use crate::tui::component::{Component, EventHandler, Module};
use crate::tui::components::{Field, Form};
use crate::tui::event::TuiEvent;
use crate::tui::modules::money;

pub struct IncomeShield {
    form: Form,
    currency: String,
}

impl IncomeShield {
    pub fn new(config: &ResolvedConfig) -> Self {
        let form = Form::new(
            &config.currency_symbol,
            vec![
                Field::amount("Monthly take-home", 4000.0).step(100.0),
                Field::amount("Essential outgoings", 2800.0).step(100.0),
                Field::amount("Existing monthly cover", 0.0).step(100.0),
            ],
        );
        Self {
            form,
            currency: config.currency_symbol.clone(),
        }
    }
}

impl Module for IncomeShield {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        self.form.handle_event(event).is_some()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [form_area, result_area, gauge_area] = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .areas(area);

        self.form.render(frame, form_area);

        let take_home = self.form.amount(0);
        let outgoings = self.form.amount(1);
        let gap = cover::income_gap(take_home, outgoings, self.form.amount(2));

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Monthly gap         ", Style::default().fg(Color::Gray)),
                Span::styled(
                    money(&self.currency, gap.gap),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Suggested benefit   ", Style::default().fg(Color::Gray)),
                Span::styled(
                    money(&self.currency, gap.suggested_benefit),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(
                        "  (insurers cap near {})",
                        money(&self.currency, gap.insurable_cap)
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ];
        if gap.shortfall {
            lines.push(Line::from(Span::styled(
                "Even maximum cover leaves outgoings unfunded — trim essentials or add savings.",
                Style::default().fg(Color::Red),
            )));
        }

        let result = Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Cover gap "),
        );
        frame.render_widget(result, result_area);

        let covered_ratio = if outgoings > 0.0 {
            ((gap.suggested_benefit + self.form.amount(2)) / outgoings).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let gauge = Gauge::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Outgoings covered "),
            )
            .gauge_style(Style::default().fg(if gap.shortfall {
                Color::Red
            } else {
                Color::Green
            }))
            .ratio(covered_ratio);
        frame.render_widget(gauge, gauge_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_shows_gap_and_suggestion() {
        let backend = TestBackend::new(90, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut module = IncomeShield::new(&ResolvedConfig::default());
        terminal.draw(|f| module.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        // 2800 gap, 65% of 4000 = 2600 cap → shortfall
        assert!(text.contains("Monthly gap"));
        assert!(text.contains("$2,800"));
        assert!(text.contains("$2,600"));
        assert!(text.contains("leaves outgoings unfunded"));
    }
}
