//! Loan cost explorer: monthly payment, total interest, and a scrollable
//! month-by-month amortization schedule.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::config::ResolvedConfig;
use crate::domain::loan;
use crate::tui::component::{Component, EventHandler, Module};
use crate::tui::components::{Field, Form};
use crate::tui::event::TuiEvent;
use crate::tui::modules::money;

pub struct LoanCost {
    form: Form,
    currency: String,
    scroll_state: ScrollViewState,
}

impl LoanCost {
    pub fn new(config: &ResolvedConfig) -> Self {
        let form = Form::new(
            &config.currency_symbol,
            vec![
                Field::amount("Loan amount", 250_000.0).step(5000.0),
                Field::percent("Interest rate", 5.5).range(0.0, 25.0),
                Field::count("Term (years)", 25).range(1.0, 40.0),
            ],
        );
        Self {
            form,
            currency: config.currency_symbol.clone(),
            scroll_state: ScrollViewState::new(),
        }
    }
}

impl Module for LoanCost {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                true
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                true
            }
            _ => {
                // A changed input restarts the schedule from the top
                if self.form.handle_event(event).is_some() {
                    self.scroll_state.scroll_to_top();
                    true
                } else {
                    false
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [form_area, result_area, schedule_area] = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .areas(area);

        self.form.render(frame, form_area);

        let summary = loan::amortize(
            self.form.amount(0),
            self.form.percent(1),
            self.form.count(2),
        );

        let result = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Monthly payment  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    money(&self.currency, summary.monthly_payment),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Total interest   ", Style::default().fg(Color::Gray)),
                Span::styled(
                    money(&self.currency, summary.total_interest),
                    Style::default().fg(Color::Red),
                ),
                Span::styled("   Total paid  ", Style::default().fg(Color::Gray)),
                Span::raw(money(&self.currency, summary.total_paid)),
            ]),
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Cost "),
        );
        frame.render_widget(result, result_area);

        // Month-by-month schedule inside a scroll view (PgUp/PgDn)
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Schedule (PgUp/PgDn) ");
        let inner = block.inner(schedule_area);
        frame.render_widget(block, schedule_area);

        let content_width = inner.width.saturating_sub(1);
        let rows = summary.schedule.len() as u16;
        let mut scroll_view = ScrollView::new(Size::new(content_width, rows.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, row) in summary.schedule.iter().enumerate() {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:>5}  ", format!("#{}", row.month)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("interest {:>12}  ", money(&self.currency, row.interest)),
                    Style::default().fg(Color::Red),
                ),
                Span::styled(
                    format!("principal {:>12}  ", money(&self.currency, row.principal)),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(format!("left {:>14}", money(&self.currency, row.balance))),
            ]);
            scroll_view.render_widget(
                Paragraph::new(line),
                Rect::new(0, i as u16, content_width, 1),
            );
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.scroll_state);
    }
}
