//! ESG portfolio explorer: shift weights across a demo holding set and
//! watch the pillar scores move.
//!
//! List-driven rather than form-driven: Up/Down select a holding,
//! Left/Right shift its weight.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Gauge, List, ListItem, ListState, Paragraph};

use crate::core::config::ResolvedConfig;
use crate::domain::esg::{self, Holding};
use crate::tui::component::Module;
use crate::tui::event::TuiEvent;

/// Weight change per Left/Right press, in percentage points.
const WEIGHT_STEP: f64 = 2.5;

pub struct EsgPortfolio {
    holdings: Vec<Holding>,
    selected: usize,
    list_state: ListState,
}

impl EsgPortfolio {
    pub fn new(_config: &ResolvedConfig) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            holdings: esg::demo_portfolio(),
            selected: 0,
            list_state,
        }
    }
}

impl Module for EsgPortfolio {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                true
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.holdings.len() - 1);
                self.list_state.select(Some(self.selected));
                true
            }
            TuiEvent::CursorLeft => {
                let holding = &mut self.holdings[self.selected];
                holding.weight_pct = (holding.weight_pct - WEIGHT_STEP).max(0.0);
                true
            }
            TuiEvent::CursorRight => {
                let holding = &mut self.holdings[self.selected];
                holding.weight_pct = (holding.weight_pct + WEIGHT_STEP).min(100.0);
                true
            }
            _ => false,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, summary_area] = Layout::horizontal([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .areas(area);

        let items: Vec<ListItem> = self
            .holdings
            .iter()
            .enumerate()
            .map(|(i, holding)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let line = Line::from(vec![
                    Span::styled(format!("{:<24}", holding.name), style),
                    Span::styled(format!("{:<12}", holding.sector), style),
                    Span::styled(format!("{:>5.1}%", holding.weight_pct), style),
                ]);
                ListItem::new(line)
            })
            .collect();
        let list = List::new(items).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Holdings (←→ shift weight) "),
        );
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        let summary = esg::portfolio_score(&self.holdings);
        let [rating_area, e_area, s_area, g_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(summary_area);

        let rating_color = match summary.rating {
            esg::Rating::Leader => Color::Green,
            esg::Rating::Average => Color::Yellow,
            esg::Rating::Laggard => Color::Red,
        };
        let rating = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Composite  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{:.1} / 10", summary.composite),
                    Style::default()
                        .fg(rating_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Rating     ", Style::default().fg(Color::Gray)),
                Span::styled(summary.rating.label(), Style::default().fg(rating_color)),
            ]),
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Portfolio "),
        );
        frame.render_widget(rating, rating_area);

        let pillar = |title: &'static str, score: f64| {
            Gauge::default()
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(format!(" {title} ")),
                )
                .gauge_style(Style::default().fg(Color::Green))
                .ratio((score / 10.0).clamp(0.0, 1.0))
                .label(format!("{score:.1}"))
        };
        frame.render_widget(pillar("Environmental", summary.environmental), e_area);
        frame.render_widget(pillar("Social", summary.social), s_area);
        frame.render_widget(pillar("Governance", summary.governance), g_area);
    }
}
