//! # Query Component
//!
//! Lookup screen: hint, input box and the last result.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::state::{QueryResult, QueryScreen};
use crate::tui::component::Component;
use crate::tui::components::InputBox;

/// Transient render wrapper for the lookup screen.
pub struct QueryView<'a> {
    screen: &'a QueryScreen,
    input: &'a mut InputBox,
}

impl<'a> QueryView<'a> {
    pub fn new(screen: &'a QueryScreen, input: &'a mut InputBox) -> Self {
        Self { screen, input }
    }

    fn result_line(&self) -> Line<'static> {
        match &self.screen.result {
            Some(QueryResult::Found(text)) => Line::from(Span::styled(
                text.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Some(QueryResult::NotFound(input)) => Line::from(Span::styled(
                format!("Not found: {input}"),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(Span::styled(
                "Type and press Enter",
                Style::default().fg(Color::DarkGray),
            )),
        }
    }
}

impl Component for QueryView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [hint_area, input_area, result_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .areas(area);

        frame.render_widget(
            Line::from(Span::styled(
                self.screen.kind.input_hint(),
                Style::default().fg(Color::Gray),
            )),
            hint_area,
        );

        self.input.title = self.screen.kind.label().to_string();
        self.input.render(frame, input_area);

        let result = Paragraph::new(self.result_line()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Result ")
                .title_bottom(Line::from(" Enter Look up  Esc Menu ").centered())
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(result, result_area);
    }
}
