//! # Quiz Component
//!
//! One multiple-choice question: the cue, the options, and after answering,
//! the verdict with the correct option highlighted.
//!
//! Options are picked with ↑/↓ + Enter or with the digit keys. Once the
//! question is answered, Enter moves on to the next one.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::state::Quiz;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent selection state for the current question.
pub struct QuizState {
    pub selected: usize,
    pub list_state: ListState,
}

impl QuizState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    /// Handle a key event against `quiz`, returning the action to dispatch.
    pub fn handle_event(&mut self, event: &TuiEvent, quiz: &Quiz) -> Option<Action> {
        if quiz.feedback.is_some() {
            return match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(Action::NextQuestion),
                _ => None,
            };
        }

        let count = quiz.options.len();
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(count.saturating_sub(1));
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => quiz.options.get(self.selected).cloned().map(Action::Answer),
            TuiEvent::InputChar(c) => {
                let index = c.to_digit(10)?.checked_sub(1)? as usize;
                let option = quiz.options.get(index)?;
                self.selected = index;
                self.list_state.select(Some(index));
                Some(Action::Answer(option.clone()))
            }
            _ => None,
        }
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for a question.
pub struct QuizView<'a> {
    state: &'a mut QuizState,
    quiz: &'a Quiz,
}

impl<'a> QuizView<'a> {
    pub fn new(state: &'a mut QuizState, quiz: &'a Quiz) -> Self {
        Self { state, quiz }
    }

    fn option_style(&self, index: usize, option: &str) -> Style {
        match &self.quiz.feedback {
            Some(feedback) if option == feedback.correct_answer => {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            }
            Some(feedback) if option == feedback.chosen => {
                Style::default().fg(Color::Red).add_modifier(Modifier::CROSSED_OUT)
            }
            Some(_) => Style::default().fg(Color::DarkGray),
            None if index == self.state.selected => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            None => Style::default().fg(Color::Gray),
        }
    }
}

impl Component for QuizView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let option_rows = self.quiz.options.len() as u16 + 2;
        let [cue_area, options_area, verdict_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(option_rows),
            Constraint::Min(3),
        ])
        .areas(area);

        let cue = Paragraph::new(vec![
            Line::from(Span::styled(
                self.quiz.exercise.cue(&self.quiz.item).to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.quiz.exercise.prompt(&self.quiz.item),
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", self.quiz.exercise.label()))
                .padding(Padding::vertical(1)),
        );
        frame.render_widget(cue, cue_area);

        let items: Vec<ListItem> = self
            .quiz
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let style = self.option_style(i, option);
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(option.clone(), style),
                ]))
            })
            .collect();

        let help = if self.quiz.feedback.is_some() {
            " Enter Next  Esc Menu "
        } else {
            " ↑/↓ Move  Enter/1-9 Answer  Esc Menu "
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title_bottom(Line::from(help).centered())
                .padding(Padding::horizontal(1)),
        );
        frame.render_stateful_widget(list, options_area, &mut self.state.list_state);

        if let Some(feedback) = &self.quiz.feedback {
            let verdict = if feedback.is_correct {
                Line::from(Span::styled(
                    format!("✓ Correct! ({})", feedback.correct_answer),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("✗ Wrong! The answer is {}", feedback.correct_answer),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))
            };
            frame.render_widget(
                Paragraph::new(verdict).alignment(Alignment::Center),
                verdict_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::KanaItem;
    use crate::core::exercise::ExerciseType;
    use crate::core::state::{Feedback, Tally};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn quiz() -> Quiz {
        Quiz {
            exercise: ExerciseType::KanaToReading,
            item: KanaItem::new("ka", "か", "カ"),
            options: vec!["sa".into(), "ka".into(), "ta".into(), "na".into()],
            feedback: None,
            tally: Tally::default(),
        }
    }

    #[test]
    fn test_enter_answers_selected_option() {
        let mut state = QuizState::new();
        let quiz = quiz();
        state.handle_event(&TuiEvent::CursorDown, &quiz);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &quiz),
            Some(Action::Answer("ka".to_string()))
        );
    }

    #[test]
    fn test_digit_answers_directly() {
        let mut state = QuizState::new();
        let quiz = quiz();
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('3'), &quiz),
            Some(Action::Answer("ta".to_string()))
        );
        assert_eq!(state.handle_event(&TuiEvent::InputChar('0'), &quiz), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('9'), &quiz), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x'), &quiz), None);
    }

    #[test]
    fn test_selection_clamps_to_options() {
        let mut state = QuizState::new();
        let quiz = quiz();
        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown, &quiz);
        }
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn test_after_feedback_enter_moves_on() {
        let mut state = QuizState::new();
        let mut quiz = quiz();
        quiz.feedback = Some(Feedback {
            chosen: "sa".into(),
            correct_answer: "ka".into(),
            is_correct: false,
        });
        assert_eq!(state.handle_event(&TuiEvent::InputChar('1'), &quiz), None);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &quiz),
            Some(Action::NextQuestion)
        );
    }

    #[test]
    fn test_render_shows_options_and_verdict() {
        let mut state = QuizState::new();
        let mut quiz = quiz();
        quiz.feedback = Some(Feedback {
            chosen: "sa".into(),
            correct_answer: "ka".into(),
            is_correct: false,
        });

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| QuizView::new(&mut state, &quiz).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("1. sa"));
        assert!(text.contains("4. na"));
        assert!(text.contains("Wrong! The answer is ka"));
    }
}
