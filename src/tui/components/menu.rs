//! # Main Menu Component
//!
//! The landing screen: every drill, every lookup, statistics and quit.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuState` lives in `TuiState`
//! - `Menu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::action::Action;
use crate::core::exercise::{ExerciseType, QueryKind};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Exercise(ExerciseType),
    Query(QueryKind),
    Statistics,
    Quit,
}

impl MenuEntry {
    fn all() -> Vec<MenuEntry> {
        let mut entries: Vec<MenuEntry> = ExerciseType::ALL
            .into_iter()
            .map(MenuEntry::Exercise)
            .collect();
        entries.extend(QueryKind::ALL.into_iter().map(MenuEntry::Query));
        entries.push(MenuEntry::Statistics);
        entries.push(MenuEntry::Quit);
        entries
    }

    fn label(&self) -> &'static str {
        match self {
            MenuEntry::Exercise(exercise) => exercise.label(),
            MenuEntry::Query(kind) => kind.label(),
            MenuEntry::Statistics => "Statistics",
            MenuEntry::Quit => "Quit",
        }
    }

    fn action(&self) -> Action {
        match self {
            MenuEntry::Exercise(exercise) => Action::OpenExercise(*exercise),
            MenuEntry::Query(kind) => Action::OpenQuery(*kind),
            MenuEntry::Statistics => Action::OpenStatistics,
            MenuEntry::Quit => Action::Quit,
        }
    }
}

/// Persistent state for the main menu.
pub struct MenuState {
    pub entries: Vec<MenuEntry>,
    pub selected: usize,
    pub list_state: ListState,
}

impl MenuState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            entries: MenuEntry::all(),
            selected: 0,
            list_state,
        }
    }

    pub fn selected_entry(&self) -> MenuEntry {
        self.entries[self.selected]
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for MenuState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.entries.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(self.selected_entry().action()),
            _ => None,
        }
    }
}

/// Transient render wrapper for the main menu.
pub struct Menu<'a> {
    state: &'a mut MenuState,
}

impl<'a> Menu<'a> {
    pub fn new(state: &'a mut MenuState) -> Self {
        Self { state }
    }
}

impl Component for Menu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 80, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Choose an exercise ")
            .title_alignment(Alignment::Left)
            .title_bottom(
                Line::from(" ↑/↓ Move  Enter Select  Ctrl+Q Menu  Ctrl+C Quit ").centered(),
            )
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    match entry {
                        MenuEntry::Exercise(_) => Style::default().fg(Color::Cyan),
                        MenuEntry::Query(_) => Style::default().fg(Color::Gray),
                        MenuEntry::Statistics => Style::default().fg(Color::Yellow),
                        MenuEntry::Quit => Style::default().fg(Color::DarkGray),
                    }
                };
                ListItem::new(Line::from(Span::styled(entry.label(), style)))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_everything() {
        let menu = MenuState::new();
        assert_eq!(menu.entries.len(), 10);
        assert_eq!(menu.entries[0], MenuEntry::Exercise(ExerciseType::KanaToReading));
        assert_eq!(*menu.entries.last().unwrap(), MenuEntry::Quit);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut menu = MenuState::new();
        assert_eq!(menu.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(menu.selected, 0);
        for _ in 0..20 {
            menu.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(menu.selected, menu.entries.len() - 1);
        assert_eq!(menu.handle_event(&TuiEvent::Submit), Some(Action::Quit));
    }

    #[test]
    fn test_submit_opens_selected_entry() {
        let mut menu = MenuState::new();
        menu.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            menu.handle_event(&TuiEvent::Submit),
            Some(Action::OpenExercise(ExerciseType::ReadingToKana))
        );
        for _ in 0..4 {
            menu.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(
            menu.handle_event(&TuiEvent::Submit),
            Some(Action::OpenQuery(QueryKind::ReadingToKana))
        );
    }
}
