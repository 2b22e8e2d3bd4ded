use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Screens are split into a persistent state (`MenuState`, `QuizState`)
/// kept in `TuiState`, and a short-lived view that borrows that state plus
/// the core data it shows. The view implements this trait.
///
/// `render` takes `&mut self` because ratatui's stateful widgets update
/// their `ListState` while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns terminal events into higher-level events.
pub trait EventHandler {
    /// What the component emits, e.g. an `Action` or an `InputEvent`.
    type Event;

    /// Returns `None` when the event only changed local state (or nothing).
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
