//! # TitleBar Component
//!
//! Top status bar showing the app name, the status message and, during a
//! drill, the running score of the session.
//!
//! ## Conditional Formatting
//!
//! 1. **Drill in progress**: `"Kana Trainer | Correct! | 3/4 correct"`
//! 2. **Status message**: `"Kana Trainer | Back at the menu"`
//! 3. **Default**: `"Kana Trainer"`
//!
//! TitleBar is purely presentational: it receives all data as props and
//! has no internal state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::Tally;
use crate::tui::component::Component;

const APP_TITLE: &str = "Kana Trainer";

/// Top status bar component.
pub struct TitleBar {
    /// Status message (e.g., "Correct!", "Drill: Kana → reading")
    pub status_message: String,
    /// Session score, shown only while drilling
    pub tally: Option<Tally>,
}

impl TitleBar {
    pub fn new(status_message: String, tally: Option<Tally>) -> Self {
        Self {
            status_message,
            tally,
        }
    }

    fn text(&self) -> String {
        let mut text = APP_TITLE.to_string();
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if let Some(tally) = self.tally
            && tally.answered > 0
        {
            text.push_str(&format!(" | {}/{} correct", tally.correct, tally.answered));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
