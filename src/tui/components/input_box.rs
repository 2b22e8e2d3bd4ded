//! # InputBox Component
//!
//! Single-line text input for the lookup screen.
//!
//! ## Responsibilities
//!
//! - Capture typed characters and pasted text (IME-composed kana arrive as
//!   either, depending on the terminal)
//! - Handle backspace on character boundaries
//! - Emit the trimmed buffer on Enter and clear itself
//!
//! The cursor always sits at the end of the buffer; its column is computed
//! from display width so wide kana place it correctly.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed
    ContentChanged,
}

/// Text input component.
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Border title (Prop)
    pub title: String,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            title: "Input".to_string(),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(self.title.as_str());

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        // Inside the left border, after the text, clamped to the right border.
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + 1).saturating_add(self.buffer.width() as u16).min(max_x);
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single line: drop anything after the first line break
                let line = text.lines().next().unwrap_or_default();
                self.buffer.push_str(line);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => self.buffer.pop().map(|_| InputEvent::ContentChanged),
            TuiEvent::Submit => {
                let text = self.buffer.trim().to_string();
                if text.is_empty() {
                    return None;
                }
                self.buffer.clear();
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}
