//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar with the status message and session score
//! - `StatisticsView`: Per-exercise progress table
//!
//! ### Stateful Components (Event-Driven)
//!
//! State lives in `TuiState`; a transient wrapper borrows it each frame.
//! - `MenuState` / `Menu`: Exercise, lookup and statistics picker
//! - `QuizState` / `QuizView`: One multiple-choice question
//! - `InputBox`: Single-line text input used by the lookup screen
//! - `QueryView`: Lookup prompt and result
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Top status bar)
//! ├── menu.rs         (Main menu)
//! ├── quiz.rs         (Multiple-choice question)
//! ├── input_box.rs    (Text input)
//! ├── query.rs        (Lookup screen)
//! └── statistics.rs   (Progress table)
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub mod menu;
pub mod query;
pub mod quiz;
pub mod statistics;
pub use input_box::{InputBox, InputEvent};
pub use menu::{Menu, MenuState};
pub use query::QueryView;
pub use quiz::{QuizState, QuizView};
pub use statistics::StatisticsView;

/// Centered sub-rectangle covering the given percentages of `outer`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
