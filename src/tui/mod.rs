//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Global keys are handled before any screen sees them:
//!
//! - **Ctrl+C**: quit from anywhere
//! - **Ctrl+Q / Esc**: back to the menu (Esc on the menu does nothing)
//!
//! Everything else goes to the component of the current screen, which
//! turns it into an `Action` for `update()`.
//!
//! The loop sleeps up to 500ms waiting for input and only redraws after
//! an event, then drains whatever else is pending before the next frame.

mod component;
mod components;
mod event;
mod ui;

use log::{error, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::error::AppError;
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MenuState, QuizState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub menu: MenuState,
    pub quiz: QuizState,
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            menu: MenuState::new(),
            quiz: QuizState::new(),
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Lookup screen edits text
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Translate one terminal event into the action it stands for on the
/// current screen. Component-local effects (cursor moves, typing) return
/// `None`.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::ReturnToMenu | TuiEvent::Escape => {
            return match app.screen {
                Screen::Menu => None,
                _ => Some(Action::ReturnToMenu),
            };
        }
        _ => {}
    }

    match &app.screen {
        Screen::Menu => tui.menu.handle_event(event),
        Screen::Exercise(quiz) => tui.quiz.handle_event(event, quiz),
        Screen::Query(_) => match tui.input_box.handle_event(event)? {
            InputEvent::Submit(text) => Some(Action::SubmitQuery(text)),
            InputEvent::ContentChanged => None,
        },
        Screen::Statistics => None,
    }
}

/// Reset per-screen component state when an action starts something new.
fn reset_components(tui: &mut TuiState, action: &Action) {
    match action {
        Action::OpenExercise(_) | Action::NextQuestion => tui.quiz = QuizState::new(),
        Action::OpenQuery(_) | Action::ReturnToMenu => tui.input_box.clear(),
        _ => {}
    }
}

pub fn run(config: ResolvedConfig) -> Result<(), AppError> {
    let catalog = Catalog::builtin()?;
    let mut app = App::from_config(catalog, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    drop(guard);
    ratatui::restore();

    if let Err(e) = &result {
        error!("Event loop failed: {}", e);
    }
    info!("Exiting with {} records in history", app.history.len());
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> Result<(), AppError> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        let mut next = Some(first_event);
        while let Some(event) = next {
            if let Some(action) = route_event(app, tui, &event) {
                reset_components(tui, &action);
                if update(app, action)? == Effect::Quit {
                    return Ok(());
                }
            }
            next = poll_event_immediate()?;
        }
    }
}
