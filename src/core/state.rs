//! # Application State
//!
//! Core business state for the trainer. This module contains domain logic
//! only, no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog          // validated kana table
//! ├── history: HistoryStore     // append-only practice log (owns the file)
//! ├── rng: StdRng               // selection + option shuffling
//! ├── option_count: usize       // choices per question
//! ├── screen: Screen            // menu / drill / lookup / statistics
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The surface-facing operations (`select_next_item`, `record_practice`,
//! `generate_options`, `statistics`) are methods here.

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::catalog::{Catalog, KanaItem};
use crate::core::config::ResolvedConfig;
use crate::core::exercise::{ExerciseType, QueryKind};
use crate::core::history::{HistoryError, HistoryStore};
use crate::core::options;
use crate::core::scoring::{Scorer, Statistics};
use crate::core::selector;

/// Running score for the current drill session (not persisted).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub answered: usize,
    pub correct: usize,
}

/// Outcome of the last answer, shown until the user moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub chosen: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// One multiple-choice question.
#[derive(Debug, Clone)]
pub struct Quiz {
    pub exercise: ExerciseType,
    pub item: KanaItem,
    pub options: Vec<String>,
    pub feedback: Option<Feedback>,
    pub tally: Tally,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Found(String),
    NotFound(String),
}

#[derive(Debug, Clone)]
pub struct QueryScreen {
    pub kind: QueryKind,
    pub result: Option<QueryResult>,
}

#[derive(Debug, Clone)]
pub enum Screen {
    Menu,
    Exercise(Quiz),
    Query(QueryScreen),
    Statistics,
}

pub struct App {
    pub catalog: Catalog,
    pub history: HistoryStore,
    pub rng: StdRng,
    pub option_count: usize,
    pub screen: Screen,
    pub status_message: String,
}

impl App {
    pub fn new(
        catalog: Catalog,
        history: HistoryStore,
        option_count: usize,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Using fixed RNG seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            history,
            rng,
            option_count,
            screen: Screen::Menu,
            status_message: String::from("Welcome! Pick a drill."),
        }
    }

    /// Build the app from resolved config: loads history and opens the start drill, if any.
    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        let history = HistoryStore::load(&config.history_path);
        let mut app = Self::new(catalog, history, config.option_count, config.seed);
        if let Some(exercise) = config.start_exercise {
            let quiz = app.new_quiz(exercise, Tally::default());
            app.screen = Screen::Exercise(quiz);
        }
        app
    }

    /// Scorer over the current history, evaluated now.
    pub fn scorer(&self) -> Scorer<'_> {
        Scorer::new(self.history.records())
    }

    pub fn select_next_item(&mut self, exercise: ExerciseType) -> KanaItem {
        let scorer = Scorer::new(self.history.records());
        selector::select_next_item(&self.catalog, exercise, &scorer, &mut self.rng).clone()
    }

    pub fn record_practice(
        &mut self,
        item: &KanaItem,
        answer: &str,
        is_correct: bool,
        exercise: ExerciseType,
    ) -> Result<(), HistoryError> {
        self.history
            .record_practice(item, answer, is_correct, exercise)
            .map(|_| ())
    }

    pub fn generate_options<S: AsRef<str>>(&mut self, correct: &str, pool: &[S]) -> Vec<String> {
        options::generate_options(correct, pool, self.option_count, &mut self.rng)
    }

    pub fn statistics(&self, exercise: ExerciseType) -> Statistics {
        self.scorer().statistics(exercise)
    }

    /// Draw the next item for `exercise` and build its options.
    pub fn new_quiz(&mut self, exercise: ExerciseType, tally: Tally) -> Quiz {
        let item = self.select_next_item(exercise);
        let pool: Vec<String> = exercise
            .answer_pool(&self.catalog)
            .into_iter()
            .map(str::to_string)
            .collect();
        let options = self.generate_options(exercise.answer(&item), &pool);
        Quiz {
            exercise,
            item,
            options,
            feedback: None,
            tally,
        }
    }
}
