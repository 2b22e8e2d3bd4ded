//! # Actions
//!
//! Everything that can happen in the trainer becomes an `Action`.
//! User picks an option? That's `Action::Answer(option)`.
//! User presses Ctrl+Q? That's `Action::ReturnToMenu`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` for the adapter to carry out.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The one side effect inside `update()` is the history flush on
//! `Answer`: a record is never kept in memory without being on disk, so a
//! failed write comes back as an error instead of an effect.

use log::{debug, info};

use crate::core::exercise::{ExerciseType, QueryKind};
use crate::core::history::HistoryError;
use crate::core::state::{App, Feedback, QueryResult, QueryScreen, Screen, Tally};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenExercise(ExerciseType),
    OpenQuery(QueryKind),
    OpenStatistics,
    /// The option the user picked for the current question.
    Answer(String),
    NextQuestion,
    SubmitQuery(String),
    ReturnToMenu,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Result<Effect, HistoryError> {
    debug!("update: {:?}", action);
    match action {
        Action::OpenExercise(exercise) => {
            let quiz = app.new_quiz(exercise, Tally::default());
            app.status_message = format!("Drill: {}", exercise.label());
            app.screen = Screen::Exercise(quiz);
        }
        Action::OpenQuery(kind) => {
            app.status_message = kind.label().to_string();
            app.screen = Screen::Query(QueryScreen { kind, result: None });
        }
        Action::OpenStatistics => {
            app.status_message = String::from("Statistics");
            app.screen = Screen::Statistics;
        }
        Action::Answer(chosen) => {
            let Screen::Exercise(quiz) = &mut app.screen else {
                return Ok(Effect::None);
            };
            // Each question is recorded once
            if quiz.feedback.is_some() {
                return Ok(Effect::None);
            }

            let correct_answer = quiz.exercise.answer(&quiz.item).to_string();
            let is_correct = chosen == correct_answer;
            app.history
                .record_practice(&quiz.item, &chosen, is_correct, quiz.exercise)?;

            quiz.tally.answered += 1;
            if is_correct {
                quiz.tally.correct += 1;
            }
            app.status_message = if is_correct {
                String::from("Correct!")
            } else {
                format!("Wrong, the answer is {correct_answer}")
            };
            quiz.feedback = Some(Feedback {
                chosen,
                correct_answer,
                is_correct,
            });
        }
        Action::NextQuestion => {
            let Screen::Exercise(quiz) = &app.screen else {
                return Ok(Effect::None);
            };
            if quiz.feedback.is_none() {
                return Ok(Effect::None);
            }
            let (exercise, tally) = (quiz.exercise, quiz.tally);
            let next = app.new_quiz(exercise, tally);
            app.status_message = format!("Drill: {}", exercise.label());
            app.screen = Screen::Exercise(next);
        }
        Action::SubmitQuery(input) => {
            let Screen::Query(query) = &mut app.screen else {
                return Ok(Effect::None);
            };
            let result = match query.kind.lookup(&app.catalog, &input) {
                Some(found) => QueryResult::Found(found),
                None => QueryResult::NotFound(input.trim().to_string()),
            };
            debug!("Lookup {:?} → {:?}", query.kind, result);
            query.result = Some(result);
        }
        Action::ReturnToMenu => {
            app.status_message = String::from("Back at the menu");
            app.screen = Screen::Menu;
        }
        Action::Quit => {
            info!("Quit requested");
            return Ok(Effect::Quit);
        }
    }
    Ok(Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::HistoryStore;
    use crate::test_support::test_app;

    fn current_quiz(app: &App) -> &crate::core::state::Quiz {
        match &app.screen {
            Screen::Exercise(quiz) => quiz,
            other => panic!("expected exercise screen, got {other:?}"),
        }
    }

    #[test]
    fn test_open_exercise_shows_question() {
        let (mut app, _dir) = test_app();
        let effect = update(&mut app, Action::OpenExercise(ExerciseType::ReadingToKana)).unwrap();
        assert_eq!(effect, Effect::None);
        let quiz = current_quiz(&app);
        assert!(quiz.feedback.is_none());
        assert_eq!(quiz.tally, Tally::default());
    }

    #[test]
    fn test_correct_answer_recorded_and_persisted() {
        let (mut app, _dir) = test_app();
        update(&mut app, Action::OpenExercise(ExerciseType::KanaToReading)).unwrap();
        let quiz = current_quiz(&app).clone();

        update(&mut app, Action::Answer(quiz.item.reading.clone())).unwrap();

        let feedback = current_quiz(&app).feedback.clone().unwrap();
        assert!(feedback.is_correct);
        assert_eq!(current_quiz(&app).tally, Tally { answered: 1, correct: 1 });

        let reloaded = HistoryStore::load(app.history.path());
        assert_eq!(reloaded.len(), 1);
        let record = &reloaded.records()[0];
        assert_eq!(record.reading, quiz.item.reading);
        assert_eq!(record.exercise, ExerciseType::KanaToReading);
        assert!(record.is_correct);
    }

    #[test]
    fn test_wrong_answer_shows_correct_one() {
        let (mut app, _dir) = test_app();
        update(&mut app, Action::OpenExercise(ExerciseType::HiraganaToKatakana)).unwrap();
        let expected = current_quiz(&app).item.katakana.clone();

        update(&mut app, Action::Answer("not-a-kana".to_string())).unwrap();

        let feedback = current_quiz(&app).feedback.clone().unwrap();
        assert!(!feedback.is_correct);
        assert_eq!(feedback.correct_answer, expected);
        assert_eq!(feedback.chosen, "not-a-kana");
        assert!(!app.history.records()[0].is_correct);
    }

    #[test]
    fn test_second_answer_to_same_question_ignored() {
        let (mut app, _dir) = test_app();
        update(&mut app, Action::OpenExercise(ExerciseType::KanaToReading)).unwrap();
        update(&mut app, Action::Answer("x".to_string())).unwrap();
        update(&mut app, Action::Answer("y".to_string())).unwrap();
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_next_question_requires_answer_and_keeps_tally() {
        let (mut app, _dir) = test_app();
        update(&mut app, Action::OpenExercise(ExerciseType::KanaToReading)).unwrap();

        // Skipping is not allowed
        update(&mut app, Action::NextQuestion).unwrap();
        assert!(current_quiz(&app).feedback.is_none());

        update(&mut app, Action::Answer("x".to_string())).unwrap();
        update(&mut app, Action::NextQuestion).unwrap();
        let quiz = current_quiz(&app);
        assert!(quiz.feedback.is_none());
        assert_eq!(quiz.tally, Tally { answered: 1, correct: 0 });
    }

    #[test]
    fn test_query_found_and_not_found() {
        let (mut app, _dir) = test_app();
        update(&mut app, Action::OpenQuery(QueryKind::HiraganaToKatakana)).unwrap();

        update(&mut app, Action::SubmitQuery("ね".to_string())).unwrap();
        match &app.screen {
            Screen::Query(q) => {
                assert!(matches!(&q.result, Some(QueryResult::Found(s)) if s.contains("ネ")))
            }
            other => panic!("expected query screen, got {other:?}"),
        }

        update(&mut app, Action::SubmitQuery(" zz ".to_string())).unwrap();
        match &app.screen {
            Screen::Query(q) => assert_eq!(q.result, Some(QueryResult::NotFound("zz".to_string()))),
            other => panic!("expected query screen, got {other:?}"),
        }
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_return_to_menu_and_quit() {
        let (mut app, _dir) = test_app();
        update(&mut app, Action::OpenStatistics).unwrap();
        assert!(matches!(app.screen, Screen::Statistics));
        update(&mut app, Action::ReturnToMenu).unwrap();
        assert!(matches!(app.screen, Screen::Menu));
        assert_eq!(update(&mut app, Action::Quit).unwrap(), Effect::Quit);
    }

    #[test]
    fn test_answer_outside_exercise_is_noop() {
        let (mut app, _dir) = test_app();
        assert_eq!(update(&mut app, Action::Answer("a".to_string())).unwrap(), Effect::None);
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let catalog = crate::core::catalog::Catalog::builtin().unwrap();
        let mut app = App::new(catalog, HistoryStore::load(&path), 4, Some(3));
        update(&mut app, Action::OpenExercise(ExerciseType::KanaToReading)).unwrap();

        // Replace the file with a directory so the next rename fails
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let result = update(&mut app, Action::Answer("a".to_string()));
        assert!(matches!(result, Err(HistoryError::Write { .. })));
        assert!(app.history.is_empty());
        assert!(current_quiz(&app).feedback.is_none());
    }
}
