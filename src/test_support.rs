//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;

use crate::core::catalog::{Catalog, KanaItem};
use crate::core::exercise::ExerciseType;
use crate::core::history::{HistoryStore, PracticeRecord};
use crate::core::state::App;

/// `days` (fractional) before `now`, at millisecond precision.
pub fn days_ago(now: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    now - Duration::milliseconds((days * 86_400_000.0) as i64)
}

/// A record for the built-in item with `reading`. Wrong answers use "?".
pub fn record_at(
    reading: &str,
    exercise: ExerciseType,
    is_correct: bool,
    timestamp: DateTime<Utc>,
) -> PracticeRecord {
    let item = Catalog::builtin()
        .ok()
        .and_then(|c| c.find_by_reading(reading).cloned())
        .unwrap_or_else(|| KanaItem::new(reading, reading, reading));
    let answer = if is_correct { exercise.answer(&item) } else { "?" };
    PracticeRecord::new(&item, exercise, answer, is_correct, timestamp)
}

/// Creates a test App over the built-in catalog with a fresh history file.
///
/// Keep the returned `TempDir` alive for as long as the app is used.
pub fn test_app() -> (App, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let history = HistoryStore::load(dir.path().join("history.json"));
    let catalog = Catalog::builtin().expect("built-in catalog");
    (App::new(catalog, history, 4, Some(42)), dir)
}
