//! # Scoring Engine
//!
//! Derives per-(item, exercise) signals from the practice history:
//!
//! ```text
//! history ──filter(reading, type)──▶ matches
//!                                     ├─▶ is_frequently_wrong   (selection)
//!                                     ├─▶ needs_review          (selection)
//!                                     └─▶ priority_score        (--stats report)
//! ```
//!
//! Nothing here is stored; every value is recomputed from the history.
//!
//! `needs_review` counts *all* correct answers when picking a review
//! interval, while `priority_score` uses the position of the *first* correct
//! answer. The two heuristics are kept separate on purpose.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::core::exercise::ExerciseType;
use crate::core::history::PracticeRecord;

/// Days to wait before re-testing, indexed by how often an item was answered correctly.
pub const REVIEW_INTERVALS: [u32; 6] = [1, 2, 4, 7, 15, 30];

/// Fewer matching records than this never count as frequently wrong.
pub const MIN_RECORDS_FOR_ERROR_RATE: usize = 5;

/// Size of the recent window used for error rates.
pub const RECENT_WINDOW: usize = 10;

pub const FREQUENTLY_WRONG_THRESHOLD: f64 = 0.4;

/// Score given to items that were never practiced.
pub const NEW_ITEM_SCORE: f64 = 100.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Per-exercise summary shown on the statistics screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_practiced: usize,
    pub frequently_wrong_count: usize,
    pub needs_review_count: usize,
    /// Fraction in `[0, 1]`; 0 when nothing was practiced.
    pub average_accuracy: f64,
}

/// Scores items against a history snapshot at a fixed instant.
pub struct Scorer<'a> {
    records: &'a [PracticeRecord],
    now: DateTime<Utc>,
}

impl<'a> Scorer<'a> {
    pub fn new(records: &'a [PracticeRecord]) -> Self {
        Self::at(records, Utc::now())
    }

    pub fn at(records: &'a [PracticeRecord], now: DateTime<Utc>) -> Self {
        Self { records, now }
    }

    fn matching(&self, reading: &str, exercise: ExerciseType) -> Vec<&'a PracticeRecord> {
        self.records
            .iter()
            .filter(|r| r.is_for(reading, exercise))
            .collect()
    }

    fn days_since(&self, timestamp: DateTime<Utc>) -> f64 {
        (self.now - timestamp).num_milliseconds() as f64 / MILLIS_PER_DAY
    }

    pub fn is_frequently_wrong(&self, reading: &str, exercise: ExerciseType) -> bool {
        let records = self.matching(reading, exercise);
        if records.len() < MIN_RECORDS_FOR_ERROR_RATE {
            return false;
        }
        recent_error_rate(&records) > FREQUENTLY_WRONG_THRESHOLD
    }

    pub fn needs_review(&self, reading: &str, exercise: ExerciseType) -> bool {
        let records = self.matching(reading, exercise);
        let Some(last_correct) = records.iter().rev().find(|r| r.is_correct) else {
            return false;
        };
        let days_since_last_correct = self.days_since(last_correct.timestamp);

        let practice_count = records.iter().filter(|r| r.is_correct).count();
        let index = practice_count
            .saturating_sub(1)
            .min(REVIEW_INTERVALS.len() - 1);
        let interval = match REVIEW_INTERVALS[index] {
            0 => REVIEW_INTERVALS[0],
            days => days,
        };

        days_since_last_correct >= f64::from(interval)
    }

    pub fn priority_score(&self, reading: &str, exercise: ExerciseType) -> f64 {
        let records = self.matching(reading, exercise);
        let Some(latest) = records.last() else {
            return NEW_ITEM_SCORE;
        };

        let error_rate = recent_error_rate(&records);
        let last_practice_days = self.days_since(latest.timestamp);

        let practice_count = records
            .iter()
            .position(|r| r.is_correct)
            .map_or(0, |i| i + 1);
        let last_interval = REVIEW_INTERVALS[REVIEW_INTERVALS.len() - 1];
        let interval_index = practice_count.min(REVIEW_INTERVALS.len() - 1);
        let next_review_day = match REVIEW_INTERVALS[interval_index] {
            0 => last_interval,
            days => days,
        };

        let review_urgency = (last_practice_days - f64::from(next_review_day)).max(0.0) * 20.0;
        error_rate * 40.0 + review_urgency * 60.0
    }

    /// Summary for one exercise type.
    ///
    /// The item counts are per record: every record of `exercise` whose item
    /// is currently frequently wrong (or due) counts once, so an item with six
    /// answers contributes six.
    pub fn statistics(&self, exercise: ExerciseType) -> Statistics {
        let of_type: Vec<&PracticeRecord> = self
            .records
            .iter()
            .filter(|r| r.exercise == exercise)
            .collect();

        let correct = of_type.iter().filter(|r| r.is_correct).count();
        let average_accuracy = if of_type.is_empty() {
            0.0
        } else {
            correct as f64 / of_type.len() as f64
        };

        Statistics {
            total_practiced: of_type.len(),
            frequently_wrong_count: of_type
                .iter()
                .filter(|r| self.is_frequently_wrong(&r.reading, exercise))
                .count(),
            needs_review_count: of_type
                .iter()
                .filter(|r| self.needs_review(&r.reading, exercise))
                .count(),
            average_accuracy,
        }
    }

    /// The `limit` practiced readings with the highest priority, highest first.
    pub fn most_urgent(&self, exercise: ExerciseType, limit: usize) -> Vec<(String, f64)> {
        let readings: BTreeSet<&str> = self
            .records
            .iter()
            .filter(|r| r.exercise == exercise)
            .map(|r| r.reading.as_str())
            .collect();

        let mut scored: Vec<(String, f64)> = readings
            .into_iter()
            .map(|reading| (reading.to_string(), self.priority_score(reading, exercise)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(limit);
        scored
    }
}

/// Error rate over the most recent `RECENT_WINDOW` records. `records` must be non-empty.
fn recent_error_rate(records: &[&PracticeRecord]) -> f64 {
    let start = records.len().saturating_sub(RECENT_WINDOW);
    let recent = &records[start..];
    let wrong = recent.iter().filter(|r| !r.is_correct).count();
    wrong as f64 / recent.len() as f64
}
