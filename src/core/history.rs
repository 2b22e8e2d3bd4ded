//! # Practice History
//!
//! Append-only log of every answered question, persisted as a single
//! pretty-printed JSON array (default `~/.kana/kana-practice-history.json`).
//!
//! The whole file is rewritten after every append, via `.tmp` + `rename()`,
//! so the file on disk always equals the in-memory history.
//!
//! A missing or unparsable file never fails startup: the history starts
//! empty and the empty state is written back immediately. Unparsable files
//! are moved to `<file>.corrupt` first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SubsecRound, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::catalog::KanaItem;
use crate::core::exercise::ExerciseType;

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeRecord {
    pub reading: String,
    pub hiragana: String,
    pub katakana: String,
    #[serde(rename = "type")]
    pub exercise: ExerciseType,
    pub answer: String,
    pub is_correct: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl PracticeRecord {
    pub fn new(
        item: &KanaItem,
        exercise: ExerciseType,
        answer: &str,
        is_correct: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            reading: item.reading.clone(),
            hiragana: item.hiragana.clone(),
            katakana: item.katakana.clone(),
            exercise,
            answer: answer.to_string(),
            is_correct,
            timestamp,
        }
    }

    /// Whether this record is an answer for `reading` in `exercise`.
    pub fn is_for(&self, reading: &str, exercise: ExerciseType) -> bool {
        self.reading == reading && self.exercise == exercise
    }
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to serialize practice history: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write practice history to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Owns the practice history and its backing file.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<PracticeRecord>,
}

impl HistoryStore {
    /// Load history from `path`. Never fails; see module docs for recovery.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match read_records(&path) {
            Ok(records) => {
                info!("Loaded {} practice records from {}", records.len(), path.display());
                return Self { path, records };
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No practice history at {}, starting fresh", path.display());
                Vec::new()
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("Practice history at {} is unreadable: {}", path.display(), e);
                quarantine(&path);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read practice history {}: {}", path.display(), e);
                Vec::new()
            }
        };

        let store = Self { path, records };
        if let Err(e) = store.flush() {
            warn!("Failed to recreate practice history: {}", e);
        }
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[PracticeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one record and flush the full snapshot to disk.
    ///
    /// If the write fails the record is dropped from memory as well.
    pub fn append(&mut self, record: PracticeRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        if let Err(e) = self.flush() {
            self.records.pop();
            return Err(e);
        }
        debug!("Practice history flushed ({} records)", self.records.len());
        Ok(())
    }

    /// Build a record for `item` stamped with the current time and append it.
    pub fn record_practice(
        &mut self,
        item: &KanaItem,
        answer: &str,
        is_correct: bool,
        exercise: ExerciseType,
    ) -> Result<&PracticeRecord, HistoryError> {
        // On-disk timestamps are epoch millis; truncate so a reload compares equal.
        let now = Utc::now().trunc_subsecs(3);
        self.append(PracticeRecord::new(item, exercise, answer, is_correct, now))?;
        debug!(
            "Recorded {:?} answer for '{}': {} ({})",
            exercise,
            item.reading,
            answer,
            if is_correct { "correct" } else { "wrong" }
        );
        Ok(&self.records[self.records.len() - 1])
    }

    fn flush(&self) -> Result<(), HistoryError> {
        atomic_write_json(&self.path, &self.records)
    }
}

fn read_records(path: &Path) -> io::Result<Vec<PracticeRecord>> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// `path` with `suffix` appended to the full file name (`h.json` → `h.json.tmp`).
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Move an unparsable history file out of the way before it is overwritten.
fn quarantine(path: &Path) {
    let target = sibling(path, ".corrupt");
    match fs::rename(path, &target) {
        Ok(()) => warn!("Moved unreadable history to {}", target.display()),
        Err(e) => warn!("Failed to move unreadable history aside: {}", e),
    }
}

/// Atomically write `data` as pretty JSON to `path` (via `<path>.tmp` + rename).
///
/// The temporary file is removed if the rename fails.
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), HistoryError> {
    let json = serde_json::to_string_pretty(data)?;
    let write_err = |source| HistoryError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp_path = sibling(path, ".tmp");
    fs::write(&tmp_path, json).map_err(write_err)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        if let Err(cleanup) = fs::remove_file(&tmp_path) {
            warn!("Failed to remove {}: {}", tmp_path.display(), cleanup);
        }
        return Err(write_err(e));
    }
    Ok(())
}
