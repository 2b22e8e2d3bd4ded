//! # Exercise Types
//!
//! The four drill directions and the four read-only lookup directions.
//! Drills are scored and recorded; lookups never touch the history.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::catalog::{Catalog, KanaItem};

/// Which skill direction a drill tests. Stored in every practice record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    KanaToReading,
    ReadingToKana,
    HiraganaToKatakana,
    KatakanaToHiragana,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 4] = [
        ExerciseType::KanaToReading,
        ExerciseType::ReadingToKana,
        ExerciseType::HiraganaToKatakana,
        ExerciseType::KatakanaToHiragana,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExerciseType::KanaToReading => "Kana → reading",
            ExerciseType::ReadingToKana => "Reading → kana",
            ExerciseType::HiraganaToKatakana => "Hiragana → katakana",
            ExerciseType::KatakanaToHiragana => "Katakana → hiragana",
        }
    }

    /// The part of the item shown to the user.
    pub fn cue<'a>(&self, item: &'a KanaItem) -> &'a str {
        match self {
            ExerciseType::KanaToReading | ExerciseType::HiraganaToKatakana => &item.hiragana,
            ExerciseType::ReadingToKana => &item.reading,
            ExerciseType::KatakanaToHiragana => &item.katakana,
        }
    }

    /// The part of the item the user has to pick.
    pub fn answer<'a>(&self, item: &'a KanaItem) -> &'a str {
        match self {
            ExerciseType::KanaToReading => &item.reading,
            ExerciseType::ReadingToKana | ExerciseType::KatakanaToHiragana => &item.hiragana,
            ExerciseType::HiraganaToKatakana => &item.katakana,
        }
    }

    pub fn prompt(&self, item: &KanaItem) -> String {
        let cue = self.cue(item);
        match self {
            ExerciseType::KanaToReading => format!("Which reading matches the kana \"{cue}\"?"),
            ExerciseType::ReadingToKana => format!("Which hiragana is read \"{cue}\"?"),
            ExerciseType::HiraganaToKatakana => {
                format!("Which katakana matches the hiragana \"{cue}\"?")
            }
            ExerciseType::KatakanaToHiragana => {
                format!("Which hiragana matches the katakana \"{cue}\"?")
            }
        }
    }

    /// Every answer value in the catalog, used as the pool for distractors.
    pub fn answer_pool<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        catalog.items().iter().map(|item| self.answer(item)).collect()
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Read-only lookups. Misses are reported as "not found", never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    KanaToReading,
    ReadingToKana,
    HiraganaToKatakana,
    KatakanaToHiragana,
}

impl QueryKind {
    pub const ALL: [QueryKind; 4] = [
        QueryKind::KanaToReading,
        QueryKind::ReadingToKana,
        QueryKind::HiraganaToKatakana,
        QueryKind::KatakanaToHiragana,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QueryKind::KanaToReading => "Look up: kana → reading",
            QueryKind::ReadingToKana => "Look up: reading → kana",
            QueryKind::HiraganaToKatakana => "Look up: hiragana → katakana",
            QueryKind::KatakanaToHiragana => "Look up: katakana → hiragana",
        }
    }

    pub fn input_hint(&self) -> &'static str {
        match self {
            QueryKind::KanaToReading => "Enter a hiragana or katakana",
            QueryKind::ReadingToKana => "Enter a reading, e.g. 'a'",
            QueryKind::HiraganaToKatakana => "Enter a hiragana",
            QueryKind::KatakanaToHiragana => "Enter a katakana",
        }
    }

    /// Looks `input` up and describes the match, or `None` on a miss.
    pub fn lookup(&self, catalog: &Catalog, input: &str) -> Option<String> {
        let input = input.trim();
        match self {
            QueryKind::KanaToReading => catalog
                .find_by_kana(input)
                .map(|item| format!("Kana \"{input}\" is read: {}", item.reading)),
            QueryKind::ReadingToKana => catalog.find_by_reading(input).map(|item| {
                format!(
                    "Reading \"{input}\": hiragana \"{}\", katakana \"{}\"",
                    item.hiragana, item.katakana
                )
            }),
            QueryKind::HiraganaToKatakana => catalog
                .find_by_hiragana(input)
                .map(|item| format!("Hiragana \"{input}\" → katakana {}", item.katakana)),
            QueryKind::KatakanaToHiragana => catalog
                .find_by_katakana(input)
                .map(|item| format!("Katakana \"{input}\" → hiragana {}", item.hiragana)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&ExerciseType::HiraganaToKatakana).unwrap();
        assert_eq!(json, "\"hiragana_to_katakana\"");
        let back: ExerciseType = serde_json::from_str("\"kana_to_reading\"").unwrap();
        assert_eq!(back, ExerciseType::KanaToReading);
    }

    #[test]
    fn test_cue_and_answer_directions() {
        let item = KanaItem::new("ka", "か", "カ");
        assert_eq!(ExerciseType::KanaToReading.cue(&item), "か");
        assert_eq!(ExerciseType::KanaToReading.answer(&item), "ka");
        assert_eq!(ExerciseType::ReadingToKana.cue(&item), "ka");
        assert_eq!(ExerciseType::ReadingToKana.answer(&item), "か");
        assert_eq!(ExerciseType::HiraganaToKatakana.answer(&item), "カ");
        assert_eq!(ExerciseType::KatakanaToHiragana.cue(&item), "カ");
        assert_eq!(ExerciseType::KatakanaToHiragana.answer(&item), "か");
    }

    #[test]
    fn test_answer_pool_covers_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let pool = ExerciseType::HiraganaToKatakana.answer_pool(&catalog);
        assert_eq!(pool.len(), catalog.len());
        assert!(pool.contains(&"ア"));
    }

    #[test]
    fn test_query_lookup_hit_and_miss() {
        let catalog = Catalog::builtin().unwrap();
        let hit = QueryKind::ReadingToKana.lookup(&catalog, "shi").unwrap();
        assert!(hit.contains("し") && hit.contains("シ"));
        assert!(QueryKind::KatakanaToHiragana.lookup(&catalog, "か").is_none());
        assert!(QueryKind::KanaToReading.lookup(&catalog, "").is_none());
    }
}
