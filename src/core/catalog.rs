//! # Kana Catalog
//!
//! The static table of kana the trainer drills: every basic kana (gojūon)
//! plus the voiced (dakuten) and half-voiced (handakuten) rows.
//!
//! Readings are modified Hepburn, except ぢ/ヂ and づ/ヅ which use `di` and
//! `du`. The reading is an item's identity, so it has to be unique.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One kana with its romanized reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanaItem {
    pub reading: String,
    pub hiragana: String,
    pub katakana: String,
}

impl KanaItem {
    pub fn new(reading: &str, hiragana: &str, katakana: &str) -> Self {
        Self {
            reading: reading.to_string(),
            hiragana: hiragana.to_string(),
            katakana: katakana.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("kana catalog is empty")]
    Empty,
    #[error("duplicate reading in kana catalog: {0}")]
    DuplicateReading(String),
}

/// (reading, hiragana, katakana)
#[rustfmt::skip]
const BUILTIN: &[(&str, &str, &str)] = &[
    ("a", "あ", "ア"), ("i", "い", "イ"), ("u", "う", "ウ"), ("e", "え", "エ"), ("o", "お", "オ"),
    ("ka", "か", "カ"), ("ki", "き", "キ"), ("ku", "く", "ク"), ("ke", "け", "ケ"), ("ko", "こ", "コ"),
    ("sa", "さ", "サ"), ("shi", "し", "シ"), ("su", "す", "ス"), ("se", "せ", "セ"), ("so", "そ", "ソ"),
    ("ta", "た", "タ"), ("chi", "ち", "チ"), ("tsu", "つ", "ツ"), ("te", "て", "テ"), ("to", "と", "ト"),
    ("na", "な", "ナ"), ("ni", "に", "ニ"), ("nu", "ぬ", "ヌ"), ("ne", "ね", "ネ"), ("no", "の", "ノ"),
    ("ha", "は", "ハ"), ("hi", "ひ", "ヒ"), ("fu", "ふ", "フ"), ("he", "へ", "ヘ"), ("ho", "ほ", "ホ"),
    ("ma", "ま", "マ"), ("mi", "み", "ミ"), ("mu", "む", "ム"), ("me", "め", "メ"), ("mo", "も", "モ"),
    ("ya", "や", "ヤ"), ("yu", "ゆ", "ユ"), ("yo", "よ", "ヨ"),
    ("ra", "ら", "ラ"), ("ri", "り", "リ"), ("ru", "る", "ル"), ("re", "れ", "レ"), ("ro", "ろ", "ロ"),
    ("wa", "わ", "ワ"), ("wo", "を", "ヲ"),
    ("n", "ん", "ン"),
    ("ga", "が", "ガ"), ("gi", "ぎ", "ギ"), ("gu", "ぐ", "グ"), ("ge", "げ", "ゲ"), ("go", "ご", "ゴ"),
    ("za", "ざ", "ザ"), ("ji", "じ", "ジ"), ("zu", "ず", "ズ"), ("ze", "ぜ", "ゼ"), ("zo", "ぞ", "ゾ"),
    ("da", "だ", "ダ"), ("di", "ぢ", "ヂ"), ("du", "づ", "ヅ"), ("de", "で", "デ"), ("do", "ど", "ド"),
    ("ba", "ば", "バ"), ("bi", "び", "ビ"), ("bu", "ぶ", "ブ"), ("be", "べ", "ベ"), ("bo", "ぼ", "ボ"),
    ("pa", "ぱ", "パ"), ("pi", "ぴ", "ピ"), ("pu", "ぷ", "プ"), ("pe", "ぺ", "ペ"), ("po", "ぽ", "ポ"),
];

/// A validated, non-empty catalog with unique readings.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<KanaItem>,
}

impl Catalog {
    /// Validates `items`: must be non-empty and readings must be unique.
    pub fn new(items: Vec<KanaItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.reading.as_str()) {
                return Err(CatalogError::DuplicateReading(item.reading.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(
            BUILTIN
                .iter()
                .map(|(reading, hiragana, katakana)| KanaItem::new(reading, hiragana, katakana))
                .collect(),
        )
    }

    pub fn items(&self) -> &[KanaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a constructed catalog; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first item. Always present since construction rejects empty input.
    pub fn first(&self) -> &KanaItem {
        &self.items[0]
    }

    pub fn contains(&self, item: &KanaItem) -> bool {
        self.items.iter().any(|i| i.reading == item.reading)
    }

    pub fn find_by_reading(&self, reading: &str) -> Option<&KanaItem> {
        let reading = reading.trim();
        self.items
            .iter()
            .find(|item| item.reading.eq_ignore_ascii_case(reading))
    }

    pub fn find_by_hiragana(&self, hiragana: &str) -> Option<&KanaItem> {
        let hiragana = hiragana.trim();
        self.items.iter().find(|item| item.hiragana == hiragana)
    }

    pub fn find_by_katakana(&self, katakana: &str) -> Option<&KanaItem> {
        let katakana = katakana.trim();
        self.items.iter().find(|item| item.katakana == katakana)
    }

    /// Matches either script.
    pub fn find_by_kana(&self, kana: &str) -> Option<&KanaItem> {
        let kana = kana.trim();
        self.items
            .iter()
            .find(|item| item.hiragana == kana || item.katakana == kana)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 71);
        assert_eq!(catalog.first().reading, "a");
    }

    #[test]
    fn test_builtin_kana_are_unique_per_script() {
        let catalog = Catalog::builtin().unwrap();
        let hiragana: HashSet<_> = catalog.items().iter().map(|i| &i.hiragana).collect();
        let katakana: HashSet<_> = catalog.items().iter().map(|i| &i.katakana).collect();
        assert_eq!(hiragana.len(), catalog.len());
        assert_eq!(katakana.len(), catalog.len());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(vec![]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_duplicate_reading_rejected() {
        let items = vec![KanaItem::new("ji", "じ", "ジ"), KanaItem::new("ji", "ぢ", "ヂ")];
        assert_eq!(
            Catalog::new(items).unwrap_err(),
            CatalogError::DuplicateReading("ji".to_string())
        );
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.find_by_reading(" KA ").unwrap().hiragana, "か");
        assert_eq!(catalog.find_by_hiragana("し").unwrap().katakana, "シ");
        assert_eq!(catalog.find_by_katakana("ン").unwrap().reading, "n");
        assert_eq!(catalog.find_by_kana("ツ").unwrap().reading, "tsu");
        assert_eq!(catalog.find_by_kana("つ").unwrap().reading, "tsu");
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.find_by_reading("xyz").is_none());
        assert!(catalog.find_by_kana("漢").is_none());
        assert!(catalog.find_by_hiragana("ア").is_none());
    }
}
