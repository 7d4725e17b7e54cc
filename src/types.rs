// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for slangdex
//!
//! A dictionary entry is one slang code resolved into a single display
//! language. The code, id and category come from the master table and are
//! language-neutral; only `meaning` changes between variants.

use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a master dictionary definition.
pub type EntryId = u32;

/// Severity classification, fixed when the entry is authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dangerous,
    /// Grooming-related codes.
    Predator,
    Harmless,
}

impl Category {
    /// Display order used by the library view.
    pub fn all() -> &'static [Category] {
        &[Category::Dangerous, Category::Predator, Category::Harmless]
    }

    /// Translation key for the category label.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Dangerous => "dangerous",
            Category::Predator => "predator",
            Category::Harmless => "harmless",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Identity of an entry across the flattened multi-language collection.
///
/// Within a single-language snapshot `id` alone is unique; once the es, en
/// and ka variants are merged the language is needed to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryKey {
    pub id: EntryId,
    pub language: Lang,
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.id, self.language)
    }
}

/// A slang code with its meaning resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub id: EntryId,
    pub code: String,
    pub category: Category,
    pub meaning: String,
    pub language: Lang,
}

impl DictionaryEntry {
    pub fn key(&self) -> EntryKey {
        EntryKey {
            id: self.id,
            language: self.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_as_its_translation_key() {
        for category in Category::all() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn entry_key_distinguishes_language_variants() {
        let es = DictionaryEntry {
            id: 7,
            code: "143".to_string(),
            category: Category::Harmless,
            meaning: "Te quiero".to_string(),
            language: Lang::Es,
        };
        let mut en = es.clone();
        en.language = Lang::En;
        en.meaning = "I Love You".to_string();

        assert_ne!(es.key(), en.key());
        assert_eq!(es.key().id, en.key().id);
        assert_eq!(en.key().to_string(), "7-en");
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Predator).unwrap();
        assert_eq!(json, "\"predator\"");
    }
}
