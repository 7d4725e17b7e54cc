// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dictionary store
//!
//! One master list of language-neutral definitions `(id, code, category,
//! meaning key)` joined with the [`Localizer`] at read time. Keeping a single
//! source of truth means an entry's id and category cannot drift between
//! its language variants. The store is read-only once built.

mod data;

use crate::i18n::{Lang, Localizer, NotReady};
use crate::types::{Category, DictionaryEntry, EntryId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A language-neutral master definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub id: EntryId,
    pub code: String,
    pub meaning_key: String,
    pub category: Category,
}

impl Definition {
    pub fn new(id: EntryId, code: &str, meaning_key: &str, category: Category) -> Self {
        Self {
            id,
            code: code.to_string(),
            meaning_key: meaning_key.to_string(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("duplicate entry id {0}")]
    DuplicateId(EntryId),
    #[error("duplicate code {code:?} (ids {first} and {second})")]
    DuplicateCode {
        code: String,
        first: EntryId,
        second: EntryId,
    },
    #[error("entry {0} has an empty code")]
    EmptyCode(EntryId),
    #[error("entry {0} has an empty meaning key")]
    EmptyMeaningKey(EntryId),
}

/// One category block of the library view.
#[derive(Debug, Clone, Serialize)]
pub struct LibrarySection {
    pub category: Category,
    pub label: String,
    pub entries: Vec<DictionaryEntry>,
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    definitions: Vec<Definition>,
    localizer: Localizer,
}

impl Dictionary {
    /// Build a dictionary after checking that ids and codes are unique.
    pub fn new(
        definitions: Vec<Definition>,
        localizer: Localizer,
    ) -> Result<Self, DictionaryError> {
        validate(&definitions)?;
        Ok(Self {
            definitions,
            localizer,
        })
    }

    /// The dictionary compiled into the binary.
    pub fn builtin(localizer: Localizer) -> Self {
        let definitions = builtin_definitions();
        debug_assert!(validate(&definitions).is_ok());
        Self {
            definitions,
            localizer,
        }
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Every entry resolved into `lang`, in master order.
    pub fn entries(&self, lang: Lang) -> Result<Vec<DictionaryEntry>, NotReady> {
        self.definitions
            .iter()
            .map(|definition| self.resolve(definition, lang))
            .collect()
    }

    /// The flattened collection: all es variants, then en, then ka.
    pub fn all_variants(&self) -> Result<Vec<DictionaryEntry>, NotReady> {
        let mut entries = Vec::with_capacity(self.definitions.len() * Lang::all().len());
        for lang in Lang::all() {
            entries.extend(self.entries(*lang)?);
        }
        Ok(entries)
    }

    pub fn get(&self, id: EntryId, lang: Lang) -> Result<Option<DictionaryEntry>, NotReady> {
        self.definitions
            .iter()
            .find(|definition| definition.id == id)
            .map(|definition| self.resolve(definition, lang))
            .transpose()
    }

    /// Exact code lookup, ignoring case.
    pub fn find_code(&self, code: &str, lang: Lang) -> Result<Option<DictionaryEntry>, NotReady> {
        let needle = code.trim().to_lowercase();
        self.definitions
            .iter()
            .find(|definition| definition.code.to_lowercase() == needle)
            .map(|definition| self.resolve(definition, lang))
            .transpose()
    }

    /// Display label for a category in `lang`.
    pub fn category_label(&self, category: Category, lang: Lang) -> Result<String, NotReady> {
        self.localizer.translate(category.key(), lang)
    }

    /// Entries grouped by category (Dangerous, Predator, Harmless) and
    /// sorted by code within each group. Empty groups are left out.
    pub fn library(&self, lang: Lang) -> Result<Vec<LibrarySection>, NotReady> {
        let entries = self.entries(lang)?;
        let mut sections = Vec::new();
        for category in Category::all() {
            let mut grouped: Vec<DictionaryEntry> = entries
                .iter()
                .filter(|entry| entry.category == *category)
                .cloned()
                .collect();
            if grouped.is_empty() {
                continue;
            }
            grouped.sort_by(|a, b| {
                a.code
                    .to_lowercase()
                    .cmp(&b.code.to_lowercase())
                    .then_with(|| a.code.cmp(&b.code))
            });
            sections.push(LibrarySection {
                category: *category,
                label: self.category_label(*category, lang)?,
                entries: grouped,
            });
        }
        Ok(sections)
    }

    fn resolve(&self, definition: &Definition, lang: Lang) -> Result<DictionaryEntry, NotReady> {
        Ok(DictionaryEntry {
            id: definition.id,
            code: definition.code.clone(),
            category: definition.category,
            meaning: self.localizer.translate(&definition.meaning_key, lang)?,
            language: lang,
        })
    }
}

pub fn builtin_definitions() -> Vec<Definition> {
    data::MASTER
        .iter()
        .map(|(id, code, meaning_key, category)| Definition::new(*id, code, meaning_key, *category))
        .collect()
}

/// Check the invariants a snapshot must hold before it can be served.
pub fn validate(definitions: &[Definition]) -> Result<(), DictionaryError> {
    let mut ids = HashSet::new();
    let mut codes: Vec<(String, EntryId)> = Vec::new();
    for definition in definitions {
        if !ids.insert(definition.id) {
            return Err(DictionaryError::DuplicateId(definition.id));
        }
        if definition.code.trim().is_empty() {
            return Err(DictionaryError::EmptyCode(definition.id));
        }
        if definition.meaning_key.trim().is_empty() {
            return Err(DictionaryError::EmptyMeaningKey(definition.id));
        }
        let folded = definition.code.to_lowercase();
        if let Some((_, first)) = codes.iter().find(|(code, _)| *code == folded) {
            return Err(DictionaryError::DuplicateCode {
                code: definition.code.clone(),
                first: *first,
                second: definition.id,
            });
        }
        codes.push((folded, definition.id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn builtin() -> Dictionary {
        Dictionary::builtin(Localizer::builtin())
    }

    #[test]
    fn builtin_snapshot_is_valid() {
        assert!(validate(&builtin_definitions()).is_ok());
    }

    #[test]
    fn ids_unique_within_each_language_snapshot() {
        let dictionary = builtin();
        for lang in Lang::all() {
            let entries = dictionary.entries(*lang).unwrap();
            let ids: HashSet<_> = entries.iter().map(|entry| entry.id).collect();
            assert_eq!(ids.len(), entries.len());
        }
    }

    #[test]
    fn keys_unique_across_flattened_collection() {
        let entries = builtin().all_variants().unwrap();
        let keys: HashSet<_> = entries.iter().map(|entry| entry.key()).collect();
        assert_eq!(keys.len(), entries.len());
        assert_eq!(entries.len(), builtin_definitions().len() * 3);
    }

    #[test]
    fn category_identical_across_languages() {
        let entries = builtin().all_variants().unwrap();
        let mut seen: HashMap<EntryId, Category> = HashMap::new();
        for entry in &entries {
            let category = seen.entry(entry.id).or_insert(entry.category);
            assert_eq!(*category, entry.category, "category drift for id {}", entry.id);
        }
    }

    #[test]
    fn every_builtin_meaning_is_translated() {
        let dictionary = builtin();
        for lang in Lang::all() {
            let entries = dictionary.entries(*lang).unwrap();
            for (entry, definition) in entries.iter().zip(dictionary.definitions()) {
                assert!(!entry.meaning.is_empty());
                assert_ne!(
                    entry.meaning, definition.meaning_key,
                    "untranslated meaning for {} in {}",
                    entry.code, lang
                );
            }
        }
    }

    #[test]
    fn builtin_ids_and_categories_are_stable() {
        let dictionary = builtin();
        assert_eq!(dictionary.len(), 264);
        let pinned = [
            ("53X", 1, Category::Dangerous),
            ("MOS", 4, Category::Dangerous),
            ("CD9", 7, Category::Dangerous),
            ("LMIRL", 8, Category::Dangerous),
            ("11:11", 12, Category::Dangerous),
            ("🍄", 26, Category::Dangerous),
            ("Cheese pizza", 28, Category::Predator),
            ("Blue / Orange Youtube", 31, Category::Predator),
            ("🦋", 34, Category::Predator),
            ("KYS", 49, Category::Dangerous),
            ("ASL", 64, Category::Harmless),
            ("Rizz", 204, Category::Harmless),
            ("Upper decky", 247, Category::Dangerous),
            ("6-7", 264, Category::Harmless),
        ];
        for (code, id, category) in pinned {
            let entry = dictionary.find_code(code, Lang::En).unwrap().unwrap();
            assert_eq!((entry.id, entry.category), (id, category), "{}", code);
        }
    }

    #[test]
    fn meaning_keys_follow_the_id() {
        for definition in builtin_definitions() {
            assert_eq!(definition.meaning_key, format!("code_{}_meaning", definition.id));
        }
    }

    #[test]
    fn not_ready_localizer_yields_no_entries() {
        let dictionary = Dictionary::builtin(Localizer::new());
        assert_eq!(dictionary.entries(Lang::En), Err(NotReady));
        assert_eq!(dictionary.library(Lang::En).map(|s| s.len()), Err(NotReady));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let definitions = vec![
            Definition::new(1, "BRB", "code_1_meaning", Category::Harmless),
            Definition::new(1, "IDK", "code_2_meaning", Category::Harmless),
        ];
        let err = Dictionary::new(definitions, Localizer::builtin()).unwrap_err();
        assert_eq!(err, DictionaryError::DuplicateId(1));
    }

    #[test]
    fn duplicate_codes_rejected_case_insensitively() {
        let definitions = vec![
            Definition::new(1, "Sus", "code_1_meaning", Category::Harmless),
            Definition::new(2, "SUS", "code_2_meaning", Category::Harmless),
        ];
        let err = validate(&definitions).unwrap_err();
        assert!(matches!(err, DictionaryError::DuplicateCode { first: 1, second: 2, .. }));
    }

    #[test]
    fn library_groups_in_category_order_and_sorts_codes() {
        let localizer = Localizer::from_tables([(
            Lang::En,
            vec![("m", "meaning"), ("harmless", "Harmless"), ("dangerous", "Dangerous")],
        )]);
        let definitions = vec![
            Definition::new(1, "zzz", "m", Category::Harmless),
            Definition::new(2, "KYS", "m", Category::Dangerous),
            Definition::new(3, "Abc", "m", Category::Harmless),
            Definition::new(4, "bet", "m", Category::Harmless),
        ];
        let dictionary = Dictionary::new(definitions, localizer).unwrap();
        let sections = dictionary.library(Lang::En).unwrap();

        let categories: Vec<_> = sections.iter().map(|s| s.category).collect();
        assert_eq!(categories, vec![Category::Dangerous, Category::Harmless]);
        let codes: Vec<_> = sections[1].entries.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["Abc", "bet", "zzz"]);
        assert_eq!(sections[0].label, "Dangerous");
    }

    #[test]
    fn find_code_ignores_case() {
        let dictionary = builtin();
        let entry = dictionary.find_code("rizz", Lang::En).unwrap().unwrap();
        assert_eq!(entry.code, "Rizz");
        assert_eq!(entry.category, Category::Harmless);
        assert!(dictionary.find_code("nope", Lang::En).unwrap().is_none());
    }
}
