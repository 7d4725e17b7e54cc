// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for slangdex.
//!
//! Holds one flat key→string table per supported language. Tables are
//! either the ones embedded at compile time from `locales/` or loaded from a
//! directory at start-up. Meaning keys for dictionary entries (`code_<id>_meaning`)
//! and UI strings share the same tables.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add the arms to `Lang::code()` and `Lang::from_code()`
//! 3. Add a `locales/xx.json` file and a `BUILTIN_XX` include below
//! 4. Add a prompt template and a fallback string in `explain::prompts`

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Languages a dictionary can be displayed and explained in.
///
/// The set is closed: every variant has a translation table, a prompt
/// template and an error fallback string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Es,
    En,
    Ka,
}

/// Language consulted when a key is missing from the active table.
pub const DEFAULT_LANG: Lang = Lang::En;

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
            Lang::Ka => "ka",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Case-insensitive, unlike locale tags which are handled by
    /// [`Lang::from_locale_tag`].
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.to_ascii_lowercase().as_str() {
            "es" => Some(Lang::Es),
            "en" => Some(Lang::En),
            "ka" => Some(Lang::Ka),
            _ => None,
        }
    }

    /// All supported languages, in the order their dictionary variants are
    /// concatenated.
    pub fn all() -> &'static [Lang] {
        &[Lang::Es, Lang::En, Lang::Ka]
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Es
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Lang::from_code(value).ok_or_else(|| format!("unsupported language: {}", value))
    }
}

/// Returned by anything that needs translations before they are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("translations have not been loaded yet")]
pub struct NotReady;

/// Shown in place of any label while the tables are still loading.
pub const LOADING_TRANSLATIONS: &str = "Loading translations...";

const BUILTIN_ES: &str = include_str!("../../locales/es.json");
const BUILTIN_EN: &str = include_str!("../../locales/en.json");
const BUILTIN_KA: &str = include_str!("../../locales/ka.json");

type Table = HashMap<String, String>;

/// Resolves translation keys for a language.
///
/// Starts out not ready; every lookup fails with [`NotReady`] until one of
/// the `load_*` methods has run so callers can show a loading state instead
/// of raw keys.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    tables: Option<HashMap<Lang, Table>>,
}

impl Localizer {
    pub fn new() -> Self {
        Self { tables: None }
    }

    /// Localizer backed by the tables shipped inside the binary.
    pub fn builtin() -> Self {
        let mut localizer = Self::new();
        localizer.load_builtin();
        localizer
    }

    /// Build a ready localizer from in-memory tables. Languages absent from
    /// `tables` get an empty table.
    pub fn from_tables<I, K, V>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Lang, Vec<(K, V)>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut loaded: HashMap<Lang, Table> =
            Lang::all().iter().map(|lang| (*lang, Table::new())).collect();
        for (lang, pairs) in tables {
            let table = loaded.entry(lang).or_default();
            for (key, value) in pairs {
                table.insert(key.into(), value.into());
            }
        }
        Self {
            tables: Some(loaded),
        }
    }

    pub fn load_builtin(&mut self) {
        let mut loaded = HashMap::new();
        for lang in Lang::all() {
            let raw = match lang {
                Lang::Es => BUILTIN_ES,
                Lang::En => BUILTIN_EN,
                Lang::Ka => BUILTIN_KA,
            };
            loaded.insert(*lang, parse_table(*lang, raw));
        }
        self.tables = Some(loaded);
    }

    /// Load `<dir>/<code>.json` for every language.
    ///
    /// A table that cannot be read or parsed degrades to empty for that
    /// language only; the localizer always ends up ready.
    pub fn load_from_dir(&mut self, dir: &Path) {
        let mut loaded = HashMap::new();
        for lang in Lang::all() {
            let path = dir.join(format!("{}.json", lang.code()));
            let table = match fs::read_to_string(&path) {
                Ok(raw) => parse_table(*lang, &raw),
                Err(err) => {
                    tracing::warn!(
                        language = %lang,
                        path = %path.display(),
                        "failed to read translation table: {}",
                        err
                    );
                    Table::new()
                }
            };
            loaded.insert(*lang, table);
        }
        self.tables = Some(loaded);
    }

    pub fn is_ready(&self) -> bool {
        self.tables.is_some()
    }

    /// Look up `key` in `lang`, then in [`DEFAULT_LANG`], then return the key
    /// itself. Never returns an empty string for a non-empty key.
    pub fn translate(&self, key: &str, lang: Lang) -> Result<String, NotReady> {
        let tables = self.tables.as_ref().ok_or(NotReady)?;
        if let Some(value) = lookup(tables, lang, key) {
            return Ok(value.to_string());
        }
        if lang != DEFAULT_LANG {
            if let Some(value) = lookup(tables, DEFAULT_LANG, key) {
                return Ok(value.to_string());
            }
        }
        Ok(key.to_string())
    }

    /// Like [`Localizer::translate`] but yields [`LOADING_TRANSLATIONS`]
    /// while not ready, never the raw key.
    pub fn translate_or_loading(&self, key: &str, lang: Lang) -> String {
        self.translate(key, lang)
            .unwrap_or_else(|NotReady| LOADING_TRANSLATIONS.to_string())
    }

    /// Number of keys loaded for `lang` (zero while not ready).
    pub fn key_count(&self, lang: Lang) -> usize {
        self.tables
            .as_ref()
            .and_then(|tables| tables.get(&lang))
            .map(|table| table.len())
            .unwrap_or(0)
    }
}

fn lookup<'a>(tables: &'a HashMap<Lang, Table>, lang: Lang, key: &str) -> Option<&'a str> {
    tables
        .get(&lang)
        .and_then(|table| table.get(key))
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn parse_table(lang: Lang, raw: &str) -> Table {
    match serde_json::from_str::<Table>(raw) {
        Ok(table) => table,
        Err(err) => {
            tracing::warn!(language = %lang, "failed to parse translation table: {}", err);
            Table::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn not_ready_until_loaded() {
        let localizer = Localizer::new();
        assert!(!localizer.is_ready());
        assert_eq!(localizer.translate("harmless", Lang::En), Err(NotReady));
        assert_eq!(
            localizer.translate_or_loading("harmless", Lang::En),
            LOADING_TRANSLATIONS
        );
    }

    #[test]
    fn falls_back_to_default_language_then_key() {
        let localizer = Localizer::from_tables([
            (Lang::En, vec![("greeting", "Hello"), ("only.en", "English only")]),
            (Lang::Ka, vec![("greeting", "გამარჯობა")]),
        ]);
        assert_eq!(localizer.translate("greeting", Lang::Ka).unwrap(), "გამარჯობა");
        assert_eq!(localizer.translate("only.en", Lang::Es).unwrap(), "English only");
        assert_eq!(localizer.translate("missing.key", Lang::Es).unwrap(), "missing.key");
    }

    #[test]
    fn empty_values_are_treated_as_missing() {
        let localizer = Localizer::from_tables([
            (Lang::En, vec![("title", "Title")]),
            (Lang::Es, vec![("title", "")]),
        ]);
        assert_eq!(localizer.translate("title", Lang::Es).unwrap(), "Title");
    }

    #[test]
    fn builtin_tables_cover_category_labels() {
        let localizer = Localizer::builtin();
        for lang in Lang::all() {
            assert!(localizer.key_count(*lang) > 0, "{} table is empty", lang);
            for key in ["dangerous", "predator", "harmless", "explanationError"] {
                let value = localizer.translate(key, *lang).unwrap();
                assert_ne!(value, key, "{} missing {}", lang, key);
            }
        }
        assert_eq!(localizer.translate("dangerous", Lang::Es).unwrap(), "Peligroso");
    }

    #[test]
    fn unreadable_table_degrades_only_that_language() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"harmless": "Harmless"}"#).unwrap();
        fs::write(dir.path().join("es.json"), "{ not json").unwrap();
        // ka.json is missing entirely

        let mut localizer = Localizer::new();
        localizer.load_from_dir(dir.path());

        assert!(localizer.is_ready());
        assert_eq!(localizer.key_count(Lang::En), 1);
        assert_eq!(localizer.key_count(Lang::Es), 0);
        assert_eq!(localizer.key_count(Lang::Ka), 0);
        // Degraded languages still resolve through the default table.
        assert_eq!(localizer.translate("harmless", Lang::Ka).unwrap(), "Harmless");
        assert_eq!(localizer.translate("predator", Lang::Es).unwrap(), "predator");
    }

    #[test]
    fn lang_codes_parse() {
        assert_eq!(Lang::from_code("ka"), Some(Lang::Ka));
        assert_eq!(Lang::from_code("EN"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!("es".parse::<Lang>(), Ok(Lang::Es));
        assert_eq!(Lang::default(), Lang::Es);
    }
}
