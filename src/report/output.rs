// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported views

use crate::dictionary::{Dictionary, LibrarySection};
use crate::i18n::{Lang, NotReady};
use crate::search::SearchOutcome;
use crate::types::{Category, DictionaryEntry, EntryId};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Serialize `value` for the structured formats. `Text` is rendered by
    /// the formatter and yields `None` here.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<Option<String>> {
        match self {
            OutputFormat::Text => Ok(None),
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
            OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
        }
    }
}

/// One entry as exported.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRow {
    pub id: EntryId,
    pub code: String,
    pub meaning: String,
    pub category: Category,
    pub category_label: String,
    pub language: Lang,
}

impl EntryRow {
    pub fn new(
        entry: &DictionaryEntry,
        dictionary: &Dictionary,
        lang: Lang,
    ) -> Result<Self, NotReady> {
        Ok(Self {
            id: entry.id,
            code: entry.code.clone(),
            meaning: entry.meaning.clone(),
            category: entry.category,
            category_label: dictionary.category_label(entry.category, lang)?,
            language: entry.language,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    NotSearched,
    NoMatches,
    Matches,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub term: String,
    pub language: Lang,
    pub status: SearchStatus,
    pub results: Vec<EntryRow>,
}

impl SearchReport {
    pub fn new(
        term: &str,
        outcome: &SearchOutcome,
        dictionary: &Dictionary,
        lang: Lang,
    ) -> Result<Self, NotReady> {
        let status = match outcome {
            SearchOutcome::NotSearched => SearchStatus::NotSearched,
            SearchOutcome::NoMatches => SearchStatus::NoMatches,
            SearchOutcome::Matches(_) => SearchStatus::Matches,
        };
        Ok(Self {
            term: term.to_string(),
            language: lang,
            status,
            results: outcome
                .entries()
                .iter()
                .map(|entry| EntryRow::new(entry, dictionary, lang))
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LibraryReport {
    pub language: Lang,
    pub sections: Vec<LibrarySection>,
}
