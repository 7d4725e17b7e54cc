// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of search results, the library view and cached explanations

pub mod formatter;
pub mod output;

use crate::dictionary::Dictionary;
use crate::i18n::Lang;
use crate::search::SearchOutcome;
use anyhow::Result;

pub use formatter::Formatter;
pub use output::{EntryRow, LibraryReport, OutputFormat, SearchReport, SearchStatus};

/// Render a search outcome in `format`.
pub fn render_search(
    dictionary: &Dictionary,
    lang: Lang,
    term: &str,
    outcome: &SearchOutcome,
    format: OutputFormat,
    show_language: bool,
) -> Result<String> {
    let report = SearchReport::new(term, outcome, dictionary, lang)?;
    if let Some(serialized) = format.serialize(&report)? {
        return Ok(serialized);
    }
    Ok(Formatter::new(dictionary, lang).search(term, outcome, None, show_language))
}

/// Render the grouped library in `format`.
pub fn render_library(dictionary: &Dictionary, lang: Lang, format: OutputFormat) -> Result<String> {
    let sections = dictionary.library(lang)?;
    let report = LibraryReport {
        language: lang,
        sections,
    };
    if let Some(serialized) = format.serialize(&report)? {
        return Ok(serialized);
    }
    Ok(Formatter::new(dictionary, lang).library(&report.sections))
}
