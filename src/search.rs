// SPDX-License-Identifier: PMPL-1.0-or-later

//! Search matcher
//!
//! A pure filter over an entry slice: case-insensitive substring match
//! against the code and the resolved meaning. Results keep dictionary
//! order; there is no ranking.

use crate::types::DictionaryEntry;

/// What the UI should show for the current search box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The term is empty or whitespace: nothing has been searched yet.
    NotSearched,
    /// A real search that matched nothing.
    NoMatches,
    Matches(Vec<DictionaryEntry>),
}

impl SearchOutcome {
    pub fn entries(&self) -> &[DictionaryEntry] {
        match self {
            SearchOutcome::Matches(entries) => entries,
            _ => &[],
        }
    }
}

/// Entries whose code or meaning contains `term`, ignoring case.
///
/// A blank term yields no entries.
pub fn search(term: &str, entries: &[DictionaryEntry]) -> Vec<DictionaryEntry> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches(entry, &needle))
        .cloned()
        .collect()
}

pub fn search_outcome(term: &str, entries: &[DictionaryEntry]) -> SearchOutcome {
    if term.trim().is_empty() {
        return SearchOutcome::NotSearched;
    }
    let hits = search(term, entries);
    if hits.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(hits)
    }
}

fn matches(entry: &DictionaryEntry, needle: &str) -> bool {
    entry.code.to_lowercase().contains(needle) || entry.meaning.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use crate::types::Category;

    fn entry(id: u32, code: &str, meaning: &str, category: Category) -> DictionaryEntry {
        DictionaryEntry {
            id,
            code: code.to_string(),
            category,
            meaning: meaning.to_string(),
            language: Lang::En,
        }
    }

    fn sample() -> Vec<DictionaryEntry> {
        vec![
            entry(1, "KYS", "Kill yourself", Category::Dangerous),
            entry(2, "143", "I Love You", Category::Harmless),
            entry(3, "ASL", "Age, sex, location", Category::Predator),
            entry(4, "💀", "Dying of laughter", Category::Harmless),
        ]
    }

    #[test]
    fn blank_terms_return_nothing() {
        let entries = sample();
        assert!(search("", &entries).is_empty());
        assert!(search("   \t", &entries).is_empty());
        assert_eq!(search_outcome(" ", &entries), SearchOutcome::NotSearched);
    }

    #[test]
    fn matches_code_or_meaning() {
        let entries = sample();
        let by_code = search("143", &entries);
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].id, 2);

        let by_meaning = search("love", &entries);
        assert_eq!(by_meaning.len(), 1);
        assert_eq!(by_meaning[0].id, 2);

        assert!(search("xyz", &entries).is_empty());
        assert_eq!(search_outcome("xyz", &entries), SearchOutcome::NoMatches);
    }

    #[test]
    fn case_insensitive_and_order_preserving() {
        let entries = sample();
        let hits = search("S", &entries);
        let ids: Vec<_> = hits.iter().map(|e| e.id).collect();
        // KYS (code), ASL (code and meaning); nothing reorders them.
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(search("kys", &entries)[0].code, "KYS");
    }

    #[test]
    fn emoji_codes_match_as_substrings() {
        let entries = sample();
        let hits = search("💀", &entries);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 4);
    }

    #[test]
    fn outcome_exposes_entries() {
        let entries = sample();
        let outcome = search_outcome("age", &entries);
        assert_eq!(outcome.entries().len(), 1);
        assert!(SearchOutcome::NoMatches.entries().is_empty());
    }
}
