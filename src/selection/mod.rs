// SPDX-License-Identifier: PMPL-1.0-or-later

//! Selection and request lifecycle
//!
//! Each entry moves through `Collapsed → Loading → Loaded`; selecting the
//! expanded entry again collapses it. The controller owns the explanation
//! cache and decides when a provider call is needed, but never performs
//! the call itself: [`Controller::select`] hands out a [`FetchTicket`] and
//! the result comes back through [`Controller::complete`]. That split lets
//! a caller run fetches on worker threads while the controller stays on
//! the control thread.

use crate::dictionary::Dictionary;
use crate::explain::{FetchResult, Fetcher};
use crate::i18n::Lang;
use crate::storage::{CacheKey, ExplanationCache, PersistOutcome};
use crate::types::{DictionaryEntry, EntryKey};
use std::collections::HashMap;

/// Work order for one provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: CacheKey,
    pub entry: DictionaryEntry,
}

impl FetchTicket {
    pub fn run(&self, fetcher: &Fetcher) -> FetchResult {
        fetcher.fetch(&self.entry, self.key.language)
    }
}

/// What a selection did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The entry was expanded and is now collapsed.
    Collapsed,
    /// Expanded straight to loaded from the cache; no provider call.
    Cached(String),
    /// Expanded while a call for the same cache key is already in flight.
    AlreadyPending,
    /// Expanded into loading; the caller must run the ticket and report
    /// back through [`Controller::complete`].
    Fetch(FetchTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Collapsed,
    Loading,
    Loaded,
}

/// What to render in an entry's explanation area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationView<'a> {
    None,
    Loading,
    Text(&'a str),
}

/// Bookkeeping returned from [`Controller::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Whether any display slot was filled.
    pub displayed: bool,
    /// Cache write outcome; `None` when the result was not cacheable.
    pub persisted: Option<PersistOutcome>,
}

#[derive(Debug)]
pub struct Controller {
    language: Lang,
    cache: ExplanationCache,
    active: Option<DictionaryEntry>,
    pending: HashMap<CacheKey, Vec<EntryKey>>,
    displayed: HashMap<EntryKey, String>,
}

impl Controller {
    pub fn new(language: Lang, cache: ExplanationCache) -> Self {
        Self {
            language,
            cache,
            active: None,
            pending: HashMap::new(),
            displayed: HashMap::new(),
        }
    }

    pub fn language(&self) -> Lang {
        self.language
    }

    pub fn cache(&self) -> &ExplanationCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut ExplanationCache {
        &mut self.cache
    }

    pub fn active(&self) -> Option<&DictionaryEntry> {
        self.active.as_ref()
    }

    pub fn is_active(&self, key: EntryKey) -> bool {
        self.active.as_ref().map(DictionaryEntry::key) == Some(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Toggle `entry`.
    pub fn select(&mut self, entry: &DictionaryEntry) -> Selection {
        let key = entry.key();
        if self.is_active(key) {
            self.active = None;
            return Selection::Collapsed;
        }
        self.active = Some(entry.clone());
        self.lookup(entry)
    }

    /// Expand `entry` and request a new explanation even if one is cached.
    /// A successful result overwrites the cached text.
    pub fn reload(&mut self, entry: &DictionaryEntry) -> Selection {
        self.active = Some(entry.clone());
        self.request(entry)
    }

    /// Collapse whatever is expanded (e.g. when the search box is cleared).
    pub fn clear_selection(&mut self) {
        self.active = None;
    }

    /// Record the outcome of a ticket.
    ///
    /// Successful text is written to the cache under the ticket's own
    /// language. It is only shown if that is still the display language; a
    /// result for an entry that was collapsed in the meantime fills its
    /// slot without expanding it again.
    pub fn complete(&mut self, ticket: FetchTicket, result: FetchResult) -> Completion {
        let waiting = self.pending.remove(&ticket.key).unwrap_or_default();

        let persisted = if result.succeeded {
            Some(self.cache.put(ticket.key.language, ticket.key.id, result.text.clone()))
        } else {
            None
        };

        if ticket.key.language != self.language {
            tracing::debug!(key = %ticket.key, "discarding explanation for previous language");
            return Completion {
                displayed: false,
                persisted,
            };
        }

        let displayed = !waiting.is_empty();
        for entry_key in waiting {
            self.displayed.insert(entry_key, result.text.clone());
        }
        Completion {
            displayed,
            persisted,
        }
    }

    /// Switch the display language.
    ///
    /// Display slots belong to the old language and are dropped. An
    /// expanded entry is looked up again under the new cache key: an entry
    /// shown in the old display language is re-resolved through
    /// `dictionary`, an explicit language variant stays as it is.
    pub fn set_language(&mut self, language: Lang, dictionary: &Dictionary) -> Option<Selection> {
        if language == self.language {
            return None;
        }
        let previous = self.language;
        self.language = language;
        self.displayed.clear();

        let active = self.active.take()?;
        let entry = if active.language == previous {
            match dictionary.get(active.id, language) {
                Ok(Some(entry)) => entry,
                _ => return None,
            }
        } else {
            active
        };
        self.active = Some(entry.clone());
        Some(self.lookup(&entry))
    }

    pub fn state(&self, key: EntryKey) -> EntryState {
        if !self.is_active(key) {
            return EntryState::Collapsed;
        }
        match self.explanation_view(key) {
            ExplanationView::Loading => EntryState::Loading,
            _ => EntryState::Loaded,
        }
    }

    pub fn explanation_view(&self, key: EntryKey) -> ExplanationView<'_> {
        let cache_key = CacheKey::new(self.language, key.id);
        if self
            .pending
            .get(&cache_key)
            .is_some_and(|waiting| waiting.contains(&key))
        {
            return ExplanationView::Loading;
        }
        match self.displayed.get(&key) {
            Some(text) => ExplanationView::Text(text),
            None => ExplanationView::None,
        }
    }

    /// Select and, on a cache miss, fetch inline. Returns the text now
    /// shown for `entry`, or `None` if the selection collapsed it.
    pub fn select_blocking(
        &mut self,
        entry: &DictionaryEntry,
        fetcher: &Fetcher,
    ) -> Option<String> {
        let selection = self.select(entry);
        self.resolve_blocking(entry, selection, fetcher)
    }

    /// [`Controller::reload`] with the fetch run inline.
    pub fn reload_blocking(
        &mut self,
        entry: &DictionaryEntry,
        fetcher: &Fetcher,
    ) -> Option<String> {
        let selection = self.reload(entry);
        self.resolve_blocking(entry, selection, fetcher)
    }

    fn resolve_blocking(
        &mut self,
        entry: &DictionaryEntry,
        selection: Selection,
        fetcher: &Fetcher,
    ) -> Option<String> {
        match selection {
            Selection::Collapsed => None,
            Selection::Cached(text) => Some(text),
            Selection::AlreadyPending => None,
            Selection::Fetch(ticket) => {
                let result = ticket.run(fetcher);
                self.complete(ticket, result);
                match self.explanation_view(entry.key()) {
                    ExplanationView::Text(text) => Some(text.to_string()),
                    _ => None,
                }
            }
        }
    }

    fn lookup(&mut self, entry: &DictionaryEntry) -> Selection {
        if let Some(text) = self.cache.get(self.language, entry.id) {
            let text = text.to_string();
            self.displayed.insert(entry.key(), text.clone());
            return Selection::Cached(text);
        }
        self.request(entry)
    }

    fn request(&mut self, entry: &DictionaryEntry) -> Selection {
        let cache_key = CacheKey::new(self.language, entry.id);
        let entry_key = entry.key();
        if let Some(waiting) = self.pending.get_mut(&cache_key) {
            if !waiting.contains(&entry_key) {
                waiting.push(entry_key);
            }
            return Selection::AlreadyPending;
        }
        self.pending.insert(cache_key, vec![entry_key]);
        Selection::Fetch(FetchTicket {
            key: cache_key,
            entry: entry.clone(),
        })
    }
}
