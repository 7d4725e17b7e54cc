// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent explanation cache
//!
//! Maps `(display language, entry id)` to explanation text. The durable
//! slot is a single JSON file holding a list of `["<lang>:<id>", "<text>"]`
//! pairs. Every write serializes the whole map to a sibling temp file and
//! renames it over the slot, so a crash leaves either the old or the new
//! snapshot on disk.

use crate::i18n::Lang;
use crate::types::EntryId;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Composite cache key: explanations are language specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    pub language: Lang,
    pub id: EntryId,
}

impl CacheKey {
    pub fn new(language: Lang, id: EntryId) -> Self {
        Self { language, id }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let (lang, id) = value.split_once(':')?;
        Some(Self {
            language: Lang::from_code(lang)?,
            id: id.parse().ok()?,
        })
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.language, self.id)
    }
}

/// Result of a cache write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Snapshot written to the durable slot.
    Persisted,
    /// No durable slot configured.
    InMemory,
    /// The write failed; the value lives for this session only.
    MemoryOnly,
}

#[derive(Debug, Clone, Default)]
pub struct ExplanationCache {
    entries: BTreeMap<CacheKey, String>,
    path: Option<PathBuf>,
}

impl ExplanationCache {
    /// Cache with no durable slot.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Rehydrate from the durable slot at `path`.
    ///
    /// A missing, unreadable or corrupt slot yields an empty cache; this
    /// never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => parse_snapshot(&raw, &path),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), "failed to read explanation cache: {}", err);
                BTreeMap::new()
            }
        };
        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "explanation cache loaded"
        );
        Self {
            entries,
            path: Some(path),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, language: Lang, id: EntryId) -> Option<&str> {
        self.entries
            .get(&CacheKey::new(language, id))
            .map(String::as_str)
    }

    pub fn contains(&self, key: CacheKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Store `text` and mirror the full map to the durable slot.
    ///
    /// Persist failures are logged and reported through the returned
    /// outcome, never as an error.
    pub fn put(&mut self, language: Lang, id: EntryId, text: impl Into<String>) -> PersistOutcome {
        self.entries.insert(CacheKey::new(language, id), text.into());
        self.persist_logged()
    }

    /// Drop every cached explanation. Only reachable from an explicit user
    /// command; entries never expire on their own.
    pub fn clear(&mut self) -> PersistOutcome {
        self.entries.clear();
        self.persist_logged()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CacheKey, &str)> {
        self.entries.iter().map(|(key, text)| (*key, text.as_str()))
    }

    fn persist_logged(&self) -> PersistOutcome {
        let Some(path) = &self.path else {
            return PersistOutcome::InMemory;
        };
        match write_snapshot(path, &self.entries) {
            Ok(()) => PersistOutcome::Persisted,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    "explanation cache not persisted, keeping it in memory: {:#}",
                    err
                );
                PersistOutcome::MemoryOnly
            }
        }
    }
}

fn parse_snapshot(raw: &str, path: &Path) -> BTreeMap<CacheKey, String> {
    let pairs: Vec<(String, String)> = match serde_json::from_str(raw) {
        Ok(pairs) => pairs,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                "explanation cache is corrupt, starting empty: {}",
                err
            );
            return BTreeMap::new();
        }
    };
    let mut entries = BTreeMap::new();
    for (key, text) in pairs {
        match CacheKey::parse(&key) {
            Some(key) => {
                entries.insert(key, text);
            }
            None => tracing::debug!(key = %key, "skipping unrecognised cache key"),
        }
    }
    entries
}

fn write_snapshot(path: &Path, entries: &BTreeMap<CacheKey, String>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let pairs: Vec<(String, &str)> = entries
        .iter()
        .map(|(key, text)| (key.to_string(), text.as_str()))
        .collect();
    let payload = serde_json::to_string(&pairs)?;

    let tmp = temp_path(path);
    fs::write(&tmp, payload).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

/// Sibling of `path` private to this process, so concurrent writers never
/// rename each other's partial snapshots into place.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cache_keys_round_trip_through_display() {
        let key = CacheKey::new(Lang::Ka, 42);
        assert_eq!(key.to_string(), "ka:42");
        assert_eq!(CacheKey::parse("ka:42"), Some(key));
        assert_eq!(CacheKey::parse("fr:42"), None);
        assert_eq!(CacheKey::parse("en:KYS"), None);
        assert_eq!(CacheKey::parse("en42"), None);
    }

    #[test]
    fn temp_file_is_per_process_and_cleaned_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("explanations.json");
        let tmp = temp_path(&path);
        assert_eq!(tmp.parent(), path.parent());
        assert_eq!(
            tmp.file_name().unwrap().to_string_lossy(),
            format!("explanations.json.{}.tmp", std::process::id())
        );

        let mut cache = ExplanationCache::open(&path);
        cache.put(Lang::En, 49, "text");
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("explanations.json")]);
    }

    #[test]
    fn missing_slot_starts_empty() {
        let dir = TempDir::new().unwrap();
        let cache = ExplanationCache::open(dir.path().join("explanations.json"));
        assert!(cache.is_empty());
    }

    #[test]
    fn corrupt_slot_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("explanations.json");
        fs::write(&path, "{{{ definitely not json").unwrap();
        let cache = ExplanationCache::open(&path);
        assert!(cache.is_empty());
    }

    #[test]
    fn bad_keys_are_skipped_individually() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("explanations.json");
        fs::write(&path, r#"[["en:1","one"],["es:KYS","legacy"],["ka:2","two"]]"#).unwrap();
        let cache = ExplanationCache::open(&path);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(Lang::En, 1), Some("one"));
        assert_eq!(cache.get(Lang::Ka, 2), Some("two"));
    }

    #[test]
    fn put_persists_full_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("explanations.json");
        let mut cache = ExplanationCache::open(&path);

        assert_eq!(cache.put(Lang::Es, 24, "T"), PersistOutcome::Persisted);
        assert_eq!(cache.put(Lang::En, 1, "line one\nline two"), PersistOutcome::Persisted);

        let reopened = ExplanationCache::open(&path);
        assert_eq!(reopened.get(Lang::Es, 24), Some("T"));
        assert_eq!(reopened.get(Lang::En, 1), Some("line one\nline two"));
        assert!(!path.with_file_name("explanations.json.tmp").exists());
    }

    #[test]
    fn language_is_part_of_the_key() {
        let mut cache = ExplanationCache::in_memory();
        assert_eq!(cache.put(Lang::Es, 24, "T"), PersistOutcome::InMemory);
        assert_eq!(cache.get(Lang::Es, 24), Some("T"));
        assert_eq!(cache.get(Lang::En, 24), None);
    }

    #[test]
    fn unwritable_slot_keeps_value_in_memory() {
        let dir = TempDir::new().unwrap();
        // A directory where the slot file should be makes the rename fail.
        let path = dir.path().join("slot");
        fs::create_dir_all(path.join("occupied")).unwrap();
        let mut cache = ExplanationCache::open(&path);

        assert_eq!(cache.put(Lang::En, 3, "kept"), PersistOutcome::MemoryOnly);
        assert_eq!(cache.get(Lang::En, 3), Some("kept"));
    }

    #[test]
    fn clear_empties_the_slot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("explanations.json");
        let mut cache = ExplanationCache::open(&path);
        cache.put(Lang::En, 1, "one");
        assert_eq!(cache.clear(), PersistOutcome::Persisted);
        assert!(ExplanationCache::open(&path).is_empty());
    }
}
