// SPDX-License-Identifier: PMPL-1.0-or-later

//! Explanation fetcher
//!
//! Builds a language-specific prompt for an entry, calls the generative
//! provider once and normalizes the outcome into display text. Provider
//! errors stop here: callers only ever see the raw success text or the
//! fixed fallback string for the language.

mod gemini;
mod prompts;

pub use gemini::{api_key_from_env, GeminiProvider, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use prompts::{build_prompt, fallback_message};

use crate::i18n::Lang;
use crate::types::DictionaryEntry;
use thiserror::Error;

/// Errors from a generative provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("provider is not configured (no API key)")]
    NotConfigured,
    #[error("network error: {message}")]
    Network { message: String },
    #[error("rate limited by provider")]
    RateLimited,
    #[error("provider returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("malformed provider response: {message}")]
    Parse { message: String },
    #[error("provider returned no text")]
    EmptyResponse,
}

/// A text-generation backend reached through a plain prompt→text contract.
pub trait ExplanationProvider: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Whether the provider has what it needs to make a call.
    fn is_available(&self) -> bool;

    /// Generate text for `prompt`. One attempt, no retries.
    fn generate(&self, prompt: &str) -> Result<String, FetchError>;
}

/// Display text produced by one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub text: String,
    /// `false` when `text` is the localized fallback. Only successful
    /// results may be cached.
    pub succeeded: bool,
}

impl FetchResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: true,
        }
    }

    pub fn fallback(lang: Lang) -> Self {
        Self {
            text: fallback_message(lang).to_string(),
            succeeded: false,
        }
    }
}

pub struct Fetcher {
    provider: Box<dyn ExplanationProvider>,
}

impl Fetcher {
    pub fn new(provider: Box<dyn ExplanationProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn ExplanationProvider {
        self.provider.as_ref()
    }

    /// Explain how `entry` encodes its meaning, in `lang`.
    ///
    /// Success text is returned unmodified; any provider failure becomes
    /// the fixed fallback for `lang`.
    pub fn fetch(&self, entry: &DictionaryEntry, lang: Lang) -> FetchResult {
        let prompt = build_prompt(entry, lang);
        tracing::debug!(
            provider = self.provider.name(),
            code = %entry.code,
            language = %lang,
            "requesting explanation"
        );
        match self.provider.generate(&prompt) {
            Ok(text) => FetchResult::success(text),
            Err(err) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    code = %entry.code,
                    language = %lang,
                    "explanation request failed: {}",
                    err
                );
                FetchResult::fallback(lang)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct Scripted {
        reply: Result<String, FetchError>,
        calls: Arc<AtomicUsize>,
        last_prompt: Arc<Mutex<String>>,
    }

    impl ExplanationProvider for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn generate(&self, prompt: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = prompt.to_string();
            self.reply.clone()
        }
    }

    fn kys() -> DictionaryEntry {
        DictionaryEntry {
            id: 1,
            code: "KYS".to_string(),
            category: Category::Dangerous,
            meaning: "Kill yourself".to_string(),
            language: Lang::En,
        }
    }

    fn fetcher(
        reply: Result<String, FetchError>,
    ) -> (Fetcher, Arc<AtomicUsize>, Arc<Mutex<String>>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let last_prompt = Arc::new(Mutex::new(String::new()));
        let provider = Scripted {
            reply,
            calls: calls.clone(),
            last_prompt: last_prompt.clone(),
        };
        (Fetcher::new(Box::new(provider)), calls, last_prompt)
    }

    #[test]
    fn success_text_is_returned_unmodified() {
        let (fetcher, calls, prompt) = fetcher(Ok("  Acronym:\nK-Y-S  ".to_string()));
        let result = fetcher.fetch(&kys(), Lang::En);
        assert_eq!(result, FetchResult::success("  Acronym:\nK-Y-S  "));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(prompt.lock().unwrap().contains("\"KYS\""));
    }

    #[test]
    fn failure_becomes_localized_fallback_after_one_attempt() {
        let (fetcher, calls, _) = fetcher(Err(FetchError::Network {
            message: "connection refused".to_string(),
        }));
        let result = fetcher.fetch(&kys(), Lang::En);
        assert!(!result.succeeded);
        assert_eq!(result.text, fallback_message(Lang::En));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let ka = fetcher.fetch(&kys(), Lang::Ka);
        assert_eq!(ka.text, fallback_message(Lang::Ka));
    }

    #[test]
    fn prompt_language_follows_the_requested_language() {
        let (fetcher, _, prompt) = fetcher(Ok("x".to_string()));
        fetcher.fetch(&kys(), Lang::Es);
        assert!(prompt.lock().unwrap().ends_with("Responde en español."));
    }
}
