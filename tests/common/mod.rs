// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared test fixtures: an in-process provider that counts its calls

#![allow(dead_code)]

use slangdex::explain::{ExplanationProvider, FetchError, Fetcher};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Replies are chosen by the first quoted token in the prompt (the code).
pub struct ScriptedProvider {
    replies: Mutex<HashMap<String, Result<String, FetchError>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                replies: Mutex::new(HashMap::new()),
                calls: calls.clone(),
            },
            calls,
        )
    }

    pub fn reply(self, code: &str, reply: Result<&str, FetchError>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(code.to_string(), reply.map(str::to_string));
        self
    }

    pub fn into_fetcher(self) -> Fetcher {
        Fetcher::new(Box::new(self))
    }
}

impl ExplanationProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn generate(&self, prompt: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let code = prompt.split('"').nth(1).unwrap_or_default();
        self.replies
            .lock()
            .unwrap()
            .get(code)
            .cloned()
            .unwrap_or_else(|| Ok(format!("explanation of {}", code)))
    }
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}

pub fn network_error() -> FetchError {
    FetchError::Network {
        message: "simulated network error".to_string(),
    }
}
