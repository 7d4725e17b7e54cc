// SPDX-License-Identifier: PMPL-1.0-or-later

//! Gemini backend
//!
//! Google generative language API integration for explanation text.

use super::{ExplanationProvider, FetchError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables holding the credential, checked in order.
pub const API_KEY_ENV: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Longest provider error body kept in a [`FetchError`].
const MAX_ERROR_BODY: usize = 512;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Gemini `generateContent` client.
pub struct GeminiProvider {
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Client-side timeout. Expiry is reported as a network failure.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn call_api(&self, prompt: &str) -> Result<String, FetchError> {
        let api_key = self.api_key.as_ref().ok_or(FetchError::NotConfigured)?;

        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let agent = builder.build();

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = agent
            .post(&self.endpoint())
            .set("x-goog-api-key", api_key)
            .set("content-type", "application/json")
            .send_json(&request)
            .map_err(|e| match e {
                ureq::Error::Status(429, _) => FetchError::RateLimited,
                ureq::Error::Status(status, resp) => FetchError::Api {
                    status,
                    message: truncate(resp.into_string().unwrap_or_default()),
                },
                ureq::Error::Transport(transport) => FetchError::Network {
                    message: transport.to_string(),
                },
            })?;

        let body: GenerateResponse = response.into_json().map_err(|e| FetchError::Parse {
            message: e.to_string(),
        })?;

        extract_text(body)
    }
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ExplanationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate(&self, prompt: &str) -> Result<String, FetchError> {
        self.call_api(prompt)
    }
}

pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}

fn extract_text(body: GenerateResponse) -> Result<String, FetchError> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or(FetchError::EmptyResponse)?;
    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(FetchError::EmptyResponse);
    }
    Ok(text)
}

fn truncate(mut message: String) -> String {
    if message.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
    }
    message
}
