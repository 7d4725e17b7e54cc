// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration
//!
//! Resolved in layers: built-in defaults, then an optional YAML file, then
//! environment variables, then command-line flags (applied by `main`).
//! The API key is only ever read from the environment and is never
//! serialized.

use crate::explain::{api_key_from_env, GeminiProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::i18n::{self, Lang, Localizer};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "slangdex.yaml";
/// Overrides the durable cache location.
pub const CACHE_ENV: &str = "SLANGDEX_CACHE";
const CACHE_FILE: &str = "explanations.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Display language; detected from the locale when unset.
    pub language: Option<Lang>,
    /// Durable explanation cache slot.
    pub cache_path: Option<PathBuf>,
    /// Directory holding `es.json`, `en.json`, `ka.json`; built-in tables
    /// when unset.
    pub locales_dir: Option<PathBuf>,
    pub model: String,
    pub base_url: String,
    /// Client-side timeout for provider calls, in seconds.
    pub timeout_secs: Option<u64>,
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            cache_path: None,
            locales_dir: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            api_key: None,
        }
    }
}

impl Config {
    /// Load `path` if given, else `slangdex.yaml` if it exists, else
    /// defaults; then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    fn apply_env(&mut self) {
        self.api_key = api_key_from_env();
        if let Ok(path) = env::var(CACHE_ENV) {
            if !path.trim().is_empty() {
                self.cache_path = Some(PathBuf::from(path));
            }
        }
    }

    /// Configured language, else the process locale, else Spanish.
    pub fn resolved_language(&self) -> Lang {
        self.language.or_else(i18n::detect).unwrap_or_default()
    }

    pub fn resolved_cache_path(&self) -> PathBuf {
        self.cache_path.clone().unwrap_or_else(default_cache_path)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs)
    }

    pub fn localizer(&self) -> Localizer {
        let mut localizer = Localizer::new();
        match &self.locales_dir {
            Some(dir) => localizer.load_from_dir(dir),
            None => localizer.load_builtin(),
        }
        localizer
    }

    pub fn provider(&self) -> GeminiProvider {
        GeminiProvider::new(self.api_key.clone())
            .with_model(&self.model)
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout())
    }
}

/// `$XDG_CACHE_HOME/slangdex`, else `$HOME/.cache/slangdex`, else
/// `./.slangdex`.
pub fn default_cache_path() -> PathBuf {
    let non_empty = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());
    let base = non_empty("XDG_CACHE_HOME")
        .map(|dir| PathBuf::from(dir).join("slangdex"))
        .or_else(|| {
            non_empty("HOME").map(|home| PathBuf::from(home).join(".cache").join("slangdex"))
        })
        .unwrap_or_else(|| PathBuf::from(".slangdex"));
    base.join(CACHE_FILE)
}
