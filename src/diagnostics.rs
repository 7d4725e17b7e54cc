// SPDX-License-Identifier: PMPL-1.0-or-later

//! `slangdex doctor`: checks the pieces a lookup session depends on

use crate::config::Config;
use crate::dictionary::{self, Dictionary};
use crate::explain::API_KEY_ENV;
use crate::i18n::{Lang, Localizer};
use crate::storage::ExplanationCache;
use anyhow::{anyhow, Result};
use colored::*;
use std::fs;
use std::path::Path;

pub fn run_self_diagnostics(config: &Config) -> Result<()> {
    println!("slangdex self-diagnostics");

    let checks = collect(config);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect(config: &Config) -> Vec<Diagnostic> {
    let localizer = config.localizer();
    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("slangdex {}", env!("CARGO_PKG_VERSION")),
    )];
    checks.push(check_dictionary(&localizer));
    for lang in Lang::all() {
        checks.push(check_locale(&localizer, *lang));
    }
    checks.push(check_cache(&config.resolved_cache_path()));
    checks.push(check_credential(config));
    checks.push(Diagnostic::ok(
        "language",
        format!("{} ({})", config.resolved_language().native_name(), config.resolved_language()),
    ));
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

#[derive(Debug)]
struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:18} {}", self.level.tag(), self.label, self.detail);
    }
}

fn check_dictionary(localizer: &Localizer) -> Diagnostic {
    let definitions = dictionary::builtin_definitions();
    if let Err(err) = dictionary::validate(&definitions) {
        return Diagnostic::error("dictionary", err.to_string());
    }
    let dictionary = Dictionary::builtin(localizer.clone());
    let untranslated = Lang::all()
        .iter()
        .filter_map(|lang| dictionary.entries(*lang).ok())
        .flat_map(|entries| entries.into_iter().zip(dictionary.definitions()))
        .filter(|(entry, definition)| entry.meaning == definition.meaning_key)
        .count();
    if untranslated > 0 {
        Diagnostic::warning(
            "dictionary",
            format!("{} entries, {} meanings shown as raw keys", definitions.len(), untranslated),
        )
    } else {
        Diagnostic::ok("dictionary", format!("{} entries", definitions.len()))
    }
}

fn check_locale(localizer: &Localizer, lang: Lang) -> Diagnostic {
    let label = match lang {
        Lang::Es => "locale es",
        Lang::En => "locale en",
        Lang::Ka => "locale ka",
    };
    match localizer.key_count(lang) {
        0 => Diagnostic::warning(
            label,
            "table empty (falling back to English/raw keys)".to_string(),
        ),
        count => Diagnostic::ok(label, format!("{} keys", count)),
    }
}

fn check_cache(path: &Path) -> Diagnostic {
    if !path.exists() {
        return Diagnostic::ok(
            "explanation cache",
            format!("{} not created yet", path.display()),
        );
    }
    if path.is_dir() {
        return Diagnostic::error(
            "explanation cache",
            format!("{} is a directory, explanations cannot be persisted", path.display()),
        );
    }
    let readable = fs::read_to_string(path)
        .map(|raw| serde_json::from_str::<Vec<(String, String)>>(&raw).is_ok());
    match readable {
        Ok(true) => {
            let cache = ExplanationCache::open(path);
            Diagnostic::ok(
                "explanation cache",
                format!("{} explanations in {}", cache.len(), path.display()),
            )
        }
        Ok(false) => Diagnostic::warning(
            "explanation cache",
            format!("{} is corrupt and will be treated as empty", path.display()),
        ),
        Err(err) => Diagnostic::warning(
            "explanation cache",
            format!("unable to read {}: {}", path.display(), err),
        ),
    }
}

fn check_credential(config: &Config) -> Diagnostic {
    match &config.api_key {
        Some(_) => Diagnostic::ok("provider", format!("{} configured", config.model)),
        None => Diagnostic::warning(
            "provider",
            format!(
                "no API key (set {} to enable explanations)",
                API_KEY_ENV.join(" or ")
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn credential_detail_never_contains_the_key() {
        let config = Config {
            api_key: Some("super-secret".to_string()),
            ..Config::default()
        };
        let check = check_credential(&config);
        assert_eq!(check.level, Level::Ok);
        assert!(!check.detail.contains("super-secret"));
    }

    #[test]
    fn missing_credential_is_a_warning() {
        let check = check_credential(&Config::default());
        assert_eq!(check.level, Level::Warn);
        assert!(check.detail.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn cache_checks_cover_each_slot_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("explanations.json");
        assert_eq!(check_cache(&path).level, Level::Ok);

        fs::write(&path, "garbage").unwrap();
        assert_eq!(check_cache(&path).level, Level::Warn);

        fs::write(&path, r#"[["en:1","text"]]"#).unwrap();
        let check = check_cache(&path);
        assert_eq!(check.level, Level::Ok);
        assert!(check.detail.starts_with("1 explanations"));

        assert_eq!(check_cache(dir.path()).level, Level::Error);
    }

    #[test]
    fn builtin_dictionary_passes() {
        assert_eq!(check_dictionary(&Localizer::builtin()).level, Level::Ok);
        assert_eq!(check_locale(&Localizer::new(), Lang::Ka).level, Level::Warn);
    }
}
