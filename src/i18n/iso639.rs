// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 helpers: locale tag parsing and language display names.

use super::catalog::Lang;
use std::env;

/// Environment variables consulted by [`detect`], most specific first.
const LOCALE_ENV: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

impl Lang {
    /// Parse a locale tag such as `en-US`, `ka_GE.UTF-8` or `es`.
    ///
    /// Only the primary language subtag matters; region, encoding and
    /// modifier are ignored.
    pub fn from_locale_tag(tag: &str) -> Option<Lang> {
        let primary = tag
            .split(|c| c == '-' || c == '_' || c == '.' || c == '@')
            .next()
            .unwrap_or("");
        if primary.len() != 2 {
            return None;
        }
        Lang::from_code(primary)
    }

    /// English name, used in help output and diagnostics.
    pub fn english_name(&self) -> &'static str {
        match self {
            Lang::Es => "Spanish",
            Lang::En => "English",
            Lang::Ka => "Georgian",
        }
    }

    /// Name of the language written in its own script, for language menus.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::Es => "Español",
            Lang::En => "English",
            Lang::Ka => "ქართული",
        }
    }
}

/// Pick the start-up language from the process locale.
///
/// Returns `None` when no locale variable names a supported language; the
/// caller decides the default.
pub fn detect() -> Option<Lang> {
    LOCALE_ENV
        .iter()
        .filter_map(|key| env::var(key).ok())
        .filter(|value| !value.is_empty())
        .find_map(|value| Lang::from_locale_tag(&value))
}
