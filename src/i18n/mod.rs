// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for slangdex.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | es   | Spanish  | Español     |
//! | en   | English  | English     |
//! | ka   | Georgian | ქართული     |
//!
//! ## Design
//!
//! Translation keys are flat strings: UI labels (`"noResults"`), category
//! labels (`"dangerous"`) and dictionary meanings (`"code_49_meaning"`). Lookups
//! fall back to English when a key is missing in the requested language. If
//! the key is missing in English too, the key string itself is returned
//! (fail-open, never panics).
//!
//! Unlike a purely static catalog the tables can be replaced at start-up
//! from a directory, so the [`Localizer`] carries an explicit not-ready
//! state until one load has completed.

mod catalog;
mod iso639;

pub use catalog::{Lang, Localizer, NotReady, DEFAULT_LANG, LOADING_TRANSLATIONS};
pub use iso639::detect;
