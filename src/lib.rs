// SPDX-License-Identifier: PMPL-1.0-or-later

//! slangdex: teen slang lookup with cached explanations.
//!
//! Matches short slang tokens (acronyms, numeric codes, emoji) against a
//! curated dictionary, labels each with a severity category and optionally
//! asks a generative text provider how the code encodes its meaning.
//!
//! PIPELINE:
//! 1. **Dictionary**: one master table joined with per-language
//!    translations at read time.
//! 2. **Search**: pure substring matcher over code and meaning.
//! 3. **Selection**: toggle state machine that consults the durable
//!    explanation cache before issuing a provider call.
//! 4. **Explain**: prompt building, the provider call and the localized
//!    fallback when it fails.

pub mod config;
pub mod diagnostics;
pub mod dictionary;
pub mod explain;
pub mod i18n;
pub mod report;
pub mod search;
pub mod selection;
pub mod shell;
pub mod storage;
pub mod types;
