// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal rendering

use crate::dictionary::{Dictionary, LibrarySection};
use crate::i18n::{Lang, LOADING_TRANSLATIONS};
use crate::search::SearchOutcome;
use crate::selection::{Controller, EntryState, ExplanationView};
use crate::storage::ExplanationCache;
use crate::types::{Category, DictionaryEntry};
use colored::*;

pub struct Formatter<'a> {
    dictionary: &'a Dictionary,
    lang: Lang,
}

impl<'a> Formatter<'a> {
    pub fn new(dictionary: &'a Dictionary, lang: Lang) -> Self {
        Self { dictionary, lang }
    }

    fn t(&self, key: &str) -> String {
        self.dictionary.localizer().translate_or_loading(key, self.lang)
    }

    pub fn category_badge(&self, category: Category) -> ColoredString {
        let label = format!("[{}]", self.t(category.key()));
        match category {
            Category::Dangerous => label.red().bold(),
            Category::Predator => label.yellow().bold(),
            Category::Harmless => label.blue(),
        }
    }

    /// One result line: number, code, meaning, language tag and category.
    pub fn entry_line(&self, index: usize, entry: &DictionaryEntry, show_language: bool) -> String {
        let language = if show_language {
            format!(" {}", format!("({})", entry.language.code().to_uppercase()).dimmed())
        } else {
            String::new()
        };
        format!(
            "{:>3}. {}  {}{} {}",
            index + 1,
            entry.code.bold(),
            entry.meaning,
            language,
            self.category_badge(entry.category)
        )
    }

    /// The search view. With a controller, the expanded entry also shows
    /// its explanation area.
    pub fn search(
        &self,
        term: &str,
        outcome: &SearchOutcome,
        controller: Option<&Controller>,
        show_language: bool,
    ) -> String {
        if !self.dictionary.localizer().is_ready() {
            return self.loading_translations();
        }
        match outcome {
            SearchOutcome::NotSearched => format!(
                "{}\n{}",
                self.t("startTyping").bold(),
                self.t("resultsAppearHere").dimmed()
            ),
            SearchOutcome::NoMatches => format!(
                "{} \"{}\".\n{}",
                self.t("noResults").bold(),
                term,
                self.t("tryAnotherSearch").dimmed()
            ),
            SearchOutcome::Matches(entries) => {
                let mut lines = Vec::with_capacity(entries.len());
                for (index, entry) in entries.iter().enumerate() {
                    lines.push(self.entry_line(index, entry, show_language));
                    let Some(controller) = controller else {
                        continue;
                    };
                    if controller.state(entry.key()) != EntryState::Collapsed {
                        lines.push(self.explanation(controller.explanation_view(entry.key())));
                    }
                }
                lines.join("\n")
            }
        }
    }

    /// Explanation area. Line breaks in provider text become indented lines.
    pub fn explanation(&self, view: ExplanationView<'_>) -> String {
        match view {
            ExplanationView::None => String::new(),
            ExplanationView::Loading => format!("       {}", self.t("loading").dimmed()),
            ExplanationView::Text(text) => {
                let title = self.t("explanationTitle").bold().cyan();
                let mut lines = vec![format!("       {}", title)];
                lines.extend(
                    text.lines()
                        .map(str::trim_end)
                        .filter(|line| !line.is_empty())
                        .map(|line| format!("       {}", line)),
                );
                lines.join("\n")
            }
        }
    }

    pub fn library(&self, sections: &[LibrarySection]) -> String {
        if !self.dictionary.localizer().is_ready() {
            return self.loading_translations();
        }
        let mut lines = vec![
            self.t("libraryTitle").bold().cyan().to_string(),
            self.t("libraryDescription"),
        ];
        for section in sections {
            lines.push(String::new());
            lines.push(format!(
                "{} ({})",
                self.category_badge(section.category),
                section.entries.len()
            ));
            for entry in &section.entries {
                lines.push(format!("  {:<12} {}", entry.code.bold(), entry.meaning));
            }
        }
        lines.join("\n")
    }

    fn loading_translations(&self) -> String {
        LOADING_TRANSLATIONS.dimmed().to_string()
    }

    /// Cached explanations with the code they belong to, one block per key.
    pub fn cache_listing(&self, cache: &ExplanationCache) -> String {
        if cache.is_empty() {
            return "explanation cache is empty".dimmed().to_string();
        }
        let mut lines = Vec::new();
        for (key, text) in cache.iter() {
            let code = self
                .dictionary
                .definitions()
                .iter()
                .find(|definition| definition.id == key.id)
                .map(|definition| definition.code.as_str())
                .unwrap_or("?");
            lines.push(format!("{} {}", key.to_string().bold(), code));
            for line in text.lines().filter(|line| !line.trim().is_empty()) {
                lines.push(format!("    {}", line.trim_end()));
            }
        }
        lines.join("\n")
    }
}
