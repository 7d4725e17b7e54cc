// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive session
//!
//! A line-oriented stand-in for the search screen. Anything typed is a
//! search term; `/`-prefixed lines are commands. Provider calls run on
//! worker threads and report back over a channel, so searching and
//! selecting other entries keeps working while a fetch is in flight.
//! Finished fetches are picked up before each command; `/wait` blocks until
//! every outstanding one has landed. All controller state is touched only
//! from the loop thread.

use crate::dictionary::Dictionary;
use crate::explain::{FetchResult, Fetcher};
use crate::i18n::Lang;
use crate::report::Formatter;
use crate::search::{search_outcome, SearchOutcome};
use crate::selection::{Controller, EntryState, FetchTicket, Selection};
use anyhow::Result;
use colored::*;
use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Open(usize),
    Lang(Lang),
    ToggleAllLanguages,
    Library,
    Wait,
    Help,
    Quit,
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.trim_start().strip_prefix('/') else {
            return Command::Search(line.to_string());
        };
        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or("");
        let arg = parts.next();
        match (name, arg) {
            ("open" | "o", Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Command::Open(n),
                _ => Command::Invalid(format!("not a result number: {}", n)),
            },
            ("lang" | "l", Some(code)) => match Lang::from_code(code) {
                Some(lang) => Command::Lang(lang),
                None => Command::Invalid(format!("unsupported language: {}", code)),
            },
            ("all", None) => Command::ToggleAllLanguages,
            ("library" | "lib", None) => Command::Library,
            ("wait" | "w", None) => Command::Wait,
            ("help" | "h" | "?", None) => Command::Help,
            ("quit" | "q" | "exit", None) => Command::Quit,
            _ => Command::Invalid(format!("unknown command: /{}", rest.trim())),
        }
    }
}

type Completed = (FetchTicket, FetchResult);

pub struct Shell {
    dictionary: Dictionary,
    controller: Controller,
    fetcher: Arc<Fetcher>,
    term: String,
    outcome: SearchOutcome,
    all_languages: bool,
    tx: Sender<Completed>,
    rx: Receiver<Completed>,
}

impl Shell {
    pub fn new(dictionary: Dictionary, controller: Controller, fetcher: Arc<Fetcher>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            dictionary,
            controller,
            fetcher,
            term: String::new(),
            outcome: SearchOutcome::NotSearched,
            all_languages: false,
            tx,
            rx,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Read commands from `input` until `/quit` or end of input, then wait
    /// for outstanding fetches so their results reach the cache.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.print_banner(out)?;
        for line in input.lines() {
            let line = line?;
            self.drain(out)?;
            if !self.handle(Command::parse(&line), out)? {
                break;
            }
        }
        self.finish(out)
    }

    fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        match command {
            Command::Search(term) => {
                if term.trim().is_empty() {
                    self.controller.clear_selection();
                }
                self.term = term;
                self.refresh();
                self.print_results(out)?;
            }
            Command::Open(n) => {
                let Some(entry) = self.outcome.entries().get(n - 1).cloned() else {
                    writeln!(out, "{}", format!("no result #{}", n).yellow())?;
                    return Ok(true);
                };
                let selection = self.controller.select(&entry);
                self.dispatch(selection);
                self.print_results(out)?;
            }
            Command::Lang(lang) => {
                if let Some(selection) = self.controller.set_language(lang, &self.dictionary) {
                    self.dispatch(selection);
                }
                self.refresh();
                writeln!(out, "{}: {} ({})", self.t("languageLabel"), lang.native_name(), lang)?;
                self.print_results(out)?;
            }
            Command::ToggleAllLanguages => {
                self.all_languages = !self.all_languages;
                self.refresh();
                self.print_results(out)?;
            }
            Command::Library => {
                let lang = self.controller.language();
                match self.dictionary.library(lang) {
                    Ok(sections) => {
                        let formatter = Formatter::new(&self.dictionary, lang);
                        writeln!(out, "{}", formatter.library(&sections))?
                    }
                    Err(err) => writeln!(out, "{}", err)?,
                }
            }
            Command::Wait => {
                self.wait_pending();
                self.print_results(out)?;
            }
            Command::Help => self.print_help(out)?,
            Command::Quit => return Ok(false),
            Command::Invalid(message) => writeln!(out, "{}", message.yellow())?,
        }
        Ok(true)
    }

    /// Hand a fetch ticket to a worker thread.
    fn dispatch(&self, selection: Selection) {
        let Selection::Fetch(ticket) = selection else {
            return;
        };
        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = ticket.run(&fetcher);
            // The receiver only disappears when the shell is gone.
            let _ = tx.send((ticket, result));
        });
    }

    /// Apply finished fetches without blocking.
    fn drain<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let mut redraw = false;
        while let Ok((ticket, result)) = self.rx.try_recv() {
            redraw |= self.apply(ticket, result);
        }
        if redraw {
            self.print_results(out)?;
        }
        Ok(())
    }

    fn finish<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.wait_pending() {
            self.print_results(out)?;
        }
        Ok(())
    }

    /// Block until no fetch is outstanding. Returns whether the expanded
    /// entry changed.
    fn wait_pending(&mut self) -> bool {
        let mut redraw = false;
        while self.controller.pending_count() > 0 {
            match self.rx.recv() {
                Ok((ticket, result)) => redraw |= self.apply(ticket, result),
                Err(_) => break,
            }
        }
        redraw
    }

    /// Returns whether the expanded entry changed.
    fn apply(&mut self, ticket: FetchTicket, result: FetchResult) -> bool {
        let completion = self.controller.complete(ticket, result);
        completion.displayed
            && self
                .controller
                .active()
                .is_some_and(|entry| self.controller.state(entry.key()) == EntryState::Loaded)
    }

    fn refresh(&mut self) {
        let lang = self.controller.language();
        let entries = if self.all_languages {
            self.dictionary.all_variants()
        } else {
            self.dictionary.entries(lang)
        };
        self.outcome = match entries {
            Ok(entries) => search_outcome(&self.term, &entries),
            Err(_) => SearchOutcome::NotSearched,
        };
    }

    fn t(&self, key: &str) -> String {
        self.dictionary
            .localizer()
            .translate_or_loading(key, self.controller.language())
    }

    fn print_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.t("appTitle").bold().cyan())?;
        writeln!(out, "{}", self.t("appSubtitle"))?;
        writeln!(out, "{}", "Type a search term, /help for commands.".dimmed())?;
        Ok(())
    }

    fn print_help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "  <text>       search codes and meanings")?;
        writeln!(out, "  /open N      expand or collapse result N")?;
        writeln!(out, "  /lang CODE   switch language (es, en, ka)")?;
        writeln!(out, "  /all         toggle searching every language")?;
        writeln!(out, "  /library     show every code by category")?;
        writeln!(out, "  /wait        wait for pending explanations")?;
        writeln!(out, "  /quit        leave")?;
        Ok(())
    }

    fn print_results<W: Write>(&self, out: &mut W) -> Result<()> {
        let formatter = Formatter::new(&self.dictionary, self.controller.language());
        writeln!(
            out,
            "{}",
            formatter.search(&self.term, &self.outcome, Some(&self.controller), self.all_languages)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_searches() {
        assert_eq!(Command::parse("143"), Command::Search("143".to_string()));
        assert_eq!(Command::parse("  "), Command::Search("  ".to_string()));
        assert_eq!(Command::parse("love\r\n"), Command::Search("love".to_string()));
    }

    #[test]
    fn slash_commands_parse() {
        assert_eq!(Command::parse("/open 2"), Command::Open(2));
        assert_eq!(Command::parse("/lang ka"), Command::Lang(Lang::Ka));
        assert_eq!(Command::parse("/all"), Command::ToggleAllLanguages);
        assert_eq!(Command::parse("/q"), Command::Quit);
        assert_eq!(Command::parse("/library"), Command::Library);
        assert_eq!(Command::parse("/wait"), Command::Wait);
        assert_eq!(Command::parse("/w"), Command::Wait);
    }

    #[test]
    fn bad_commands_are_reported() {
        assert!(matches!(Command::parse("/open 0"), Command::Invalid(_)));
        assert!(matches!(Command::parse("/open x"), Command::Invalid(_)));
        assert!(matches!(Command::parse("/lang fr"), Command::Invalid(_)));
        assert!(matches!(Command::parse("/dance"), Command::Invalid(_)));
        assert!(matches!(Command::parse("/wait 3"), Command::Invalid(_)));
    }
}
