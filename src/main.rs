// SPDX-License-Identifier: PMPL-1.0-or-later

//! slangdex: look up teen slang codes and explain how they work
//!
//! Search a curated dictionary of acronyms, numeric codes and emoji, see
//! how risky each one is, and fetch a short explanation that is cached
//! locally so repeat lookups never hit the provider again.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use slangdex::config::Config;
use slangdex::dictionary::Dictionary;
use slangdex::explain::{ExplanationProvider, Fetcher};
use slangdex::i18n::Lang;
use slangdex::report::{self, Formatter, OutputFormat};
use slangdex::search::search_outcome;
use slangdex::selection::{Controller, ExplanationView};
use slangdex::shell::Shell;
use slangdex::storage::{ExplanationCache, PersistOutcome};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slangdex")]
#[command(version)]
#[command(about = "Look up teen slang codes, their severity and how they work")]
#[command(long_about = None)]
struct Cli {
    /// Display language (es, en, ka); detected from the locale by default
    #[arg(short, long, global = true)]
    lang: Option<Lang>,

    /// Config file (YAML); defaults to ./slangdex.yaml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Explanation cache file
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    /// Directory with es.json, en.json and ka.json translation tables
    #[arg(long, global = true)]
    locales: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search codes and meanings
    Search {
        /// Text to look for in codes and meanings
        #[arg(value_name = "TERM")]
        term: String,

        /// Search the Spanish, English and Georgian variants together
        #[arg(short, long)]
        all_languages: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Explain how a code encodes its meaning
    Explain {
        /// The exact code, e.g. 143 or KYS
        #[arg(value_name = "CODE")]
        code: String,

        /// Ask the provider again even if an explanation is cached
        #[arg(short, long)]
        refresh: bool,
    },

    /// Every code grouped by category
    Library {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Interactive search session
    Shell,

    /// Inspect or reset the explanation cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// List supported languages
    Languages,

    /// Check configuration, translations, cache and credentials
    Doctor,
}

#[derive(Subcommand)]
enum CacheAction {
    /// Print every cached explanation
    Show,
    /// Print the cache file location
    Path,
    /// Delete every cached explanation
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(lang) = cli.lang {
        config.language = Some(lang);
    }
    if let Some(cache) = cli.cache {
        config.cache_path = Some(cache);
    }
    if let Some(locales) = cli.locales {
        config.locales_dir = Some(locales);
    }

    let lang = config.resolved_language();
    let dictionary = Dictionary::builtin(config.localizer());
    tracing::debug!(language = %lang, entries = dictionary.len(), "dictionary ready");

    match cli.command {
        Commands::Search {
            term,
            all_languages,
            format,
        } => {
            let entries = if all_languages {
                dictionary.all_variants()?
            } else {
                dictionary.entries(lang)?
            };
            let outcome = search_outcome(&term, &entries);
            println!(
                "{}",
                report::render_search(&dictionary, lang, &term, &outcome, format, all_languages)?
            );
        }

        Commands::Explain { code, refresh } => {
            let Some(entry) = dictionary.find_code(&code, lang)? else {
                bail!("no dictionary entry with code {:?}", code);
            };
            let formatter = Formatter::new(&dictionary, lang);
            println!("{}", formatter.entry_line(0, &entry, false));

            let cache = ExplanationCache::open(config.resolved_cache_path());
            let mut controller = Controller::new(lang, cache);
            let provider = config.provider();
            if !provider.is_available() && controller.cache().get(lang, entry.id).is_none() {
                tracing::warn!("no API key configured; the request will fall back");
            }
            let fetcher = Fetcher::new(Box::new(provider));
            let text = if refresh {
                controller.reload_blocking(&entry, &fetcher)
            } else {
                controller.select_blocking(&entry, &fetcher)
            };
            if let Some(text) = text {
                println!("{}", formatter.explanation(ExplanationView::Text(&text)));
            }
        }

        Commands::Library { format } => {
            println!("{}", report::render_library(&dictionary, lang, format)?);
        }

        Commands::Shell => {
            let cache = ExplanationCache::open(config.resolved_cache_path());
            let controller = Controller::new(lang, cache);
            let fetcher = Arc::new(Fetcher::new(Box::new(config.provider())));
            let mut shell = Shell::new(dictionary, controller, fetcher);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell.run(stdin.lock(), &mut stdout)?;
        }

        Commands::Cache { action } => {
            let path = config.resolved_cache_path();
            match action {
                CacheAction::Show => {
                    let cache = ExplanationCache::open(&path);
                    println!("{}", Formatter::new(&dictionary, lang).cache_listing(&cache));
                }
                CacheAction::Path => println!("{}", path.display()),
                CacheAction::Clear => {
                    let mut cache = ExplanationCache::open(&path);
                    let removed = cache.len();
                    match cache.clear() {
                        PersistOutcome::Persisted | PersistOutcome::InMemory => {
                            println!("removed {} cached explanations", removed)
                        }
                        PersistOutcome::MemoryOnly => {
                            bail!("could not rewrite {}", path.display())
                        }
                    }
                }
            }
        }

        Commands::Languages => {
            for available in Lang::all() {
                let marker = if *available == lang { "*" } else { " " };
                println!(
                    "{} {}  {:<10} {}",
                    marker,
                    available,
                    available.native_name(),
                    available.english_name()
                );
            }
        }

        Commands::Doctor => {
            slangdex::diagnostics::run_self_diagnostics(&config)
                .context("doctor found problems")?;
        }
    }

    Ok(())
}
