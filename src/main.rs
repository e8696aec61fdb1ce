//! `spell`: spell word(s) using a spelling alphabet.

use std::io::IsTerminal;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use serde::Serialize;
use spell_alphabet::{Exactness, Registry, SpelledToken, registry};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spell")]
#[command(about = "Spell word(s) using a spelling alphabet")]
#[command(version)]
struct Cli {
    /// Spelling alphabet to use: language tag or standard name
    #[arg(short = 'l', long, value_name = "ALPHABET", env = "SPELL_ALPHABET", default_value = "en")]
    alphabet: String,

    /// List the available spelling alphabets
    #[arg(long)]
    list: bool,

    /// Print the spelled tokens as JSON
    #[arg(long)]
    json: bool,

    /// Word(s) to spell
    words: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    alphabet: String,
    exactness: Exactness,
    tokens: &'a [SpelledToken],
}

fn main() -> Result<()> {
    init_logging();

    let registry = registry();
    let mut command =
        Cli::command().after_help(format!("Spelling alphabets:\n{}", listing(registry)));
    let cli = Cli::from_arg_matches(&command.get_matches_mut())?;

    if cli.list {
        print!("{}", listing(registry));
        return Ok(());
    }
    if cli.words.is_empty() {
        command.print_help()?;
        return Ok(());
    }

    let (alphabet, exactness) = registry.lookup(&cli.alphabet);
    match exactness {
        Exactness::Guess => info!(
            "guessed alphabet '{}' for '{}'",
            alphabet.lang_tag(),
            cli.alphabet
        ),
        Exactness::Default => warn!(
            "found no spelling alphabet for '{}', using default '{}'",
            cli.alphabet,
            alphabet.lang_tag()
        ),
        Exactness::Exact => {}
    }

    let text = cli.words.join(" ");
    if cli.json {
        let tokens = alphabet.spell_tokens(&text);
        let report = Report {
            alphabet: alphabet.lang_tag(),
            exactness,
            tokens: &tokens,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", alphabet.spell(&text));
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SPELL_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// One line per alphabet, sorted by tag: tag, English name, standard names.
fn listing(registry: &Registry) -> String {
    let mut out = String::new();
    for alphabet in registry.sorted_by_tag() {
        let tag = alphabet.lang_tag();
        if alphabet.names().is_empty() {
            out.push_str(&format!("  {:<6}{}\n", tag, alphabet.english_name()));
        } else {
            out.push_str(&format!(
                "  {:<6}{}, {}\n",
                tag,
                alphabet.english_name(),
                alphabet.names().join(", ")
            ));
        }
    }
    out
}
