//! Wordle Game - CLI
//!
//! Word guessing game with TUI and text modes, plus one-shot scoring and
//! word list maintenance commands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{remove_word, run_simple, score_guess},
    config::{GameConfig, MAX_GUESSES, WORDS_FILE},
    core::WORD_LENGTH,
    game::Session,
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle-style word guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word file, one word per line; solved words are removed from it
    #[arg(short = 'w', long, global = true, default_value = WORDS_FILE)]
    words: PathBuf,

    /// Number of letters per word
    #[arg(short, long, global = true, default_value_t = WORD_LENGTH, value_parser = parse_word_length)]
    length: usize,

    /// Number of guesses per game
    #[arg(short = 'g', long, global = true, default_value_t = MAX_GUESSES, value_parser = parse_max_guesses)]
    max_guesses: usize,

    /// Seed for target selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode without the TUI
    Simple,

    /// Score a guess against a target word
    Score {
        /// The hidden word
        target: String,

        /// The guessed word
        guess: String,
    },

    /// Remove a word from the word file
    Remove {
        /// Word to remove
        word: String,
    },
}

fn parse_word_length(s: &str) -> Result<usize, String> {
    parse_in_range(s, 1, 15)
}

fn parse_max_guesses(s: &str) -> Result<usize, String> {
    parse_in_range(s, 1, 20)
}

fn parse_in_range(s: &str, min: usize, max: usize) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between {min} and {max}"))
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` overrides `default_filter`.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would corrupt the alternate screen
    init_tracing(if matches!(command, Commands::Play) {
        "off"
    } else {
        "warn"
    });

    let config = GameConfig::new(cli.words)
        .with_word_length(cli.length)
        .with_max_guesses(cli.max_guesses);
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    match command {
        Commands::Play => run_play_command(config, rng),
        Commands::Simple => run_simple_command(config, rng),
        Commands::Score { target, guess } => run_score_command(&config, &target, &guess),
        Commands::Remove { word } => run_remove_command(&config, &word),
    }
}

fn run_play_command(config: GameConfig, mut rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let session = Session::load(config, &mut rng)?;
    let app = App::new(session, rng);
    run_tui(app)
}

fn run_simple_command(config: GameConfig, mut rng: StdRng) -> Result<()> {
    let mut session = Session::load(config, &mut rng)?;
    run_simple(&mut session, &mut rng)
}

fn run_score_command(config: &GameConfig, target: &str, guess: &str) -> Result<()> {
    let result = score_guess(target, guess, config.word_length).map_err(anyhow::Error::msg)?;
    print_score_result(&result.target, &result.guess, &result.score);
    Ok(())
}

fn run_remove_command(config: &GameConfig, word: &str) -> Result<()> {
    let result = remove_word(&config.source(), word).map_err(anyhow::Error::msg)?;

    if result.removed > 0 {
        println!(
            "Removed {} from {} ({} {}, {} playable words remain)",
            result.word.to_uppercase().bright_yellow().bold(),
            config.words_path.display(),
            result.removed,
            if result.removed == 1 { "line" } else { "lines" },
            result.remaining
        );
    } else {
        println!(
            "{} not found in {}",
            result.word.to_uppercase().bright_yellow(),
            config.words_path.display()
        );
    }
    Ok(())
}
