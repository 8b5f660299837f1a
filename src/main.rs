//! Yorkle - CLI
//!
//! Plays today's word-guessing game and manages the saved statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use yorkle::{
    GameConfig,
    commands::{reset_stats, run_play, show_stats},
    config::{DEFAULT_MAX_VALID_WORDS, STATS_FILENAME, TODAYS_ANSWER_FILENAME, WORD_LIST_FILENAME},
};

#[derive(Parser)]
#[command(
    name = "yorkle",
    about = "Guess the five-letter word in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File of valid guess words, whitespace separated
    #[arg(short = 'w', long, global = true, default_value = WORD_LIST_FILENAME)]
    words: PathBuf,

    /// File holding today's answer
    #[arg(short = 'a', long, global = true, default_value = TODAYS_ANSWER_FILENAME)]
    answer: PathBuf,

    /// File where statistics are kept
    #[arg(short = 's', long, global = true, default_value = STATS_FILENAME)]
    stats: PathBuf,

    /// Maximum number of words read from the word list
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_VALID_WORDS)]
    max_words: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's game (default)
    Play,

    /// Show saved statistics
    Stats,

    /// Delete saved statistics
    Reset,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            word_list_path: self.words.clone(),
            answer_path: self.answer.clone(),
            stats_path: self.stats.clone(),
            max_valid_words: self.max_words,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Stats => show_stats(&config, &mut io::stdout().lock()),
        Commands::Reset => reset_stats(&config, &mut io::stdout().lock()),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    run_play(config, stdin, &mut stdout, &mut stderr).context("game aborted")?;
    Ok(())
}
