//! Yorkle
//!
//! A terminal word-guessing game: guess the secret five-letter word in six
//! attempts, with per-letter feedback after every guess and persistent
//! win statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use yorkle::core::{Word, evaluate};
//!
//! let answer = Word::new("blood").unwrap();
//! let guess = Word::new("boron").unwrap();
//!
//! let outcome = evaluate(&answer, &guess);
//! assert_eq!(outcome.to_string(), "GY-G-");
//! ```

// Core domain types
pub mod core;

// Word list and answer sources
pub mod wordlists;

// Single-game state
pub mod game;

// Cumulative statistics and their persistence
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;

pub use config::GameConfig;
pub use error::GameError;
