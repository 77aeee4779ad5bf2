//! Wordle Game
//!
//! A Wordle-style word guessing game: guess scoring, a word file that loses
//! each solved word, and terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Score, Word};
//!
//! let target = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! let score = Score::calculate(&target, &guess).unwrap();
//! assert_eq!(score.to_codes(), "-GGYG");
//! ```

// Core domain types
pub mod core;

// Game settings
pub mod config;

// Error types
pub mod error;

// Turn state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
