//! Core domain types for the game
//!
//! This module contains the word, scoring and hint types. Everything here is
//! pure and free of I/O.

mod classification;
mod keyboard;
mod score;
mod word;

pub use classification::Classification;
pub use keyboard::KeyboardHints;
pub use score::{Score, ScoreError, score};
pub use word::{WORD_LENGTH, Word, WordError};
