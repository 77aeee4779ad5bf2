//! Keyboard letter hints
//!
//! Tracks the best classification seen for every letter guessed so far.

use super::{Classification, Score, Word};
use rustc_hash::FxHashMap;

/// Best-seen classification per guessed letter
///
/// Once a letter is `Exact` it never regresses; a `Present` letter can only
/// be upgraded to `Exact`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    letters: FxHashMap<char, Classification>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the hints
    pub fn record(&mut self, guess: &Word, score: &Score) {
        for (&letter, classification) in guess.chars().iter().zip(score.iter()) {
            self.upgrade(char::from(letter), classification);
        }
    }

    /// Raise a single letter to `classification` if that is an improvement
    pub fn upgrade(&mut self, letter: char, classification: Classification) {
        self.letters
            .entry(letter.to_ascii_lowercase())
            .and_modify(|existing| *existing = existing.best(classification))
            .or_insert(classification);
    }

    /// Best classification seen for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Classification> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Number of distinct letters guessed
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}
