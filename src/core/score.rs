//! Guess scoring against a hidden target
//!
//! A score is the ordered list of per-letter classifications for one guess.
//! Scoring follows Wordle's two-pass rules so duplicate letters are never
//! awarded more often than they occur in the target.

use super::{Classification, Word};

/// Error returned when target and guess lengths differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("cannot score a {guess}-letter guess against a {target}-letter target")]
    LengthMismatch { target: usize, guess: usize },
}

/// Feedback for a full guess, one classification per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score(Vec<Classification>);

impl Score {
    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and consume those target letters
    /// 2. Second pass: for each remaining guess letter, consume the first
    ///    unconsumed occurrence in the target (left to right) and mark it present
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Classification::*, Score, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let score = Score::calculate(&target, &guess).unwrap();
    ///
    /// assert_eq!(score.classifications(), &[Absent, Exact, Exact, Present, Exact]);
    /// ```
    pub fn calculate(target: &Word, guess: &Word) -> Result<Self, ScoreError> {
        if target.len() != guess.len() {
            return Err(ScoreError::LengthMismatch {
                target: target.len(),
                guess: guess.len(),
            });
        }

        let mut result = vec![Classification::Absent; guess.len()];
        let mut remaining: Vec<Option<u8>> = target.chars().iter().copied().map(Some).collect();

        // First pass: exact matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = Classification::Exact;
                remaining[i] = None;
            }
        }

        // Second pass: present elsewhere, consuming the leftmost unconsumed match
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Classification::Exact {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(g)) {
                result[i] = Classification::Present;
                *slot = None;
            }
        }

        Ok(Self(result))
    }

    /// Classifications in guess order
    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[Classification] {
        &self.0
    }

    /// Iterate over classifications in guess order
    pub fn iter(&self) -> impl Iterator<Item = Classification> + '_ {
        self.0.iter().copied()
    }

    /// Number of positions scored
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&c| c == Classification::Exact)
    }

    /// Count the exact matches
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0
            .iter()
            .filter(|&&c| c == Classification::Exact)
            .count()
    }

    /// Count the present-elsewhere matches
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&c| c == Classification::Present)
            .count()
    }

    /// Render as a code string like "GY-GY"
    #[must_use]
    pub fn to_codes(&self) -> String {
        self.0.iter().map(|c| c.code()).collect()
    }
}

/// Score `guess` against `target`
///
/// Shorthand for [`Score::calculate`].
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the words differ in length.
pub fn score(target: &Word, guess: &Word) -> Result<Score, ScoreError> {
    Score::calculate(target, guess)
}

impl std::str::FromStr for Score {
    type Err = String;

    /// Parse a code string like "GY-GY"
    ///
    /// Accepts 'G'/'g' for exact, 'Y'/'y' for present, '-'/'_' for absent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|ch| match ch {
                'G' | 'g' => Ok(Classification::Exact),
                'Y' | 'y' => Ok(Classification::Present),
                '-' | '_' => Ok(Classification::Absent),
                _ => Err(format!("Invalid score string: {s}")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
