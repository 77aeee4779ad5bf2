//! One-shot scoring command
//!
//! Scores a single guess against a given target without starting a game.

use crate::core::{Score, Word};

/// Result of scoring one guess
pub struct ScoreResult {
    pub target: Word,
    pub guess: Word,
    pub score: Score,
}

/// Score `guess` against `target`, both of `length` letters
///
/// # Errors
///
/// Returns an error if either word is not `length` ASCII letters.
pub fn score_guess(target: &str, guess: &str, length: usize) -> Result<ScoreResult, String> {
    let target = Word::with_length(target, length).map_err(|e| format!("Invalid target: {e}"))?;
    let guess = Word::with_length(guess, length).map_err(|e| format!("Invalid guess: {e}"))?;
    let score = Score::calculate(&target, &guess).map_err(|e| e.to_string())?;

    Ok(ScoreResult {
        target,
        guess,
        score,
    })
}
