//! Formatting utilities for terminal output
//!
//! Presentation of classifications lives here, not in `core`.

use crate::core::{Classification, Score};

/// On-screen keyboard layout used for letter hints
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Emoji tile for one classification
#[must_use]
pub const fn classification_emoji(classification: Classification) -> char {
    match classification {
        Classification::Exact => '🟩',
        Classification::Present => '🟨',
        Classification::Absent => '⬜',
    }
}

/// Format a score as an emoji string
#[must_use]
pub fn score_to_emoji(score: &Score) -> String {
    score.iter().map(classification_emoji).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
