//! Word list loading
//!
//! Reads a word file and keeps only the lines that are playable words.

use super::WordList;
use crate::core::Word;
use crate::error::SourceError;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of exactly `length` letters from a file
///
/// Each line is trimmed and lowercased; lines that are not purely alphabetic
/// or have a different length are skipped. A missing file loads as an empty
/// list so the caller can report "no words available" instead of crashing.
///
/// # Errors
///
/// Returns `SourceError::Read` if the file exists but cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::load;
///
/// let words = load("words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load<P: AsRef<Path>>(path: P, length: usize) -> Result<WordList, SourceError> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "word list not found, no words loaded");
            return Ok(WordList::empty(length));
        }
        Err(source) => {
            return Err(SourceError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let words = parse_words(&content, length);
    tracing::info!(path = %path.display(), length, count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse word list text, one word per line
#[must_use]
pub fn parse_words(content: &str, length: usize) -> WordList {
    WordList::new(
        length,
        content
            .lines()
            .filter_map(|line| Word::with_length(line.trim(), length).ok()),
    )
}
