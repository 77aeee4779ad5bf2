//! Word removal command
//!
//! Removes a word from the word file outside of a game.

use crate::wordlists::WordSource;

/// Result of removing a word
pub struct RemoveResult {
    pub word: String,
    /// Lines dropped from the file, counting words of any length
    pub removed: usize,
    /// Playable words left at the configured length
    pub remaining: usize,
}

/// Remove `word` from the file behind `source`
///
/// # Errors
///
/// Returns an error if the file cannot be read or rewritten. The file is left
/// unchanged in that case.
pub fn remove_word(source: &WordSource, word: &str) -> Result<RemoveResult, String> {
    let word = word.trim().to_lowercase();

    let removed = source.remove(&word).map_err(|e| e.to_string())?;
    let remaining = source.load().map_err(|e| e.to_string())?.len();

    Ok(RemoveResult {
        word,
        removed,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn removes_present_word() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "crane\nslate\nirate\n").unwrap();

        let result = remove_word(&WordSource::new(&path, 5), "SLATE").unwrap();

        assert_eq!(result.removed, 1);
        assert_eq!(result.word, "slate");
        assert_eq!(result.remaining, 2);
    }

    #[test]
    fn absent_word_is_not_removed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "crane\nslate\n").unwrap();

        let result = remove_word(&WordSource::new(&path, 5), "zebra").unwrap();

        assert_eq!(result.removed, 0);
        assert_eq!(result.remaining, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "crane\nslate\n");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        let source = WordSource::new(dir.path().join("missing.txt"), 5);

        let result = remove_word(&source, "crane").unwrap();
        assert_eq!(result.removed, 0);
        assert_eq!(result.remaining, 0);
    }

    #[test]
    fn reports_words_outside_the_configured_length() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "crane\nplanet\nslate\n").unwrap();

        let result = remove_word(&WordSource::new(&path, 5), "planet").unwrap();

        assert_eq!(result.removed, 1);
        assert_eq!(result.remaining, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "crane\nslate\n");
    }
}
