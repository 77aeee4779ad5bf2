//! Game configuration

use crate::core::WORD_LENGTH;
use crate::wordlists::WordSource;
use std::path::PathBuf;

/// Default number of guesses per game
pub const MAX_GUESSES: usize = 6;

/// Default word file, relative to the working directory
pub const WORDS_FILE: &str = "words.txt";

/// Settings for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    pub words_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_guesses: MAX_GUESSES,
            words_path: PathBuf::from(WORDS_FILE),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(words_path: impl Into<PathBuf>) -> Self {
        Self {
            words_path: words_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Word file this configuration reads and rewrites
    #[must_use]
    pub fn source(&self) -> WordSource {
        WordSource::new(self.words_path.clone(), self.word_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.words_path, PathBuf::from("words.txt"));
    }

    #[test]
    fn builder_overrides() {
        let config = GameConfig::new("data/six.txt")
            .with_word_length(6)
            .with_max_guesses(8);

        assert_eq!(config.word_length, 6);
        assert_eq!(config.max_guesses, 8);

        let source = config.source();
        assert_eq!(source.path(), PathBuf::from("data/six.txt").as_path());
        assert_eq!(source.length(), 6);
    }
}
