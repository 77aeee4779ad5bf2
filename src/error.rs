//! Error types for word sources and game sessions

use crate::core::{ScoreError, WordError};
use crate::game::GameStatus;
use std::path::PathBuf;

/// Errors that can occur while loading a word list.
///
/// A missing file is not an error; it loads as an empty list.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur while rewriting the word list file.
///
/// The original file is left intact whenever one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create temporary file in {dir}: {source}")]
    TempFile {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write temporary file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to replace {path}: {source}")]
    Replace {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Reasons a submitted guess is rejected without using a turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Guess must be {expected} letters")]
    WrongLength { expected: usize, actual: usize },

    #[error("Guess must contain only letters")]
    NonAlphabetic,

    #[error("Word not in allowed list: {0}")]
    NotInList(String),
}

/// Errors that can occur while running a game session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no words available in {path} for length {length}")]
    NoWords { path: PathBuf, length: usize },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("game is over ({0}); restart to play again")]
    GameOver(GameStatus),

    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] WordError),

    #[error("target word not in word list: {0}")]
    TargetNotInList(String),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::WrongLength {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Guess must be 5 letters");
        assert_eq!(
            ValidationError::NonAlphabetic.to_string(),
            "Guess must contain only letters"
        );
        assert_eq!(
            ValidationError::NotInList("qwert".to_string()).to_string(),
            "Word not in allowed list: qwert"
        );
    }

    #[test]
    fn game_error_display() {
        let err = GameError::NoWords {
            path: PathBuf::from("words.txt"),
            length: 5,
        };
        assert_eq!(err.to_string(), "no words available in words.txt for length 5");

        let err = GameError::GameOver(GameStatus::Lost);
        assert_eq!(err.to_string(), "game is over (lost); restart to play again");
    }

    #[test]
    fn persistence_error_display() {
        let err = PersistenceError::Replace {
            path: PathBuf::from("words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to replace words.txt: denied");
    }
}
