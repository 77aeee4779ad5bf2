//! Persisted word file
//!
//! Removal rewrites the whole file through a temporary file in the same
//! directory and renames it over the original, so readers never observe a
//! partial write and a crash leaves the original untouched.

use super::{WordList, loader};
use crate::error::{PersistenceError, SourceError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A word file on disk together with the word length it is read at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    path: PathBuf,
    length: usize,
}

impl WordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, length: usize) -> Self {
        Self {
            path: path.into(),
            length,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Load the playable words from this file
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Read` if the file exists but cannot be read.
    pub fn load(&self) -> Result<WordList, SourceError> {
        loader::load(&self.path, self.length)
    }

    /// Remove `word` from this file, returning how many lines were dropped
    ///
    /// # Errors
    ///
    /// See [`remove`].
    pub fn remove(&self, word: &str) -> Result<usize, PersistenceError> {
        remove(&self.path, word)
    }
}

/// Remove every line matching `word` from the file at `path`
///
/// Lines are compared case-insensitively after trimming. All other lines are
/// kept byte for byte, so removing an absent word leaves the file unchanged.
/// A missing file is a no-op. Returns the number of lines dropped, whatever
/// their length relative to the game's word length.
///
/// # Errors
///
/// Returns a `PersistenceError` if the file cannot be read, the temporary file
/// cannot be created or written, or the final rename fails. The original file
/// is intact in every error case.
pub fn remove<P: AsRef<Path>>(path: P, word: &str) -> Result<usize, PersistenceError> {
    let path = path.as_ref();
    let word = word.trim().to_lowercase();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(source) => {
            return Err(PersistenceError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut removed = 0usize;
    let kept: String = content
        .split_inclusive('\n')
        .filter(|line| {
            let matches = line.trim().to_lowercase() == word;
            if matches {
                removed += 1;
            }
            !matches
        })
        .collect();

    let dir = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| PersistenceError::TempFile {
        dir: dir.to_path_buf(),
        source,
    })?;

    let tmp_path = tmp.path().to_path_buf();
    let write_err = |source| PersistenceError::Write {
        path: tmp_path.clone(),
        source,
    };
    tmp.write_all(kept.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    tmp.persist(path).map_err(|e| PersistenceError::Replace {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::info!(path = %path.display(), word = %word, removed, "rewrote word list");
    Ok(removed)
}

/// Directory a temporary sibling of `path` should live in
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
