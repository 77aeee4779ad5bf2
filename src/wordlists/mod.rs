//! Word lists for the game
//!
//! A word list is loaded once from a line-oriented text file and keeps both
//! the ordered words (for target draws) and a set (for guess validation).

pub mod loader;
pub mod source;

pub use loader::load;
pub use source::{WordSource, remove};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Playable words of one fixed length
#[derive(Debug, Clone, Default)]
pub struct WordList {
    length: usize,
    words: Vec<Word>,
    set: FxHashSet<String>,
}

impl WordList {
    /// Build a list from words that all share `length`
    ///
    /// Words of any other length are skipped.
    #[must_use]
    pub fn new(length: usize, words: impl IntoIterator<Item = Word>) -> Self {
        let words: Vec<Word> = words.into_iter().filter(|w| w.len() == length).collect();
        let set = words.iter().map(|w| w.text().to_string()).collect();
        Self { length, words, set }
    }

    /// An empty list, the result of loading a missing file
    #[must_use]
    pub fn empty(length: usize) -> Self {
        Self::new(length, [])
    }

    /// Build a list from string slices, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let words = WordList::from_slice(5, &["crane", "toolong", "slate"]);
    /// assert_eq!(words.len(), 2);
    /// assert!(words.contains("slate"));
    /// ```
    #[must_use]
    pub fn from_slice(length: usize, slice: &[&str]) -> Self {
        Self::new(
            length,
            slice
                .iter()
                .filter_map(|&s| Word::with_length(s.trim(), length).ok()),
        )
    }

    /// Word length every member shares
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Words in file order, duplicates included
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// O(1) membership check on a lowercase word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    /// Draw a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// Drop every occurrence of `word` from the list and the set
    ///
    /// Returns true if anything was removed.
    pub fn discard(&mut self, word: &Word) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w != word);
        self.set.remove(word.text());
        self.words.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_slice_skips_invalid() {
        let words = WordList::from_slice(5, &["crane", "toolong", "abc", "sl4te", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words.words()[0].text(), "crane");
        assert_eq!(words.words()[1].text(), "slate");
        assert!(words.contains("crane"));
        assert!(!words.contains("toolong"));
    }

    #[test]
    fn empty_list() {
        let words = WordList::empty(5);
        assert!(words.is_empty());
        assert_eq!(words.length(), 5);
        assert!(words.choose(&mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn new_filters_other_lengths() {
        let words = WordList::new(
            5,
            [
                Word::new("crane").unwrap(),
                Word::with_length("planet", 6).unwrap(),
            ],
        );
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn choose_is_deterministic_with_seed() {
        let words = WordList::from_slice(5, &["crane", "slate", "irate", "grate"]);

        let first = words.choose(&mut StdRng::seed_from_u64(42)).cloned();
        let second = words.choose(&mut StdRng::seed_from_u64(42)).cloned();
        assert_eq!(first, second);
        assert!(words.contains(first.unwrap().text()));
    }

    #[test]
    fn discard_removes_all_occurrences() {
        let mut words = WordList::from_slice(5, &["crane", "slate", "crane"]);
        let crane = Word::new("crane").unwrap();

        assert!(words.discard(&crane));
        assert_eq!(words.len(), 1);
        assert!(!words.contains("crane"));
        assert!(!words.discard(&crane));
    }
}
