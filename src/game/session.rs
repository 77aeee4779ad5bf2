//! Game session and turn state machine

use crate::config::GameConfig;
use crate::core::{KeyboardHints, Score, Word};
use crate::error::{GameError, PersistenceError, ValidationError};
use crate::wordlists::{WordList, WordSource};
use rand::Rng;
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost accept no further guesses until a restart
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Mutable per-game state, reset on restart
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    guesses_used: usize,
    hints: KeyboardHints,
    status: GameStatus,
    history: Vec<(Word, Score)>,
}

impl SessionState {
    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        self.guesses_used
    }

    /// Best classification seen per letter
    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted guesses with their scores, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Score)] {
        &self.history
    }
}

/// Result of one accepted guess
#[derive(Debug)]
pub struct TurnOutcome {
    pub guess: Word,
    pub score: Score,
    pub status: GameStatus,
    pub guesses_used: usize,
    /// Set when the game was won but the solved word could not be removed
    /// from the word file. The win stands regardless.
    pub persistence_error: Option<PersistenceError>,
}

/// One player's game against a hidden target
pub struct Session {
    config: GameConfig,
    source: WordSource,
    words: WordList,
    target: Word,
    state: SessionState,
}

impl Session {
    /// Load the word file named by `config` and start a game
    ///
    /// # Errors
    ///
    /// Returns `GameError::Source` if the file cannot be read, or
    /// `GameError::NoWords` if it holds no playable words (including when
    /// it does not exist).
    pub fn load<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let words = config.source().load()?;
        Self::new(config, words, rng)
    }

    /// Start a game with a target drawn from `words` using `rng`
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoWords` if `words` is empty or holds words of a
    /// length other than the configured one.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::{config::GameConfig, game::Session, wordlists::WordList};
    ///
    /// let words = WordList::from_slice(5, &["crane", "slate"]);
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let session = Session::new(GameConfig::default(), words, &mut rng).unwrap();
    /// assert!(["crane", "slate"].contains(&session.target().text()));
    /// ```
    pub fn new<R: Rng + ?Sized>(
        config: GameConfig,
        words: WordList,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let source = config.source();
        check_length(&words, &source)?;
        let target = draw_target(&words, &source, rng)?;
        Ok(Self::from_parts(config, source, words, target))
    }

    /// Start a game against a known target
    ///
    /// # Errors
    ///
    /// - `GameError::NoWords` if `words` has a length other than the
    ///   configured one
    /// - `GameError::InvalidTarget` if `target` is not a word of the
    ///   configured length
    /// - `GameError::TargetNotInList` if `target` is not in `words`, since
    ///   it could never be guessed
    pub fn with_target(
        config: GameConfig,
        words: WordList,
        target: &str,
    ) -> Result<Self, GameError> {
        let source = config.source();
        check_length(&words, &source)?;
        let target = Word::with_length(target.trim(), config.word_length)?;
        if !words.contains(target.text()) {
            return Err(GameError::TargetNotInList(target.text().to_string()));
        }
        Ok(Self::from_parts(config, source, words, target))
    }

    fn from_parts(config: GameConfig, source: WordSource, words: WordList, target: Word) -> Self {
        tracing::debug!(words = words.len(), "new game session");
        Self {
            config,
            source,
            words,
            target,
            state: SessionState::default(),
        }
    }

    /// Submit one guess
    ///
    /// Rejected guesses leave the state untouched and do not use a turn.
    /// Winning removes the target from the word file; failure to do so is
    /// reported in the outcome and does not undo the win.
    ///
    /// # Errors
    ///
    /// - `GameError::GameOver` if the game has already been won or lost
    /// - `GameError::Validation` if the guess has the wrong length, is not
    ///   alphabetic, or is not in the word list
    pub fn submit(&mut self, raw: &str) -> Result<TurnOutcome, GameError> {
        if self.state.status.is_terminal() {
            return Err(GameError::GameOver(self.state.status));
        }

        let guess = self.validate(raw)?;
        let score = Score::calculate(&self.target, &guess)?;

        self.state.guesses_used += 1;
        self.state.hints.record(&guess, &score);
        self.state.history.push((guess.clone(), score.clone()));

        let mut persistence_error = None;
        if guess == self.target {
            self.state.status = GameStatus::Won;
            match self.source.remove(self.target.text()) {
                Ok(_) => {
                    self.words.discard(&self.target);
                }
                Err(e) => {
                    tracing::warn!(word = %self.target, error = %e, "could not remove solved word");
                    persistence_error = Some(e);
                }
            }
        } else if self.state.guesses_used >= self.config.max_guesses {
            self.state.status = GameStatus::Lost;
        }

        tracing::debug!(
            guess = %guess,
            score = %score.to_codes(),
            used = self.state.guesses_used,
            status = %self.state.status,
            "scored guess"
        );

        Ok(TurnOutcome {
            guess,
            score,
            status: self.state.status,
            guesses_used: self.state.guesses_used,
            persistence_error,
        })
    }

    /// Check a raw guess without submitting it
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, checking length, then
    /// letters, then list membership.
    pub fn validate(&self, raw: &str) -> Result<Word, ValidationError> {
        let guess = raw.trim().to_lowercase();
        let expected = self.config.word_length;

        let actual = guess.chars().count();
        if actual != expected {
            return Err(ValidationError::WrongLength { expected, actual });
        }
        if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::NonAlphabetic);
        }
        if !self.words.contains(&guess) {
            return Err(ValidationError::NotInList(guess));
        }

        Word::with_length(guess, expected).map_err(|_| ValidationError::NonAlphabetic)
    }

    /// Draw a new target and reset the game
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoWords` if every word has been solved and removed.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.target = draw_target(&self.words, &self.source, rng)?;
        self.state = SessionState::default();
        tracing::debug!(words = self.words.len(), "restarted game");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }

    /// The hidden word; front ends reveal it once the game is over
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub const fn guesses_remaining(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.state.guesses_used)
    }
}

fn check_length(words: &WordList, source: &WordSource) -> Result<(), GameError> {
    if words.length() == source.length() {
        Ok(())
    } else {
        Err(no_words(source))
    }
}

fn no_words(source: &WordSource) -> GameError {
    GameError::NoWords {
        path: source.path().to_path_buf(),
        length: source.length(),
    }
}

fn draw_target<R: Rng + ?Sized>(
    words: &WordList,
    source: &WordSource,
    rng: &mut R,
) -> Result<Word, GameError> {
    words.choose(rng).cloned().ok_or_else(|| no_words(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification::{Absent, Exact, Present};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};

    const WORDS: &str = "crane\ntrace\nslate\nirate\ngrate\nplumb\nfight\n";

    fn setup(target: &str) -> (TempDir, Session) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, WORDS).unwrap();

        let config = GameConfig::new(&path);
        let words = config.source().load().unwrap();
        let session = Session::with_target(config, words, target).unwrap();
        (dir, session)
    }

    fn file_words(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn new_session_starts_in_progress() {
        let (_dir, session) = setup("crane");

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.state().guesses_used(), 0);
        assert_eq!(session.guesses_remaining(), 6);
        assert!(session.state().hints().is_empty());
    }

    #[test]
    fn scores_trace_then_wins_with_crane() {
        let (dir, mut session) = setup("crane");

        let outcome = session.submit("TRACE").unwrap();
        assert_eq!(
            outcome.score.classifications(),
            &[Absent, Exact, Exact, Present, Exact]
        );
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(outcome.guesses_used, 1);

        let outcome = session.submit("crane").unwrap();
        assert!(outcome.score.is_perfect());
        assert_eq!(outcome.status, GameStatus::Won);
        assert!(outcome.persistence_error.is_none());
        assert_eq!(session.state().history().len(), 2);

        // Solved word is gone from the file and the in-memory list
        let remaining = file_words(&dir.path().join("words.txt"));
        assert!(!remaining.contains(&"crane".to_string()));
        assert_eq!(remaining.len(), 6);
        assert!(!session.words().contains("crane"));
    }

    #[test]
    fn invalid_guesses_do_not_use_a_turn() {
        let (_dir, mut session) = setup("crane");

        assert!(matches!(
            session.submit("cran"),
            Err(GameError::Validation(ValidationError::WrongLength {
                expected: 5,
                actual: 4
            }))
        ));
        assert!(matches!(
            session.submit("cr4ne"),
            Err(GameError::Validation(ValidationError::NonAlphabetic))
        ));
        assert!(matches!(
            session.submit("zzzzz"),
            Err(GameError::Validation(ValidationError::NotInList(ref w))) if w == "zzzzz"
        ));
        assert!(matches!(
            session.submit(""),
            Err(GameError::Validation(ValidationError::WrongLength { actual: 0, .. }))
        ));

        assert_eq!(session.state().guesses_used(), 0);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.state().history().is_empty());
    }

    #[test]
    fn loses_after_max_guesses_and_stays_lost() {
        let (dir, mut session) = setup("crane");

        for guess in ["slate", "irate", "grate", "plumb", "fight"] {
            let outcome = session.submit(guess).unwrap();
            assert_eq!(outcome.status, GameStatus::InProgress);
        }
        let outcome = session.submit("trace").unwrap();
        assert_eq!(outcome.status, GameStatus::Lost);
        assert_eq!(session.guesses_remaining(), 0);

        // Even the correct word is refused now
        assert!(matches!(
            session.submit("crane"),
            Err(GameError::GameOver(GameStatus::Lost))
        ));
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.state().guesses_used(), 6);

        // Losing never touches the file
        assert_eq!(file_words(&dir.path().join("words.txt")).len(), 7);
    }

    #[test]
    fn won_game_rejects_further_guesses() {
        let (_dir, mut session) = setup("slate");
        session.submit("slate").unwrap();

        assert!(matches!(
            session.submit("crane"),
            Err(GameError::GameOver(GameStatus::Won))
        ));
        assert_eq!(session.state().guesses_used(), 1);
    }

    #[test]
    fn max_guesses_is_configurable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, WORDS).unwrap();

        let config = GameConfig::new(&path).with_max_guesses(2);
        let words = config.source().load().unwrap();
        let mut session = Session::with_target(config, words, "crane").unwrap();

        session.submit("slate").unwrap();
        assert_eq!(session.submit("irate").unwrap().status, GameStatus::Lost);
    }

    #[test]
    fn win_survives_persistence_failure() {
        let dir = tempdir().unwrap();
        // The word file path is a directory, so the rewrite fails
        let config = GameConfig::new(dir.path());
        let words = WordList::from_slice(5, &["crane", "slate"]);
        let mut session = Session::with_target(config, words, "crane").unwrap();

        let outcome = session.submit("crane").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert!(outcome.persistence_error.is_some());
        assert_eq!(session.status(), GameStatus::Won);
        // Still in memory since the file was not changed
        assert!(session.words().contains("crane"));
    }

    #[test]
    fn win_with_missing_file_is_fine() {
        let dir = tempdir().unwrap();
        let config = GameConfig::new(dir.path().join("missing.txt"));
        let words = WordList::from_slice(5, &["crane", "slate"]);
        let mut session = Session::with_target(config, words, "crane").unwrap();

        let outcome = session.submit("crane").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert!(outcome.persistence_error.is_none());
    }

    #[test]
    fn keyboard_hints_accumulate() {
        let (_dir, mut session) = setup("crane");
        session.submit("trace").unwrap();
        session.submit("grate").unwrap();

        let hints = session.state().hints();
        assert_eq!(hints.get('r'), Some(Exact));
        assert_eq!(hints.get('c'), Some(Present));
        assert_eq!(hints.get('t'), Some(Absent));
        assert_eq!(hints.get('g'), Some(Absent));
        assert_eq!(hints.get('z'), None);
    }

    #[test]
    fn restart_resets_state_and_draws_from_list() {
        let (_dir, mut session) = setup("crane");
        session.submit("crane").unwrap();
        assert_eq!(session.status(), GameStatus::Won);

        let mut rng = StdRng::seed_from_u64(3);
        session.restart(&mut rng).unwrap();

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.state().guesses_used(), 0);
        assert!(session.state().hints().is_empty());
        assert!(session.state().history().is_empty());
        // The solved word was discarded and can no longer be drawn
        assert_ne!(session.target().text(), "crane");
        assert!(session.words().contains(session.target().text()));
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let words = WordList::from_slice(5, &["crane", "slate", "irate", "grate"]);

        let a = Session::new(
            GameConfig::default(),
            words.clone(),
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();
        let b = Session::new(GameConfig::default(), words, &mut StdRng::seed_from_u64(99)).unwrap();

        assert_eq!(a.target(), b.target());
    }

    #[test]
    fn empty_list_has_no_words() {
        let result = Session::new(
            GameConfig::default(),
            WordList::empty(5),
            &mut StdRng::seed_from_u64(1),
        );
        assert!(matches!(result, Err(GameError::NoWords { length: 5, .. })));
    }

    #[test]
    fn load_from_missing_file_has_no_words() {
        let dir = tempdir().unwrap();
        let config = GameConfig::new(dir.path().join("words.txt"));
        let result = Session::load(config, &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(GameError::NoWords { .. })));
    }

    #[test]
    fn restart_after_last_word_solved_has_no_words() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "crane\n").unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        let mut session = Session::load(GameConfig::new(&path), &mut rng).unwrap();
        session.submit("crane").unwrap();

        assert!(matches!(
            session.restart(&mut rng),
            Err(GameError::NoWords { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn with_target_rejects_wrong_length() {
        let result = Session::with_target(
            GameConfig::default(),
            WordList::empty(5),
            "planet",
        );
        assert!(matches!(result, Err(GameError::InvalidTarget(_))));
    }

    #[test]
    fn rejects_list_of_another_length() {
        let words = WordList::from_slice(4, &["quit", "exit"]);

        let result = Session::new(
            GameConfig::default(),
            words.clone(),
            &mut StdRng::seed_from_u64(1),
        );
        assert!(matches!(result, Err(GameError::NoWords { length: 5, .. })));

        let result = Session::with_target(GameConfig::default(), words, "crane");
        assert!(matches!(result, Err(GameError::NoWords { length: 5, .. })));
    }

    #[test]
    fn with_target_rejects_unlisted_target() {
        let words = WordList::from_slice(5, &["crane", "slate"]);

        let result = Session::with_target(GameConfig::default(), words, "plumb");
        assert!(matches!(
            result,
            Err(GameError::TargetNotInList(ref w)) if w == "plumb"
        ));
    }
}
