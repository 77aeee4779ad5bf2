//! Game sessions
//!
//! The turn state machine: validate a guess, score it, update the session
//! state and, on a win, remove the solved word from the word file.

mod session;

pub use session::{GameStatus, Session, SessionState, TurnOutcome};
