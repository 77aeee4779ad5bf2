//! Command implementations

pub mod remove;
pub mod score;
pub mod simple;

pub use remove::{RemoveResult, remove_word};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
