//! Terminal output formatting
//!
//! Display utilities for text mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_score_result};
