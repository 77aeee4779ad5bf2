//! Display functions for text mode and one-shot commands

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, score_to_emoji};
use crate::core::{Classification, KeyboardHints, Score, Word};
use crate::game::Session;
use colored::{ColoredString, Colorize};

/// Color one letter tile by its classification
#[must_use]
pub fn colorize_letter(letter: char, classification: Option<Classification>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match classification {
        Some(Classification::Exact) => tile.black().on_green().bold(),
        Some(Classification::Present) => tile.black().on_yellow().bold(),
        Some(Classification::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Render a scored guess as colored tiles
#[must_use]
pub fn format_guess_row(guess: &Word, score: &Score) -> String {
    guess
        .text()
        .chars()
        .zip(score.iter())
        .map(|(letter, classification)| colorize_letter(letter, Some(classification)).to_string())
        .collect()
}

/// Print the board: played rows, then empty rows up to the guess limit
pub fn print_board(session: &Session) {
    let state = session.state();
    let width = session.config().word_length;

    println!();
    for (guess, score) in state.history() {
        println!("  {}  {}", format_guess_row(guess, score), score_to_emoji(score));
    }
    for _ in state.history().len()..session.config().max_guesses {
        println!("  {}", " · ".repeat(width).bright_black());
    }

    println!(
        "\n  Guesses: {} {}/{}",
        create_progress_bar(
            state.guesses_used(),
            session.config().max_guesses,
            session.config().max_guesses
        )
        .cyan(),
        state.guesses_used(),
        session.config().max_guesses
    );
}

/// Print the keyboard with each letter colored by its best hint
pub fn print_keyboard(hints: &KeyboardHints) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .chars()
            .map(|letter| colorize_letter(letter, hints.get(letter)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the result of scoring one guess against a target
pub fn print_score_result(target: &Word, guess: &Word, score: &Score) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        target.text().to_uppercase().bright_yellow().bold(),
        guess.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", format_guess_row(guess, score));
    println!("  {}", score_to_emoji(score));
    println!("  {}\n", score.to_codes());

    if score.is_perfect() {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        println!(
            "{} exact, {} present",
            score.count_exact().to_string().green(),
            score.count_present().to_string().yellow()
        );
    }
}
