//! Simple interactive CLI mode
//!
//! Text-based game without the TUI

use crate::error::GameError;
use crate::game::{GameStatus, Session};
use crate::output::{print_board, print_keyboard};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading user input fails or if a restart finds no
/// words left to play.
pub fn run_simple<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> anyhow::Result<()> {
    play(session, rng, &mut io::stdin().lock())
}

/// Game loop reading guesses and commands from `input`
///
/// Commands start with ':' so they can never collide with a guess.
fn play<R: Rng + ?Sized, B: BufRead>(
    session: &mut Session,
    rng: &mut R,
    input: &mut B,
) -> anyhow::Result<()> {
    let length = session.config().word_length;
    let max_guesses = session.config().max_guesses;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Text Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {length}-letter word in {max_guesses} tries.");
    println!("  - {} letter is in the right spot", " G ".black().on_green());
    println!("  - {} letter is in the word elsewhere", " Y ".black().on_yellow());
    println!("  - {} letter is not in the word\n", " - ".white().on_bright_black());
    println!("Commands: ':quit' to exit, ':new' for a new game");
    print_board(session);

    loop {
        if session.status().is_terminal() {
            if !play_again(session, input)? {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            session.restart(rng)?;
            println!("\n🔄 New game started!");
            print_board(session);
            continue;
        }

        let turn = session.state().guesses_used() + 1;
        let Some(line) = get_user_input(input, &format!("Guess {turn}/{max_guesses}"))? else {
            println!();
            return Ok(());
        };

        if let Some(command) = line.strip_prefix(':') {
            match command.trim().to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    session.restart(rng)?;
                    println!("\n🔄 New game started!");
                    print_board(session);
                }
                other => {
                    println!("{}\n", format!("❌ Unknown command: :{other}").red());
                }
            }
            continue;
        }

        match session.submit(&line) {
            Ok(outcome) => {
                print_board(session);
                print_keyboard(session.state().hints());

                if let Some(err) = outcome.persistence_error {
                    println!("{}", format!("⚠ Couldn't remove word from file: {err}").yellow());
                }
            }
            Err(GameError::Validation(err)) => {
                println!("{}\n", format!("❌ {err}").red());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Announce the finished game and ask whether to continue
fn play_again<B: BufRead>(session: &Session, input: &mut B) -> anyhow::Result<bool> {
    let target = session.target().text().to_uppercase();

    match session.status() {
        GameStatus::Won => {
            let used = session.state().guesses_used();
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "  {} The word was {}",
                "🎉 Correct!".bright_green().bold(),
                target.bright_yellow().bold()
            );
            println!(
                "  Solved in {} {}",
                used.to_string().bright_cyan().bold(),
                if used == 1 { "guess" } else { "guesses" }
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
        GameStatus::Lost => {
            println!(
                "\n{} The word was {}",
                "Out of guesses.".red().bold(),
                target.bright_yellow().bold()
            );
        }
        GameStatus::InProgress => return Ok(true),
    }

    let answer = get_user_input(input, "Play again? (yes/no)")?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input<B: BufRead>(input: &mut B, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use std::io::Cursor;
    use tempfile::{TempDir, tempdir};

    fn four_letter_session(target: &str) -> (TempDir, Session) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "quit\nexit\n").unwrap();

        let config = GameConfig::new(&path).with_word_length(4);
        let words = config.source().load().unwrap();
        let session = Session::with_target(config, words, target).unwrap();
        (dir, session)
    }

    fn play_lines(session: &mut Session, lines: &str) {
        let mut rng = StdRng::seed_from_u64(2);
        play(session, &mut rng, &mut Cursor::new(lines.as_bytes())).unwrap();
    }

    #[test]
    fn command_words_are_scored_as_guesses() {
        let (dir, mut session) = four_letter_session("quit");

        play_lines(&mut session, "exit\nquit\nno\n");

        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.state().guesses_used(), 2);
        let content = fs::read_to_string(dir.path().join("words.txt")).unwrap();
        assert_eq!(content, "exit\n");
    }

    #[test]
    fn colon_quit_leaves_game_untouched() {
        let (_dir, mut session) = four_letter_session("quit");

        play_lines(&mut session, ":quit\nquit\n");

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.state().guesses_used(), 0);
    }

    #[test]
    fn colon_new_restarts_mid_game() {
        let (_dir, mut session) = four_letter_session("quit");

        play_lines(&mut session, "exit\n:new\n:bogus\n");

        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.state().history().is_empty());
    }

    #[test]
    fn play_again_draws_a_new_target() {
        let (_dir, mut session) = four_letter_session("quit");

        // Input ends during the second game
        play_lines(&mut session, "quit\nyes\n");

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.target().text(), "exit");
    }

    #[test]
    fn invalid_guess_does_not_end_the_loop() {
        let (_dir, mut session) = four_letter_session("quit");

        play_lines(&mut session, "zzzz\nexi7\nexit\n");

        assert_eq!(session.state().guesses_used(), 1);
        assert_eq!(session.status(), GameStatus::InProgress);
    }
}
