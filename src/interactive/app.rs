//! TUI application state and logic

use crate::error::GameError;
use crate::game::{GameStatus, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, status: GameStatus, guesses_used: usize) {
        self.total_games += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
            if self.guess_distribution.len() <= guesses_used {
                self.guess_distribution.resize(guesses_used + 1, 0);
            }
            self.guess_distribution[guesses_used] += 1;
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session, rng: StdRng) -> Self {
        let length = session.config().word_length;
        let max_guesses = session.config().max_guesses;

        Self {
            session,
            rng,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Guess the {length}-letter word in {max_guesses} tries."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();

        let outcome = match self.session.submit(&input) {
            Ok(outcome) => outcome,
            Err(GameError::Validation(err)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.input_mode = InputMode::GameOver;
                return;
            }
        };

        self.input_buffer.clear();
        let target = self.session.target().text().to_uppercase();

        match outcome.status {
            GameStatus::Won => {
                self.stats.record(outcome.status, outcome.guesses_used);
                self.input_mode = InputMode::GameOver;

                let celebration = match outcome.guesses_used {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(
                    &format!("Correct! The word was {target}"),
                    MessageStyle::Success,
                );
                self.add_message(celebration, MessageStyle::Success);

                if let Some(err) = outcome.persistence_error {
                    self.add_message(
                        &format!("Couldn't remove word from file: {err}"),
                        MessageStyle::Error,
                    );
                }
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.record(outcome.status, outcome.guesses_used);
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("Out of guesses. The word was {target}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress => {
                let remaining = self.session.guesses_remaining();
                self.add_message(
                    &format!("{remaining} guesses remaining"),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        if let Err(err) = self.session.restart(&mut self.rng) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            self.input_mode = InputMode::GameOver;
            return;
        }

        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Append a typed letter, ignoring anything past the word length
    pub fn push_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.session.config().word_length
        {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') => {
                    self.new_game();
                }
                _ => {
                    // Game is over, ignore other keys
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c)
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
                {
                    self.push_letter(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    self.submit_guess();
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
