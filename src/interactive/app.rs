//! TUI application state and logic

use crate::game::{GuessError, Round, RoundError, RoundStatus};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    source: &'a WordSource,
    pub round: Round,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_rounds: usize,
    pub rounds_won: usize,
    /// Wins indexed by wrong guesses used
    pub miss_distribution: [usize; 11],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(source: &'a WordSource) -> Self {
        Self {
            source,
            round: Round::new(source.pick_word().clone()),
            input_mode: InputMode::Guessing,
            messages: vec![
                Message {
                    text: "Welcome! Guess the word one letter at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Ten misses complete the drawing and end the round.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Submit one letter from the keyboard
    pub fn submit_letter(&mut self, letter: char) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        match self.round.guess(&letter.to_string()) {
            Err(RoundError::Guess(GuessError::InvalidInput)) => {
                self.add_message("Letters only!", MessageStyle::Error);
            }
            Err(RoundError::Guess(GuessError::AlreadyGuessed(tried))) => {
                self.add_message(
                    &format!("You already tried '{tried}'"),
                    MessageStyle::Error,
                );
            }
            Err(RoundError::Reveal(e)) => {
                // Round should have been replaced before this can happen
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Ok(outcome) => {
                if outcome.correct {
                    self.add_message(
                        &format!("'{}' is in the word!", outcome.letter),
                        MessageStyle::Success,
                    );
                } else if let Some(step) = outcome.revealed {
                    self.add_message(
                        &format!("No '{}' - the {step} appears", outcome.letter),
                        MessageStyle::Error,
                    );
                }

                match outcome.status {
                    RoundStatus::InProgress => {}
                    RoundStatus::Won => self.finish_won_round(),
                    RoundStatus::Lost => self.finish_lost_round(),
                }
            }
        }
    }

    fn finish_won_round(&mut self) {
        self.stats.total_rounds += 1;
        self.stats.rounds_won += 1;

        let misses = self.round.tracker().failed().len();
        if let Some(slot) = self.stats.miss_distribution.get_mut(misses) {
            *slot += 1;
        }

        self.input_mode = InputMode::RoundOver;

        let celebration = match misses {
            0 => "FLAWLESS! Not a single miss!",
            1..=3 => "GREAT JOB! The figure barely started!",
            4..=6 => "NICE WORK! That was getting close!",
            _ => "PHEW! Saved at the last moment!",
        };

        self.add_message(
            &format!("You found the word {}!", self.round.word().text()),
            MessageStyle::Success,
        );
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
    }

    fn finish_lost_round(&mut self) {
        self.stats.total_rounds += 1;
        self.input_mode = InputMode::RoundOver;

        self.add_message(
            &format!("The word was {}, try again!", self.round.word().text()),
            MessageStyle::Error,
        );
        self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a fresh round with a newly picked word
    pub fn new_round(&mut self) {
        self.round = Round::new(self.source.pick_word().clone());
        self.input_mode = InputMode::Guessing;
        self.messages.clear();
        self.add_message("New word picked. Good luck!", MessageStyle::Info);
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
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

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_round();
                    }
                    _ => {
                        // Round is over, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_round();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.submit_letter(c);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
