//! TUI rendering with ratatui
//!
//! Hangman panels: gallows drawing, masked word, letter board, messages.

use super::app::{App, InputMode, MessageStyle};
use crate::game::{MAX_WRONG_GUESSES, RoundStatus};
use crate::output::formatters::{gallows_lines, masked_line, wrong_guess_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Gallows
            Constraint::Percentage(55), // Word, letters, messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Status bar
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN - Guess the Word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let figure_color = match app.round.status() {
        RoundStatus::Lost => Color::Red,
        RoundStatus::Won => Color::Green,
        RoundStatus::InProgress => Color::White,
    };

    let mut lines: Vec<Line> = gallows_lines(app.round.sequencer())
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(figure_color))))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Misses: {}",
        wrong_guess_bar(app.round.tracker().failed().len(), MAX_WRONG_GUESSES)
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Masked word
            Constraint::Length(5), // Letter board
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_letter_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    // After a loss the full word is shown in place of the mask
    let (text, color) = match app.round.status() {
        RoundStatus::Lost => {
            let revealed: Vec<char> = app.round.word().text().chars().collect();
            (masked_line(&revealed), Color::Red)
        }
        _ => (masked_line(&app.round.masked()), Color::Yellow),
    };

    let word = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(word, area);
}

fn render_letter_board(f: &mut Frame, app: &App, area: Rect) {
    let tracker = app.round.tracker();

    let row = |letters: std::ops::RangeInclusive<u8>| -> Line {
        let mut spans = Vec::new();
        for letter in letters {
            let style = if tracker.correct().contains(letter) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if tracker.failed().contains(letter) {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("{} ", letter as char), style));
        }
        Line::from(spans)
    };

    let board = Paragraph::new(vec![row(b'A'..=b'M'), row(b'N'..=b'Z')])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.total_rounds,
        if app.stats.total_rounds > 0 {
            app.stats.rounds_won as f64 / app.stats.total_rounds as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let left_text = format!(
        "Wrong guesses left: {}",
        app.round.tracker().wrong_guesses_left()
    );
    let left = Paragraph::new(left_text).alignment(Alignment::Center);
    f.render_widget(left, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "n: New Word | q: Quit",
        InputMode::Guessing => "A-Z: Guess | Ctrl-N: New Word | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
