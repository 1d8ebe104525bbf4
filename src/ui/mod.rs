//! UI rendering using ratatui.

mod board;

use crate::app::{App, Banner};
use crate::protocol::Player;
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let palette = app.theme().palette();

    // Paint the themed surface before anything else.
    let surface = Block::default().style(Style::default().bg(palette.background).fg(palette.text));
    f.render_widget(surface, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    f.render_widget(turn_indicator(app, &palette), chunks[1]);

    render_board(f, chunks[2], app);

    f.render_widget(status_banner(app, &palette), chunks[3]);

    let scores = app.scores();
    let score_line = format!(
        "Player X: {}   Player O: {}   Draws: {}",
        scores.x_wins, scores.o_wins, scores.draws
    );
    let score_row = Paragraph::new(score_line)
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(score_row, chunks[4]);

    let help_line = format!(
        "↑↓←→ select | Enter/1-9 place | R: New Game | T: {} | Q: Quit",
        app.theme().toggle_label()
    );
    let help = Paragraph::new(help_line)
        .style(Style::default().fg(palette.grid))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[5]);
}

fn turn_indicator(app: &App, palette: &Palette) -> Paragraph<'static> {
    let (text, color) = match app.current_player() {
        Some(Player::X) => ("Player X's Turn".to_string(), palette.x_mark),
        Some(Player::O) => ("Player O's Turn".to_string(), palette.o_mark),
        None => ("Connecting to server...".to_string(), palette.grid),
    };
    Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn status_banner(app: &App, palette: &Palette) -> Paragraph<'static> {
    let (text, color) = match app.banner() {
        Banner::Connecting => ("Waiting for game state...".to_string(), palette.grid),
        Banner::InProgress { moves } => (
            format!("Game in progress... Move: {moves}"),
            palette.in_progress,
        ),
        Banner::Won(Player::X) => ("Player X Wins! 🎉".to_string(), palette.x_mark),
        Banner::Won(Player::O) => ("Player O Wins! 🎉".to_string(), palette.o_mark),
        Banner::Draw => ("It's a Draw! 🤝".to_string(), palette.draw),
    };
    Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"))
}
