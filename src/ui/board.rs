//! Tic-tac-toe grid rendering.

use crate::app::App;
use crate::protocol::{Cell, Player};
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

/// Renders the 3x3 grid with cursor and winning highlights.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme().palette();
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], app, 0, &palette);
    render_separator(f, rows[1], &palette);
    render_row(f, rows[2], app, 1, &palette);
    render_separator(f, rows[3], &palette);
    render_row(f, rows[4], app, 2, &palette);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, row: usize, palette: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_cell(f, cols[0], app, row, 0, palette);
    render_vertical_sep(f, cols[1], palette);
    render_cell(f, cols[2], app, row, 1, palette);
    render_vertical_sep(f, cols[3], palette);
    render_cell(f, cols[4], app, row, 2, palette);
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, row: usize, col: usize, palette: &Palette) {
    let (text, mut style) = match app.board_cell(row, col) {
        Cell::Empty => (
            format!("{}", row * 3 + col + 1),
            Style::default().fg(palette.grid),
        ),
        Cell::Mark(Player::X) => (
            "X".to_string(),
            Style::default()
                .fg(palette.x_mark)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Mark(Player::O) => (
            "O".to_string(),
            Style::default()
                .fg(palette.o_mark)
                .add_modifier(Modifier::BOLD),
        ),
    };

    if app.is_winning_cell(row, col) {
        style = style.fg(palette.winning).add_modifier(Modifier::BOLD);
    }
    if app.cursor() == (row, col) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(palette.grid));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(palette.grid))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
