//! Terminal client for a remote tic-tac-toe game server.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tictactoe_tui::app::App;
use tictactoe_tui::cli::Cli;
use tictactoe_tui::client::RemoteClient;
use tictactoe_tui::sync::RemoteSync;
use tictactoe_tui::ui;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to file, the terminal belongs to the TUI.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(server_url = %cli.server_url, "Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let authority = Arc::new(RemoteClient::new(cli.server_url));
    let remote = RemoteSync::new(authority, event_tx);
    let mut app = App::new(remote, event_rx);
    let _ = app.initialize();

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Event loop error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Single-threaded event loop: draw, drain server responses, poll keys.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Apply any authority responses that arrived since the last frame.
        app.poll_events();

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        let _ = app.reset();
                    }
                    KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        let (row, col) = app.cursor();
                        let _ = app.handle_cell_click(row, col);
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(digit) = c.to_digit(10) {
                            if (1..=9).contains(&digit) {
                                let index = digit as usize - 1;
                                let _ = app.handle_cell_click(index / 3, index % 3);
                            }
                        }
                    }
                    code => app.move_cursor(code),
                }
            }
        }
    }
}
