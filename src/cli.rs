//! Command-line interface for the tic-tac-toe client.

use clap::Parser;

/// Tic-Tac-Toe TUI - terminal client for a remote game server
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Terminal client for a remote tic-tac-toe server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the game server
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server_url: String,

    /// File to write diagnostic logs to
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: std::path::PathBuf,
}
