//! Tic-Tac-Toe terminal client.
//!
//! A thin rendering layer over a remote game authority: the server owns
//! move legality, turn order, and win/draw determination, while this crate
//! builds the grid view, relays player intents over HTTP, and mirrors each
//! returned state into the screen. A session-local win/draw tally and a
//! light/dark theme toggle live entirely on this side.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod client;
pub mod input;
pub mod protocol;
pub mod sync;
pub mod theme;
pub mod ui;

// Crate-level exports - controller
pub use app::{App, Banner, ScoreTally};

// Crate-level exports - remote authority
pub use client::{Authority, RemoteClient};
pub use sync::{RemoteSync, ServerEvent};

// Crate-level exports - wire types
pub use protocol::{ApiResponse, Cell, GameState, MoveIntent, Player};

// Crate-level exports - visual mode
pub use theme::{Palette, ThemeMode};
