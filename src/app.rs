//! Application state and logic.
//!
//! [`App`] is the controller the design notes call for: it owns the
//! mirrored game state, the session tally, the active flag, and the theme
//! flag, and is the only writer to any of them. All authoritative state
//! transitions live on the server; each response fully replaces the mirror.

use crate::protocol::{Cell, GameState, Player};
use crate::sync::{RemoteSync, ServerEvent};
use crate::theme::ThemeMode;
use crossterm::event::KeyCode;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Session-local running score, never sent to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl ScoreTally {
    fn record(&mut self, winner: Option<Player>) {
        match winner {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

/// Status banner below the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// No state received yet.
    Connecting,
    /// Game running, carrying the server's move count.
    InProgress {
        /// Moves played so far.
        moves: u32,
    },
    /// Game over with a winner.
    Won(Player),
    /// Game over with no winner.
    Draw,
}

/// Board renderer & remote-sync controller.
pub struct App {
    remote: RemoteSync,
    events: mpsc::UnboundedReceiver<ServerEvent>,
    state: Option<GameState>,
    banner: Banner,
    game_active: bool,
    scores: ScoreTally,
    theme: ThemeMode,
    cursor: (usize, usize),
}

impl App {
    /// Creates a controller wired to the given dispatcher and its event
    /// channel.
    pub fn new(remote: RemoteSync, events: mpsc::UnboundedReceiver<ServerEvent>) -> Self {
        Self {
            remote,
            events,
            state: None,
            banner: Banner::Connecting,
            game_active: true,
            scores: ScoreTally::default(),
            theme: ThemeMode::default(),
            cursor: (1, 1),
        }
    }

    /// Requests the authoritative state, once the grid is up.
    pub fn initialize(&self) -> JoinHandle<()> {
        self.remote.refresh()
    }

    /// Relays a click on the given square to the server.
    ///
    /// Gated on the local active flag; the server remains the authority on
    /// move legality. Returns `None` when the click is swallowed.
    pub fn handle_cell_click(&self, row: usize, col: usize) -> Option<JoinHandle<()>> {
        if !self.game_active {
            debug!(row, col, "Ignoring click, game is not active");
            return None;
        }
        Some(self.remote.submit_move(row, col))
    }

    /// Asks the server for a fresh game. The tally carries across games.
    pub fn reset(&self) -> JoinHandle<()> {
        self.remote.submit_reset()
    }

    /// Flips the visual mode. Purely local, no server interaction.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.flipped();
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = crate::input::move_cursor(self.cursor, key);
    }

    /// Drains pending authority responses. Called once per frame.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    /// Applies one authority response to the rendered state.
    pub fn handle_event(&mut self, event: ServerEvent) {
        debug!(?event, "Handling server event");
        match event {
            ServerEvent::Synced(state) => self.apply_state(state),
            ServerEvent::GameReset(state) => {
                self.game_active = true;
                self.apply_state(state);
            }
        }
    }

    fn apply_state(&mut self, state: GameState) {
        if state.game_over {
            // Tally bumps only on the active -> over transition, so seeing
            // the same finished game again cannot double-count.
            if self.game_active {
                self.scores.record(state.winner);
            }
            self.game_active = false;
            self.banner = match state.winner {
                Some(player) => Banner::Won(player),
                None => Banner::Draw,
            };
        } else {
            self.banner = Banner::InProgress { moves: state.moves };
        }
        self.state = Some(state);
    }

    /// The last state received from the server, if any.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// The cell at (row, col), empty before the first sync.
    pub fn board_cell(&self, row: usize, col: usize) -> Cell {
        self.state
            .as_ref()
            .map(|state| state.cell(row, col))
            .unwrap_or_default()
    }

    /// Whether (row, col) carries the winner's mark in a finished game.
    ///
    /// Marks all of the winner's squares, not just the winning line.
    pub fn is_winning_cell(&self, row: usize, col: usize) -> bool {
        let Some(state) = &self.state else {
            return false;
        };
        match state.winner {
            Some(winner) if state.game_over => state.cell(row, col) == Cell::Mark(winner),
            _ => false,
        }
    }

    /// The player to move, once known.
    pub fn current_player(&self) -> Option<Player> {
        self.state.as_ref().map(|state| state.current_player)
    }

    /// Whether move intents are currently accepted.
    pub fn game_active(&self) -> bool {
        self.game_active
    }

    /// The session tally.
    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    /// The current status banner.
    pub fn banner(&self) -> Banner {
        self.banner
    }

    /// The current visual mode.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// The keyboard cursor position.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }
}
