//! Bridges the event loop to the remote authority.
//!
//! Each intent runs on its own task; successful responses come back through
//! an unbounded channel and are drained once per frame. Failures (transport
//! errors and rejected requests alike) are logged and absorbed, leaving the
//! screen in its last-rendered state.

use crate::client::Authority;
use crate::protocol::GameState;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

/// Authority responses delivered back to the controller.
#[derive(Debug, Clone)]
pub enum ServerEvent {
    /// A state or move response: mirror it.
    Synced(GameState),
    /// A reset response: re-enable input, then mirror the fresh state.
    GameReset(GameState),
}

/// Dispatches intents to the authority without blocking the event loop.
///
/// No in-flight guard: rapid repeated intents may overlap, and the server
/// stays the authority on which of them count.
#[derive(Clone)]
pub struct RemoteSync {
    authority: Arc<dyn Authority>,
    events: mpsc::UnboundedSender<ServerEvent>,
}

impl RemoteSync {
    /// Creates a dispatcher that delivers responses on `events`.
    pub fn new(authority: Arc<dyn Authority>, events: mpsc::UnboundedSender<ServerEvent>) -> Self {
        Self { authority, events }
    }

    /// Requests the current state from the authority.
    pub fn refresh(&self) -> JoinHandle<()> {
        let authority = Arc::clone(&self.authority);
        let events = self.events.clone();
        tokio::spawn(async move {
            match authority.fetch_state().await {
                Ok(state) => {
                    let _ = events.send(ServerEvent::Synced(state));
                }
                Err(error) => warn!(%error, "Failed to fetch game state"),
            }
        })
    }

    /// Sends a move intent for (row, col).
    pub fn submit_move(&self, row: usize, col: usize) -> JoinHandle<()> {
        let authority = Arc::clone(&self.authority);
        let events = self.events.clone();
        tokio::spawn(async move {
            match authority.submit_move(row, col).await {
                Ok(state) => {
                    let _ = events.send(ServerEvent::Synced(state));
                }
                Err(error) => warn!(%error, row, col, "Move was not accepted"),
            }
        })
    }

    /// Asks the authority for a fresh game.
    pub fn submit_reset(&self) -> JoinHandle<()> {
        let authority = Arc::clone(&self.authority);
        let events = self.events.clone();
        tokio::spawn(async move {
            match authority.submit_reset().await {
                Ok(state) => {
                    let _ = events.send(ServerEvent::GameReset(state));
                }
                Err(error) => warn!(%error, "Reset was not accepted"),
            }
        })
    }
}
