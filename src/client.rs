//! HTTP client for the remote game authority.

use crate::protocol::{ApiResponse, GameState, MoveIntent};
use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

/// The remote service that owns game rules, turn order, and win/draw
/// determination.
///
/// A trait so the controller can be driven by a scripted stand-in under
/// test; the real implementation is [`RemoteClient`].
#[async_trait::async_trait]
pub trait Authority: Send + Sync {
    /// Fetches the current game state.
    async fn fetch_state(&self) -> Result<GameState>;

    /// Submits a move intent for the given square.
    async fn submit_move(&self, row: usize, col: usize) -> Result<GameState>;

    /// Asks the authority to start a fresh game.
    async fn submit_reset(&self) -> Result<GameState>;
}

/// reqwest-backed client for the game server's REST API.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Unwraps the server envelope, treating `success: false` the same as
    /// a transport failure.
    fn into_state(response: ApiResponse) -> Result<GameState> {
        if !response.success {
            anyhow::bail!(
                "server rejected request: {}",
                response.message.as_deref().unwrap_or("no reason given")
            );
        }
        response
            .state
            .context("success response missing game state")
    }
}

#[async_trait::async_trait]
impl Authority for RemoteClient {
    #[instrument(skip(self))]
    async fn fetch_state(&self) -> Result<GameState> {
        debug!("Fetching game state");

        let response: ApiResponse = self
            .client
            .get(format!("{}/api/state", self.base_url))
            .send()
            .await?
            .json()
            .await
            .context("invalid state response")?;

        Self::into_state(response)
    }

    #[instrument(skip(self))]
    async fn submit_move(&self, row: usize, col: usize) -> Result<GameState> {
        info!(row, col, "Sending move to server");

        let response: ApiResponse = self
            .client
            .post(format!("{}/api/move", self.base_url))
            .json(&MoveIntent { row, col })
            .send()
            .await?
            .json()
            .await
            .context("invalid move response")?;

        Self::into_state(response)
    }

    #[instrument(skip(self))]
    async fn submit_reset(&self) -> Result<GameState> {
        info!("Requesting game reset");

        let response: ApiResponse = self
            .client
            .post(format!("{}/api/reset", self.base_url))
            .send()
            .await?
            .json()
            .await
            .context("invalid reset response")?;

        Self::into_state(response)
    }
}
