//! Wire types shared with the remote game authority.
//!
//! These must match the server's JSON byte-for-field: the board is a 3x3
//! array of `"X"`, `"O"`, or an empty-string marker, and every endpoint
//! wraps its payload in a `{ success, state }` envelope.

use serde::{Deserialize, Serialize};

/// Player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// The mark as it appears on the wire and on screen.
    pub fn as_str(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One square of the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Mark(Player),
}

// The authority marks empty squares with "" (or null), not a tagged enum,
// so Cell carries hand-written serde impls.
impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Cell::Empty => serializer.serialize_str(""),
            Cell::Mark(player) => serializer.serialize_str(player.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(Cell::Empty),
            Some("X") => Ok(Cell::Mark(Player::X)),
            Some("O") => Ok(Cell::Mark(Player::O)),
            Some(other) => Err(serde::de::Error::custom(format!(
                "unknown cell marker {other:?}"
            ))),
        }
    }
}

/// Authoritative game state, mirrored locally on every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// 3x3 board in row-major order.
    pub board: [[Cell; 3]; 3],
    /// Player whose turn it is.
    pub current_player: Player,
    /// Whether the game has ended.
    pub game_over: bool,
    /// Winning player. Only meaningful when `game_over` is true; absent
    /// with `game_over` true means a draw.
    pub winner: Option<Player>,
    /// Number of moves played so far.
    pub moves: u32,
}

impl GameState {
    /// The cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board[row][col]
    }
}

/// Body of a move request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveIntent {
    /// Target row, 0-2.
    pub row: usize,
    /// Target column, 0-2.
    pub col: usize,
}

/// Envelope returned by every authority endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Whether the server accepted the request.
    pub success: bool,
    /// The resulting game state; absent on rejection.
    #[serde(default)]
    pub state: Option<GameState>,
    /// Human-readable rejection reason, if any.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_in_progress_state() {
        let state: GameState = serde_json::from_value(json!({
            "board": [["X", "", ""], ["", "O", ""], ["", "", ""]],
            "current_player": "X",
            "game_over": false,
            "winner": null,
            "moves": 2
        }))
        .unwrap();

        assert_eq!(state.cell(0, 0), Cell::Mark(Player::X));
        assert_eq!(state.cell(1, 1), Cell::Mark(Player::O));
        assert_eq!(state.cell(2, 2), Cell::Empty);
        assert_eq!(state.current_player, Player::X);
        assert!(!state.game_over);
        assert_eq!(state.winner, None);
        assert_eq!(state.moves, 2);
    }

    #[test]
    fn test_null_and_empty_string_both_mean_empty() {
        let state: GameState = serde_json::from_value(json!({
            "board": [[null, "", "X"], ["", "", ""], ["", "", ""]],
            "current_player": "O",
            "game_over": false,
            "winner": null,
            "moves": 1
        }))
        .unwrap();

        assert_eq!(state.cell(0, 0), Cell::Empty);
        assert_eq!(state.cell(0, 1), Cell::Empty);
        assert_eq!(state.cell(0, 2), Cell::Mark(Player::X));
    }

    #[test]
    fn test_unknown_marker_is_rejected() {
        let result: Result<Cell, _> = serde_json::from_value(json!("Z"));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_won_state() {
        let state: GameState = serde_json::from_value(json!({
            "board": [["X", "X", "X"], ["O", "O", ""], ["", "", ""]],
            "current_player": "X",
            "game_over": true,
            "winner": "X",
            "moves": 5
        }))
        .unwrap();

        assert!(state.game_over);
        assert_eq!(state.winner, Some(Player::X));
    }

    #[test]
    fn test_rejection_envelope_has_no_state() {
        let response: ApiResponse = serde_json::from_value(json!({
            "success": false,
            "message": "Invalid move"
        }))
        .unwrap();

        assert!(!response.success);
        assert!(response.state.is_none());
        assert_eq!(response.message.as_deref(), Some("Invalid move"));
    }

    #[test]
    fn test_cell_serializes_to_wire_markers() {
        assert_eq!(serde_json::to_value(Cell::Empty).unwrap(), json!(""));
        assert_eq!(
            serde_json::to_value(Cell::Mark(Player::O)).unwrap(),
            json!("O")
        );
    }
}
