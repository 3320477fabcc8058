//! Request boundary: flattened board in, single encoded move out
//!
//! Requests and responses are JSON:
//!
//! ```json
//! {"board": [0, 0, 1, ...], "rows": 15, "cols": 15, "depth": 2, "win_streak": 5}
//! {"move": 112, "winner": null}
//! ```
//!
//! All input checking happens here; the engine below assumes a well-formed
//! grid.

use serde::{Deserialize, Serialize};

use crate::board::{Grid, Pos, Stone, DEFAULT_SIZE, DEFAULT_WIN_STREAK};
use crate::engine::{AIEngine, DEFAULT_DEPTH};
use crate::error::{GomokuError, Result};
use crate::rules::{check_win, find_winner};
use crate::search::TieBreak;

/// Smallest accepted board side
pub const MIN_SIDE: usize = 5;
/// Largest accepted board side
pub const MAX_SIDE: usize = 25;
/// Deepest accepted search
pub const MAX_DEPTH: u32 = 6;

fn default_side() -> usize {
    DEFAULT_SIZE
}

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

fn default_win_streak() -> usize {
    DEFAULT_WIN_STREAK
}

/// One "pick a move for the AI" request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Row-major cell codes: 0 empty, 1 human, 2 AI
    pub board: Vec<u8>,
    #[serde(default = "default_side")]
    pub rows: usize,
    #[serde(default = "default_side")]
    pub cols: usize,
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[serde(default = "default_win_streak")]
    pub win_streak: usize,
}

impl MoveRequest {
    /// Check dimensions, depth and board contents, returning the decoded grid.
    pub fn validate(&self) -> Result<Grid> {
        let side = MIN_SIDE..=MAX_SIDE;
        if !side.contains(&self.rows) || !side.contains(&self.cols) {
            return Err(GomokuError::InvalidInput(format!(
                "board size {}x{} outside {}..={}",
                self.rows, self.cols, MIN_SIDE, MAX_SIDE
            )));
        }

        let longest = self.rows.max(self.cols);
        if self.win_streak < 3 || self.win_streak > longest {
            return Err(GomokuError::InvalidInput(format!(
                "win_streak {} must be between 3 and {}",
                self.win_streak, longest
            )));
        }

        if self.depth > MAX_DEPTH {
            return Err(GomokuError::InvalidInput(format!(
                "depth {} exceeds {}",
                self.depth, MAX_DEPTH
            )));
        }

        // Length and cell codes are checked while decoding
        Grid::from_flat(&self.board, self.rows, self.cols, self.win_streak)
    }
}

/// Game outcome as reported to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// Human (PlayerOne)
    #[serde(rename = "x")]
    Human,
    /// AI (PlayerTwo)
    #[serde(rename = "o")]
    Ai,
    #[serde(rename = "draw")]
    Draw,
}

impl Winner {
    fn from_stone(stone: Stone) -> Option<Self> {
        match stone {
            Stone::PlayerOne => Some(Winner::Human),
            Stone::PlayerTwo => Some(Winner::Ai),
            Stone::Empty => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Chosen cell encoded as `row * cols + col`
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    pub mv: Option<usize>,
    pub winner: Option<Winner>,
}

impl MoveResponse {
    /// Decode the move back to a grid coordinate
    pub fn pos(&self, cols: usize) -> Option<Pos> {
        self.mv.map(|idx| Pos::from_index(idx, cols))
    }
}

/// Run one request through validation, the engine and outcome detection.
pub fn handle_move(request: &MoveRequest, tie_break: TieBreak) -> Result<MoveResponse> {
    let mut grid = request.validate().map_err(|e| {
        log::warn!("rejected move request: {}", e);
        e
    })?;

    if let Some(stone) = find_winner(&grid) {
        log::info!("board already won by {:?}", stone);
        return Ok(MoveResponse {
            mv: None,
            winner: Winner::from_stone(stone),
        });
    }

    let engine = AIEngine::with_config(request.depth, tie_break);
    let Some(pos) = engine.get_move(&grid, Stone::PlayerTwo) else {
        return Ok(MoveResponse {
            mv: None,
            winner: Some(Winner::Draw),
        });
    };

    grid.place(pos, Stone::PlayerTwo);
    let winner = if check_win(&grid, pos, Stone::PlayerTwo) {
        Some(Winner::Ai)
    } else if grid.is_full() {
        Some(Winner::Draw)
    } else {
        None
    };

    Ok(MoveResponse {
        mv: Some(pos.to_index(grid.cols())),
        winner,
    })
}

/// Parse a JSON request, answer it, and serialize the response.
pub fn handle_json(input: &str, tie_break: TieBreak) -> Result<String> {
    let request: MoveRequest = serde_json::from_str(input).map_err(|e| {
        log::warn!("unparsable move request: {}", e);
        e
    })?;
    let response = handle_move(&request, tie_break)?;
    Ok(serde_json::to_string(&response)?)
}
