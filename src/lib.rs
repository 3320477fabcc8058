//! Gomoku connect-N move selector
//!
//! A minimax Gomoku AI for rectangular boards with a configurable run length:
//! - Any board from 5x5 to 25x25
//! - `win_streak` in a row wins (overlines allowed)
//! - Candidate moves restricted to the neighbourhood of existing stones
//! - Window-based static evaluation
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Grid state and coordinates
//! - [`rules`]: Win detection
//! - [`eval`]: Static evaluation of positions
//! - [`search`]: Move generation and alpha-beta search
//! - [`engine`]: One top-level decision with statistics
//! - [`api`]: JSON request boundary (flattened board in, encoded move out)
//! - [`config`]: Game configuration file
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Grid, Pos, Stone};
//!
//! let mut grid = Grid::new(15, 15, 5);
//! let engine = AIEngine::new();
//!
//! grid.place(Pos::new(7, 7), Stone::PlayerOne);
//!
//! // AI responds as PlayerTwo
//! if let Some(pos) = engine.get_move(&grid, Stone::PlayerTwo) {
//!     grid.place(pos, Stone::PlayerTwo);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search Order
//!
//! At every node the searcher:
//! 1. Generates candidates next to existing stones (center on an empty board)
//! 2. Orders them by distance from the center
//! 3. Returns `±WIN` at once for a move that completes a run
//! 4. Otherwise recurses, or evaluates at depth 0

pub mod api;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod logging;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Grid, Pos, Stone, DEFAULT_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use error::{GomokuError, Result};
