//! GUI module for the Gomoku game
//!
//! Human (black) against the engine (white) using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameResult, GameState, AI, HUMAN};
