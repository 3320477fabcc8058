//! Evaluation module for Gomoku positions
//!
//! Window-based pattern scoring: every run of `win_streak` cells in the
//! four orientations is classified by its stone counts.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, window_count};
pub use patterns::{window_score, PatternScore, Score};
