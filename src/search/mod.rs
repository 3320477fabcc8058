//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation (neighbourhood of existing stones)
//! - Minimax with alpha-beta pruning and immediate-win short-circuit

pub mod alphabeta;
pub mod movegen;

#[cfg(test)]
mod strategies;

pub use alphabeta::{SearchResult, SearchStats, Searcher, TieBreak, INF};
pub use movegen::candidate_moves;
