//! Main AI Engine wrapping one top-level decision
//!
//! The engine copies the caller's grid into a working grid owned by the
//! search for the duration of the call, runs the alpha-beta search at the
//! configured depth, and reports whether the chosen move wins on the spot.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Grid, Pos, Stone};
//!
//! let mut grid = Grid::new(15, 15, 5);
//! grid.place(Pos::new(7, 7), Stone::PlayerOne);
//!
//! let engine = AIEngine::with_config(2, Default::default());
//! let result = engine.get_move_with_stats(&grid, Stone::PlayerTwo);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Grid, Pos, Stone};
use crate::eval::Score;
use crate::rules::check_win;
use crate::search::{SearchResult, Searcher, TieBreak};

/// Default search depth (plies)
pub const DEFAULT_DEPTH: u32 = 2;

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found. `None` means no move is recommended (draw / no-op).
    pub best_move: Option<Pos>,
    /// Evaluation score of the chosen line
    pub score: Score,
    /// Whether playing `best_move` completes a winning run
    pub wins: bool,
    /// Depth searched
    pub depth: u32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of alpha-beta cutoffs
    pub cutoffs: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    /// Create a result from alpha-beta search
    #[inline]
    fn from_search(result: SearchResult, wins: bool, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            wins,
            depth: result.depth,
            nodes: result.stats.nodes,
            cutoffs: result.stats.cutoffs,
            time_ms,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Stateless between calls: every decision builds its own searcher and
/// working grid.
#[derive(Debug, Clone)]
pub struct AIEngine {
    /// Search depth in plies
    depth: u32,
    /// Fallback / ordering tie-break
    tie_break: TieBreak,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - depth 2
    /// - deterministic tie-break
    #[must_use]
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            tie_break: TieBreak::First,
        }
    }

    /// Create an AI engine with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `depth` - Search depth in plies
    /// * `tie_break` - How equally good moves are chosen between
    #[must_use]
    pub fn with_config(depth: u32, tie_break: TieBreak) -> Self {
        Self { depth, tie_break }
    }

    /// Get the best move for `color`, or `None` if no move is recommended.
    #[must_use]
    pub fn get_move(&self, grid: &Grid, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(grid, color).best_move
    }

    /// Get the best move with detailed search statistics.
    ///
    /// The caller's grid is never touched; the search runs on a copy.
    #[must_use]
    pub fn get_move_with_stats(&self, grid: &Grid, color: Stone) -> MoveResult {
        let start = Instant::now();

        let mut work = grid.clone();
        let mut searcher = Searcher::with_tie_break(color, self.tie_break);
        let result = searcher.search(&mut work, self.depth);

        let wins = match result.best_move {
            Some(pos) => {
                let placed = work.play(pos, color);
                check_win(&placed, pos, color)
            }
            None => false,
        };

        let time_ms = start.elapsed().as_millis() as u64;
        let result = MoveResult::from_search(result, wins, time_ms);

        log::info!(
            "{:?} plays {:?} (score {}, wins {}, depth {}, {} nodes, {} cutoffs, {}ms)",
            color,
            result.best_move,
            result.score,
            result.wins,
            result.depth,
            result.nodes,
            result.cutoffs,
            result.time_ms
        );

        result
    }

    /// Set the search depth.
    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    /// Get the current search depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.depth(), DEFAULT_DEPTH);
        assert_eq!(engine.tie_break(), TieBreak::First);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(4, TieBreak::Random { seed: Some(1) });
        assert_eq!(engine.depth(), 4);
        assert_eq!(engine.tie_break(), TieBreak::Random { seed: Some(1) });
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::default();
        engine.set_depth(3);
        assert_eq!(engine.depth(), 3);
    }

    #[test]
    fn test_engine_empty_board() {
        let grid = Grid::new(15, 15, 5);
        let engine = AIEngine::with_config(1, TieBreak::First);

        let result = engine.get_move_with_stats(&grid, Stone::PlayerTwo);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert!(!result.wins);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut grid = Grid::new(15, 15, 5);
        for c in 0..4 {
            grid.place(Pos::new(9, c), Stone::PlayerTwo);
        }
        grid.place(Pos::new(10, 5), Stone::PlayerOne);

        let engine = AIEngine::new();
        let result = engine.get_move_with_stats(&grid, Stone::PlayerTwo);

        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert_eq!(result.score, PatternScore::WIN);
        assert!(result.wins);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut grid = Grid::new(15, 15, 5);
        for c in 0..4 {
            grid.place(Pos::new(9, c), Stone::PlayerOne);
        }
        grid.place(Pos::new(10, 5), Stone::PlayerTwo);

        let engine = AIEngine::new();
        let result = engine.get_move_with_stats(&grid, Stone::PlayerTwo);

        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert!(!result.wins);
    }

    #[test]
    fn test_engine_depth_zero_recommends_nothing() {
        let mut grid = Grid::new(15, 15, 5);
        grid.place(Pos::new(7, 7), Stone::PlayerOne);

        let engine = AIEngine::with_config(0, TieBreak::First);
        let result = engine.get_move_with_stats(&grid, Stone::PlayerTwo);
        assert_eq!(result.best_move, None);
        assert!(!result.wins);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_engine_leaves_caller_grid_alone() {
        let mut grid = Grid::new(9, 9, 4);
        grid.place(Pos::new(4, 4), Stone::PlayerOne);
        grid.place(Pos::new(4, 5), Stone::PlayerTwo);
        let before = grid.clone();

        let _ = AIEngine::with_config(3, TieBreak::First).get_move(&grid, Stone::PlayerTwo);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut grid = Grid::new(15, 15, 5);
        grid.place(Pos::new(7, 7), Stone::PlayerOne);
        let engine = AIEngine::new();

        let result1 = engine.get_move(&grid, Stone::PlayerTwo);
        let result2 = engine.get_move(&grid, Stone::PlayerTwo);
        assert_eq!(result1, result2);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let engine = AIEngine::new();
        let mut grid = Grid::new(15, 15, 5);

        let first = engine.get_move(&grid, Stone::PlayerOne);
        assert_eq!(first, Some(Pos::new(7, 7)));
        grid.place(Pos::new(7, 7), Stone::PlayerOne);

        let reply = engine.get_move(&grid, Stone::PlayerTwo).unwrap();
        assert_eq!(reply.chebyshev(Pos::new(7, 7)), 1);
        grid.place(reply, Stone::PlayerTwo);

        let next = engine.get_move(&grid, Stone::PlayerOne);
        assert!(next.is_some());
    }
}
