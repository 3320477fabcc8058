//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Gomoku AI.
//! Both sides run the same loop with swapped identities: the maximizing
//! side is the AI, the minimizing side models an opponent that also plays
//! its best move.
//!
//! # Features
//!
//! - Proximity move generation (see [`candidate_moves`])
//! - Center-first move ordering to tighten bounds early
//! - Immediate win/loss short-circuit: a move that completes a run returns
//!   `±WIN` without recursing
//! - In-place make/unmake on a single grid via [`Grid::play`]
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Grid, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut grid = Grid::new(15, 15, 5);
//! let mut searcher = Searcher::new(Stone::PlayerTwo);
//!
//! let result = searcher.search(&mut grid, 1);
//! assert_eq!(result.best_move, Some(Pos::new(7, 7)));
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::board::{Grid, Pos, Stone};
use crate::eval::{evaluate, PatternScore, Score};
use crate::rules::check_win;

use super::movegen::candidate_moves;

/// Infinity score for alpha-beta bounds
pub const INF: Score = Score::MAX;

/// How the fallback move is picked and how equally-central moves are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First candidate after sorting by (center distance, row, col)
    #[default]
    First,
    /// Shuffle before the stable center sort and draw the fallback at random.
    /// A seed makes the choice reproducible.
    Random { seed: Option<u64> },
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into the minimax recursion
    pub nodes: u64,
    /// Sibling loops cut short by `beta <= alpha`
    pub cutoffs: u64,
    /// Branches closed by a completed run
    pub immediate_wins: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when depth is 0 or no candidate exists
    pub best_move: Option<Pos>,
    /// Score of the best line from the searching player's view
    pub score: Score,
    /// Depth the search was run at
    pub depth: u32,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher for one player.
///
/// Holds no board state; the grid is lent to each call and handed back
/// unchanged.
pub struct Searcher {
    player: Stone,
    opponent: Stone,
    rng: Option<StdRng>,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher optimizing for `player` with deterministic tie-breaks
    #[must_use]
    pub fn new(player: Stone) -> Self {
        Self::with_tie_break(player, TieBreak::First)
    }

    #[must_use]
    pub fn with_tie_break(player: Stone, tie_break: TieBreak) -> Self {
        let rng = match tie_break {
            TieBreak::First => None,
            TieBreak::Random { seed: Some(seed) } => Some(StdRng::seed_from_u64(seed)),
            TieBreak::Random { seed: None } => Some(StdRng::from_entropy()),
        };
        Self {
            player,
            opponent: player.opponent(),
            rng,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn player(&self) -> Stone {
        self.player
    }

    /// Statistics of the last search
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search `depth` plies with the player to move at the root.
    ///
    /// The grid is mutated during the search and restored before returning.
    #[must_use]
    pub fn search(&mut self, grid: &mut Grid, depth: u32) -> SearchResult {
        self.stats = SearchStats::default();

        let (best_move, score) = self.minimax(grid, depth, -INF, INF, true);

        log::debug!(
            "search depth={} move={:?} score={} nodes={} cutoffs={} wins={}",
            depth,
            best_move,
            score,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.immediate_wins
        );

        SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats.clone(),
        }
    }

    /// One node of the minimax recursion.
    ///
    /// Returns `(None, evaluate(grid))` at depth 0 or when no candidate
    /// exists, otherwise the best move for the side to move and its score.
    /// Statistics accumulate until the next [`Searcher::search`].
    pub fn minimax(
        &mut self,
        grid: &mut Grid,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Option<Pos>, Score) {
        self.stats.nodes += 1;

        let mut moves = candidate_moves(grid);
        if depth == 0 || moves.is_empty() {
            return (None, evaluate(grid, self.player));
        }

        self.order_moves(grid, &mut moves);

        let mover = if maximizing { self.player } else { self.opponent };
        let mut best_move = self.fallback_move(&moves);
        let mut best_score = if maximizing { -INF } else { INF };

        for &mov in &moves {
            let mut placed = grid.play(mov, mover);

            // A completed run ends the game: nothing deeper can outrank it
            if check_win(&placed, mov, mover) {
                self.stats.immediate_wins += 1;
                let score = if maximizing {
                    PatternScore::WIN
                } else {
                    -PatternScore::WIN
                };
                return (Some(mov), score);
            }

            let (_, score) = self.minimax(&mut placed, depth - 1, alpha, beta, !maximizing);
            drop(placed);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = mov;
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = mov;
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (Some(best_move), best_score)
    }

    /// Sort candidates by Manhattan distance from the center, nearest first.
    fn order_moves(&mut self, grid: &Grid, moves: &mut [Pos]) {
        let center = grid.center();
        match self.rng.as_mut() {
            Some(rng) => {
                moves.shuffle(rng);
                moves.sort_by_key(|m| m.manhattan(center));
            }
            None => moves.sort_by_key(|m| (m.manhattan(center), *m)),
        }
    }

    /// Move returned if no branch improves on the initial bound.
    fn fallback_move(&mut self, moves: &[Pos]) -> Pos {
        match self.rng.as_mut() {
            Some(rng) => moves.choose(rng).copied().unwrap_or(moves[0]),
            None => moves[0],
        }
    }
}
