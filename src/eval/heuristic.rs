//! Heuristic evaluation function for Gomoku board positions
//!
//! Slides a window of `win_streak` cells over every row, column and both
//! diagonal orientations, and sums the per-window pattern scores.
//! Used only at the search frontier.

use crate::board::{Grid, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::{window_score, Score};

/// Evaluate the board from the perspective of `player`.
///
/// Returns a score where:
/// - Positive values indicate advantage for `player`
/// - Negative values indicate advantage for the opponent
///
/// Pure: the grid is only read.
#[must_use]
pub fn evaluate(grid: &Grid, player: Stone) -> Score {
    let opponent = player.opponent();
    let streak = grid.win_streak();
    if streak == 0 {
        return 0;
    }

    let span = (streak - 1) as i32;
    let mut score = 0;

    for &(dr, dc) in &DIRECTIONS {
        for r in 0..grid.rows() as i32 {
            for c in 0..grid.cols() as i32 {
                // Window must end on the board; every cell in between is then on it too
                if !grid.in_bounds(r + dr * span, c + dc * span) {
                    continue;
                }

                let mut mine = 0;
                let mut theirs = 0;
                let mut empty = 0;
                for i in 0..=span {
                    let pos = Pos::new((r + dr * i) as u8, (c + dc * i) as u8);
                    match grid.get(pos) {
                        s if s == player => mine += 1,
                        s if s == opponent => theirs += 1,
                        _ => empty += 1,
                    }
                }

                score += window_score(mine, theirs, empty, streak);
            }
        }
    }

    score
}

/// Number of windows the evaluator scans on a board of this shape
pub fn window_count(rows: usize, cols: usize, streak: usize) -> usize {
    if streak == 0 || streak > rows.max(cols) {
        return 0;
    }
    let fit = |n: usize| (n + 1).saturating_sub(streak);
    let horizontal = rows * fit(cols);
    let vertical = cols * fit(rows);
    let diagonal = fit(rows) * fit(cols);
    horizontal + vertical + 2 * diagonal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    fn grid_with(stones: &[(u8, u8, Stone)]) -> Grid {
        let mut grid = Grid::new(15, 15, 5);
        for &(r, c, s) in stones {
            grid.place(Pos::new(r, c), s);
        }
        grid
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let grid = Grid::new(15, 15, 5);
        assert_eq!(evaluate(&grid, Stone::PlayerTwo), 0);
    }

    #[test]
    fn test_single_stone_scores_zero() {
        let grid = grid_with(&[(7, 7, Stone::PlayerTwo)]);
        assert_eq!(evaluate(&grid, Stone::PlayerTwo), 0);
    }

    #[test]
    fn test_open_three_advantage() {
        let grid = grid_with(&[
            (7, 5, Stone::PlayerTwo),
            (7, 6, Stone::PlayerTwo),
            (7, 7, Stone::PlayerTwo),
        ]);
        // Horizontal windows starting at cols 3, 4, 5 hold all three stones
        assert_eq!(evaluate(&grid, Stone::PlayerTwo), 3 * PatternScore::ADVANTAGE);
        // Seen from the other side the same shape costs double
        assert_eq!(evaluate(&grid, Stone::PlayerOne), -6 * PatternScore::ADVANTAGE);
    }

    #[test]
    fn test_edge_four() {
        let grid = grid_with(&[
            (0, 0, Stone::PlayerTwo),
            (0, 1, Stone::PlayerTwo),
            (0, 2, Stone::PlayerTwo),
            (0, 3, Stone::PlayerTwo),
        ]);
        // Window cols 0-4 is a pre-win, window cols 1-5 an advantage
        assert_eq!(
            evaluate(&grid, Stone::PlayerTwo),
            PatternScore::PRE_WIN + PatternScore::ADVANTAGE
        );
    }

    #[test]
    fn test_vertical_and_diagonal_windows_are_scanned() {
        let vertical = grid_with(&[
            (0, 0, Stone::PlayerTwo),
            (1, 0, Stone::PlayerTwo),
            (2, 0, Stone::PlayerTwo),
            (3, 0, Stone::PlayerTwo),
        ]);
        let diagonal = grid_with(&[
            (0, 0, Stone::PlayerTwo),
            (1, 1, Stone::PlayerTwo),
            (2, 2, Stone::PlayerTwo),
            (3, 3, Stone::PlayerTwo),
        ]);
        let anti = grid_with(&[
            (0, 14, Stone::PlayerTwo),
            (1, 13, Stone::PlayerTwo),
            (2, 12, Stone::PlayerTwo),
            (3, 11, Stone::PlayerTwo),
        ]);
        let expected = PatternScore::PRE_WIN + PatternScore::ADVANTAGE;
        assert_eq!(evaluate(&vertical, Stone::PlayerTwo), expected);
        assert_eq!(evaluate(&diagonal, Stone::PlayerTwo), expected);
        assert_eq!(evaluate(&anti, Stone::PlayerTwo), expected);
    }

    #[test]
    fn test_blocked_four_scores_nothing() {
        let grid = grid_with(&[
            (7, 2, Stone::PlayerOne),
            (7, 3, Stone::PlayerTwo),
            (7, 4, Stone::PlayerTwo),
            (7, 5, Stone::PlayerTwo),
            (7, 6, Stone::PlayerTwo),
            (7, 7, Stone::PlayerOne),
        ]);
        // Every horizontal window through the four also holds a blocker
        let score = evaluate(&grid, Stone::PlayerTwo);
        assert!(score < PatternScore::PRE_WIN, "blocked four scored {}", score);
    }

    #[test]
    fn test_opponent_threat_dominates() {
        let grid = grid_with(&[
            (2, 2, Stone::PlayerOne),
            (2, 3, Stone::PlayerOne),
            (2, 4, Stone::PlayerOne),
            (2, 5, Stone::PlayerOne),
            (2, 6, Stone::PlayerTwo),
            (9, 2, Stone::PlayerTwo),
            (9, 3, Stone::PlayerTwo),
            (9, 4, Stone::PlayerTwo),
            (9, 5, Stone::PlayerTwo),
            (9, 1, Stone::PlayerOne),
        ]);
        // Both sides have a four with one open end; the opponent's weighs more
        assert!(evaluate(&grid, Stone::PlayerTwo) < 0);
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let grid = grid_with(&[(7, 7, Stone::PlayerOne), (7, 8, Stone::PlayerTwo)]);
        let before = grid.clone();
        let _ = evaluate(&grid, Stone::PlayerTwo);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_window_count() {
        // 15x15, streak 5: 165 rows + 165 cols + 2 * 121 diagonals
        assert_eq!(window_count(15, 15, 5), 572);
        assert_eq!(window_count(5, 5, 3), 48);
        assert_eq!(window_count(3, 3, 5), 0);
    }

    #[test]
    fn test_streak_longer_than_board() {
        let mut grid = Grid::new(5, 5, 6);
        grid.place(Pos::new(2, 2), Stone::PlayerTwo);
        assert_eq!(evaluate(&grid, Stone::PlayerTwo), 0);
    }
}
