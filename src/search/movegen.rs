//! Candidate move generation
//!
//! Only empty cells touching an existing stone (8-neighbourhood) are
//! considered, which keeps the branching factor proportional to the number
//! of stones played rather than the board area.

use crate::board::{Grid, Pos};

/// Generate the candidate moves for the current position.
///
/// - Empty board: the single center cell `(rows/2, cols/2)`
/// - Otherwise: every empty neighbour of an occupied cell, without duplicates
/// - Full board: no moves
pub fn candidate_moves(grid: &Grid) -> Vec<Pos> {
    if grid.is_board_empty() {
        return vec![grid.center()];
    }

    let mut moves = Vec::with_capacity(32);
    let mut seen = vec![false; grid.rows() * grid.cols()];

    for (pos, _) in grid.occupied() {
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;

                if !grid.is_valid_move(r, c) {
                    continue;
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let new_pos = Pos::new(r as u8, c as u8);
                let idx = new_pos.to_index(grid.cols());
                if seen[idx] {
                    continue;
                }
                seen[idx] = true;
                moves.push(new_pos);
            }
        }
    }

    moves
}
