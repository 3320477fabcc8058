//! Win condition checking
//!
//! A player wins by completing a run of `win_streak` stones horizontally,
//! vertically or along either diagonal. Overlines count.
//!
//! [`check_win`] is a local check anchored at the stone just placed; it
//! must run right after every placement. [`find_winner`] scans the whole
//! board and is only meant for boundary code that receives a position
//! without knowing the last move.

use crate::board::{Grid, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE (walked backwards)
];

/// Count consecutive `stone`s starting one step from `pos` along `(dr, dc)`,
/// walking at most `limit` steps.
#[inline]
fn run_length(grid: &Grid, pos: Pos, dr: i32, dc: i32, stone: Stone, limit: usize) -> usize {
    let mut count = 0;
    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;
    while count < limit && grid.get_at(r, c) == Some(stone) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Does the stone at `pos` complete a winning run for `stone`?
///
/// `pos` must already hold `stone`. Walks at most `win_streak - 1` steps
/// each way along the four axes, so the cost is O(win_streak).
#[inline]
pub fn check_win(grid: &Grid, pos: Pos, stone: Stone) -> bool {
    let streak = grid.win_streak();
    let reach = streak.saturating_sub(1);

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1
            + run_length(grid, pos, dr, dc, stone, reach)
            + run_length(grid, pos, -dr, -dc, stone, reach);
        count >= streak
    })
}

/// Return the full run through `pos` if it is a winning one.
///
/// Unlike [`check_win`] the run is not capped, so an overline is returned
/// whole. Ordered from the negative end to the positive end.
pub fn winning_line(grid: &Grid, pos: Pos, stone: Stone) -> Option<Vec<Pos>> {
    if grid.get(pos) != stone || stone == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(grid, pos, -dr, -dc, stone, usize::MAX);
        let forward = run_length(grid, pos, dr, dc, stone, usize::MAX);

        if 1 + back + forward >= grid.win_streak() {
            let start_r = i32::from(pos.row) - dr * back as i32;
            let start_c = i32::from(pos.col) - dc * back as i32;
            let line = (0..=(back + forward) as i32)
                .map(|i| Pos::new((start_r + dr * i) as u8, (start_c + dc * i) as u8))
                .collect();
            return Some(line);
        }
    }
    None
}

/// Scan every stone on the board for a completed run.
///
/// Returns the owner of the first winning run found in row-major order.
pub fn find_winner(grid: &Grid) -> Option<Stone> {
    grid.occupied()
        .find(|&(pos, stone)| check_win(grid, pos, stone))
        .map(|(_, stone)| stone)
}
