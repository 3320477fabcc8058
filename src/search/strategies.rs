//! Random small boards for property tests

use proptest::prelude::*;

use crate::board::{Grid, Pos, Stone};
use crate::rules::check_win;

/// A 5x5 to 7x7 grid, run length 3 or 4, holding up to `max_stones`
/// stones and no completed run.
pub fn arb_grid(max_stones: usize) -> impl Strategy<Value = Grid> {
    (5usize..=7, 5usize..=7, 3usize..=4)
        .prop_flat_map(move |(rows, cols, streak)| {
            let stone = (0..rows as u8, 0..cols as u8, any::<bool>());
            (
                Just(rows),
                Just(cols),
                Just(streak),
                prop::collection::vec(stone, 0..=max_stones),
            )
        })
        .prop_map(|(rows, cols, streak, stones)| {
            let mut grid = Grid::new(rows, cols, streak);
            for (r, c, first_player) in stones {
                let pos = Pos::new(r, c);
                let stone = if first_player {
                    Stone::PlayerOne
                } else {
                    Stone::PlayerTwo
                };
                if grid.get(pos) != Stone::Empty {
                    continue;
                }
                // Drop stones that would finish the game before the search starts
                let wins = check_win(&grid.play(pos, stone), pos, stone);
                if !wins {
                    grid.place(pos, stone);
                }
            }
            grid
        })
}
