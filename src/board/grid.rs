//! Grid state: cell occupancy with fixed dimensions
//!
//! The grid is built once per decision and then mutated in place by the
//! search. Every `place` must be paired with a `remove` before the grid is
//! reused for a sibling branch; [`Grid::play`] ties the two together.

use std::ops::{Deref, DerefMut};

use super::{Pos, Stone};
use crate::error::{GomokuError, Result};

/// Coordinates are stored as `u8`, so a side may hold at most 256 cells
#[inline]
fn debug_assert_dimensions(rows: usize, cols: usize) {
    const MAX_SIDE: usize = u8::MAX as usize + 1;
    debug_assert!(
        rows <= MAX_SIDE && cols <= MAX_SIDE,
        "grid {}x{} exceeds {} cells per side",
        rows,
        cols,
        MAX_SIDE
    );
}

/// Game board of `rows x cols` cells plus the length of a winning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    win_streak: usize,
    /// Row-major cell storage, always `rows * cols` long
    cells: Vec<Stone>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize, win_streak: usize) -> Self {
        debug_assert_dimensions(rows, cols);
        Self {
            rows,
            cols,
            win_streak,
            cells: vec![Stone::Empty; rows * cols],
        }
    }

    /// Decode a flattened row-major board (cell codes 0/1/2).
    ///
    /// Fails when the length does not match `rows * cols` or a code is
    /// not a valid cell state.
    pub fn from_flat(flat: &[u8], rows: usize, cols: usize, win_streak: usize) -> Result<Self> {
        debug_assert_dimensions(rows, cols);
        if flat.len() != rows * cols {
            return Err(GomokuError::InvalidInput(format!(
                "board has {} cells, expected {}x{} = {}",
                flat.len(),
                rows,
                cols,
                rows * cols
            )));
        }

        let cells = flat
            .iter()
            .enumerate()
            .map(|(idx, &code)| {
                Stone::from_code(code).ok_or_else(|| {
                    GomokuError::InvalidInput(format!("cell {} has invalid value {}", idx, code))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rows,
            cols,
            win_streak,
            cells,
        })
    }

    /// Encode back to the flattened row-major representation
    pub fn to_flat(&self) -> Vec<u8> {
        self.cells.iter().map(|s| s.code()).collect()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn win_streak(&self) -> usize {
        self.win_streak
    }

    /// Center cell `(rows/2, cols/2)`
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new((self.rows / 2) as u8, (self.cols / 2) as u8)
    }

    /// Check signed coordinates against the board bounds
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index(self.cols)]
    }

    /// Get stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Stone> {
        if self.in_bounds(row, col) {
            Some(self.cells[row as usize * self.cols + col as usize])
        } else {
            None
        }
    }

    /// True iff the coordinates are on the board and the cell is empty
    #[inline]
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        self.get_at(row, col) == Some(Stone::Empty)
    }

    /// Place a stone. The caller guarantees the move is valid.
    #[inline]
    pub fn place(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.get(pos) == Stone::Empty, "place on occupied cell {:?}", pos);
        let idx = pos.to_index(self.cols);
        self.cells[idx] = stone;
    }

    /// Remove a stone. No validation is performed.
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        let idx = pos.to_index(self.cols);
        self.cells[idx] = Stone::Empty;
    }

    /// Place a stone for the lifetime of the returned guard.
    ///
    /// The stone is removed when the guard is dropped, on every exit path.
    #[inline]
    pub fn play(&mut self, pos: Pos, stone: Stone) -> Placement<'_> {
        self.place(pos, stone);
        Placement { grid: self, pos }
    }

    /// Iterate over occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| **s != Stone::Empty)
            .map(move |(idx, s)| (Pos::from_index(idx, cols), *s))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| **s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|s| *s == Stone::Empty)
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|s| *s != Stone::Empty)
    }
}

/// A stone placed on a grid for the duration of one search branch.
///
/// Derefs to the grid so the branch can keep reading and recursing;
/// dropping it restores the cell to empty.
pub struct Placement<'a> {
    grid: &'a mut Grid,
    pos: Pos,
}

impl Placement<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placement<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        self.grid
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Grid {
        self.grid
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.grid.remove(self.pos);
    }
}
