//! Board representation for Gomoku

pub mod grid;


// Re-exports
pub use grid::{Grid, Placement};

/// Default board side used by the GUI and the request boundary (15x15)
pub const DEFAULT_SIZE: usize = 15;

/// Default length of a winning run
pub const DEFAULT_WIN_STREAK: usize = 5;

/// Cell occupancy.
///
/// `PlayerOne` is the human side, `PlayerTwo` the AI side. On the wire
/// they are encoded as 0, 1 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::PlayerOne => Stone::PlayerTwo,
            Stone::PlayerTwo => Stone::PlayerOne,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Decode a flattened-board cell value
    #[inline]
    pub fn from_code(code: u8) -> Option<Stone> {
        match code {
            0 => Some(Stone::Empty),
            1 => Some(Stone::PlayerOne),
            2 => Some(Stone::PlayerTwo),
            _ => None,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::PlayerOne => 1,
            Stone::PlayerTwo => 2,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board with `cols` columns
    #[inline]
    pub fn to_index(self, cols: usize) -> usize {
        self.row as usize * cols + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, cols: usize) -> Self {
        Self {
            row: (idx / cols) as u8,
            col: (idx % cols) as u8,
        }
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        let dr = (i32::from(self.row) - i32::from(other.row)).unsigned_abs();
        let dc = (i32::from(self.col) - i32::from(other.col)).unsigned_abs();
        dr + dc
    }

    /// Chebyshev (king-move) distance to another position
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u32 {
        let dr = (i32::from(self.row) - i32::from(other.row)).unsigned_abs();
        let dc = (i32::from(self.col) - i32::from(other.col)).unsigned_abs();
        dr.max(dc)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
