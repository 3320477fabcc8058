//! Game rules for connect-N Gomoku
//!
//! Only one rule decides a game: the first player to line up `win_streak`
//! stones wins. A full board without such a run is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, find_winner, winning_line, DIRECTIONS};
