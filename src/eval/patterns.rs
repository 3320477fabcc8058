//! Pattern scores for window evaluation
//!
//! These constants define the scoring weights applied to each window of
//! `win_streak` cells. Only the ordering is a contract:
//! WIN far above BLOCK_WIN, BLOCK_WIN above PRE_WIN, PRE_WIN above ADVANTAGE.

/// Board score, positive favours the searching player
pub type Score = i64;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Completed run - outranks any sum of heuristic windows
    pub const WIN: Score = 1_000_000_000;
    /// One stone short of a run with the last cell open
    pub const PRE_WIN: Score = 1_000_000;
    /// Opponent one stone short. Weighted above PRE_WIN so blocking
    /// beats mirroring the opponent's threat.
    pub const BLOCK_WIN: Score = 2_000_000;
    /// Two stones short with both remaining cells open
    pub const ADVANTAGE: Score = 1_000;
}

/// Score a single window from its stone counts.
///
/// Offense and defense are scored independently; a window holding stones
/// of both players can match neither pattern and contributes nothing.
#[inline]
pub fn window_score(mine: usize, theirs: usize, empty: usize, streak: usize) -> Score {
    let mut score = 0;

    if mine == streak {
        score += PatternScore::WIN;
    } else if mine + 1 == streak && empty == 1 {
        score += PatternScore::PRE_WIN;
    } else if mine + 2 == streak && empty == 2 {
        score += PatternScore::ADVANTAGE;
    }

    if theirs + 1 == streak && empty == 1 {
        score -= PatternScore::BLOCK_WIN;
    } else if theirs + 2 == streak && empty == 2 {
        score -= PatternScore::ADVANTAGE * 2;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::WIN > PatternScore::BLOCK_WIN * 100);
        assert!(PatternScore::BLOCK_WIN > PatternScore::PRE_WIN);
        assert!(PatternScore::PRE_WIN > PatternScore::ADVANTAGE);
    }

    #[test]
    fn test_window_full_of_mine() {
        assert_eq!(window_score(5, 0, 0, 5), PatternScore::WIN);
    }

    #[test]
    fn test_window_offense() {
        assert_eq!(window_score(4, 0, 1, 5), PatternScore::PRE_WIN);
        assert_eq!(window_score(3, 0, 2, 5), PatternScore::ADVANTAGE);
        assert_eq!(window_score(2, 0, 3, 5), 0);
    }

    #[test]
    fn test_window_defense() {
        assert_eq!(window_score(0, 4, 1, 5), -PatternScore::BLOCK_WIN);
        assert_eq!(window_score(0, 3, 2, 5), -2 * PatternScore::ADVANTAGE);
        assert_eq!(window_score(0, 5, 0, 5), 0, "opponent five is left to the win check");
    }

    #[test]
    fn test_mixed_window_is_blocked() {
        assert_eq!(window_score(4, 1, 0, 5), 0);
        assert_eq!(window_score(1, 4, 0, 5), 0);
        assert_eq!(window_score(3, 1, 1, 5), 0);
        assert_eq!(window_score(1, 3, 1, 5), 0);
    }

    #[test]
    fn test_block_outweighs_mirror() {
        // Same shape for both sides: the opponent's threat dominates
        let net = window_score(4, 0, 1, 5) + window_score(0, 4, 1, 5);
        assert!(net < 0);
    }

    #[test]
    fn test_short_streak() {
        // streak 3: two stones plus one gap is a pre-win
        assert_eq!(window_score(2, 0, 1, 3), PatternScore::PRE_WIN);
        assert_eq!(window_score(1, 0, 2, 3), PatternScore::ADVANTAGE);
        assert_eq!(window_score(0, 1, 2, 3), -2 * PatternScore::ADVANTAGE);
    }
}
