//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::Grid;
use crate::config::{FirstMove, GameConfig};
use crate::rules::winning_line;
use crate::{AIEngine, MoveResult, Pos, Stone};

/// Side played by the person at the screen
pub const HUMAN: Stone = Stone::PlayerOne;
/// Side played by the engine
pub const AI: Stone = Stone::PlayerTwo;

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Win { winner: Stone, line: Vec<Pos> },
    Draw,
}

impl GameResult {
    pub fn winning_line(&self) -> Option<&[Pos]> {
        match self {
            GameResult::Win { line, .. } => Some(line),
            GameResult::Draw => None,
        }
    }
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub grid: Grid,
    pub config: GameConfig,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let first = Self::first_player(&config);
        log::info!(
            "new game {}x{}, {} in a row, depth {}, {:?} first",
            config.rows,
            config.cols,
            config.win_streak,
            config.depth,
            config.first_move
        );
        Self {
            grid: Grid::new(config.rows, config.cols, config.win_streak),
            config,
            current_turn: first,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
        }
    }

    /// Start over with the current settings
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    fn first_player(config: &GameConfig) -> Stone {
        match config.first_move {
            FirstMove::Human => HUMAN,
            FirstMove::Ai => AI,
        }
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_turn == HUMAN
    }

    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == AI
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a human stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !self.grid.is_valid_move(i32::from(pos.row), i32::from(pos.col)) {
            return Err("Cell is occupied".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Place a stone for the side to move and settle the outcome
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;

        self.grid.place(pos, color);
        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.message = None;
        self.move_timer.stop();

        if let Some(line) = winning_line(&self.grid, pos, color) {
            log::info!("{:?} wins at {:?}", color, pos);
            self.game_over = Some(GameResult::Win { winner: color, line });
            return;
        }

        if self.grid.is_full() {
            log::info!("board full, draw");
            self.game_over = Some(GameResult::Draw);
            return;
        }

        self.current_turn = color.opponent();
        self.move_timer.start();
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let grid = self.grid.clone();
        let engine = AIEngine::with_config(self.config.depth, self.config.tie_break);

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&grid, AI);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            self.apply_ai_result(move_result);
        }
    }

    /// Play the engine's decision; no move means the game is drawn
    fn apply_ai_result(&mut self, move_result: MoveResult) {
        let best_move = move_result.best_move;
        self.last_ai_result = Some(move_result);

        match best_move {
            Some(pos) => self.execute_move(pos),
            None => {
                log::info!("AI has no move, draw");
                self.move_timer.stop();
                self.game_over = Some(GameResult::Draw);
                self.message = Some("AI found no move".to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back moves up to and including the last human stone
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        while let Some((pos, color)) = self.move_history.pop() {
            self.grid.remove(pos);
            self.current_turn = color;
            if color == HUMAN {
                break;
            }
        }

        self.last_move = self.move_history.last().map(|&(pos, _)| pos);
        self.game_over = None;
        self.message = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GameConfig {
        GameConfig {
            rows: 7,
            cols: 7,
            win_streak: 4,
            depth: 1,
            ..Default::default()
        }
    }

    fn fake_result(pos: Option<Pos>) -> MoveResult {
        MoveResult {
            best_move: pos,
            score: 0,
            wins: false,
            depth: 1,
            nodes: 1,
            cutoffs: 0,
            time_ms: 0,
        }
    }

    #[test]
    fn test_first_move_setting() {
        let state = GameState::new(small_config());
        assert!(state.is_human_turn());

        let state = GameState::new(GameConfig {
            first_move: FirstMove::Ai,
            ..small_config()
        });
        assert!(state.is_ai_turn());
    }

    #[test]
    fn test_human_move_switches_turn() {
        let mut state = GameState::new(small_config());
        state.try_place_stone(Pos::new(3, 3)).unwrap();

        assert_eq!(state.grid.get(Pos::new(3, 3)), HUMAN);
        assert!(state.is_ai_turn());
        assert_eq!(state.last_move, Some(Pos::new(3, 3)));
    }

    #[test]
    fn test_rejects_bad_moves() {
        let mut state = GameState::new(small_config());
        state.try_place_stone(Pos::new(3, 3)).unwrap();
        assert!(state.try_place_stone(Pos::new(3, 4)).is_err(), "not human turn");

        state.apply_ai_result(fake_result(Some(Pos::new(2, 2))));
        assert!(state.try_place_stone(Pos::new(2, 2)).is_err(), "occupied");
    }

    #[test]
    fn test_win_records_line() {
        let mut state = GameState::new(small_config());
        for c in 0..3 {
            state.try_place_stone(Pos::new(0, c)).unwrap();
            state.apply_ai_result(fake_result(Some(Pos::new(6, c))));
        }
        state.try_place_stone(Pos::new(0, 3)).unwrap();

        let result = state.game_over.clone().unwrap();
        let expected: Vec<Pos> = (0..4).map(|c| Pos::new(0, c)).collect();
        assert_eq!(result.winning_line(), Some(expected.as_slice()));
        assert!(state.try_place_stone(Pos::new(5, 5)).is_err());
    }

    #[test]
    fn test_no_ai_move_is_draw() {
        let mut state = GameState::new(small_config());
        state.try_place_stone(Pos::new(3, 3)).unwrap();
        state.apply_ai_result(fake_result(None));
        assert_eq!(state.game_over, Some(GameResult::Draw));
    }

    #[test]
    fn test_undo_removes_human_and_ai_pair() {
        let mut state = GameState::new(small_config());
        state.try_place_stone(Pos::new(3, 3)).unwrap();
        state.apply_ai_result(fake_result(Some(Pos::new(3, 4))));
        state.try_place_stone(Pos::new(2, 2)).unwrap();
        state.apply_ai_result(fake_result(Some(Pos::new(4, 4))));

        state.undo();
        assert_eq!(state.move_history.len(), 2);
        assert_eq!(state.grid.get(Pos::new(2, 2)), Stone::Empty);
        assert_eq!(state.grid.get(Pos::new(4, 4)), Stone::Empty);
        assert_eq!(state.last_move, Some(Pos::new(3, 4)));
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_undo_after_human_win() {
        let mut state = GameState::new(small_config());
        for c in 0..3 {
            state.try_place_stone(Pos::new(0, c)).unwrap();
            state.apply_ai_result(fake_result(Some(Pos::new(6, c))));
        }
        state.try_place_stone(Pos::new(0, 3)).unwrap();
        assert!(state.game_over.is_some());

        state.undo();
        assert!(state.game_over.is_none());
        assert!(state.is_human_turn());
        assert_eq!(state.grid.get(Pos::new(0, 3)), Stone::Empty);
        assert_eq!(state.grid.get(Pos::new(6, 2)), AI);
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut state = GameState::new(small_config());
        state.try_place_stone(Pos::new(3, 3)).unwrap();
        state.reset();

        assert!(state.grid.is_board_empty());
        assert_eq!(state.grid.rows(), 7);
        assert!(state.move_history.is_empty());
    }
}
