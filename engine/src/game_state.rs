use super::board::{Board, CELL_COUNT};
use super::types::{GameStatus, Mark, WinState};
use super::win_detector::check_win;

/// One game in progress: owns the board, tracks whose turn it is and
/// re-evaluates the position after every placement. X always moves first.
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub winning_line: Option<[usize; 3]>,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, cell: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if cell >= CELL_COUNT {
            return Err("Cell is out of bounds".to_string());
        }

        if self.board.get(cell) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(cell, self.current_mark);
        self.last_move = Some(cell);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        match check_win(&self.board) {
            WinState::Won { mark, line } => {
                self.winning_line = Some(line);
                self.status = match mark {
                    Mark::X => GameStatus::XWon,
                    Mark::O => GameStatus::OWon,
                    Mark::Empty => unreachable!(),
                };
            }
            WinState::Draw => self.status = GameStatus::Draw,
            WinState::InProgress => {}
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Session-lifetime win/loss/draw counters. Not persisted anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}
