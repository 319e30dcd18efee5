pub mod board;
pub mod bot_controller;
pub mod game_state;
pub mod logger;
pub mod session_rng;
pub mod types;
pub mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::select_move;
pub use game_state::{GameState, ScoreBoard};
pub use session_rng::SessionRng;
pub use types::{Difficulty, GameStatus, Mark, WinState};
pub use win_detector::{WIN_LINES, check_win};
