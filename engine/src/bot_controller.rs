use super::board::{Board, CELL_COUNT};
use super::session_rng::SessionRng;
use super::types::{Difficulty, Mark, WinState};
use super::win_detector::check_win;

/// The bot always plays second, as O. The human opponent is X.
const BOT_MARK: Mark = Mark::O;
const HUMAN_MARK: Mark = Mark::X;

/// Chance that the High tier plays a random move instead of searching,
/// which keeps it beatable.
const HIGH_BLUNDER_CHANCE: f64 = 0.2;

/// Picks the bot's cell for the given difficulty. Returns `None` when the
/// board is full. The caller's board is never modified; the caller applies
/// the returned cell itself.
pub fn select_move(board: &Board, difficulty: Difficulty, rng: &mut SessionRng) -> Option<usize> {
    let available = board.empty_cells();
    if available.is_empty() {
        return None;
    }
    debug_assert!(
        check_win(board) == WinState::InProgress,
        "select_move called on a finished game"
    );

    match difficulty {
        Difficulty::Easy => random_move(&available, rng),
        Difficulty::Normal => normal_move(board, &available, rng),
        Difficulty::High => {
            // The blunder roll happens first; otherwise High falls through
            // to the full search.
            if rng.random_f64() < HIGH_BLUNDER_CHANCE {
                random_move(&available, rng)
            } else {
                minimax_move(board, &available)
            }
        }
        Difficulty::VeryHigh => minimax_move(board, &available),
    }
}

fn random_move(available: &[usize], rng: &mut SessionRng) -> Option<usize> {
    let idx = rng.random_range(0..available.len());
    Some(available[idx])
}

/// Normal tier: take an immediate win, else block the opponent's immediate
/// win, else play randomly. Probe scans run in ascending cell order.
fn normal_move(board: &Board, available: &[usize], rng: &mut SessionRng) -> Option<usize> {
    let mut scratch = board.clone();

    if let Some(cell) = find_winning_cell(&mut scratch, BOT_MARK, available) {
        return Some(cell);
    }

    if let Some(cell) = find_winning_cell(&mut scratch, HUMAN_MARK, available) {
        return Some(cell);
    }

    random_move(available, rng)
}

fn find_winning_cell(board: &mut Board, mark: Mark, available: &[usize]) -> Option<usize> {
    for &cell in available {
        board.set(cell, mark);
        let won = matches!(check_win(board), WinState::Won { mark: winner, .. } if winner == mark);
        board.clear(cell);

        if won {
            return Some(cell);
        }
    }
    None
}

/// Exhaustive search over the remaining game tree. Candidates are scored in
/// ascending cell order with a strict-improvement comparison, so equal
/// scores resolve to the lowest cell.
fn minimax_move(board: &Board, available: &[usize]) -> Option<usize> {
    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for &cell in available {
        scratch.set(cell, BOT_MARK);
        let score = minimax(&mut scratch, 0, false);
        scratch.clear(cell);

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}

/// Scores a position from the bot's point of view: a bot win at ply `depth`
/// is worth `10 - depth`, a loss `depth - 10`, a draw 0, so nearer wins and
/// farther losses score higher. Recurses to terminal positions only; at 9
/// cells no cutoff is needed.
fn minimax(board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
    match check_win(board) {
        WinState::Won { mark, .. } => {
            return if mark == BOT_MARK {
                10 - depth
            } else {
                depth - 10
            };
        }
        WinState::Draw => return 0,
        WinState::InProgress => {}
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for cell in 0..CELL_COUNT {
            if board.get(cell) == Mark::Empty {
                board.set(cell, BOT_MARK);
                best = best.max(minimax(board, depth + 1, false));
                board.clear(cell);
            }
        }
        best
    } else {
        let mut worst = i32::MAX;
        for cell in 0..CELL_COUNT {
            if board.get(cell) == Mark::Empty {
                board.set(cell, HUMAN_MARK);
                worst = worst.min(minimax(board, depth + 1, true));
                board.clear(cell);
            }
        }
        worst
    }
}
