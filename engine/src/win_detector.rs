use super::board::Board;
use super::types::{Mark, WinState};

/// The eight winning lines, in scan order: rows top to bottom, columns left
/// to right, main diagonal, anti-diagonal. The first matching line is the
/// one reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> WinState {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let mark = board.get(a);
        if mark != Mark::Empty && mark == board.get(b) && mark == board.get(c) {
            return WinState::Won { mark, line };
        }
    }

    if board.is_full() {
        return WinState::Draw;
    }

    WinState::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_each_line_is_detected_with_its_cells() {
        for line in WIN_LINES {
            let mut board = Board::new();
            for cell in line {
                board.set(cell, X);
            }

            assert_eq!(check_win(&board), WinState::Won { mark: X, line });
        }
    }

    #[test]
    fn test_o_win_reports_o() {
        let board = Board::from_marks([O, E, X, O, X, E, O, E, X]);

        assert_eq!(
            check_win(&board),
            WinState::Won {
                mark: O,
                line: [0, 3, 6]
            }
        );
    }

    #[test]
    fn test_first_line_in_scan_order_wins_on_overlapping_board() {
        // All nine cells X: every line matches, the top row is scanned first.
        let board = Board::from_marks([X; CELL_COUNT]);

        assert_eq!(
            check_win(&board),
            WinState::Won {
                mark: X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_column_beats_diagonal_in_scan_order() {
        // X holds both the first column and the main diagonal.
        let board = Board::from_marks([X, E, O, X, X, O, X, E, X]);

        assert_eq!(
            check_win(&board),
            WinState::Won {
                mark: X,
                line: [0, 3, 6]
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_marks([X, O, X, X, O, O, O, X, X]);

        assert_eq!(check_win(&board), WinState::Draw);
    }

    #[test]
    fn test_board_with_empty_cell_and_no_line_is_in_progress() {
        let board = Board::from_marks([X, O, X, X, O, O, O, X, E]);

        assert_eq!(check_win(&board), WinState::InProgress);
    }

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(check_win(&Board::new()), WinState::InProgress);
    }

    #[test]
    fn test_check_win_leaves_board_unchanged() {
        let board = Board::from_marks([X, O, E, E, X, E, E, E, O]);
        let snapshot = board.clone();

        let first = check_win(&board);
        let second = check_win(&board);

        assert_eq!(first, second);
        assert_eq!(board, snapshot);
    }
}
