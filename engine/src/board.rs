use super::types::Mark;

pub const CELL_COUNT: usize = 9;

/// 3x3 board stored row-major: cells 0,1,2 are the top row, 6,7,8 the bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn get(&self, cell: usize) -> Mark {
        self.cells[cell]
    }

    pub fn set(&mut self, cell: usize, mark: Mark) {
        self.cells[cell] = mark;
    }

    pub fn clear(&mut self, cell: usize) {
        self.cells[cell] = Mark::Empty;
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (cell, &mark) in self.cells.iter().enumerate() {
            if mark == Mark::Empty {
                moves.push(cell);
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    #[cfg(test)]
    pub fn from_marks(marks: [Mark; CELL_COUNT]) -> Self {
        Self { cells: marks }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().len(), CELL_COUNT);
        assert!(!board.is_full());
    }

    #[test]
    fn test_empty_cells_skips_marked_cells() {
        let mut board = Board::new();
        board.set(0, Mark::X);
        board.set(4, Mark::O);
        board.set(8, Mark::X);

        assert_eq!(board.empty_cells(), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_clear_reopens_cell() {
        let mut board = Board::new();
        board.set(4, Mark::O);
        board.clear(4);

        assert_eq!(board.get(4), Mark::Empty);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for cell in 0..CELL_COUNT {
            board.set(cell, if cell % 2 == 0 { Mark::X } else { Mark::O });
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }
}
