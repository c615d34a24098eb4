use super::board::Board;
use super::types::{Mark, WinningLine};

/// Rows, then columns, then diagonals.
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

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn calculate_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(calculate_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in WIN_LINES {
            for mark in [X, O] {
                let board = line
                    .iter()
                    .fold(Board::new(), |board, &index| board.with_mark(index, mark));
                assert_eq!(calculate_winner(&board), Some(mark), "line {:?}", line);
                assert_eq!(winning_line(&board).map(|l| l.cells), Some(line));
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn test_rows_are_checked_before_columns() {
        // Top row and left column both complete.
        let board = Board::from_cells([X, X, X, X, O, O, X, O, O]);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.cells, [0, 1, 2]);
        assert_eq!(line.start(), 0);
        assert_eq!(line.end(), 2);
    }

    #[test]
    fn test_anti_diagonal() {
        let board = Board::from_cells([X, X, O, E, O, E, O, E, X]);
        assert_eq!(calculate_winner(&board), Some(O));
        assert_eq!(winning_line(&board).unwrap().cells, [2, 4, 6]);
    }
}
