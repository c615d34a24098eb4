use super::board::Board;
use super::types::{Mark, MoveRejection, UndoRejection};
use super::win_detector::calculate_winner;

/// Every board the game has passed through, oldest first.
///
/// Never empty: the first entry is the empty starting board and the last one
/// is the board in play. Operations return a new history instead of changing
/// the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    boards: Vec<Board>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Never true, see the type invariant.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn current(&self) -> &Board {
        // boards is never empty
        &self.boards[self.boards.len() - 1]
    }

    pub fn current_turn(&self) -> Mark {
        if self.boards.len() % 2 == 1 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn move_count(&self) -> usize {
        self.boards.len() - 1
    }

    pub fn can_undo(&self) -> bool {
        self.boards.len() > 1
    }

    pub fn try_apply_move(&self, index: usize) -> Result<History, MoveRejection> {
        let board = self.current();
        if let Some(winner) = calculate_winner(board) {
            return Err(MoveRejection::GameOver(winner));
        }
        match board.get(index) {
            None => return Err(MoveRejection::OutOfBounds(index)),
            Some(Mark::Empty) => {}
            Some(_) => return Err(MoveRejection::CellOccupied(index)),
        }

        let mut boards = self.boards.clone();
        boards.push(board.with_mark(index, self.current_turn()));
        Ok(History { boards })
    }

    /// Illegal moves leave the history as it was.
    pub fn apply_move(&self, index: usize) -> History {
        self.try_apply_move(index).unwrap_or_else(|_| self.clone())
    }

    pub fn try_undo(&self) -> Result<History, UndoRejection> {
        if !self.can_undo() {
            return Err(UndoRejection::AtInitialBoard);
        }
        let mut boards = self.boards.clone();
        boards.pop();
        Ok(History { boards })
    }

    /// The starting board cannot be undone; the history is returned as is.
    pub fn undo(&self) -> History {
        self.try_undo().unwrap_or_else(|_| self.clone())
    }
}
