use crate::log;
use super::board::Board;
use super::history::History;
use super::status::{game_status, status_text};
use super::types::{GameStatus, Mark, MoveRejection, UndoRejection, WinningLine};
use super::win_detector::{calculate_winner, winning_line};

/// Owns the game history for the lifetime of the window. All changes go
/// through [`place_mark`](Self::place_mark) and [`undo`](Self::undo).
#[derive(Debug, Default)]
pub struct TicTacToeSession {
    history: History,
}

impl TicTacToeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn board(&self) -> &Board {
        self.history.current()
    }

    pub fn current_turn(&self) -> Mark {
        self.history.current_turn()
    }

    pub fn winner(&self) -> Option<Mark> {
        calculate_winner(self.board())
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(self.board())
    }

    pub fn status(&self) -> GameStatus {
        game_status(self.board())
    }

    pub fn status_text(&self) -> String {
        status_text(self.board(), self.current_turn())
    }

    pub fn move_count(&self) -> usize {
        self.history.move_count()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns the mark that was placed.
    pub fn place_mark(&mut self, index: usize) -> Result<Mark, MoveRejection> {
        let mark = self.current_turn();
        match self.history.try_apply_move(index) {
            Ok(history) => {
                self.history = history;
                log!("Square {} clicked: {}", index, mark);
                if let Some(winner) = self.winner() {
                    log!("{} wins after {} moves", winner, self.move_count());
                }
                Ok(mark)
            }
            Err(rejection) => {
                log!("Move at {} ignored: {}", index, rejection);
                Err(rejection)
            }
        }
    }

    pub fn undo(&mut self) -> Result<(), UndoRejection> {
        match self.history.try_undo() {
            Ok(history) => {
                self.history = history;
                log!("Undo, {} moves left, {} to play", self.move_count(), self.current_turn());
                Ok(())
            }
            Err(rejection) => {
                log!("Undo ignored: {}", rejection);
                Err(rejection)
            }
        }
    }

    pub fn restart(&mut self) {
        self.history = History::new();
        log!("New game started");
    }
}
