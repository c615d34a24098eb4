use super::board::Board;
use super::types::{GameStatus, Mark};
use super::win_detector::calculate_winner;

// A full board without a winner is still reported as in progress.
pub fn game_status(board: &Board) -> GameStatus {
    match calculate_winner(board) {
        Some(winner) => GameStatus::Won(winner),
        None => GameStatus::InProgress,
    }
}

pub fn status_text(board: &Board, turn: Mark) -> String {
    match game_status(board) {
        GameStatus::Won(winner) => format!("Winner: {}", winner.glyph()),
        GameStatus::InProgress => format!("Next player: {}", turn.glyph()),
    }
}
