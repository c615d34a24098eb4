mod board;
mod history;
mod session;
mod status;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT, index_to_row_col};
pub use history::History;
pub use session::TicTacToeSession;
pub use status::{game_status, status_text};
pub use types::{GameStatus, Mark, MoveRejection, UndoRejection, WinningLine};
pub use win_detector::{WIN_LINES, calculate_winner, winning_line};
