mod app;
mod board;
mod colors;
mod shortcut;

pub use app::TicTacToeApp;
