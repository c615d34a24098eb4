#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum Mark {
    #[default]
    #[display("-")]
    Empty,
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    /// Symbol shown to the player. X uses the decorative ballot cross.
    pub fn glyph(self) -> &'static str {
        match self {
            Mark::X => "✗",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> usize {
        self.cells[0]
    }

    pub fn end(&self) -> usize {
        self.cells[2]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
}

/// Why a move left the history unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    #[display("cell {} is outside the board", _0)]
    OutOfBounds(usize),
    #[display("cell {} is already marked", _0)]
    CellOccupied(usize),
    #[display("game is already won by {}", _0)]
    GameOver(Mark),
}

impl std::error::Error for MoveRejection {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum UndoRejection {
    #[display("nothing to undo")]
    AtInitialBoard,
}

impl std::error::Error for UndoRejection {}
