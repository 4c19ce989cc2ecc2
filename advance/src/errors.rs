use crate::{Color, BOARD_SIZE};

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Board`](crate::Board),
/// i.e. for loading a board from its text grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardParseError {
    MissingRows { found: usize },
    ExtraRow { row: usize },
    WrongRowLength { row: usize, length: usize },
    UnrecognizedIcon { row: usize, col: usize, icon: char },
}

impl std::error::Error for BoardParseError {}

impl std::fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardParseError::MissingRows { found } => write!(
                f,
                "Ran out of data before reading full board: expected {} rows, found {}",
                BOARD_SIZE, found
            ),
            BoardParseError::ExtraRow { row } => {
                write!(f, "Unexpected data in row {} after the end of the board", row)
            }
            BoardParseError::WrongRowLength { row, length } => write!(
                f,
                "Row {} is not the right length: expected {} characters, found {}",
                row, BOARD_SIZE, length
            ),
            BoardParseError::UnrecognizedIcon { row, col, icon } => {
                write!(f, "Unrecognised icon '{}' at [{}, {}]", icon, row, col)
            }
        }
    }
}

/// The acting side cannot make any legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoLegalMove {
    pub color: Color,
}

impl std::error::Error for NoLegalMove {}

impl std::fmt::Display for NoLegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Impossible to make any legal moves for {}", self.color)
    }
}
