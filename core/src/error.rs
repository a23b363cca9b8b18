use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be at least one cell wide and tall")]
    EmptyBoard,
    #[error("Too many mines, at least one cell must stay safe")]
    TooManyMines,
    #[error("Board rows must be non-empty and of equal length")]
    InvalidBoardShape,
    #[error("Cell counts do not match the neighbouring mines")]
    MismatchedCounts,
}

pub type Result<T> = core::result::Result<T, GameError>;
