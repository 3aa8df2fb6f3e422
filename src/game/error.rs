use thiserror::Error;

/// Errors returned by the game engine.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The symbol set cannot fill the board.
    #[error("Need at least {required} distinct symbols to build a board, got {supplied}")]
    InvalidConfig { required: usize, supplied: usize },
    #[error("Cell ({row}, {col}) is outside the board")]
    InvalidCoordinate { row: usize, col: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
