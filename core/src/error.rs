use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BingoError {
    #[error("Expected {expected} cells, got {found}")]
    WrongCellCount { expected: usize, found: usize },
    #[error("Need at least {needed} clues to fill a card, got {found}")]
    NotEnoughClues { needed: usize, found: usize },
    #[error("No cell at index {0}")]
    InvalidIndex(usize),
    #[error("Malformed saved board: {0}")]
    Snapshot(String),
    #[error("Storage failure: {0}")]
    Storage(String),
}

pub type Result<T> = core::result::Result<T, BingoError>;
