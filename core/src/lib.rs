#![no_std]

extern crate alloc;

pub use analytics::*;
pub use board::*;
pub use deal::*;
pub use error::*;
pub use persist::*;
pub use session::*;
pub use shuffle::*;

mod analytics;
mod board;
mod deal;
mod error;
mod persist;
mod session;
mod shuffle;

/// Number of cells along one side of the card.
pub const BOARD_WIDTH: usize = 5;

/// Total number of cells on a card.
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Index of the center cell, which always reads [`FREE_TEXT`] on a fresh card.
pub const FREE_INDEX: usize = BOARD_CELLS / 2;

pub const FREE_TEXT: &str = "FREE";

/// Clue file used when the page does not name one.
pub const DEFAULT_CLUES: &str = "film-tropes.json";

/// Saved boards older than this are thrown away in favour of a fresh deal.
pub const STALE_AFTER_SECS: i64 = 2 * 60 * 60;
