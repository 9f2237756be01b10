use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Shuffles `clues` and lays the first 25 out as a fresh, unmarked card with the free cell in the middle.
pub fn deal<R: Rng + ?Sized>(mut clues: Vec<String>, rng: &mut R) -> Result<Vec<Entry>> {
    if clues.len() < BOARD_CELLS {
        return Err(BingoError::NotEnoughClues {
            needed: BOARD_CELLS,
            found: clues.len(),
        });
    }

    shuffle(&mut clues, rng);
    clues.truncate(BOARD_CELLS);
    clues[FREE_INDEX] = FREE_TEXT.into();

    Ok(clues
        .into_iter()
        .map(|text| Entry::new(text, false))
        .collect())
}
