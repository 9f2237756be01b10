use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Text and mark of a single cell, as it is stored and as it is dealt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "t")]
    pub text: String,
    #[serde(rename = "m")]
    pub marked: bool,
}

impl Entry {
    pub fn new(text: impl Into<String>, marked: bool) -> Self {
        Self {
            text: text.into(),
            marked,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub text: String,
    pub marked: bool,
    /// Horizontal position of the dauber stamp in percent, set by the last click.
    pub dauber: Option<f64>,
}

impl Cell {
    pub fn toggle(&mut self) -> bool {
        self.marked = !self.marked;
        self.marked
    }

    /// Places the dauber stamp at `fraction` of the cell width.
    pub fn stamp_at(&mut self, fraction: f64) {
        self.dauber = fraction.is_finite().then_some(fraction * 100.0);
    }

    pub fn to_entry(&self) -> Entry {
        Entry::new(self.text.clone(), self.marked)
    }
}

/// Row-major cell index to `(row, column)`.
pub const fn grid_position(index: usize) -> Option<(usize, usize)> {
    if index < BOARD_CELLS {
        Some((index / BOARD_WIDTH, index % BOARD_WIDTH))
    } else {
        None
    }
}

/// The 5x5 card. Its shape is fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default((BOARD_WIDTH, BOARD_WIDTH)),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(grid_position(index)?)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(grid_position(index)?)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Overwrites text and mark of every cell, keeping the dauber positions.
    pub fn fill(&mut self, entries: &[Entry]) -> Result<()> {
        if entries.len() != self.len() {
            return Err(BingoError::WrongCellCount {
                expected: self.len(),
                found: entries.len(),
            });
        }

        for (cell, entry) in self.cells.iter_mut().zip(entries) {
            cell.text.clone_from(&entry.text);
            cell.marked = entry.marked;
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.cells().map(Cell::to_entry).collect()
    }

    /// True until the first successful fill.
    pub fn is_blank(&self) -> bool {
        self.cells().all(|cell| cell.text.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn numbered(marked: impl Fn(usize) -> bool) -> Vec<Entry> {
        (0..BOARD_CELLS)
            .map(|i| Entry::new(format!("clue {i}"), marked(i)))
            .collect()
    }

    #[test]
    fn new_board_has_25_blank_cells() {
        let board = Board::new();

        assert_eq!(board.len(), 25);
        assert_eq!(board.cells().count(), 25);
        for cell in board.cells() {
            assert_eq!(cell, &Cell::default());
            assert!(!cell.marked);
            assert_eq!(cell.dauber, None);
        }
    }

    #[test]
    fn fill_writes_each_entry_to_its_cell() {
        let mut board = Board::new();
        let entries = numbered(|i| i % 3 == 0);

        board.fill(&entries).unwrap();

        for (i, entry) in entries.iter().enumerate() {
            let cell = board.cell(i).unwrap();
            assert_eq!(cell.text, entry.text);
            assert_eq!(cell.marked, entry.marked);
        }
        assert_eq!(board.entries(), entries);
    }

    #[test]
    fn fill_rejects_short_lists_and_leaves_board_alone() {
        let mut board = Board::new();
        board.fill(&numbered(|_| true)).unwrap();
        let before = board.clone();

        let err = board.fill(&numbered(|_| false)[..24]).unwrap_err();

        assert_eq!(
            err,
            BingoError::WrongCellCount {
                expected: 25,
                found: 24
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn board_is_blank_until_filled() {
        let mut board = Board::new();
        assert!(board.is_blank());

        board.fill(&numbered(|_| false)).unwrap();
        assert!(!board.is_blank());
    }

    #[test]
    fn row_major_positions() {
        assert_eq!(grid_position(0), Some((0, 0)));
        assert_eq!(grid_position(4), Some((0, 4)));
        assert_eq!(grid_position(5), Some((1, 0)));
        assert_eq!(grid_position(FREE_INDEX), Some((2, 2)));
        assert_eq!(grid_position(24), Some((4, 4)));
        assert_eq!(grid_position(25), None);
    }

    #[test]
    fn stamp_records_percent_and_ignores_nan() {
        let mut cell = Cell::default();
        cell.stamp_at(0.25);
        assert_eq!(cell.dauber, Some(25.0));

        cell.stamp_at(f64::NAN);
        assert_eq!(cell.dauber, None);
    }
}
