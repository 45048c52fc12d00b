//! Where a placed word sits in the grid.

use serde::Serialize;

use crate::direction::WordDirection;

/// A word committed to the grid, with the cells it occupies in reading order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// The placed word.
    pub word: String,

    /// Position of the word in the caller's input list.
    pub index: usize,

    /// The direction the word reads in.
    pub direction: WordDirection,

    /// One `(row, column)` coordinate per letter, starting at the first letter.
    pub cells: Vec<(usize, usize)>,
}

impl Placement {
    /// Coordinate of the first letter.
    pub fn start(&self) -> (usize, usize) {
        self.cells[0]
    }

    /// Whether the word covers the given cell.
    pub fn contains(&self, cell: (usize, usize)) -> bool {
        self.cells.contains(&cell)
    }

    /// Pairs each letter with the cell it sits in.
    pub fn letters(&self) -> impl Iterator<Item = (char, (usize, usize))> + '_ {
        self.word.chars().zip(self.cells.iter().copied())
    }
}
