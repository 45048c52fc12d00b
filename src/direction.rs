//! Directions a word can run in, and the start positions that keep a word inside the grid.

use std::ops::RangeInclusive;

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

/// The direction a word is placed in inside the word search grid.
///
/// Rows grow downwards and columns grow to the right, so [WordDirection::Up] steps to a smaller row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum WordDirection {
    /// The word goes up from the start position.
    Up,

    /// The word goes down from the start position.
    Down,

    /// The word goes left from the start position.
    Left,

    /// The word goes right from the start position.
    Right,

    /// The word goes diagonally up and left from the start position.
    DiagonalUpLeft,

    /// The word goes diagonally up and right from the start position.
    DiagonalUpRight,

    /// The word goes diagonally down and left from the start position.
    DiagonalDownLeft,

    /// The word goes diagonally down and right from the start position.
    DiagonalDownRight,
}

const ORTHOGONAL: [WordDirection; 4] = [
    WordDirection::Up,
    WordDirection::Down,
    WordDirection::Left,
    WordDirection::Right,
];

const ALL: [WordDirection; 8] = [
    WordDirection::Up,
    WordDirection::Down,
    WordDirection::Left,
    WordDirection::Right,
    WordDirection::DiagonalUpLeft,
    WordDirection::DiagonalUpRight,
    WordDirection::DiagonalDownLeft,
    WordDirection::DiagonalDownRight,
];

impl WordDirection {
    /// The unit step `(d_row, d_column)` taken from one letter to the next.
    pub fn step(self) -> (isize, isize) {
        use WordDirection::*;

        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
            DiagonalUpLeft => (-1, -1),
            DiagonalUpRight => (-1, 1),
            DiagonalDownLeft => (1, -1),
            DiagonalDownRight => (1, 1),
        }
    }

    /// Whether the direction moves along both axes.
    pub fn is_diagonal(self) -> bool {
        let (d_row, d_column) = self.step();
        d_row != 0 && d_column != 0
    }

    /// The coordinate reached after `steps` letters from `begin`, or `None` if it leaves a `size`×`size` grid.
    pub fn advance(
        self,
        begin: (usize, usize),
        steps: usize,
        size: usize,
    ) -> Option<(usize, usize)> {
        let (d_row, d_column) = self.step();
        let steps = isize::try_from(steps).ok()?;

        let row = begin.0.checked_add_signed(d_row * steps)?;
        let column = begin.1.checked_add_signed(d_column * steps)?;

        (row < size && column < size).then_some((row, column))
    }

    /// Every start position `(row, column)` from which a word of `len` letters stays in bounds.
    ///
    /// Returns `None` when no such start exists, which happens whenever the word is longer than the grid.
    pub fn start_ranges(
        self,
        len: usize,
        size: usize,
    ) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
        let (d_row, d_column) = self.step();
        Some((axis_range(d_row, len, size)?, axis_range(d_column, len, size)?))
    }
}

/// Valid starts along one axis for a word of `len` letters moving by `delta`.
fn axis_range(delta: isize, len: usize, size: usize) -> Option<RangeInclusive<usize>> {
    if len == 0 || len > size {
        return None;
    }

    Some(match delta.signum() {
        1 => 0..=size - len,
        -1 => len - 1..=size - 1,
        _ => 0..=size - 1,
    })
}

/// The fixed set of directions words may be placed in during one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DirectionSet {
    /// Up, down, left and right.
    Orthogonal,

    /// The four orthogonal directions plus the four diagonals.
    WithDiagonals,
}

impl DirectionSet {
    /// Picks the set matching the `allow_diagonals` flag.
    pub fn new(allow_diagonals: bool) -> Self {
        if allow_diagonals {
            DirectionSet::WithDiagonals
        } else {
            DirectionSet::Orthogonal
        }
    }

    /// The directions in this set.
    pub fn directions(self) -> &'static [WordDirection] {
        match self {
            DirectionSet::Orthogonal => &ORTHOGONAL,
            DirectionSet::WithDiagonals => &ALL,
        }
    }

    /// Returns a uniformly random direction from the set.
    pub fn choose<R: Rng + ?Sized>(self, rng: &mut R) -> WordDirection {
        // Both sets are non-empty constants.
        *self.directions().choose(rng).unwrap_or(&WordDirection::Right)
    }
}
