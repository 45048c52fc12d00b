//! The grid placement engine.
//!
//! Words are placed longest-first, each with a bounded number of random trials. A letter may only land
//! on a cell that is empty or already holds the same letter, and a letter landing on an empty cell must
//! not touch any other letter, diagonals included. Words that run out of trials are reported in
//! [GenerationResult::failed] rather than treated as an error.

use std::{cmp::Reverse, ops::Index};

use array2d::Array2D;
use log::{debug, trace};
use rand::Rng;

use crate::{
    direction::{DirectionSet, WordDirection},
    placement::Placement,
};

/// Random trials spent on a single word before it is reported as failed.
pub const MAX_ATTEMPTS: usize = 2000;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The outcome of one generation: a fully lettered grid, its answer key and where every word went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    grid: Array2D<char>,
    mask: Array2D<bool>,
    owners: Array2D<Option<usize>>,
    placements: Vec<Placement>,
    failed: Vec<String>,
}

impl GenerationResult {
    /// Side length of the square grid.
    pub fn size(&self) -> usize {
        self.grid.num_rows()
    }

    /// The lettered grid, indexed by `(row, column)`.
    pub fn grid(&self) -> &Array2D<char> {
        &self.grid
    }

    /// `true` exactly on the cells covered by some placed word.
    pub fn mask(&self) -> &Array2D<bool> {
        &self.mask
    }

    /// Input index of the first word that claimed each cell, `None` for noise cells.
    pub fn owners(&self) -> &Array2D<Option<usize>> {
        &self.owners
    }

    /// Placed words, in the order they were placed (longest first).
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Words that could not be placed, in the order they were attempted.
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    /// Whether every word made it into the grid.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Gets the letter at the specified coordinate, returning [`Option::None`] if it is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.grid.get(row, column).copied()
    }

    /// Whether the cell is part of the answer key.
    pub fn is_answer(&self, row: usize, column: usize) -> bool {
        self.mask.get(row, column).copied().unwrap_or(false)
    }

    /// Looks up where a word was placed.
    pub fn placement_of(&self, word: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word == word)
    }
}

impl Index<(usize, usize)> for GenerationResult {
    type Output = char;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.grid[index]
    }
}

/// Mutable generation state, discarded once the grid is filled.
struct Board {
    size: usize,
    letters: Array2D<Option<char>>,
    mask: Array2D<bool>,
    owners: Array2D<Option<usize>>,
}

impl Board {
    fn new(size: usize) -> Self {
        Self {
            size,
            letters: Array2D::filled_with(None, size, size),
            mask: Array2D::filled_with(false, size, size),
            owners: Array2D::filled_with(None, size, size),
        }
    }

    fn has_occupied_neighbor(&self, (row, column): (usize, usize)) -> bool {
        (-1..=1isize)
            .flat_map(|d_row| (-1..=1isize).map(move |d_column| (d_row, d_column)))
            .filter(|&step| step != (0, 0))
            .filter_map(|(d_row, d_column)| {
                Some((row.checked_add_signed(d_row)?, column.checked_add_signed(d_column)?))
            })
            .any(|(r, c)| matches!(self.letters.get(r, c), Some(Some(_))))
    }

    /// Returns the cells the word would occupy, or `None` if the placement is infeasible.
    fn can_place(
        &self,
        word: &[char],
        begin: (usize, usize),
        direction: WordDirection,
    ) -> Option<Vec<(usize, usize)>> {
        let mut cells = Vec::with_capacity(word.len());

        for (i, &letter) in word.iter().enumerate() {
            let cell = direction.advance(begin, i, self.size)?;

            match self.letters[cell] {
                Some(existing) if existing != letter => return None,
                Some(_) => {}
                None if self.has_occupied_neighbor(cell) => return None,
                None => {}
            }

            cells.push(cell);
        }

        Some(cells)
    }

    fn find_placement<R: Rng + ?Sized>(
        &self,
        word: &[char],
        directions: DirectionSet,
        rng: &mut R,
    ) -> Option<(WordDirection, Vec<(usize, usize)>)> {
        for _ in 0..MAX_ATTEMPTS {
            let direction = directions.choose(rng);

            let Some((rows, columns)) = direction.start_ranges(word.len(), self.size) else {
                continue;
            };

            let begin = (rng.gen_range(rows), rng.gen_range(columns));

            if let Some(cells) = self.can_place(word, begin, direction) {
                return Some((direction, cells));
            }
        }

        None
    }

    fn commit(&mut self, word: &[char], index: usize, cells: &[(usize, usize)]) {
        for (&letter, &cell) in word.iter().zip(cells) {
            self.letters[cell] = Some(letter);
            self.mask[cell] = true;

            if self.owners[cell].is_none() {
                self.owners[cell] = Some(index);
            }
        }
    }

    fn fill<R: Rng + ?Sized>(
        self,
        rng: &mut R,
    ) -> (Array2D<char>, Array2D<bool>, Array2D<Option<usize>>) {
        let mut noise = 0;
        let mut cells = self.letters.elements_row_major_iter();

        let grid = Array2D::filled_by_row_major(
            || match cells.next() {
                Some(Some(letter)) => *letter,
                _ => {
                    noise += 1;
                    random_letter(rng)
                }
            },
            self.size,
            self.size,
        );

        trace!("filled {} of {} cells with noise", noise, self.size * self.size);

        (grid, self.mask, self.owners)
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
}

/// Places `words` into a `size`×`size` grid and fills the remaining cells with random letters.
///
/// The caller must supply a non-empty list of distinct, uppercase, alphabetic words, each at least two
/// letters long and no longer than `size` (see [WordList](crate::WordList)). Outside that contract the
/// result is unspecified, although a word that cannot fit is simply reported as failed.
///
/// All randomness is drawn from `rng`, so a seeded generator yields the same result every time.
pub fn place<R: Rng + ?Sized>(
    words: &[String],
    size: usize,
    allow_diagonals: bool,
    rng: &mut R,
) -> GenerationResult {
    let directions = DirectionSet::new(allow_diagonals);
    let mut board = Board::new(size);
    let mut placements = Vec::with_capacity(words.len());
    let mut failed = Vec::new();

    // sort_by_key is stable, so equal lengths keep their input order
    let mut order: Vec<usize> = (0..words.len()).collect();
    order.sort_by_key(|&i| Reverse(words[i].chars().count()));

    for index in order {
        let word = &words[index];
        let letters: Vec<char> = word.chars().collect();

        match board.find_placement(&letters, directions, rng) {
            Some((direction, cells)) => {
                let placement = Placement {
                    word: word.clone(),
                    index,
                    direction,
                    cells,
                };
                debug!("placed {} at {:?} going {:?}", word, placement.start(), direction);

                board.commit(&letters, index, &placement.cells);
                placements.push(placement);
            }
            None => {
                debug!("could not place {} after {} attempts", word, MAX_ATTEMPTS);
                failed.push(word.clone());
            }
        }
    }

    let (grid, mask, owners) = board.fill(rng);

    GenerationResult {
        grid,
        mask,
        owners,
        placements,
        failed,
    }
}

/// Like [place], drawing randomness from the thread-local generator.
pub fn generate(words: &[String], size: usize, allow_diagonals: bool) -> GenerationResult {
    place(words, size, allow_diagonals, &mut rand::thread_rng())
}
