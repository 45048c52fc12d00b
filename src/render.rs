//! Display-ready views of a generated puzzle.
//!
//! Rendering is a pure function of the [GenerationResult], the caller's word list and the
//! [RenderOptions], so the same inputs always draw the same puzzle.

use std::fmt::Display;

use serde::Serialize;

use crate::engine::GenerationResult;

/// Options that change how a puzzle is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Highlight the cells belonging to placed words.
    pub show_answers: bool,
}

/// One drawn grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// The letter in the cell.
    pub letter: char,

    /// Whether the cell is highlighted as part of the answer key.
    pub highlighted: bool,

    /// Input index of the word owning the cell, only set while answers are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<usize>,
}

/// An entry of the word list printed next to the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    /// The word as entered.
    pub word: String,

    /// Whether the word can be found in the grid.
    pub placed: bool,
}

/// A puzzle laid out for display: grid cells row by row, then the word list in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedPuzzle {
    /// Grid cells, one `Vec` per row.
    pub rows: Vec<Vec<CellView>>,

    /// The word list in the order the user entered it.
    pub words: Vec<WordEntry>,

    /// Whether the answer key is shown.
    pub show_answers: bool,
}

/// Lays out `result` for display. `words` is the caller's list in its original order.
pub fn render(
    result: &GenerationResult,
    words: &[String],
    options: RenderOptions,
) -> RenderedPuzzle {
    let rows = result
        .grid()
        .rows_iter()
        .enumerate()
        .map(|(row, letters)| {
            letters
                .enumerate()
                .map(|(column, &letter)| {
                    let highlighted = options.show_answers && result.is_answer(row, column);
                    let owner = if highlighted {
                        result.owners()[(row, column)]
                    } else {
                        None
                    };

                    CellView {
                        letter,
                        highlighted,
                        owner,
                    }
                })
                .collect()
        })
        .collect();

    let words = words
        .iter()
        .map(|word| WordEntry {
            word: word.clone(),
            placed: result.placement_of(word).is_some(),
        })
        .collect();

    RenderedPuzzle {
        rows,
        words,
        show_answers: options.show_answers,
    }
}

impl Display for RenderedPuzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self.words.iter();

        for row in &self.rows {
            for cell in row {
                // the answer key blanks out the noise letters
                let ch = if self.show_answers && !cell.highlighted {
                    '.'
                } else {
                    cell.letter
                };
                write!(f, "{} ", ch)?;
            }

            match words_iter.next() {
                Some(entry) => writeln!(f, "| {}", entry)?,
                None => writeln!(f, "|")?,
            }
        }

        // lists longer than the grid spill below it
        for entry in words_iter {
            writeln!(f, "{}| {}", " ".repeat(self.rows.len() * 2), entry)?;
        }

        Ok(())
    }
}

impl Display for WordEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.placed {
            write!(f, "{}", self.word)
        } else {
            write!(f, "{} (not placed)", self.word)
        }
    }
}
