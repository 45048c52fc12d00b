#![warn(missing_docs)]

//! # Word search grids
//!
//! A crate that generates square word search puzzles and lays them out for printing with an answer key.
//!
//! Words are placed longest-first in random positions and directions. Placed words never touch each other
//! except where one runs over letters that are already there, and leftover cells are filled with random
//! letters. Words that can't be fitted are reported instead of failing the whole puzzle.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use word_search_grid::{Session, Settings, WordList};
//!
//! let words = WordList::parse("cat, dog", 10).unwrap();
//! let settings = Settings { size: 10, allow_diagonals: false };
//! let session = Session::generate(settings, words, &mut StdRng::seed_from_u64(7));
//!
//! assert!(session.warning().is_none());
//! println!("{}", session.render(false));
//! ```

pub mod direction;
pub mod engine;
pub mod input;
pub mod placement;
pub mod render;
pub mod session;

pub use direction::{DirectionSet, WordDirection};
pub use engine::{generate, place, GenerationResult, MAX_ATTEMPTS};
pub use input::{split_words, InputError, WordList, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use placement::Placement;
pub use render::{render, CellView, RenderOptions, RenderedPuzzle, WordEntry};
pub use session::{Session, Settings};
