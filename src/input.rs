//! Turning raw user input into a word list the engine can accept.

use std::collections::HashSet;

use thiserror::Error;

/// Smallest grid size accepted from users.
pub const MIN_GRID_SIZE: usize = 5;

/// Largest grid size accepted from users.
pub const MAX_GRID_SIZE: usize = 30;

/// Shortest word accepted.
pub const MIN_WORD_LEN: usize = 2;

/// Reasons user input can't be turned into a puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No words were given.
    #[error("enter at least one word")]
    Empty,

    /// A word contains something other than the letters A to Z.
    #[error("{0:?} may only contain the letters A to Z")]
    NonAlphabetic(String),

    /// A word is shorter than [MIN_WORD_LEN].
    #[error("{0:?} is too short, words need at least {} letters", MIN_WORD_LEN)]
    TooShort(String),

    /// A word doesn't fit across the grid.
    #[error("{word:?} is longer than the grid size of {size}")]
    TooLong {
        /// The offending word.
        word: String,
        /// The grid size it was checked against.
        size: usize,
    },

    /// The grid size is outside [MIN_GRID_SIZE]..=[MAX_GRID_SIZE].
    #[error("grid size must be between {} and {}, got {0}", MIN_GRID_SIZE, MAX_GRID_SIZE)]
    InvalidSize(usize),
}

/// Splits raw input on commas and whitespace, skipping empty pieces.
pub fn split_words(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|w| !w.is_empty())
}

/// A validated list of distinct uppercase words, in the order the user entered them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parses words separated by whitespace or commas and checks them against a grid of `size`.
    ///
    /// Words are uppercased and duplicates after the first occurrence are dropped.
    pub fn parse(raw: &str, size: usize) -> Result<Self, InputError> {
        Self::from_words(split_words(raw), size)
    }

    /// Validates already separated words. Blank entries are skipped.
    pub fn from_words<I, S>(words: I, size: usize) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(InputError::InvalidSize(size));
        }

        let mut seen = HashSet::new();
        let mut list = Vec::new();

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }

            let word = word.to_ascii_uppercase();

            if !word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(InputError::NonAlphabetic(word));
            }

            let len = word.len();
            if len < MIN_WORD_LEN {
                return Err(InputError::TooShort(word));
            }
            if len > size {
                return Err(InputError::TooLong { word, size });
            }

            if seen.insert(word.clone()) {
                list.push(word);
            }
        }

        if list.is_empty() {
            return Err(InputError::Empty);
        }

        Ok(Self { words: list })
    }

    /// The words in input order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a parsed list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word.
    pub fn max_word_len(&self) -> usize {
        self.words.iter().map(String::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_keeps_order() {
        let list = WordList::parse("dog, cat\nbird", 10).unwrap();
        assert_eq!(list.words(), ["DOG", "CAT", "BIRD"]);
    }

    #[test]
    fn splits_on_commas_and_whitespace() {
        let words: Vec<&str> = split_words(" cat,dog,, owl\t\nbird ").collect();
        assert_eq!(words, ["cat", "dog", "owl", "bird"]);
    }

    #[test]
    fn drops_duplicates() {
        let list = WordList::parse("cat Dog CAT dog owl", 10).unwrap();
        assert_eq!(list.words(), ["CAT", "DOG", "OWL"]);
        assert_eq!(list.max_word_len(), 3);
    }

    #[test]
    fn empty_input() {
        assert_eq!(WordList::parse(" , \n ", 10), Err(InputError::Empty));
    }

    #[test]
    fn rejects_bad_words() {
        assert_eq!(
            WordList::parse("cat d0g", 10),
            Err(InputError::NonAlphabetic("D0G".into()))
        );
        assert_eq!(
            WordList::parse("é", 10),
            Err(InputError::NonAlphabetic("é".into()))
        );
        assert_eq!(WordList::parse("a", 10), Err(InputError::TooShort("A".into())));
        assert_eq!(
            WordList::parse("magnificent", 10),
            Err(InputError::TooLong {
                word: "MAGNIFICENT".into(),
                size: 10
            })
        );
    }

    #[test]
    fn word_as_long_as_grid_is_fine() {
        assert!(WordList::parse("abcde", 5).is_ok());
    }

    #[test]
    fn rejects_bad_size() {
        assert_eq!(WordList::parse("cat", 4), Err(InputError::InvalidSize(4)));
        assert_eq!(WordList::parse("cat", 31), Err(InputError::InvalidSize(31)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            InputError::InvalidSize(2).to_string(),
            "grid size must be between 5 and 30, got 2"
        );
        assert_eq!(
            InputError::TooShort("A".into()).to_string(),
            "\"A\" is too short, words need at least 2 letters"
        );
    }
}
