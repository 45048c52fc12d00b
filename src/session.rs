//! A generated puzzle kept together with the inputs that made it.

use rand::Rng;

use crate::{
    engine::{place, GenerationResult},
    input::WordList,
    render::{render, RenderOptions, RenderedPuzzle},
};

/// Grid settings chosen by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Side length of the square grid.
    pub size: usize,

    /// Whether words may run diagonally.
    pub allow_diagonals: bool,
}

/// A generated puzzle together with the inputs that produced it.
///
/// Regenerating produces a fresh, independent session from the same words and settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    settings: Settings,
    words: WordList,
    result: GenerationResult,
}

impl Session {
    /// Generates a new puzzle.
    pub fn generate<R: Rng + ?Sized>(settings: Settings, words: WordList, rng: &mut R) -> Self {
        let result = place(words.words(), settings.size, settings.allow_diagonals, rng);

        Self {
            settings,
            words,
            result,
        }
    }

    /// Shuffles the same words into a new grid.
    pub fn regenerate<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::generate(self.settings, self.words.clone(), rng)
    }

    /// The settings used for this puzzle.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// The words in the order the user entered them.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// The raw engine output.
    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    /// Lays the puzzle out for display, with or without the answer key.
    pub fn render(&self, show_answers: bool) -> RenderedPuzzle {
        render(
            &self.result,
            self.words.words(),
            RenderOptions { show_answers },
        )
    }

    /// A message naming the words that didn't fit, if any.
    pub fn warning(&self) -> Option<String> {
        match self.result.failed() {
            [] => None,
            [word] => Some(format!("Could not place 1 word: {}. Try a larger grid.", word)),
            failed => Some(format!(
                "Could not place {} words: {}. Try a larger grid.",
                failed.len(),
                failed.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn settings(size: usize) -> Settings {
        Settings {
            size,
            allow_diagonals: true,
        }
    }

    #[test]
    fn regenerate_keeps_inputs() {
        let words = WordList::parse("puzzle grid letter", 10).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let first = Session::generate(settings(10), words.clone(), &mut rng);
        let second = first.regenerate(&mut rng);

        assert_eq!(second.settings(), first.settings());
        assert_eq!(second.words(), &words);
        assert_eq!(second.result().size(), 10);
        assert_ne!(first.result().grid(), second.result().grid());
    }

    #[test]
    fn seeded_regeneration_is_reproducible() {
        let words = WordList::parse("puzzle grid letter", 10).unwrap();
        let session = Session::generate(settings(10), words, &mut StdRng::seed_from_u64(1));

        let a = session.regenerate(&mut StdRng::seed_from_u64(2));
        let b = session.regenerate(&mut StdRng::seed_from_u64(2));

        assert_eq!(a, b);
    }

    #[test]
    fn no_warning_when_everything_fits() {
        let words = WordList::parse("cat dog", 10).unwrap();
        let session = Session::generate(settings(10), words, &mut StdRng::seed_from_u64(3));

        assert_eq!(session.warning(), None);
    }

    #[test]
    fn warning_lists_failed_words() {
        let words = WordList::parse("abcde fghij klmno pqrst uvwxy", 5).unwrap();
        let session = Session::generate(
            Settings {
                size: 5,
                allow_diagonals: false,
            },
            words,
            &mut StdRng::seed_from_u64(5),
        );

        let warning = session.warning().unwrap();
        for word in session.result().failed() {
            assert!(warning.contains(word.as_str()));
        }
    }
}
