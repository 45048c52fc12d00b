use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use word_search_grid::{split_words, Settings};

/// Command line configuration for the word search generator
#[derive(Debug, Clone, Parser)]
#[command(name = "word-search", version)]
#[command(about = "Generate a printable word search grid")]
pub struct Config {
    /// Words to hide in the grid, separated by spaces or commas
    pub words: Vec<String>,

    /// Read words from a file instead (`-` for stdin). A line starting with `#` is the title
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Side length of the square grid
    #[arg(short, long, env = "WORD_SEARCH_SIZE", default_value = "15")]
    pub size: usize,

    /// Allow words to run diagonally
    #[arg(short, long)]
    pub diagonals: bool,

    /// Print the answer key instead of the puzzle
    #[arg(short, long)]
    pub answers: bool,

    /// Seed for the random number generator, to reproduce a grid
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error). Overrides `RUST_LOG` when given
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn settings(&self) -> Settings {
        Settings {
            size: self.size,
            allow_diagonals: self.diagonals,
        }
    }

    /// Words given on the command line, with comma-joined arguments split apart.
    pub fn positional_words(&self) -> Vec<String> {
        self.words
            .iter()
            .flat_map(|arg| split_words(arg))
            .map(str::to_owned)
            .collect()
    }

    /// The level requested with `--log-level`, if any.
    pub fn log_filter(&self) -> Result<Option<LevelFilter>> {
        self.log_level
            .as_deref()
            .map(|level| {
                level
                    .parse()
                    .map_err(|_| anyhow!("Unknown log level {:?}", level))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["word-search", "cat", "dog"]).unwrap();

        assert_eq!(config.words, ["cat", "dog"]);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.seed, None);
        assert!(!config.answers);
        assert_eq!(config.log_level, None);
        assert_eq!(config.log_filter().unwrap(), None);
    }

    #[test]
    fn settings_from_flags() {
        let config = Config::try_parse_from([
            "word-search",
            "--size",
            "12",
            "--diagonals",
            "--seed",
            "5",
            "--format",
            "json",
            "cat",
        ])
        .unwrap();

        assert_eq!(
            config.settings(),
            Settings {
                size: 12,
                allow_diagonals: true
            }
        );
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn positional_words_split_on_commas() {
        let config =
            Config::try_parse_from(["word-search", "cat,dog", "owl", "bee, ant"]).unwrap();

        assert_eq!(config.positional_words(), ["cat", "dog", "owl", "bee", "ant"]);
    }

    #[test]
    fn log_level_flag() {
        let config =
            Config::try_parse_from(["word-search", "--log-level", "debug", "cat"]).unwrap();
        assert_eq!(config.log_filter().unwrap(), Some(LevelFilter::Debug));

        let config =
            Config::try_parse_from(["word-search", "--log-level", "loud", "cat"]).unwrap();
        let err = config.log_filter().unwrap_err();
        assert_eq!(err.to_string(), "Unknown log level \"loud\"");
    }
}
