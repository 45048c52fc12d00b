mod config;
mod output;
mod word_file;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, OutputFormat};
use log::{info, warn};
use output::JsonOutput;
use rand::{rngs::StdRng, Rng, SeedableRng};
use word_file::{read_word_file, WordFile};
use word_search_grid::{Session, WordList};

fn main() -> Result<()> {
    let config = Config::parse();

    // RUST_LOG applies unless --log-level is given
    let mut logger_builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = config.log_filter()? {
        logger_builder.filter_level(level);
    }
    logger_builder.init();

    let WordFile { title, words } = match &config.file {
        Some(path) => read_word_file(path)
            .with_context(|| format!("Failed to read words from {:?}", path))?,
        None => WordFile {
            title: None,
            words: config.positional_words(),
        },
    };

    let words = WordList::from_words(&words, config.size).context("Invalid word list")?;
    info!("{} words, {}x{} grid", words.len(), config.size, config.size);

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Seed: {}", seed);

    let session = Session::generate(config.settings(), words, &mut StdRng::seed_from_u64(seed));
    if let Some(warning) = session.warning() {
        warn!("{}", warning);
    }

    let puzzle = session.render(config.answers);

    match config.format {
        OutputFormat::Text => {
            if let Some(title) = &title {
                println!("{}", title);
                println!();
            }
            print!("{}", puzzle);
        }
        OutputFormat::Json => {
            let output = JsonOutput::new(title.as_deref(), seed, &session, &puzzle);
            println!("{}", output.to_json()?);
        }
    }

    Ok(())
}
