use std::{
    io::{BufRead, BufReader},
    path::Path,
};

use word_search_grid::split_words;

/// Words read from a word file, plus its title line if it had one.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WordFile {
    pub title: Option<String>,
    pub words: Vec<String>,
}

/// Opens `path`, or stdin for `-`, and reads it as a word file.
pub fn read_word_file(path: &Path) -> std::io::Result<WordFile> {
    if path.as_os_str() == "-" {
        read_words(BufReader::new(std::io::stdin()))
    } else {
        read_words(BufReader::new(std::fs::File::open(path)?))
    }
}

/// Reads one or more words per line. A line starting with `#` sets the title.
pub fn read_words<R: BufRead>(input: R) -> std::io::Result<WordFile> {
    let mut file = WordFile::default();

    for line in input.lines() {
        let line = line?;

        if let Some(rest) = line.strip_prefix('#') {
            file.title = Some(rest.trim().to_owned());
        } else {
            file.words.extend(split_words(&line).map(str::to_owned));
        }
    }

    Ok(file)
}
