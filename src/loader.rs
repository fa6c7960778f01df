use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use hashbrown::HashSet;

use crate::error::Result;

/// Normalize one line of a word list, or `None` when the entry should be skipped:
/// blank lines, single characters and `'s` possessives.
fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if word.chars().count() < 2 || word.ends_with("'s") {
        return None;
    }
    Some(word)
}

/// One word per line, lowercased, de-duplicated in first-seen order.
pub fn parse_word_list(text: &str) -> Vec<String> {
    collect_words(text.lines().map(str::to_string))
}

pub fn read_word_list<R: Read>(reader: R) -> Result<Vec<String>> {
    let lines = BufReader::new(reader)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()?;
    Ok(collect_words(lines.into_iter()))
}

pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let words = read_word_list(file)?;
    tracing::info!(path = %path.as_ref().display(), words = words.len(), "loaded word list");
    Ok(words)
}

fn collect_words(lines: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    lines
        .filter_map(|line| normalize(&line))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
