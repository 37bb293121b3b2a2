use crate::tokenizer::{words, SeparatorSet};
use rustc_hash::FxHashMap;

/// Per-word counts plus every word occurrence in encounter order
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    /// Maps the exact word text (case-sensitive) to its count
    counts: FxHashMap<String, usize>,

    /// Every word token seen, duplicates included
    occurrences: Vec<String>,

    /// Lines passed through `count_line`
    lines: usize,
}

impl WordCounts {
    /// Create an empty count map
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the words of every line, tokenizing each line independently
    pub fn from_lines<'a, I>(lines: I, separators: &SeparatorSet) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = Self::new();
        for line in lines {
            counts.count_line(line, separators);
        }
        counts
    }

    /// Record one encounter of a word token
    pub fn accumulate(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
        self.occurrences.push(word.to_string());
    }

    /// Tokenize a line and accumulate its words, returning how many were found
    pub fn count_line(&mut self, line: &str, separators: &SeparatorSet) -> usize {
        self.lines += 1;
        let mut found = 0;
        for word in words(line, separators) {
            self.accumulate(word);
            found += 1;
        }
        found
    }

    /// Count for an exact word, if it was seen
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of word tokens seen
    pub fn total(&self) -> usize {
        self.occurrences.len()
    }

    /// Number of lines counted
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Word tokens in encounter order, duplicates included
    pub fn occurrences(&self) -> &[String] {
        &self.occurrences
    }

    /// Iterate over (word, count) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}
