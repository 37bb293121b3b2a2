use crate::counter::WordCounts;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Remove repeated words, keeping the first occurrence of each in place
pub fn dedupe(words: &[String]) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    words
        .iter()
        .filter(|word| seen.insert(word.as_str()))
        .cloned()
        .collect()
}

/// Compare two words ignoring letter case.
///
/// Each character is lowercased on its own (no locale rules) and the results
/// are compared by code point.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Stable case-insensitive sort; words equal ignoring case keep their order
pub fn sort_words(words: &mut [String]) {
    words.sort_by(|a, b| compare_ignore_case(a, b));
}

/// Distinct words of a count map in report order
pub fn sorted_words(counts: &WordCounts) -> Vec<String> {
    let mut words = dedupe(counts.occurrences());
    sort_words(&mut words);
    words
}
