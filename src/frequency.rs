//! Word occurrence counts for a single run.

use std::collections::HashMap;

/// A distinct word and how many times it was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: u64,
}

impl FrequencyEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Accumulates word -> count. Only fed by the tokenizer, so it never holds an empty word.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`.
    pub fn record(&mut self, word: String) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of recorded tokens.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Snapshot of the table in no particular order.
    pub fn entries(&self) -> Vec<FrequencyEntry> {
        self.counts
            .iter()
            .map(|(word, &count)| FrequencyEntry::new(word.clone(), count))
            .collect()
    }
}

impl Extend<String> for FrequencyTable {
    fn extend<I: IntoIterator<Item = String>>(&mut self, words: I) {
        for word in words {
            self.record(word);
        }
    }
}

impl FromIterator<String> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = String>>(words: I) -> Self {
        let mut table = Self::new();
        table.extend(words);
        table
    }
}
