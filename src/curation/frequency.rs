//! Occurrence counting and ranking for the genre and artist views.

use std::collections::HashMap;

use crate::types::FrequencyEntry;

/// Occurrence counts that remember the order keys were first seen in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frequencies {
    entries: Vec<FrequencyEntry>,
    index: HashMap<String, usize>,
}

impl Frequencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) -> &mut Self {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push(FrequencyEntry {
                    key: key.to_string(),
                    count: 1,
                });
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&pos| self.entries[pos].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the number of values added.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<FrequencyEntry> {
        self.entries
    }
}

/// Counts how often each value occurs.
pub fn count_frequencies<I, S>(values: I) -> Frequencies
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut frequencies = Frequencies::new();
    for value in values {
        frequencies.add(value.as_ref());
    }
    frequencies
}

/// Ranks `counts` by count, highest first.
///
/// The sort is stable: keys with equal counts keep the order in which they
/// were first counted. Ties are not broken by key.
pub fn sort_frequencies(counts: Frequencies) -> Vec<FrequencyEntry> {
    let mut entries = counts.into_entries();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// How many ranked entries a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Top(usize),
    All,
}

/// The first `count` entries of a ranked list.
pub fn top_n(entries: &[FrequencyEntry], count: Count) -> &[FrequencyEntry] {
    match count {
        Count::Top(n) => &entries[..n.min(entries.len())],
        Count::All => entries,
    }
}
