// Frequency table: word -> occurrence count, in first-occurrence order.

use std::collections::HashMap;

use tracing::debug;

/// Occurrence counts for each distinct word.
///
/// Entries keep the order in which each word first appeared. The chart's
/// tie-break between equal counts relies on this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count every word in `words`.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut table = Self::default();
        for word in words {
            table.add(word.as_ref());
        }
        debug!(distinct = table.len(), total = table.total(), "Counted words");
        table
    }

    fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Count for `word`, or None if it never appeared.
    pub fn get(&self, word: &str) -> Option<u32> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the number of words counted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| u64::from(*c)).sum()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }
}
