// Tokenizer: strip ASCII punctuation, split on whitespace, lowercase.
//
// Punctuation is removed before splitting, so "don't" becomes "dont" and a
// token made only of punctuation ("---") disappears instead of becoming an
// empty word.

use tracing::debug;

use super::stop_words::is_stop_word;

/// The ordered words extracted from a text, top to bottom, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<String>,
    /// Length in characters of the longest token seen during extraction.
    /// Informational only; stop-word removal does not update it.
    pub longest: usize,
}

impl WordList {
    /// Drop every stop word, keeping the remaining words in order.
    pub fn remove_stop_words(&mut self) {
        let before = self.words.len();
        self.words.retain(|word| !is_stop_word(word));
        debug!(
            removed = before - self.words.len(),
            remaining = self.words.len(),
            "Removed stop words"
        );
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Remove every ASCII punctuation character from `line`.
pub fn strip_punctuation(line: &str) -> String {
    line.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Normalize a single line into lowercase, punctuation-free tokens.
pub fn tokenize_line(line: &str) -> Vec<String> {
    strip_punctuation(line)
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Extract the word list from raw lines in a single pass.
pub fn extract_words<S: AsRef<str>>(lines: &[S]) -> WordList {
    let mut list = WordList::default();

    for line in lines {
        for word in tokenize_line(line.as_ref()) {
            list.longest = list.longest.max(word.chars().count());
            list.words.push(word);
        }
    }

    debug!(words = list.words.len(), longest = list.longest, "Extracted words");
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_punctuation_removes_ascii_set() {
        let all = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
        assert_eq!(strip_punctuation(all), "");
        assert_eq!(strip_punctuation("it's a-ok!"), "its aok");
    }

    #[test]
    fn test_strip_keeps_non_ascii_punctuation() {
        // Only the ASCII set is stripped
        assert_eq!(strip_punctuation("«hi»"), "«hi»");
    }

    #[test]
    fn test_extract_basic() {
        let list = extract_words(&["The cat sat.", "The cat ran!"]);
        assert_eq!(list.words, vec!["the", "cat", "sat", "the", "cat", "ran"]);
        assert_eq!(list.longest, 3);
    }

    #[test]
    fn test_punctuation_only_token_dropped() {
        let list = extract_words(&["hello --- world", "...", "?!"]);
        assert_eq!(list.words, vec!["hello", "world"]);
    }

    #[test]
    fn test_longest_counts_characters() {
        let list = extract_words(&["Über naïve"]);
        assert_eq!(list.words, vec!["über", "naïve"]);
        assert_eq!(list.longest, 5);
    }

    #[test]
    fn test_remove_stop_words_preserves_order() {
        let mut list = extract_words(&["The cat sat. The cat ran!"]);
        list.remove_stop_words();
        assert_eq!(list.words, vec!["cat", "sat", "cat", "ran"]);
    }

    #[test]
    fn test_empty_input() {
        let list = extract_words::<&str>(&[]);
        assert!(list.is_empty());
        assert_eq!(list.longest, 0);
    }
}
