// The fixed English stop-word list.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words excluded from counting. Already lowercase.
pub const STOP_WORDS: [&str; 25] = [
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "i", "in",
    "is", "it", "its", "of", "on", "that", "the", "to", "were", "will", "with",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// True if `word` is a stop word. Expects an already-lowercased word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_word_is_a_stop_word() {
        assert_eq!(STOP_WORD_SET.len(), 25);
        for word in STOP_WORDS {
            assert!(is_stop_word(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn test_matching_is_exact() {
        assert!(!is_stop_word("The"));
        assert!(!is_stop_word("cat"));
        assert!(!is_stop_word("its "));
        assert!(!is_stop_word(""));
    }
}
