// Word extraction: tokenizing, stop-word filtering and frequency counting.

pub mod freq;
pub mod stop_words;
pub mod tokenize;
