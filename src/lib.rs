// wordfreq: word-frequency statistics for plain text files
//
// This is the library root. Each module corresponds to one stage of the
// read -> tokenize -> filter -> count -> print pipeline.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod reader;
pub mod words;
