// The full run: read -> tokenize -> drop stop words -> count -> print.
//
// Output goes to any writer so the binary can pass stdout and tests can pass
// a buffer.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::output::chart::{print_chart, top_entries, TOP_N};
use crate::output::ChartStyle;
use crate::reader::read_lines;
use crate::words::freq::FrequencyTable;
use crate::words::tokenize::extract_words;

/// What a single run saw, for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Words extracted before stop-word removal
    pub words_extracted: usize,
    /// Words left after stop-word removal
    pub words_counted: usize,
    pub distinct_words: usize,
    /// Longest token seen during extraction, in characters
    pub longest_word: usize,
    pub lines_printed: usize,
}

/// Run the whole pipeline over `path`, writing the chart to `out`.
///
/// A missing input surfaces as a `reader::InputError` inside the anyhow
/// error so the caller can pick the exit behavior.
pub fn run<W: Write>(path: &Path, style: ChartStyle, out: &mut W) -> Result<RunSummary> {
    let lines = read_lines(path)?;

    let mut word_list = extract_words(&lines);
    drop(lines);
    let words_extracted = word_list.len();
    word_list.remove_stop_words();

    let table = FrequencyTable::from_words(&word_list.words);
    let top = top_entries(&table, TOP_N);
    let lines_printed = print_chart(out, &top, style)?;

    let summary = RunSummary {
        words_extracted,
        words_counted: word_list.len(),
        distinct_words: table.len(),
        longest_word: word_list.longest,
        lines_printed,
    };

    info!(
        path = %path.display(),
        extracted = summary.words_extracted,
        counted = summary.words_counted,
        distinct = summary.distinct_words,
        printed = summary.lines_printed,
        "Chart complete"
    );

    Ok(summary)
}
