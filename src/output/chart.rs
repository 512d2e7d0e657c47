// Top-N selection and the asterisk bar chart.
//
// Each line is the word right-aligned to the longest selected word, a " | "
// separator, then one asterisk per occurrence:
//
//    cat | **
//    sat | *
//    ran | *

use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;

use super::{pad_left, ChartStyle};
use crate::words::freq::FrequencyTable;

/// How many entries the chart shows.
pub const TOP_N: usize = 10;

/// The `n` most frequent entries, highest count first.
///
/// The sort is stable over the table's first-occurrence order, so equal
/// counts keep the order in which their words first appeared.
pub fn top_entries(table: &FrequencyTable, n: usize) -> Vec<(&str, u32)> {
    let mut entries: Vec<(&str, u32)> = table.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

/// Render chart lines without trailing newlines. No entries, no lines.
pub fn render_lines(entries: &[(&str, u32)], style: ChartStyle) -> Vec<String> {
    let width = entries
        .iter()
        .map(|(word, _)| word.chars().count())
        .max()
        .unwrap_or(0);
    let top_count = entries.iter().map(|(_, c)| *c).max().unwrap_or(0);

    entries
        .iter()
        .map(|&(word, count)| {
            let label = pad_left(word, width);
            let bar = "*".repeat(count as usize);
            match style {
                ChartStyle::Plain => format!("{label} | {bar}"),
                ChartStyle::Colored => {
                    format!("{} | {}", label.bold(), tint_bar(&bar, count, top_count))
                }
            }
        })
        .collect()
}

/// Color a bar by its share of the top count.
fn tint_bar(bar: &str, count: u32, top_count: u32) -> colored::ColoredString {
    let share = if top_count > 0 {
        f64::from(count) / f64::from(top_count)
    } else {
        0.0
    };

    if share >= 0.5 {
        bar.bright_green()
    } else if share >= 0.25 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}

/// Write the chart to `out`, one line per entry. Returns the number of
/// lines written.
pub fn print_chart<W: Write>(
    out: &mut W,
    entries: &[(&str, u32)],
    style: ChartStyle,
) -> Result<usize> {
    let lines = render_lines(entries, style);
    for line in &lines {
        writeln!(out, "{line}").context("failed to write chart")?;
    }
    out.flush().context("failed to flush chart output")?;
    Ok(lines.len())
}
