// Output formatting: the frequency bar chart.

pub mod chart;

/// How the chart is styled on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartStyle {
    /// Byte-exact plain text
    #[default]
    Plain,
    /// Bold words and tinted bars via `colored`
    Colored,
}

/// Right-align `text` to `width` characters, padding with spaces on the left.
///
/// Width is counted in characters, not bytes, so accented words line up with
/// ASCII ones.
pub fn pad_left(text: &str, width: usize) -> String {
    let char_count = text.chars().count();
    if char_count >= width {
        text.to_string()
    } else {
        format!("{}{text}", " ".repeat(width - char_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("cat", 5), "  cat");
        assert_eq!(pad_left("cat", 3), "cat");
        assert_eq!(pad_left("kitten", 3), "kitten");
        assert_eq!(pad_left("", 2), "  ");
    }

    #[test]
    fn test_pad_left_counts_chars() {
        assert_eq!(pad_left("naïve", 6), " naïve");
    }
}
