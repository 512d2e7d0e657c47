use std::env;
use std::io::IsTerminal;

use anyhow::Result;

use crate::output::ChartStyle;

/// Default log filter when neither WORDFREQ_LOG nor RUST_LOG is set.
pub const DEFAULT_LOG_FILTER: &str = "wordfreq=warn";

/// When the chart should be colorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Plain text, always (default)
    Never,
    /// Styled output even when piped
    Always,
    /// Styled only when stdout is a terminal
    Auto,
}

impl ColorMode {
    /// Parse a WORDFREQ_COLOR value. Matching is case-insensitive.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "never" | "" => Ok(ColorMode::Never),
            "always" => Ok(ColorMode::Always),
            "auto" => Ok(ColorMode::Auto),
            other => anyhow::bail!(
                "WORDFREQ_COLOR must be one of never, always, auto (got {other:?})"
            ),
        }
    }

    /// Resolve the mode into a concrete chart style for this process.
    pub fn chart_style(self) -> ChartStyle {
        let colored = match self {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        };
        if colored {
            ChartStyle::Colored
        } else {
            ChartStyle::Plain
        }
    }
}

/// Runtime configuration loaded from environment variables.
///
/// Nothing here changes which words are counted or how many are shown.
/// The .env file is loaded at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// EnvFilter directive for tracing output on stderr
    pub log_filter: String,
    pub color: ColorMode,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn load() -> Result<Self> {
        let log_filter = env::var("WORDFREQ_LOG")
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        let color = match env::var("WORDFREQ_COLOR") {
            Ok(value) => ColorMode::parse(&value)?,
            Err(_) => ColorMode::Never,
        };

        Ok(Self { log_filter, color })
    }
}
