use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use wordfreq::config::Config;
use wordfreq::output::ChartStyle;
use wordfreq::reader::InputError;

/// Get the word frequency in a text file.
///
/// Prints the ten most frequent words, minus common stop words, as an
/// asterisk bar chart.
#[derive(Parser)]
#[command(name = "wordfreq", version, about)]
struct Cli {
    /// File to read
    file: PathBuf,
}

fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let config = Config::load()?;

    // Logs go to stderr so the chart on stdout stays exact
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let style = config.color.chart_style();
    colored::control::set_override(style == ChartStyle::Colored);
    debug!(file = %cli.file.display(), ?style, "Starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match wordfreq::pipeline::run(&cli.file, style, &mut out) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<InputError>() {
            Some(missing @ InputError::NotAFile(_)) => {
                writeln!(out, "{missing}")?;
                Ok(ExitCode::FAILURE)
            }
            Some(io_err) => {
                eprintln!("{io_err}");
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}
