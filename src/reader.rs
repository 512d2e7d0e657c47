// Input file loading.
//
// The file is opened, drained into memory line by line and closed before
// this module returns, so tokenization never holds a file handle.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Why an input file could not be loaded.
#[derive(Debug)]
pub enum InputError {
    /// The path is missing or does not name a regular file.
    NotAFile(PathBuf),
    /// The file exists but could not be opened or decoded as UTF-8.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotAFile(path) => write!(f, "{} does not exist!", path.display()),
            InputError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::NotAFile(_) => None,
            InputError::Io { source, .. } => Some(source),
        }
    }
}

/// Read every line of `path` into memory, in file order, without line
/// terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    if !path.is_file() {
        return Err(InputError::NotAFile(path.to_path_buf()));
    }

    let io_err = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .map_err(io_err)?;

    debug!(path = %path.display(), lines = lines.len(), "Read input file");
    Ok(lines)
}
