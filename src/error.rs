//! Error types for the ETL pipeline.
//!
//! Nothing in the pipeline recovers from these locally: every variant travels
//! up through the batch loader and ends the run.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EtlError>;

#[derive(Debug, Error)]
pub enum EtlError {
    /// A record could not be decoded, or a required field is missing.
    #[error("Parse error in {}{}: {message}", path.display(), line_suffix(*line))]
    Parse {
        path: PathBuf,
        /// 1-based line number, for newline-delimited inputs.
        line: Option<usize>,
        message: String,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Connection failure, constraint violation or bad statement parameters.
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Schema error: {0}")]
    Schema(String),
}

fn line_suffix(line: Option<usize>) -> String {
    match line {
        Some(line) => format!(" (line {})", line),
        None => String::new(),
    }
}

impl EtlError {
    pub fn parse<P: AsRef<Path>, M: Into<String>>(path: P, line: Option<usize>, message: M) -> Self {
        EtlError::Parse {
            path: path.as_ref().to_path_buf(),
            line,
            message: message.into(),
        }
    }

    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        EtlError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, EtlError::Parse { .. })
    }
}
