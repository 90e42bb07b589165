//! Shared error types for report parsing and discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jcdiff operations.
///
/// Comparison itself is total and never fails; everything that can go
/// wrong happens while locating, reading, or parsing a report.
#[derive(Debug, Error)]
pub enum Error {
    /// A report line violates the expected field structure
    #[error("parse error at line {line}{}: {message}", format_parse_context(.field, .key))]
    Parse {
        line: usize,
        /// 1-based index of the offending field, when one can be named
        field: Option<usize>,
        /// Result key of the offending record, when already known
        key: Option<String>,
        message: String,
    },

    /// File system related errors
    #[error("file system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Report discovery failed under a results directory
    #[error("no report matching \"{marker}\" under {}", .dir.display())]
    Locate { dir: PathBuf, marker: String },
}

fn format_parse_context(field: &Option<usize>, key: &Option<String>) -> String {
    match (field, key) {
        (Some(f), Some(k)) => format!(", field {f} of \"{k}\""),
        (Some(f), None) => format!(", field {f}"),
        (None, Some(k)) => format!(" (\"{k}\")"),
        (None, None) => String::new(),
    }
}

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            field: None,
            key: None,
            message: message.into(),
        }
    }

    pub fn parse_field(
        line: usize,
        field: usize,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            line,
            field: Some(field),
            key: Some(key.into()),
            message: message.into(),
        }
    }

    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
