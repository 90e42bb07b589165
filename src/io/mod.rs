//! I/O shell: the parsing and comparison core only ever sees line
//! sequences already read into memory.

pub mod locator;
pub mod output;

use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a report file into normalized lines (CRLF collapsed to LF).
pub fn read_report_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::file_system("failed to read report", path, e))?;
    Ok(content
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect())
}
