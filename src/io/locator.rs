//! Report discovery under a results directory.
//!
//! The characterization tool drops its output as
//! `results/<card>/<name with ALGSUPPORT or PERFORMANCE marker>.csv`;
//! discovery is a filename substring match, newest file wins when a card
//! has been characterized more than once.

use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Filename marker of support reports.
pub const SUPPORT_MARKER: &str = "ALGSUPPORT";
/// Filename marker of performance reports.
pub const PERFORMANCE_MARKER: &str = "PERFORMANCE";

/// Find the newest report whose filename contains `marker` under `dir`.
pub fn locate_report(dir: &Path, marker: &str) -> Result<PathBuf> {
    let entries = fs::read_dir(dir)
        .map_err(|e| Error::file_system("failed to list results directory", dir, e))?;

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry =
            entry.map_err(|e| Error::file_system("failed to list results directory", dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        if !name.to_string_lossy().contains(marker) {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        match &newest {
            Some((best, _)) if *best >= modified => {}
            _ => newest = Some((modified, path)),
        }
    }

    newest.map(|(_, path)| path).ok_or_else(|| Error::Locate {
        dir: dir.to_path_buf(),
        marker: marker.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_file_by_marker() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("CardA_ALGSUPPORT_3b90.csv"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let found = locate_report(dir.path(), SUPPORT_MARKER).unwrap();
        assert!(found
            .file_name()
            .unwrap()
            .to_string_lossy()
            .contains("ALGSUPPORT"));
    }

    #[test]
    fn missing_marker_is_a_locate_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = locate_report(dir.path(), PERFORMANCE_MARKER).unwrap_err();
        assert!(matches!(err, Error::Locate { .. }));
        assert!(err.to_string().contains("PERFORMANCE"));
    }
}
