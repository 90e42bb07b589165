pub mod compare;
pub mod inspect;
pub mod support;

use crate::io::locator::locate_report;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve a report argument: a file is taken as-is, a directory is
/// searched for the newest report carrying `marker` in its name.
fn resolve_report(path: &Path, marker: &str) -> Result<PathBuf> {
    if path.is_dir() {
        let found = locate_report(path, marker)
            .with_context(|| format!("locating report in {}", path.display()))?;
        log::debug!("resolved {} to {}", path.display(), found.display());
        Ok(found)
    } else {
        Ok(path.to_path_buf())
    }
}

/// Display name for a card: an explicit name wins, otherwise the report
/// file stem.
fn card_display_name(explicit: Option<&str>, path: &Path) -> String {
    match explicit {
        Some(name) => name.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    }
}
