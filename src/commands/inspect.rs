//! Parse a single report and dump the typed model as JSON, for
//! downstream tooling and for debugging report-format drift.

use crate::cli::ReportKind;
use crate::io::read_report_lines;
use crate::parser::{parse_performance, parse_support};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

pub struct InspectConfig {
    pub path: PathBuf,
    pub kind: ReportKind,
    pub output: Option<PathBuf>,
}

pub fn run(config: InspectConfig) -> Result<()> {
    let lines = read_report_lines(&config.path)?;
    let context = || format!("parsing {}", config.path.display());

    let json = match config.kind {
        ReportKind::Support => {
            let record = parse_support(lines).with_context(context)?;
            serde_json::to_string_pretty(&record)?
        }
        ReportKind::Performance => {
            let store = parse_performance(lines).with_context(context)?;
            serde_json::to_string_pretty(&store)?
        }
    };

    match config.output {
        Some(path) => {
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
