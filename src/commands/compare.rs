//! Performance comparison command: load, parse, contrast, project, write.

use crate::commands::{card_display_name, resolve_report};
use crate::comparison::compare;
use crate::core::{Presentable, ResultStore};
use crate::formatting::ColorMode;
use crate::io::locator::PERFORMANCE_MARKER;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::read_report_lines;
use crate::parser::parse_performance;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct CompareConfig {
    pub reference_path: PathBuf,
    pub profiled_path: PathBuf,
    pub reference_name: Option<String>,
    pub profiled_name: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run(config: CompareConfig) -> Result<()> {
    let reference_path = resolve_report(&config.reference_path, PERFORMANCE_MARKER)?;
    let profiled_path = resolve_report(&config.profiled_path, PERFORMANCE_MARKER)?;

    let reference = load_store(&reference_path)?;
    let profiled = load_store(&profiled_path)?;
    log::info!(
        "loaded {} reference and {} profiled results",
        reference.len(),
        profiled.len()
    );

    let outcome = compare(&reference, &profiled);
    let model = outcome.summarize(
        &card_display_name(config.reference_name.as_deref(), &reference_path),
        &card_display_name(config.profiled_name.as_deref(), &profiled_path),
    );

    let mut writer = create_writer(config.format, config.output.as_deref(), ColorMode::from_env())?;
    writer.write_report(&model)
}

fn load_store(path: &Path) -> Result<ResultStore> {
    let lines = read_report_lines(path)?;
    parse_performance(lines).with_context(|| format!("parsing {}", path.display()))
}
