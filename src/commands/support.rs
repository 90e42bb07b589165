//! Support comparison command.

use crate::commands::{card_display_name, resolve_report};
use crate::core::{Comparable, Presentable, SupportRecord};
use crate::formatting::ColorMode;
use crate::io::locator::SUPPORT_MARKER;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::read_report_lines;
use crate::parser::parse_support;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct SupportConfig {
    pub reference_path: PathBuf,
    pub profiled_path: PathBuf,
    pub reference_name: Option<String>,
    pub profiled_name: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run(config: SupportConfig) -> Result<()> {
    let reference_path = resolve_report(&config.reference_path, SUPPORT_MARKER)?;
    let profiled_path = resolve_report(&config.profiled_path, SUPPORT_MARKER)?;

    let reference = load_record(&reference_path)?;
    let profiled = load_record(&profiled_path)?;
    log::info!(
        "loaded {} reference and {} profiled support entries",
        reference.support.len(),
        profiled.support.len()
    );

    // the report itself names the card; an explicit flag still wins
    let reference_name = config
        .reference_name
        .clone()
        .or_else(|| reference.card_name().map(String::from));
    let profiled_name = config
        .profiled_name
        .clone()
        .or_else(|| profiled.card_name().map(String::from));

    let contrast = reference.contrast(&profiled);
    let model = contrast.summarize(
        &card_display_name(reference_name.as_deref(), &reference_path),
        &card_display_name(profiled_name.as_deref(), &profiled_path),
    );

    let mut writer = create_writer(config.format, config.output.as_deref(), ColorMode::from_env())?;
    writer.write_report(&model)
}

fn load_record(path: &Path) -> Result<SupportRecord> {
    let lines = read_report_lines(path)?;
    parse_support(lines).with_context(|| format!("parsing {}", path.display()))
}
