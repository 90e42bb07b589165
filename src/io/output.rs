//! Report writers: the renderer side of the projector's contract.
//!
//! Writers consume the [`ReportModel`] structure only; layout, labels,
//! and styling live here, never in the core.

use crate::formatting::ColorMode;
use crate::output::{ReportModel, ReportTable};
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, model: &ReportModel) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, model: &ReportModel) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(model)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, model: &ReportModel) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "# Comparison: {} vs {}",
            model.reference_card, model.profiled_card
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            model.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_counts(&mut self, model: &ReportModel) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Count |")?;
        writeln!(self.writer, "|----------|-------|")?;
        for count in &model.counts {
            writeln!(self.writer, "| {} | {} |", count.label, count.count)?;
        }
        writeln!(self.writer, "| total | {} |", model.total)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_table(&mut self, table: &ReportTable) -> anyhow::Result<()> {
        if table.rows.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## {}", table.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| {} |", table.columns.join(" | "))?;
        writeln!(
            self.writer,
            "|{}|",
            table.columns.iter().map(|_| "---").collect::<Vec<_>>().join("|")
        )?;
        for row in &table.rows {
            writeln!(self.writer, "| {} |", row.join(" | "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, model: &ReportModel) -> anyhow::Result<()> {
        self.write_header(model)?;
        self.write_counts(model)?;
        for table in &model.tables {
            self.write_table(table)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    color: ColorMode,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, color: ColorMode) -> Self {
        Self { writer, color }
    }

    fn paint(&self, text: &str, paint: fn(&str) -> colored::ColoredString) -> String {
        if self.color.should_use_color() {
            paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_table(&mut self, table: &ReportTable) -> anyhow::Result<()> {
        if table.rows.is_empty() {
            return Ok(());
        }
        let title = self.paint(&table.title, |t| t.bold());
        writeln!(self.writer, "{title}")?;

        let widths: Vec<usize> = table
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                table
                    .rows
                    .iter()
                    .map(|row| row.get(i).map_or(0, String::len))
                    .chain(std::iter::once(col.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<String> = table
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, &w)| format!("{col:<w$}"))
            .collect();
        writeln!(self.writer, "  {}", header.join("  "))?;

        for row in &table.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:<w$}"))
                .collect();
            writeln!(self.writer, "  {}", cells.join("  "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, model: &ReportModel) -> anyhow::Result<()> {
        let heading = format!(
            "Comparison: {} (reference) vs {} (profiled)",
            model.reference_card, model.profiled_card
        );
        writeln!(self.writer, "{}", self.paint(&heading, |t| t.bold()))?;
        writeln!(self.writer)?;

        for count in &model.counts {
            let line = format!("  {:>10}  {}", count.count, count.label);
            let painted = match (count.label.as_str(), count.count) {
                (_, 0) => line,
                ("matching", _) => self.paint(&line, |t| t.green()),
                ("mismatch", _) | ("erroneous", _) => self.paint(&line, |t| t.red()),
                ("missing", _) => self.paint(&line, |t| t.yellow()),
                _ => line,
            };
            writeln!(self.writer, "{painted}")?;
        }
        writeln!(self.writer, "  {:>10}  total", model.total)?;
        writeln!(self.writer)?;

        for table in &model.tables {
            self.write_table(table)?;
        }
        Ok(())
    }
}

/// Build a writer for the requested format, targeting a file when an
/// output path is given and stdout otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    color: ColorMode,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, color)),
    })
}
