use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jcdiff")]
#[command(about = "Compare smart-card characterization reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two performance reports
    Compare {
        /// Reference performance report (file, or a card's results directory)
        reference: PathBuf,

        /// Profiled performance report (file, or a card's results directory)
        profiled: PathBuf,

        /// Display name for the reference card (defaults to the file stem)
        #[arg(long = "reference-name")]
        reference_name: Option<String>,

        /// Display name for the profiled card (defaults to the file stem)
        #[arg(long = "profiled-name")]
        profiled_name: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare two algorithm-support reports
    Support {
        /// Reference support report (file, or a card's results directory)
        reference: PathBuf,

        /// Profiled support report (file, or a card's results directory)
        profiled: PathBuf,

        /// Display name for the reference card
        #[arg(long = "reference-name")]
        reference_name: Option<String>,

        /// Display name for the profiled card
        #[arg(long = "profiled-name")]
        profiled_name: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse one report and dump the typed model as JSON
    Inspect {
        /// Report file to parse
        path: PathBuf,

        /// Report kind
        #[arg(short, long, value_enum)]
        kind: ReportKind,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Support,
    Performance,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}
