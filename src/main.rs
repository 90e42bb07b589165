use anyhow::Result;
use clap::Parser;
use jcdiff::cli::{Cli, Commands};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Compare {
            reference,
            profiled,
            reference_name,
            profiled_name,
            format,
            output,
        } => jcdiff::commands::compare::run(jcdiff::commands::compare::CompareConfig {
            reference_path: reference,
            profiled_path: profiled,
            reference_name,
            profiled_name,
            format: format.into(),
            output,
        }),
        Commands::Support {
            reference,
            profiled,
            reference_name,
            profiled_name,
            format,
            output,
        } => jcdiff::commands::support::run(jcdiff::commands::support::SupportConfig {
            reference_path: reference,
            profiled_path: profiled,
            reference_name,
            profiled_name,
            format: format.into(),
            output,
        }),
        Commands::Inspect { path, kind, output } => {
            jcdiff::commands::inspect::run(jcdiff::commands::inspect::InspectConfig {
                path,
                kind,
                output,
            })
        }
    }
}

fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
