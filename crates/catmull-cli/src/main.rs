//! splinectl - Catmull-Rom spline record tool
//!
//! Samples spline paths from a control-point config, packs them into the
//! fixed GPU record layout, and decodes record files for inspection.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod config;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::sample::DEFAULT_SAMPLES;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "splinectl")]
#[command(about = "Spline Record CLI - Sample, pack and inspect Catmull-Rom spline records")]
#[command(version)]
#[command(long_about = "
splinectl builds Catmull-Rom spline paths from a JSON or YAML list of
control points and produces the fixed-size record a GPU deformation pass
consumes: Hermite weights, an arc-length lookup table and a twist-free
binormal table.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample positions, tangents and binormals along the curve
    Sample {
        /// Spline config file (.json, .yaml or .yml)
        config: PathBuf,
        /// Number of steps along the curve (1 to 65536)
        #[arg(short, long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,
        /// Space samples evenly in arc length instead of curve parameter
        #[arg(long)]
        by_distance: bool,
    },

    /// Pack a spline config into a binary record file
    Pack {
        /// Spline config file (.json, .yaml or .yml)
        config: PathBuf,
        /// Record output file
        #[arg(short, long)]
        output: PathBuf,
        /// Root basis output file
        #[arg(long)]
        basis_output: Option<PathBuf>,
    },

    /// Decode and print a binary record file
    Inspect {
        /// Record file written by `pack`
        record: PathBuf,
    },

    /// Print the record field offsets and total size
    Layout,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "splinectl={log_level},catmull_path={log_level},catmull_record={log_level}"
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Sample {
            config,
            samples,
            by_distance,
        } => commands::sample::execute(config, *samples, *by_distance, cli.json),
        Commands::Pack {
            config,
            output,
            basis_output,
        } => commands::pack::execute(config, output, basis_output.as_deref(), cli.json),
        Commands::Inspect { record } => commands::inspect::execute(record, cli.json),
        Commands::Layout => commands::layout::execute(cli.json),
    }
}
