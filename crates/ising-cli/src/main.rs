//! Ising Command-Line Interface
//!
//! Builds Trotterized transverse-field Ising circuits on rectangular
//! lattices and writes them as OpenQASM, JSON or a text summary.
//!
//! ```text
//! ising build --dims 3,3 --slices 2 --format qasm
//! ising build --config experiment.yaml --output tfim.qasm
//! ising edges --dims 2,2
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{OutputFormat, build, edges, version};
use config::ExperimentConfig;

/// Ising - Trotterized transverse-field Ising circuit synthesis
#[derive(Parser)]
#[command(name = "ising")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble an evolution circuit
    Build {
        /// YAML experiment file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Lattice dimensions, comma separated (e.g. 3,3)
        #[arg(short, long, value_delimiter = ',')]
        dims: Option<Vec<usize>>,

        /// Coupling strength J
        #[arg(short = 'J', long, allow_negative_numbers = true)]
        coupling: Option<f64>,

        /// Transverse field g
        #[arg(short = 'g', long, allow_negative_numbers = true)]
        field: Option<f64>,

        /// Duration of one slice
        #[arg(long, allow_negative_numbers = true, conflicts_with = "total_time")]
        dt: Option<f64>,

        /// Total evolution time, split evenly across slices
        #[arg(short, long, allow_negative_numbers = true)]
        total_time: Option<f64>,

        /// Number of Trotter slices
        #[arg(short = 'r', long)]
        slices: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Qasm)]
        format: OutputFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the nearest-neighbour edges of a lattice, grouped by axis
    Edges {
        /// Lattice dimensions, comma separated (e.g. 2,2)
        #[arg(short, long, value_delimiter = ',', required = true)]
        dims: Vec<usize>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build {
            config,
            dims,
            coupling,
            field,
            dt,
            total_time,
            slices,
            format,
            output,
        } => {
            let overrides = ExperimentConfig {
                name: None,
                lattice: dims,
                coupling,
                field,
                dt,
                total_time,
                slices,
            };
            build::execute(config.as_deref(), overrides, format, output.as_deref())
        }

        Commands::Edges { dims } => edges::execute(&dims),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_flags() {
        let cli = Cli::try_parse_from([
            "ising", "-vv", "build", "--dims", "3,3", "-J", "-1.5", "--dt", "0.1", "-r", "8",
            "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);

        match cli.command {
            Commands::Build {
                dims,
                coupling,
                dt,
                slices,
                format,
                total_time,
                ..
            } => {
                assert_eq!(dims, Some(vec![3, 3]));
                assert_eq!(coupling, Some(-1.5));
                assert_eq!(dt, Some(0.1));
                assert_eq!(total_time, None);
                assert_eq!(slices, Some(8));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_build_defaults_to_qasm() {
        let cli = Cli::try_parse_from(["ising", "build", "--dims", "4"]).unwrap();
        match cli.command {
            Commands::Build { format, output, .. } => {
                assert_eq!(format, OutputFormat::Qasm);
                assert!(output.is_none());
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_dt_conflicts_with_total_time() {
        let parsed = Cli::try_parse_from([
            "ising", "build", "--dims", "2", "--dt", "0.1", "--total-time", "1.0",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_edges_requires_dims() {
        assert!(Cli::try_parse_from(["ising", "edges"]).is_err());
        let cli = Cli::try_parse_from(["ising", "edges", "--dims", "2,2,2"]).unwrap();
        assert!(matches!(cli.command, Commands::Edges { dims } if dims == vec![2, 2, 2]));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["ising", "build", "--dims", "2", "--format", "svg"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
