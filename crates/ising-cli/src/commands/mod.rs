//! CLI command implementations.

pub mod build;
pub mod edges;
pub mod version;

use clap::ValueEnum;

/// Rendering of an assembled circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// OpenQASM 3.0
    Qasm,
    /// OpenQASM 2.0
    Qasm2,
    /// Circuit as JSON
    Json,
    /// Human-readable statistics
    Summary,
}
