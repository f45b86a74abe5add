//! Error types for the synth crate.

use ising_ir::QubitId;
use thiserror::Error;

/// Ways a lattice description can be unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LatticeError {
    /// The lattice has no axes.
    #[error("lattice has no axes")]
    NoAxes,

    /// An axis has length zero.
    #[error("axis {axis} has length 0, every axis needs at least one site")]
    EmptyAxis {
        /// Position of the offending axis.
        axis: usize,
    },

    /// The site count does not fit the qubit index type.
    #[error("lattice {dims:?} has more sites than addressable qubits")]
    TooManySites {
        /// The requested axis lengths.
        dims: Vec<usize>,
    },
}

/// Errors produced by Ising circuit synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Lattice description rejected.
    #[error("invalid lattice: {0}")]
    InvalidLattice(#[from] LatticeError),

    /// Slice count must be ≥ 1.
    #[error("invalid Trotter parameters: slice count must be at least 1, got {0}")]
    InvalidTrotterParameters(usize),

    /// Coordinate has the wrong rank or lies outside the lattice.
    #[error("coordinate {coord:?} is not a site of lattice {dims:?}")]
    InvalidCoordinate {
        /// The offending coordinate.
        coord: Vec<usize>,
        /// Axis lengths of the lattice.
        dims: Vec<usize>,
    },

    /// Qubit index is not a lattice site.
    #[error("qubit {qubit} is outside a lattice of {num_sites} sites")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of sites in the lattice.
        num_sites: u32,
    },

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] ising_ir::IrError),
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
