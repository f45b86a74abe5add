//! Error types for the HAL crate.

use thiserror::Error;

/// Errors that can occur in HAL operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// Counts do not add up to the requested number of shots.
    #[error("Counts total {got} shots, expected {expected}")]
    CountsMismatch {
        /// Shots requested.
        expected: u64,
        /// Sum of all counts.
        got: u64,
    },

    /// A counts key is not a bitstring of the circuit's width.
    #[error("Malformed bitstring '{bitstring}': expected {num_clbits} characters of '0' or '1'")]
    MalformedBitstring {
        /// Offending key.
        bitstring: String,
        /// Number of classical bits in the circuit.
        num_clbits: usize,
    },

    /// Generic backend error.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
