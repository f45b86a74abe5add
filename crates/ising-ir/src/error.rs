//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur while building a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index is not below the circuit width.
    #[error("Qubit {qubit} not found in circuit of {num_qubits} qubits{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Width of the circuit being built.
        num_qubits: u32,
        /// Optional gate name for context.
        gate_name: Option<&'static str>,
    },

    /// Classical bit index is not below the classical register width.
    #[error("Classical bit {clbit} not found in circuit of {num_clbits} bits{}", format_gate_context(.gate_name))]
    ClbitNotFound {
        /// The classical bit that was not found.
        clbit: ClbitId,
        /// Number of classical bits in the circuit being built.
        num_clbits: u32,
        /// Optional gate name for context.
        gate_name: Option<&'static str>,
    },

    /// Duplicate qubit in a multi-qubit operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<&'static str>,
    },
}

#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<&'static str>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
