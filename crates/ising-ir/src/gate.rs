//! Elementary circuit operations.

use serde::{Deserialize, Serialize};

use crate::qubit::{ClbitId, QubitId};

/// One elementary operation of a circuit.
///
/// Rotation angles follow the usual convention where `Rz(θ)` applies
/// `exp(-i θ/2 Z)` and `Rx(θ)` applies `exp(-i θ/2 X)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum GateOp {
    /// Hadamard gate.
    H {
        /// Target qubit.
        qubit: QubitId,
    },
    /// Controlled-X (CNOT) gate.
    CX {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// Rotation around Z axis.
    Rz {
        /// Rotation angle in radians.
        theta: f64,
        /// Target qubit.
        qubit: QubitId,
    },
    /// Rotation around X axis.
    Rx {
        /// Rotation angle in radians.
        theta: f64,
        /// Target qubit.
        qubit: QubitId,
    },
    /// Scheduling fence across all qubits. Downstream passes must not
    /// reorder operations across it; it has no physical effect.
    Barrier,
    /// Measurement of a qubit into a classical bit.
    Measure {
        /// Measured qubit.
        qubit: QubitId,
        /// Classical bit receiving the outcome.
        clbit: ClbitId,
    },
}

impl GateOp {
    /// Hadamard on `qubit`.
    pub fn h(qubit: QubitId) -> Self {
        GateOp::H { qubit }
    }

    /// CNOT from `control` onto `target`.
    pub fn cx(control: QubitId, target: QubitId) -> Self {
        GateOp::CX { control, target }
    }

    /// Z rotation by `theta` on `qubit`.
    pub fn rz(theta: f64, qubit: QubitId) -> Self {
        GateOp::Rz { theta, qubit }
    }

    /// X rotation by `theta` on `qubit`.
    pub fn rx(theta: f64, qubit: QubitId) -> Self {
        GateOp::Rx { theta, qubit }
    }

    /// Measurement of `qubit` into `clbit`.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        GateOp::Measure { qubit, clbit }
    }

    /// The OpenQASM mnemonic of this operation.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateOp::H { .. } => "h",
            GateOp::CX { .. } => "cx",
            GateOp::Rz { .. } => "rz",
            GateOp::Rx { .. } => "rx",
            GateOp::Barrier => "barrier",
            GateOp::Measure { .. } => "measure",
        }
    }

    /// Qubits this operation acts on, in operand order.
    ///
    /// A barrier spans the whole register and reports no explicit operands.
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            GateOp::H { qubit }
            | GateOp::Rz { qubit, .. }
            | GateOp::Rx { qubit, .. }
            | GateOp::Measure { qubit, .. } => vec![*qubit],
            GateOp::CX { control, target } => vec![*control, *target],
            GateOp::Barrier => vec![],
        }
    }

    /// Rotation angle, for `rz` and `rx`.
    pub fn angle(&self) -> Option<f64> {
        match self {
            GateOp::Rz { theta, .. } | GateOp::Rx { theta, .. } => Some(*theta),
            _ => None,
        }
    }

    /// Classical bit written by this operation, for measurements.
    pub fn clbit(&self) -> Option<ClbitId> {
        match self {
            GateOp::Measure { clbit, .. } => Some(*clbit),
            _ => None,
        }
    }

    /// Check if this is a barrier.
    pub fn is_barrier(&self) -> bool {
        matches!(self, GateOp::Barrier)
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self, GateOp::Measure { .. })
    }

    /// Check if this is a unitary gate (neither barrier nor measurement).
    pub fn is_gate(&self) -> bool {
        !self.is_barrier() && !self.is_measure()
    }
}
