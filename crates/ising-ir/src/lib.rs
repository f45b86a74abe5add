//! Ising Circuit Intermediate Representation
//!
//! Value types shared by the synthesis, emission, and execution crates.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`]
//! - **Operations**: [`GateOp`], the closed set of operations a Trotterized
//!   Ising circuit is made of
//! - **Circuit**: [`Circuit`], an immutable ordered operation list, and
//!   [`CircuitBuilder`], the only way to make one
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use ising_ir::{CircuitBuilder, QubitId};
//!
//! let mut builder = CircuitBuilder::new("bell_state", 2, 2);
//! builder.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?.measure_all()?;
//! let circuit = builder.finish();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
//! # Ok::<(), ising_ir::IrError>(())
//! ```
//!
//! # Supported Operations
//!
//! | Operation | Qubits | Description |
//! |-----------|--------|-------------|
//! | `h` | 1 | Hadamard gate |
//! | `cx` | 2 | Controlled-NOT (CNOT) |
//! | `rz`, `rx` | 1 | Rotation gates, `R(θ) = exp(-i θ/2 P)` |
//! | `barrier` | all | Scheduling fence |
//! | `measure` | 1 | Measurement into a classical bit |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::{Circuit, CircuitBuilder};
pub use error::{IrError, IrResult};
pub use gate::GateOp;
pub use qubit::{ClbitId, QubitId};
