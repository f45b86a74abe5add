//! `OpenQASM` emitter for Ising evolution circuits
//!
//! Serializes an [`ising_ir::Circuit`] as `OpenQASM` 3.0 or 2.0 text so it can
//! be handed to external toolchains.
//!
//! # Output
//!
//! | Operation | QASM 3 | QASM 2 |
//! |-----------|--------|--------|
//! | Registers | `qubit[n] q;` `bit[n] c;` | `qreg q[n];` `creg c[n];` |
//! | Hadamard | `h q[0];` | `h q[0];` |
//! | CNOT | `cx q[0], q[1];` | `cx q[0], q[1];` |
//! | Rotations | `rz(0.5) q[1];` | `rz(0.5) q[1];` |
//! | Barrier | `barrier q;` | `barrier q;` |
//! | Measurement | `c[0] = measure q[0];` | `measure q[0] -> c[0];` |
//!
//! # Example
//!
//! ```rust
//! use ising_ir::{CircuitBuilder, QubitId};
//! use ising_qasm3::emit;
//!
//! let mut builder = CircuitBuilder::new("bell", 2, 2);
//! builder.h(QubitId(0)).unwrap();
//! builder.cx(QubitId(0), QubitId(1)).unwrap();
//! builder.measure_all().unwrap();
//! let circuit = builder.finish();
//!
//! let qasm = emit(&circuit);
//! assert!(qasm.starts_with("OPENQASM 3.0;"));
//! assert!(qasm.contains("cx q[0], q[1];"));
//! assert!(qasm.contains("c[1] = measure q[1];"));
//! ```

mod emitter;

pub use emitter::{emit, emit_qasm2};
