//! Trotterized transverse-field Ising circuit synthesis.
//!
//! Turns an `L0 × … × L(D-1)` hypercubic lattice and the parameters
//! `(J, g, dt, r)` into an `ising_ir::Circuit` that prepares `|+⟩^N`,
//! applies `r` first-order Trotter slices, and measures every qubit into the
//! classical bit of the same index.
//!
//! One routine covers every dimension: the lattice is described by an
//! ordered list of axis lengths of any length `D ≥ 1`.
//!
//! # Quick start
//!
//! ```rust
//! use ising_synth::{assemble, TrotterParameters};
//!
//! // 3×3 square lattice, J = 1, g = 0.5, total time 1 in 2 slices.
//! let params = TrotterParameters::from_total_time(1.0, 0.5, 1.0, 2)?;
//! let circuit = assemble(&[3, 3], &params)?;
//!
//! assert_eq!(circuit.num_qubits(), 9);
//! assert_eq!(circuit.count_ops()["cx"], 2 * 2 * 12);
//! # Ok::<(), ising_synth::SynthError>(())
//! ```

pub mod assembler;
pub mod error;
pub mod lattice;
pub mod trotter;

pub use assembler::{CircuitAssembler, assemble};
pub use error::{LatticeError, SynthError, SynthResult};
pub use lattice::{Edge, LatticeTopology};
pub use trotter::{TrotterParameters, TrotterStep, append_slice, build_slice, slice_len};
