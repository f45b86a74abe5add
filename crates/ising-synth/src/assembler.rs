//! Full circuit assembly: state preparation, `r` slices, measurement.
//!
//! The assembled circuit is laid out as
//!
//! ```text
//! H(0) … H(N-1)  barrier  [slice]×r  measure(0→0) … measure(N-1→N-1)
//! ```
//!
//! where each slice is produced by [`TrotterStep`] and ends with its own
//! barrier.

use ising_ir::{Circuit, CircuitBuilder, ClbitId};
use tracing::debug;

use crate::error::SynthResult;
use crate::lattice::LatticeTopology;
use crate::trotter::{TrotterParameters, TrotterStep, slice_len};

/// Upper bound on the operations reserved up front; larger circuits grow.
const MAX_RESERVED_OPS: usize = 1 << 20;

/// Builds the complete evolution circuit for one lattice and parameter set.
#[derive(Debug, Clone)]
pub struct CircuitAssembler {
    topology: LatticeTopology,
    params: TrotterParameters,
}

impl CircuitAssembler {
    /// Pair a validated lattice with its parameters.
    ///
    /// Fails with `InvalidTrotterParameters` when `params.slices == 0`.
    pub fn new(topology: LatticeTopology, params: TrotterParameters) -> SynthResult<Self> {
        params.validate()?;
        Ok(Self { topology, params })
    }

    /// Validate `dims` and `params` together.
    ///
    /// The slice count is checked before the lattice.
    pub fn from_dims(dims: &[usize], params: TrotterParameters) -> SynthResult<Self> {
        params.validate()?;
        let topology = LatticeTopology::new(dims)?;
        Ok(Self { topology, params })
    }

    /// The lattice being evolved.
    pub fn topology(&self) -> &LatticeTopology {
        &self.topology
    }

    /// The evolution parameters.
    pub fn params(&self) -> &TrotterParameters {
        &self.params
    }

    /// Name given to assembled circuits, e.g. `tfim_3x3_r2`.
    pub fn circuit_name(&self) -> String {
        let dims: Vec<String> = self.topology.dims().iter().map(ToString::to_string).collect();
        format!("tfim_{}_r{}", dims.join("x"), self.params.slices)
    }

    /// Number of operations in the assembled circuit, `None` if it
    /// overflows `usize`.
    pub fn op_count(&self) -> Option<usize> {
        let n = self.topology.num_sites() as usize;
        // Hadamards and their barrier, the slices, the measurements.
        self.params
            .slices
            .checked_mul(slice_len(&self.topology))?
            .checked_add(2 * n + 1)
    }

    /// Assemble the circuit.
    pub fn assemble(&self) -> SynthResult<Circuit> {
        let n = self.topology.num_sites();
        debug!(
            dims = ?self.topology.dims(),
            n_qubits = n,
            n_edges = self.topology.edge_count(),
            slices = self.params.slices,
            dt = self.params.dt,
            "assembling Trotterized Ising circuit"
        );

        let reserve = self.op_count().map_or(MAX_RESERVED_OPS, |c| c.min(MAX_RESERVED_OPS));
        let mut builder = CircuitBuilder::new(self.circuit_name(), n, n).with_capacity(reserve);

        for q in self.topology.qubits() {
            builder.h(q)?;
        }
        builder.barrier()?;

        for _ in 0..self.params.slices {
            TrotterStep::from_params(&self.topology, &self.params).append_to(&mut builder)?;
        }

        for q in self.topology.qubits() {
            builder.measure(q, ClbitId::from(q))?;
        }

        Ok(builder.finish())
    }
}

/// Validate `dims` and `params` and assemble the evolution circuit.
///
/// Shorthand for [`CircuitAssembler::from_dims`] followed by
/// [`CircuitAssembler::assemble`].
pub fn assemble(dims: &[usize], params: &TrotterParameters) -> SynthResult<Circuit> {
    CircuitAssembler::from_dims(dims, *params)?.assemble()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LatticeError, SynthError};

    #[test]
    fn test_circuit_name() {
        let a = CircuitAssembler::from_dims(&[3, 3], TrotterParameters::new(1.0, 0.5, 0.5, 2))
            .unwrap();
        assert_eq!(a.circuit_name(), "tfim_3x3_r2");
    }

    #[test]
    fn test_op_count_matches_assembled_length() {
        let a = CircuitAssembler::from_dims(&[2, 3, 2], TrotterParameters::new(1.0, 0.5, 0.1, 3))
            .unwrap();
        assert_eq!(Some(a.assemble().unwrap().len()), a.op_count());
    }

    #[test]
    fn test_op_count_overflow_is_none() {
        let params = TrotterParameters::new(1.0, 1.0, 1.0, usize::MAX);
        let a = CircuitAssembler::from_dims(&[2], params).unwrap();
        assert_eq!(a.op_count(), None);

        // One site: each slice is an rx and a barrier.
        let params = TrotterParameters::new(1.0, 1.0, 1.0, usize::MAX / 4);
        let b = CircuitAssembler::from_dims(&[1], params).unwrap();
        assert_eq!(b.op_count(), Some(usize::MAX / 4 * 2 + 3));
    }

    #[test]
    fn test_slice_count_checked_first() {
        // Both inputs are bad; the slice count wins.
        assert!(matches!(
            assemble(&[], &TrotterParameters::new(1.0, 1.0, 1.0, 0)),
            Err(SynthError::InvalidTrotterParameters(0))
        ));
        assert!(matches!(
            assemble(&[], &TrotterParameters::new(1.0, 1.0, 1.0, 1)),
            Err(SynthError::InvalidLattice(LatticeError::NoAxes))
        ));
    }

    #[test]
    fn test_new_rejects_zero_slices() {
        let t = LatticeTopology::new(&[2]).unwrap();
        assert!(CircuitAssembler::new(t, TrotterParameters::new(1.0, 1.0, 1.0, 0)).is_err());
    }
}
