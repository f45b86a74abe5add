//! First-order Trotter slices for the transverse-field Ising model.
//!
//! The model is documented as
//!
//!   H = -J Σ_<i,j> Z_i Z_j  -  g Σ_i X_i
//!
//! and one slice of duration `dt` is approximated by
//!
//!   [∏_<i,j> CX(i,j) · Rz(2·J·dt)_j · CX(i,j)] · [∏_i Rx(2·g·dt)_i]
//!
//! followed by a barrier. `CX · Rz(θ)_j · CX` is `exp(-i θ/2 Z_i Z_j)`, so
//! the ZZ rotation angle is `2·J·dt` and the field rotation angle is
//! `2·g·dt`.
//!
//! Note the angles carry no minus sign although both terms of `H` do: the
//! emitted slice is `exp(-i dt (J ΣZZ + g ΣX))`, i.e. the evolution under
//! `-H`. The angle formulas are kept as written; callers wanting `exp(-i H dt)`
//! pass `-J` and `-g`.

use std::iter;

use ising_ir::{CircuitBuilder, GateOp};
use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};
use crate::lattice::LatticeTopology;

/// Physical and discretisation parameters of a Trotterized evolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrotterParameters {
    /// ZZ coupling strength `J`.
    pub coupling: f64,
    /// Transverse-field strength `g`.
    pub field: f64,
    /// Duration of one slice.
    pub dt: f64,
    /// Number of slices `r`.
    pub slices: usize,
}

impl TrotterParameters {
    /// Parameters with an explicit slice duration.
    ///
    /// Any real `coupling`, `field` and `dt` is accepted; `slices` is
    /// checked when the circuit is assembled.
    pub fn new(coupling: f64, field: f64, dt: f64, slices: usize) -> Self {
        Self {
            coupling,
            field,
            dt,
            slices,
        }
    }

    /// Parameters for a total evolution time split into `slices` equal slices.
    pub fn from_total_time(
        coupling: f64,
        field: f64,
        total_time: f64,
        slices: usize,
    ) -> SynthResult<Self> {
        if slices == 0 {
            return Err(SynthError::InvalidTrotterParameters(slices));
        }
        Ok(Self::new(coupling, field, total_time / slices as f64, slices))
    }

    /// Reject a zero slice count.
    pub fn validate(&self) -> SynthResult<()> {
        if self.slices == 0 {
            return Err(SynthError::InvalidTrotterParameters(self.slices));
        }
        Ok(())
    }

    /// Angle of every ZZ `rz`: `2·J·dt`.
    pub fn rz_angle(&self) -> f64 {
        2.0 * self.coupling * self.dt
    }

    /// Angle of every field `rx`: `2·g·dt`.
    pub fn rx_angle(&self) -> f64 {
        2.0 * self.field * self.dt
    }

    /// Total simulated time `dt · r`.
    pub fn total_time(&self) -> f64 {
        self.dt * self.slices as f64
    }
}

/// One Trotter slice over a fixed lattice.
///
/// Holds no state beyond its inputs; [`gates`](Self::gates) can be called
/// any number of times and always yields the same sequence.
#[derive(Debug, Clone, Copy)]
pub struct TrotterStep<'a> {
    topology: &'a LatticeTopology,
    rz_angle: f64,
    rx_angle: f64,
}

impl<'a> TrotterStep<'a> {
    /// Slice for coupling `j`, field `g` and duration `dt`.
    pub fn new(topology: &'a LatticeTopology, j: f64, g: f64, dt: f64) -> Self {
        Self {
            topology,
            rz_angle: 2.0 * j * dt,
            rx_angle: 2.0 * g * dt,
        }
    }

    /// Slice for the coupling, field and duration in `params`.
    pub fn from_params(topology: &'a LatticeTopology, params: &TrotterParameters) -> Self {
        Self::new(topology, params.coupling, params.field, params.dt)
    }

    /// The slice's operations in emission order.
    pub fn gates(&self) -> impl Iterator<Item = GateOp> + 'a {
        let rz_angle = self.rz_angle;
        let rx_angle = self.rx_angle;

        let couplings = self.topology.edges().flat_map(move |edge| {
            [
                GateOp::cx(edge.source, edge.target),
                GateOp::rz(rz_angle, edge.target),
                GateOp::cx(edge.source, edge.target),
            ]
        });
        let field = self.topology.qubits().map(move |q| GateOp::rx(rx_angle, q));

        couplings.chain(field).chain(iter::once(GateOp::Barrier))
    }

    /// Append the slice to `builder`.
    pub fn append_to(&self, builder: &mut CircuitBuilder) -> SynthResult<()> {
        builder.extend(self.gates())?;
        Ok(())
    }
}

/// Operations of one slice for coupling `j`, field `g` and duration `dt`.
pub fn build_slice(topology: &LatticeTopology, j: f64, g: f64, dt: f64) -> Vec<GateOp> {
    let step = TrotterStep::new(topology, j, g, dt);
    let mut ops = Vec::with_capacity(slice_len(topology));
    ops.extend(step.gates());
    ops
}

/// Append one slice for coupling `j`, field `g` and duration `dt` to `builder`.
pub fn append_slice(
    builder: &mut CircuitBuilder,
    topology: &LatticeTopology,
    j: f64,
    g: f64,
    dt: f64,
) -> SynthResult<()> {
    TrotterStep::new(topology, j, g, dt).append_to(builder)
}

/// Number of operations in one slice over `topology`.
pub fn slice_len(topology: &LatticeTopology) -> usize {
    3 * topology.edge_count() + topology.num_sites() as usize + 1
}
