//! Hypercubic lattice topology.
//!
//! Sites of an `L0 × L1 × … × L(D-1)` open-boundary lattice are numbered in
//! row-major order, last axis fastest:
//!
//! ```text
//! index = Σ_a coord[a] · stride[a],   stride[D-1] = 1,   stride[a] = stride[a+1] · L(a+1)
//! ```
//!
//! which for three axes is `x·Ly·Lz + y·Lz + z`.
//!
//! Nearest-neighbour edges are grouped by axis, axis 0 first. Inside a group
//! they follow the same row-major nesting, so the edge `(i, i + stride[a])`
//! for every site `i` whose coordinate on axis `a` is not the last one.
//! Every lattice uses this order, including 2D, where axis-0 (vertical)
//! edges precede axis-1 (horizontal) ones.
//!
//! # Example
//!
//! ```rust
//! use ising_ir::QubitId;
//! use ising_synth::lattice::LatticeTopology;
//!
//! let square = LatticeTopology::new(&[2, 2])?;
//! let pairs: Vec<_> = square.edges().map(|e| (e.source.0, e.target.0)).collect();
//! assert_eq!(pairs, [(0, 2), (1, 3), (0, 1), (2, 3)]);
//! assert_eq!(square.flatten(&[1, 0])?, QubitId(2));
//! # Ok::<(), ising_synth::SynthError>(())
//! ```

use ising_ir::QubitId;
use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, SynthError, SynthResult};

/// A nearest-neighbour coupling along one lattice axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Site with the smaller coordinate on `axis`.
    pub source: QubitId,
    /// Site one unit step further along `axis`.
    pub target: QubitId,
    /// Axis the coupling runs along.
    pub axis: usize,
}

impl Edge {
    /// The `(source, target)` pair.
    pub fn pair(&self) -> (QubitId, QubitId) {
        (self.source, self.target)
    }
}

/// Validated axis lengths with their row-major strides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatticeTopology {
    dims: Vec<usize>,
    strides: Vec<usize>,
    num_sites: u32,
}

impl LatticeTopology {
    /// Validate `dims` and precompute strides.
    ///
    /// Fails with [`LatticeError::NoAxes`] for an empty slice,
    /// [`LatticeError::EmptyAxis`] for a zero-length axis, and
    /// [`LatticeError::TooManySites`] when the site count overflows `u32`.
    pub fn new(dims: &[usize]) -> SynthResult<Self> {
        if dims.is_empty() {
            return Err(LatticeError::NoAxes.into());
        }
        if let Some(axis) = dims.iter().position(|&len| len == 0) {
            return Err(LatticeError::EmptyAxis { axis }.into());
        }

        let too_many = || LatticeError::TooManySites {
            dims: dims.to_vec(),
        };
        let mut strides = vec![1usize; dims.len()];
        for a in (0..dims.len() - 1).rev() {
            strides[a] = strides[a + 1].checked_mul(dims[a + 1]).ok_or_else(too_many)?;
        }
        let total = strides[0].checked_mul(dims[0]).ok_or_else(too_many)?;
        let num_sites = u32::try_from(total).map_err(|_| too_many())?;

        Ok(Self {
            dims: dims.to_vec(),
            strides,
            num_sites,
        })
    }

    /// Axis lengths, axis 0 first.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Row-major strides; the last one is always 1.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of axes `D`.
    pub fn num_axes(&self) -> usize {
        self.dims.len()
    }

    /// Number of sites `N`, which is also the qubit count.
    pub fn num_sites(&self) -> u32 {
        self.num_sites
    }

    /// All qubits in increasing index order.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + use<> {
        (0..self.num_sites).map(QubitId)
    }

    /// Row-major index of a lattice coordinate.
    pub fn flatten(&self, coord: &[usize]) -> SynthResult<QubitId> {
        if coord.len() != self.dims.len() || coord.iter().zip(&self.dims).any(|(c, l)| c >= l) {
            return Err(SynthError::InvalidCoordinate {
                coord: coord.to_vec(),
                dims: self.dims.clone(),
            });
        }
        let index: usize = coord.iter().zip(&self.strides).map(|(c, s)| c * s).sum();
        Ok(site(index))
    }

    /// Lattice coordinate of a qubit; inverse of [`flatten`](Self::flatten).
    pub fn coordinate(&self, qubit: QubitId) -> SynthResult<Vec<usize>> {
        if qubit.0 >= self.num_sites {
            return Err(SynthError::QubitOutOfRange {
                qubit,
                num_sites: self.num_sites,
            });
        }
        let index = qubit.index();
        Ok(self
            .dims
            .iter()
            .zip(&self.strides)
            .map(|(len, stride)| (index / stride) % len)
            .collect())
    }

    /// Edges along one axis in row-major site order.
    ///
    /// Yields nothing for an axis of length 1 or an axis past `D - 1`.
    pub fn edges_along(&self, axis: usize) -> impl Iterator<Item = Edge> + '_ {
        let (len, stride) = match (self.dims.get(axis), self.strides.get(axis)) {
            (Some(&len), Some(&stride)) => (len, stride),
            _ => (1, 1),
        };
        (0..self.num_sites as usize)
            .filter(move |index| (index / stride) % len + 1 < len)
            .map(move |index| Edge {
                source: site(index),
                target: site(index + stride),
                axis,
            })
    }

    /// All edges, grouped by axis in axis order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.num_axes()).flat_map(move |axis| self.edges_along(axis))
    }

    /// All edges collected, grouped by axis in axis order.
    pub fn enumerate_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count());
        edges.extend(self.edges());
        edges
    }

    /// Number of edges along one axis: `(L_a - 1) · N / L_a`.
    pub fn edge_count_along(&self, axis: usize) -> usize {
        match self.dims.get(axis) {
            Some(&len) => (len - 1) * (self.num_sites as usize / len),
            None => 0,
        }
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        (0..self.num_axes()).map(|a| self.edge_count_along(a)).sum()
    }
}

// Indices below `num_sites` always fit: `new` rejects lattices whose site
// count overflows u32.
#[allow(clippy::cast_possible_truncation)]
fn site(index: usize) -> QubitId {
    QubitId(index as u32)
}
