//! Tests for lattice indexing and edge enumeration.

use std::collections::HashSet;

use ising_ir::QubitId;
use ising_synth::{LatticeError, LatticeTopology, SynthError};
use proptest::prelude::*;

fn pairs_along(t: &LatticeTopology, axis: usize) -> Vec<(u32, u32)> {
    t.edges_along(axis)
        .map(|e| (e.source.0, e.target.0))
        .collect()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn zero_axes_is_invalid() {
    assert!(matches!(
        LatticeTopology::new(&[]),
        Err(SynthError::InvalidLattice(LatticeError::NoAxes))
    ));
}

#[test]
fn zero_length_axis_is_invalid() {
    assert!(matches!(
        LatticeTopology::new(&[0]),
        Err(SynthError::InvalidLattice(LatticeError::EmptyAxis { axis: 0 }))
    ));
    assert!(matches!(
        LatticeTopology::new(&[2, 2, 0]),
        Err(SynthError::InvalidLattice(LatticeError::EmptyAxis { axis: 2 }))
    ));
}

// ---------------------------------------------------------------------------
// Edge sets
// ---------------------------------------------------------------------------

#[test]
fn single_site_has_no_edges() {
    let t = LatticeTopology::new(&[1]).unwrap();
    assert_eq!(t.num_sites(), 1);
    assert!(t.enumerate_edges().is_empty());
}

#[test]
fn chain_edges() {
    let t = LatticeTopology::new(&[3]).unwrap();
    assert_eq!(pairs_along(&t, 0), [(0, 1), (1, 2)]);
}

#[test]
fn square_2x2_edges_per_axis() {
    let t = LatticeTopology::new(&[2, 2]).unwrap();
    assert_eq!(t.num_sites(), 4);

    let axis0: HashSet<_> = pairs_along(&t, 0).into_iter().collect();
    let axis1: HashSet<_> = pairs_along(&t, 1).into_iter().collect();
    assert_eq!(axis0, HashSet::from([(0, 2), (1, 3)]));
    assert_eq!(axis1, HashSet::from([(0, 1), (2, 3)]));

    let axes: Vec<_> = t.enumerate_edges().iter().map(|e| e.axis).collect();
    assert_eq!(axes, [0, 0, 1, 1]);
}

#[test]
fn rectangle_matches_nested_loop_order() {
    // Vertical (axis 0) bonds then horizontal (axis 1) bonds, x outermost.
    let (lx, ly) = (3usize, 4usize);
    let t = LatticeTopology::new(&[lx, ly]).unwrap();

    let mut expected = vec![];
    for x in 0..lx - 1 {
        for y in 0..ly {
            expected.push(((x * ly + y) as u32, ((x + 1) * ly + y) as u32));
        }
    }
    for x in 0..lx {
        for y in 0..ly - 1 {
            expected.push(((x * ly + y) as u32, (x * ly + y + 1) as u32));
        }
    }

    let got: Vec<_> = t.edges().map(|e| (e.source.0, e.target.0)).collect();
    assert_eq!(got, expected);
}

#[test]
fn cube_matches_nested_loop_order() {
    let (lx, ly, lz) = (2usize, 3usize, 2usize);
    let t = LatticeTopology::new(&[lx, ly, lz]).unwrap();
    let idx = |x: usize, y: usize, z: usize| (x * ly * lz + y * lz + z) as u32;

    let mut expected = vec![];
    for x in 0..lx - 1 {
        for y in 0..ly {
            for z in 0..lz {
                expected.push((idx(x, y, z), idx(x + 1, y, z)));
            }
        }
    }
    for x in 0..lx {
        for y in 0..ly - 1 {
            for z in 0..lz {
                expected.push((idx(x, y, z), idx(x, y + 1, z)));
            }
        }
    }
    for x in 0..lx {
        for y in 0..ly {
            for z in 0..lz - 1 {
                expected.push((idx(x, y, z), idx(x, y, z + 1)));
            }
        }
    }

    let got: Vec<_> = t.edges().map(|e| (e.source.0, e.target.0)).collect();
    assert_eq!(got, expected);
}

#[test]
fn edge_count_formulas() {
    for lx in 1..5 {
        let t = LatticeTopology::new(&[lx]).unwrap();
        assert_eq!(t.enumerate_edges().len(), lx - 1);
        for ly in 1..5 {
            let t = LatticeTopology::new(&[lx, ly]).unwrap();
            assert_eq!(t.enumerate_edges().len(), lx * (ly - 1) + (lx - 1) * ly);
            for lz in 1..4 {
                let t = LatticeTopology::new(&[lx, ly, lz]).unwrap();
                let expected = lx * ly * (lz - 1) + lx * (ly - 1) * lz + (lx - 1) * ly * lz;
                assert_eq!(t.enumerate_edges().len(), expected);
                assert_eq!(t.edge_count(), expected);
            }
        }
    }
}

#[test]
fn four_dimensional_lattice_is_supported() {
    let t = LatticeTopology::new(&[2, 2, 2, 2]).unwrap();
    assert_eq!(t.num_sites(), 16);
    // Hypercube Q4: 4 · 2^3 edges.
    assert_eq!(t.enumerate_edges().len(), 32);
    assert_eq!(t.flatten(&[1, 0, 1, 1]).unwrap(), QubitId(11));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_dims() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..=4, 1..=4)
}

proptest! {
    #[test]
    fn edges_are_unit_steps_along_their_axis(dims in arb_dims()) {
        let t = LatticeTopology::new(&dims).unwrap();
        for edge in t.edges() {
            let a = t.coordinate(edge.source).unwrap();
            let b = t.coordinate(edge.target).unwrap();
            for axis in 0..dims.len() {
                if axis == edge.axis {
                    prop_assert_eq!(a[axis] + 1, b[axis]);
                } else {
                    prop_assert_eq!(a[axis], b[axis]);
                }
            }
        }
    }

    #[test]
    fn edges_are_grouped_by_ascending_axis(dims in arb_dims()) {
        let t = LatticeTopology::new(&dims).unwrap();
        let axes: Vec<_> = t.edges().map(|e| e.axis).collect();
        prop_assert!(axes.windows(2).all(|w| w[0] <= w[1]));
        for axis in 0..dims.len() {
            prop_assert_eq!(t.edges_along(axis).count(), t.edge_count_along(axis));
        }
    }

    #[test]
    fn flatten_is_a_bijection(dims in arb_dims()) {
        let t = LatticeTopology::new(&dims).unwrap();
        let seen: HashSet<_> = t
            .qubits()
            .map(|q| t.flatten(&t.coordinate(q).unwrap()).unwrap())
            .collect();
        prop_assert_eq!(seen.len(), t.num_sites() as usize);
    }
}
