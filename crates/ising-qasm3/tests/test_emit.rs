//! Emission tests over assembled evolution circuits.

use ising_ir::{CircuitBuilder, QubitId};
use ising_qasm3::{emit, emit_qasm2};
use ising_synth::{TrotterParameters, assemble};
use proptest::prelude::*;

fn body(qasm: &str) -> Vec<&str> {
    qasm.lines()
        .skip_while(|l| !l.starts_with("h "))
        .collect()
}

#[test]
fn chain_of_three_qasm3() {
    let params = TrotterParameters::new(1.0, 0.5, 0.25, 1);
    let circuit = assemble(&[3], &params).unwrap();
    let qasm = emit(&circuit);

    let header: Vec<_> = qasm.lines().take(4).collect();
    assert_eq!(header, ["OPENQASM 3.0;", "", "qubit[3] q;", "bit[3] c;"]);

    assert_eq!(
        body(&qasm),
        [
            "h q[0];",
            "h q[1];",
            "h q[2];",
            "barrier q;",
            "cx q[0], q[1];",
            "rz(0.5) q[1];",
            "cx q[0], q[1];",
            "cx q[1], q[2];",
            "rz(0.5) q[2];",
            "cx q[1], q[2];",
            "rx(0.25) q[0];",
            "rx(0.25) q[1];",
            "rx(0.25) q[2];",
            "barrier q;",
            "c[0] = measure q[0];",
            "c[1] = measure q[1];",
            "c[2] = measure q[2];",
        ]
    );
}

#[test]
fn chain_of_two_qasm2() {
    let params = TrotterParameters::new(1.0, 0.5, 0.25, 1);
    let circuit = assemble(&[2], &params).unwrap();
    let qasm = emit_qasm2(&circuit);

    assert!(qasm.starts_with("OPENQASM 2.0;\ninclude \"qelib1.inc\";\n"));
    assert!(qasm.contains("qreg q[2];\ncreg c[2];\n"));
    assert!(qasm.contains("measure q[0] -> c[0];\nmeasure q[1] -> c[1];\n"));
    assert!(!qasm.contains("= measure"));
}

#[test]
fn symbolic_pi_angles() {
    let mut builder = CircuitBuilder::new("pi", 1, 0);
    builder
        .rz(std::f64::consts::PI, QubitId(0))
        .unwrap()
        .rx(-std::f64::consts::FRAC_PI_4, QubitId(0))
        .unwrap();
    let qasm = emit(&builder.finish());
    assert!(qasm.contains("rz(pi) q[0];"));
    assert!(qasm.contains("rx(-pi/4) q[0];"));
    assert!(!qasm.contains("bit["));
}

proptest! {
    #[test]
    fn one_line_per_operation(
        dims in prop::collection::vec(1usize..=3, 1..=3),
        slices in 1usize..=3,
        dt in 0.01f64..1.0,
    ) {
        let params = TrotterParameters::new(1.0, 0.5, dt, slices);
        let circuit = assemble(&dims, &params).unwrap();
        for qasm in [emit(&circuit), emit_qasm2(&circuit)] {
            prop_assert_eq!(body(&qasm).len(), circuit.len());
            let barriers = qasm.lines().filter(|l| *l == "barrier q;").count();
            prop_assert_eq!(barriers, slices + 1);
        }
    }
}
