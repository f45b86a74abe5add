//! QASM emitters for serializing circuits.

use std::f64::consts::PI;

use ising_ir::{Circuit, GateOp};

/// Emit a circuit as QASM3 source code.
pub fn emit(circuit: &Circuit) -> String {
    Emitter::new(Dialect::Qasm3).emit_circuit(circuit)
}

/// Emit a circuit as QASM 2.0 source code.
///
/// Register declarations use the QASM2 style (`qreg q[n];` / `creg c[n];`)
/// and measurements use `measure q[i] -> c[i];`. Every operation maps onto
/// `qelib1.inc`, so no gate definitions are emitted.
pub fn emit_qasm2(circuit: &Circuit) -> String {
    Emitter::new(Dialect::Qasm2).emit_circuit(circuit)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    Qasm2,
    Qasm3,
}

struct Emitter {
    dialect: Dialect,
    output: String,
}

impl Emitter {
    fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            output: String::new(),
        }
    }

    fn emit_circuit(mut self, circuit: &Circuit) -> String {
        match self.dialect {
            Dialect::Qasm3 => self.writeln("OPENQASM 3.0;"),
            Dialect::Qasm2 => {
                self.writeln("OPENQASM 2.0;");
                self.writeln("include \"qelib1.inc\";");
            }
        }
        self.writeln("");

        let num_qubits = circuit.num_qubits();
        let num_clbits = circuit.num_clbits();
        match self.dialect {
            Dialect::Qasm3 => {
                if num_qubits > 0 {
                    self.writeln(&format!("qubit[{num_qubits}] q;"));
                }
                if num_clbits > 0 {
                    self.writeln(&format!("bit[{num_clbits}] c;"));
                }
            }
            Dialect::Qasm2 => {
                if num_qubits > 0 {
                    self.writeln(&format!("qreg q[{num_qubits}];"));
                }
                if num_clbits > 0 {
                    self.writeln(&format!("creg c[{num_clbits}];"));
                }
            }
        }
        if num_qubits > 0 || num_clbits > 0 {
            self.writeln("");
        }

        for op in circuit {
            self.emit_op(op);
        }

        self.output
    }

    fn emit_op(&mut self, op: &GateOp) {
        let line = match op {
            GateOp::H { qubit } => format!("h q[{}];", qubit.0),
            GateOp::CX { control, target } => format!("cx q[{}], q[{}];", control.0, target.0),
            GateOp::Rz { theta, qubit } | GateOp::Rx { theta, qubit } => {
                format!("{}({}) q[{}];", op.name(), emit_angle(*theta), qubit.0)
            }
            GateOp::Barrier => "barrier q;".to_string(),
            GateOp::Measure { qubit, clbit } => match self.dialect {
                Dialect::Qasm3 => format!("c[{}] = measure q[{}];", clbit.0, qubit.0),
                Dialect::Qasm2 => format!("measure q[{}] -> c[{}];", qubit.0, clbit.0),
            },
        };
        self.writeln(&line);
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

/// Format an angle, printing common fractions of pi symbolically.
///
/// Other values use the shortest decimal that parses back to the same `f64`.
fn emit_angle(v: f64) -> String {
    if (v - PI).abs() < 1e-10 {
        "pi".into()
    } else if (v + PI).abs() < 1e-10 {
        "-pi".into()
    } else if (v - PI / 2.0).abs() < 1e-10 {
        "pi/2".into()
    } else if (v - PI / 4.0).abs() < 1e-10 {
        "pi/4".into()
    } else if (v + PI / 2.0).abs() < 1e-10 {
        "-pi/2".into()
    } else if (v + PI / 4.0).abs() < 1e-10 {
        "-pi/4".into()
    } else {
        format!("{v}")
    }
}
