//! Immutable circuit value and its builder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateOp;
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit: an ordered operation list over a fixed register.
///
/// A `Circuit` can only be produced by [`CircuitBuilder::finish`] (or by
/// deserializing, which re-runs the builder's validation), so every
/// operand it holds is in range. It exposes no mutating methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircuitData")]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Width of the quantum register.
    num_qubits: u32,
    /// Width of the classical register.
    num_clbits: u32,
    /// Operations in program order.
    ops: Vec<GateOp>,
}

impl Circuit {
    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Operations in program order.
    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// Iterate over operations in program order.
    pub fn iter(&self) -> std::slice::Iter<'_, GateOp> {
        self.ops.iter()
    }

    /// Number of operations, barriers and measurements included.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True if the circuit holds no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Count operations by mnemonic.
    pub fn count_ops(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for op in &self.ops {
            *counts.entry(op.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Circuit depth.
    ///
    /// Each gate or measurement occupies one layer on the qubits it touches.
    /// A barrier aligns every qubit to the deepest one without adding a layer.
    pub fn depth(&self) -> usize {
        let mut levels = vec![0usize; self.num_qubits()];
        for op in &self.ops {
            if op.is_barrier() {
                let top = levels.iter().copied().max().unwrap_or(0);
                levels.iter_mut().for_each(|l| *l = top);
                continue;
            }
            let qubits = op.qubits();
            let next = qubits
                .iter()
                .map(|q| levels[q.index()])
                .max()
                .unwrap_or(0)
                + 1;
            for q in qubits {
                levels[q.index()] = next;
            }
        }
        levels.into_iter().max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a GateOp;
    type IntoIter = std::slice::Iter<'a, GateOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Incremental, validating constructor for [`Circuit`].
///
/// Every append checks operands against the register widths fixed at
/// construction; a failed append leaves the builder unchanged.
#[derive(Debug, Clone)]
pub struct CircuitBuilder {
    name: String,
    num_qubits: u32,
    num_clbits: u32,
    ops: Vec<GateOp>,
}

impl CircuitBuilder {
    /// Start a circuit with the given register widths.
    pub fn new(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            ops: vec![],
        }
    }

    /// Pre-allocate room for `additional` operations.
    #[must_use]
    pub fn with_capacity(mut self, additional: usize) -> Self {
        self.ops.reserve(additional);
        self
    }

    /// Width of the quantum register.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Width of the classical register.
    pub fn num_clbits(&self) -> u32 {
        self.num_clbits
    }

    /// Number of operations appended so far.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateOp::h(qubit))
    }

    /// Apply CX (CNOT) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(GateOp::cx(control, target))
    }

    /// Apply Rz rotation.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateOp::rz(theta, qubit))
    }

    /// Apply Rx rotation.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateOp::rx(theta, qubit))
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Apply a barrier across all qubits.
    pub fn barrier(&mut self) -> IrResult<&mut Self> {
        self.push(GateOp::Barrier)
    }

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.push(GateOp::measure(qubit, clbit))
    }

    /// Measure every qubit `i` into classical bit `i`.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        for q in 0..self.num_qubits {
            self.measure(QubitId(q), ClbitId(q))?;
        }
        Ok(self)
    }

    /// Append one operation after validating its operands.
    pub fn push(&mut self, op: GateOp) -> IrResult<&mut Self> {
        self.validate(&op)?;
        self.ops.push(op);
        Ok(self)
    }

    /// Append a sequence of operations in order.
    ///
    /// Stops at the first invalid operation; operations before it stay
    /// appended.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = GateOp>) -> IrResult<&mut Self> {
        for op in ops {
            self.push(op)?;
        }
        Ok(self)
    }

    /// Freeze the builder into an immutable circuit.
    pub fn finish(self) -> Circuit {
        Circuit {
            name: self.name,
            num_qubits: self.num_qubits,
            num_clbits: self.num_clbits,
            ops: self.ops,
        }
    }

    fn validate(&self, op: &GateOp) -> IrResult<()> {
        let gate_name = Some(op.name());
        for qubit in op.qubits() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    num_qubits: self.num_qubits,
                    gate_name,
                });
            }
        }
        if let GateOp::CX { control, target } = op {
            if control == target {
                return Err(IrError::DuplicateQubit {
                    qubit: *control,
                    gate_name,
                });
            }
        }
        if let Some(clbit) = op.clbit() {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitNotFound {
                    clbit,
                    num_clbits: self.num_clbits,
                    gate_name,
                });
            }
        }
        Ok(())
    }
}

/// Wire form of [`Circuit`]; converted through the builder on load.
#[derive(Deserialize)]
struct CircuitData {
    name: String,
    num_qubits: u32,
    num_clbits: u32,
    ops: Vec<GateOp>,
}

impl TryFrom<CircuitData> for Circuit {
    type Error = IrError;

    fn try_from(data: CircuitData) -> IrResult<Self> {
        let mut builder = CircuitBuilder::new(data.name, data.num_qubits, data.num_clbits)
            .with_capacity(data.ops.len());
        builder.extend(data.ops)?;
        Ok(builder.finish())
    }
}
