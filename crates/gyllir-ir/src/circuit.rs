//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::gate::StandardGate;
use crate::instruction::{GateDefinition, Instruction, InstructionKind};
use crate::parameter::ParameterExpression;
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit: instructions in append order.
///
/// Qubits and result slots are implicit; referencing `QubitId(k)` means the
/// circuit spans at least `k + 1` qubits. Append order is preserved exactly
/// and is the order an emitter walks.
///
/// # Example
///
/// ```
/// use gyllir_ir::{Circuit, Instruction, QubitId, StandardGate};
///
/// let mut circuit = Circuit::new();
/// circuit.h(QubitId(0)).cx(QubitId(0), QubitId(1));
/// circuit += Instruction::single_qubit_gate(StandardGate::X, QubitId(1));
/// assert_eq!(circuit.len(), 3);
/// assert_eq!(circuit.num_qubits(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Instructions in append order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Create an empty circuit with room for `capacity` instructions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instructions: Vec::with_capacity(capacity),
        }
    }

    /// Append an instruction, preserving prior order.
    pub fn add(&mut self, instruction: impl Into<Instruction>) -> &mut Self {
        self.instructions.push(instruction.into());
        self
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instructions in append order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Iterate over the instructions in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Number of qubits the circuit spans: one past the highest referenced
    /// qubit index. Conditional and repeat bodies count; definition bodies
    /// are written over formal operands and do not.
    pub fn num_qubits(&self) -> u32 {
        self.max_qubit().map_or(0, |q| q.0 + 1)
    }

    /// Number of result slots the circuit spans, by the same rule.
    pub fn num_clbits(&self) -> u32 {
        self.max_clbit().map_or(0, |c| c.0 + 1)
    }

    fn max_qubit(&self) -> Option<QubitId> {
        let mut max = None;
        for inst in &self.instructions {
            if inst.is_gate_def() {
                continue;
            }
            for &q in &inst.qubits {
                max = max.max(Some(q));
            }
            if let InstructionKind::Conditional { circuit }
            | InstructionKind::Repeat { circuit, .. } = &inst.kind
            {
                max = max.max(circuit.max_qubit());
            }
        }
        max
    }

    fn max_clbit(&self) -> Option<ClbitId> {
        let mut max = None;
        for inst in &self.instructions {
            if inst.is_gate_def() {
                continue;
            }
            for &c in &inst.clbits {
                max = max.max(Some(c));
            }
            if let InstructionKind::Conditional { circuit }
            | InstructionKind::Repeat { circuit, .. } = &inst.kind
            {
                max = max.max(circuit.max_clbit());
            }
        }
        max
    }

    // --- Single-qubit gates ---

    /// Apply an identity gate.
    pub fn id(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::single_qubit_gate(StandardGate::I, qubit))
    }

    /// Apply a Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply a Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::single_qubit_gate(StandardGate::Y, qubit))
    }

    /// Apply a Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::single_qubit_gate(StandardGate::Z, qubit))
    }

    /// Apply a Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply an S gate.
    pub fn s(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::single_qubit_gate(StandardGate::S, qubit))
    }

    /// Apply an S-adjoint gate.
    pub fn sdg(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))
    }

    /// Apply a T gate.
    pub fn t(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::single_qubit_gate(StandardGate::T, qubit))
    }

    /// Apply a T-adjoint gate.
    pub fn tdg(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::single_qubit_gate(StandardGate::Tdg, qubit))
    }

    /// Apply a square-root-of-X gate.
    pub fn sx(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::single_qubit_gate(StandardGate::SX, qubit))
    }

    /// Apply an adjoint square-root-of-X gate.
    pub fn sxdg(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::single_qubit_gate(StandardGate::SXdg, qubit))
    }

    /// Apply an X-rotation.
    pub fn rx(&mut self, qubit: QubitId, theta: impl Into<ParameterExpression>) -> &mut Self {
        self.add(Instruction::single_qubit_gate(
            StandardGate::Rx(theta.into()),
            qubit,
        ))
    }

    /// Apply a Y-rotation.
    pub fn ry(&mut self, qubit: QubitId, theta: impl Into<ParameterExpression>) -> &mut Self {
        self.add(Instruction::single_qubit_gate(
            StandardGate::Ry(theta.into()),
            qubit,
        ))
    }

    /// Apply a Z-rotation.
    pub fn rz(&mut self, qubit: QubitId, theta: impl Into<ParameterExpression>) -> &mut Self {
        self.add(Instruction::single_qubit_gate(
            StandardGate::Rz(theta.into()),
            qubit,
        ))
    }

    /// Apply a phase shift on |1⟩.
    pub fn p(&mut self, qubit: QubitId, theta: impl Into<ParameterExpression>) -> &mut Self {
        self.add(Instruction::single_qubit_gate(
            StandardGate::P(theta.into()),
            qubit,
        ))
    }

    /// Apply a phased X-rotation.
    pub fn prx(
        &mut self,
        qubit: QubitId,
        theta: impl Into<ParameterExpression>,
        phi: impl Into<ParameterExpression>,
    ) -> &mut Self {
        self.add(Instruction::single_qubit_gate(
            StandardGate::PRX(theta.into(), phi.into()),
            qubit,
        ))
    }

    // --- Two-qubit gates ---

    /// Apply a controlled-X gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.add(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply a controlled-Y gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.add(Instruction::two_qubit_gate(StandardGate::CY, control, target))
    }

    /// Apply a controlled-Z gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.add(Instruction::two_qubit_gate(StandardGate::CZ, control, target))
    }

    /// Apply a controlled phase shift.
    pub fn cp(
        &mut self,
        control: QubitId,
        target: QubitId,
        theta: impl Into<ParameterExpression>,
    ) -> &mut Self {
        self.add(Instruction::two_qubit_gate(
            StandardGate::CP(theta.into()),
            control,
            target,
        ))
    }

    /// Apply a swap gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> &mut Self {
        self.add(Instruction::two_qubit_gate(StandardGate::Swap, q1, q2))
    }

    /// Apply an iSWAP gate.
    pub fn iswap(&mut self, q1: QubitId, q2: QubitId) -> &mut Self {
        self.add(Instruction::two_qubit_gate(StandardGate::ISwap, q1, q2))
    }

    /// Apply a square-root-of-iSWAP gate.
    pub fn siswap(&mut self, q1: QubitId, q2: QubitId) -> &mut Self {
        self.add(Instruction::two_qubit_gate(StandardGate::SISwap, q1, q2))
    }

    /// Apply an adjoint square-root-of-iSWAP gate.
    pub fn siswap_dg(&mut self, q1: QubitId, q2: QubitId) -> &mut Self {
        self.add(Instruction::two_qubit_gate(StandardGate::SISwapDg, q1, q2))
    }

    /// Apply a fermionic swap gate.
    pub fn fswap(&mut self, q1: QubitId, q2: QubitId) -> &mut Self {
        self.add(Instruction::two_qubit_gate(StandardGate::FSwap, q1, q2))
    }

    /// Apply an XY interaction.
    pub fn xy(
        &mut self,
        q1: QubitId,
        q2: QubitId,
        theta: impl Into<ParameterExpression>,
    ) -> &mut Self {
        self.add(Instruction::two_qubit_gate(
            StandardGate::XY(theta.into()),
            q1,
            q2,
        ))
    }

    /// Apply an XX interaction.
    pub fn rxx(
        &mut self,
        q1: QubitId,
        q2: QubitId,
        theta: impl Into<ParameterExpression>,
    ) -> &mut Self {
        self.add(Instruction::two_qubit_gate(
            StandardGate::RXX(theta.into()),
            q1,
            q2,
        ))
    }

    /// Apply a ZZ interaction.
    pub fn rzz(
        &mut self,
        q1: QubitId,
        q2: QubitId,
        theta: impl Into<ParameterExpression>,
    ) -> &mut Self {
        self.add(Instruction::two_qubit_gate(
            StandardGate::RZZ(theta.into()),
            q1,
            q2,
        ))
    }

    /// Apply a plus-minus exchange interaction.
    pub fn pmx(
        &mut self,
        q1: QubitId,
        q2: QubitId,
        theta: impl Into<ParameterExpression>,
    ) -> &mut Self {
        self.add(Instruction::two_qubit_gate(
            StandardGate::PMExchange(theta.into()),
            q1,
            q2,
        ))
    }

    /// Apply a Givens rotation.
    pub fn givens(
        &mut self,
        q1: QubitId,
        q2: QubitId,
        theta: impl Into<ParameterExpression>,
        phi: impl Into<ParameterExpression>,
    ) -> &mut Self {
        self.add(Instruction::two_qubit_gate(
            StandardGate::Givens(theta.into(), phi.into()),
            q1,
            q2,
        ))
    }

    /// Apply a Givens rotation in the little-endian convention.
    pub fn givens_le(
        &mut self,
        q1: QubitId,
        q2: QubitId,
        theta: impl Into<ParameterExpression>,
        phi: impl Into<ParameterExpression>,
    ) -> &mut Self {
        self.add(Instruction::two_qubit_gate(
            StandardGate::GivensLE(theta.into(), phi.into()),
            q1,
            q2,
        ))
    }

    /// Apply a phased controlled-Z gate.
    pub fn phased_cz(
        &mut self,
        control: QubitId,
        target: QubitId,
        phi: impl Into<ParameterExpression>,
    ) -> &mut Self {
        self.add(Instruction::two_qubit_gate(
            StandardGate::PhasedCZ(phi.into()),
            control,
            target,
        ))
    }

    /// Apply a phased controlled phase shift.
    pub fn phased_cp(
        &mut self,
        control: QubitId,
        target: QubitId,
        theta: impl Into<ParameterExpression>,
        phi: impl Into<ParameterExpression>,
    ) -> &mut Self {
        self.add(Instruction::two_qubit_gate(
            StandardGate::PhasedCP(theta.into(), phi.into()),
            control,
            target,
        ))
    }

    // --- Three-qubit gates ---

    /// Apply a Toffoli gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> &mut Self {
        self.add(Instruction::three_qubit_gate(StandardGate::CCX, c1, c2, target))
    }

    /// Apply a doubly controlled Z gate.
    pub fn ccz(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> &mut Self {
        self.add(Instruction::three_qubit_gate(StandardGate::CCZ, c1, c2, target))
    }

    /// Apply a doubly controlled phase shift.
    pub fn ccp(
        &mut self,
        c1: QubitId,
        c2: QubitId,
        target: QubitId,
        theta: impl Into<ParameterExpression>,
    ) -> &mut Self {
        self.add(Instruction::three_qubit_gate(
            StandardGate::CCP(theta.into()),
            c1,
            c2,
            target,
        ))
    }

    // --- Non-unitary and structural operations ---

    /// Measure `qubit` into result slot `clbit`.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> &mut Self {
        self.add(Instruction::measure(qubit, clbit))
    }

    /// Measure every qubit `k` the circuit spans into result slot `k`.
    pub fn measure_all(&mut self) -> &mut Self {
        for k in 0..self.num_qubits() {
            self.add(Instruction::measure(QubitId(k), ClbitId(k)));
        }
        self
    }

    /// Reset a qubit to |0⟩.
    pub fn reset(&mut self, qubit: QubitId) -> &mut Self {
        self.add(Instruction::reset(qubit))
    }

    /// Execute `circuit` iff result slot `clbit` read true.
    pub fn conditional(&mut self, clbit: ClbitId, circuit: Circuit) -> &mut Self {
        self.add(Instruction::conditional(clbit, circuit))
    }

    /// Execute `circuit` a fixed number of times.
    pub fn repeat(&mut self, times: u64, circuit: Circuit) -> &mut Self {
        self.add(Instruction::repeat(times, circuit))
    }

    /// Define a named gate for later calls.
    pub fn define_gate(&mut self, definition: GateDefinition) -> &mut Self {
        self.add(Instruction::gate_def(definition))
    }

    /// Call a previously defined gate.
    pub fn call_gate(
        &mut self,
        name: impl Into<String>,
        args: impl IntoIterator<Item = ParameterExpression>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> &mut Self {
        self.add(Instruction::gate_call(name, args, qubits))
    }

    // --- Prebuilt circuits ---

    /// A measured Bell pair.
    pub fn bell() -> Self {
        let mut circuit = Self::new();
        circuit.h(QubitId(0)).cx(QubitId(0), QubitId(1));
        circuit.measure(QubitId(0), ClbitId(0));
        circuit.measure(QubitId(1), ClbitId(1));
        circuit
    }

    /// A measured GHZ state over `n` qubits.
    pub fn ghz(n: u32) -> Self {
        let mut circuit = Self::new();
        if n == 0 {
            return circuit;
        }
        circuit.h(QubitId(0));
        for k in 1..n {
            circuit.cx(QubitId(k - 1), QubitId(k));
        }
        circuit.measure_all();
        circuit
    }
}

impl std::ops::AddAssign<Instruction> for Circuit {
    fn add_assign(&mut self, instruction: Instruction) {
        self.add(instruction);
    }
}

impl std::ops::AddAssign<Circuit> for Circuit {
    fn add_assign(&mut self, other: Circuit) {
        self.instructions.extend(other.instructions);
    }
}

impl std::ops::AddAssign<&Circuit> for Circuit {
    fn add_assign(&mut self, other: &Circuit) {
        self.instructions.extend(other.instructions.iter().cloned());
    }
}

impl Extend<Instruction> for Circuit {
    fn extend<T: IntoIterator<Item = Instruction>>(&mut self, iter: T) {
        self.instructions.extend(iter);
    }
}

impl FromIterator<Instruction> for Circuit {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Circuit {
    type Item = Instruction;
    type IntoIter = std::vec::IntoIter<Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
