//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::gate::StandardGate;
use crate::parameter::ParameterExpression;
use crate::qubit::{ClbitId, QubitId};

/// A named, parameterized gate defined by a circuit body.
///
/// The body is written over the formal operands in `qubits`; angle symbols
/// listed in `params` are in scope inside the body. Where the definition
/// appears in a circuit it executes nothing; it only contributes a
/// definition to the emitted module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateDefinition {
    /// Name the gate is defined and later called under.
    pub name: String,
    /// Angle parameter names, in signature order.
    pub params: Vec<String>,
    /// Formal qubit operands the body is written over.
    pub qubits: Vec<QubitId>,
    /// The defining body.
    pub circuit: Circuit,
}

impl GateDefinition {
    /// Create a gate definition.
    pub fn new(
        name: impl Into<String>,
        params: impl IntoIterator<Item = String>,
        qubits: impl IntoIterator<Item = QubitId>,
        circuit: Circuit,
    ) -> Self {
        Self {
            name: name.into(),
            params: params.into_iter().collect(),
            qubits: qubits.into_iter().collect(),
            circuit,
        }
    }
}

/// The kind of instruction in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A gate from the standard vocabulary.
    Gate(StandardGate),
    /// Z-basis measurement into a result slot.
    Measure,
    /// Reset qubit to |0⟩.
    Reset,
    /// Execute the inner circuit iff a previously measured result read true.
    Conditional {
        /// The conditioned body.
        circuit: Circuit,
    },
    /// Execute the inner circuit a fixed number of times.
    Repeat {
        /// Iteration count.
        times: u64,
        /// The repeated body.
        circuit: Circuit,
    },
    /// Definition of a named gate (contributes no execution here).
    GateDef(GateDefinition),
    /// Invocation of a previously defined gate.
    GateCall {
        /// Name of the defined gate.
        name: String,
        /// Angle arguments, in signature order.
        args: Vec<ParameterExpression>,
    },
}

/// A complete instruction with operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The kind of instruction.
    pub kind: InstructionKind,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
    /// Result slots this instruction reads or writes.
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Gate(gate),
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Create a three-qubit gate instruction.
    pub fn three_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId, q3: QubitId) -> Self {
        Self::gate(gate, [q1, q2, q3])
    }

    /// Create a measurement of `qubit` into result slot `clbit`.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    /// Create a reset instruction.
    pub fn reset(qubit: QubitId) -> Self {
        Self {
            kind: InstructionKind::Reset,
            qubits: vec![qubit],
            clbits: vec![],
        }
    }

    /// Create a conditional on result slot `clbit`.
    pub fn conditional(clbit: ClbitId, circuit: Circuit) -> Self {
        Self {
            kind: InstructionKind::Conditional { circuit },
            qubits: vec![],
            clbits: vec![clbit],
        }
    }

    /// Create a counted repetition of `circuit`.
    pub fn repeat(times: u64, circuit: Circuit) -> Self {
        Self {
            kind: InstructionKind::Repeat { times, circuit },
            qubits: vec![],
            clbits: vec![],
        }
    }

    /// Create a gate definition instruction.
    pub fn gate_def(definition: GateDefinition) -> Self {
        Self {
            kind: InstructionKind::GateDef(definition),
            qubits: vec![],
            clbits: vec![],
        }
    }

    /// Create a call of the defined gate `name` on `qubits`.
    pub fn gate_call(
        name: impl Into<String>,
        args: impl IntoIterator<Item = ParameterExpression>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> Self {
        Self {
            kind: InstructionKind::GateCall {
                name: name.into(),
                args: args.into_iter().collect(),
            },
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
        }
    }

    /// Check if this is a gate instruction.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, InstructionKind::Measure)
    }

    /// Check if this is a reset.
    pub fn is_reset(&self) -> bool {
        matches!(self.kind, InstructionKind::Reset)
    }

    /// Check if this is a conditional block.
    pub fn is_conditional(&self) -> bool {
        matches!(self.kind, InstructionKind::Conditional { .. })
    }

    /// Check if this is a gate definition.
    pub fn is_gate_def(&self) -> bool {
        matches!(self.kind, InstructionKind::GateDef(_))
    }

    /// Get the gate if this is a gate instruction.
    pub fn as_gate(&self) -> Option<&StandardGate> {
        match &self.kind {
            InstructionKind::Gate(g) => Some(g),
            _ => None,
        }
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Gate(g) => g.name(),
            InstructionKind::Measure => "measure",
            InstructionKind::Reset => "reset",
            InstructionKind::Conditional { .. } => "conditional",
            InstructionKind::Repeat { .. } => "repeat",
            InstructionKind::GateDef(def) => &def.name,
            InstructionKind::GateCall { name, .. } => name,
        }
    }
}

impl From<GateDefinition> for Instruction {
    fn from(definition: GateDefinition) -> Self {
        Instruction::gate_def(definition)
    }
}
