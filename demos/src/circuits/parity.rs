//! Repeated parity-check circuit generator.

use gyllir_ir::{Circuit, ClbitId, QubitId};

/// Generate a Bell pair guarded by repeated parity checks.
///
/// Each round maps the joint parity of qubits 0 and 1 onto the ancilla
/// qubit 2, records it, and resets the ancilla for the next round.
pub fn parity_check_circuit(rounds: u64) -> Circuit {
    let mut round = Circuit::new();
    round.cx(QubitId(0), QubitId(2));
    round.cx(QubitId(1), QubitId(2));
    round.measure(QubitId(2), ClbitId(0));
    round.reset(QubitId(2));

    let mut circuit = Circuit::new();
    circuit.h(QubitId(0));
    circuit.cx(QubitId(0), QubitId(1));
    circuit.repeat(rounds, round);
    circuit.measure(QubitId(0), ClbitId(1));
    circuit.measure(QubitId(1), ClbitId(2));
    circuit
}
