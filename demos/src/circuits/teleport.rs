//! Quantum teleportation circuit generator.
//!
//! Teleportation moves a single-qubit state across an entangled pair using
//! two mid-circuit measurements and classically conditioned corrections.

use gyllir_ir::{Circuit, ClbitId, QubitId};
use std::f64::consts::FRAC_PI_4;

/// Generate a teleportation circuit.
///
/// Qubit 0 carries the message state, qubits 1 and 2 share a Bell pair.
/// After the Bell measurement of qubits 0 and 1, the recorded bits drive
/// an X and a Z correction on qubit 2.
pub fn teleport_circuit() -> Circuit {
    let mut circuit = Circuit::new();

    // Message state preparation.
    circuit.ry(QubitId(0), FRAC_PI_4);

    // Bell pair between the carrier qubits.
    circuit.h(QubitId(1));
    circuit.cx(QubitId(1), QubitId(2));

    // Bell measurement of message and near carrier.
    circuit.cx(QubitId(0), QubitId(1));
    circuit.h(QubitId(0));
    circuit.measure(QubitId(0), ClbitId(0));
    circuit.measure(QubitId(1), ClbitId(1));

    // Conditioned corrections on the receiving qubit.
    let mut x_fix = Circuit::new();
    x_fix.x(QubitId(2));
    circuit.conditional(ClbitId(1), x_fix);

    let mut z_fix = Circuit::new();
    z_fix.z(QubitId(2));
    circuit.conditional(ClbitId(0), z_fix);

    circuit
}
