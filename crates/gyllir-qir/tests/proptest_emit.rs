//! Property-based tests for QIR emission.

use gyllir_ir::{Circuit, ClbitId, QubitId};
use gyllir_qir::{emit, Backend};
use proptest::prelude::*;

/// Strategy for generating simple circuits with common gates.
fn arb_simple_circuit() -> impl Strategy<Value = Circuit> {
    (2_u32..=5).prop_flat_map(|num_qubits| {
        proptest::collection::vec(arb_gate_op(num_qubits), 0..20).prop_map(move |ops| {
            let mut circuit = Circuit::new();
            for op in ops {
                op.apply(&mut circuit);
            }
            circuit
        })
    })
}

#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    Y(u32),
    Z(u32),
    S(u32),
    T(u32),
    Rx(u32, f64),
    Ry(u32, f64),
    Rz(u32, f64),
    Cx(u32, u32),
    Cz(u32, u32),
    Swap(u32, u32),
    Measure(u32),
}

impl GateOp {
    fn apply(self, circuit: &mut Circuit) {
        match self {
            GateOp::H(q) => circuit.h(QubitId(q)),
            GateOp::X(q) => circuit.x(QubitId(q)),
            GateOp::Y(q) => circuit.y(QubitId(q)),
            GateOp::Z(q) => circuit.z(QubitId(q)),
            GateOp::S(q) => circuit.s(QubitId(q)),
            GateOp::T(q) => circuit.t(QubitId(q)),
            GateOp::Rx(q, angle) => circuit.rx(QubitId(q), angle),
            GateOp::Ry(q, angle) => circuit.ry(QubitId(q), angle),
            GateOp::Rz(q, angle) => circuit.rz(QubitId(q), angle),
            GateOp::Cx(c, t) => circuit.cx(QubitId(c), QubitId(t)),
            GateOp::Cz(c, t) => circuit.cz(QubitId(c), QubitId(t)),
            GateOp::Swap(a, b) => circuit.swap(QubitId(a), QubitId(b)),
            GateOp::Measure(q) => circuit.measure(QubitId(q), ClbitId(q)),
        };
    }
}

fn arb_gate_op(num_qubits: u32) -> BoxedStrategy<GateOp> {
    prop_oneof![
        (0..num_qubits).prop_map(GateOp::H),
        (0..num_qubits).prop_map(GateOp::X),
        (0..num_qubits).prop_map(GateOp::Y),
        (0..num_qubits).prop_map(GateOp::Z),
        (0..num_qubits).prop_map(GateOp::S),
        (0..num_qubits).prop_map(GateOp::T),
        (0..num_qubits, -6.3..6.3_f64).prop_map(|(q, angle)| GateOp::Rx(q, angle)),
        (0..num_qubits, -6.3..6.3_f64).prop_map(|(q, angle)| GateOp::Ry(q, angle)),
        (0..num_qubits, -6.3..6.3_f64).prop_map(|(q, angle)| GateOp::Rz(q, angle)),
        (0..num_qubits, 0..num_qubits)
            .prop_filter("Control and target must differ", |(c, t)| c != t)
            .prop_map(|(c, t)| GateOp::Cx(c, t)),
        (0..num_qubits, 0..num_qubits)
            .prop_filter("Control and target must differ", |(c, t)| c != t)
            .prop_map(|(c, t)| GateOp::Cz(c, t)),
        (0..num_qubits, 0..num_qubits)
            .prop_filter("Swapped qubits must differ", |(a, b)| a != b)
            .prop_map(|(a, b)| GateOp::Swap(a, b)),
        (0..num_qubits).prop_map(GateOp::Measure),
    ]
    .boxed()
}

proptest! {
    /// Emitting the same circuit twice yields identical text.
    #[test]
    fn test_emission_is_deterministic(circuit in arb_simple_circuit()) {
        let backend = Backend::new(None, None).unwrap();
        let first = backend.circuit_to_qir_str(&circuit, false).unwrap();
        let second = backend.circuit_to_qir_str(&circuit, false).unwrap();
        prop_assert_eq!(first, second, "emission differs between runs");
    }

    /// Every lowered circuit is framed as a complete module.
    #[test]
    fn test_module_framing(circuit in arb_simple_circuit()) {
        let qir_str = emit(&circuit).unwrap();
        prop_assert!(qir_str.starts_with("%Qubit = type opaque\n"));
        prop_assert!(
            qir_str.contains("define void @main() #0 {\nentry:\n"),
            "module is missing the main entry block"
        );
        prop_assert!(qir_str.contains("\"qir_profiles\"=\"base_profile\""));
        prop_assert!(
            qir_str.ends_with("!3 = !{i32 1, !\"dynamic_result_management\", i1 false}"),
            "module does not end with the metadata block"
        );
    }

    /// Concrete-angle circuits always lower.
    #[test]
    fn test_concrete_circuits_lower(circuit in arb_simple_circuit()) {
        prop_assert!(emit(&circuit).is_ok());
    }

    /// The free function and an explicit default backend agree.
    #[test]
    fn test_emit_matches_default_backend(circuit in arb_simple_circuit()) {
        let backend = Backend::new(None, None).unwrap();
        let via_backend = backend.circuit_to_qir_str(&circuit, false).unwrap();
        prop_assert_eq!(emit(&circuit).unwrap(), via_backend);
    }

    /// Measuring out every qubit marks the module irreversible.
    #[test]
    fn test_measure_all_is_irreversible(circuit in arb_simple_circuit()) {
        if circuit.num_qubits() > 0 {
            let backend = Backend::new(None, None).unwrap();
            let qir_str = backend.circuit_to_qir_str(&circuit, true).unwrap();
            prop_assert!(
                qir_str.contains("attributes #1 = { \"irreversible\" }"),
                "module is missing the irreversible attribute group"
            );
            prop_assert!(qir_str.contains("call void @__quantum__qis__mz__body"));
        }
    }
}
