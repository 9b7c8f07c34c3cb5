//! Whole-module emission tests for [`Backend`].
//!
//! Each test pins the complete textual module for one circuit shape so
//! any drift in framing, declaration order or attribute wiring shows up
//! as a diff.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use gyllir_ir::{
    Circuit, ClbitId, GateDefinition, Instruction, ParameterExpression, QubitId, StandardGate,
};
use gyllir_qir::{Backend, QirError};

#[test]
fn simple_circuit() {
    let backend = Backend::new(None, None).unwrap();
    let mut circuit = Circuit::new();
    circuit.x(QubitId(0));
    let qir_str = backend.circuit_to_qir_str(&circuit, false).unwrap();
    assert_eq!(
        qir_str,
        r#"%Qubit = type opaque

define void @main() #0 {
entry:
  call void @__quantum__qis__x__body(%Qubit* inttoptr (i64 0 to %Qubit*))
  ret void
}

declare void @__quantum__qis__x__body(%Qubit*)

attributes #0 = { "entry_point" "required_num_qubits"="1" "required_num_results"="0" "output_labeling_schema" "qir_profiles"="base_profile" }

!llvm.module.flags = !{!0, !1, !2, !3}

!0 = !{i32 1, !"qir_major_version", i32 1}
!1 = !{i32 7, !"qir_minor_version", i32 0}
!2 = !{i32 1, !"dynamic_qubit_management", i1 false}
!3 = !{i32 1, !"dynamic_result_management", i1 false}"#
    );
}

#[test]
fn circuit_with_measure() {
    let backend = Backend::new(None, None).unwrap();
    let mut circuit = Circuit::new();
    circuit.x(QubitId(0));
    circuit.measure(QubitId(0), ClbitId(0));
    let qir_str = backend.circuit_to_qir_str(&circuit, false).unwrap();
    assert_eq!(
        qir_str,
        r#"%Qubit = type opaque
%Result = type opaque

define void @main() #0 {
entry:
  call void @__quantum__qis__x__body(%Qubit* inttoptr (i64 0 to %Qubit*))
  call void @__quantum__qis__mz__body(%Qubit* inttoptr (i64 0 to %Qubit*), %Result* inttoptr (i64 0 to %Result*)) #1
  ret void
}

declare void @__quantum__qis__x__body(%Qubit*)
declare void @__quantum__qis__mz__body(%Qubit*, %Result* writeonly) #1

attributes #0 = { "entry_point" "required_num_qubits"="1" "required_num_results"="1" "output_labeling_schema" "qir_profiles"="base_profile" "irreversible" }
attributes #1 = { "irreversible" }

!llvm.module.flags = !{!0, !1, !2, !3}

!0 = !{i32 1, !"qir_major_version", i32 1}
!1 = !{i32 7, !"qir_minor_version", i32 0}
!2 = !{i32 1, !"dynamic_qubit_management", i1 false}
!3 = !{i32 1, !"dynamic_result_management", i1 false}"#
    );
}

const BELL_MODULE: &str = r#"%Qubit = type opaque
%Result = type opaque

define void @main() #0 {
entry:
  call void @__quantum__qis__h__body(%Qubit* inttoptr (i64 0 to %Qubit*))
  call void @__quantum__qis__cnot__body(%Qubit* inttoptr (i64 0 to %Qubit*), %Qubit* inttoptr (i64 1 to %Qubit*))
  call void @__quantum__qis__mz__body(%Qubit* inttoptr (i64 0 to %Qubit*), %Result* inttoptr (i64 0 to %Result*)) #1
  call void @__quantum__qis__mz__body(%Qubit* inttoptr (i64 1 to %Qubit*), %Result* inttoptr (i64 1 to %Result*)) #1
  ret void
}

declare void @__quantum__qis__h__body(%Qubit*)
declare void @__quantum__qis__cnot__body(%Qubit*, %Qubit*)
declare void @__quantum__qis__mz__body(%Qubit*, %Result* writeonly) #1

attributes #0 = { "entry_point" "required_num_qubits"="2" "required_num_results"="2" "output_labeling_schema" "qir_profiles"="base_profile" "irreversible" }
attributes #1 = { "irreversible" }

!llvm.module.flags = !{!0, !1, !2, !3}

!0 = !{i32 1, !"qir_major_version", i32 1}
!1 = !{i32 7, !"qir_minor_version", i32 0}
!2 = !{i32 1, !"dynamic_qubit_management", i1 false}
!3 = !{i32 1, !"dynamic_result_management", i1 false}"#;

#[test]
fn bell_circuit() {
    let backend = Backend::new(None, None).unwrap();
    let qir_str = backend
        .circuit_to_qir_str(&Circuit::bell(), false)
        .unwrap();
    assert_eq!(qir_str, BELL_MODULE);
}

#[test]
fn measure_all_appends_a_measurement_per_qubit() {
    let backend = Backend::new(None, None).unwrap();
    let mut circuit = Circuit::new();
    circuit.h(QubitId(0));
    circuit.cx(QubitId(0), QubitId(1));
    let qir_str = backend.circuit_to_qir_str(&circuit, true).unwrap();
    assert_eq!(qir_str, BELL_MODULE);
}

#[test]
fn swap_circuit() {
    let backend = Backend::new(None, None).unwrap();
    let mut circuit = Circuit::new();
    circuit.swap(QubitId(0), QubitId(1));
    circuit.swap(QubitId(2), QubitId(1));
    let qir_str = backend.circuit_to_qir_str(&circuit, false).unwrap();
    assert_eq!(
        qir_str,
        r#"%Qubit = type opaque

define void @main() #0 {
entry:
  call void @swap(%Qubit* inttoptr (i64 0 to %Qubit*), %Qubit* inttoptr (i64 1 to %Qubit*))
  call void @swap(%Qubit* inttoptr (i64 2 to %Qubit*), %Qubit* inttoptr (i64 1 to %Qubit*))
  ret void
}

declare void @__quantum__qis__cnot__body(%Qubit*, %Qubit*)

define void @swap(%Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit1, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  ret void
}

attributes #0 = { "entry_point" "required_num_qubits"="3" "required_num_results"="0" "output_labeling_schema" "qir_profiles"="base_profile" }

!llvm.module.flags = !{!0, !1, !2, !3}

!0 = !{i32 1, !"qir_major_version", i32 1}
!1 = !{i32 7, !"qir_minor_version", i32 0}
!2 = !{i32 1, !"dynamic_qubit_management", i1 false}
!3 = !{i32 1, !"dynamic_result_management", i1 false}"#
    );
}

#[test]
fn givens_circuit() {
    let backend = Backend::new(None, None).unwrap();
    let mut circuit = Circuit::new();
    circuit.givens(QubitId(0), QubitId(1), PI, 0.0);
    circuit.givens(QubitId(2), QubitId(1), PI, 0.0);
    let qir_str = backend.circuit_to_qir_str(&circuit, false).unwrap();
    assert_eq!(
        qir_str,
        r#"%Qubit = type opaque

define void @main() #0 {
entry:
  call void @givens(double -3.141592653589793, double 1.5707963267948966, %Qubit* inttoptr (i64 0 to %Qubit*), %Qubit* inttoptr (i64 1 to %Qubit*))
  call void @givens(double -3.141592653589793, double 1.5707963267948966, %Qubit* inttoptr (i64 2 to %Qubit*), %Qubit* inttoptr (i64 1 to %Qubit*))
  ret void
}

declare void @__quantum__qis__rz__body(double, %Qubit*)
declare void @__quantum__qis__rx__body(double, %Qubit*)
declare void @__quantum__qis__cnot__body(%Qubit*, %Qubit*)
declare void @__quantum__qis__ry__body(double, %Qubit*)

define void @givens(double %minus_theta, double %shifted_phi, %Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rz__body(double %shifted_phi, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double 1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double %minus_theta, %Qubit* %qubit0)
  call void @__quantum__qis__ry__body(double %minus_theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__rz__body(double -1.5707963267948966, %Qubit* %qubit1)
  ret void
}

attributes #0 = { "entry_point" "required_num_qubits"="3" "required_num_results"="0" "output_labeling_schema" "qir_profiles"="base_profile" }

!llvm.module.flags = !{!0, !1, !2, !3}

!0 = !{i32 1, !"qir_major_version", i32 1}
!1 = !{i32 7, !"qir_minor_version", i32 0}
!2 = !{i32 1, !"dynamic_qubit_management", i1 false}
!3 = !{i32 1, !"dynamic_result_management", i1 false}"#
    );
}

#[test]
fn conditional_circuit() {
    let backend = Backend::new(None, Some("0.1")).unwrap();

    let mut then_first = Circuit::new();
    then_first.x(QubitId(0));
    then_first.h(QubitId(0));
    then_first.cx(QubitId(0), QubitId(1));
    then_first.rx(QubitId(0), FRAC_PI_2);
    then_first.rx(QubitId(1), 0.5);

    let mut then_second = Circuit::new();
    then_second.cx(QubitId(1), QubitId(2));

    let mut circuit = Circuit::new();
    circuit.h(QubitId(0));
    circuit.measure(QubitId(0), ClbitId(0));
    circuit.conditional(ClbitId(0), then_first);
    circuit.y(QubitId(1));
    circuit.measure(QubitId(1), ClbitId(1));
    circuit.conditional(ClbitId(1), then_second);

    let qir_str = backend.circuit_to_qir_str(&circuit, false).unwrap();
    assert_eq!(
        qir_str,
        r#"%Qubit = type opaque
%Result = type opaque

define void @main() #0 {
entry:
  call void @__quantum__qis__h__body(%Qubit* inttoptr (i64 0 to %Qubit*))
  call void @__quantum__qis__mz__body(%Qubit* inttoptr (i64 0 to %Qubit*), %Result* inttoptr (i64 0 to %Result*)) #1
  %0 = call i1 @__quantum__qis__read_result__body(%Result* inttoptr (i64 0 to %Result*))
  br i1 %0, label %then0, label %continue0

then0:
  call void @__quantum__qis__x__body(%Qubit* inttoptr (i64 0 to %Qubit*))
  call void @__quantum__qis__h__body(%Qubit* inttoptr (i64 0 to %Qubit*))
  call void @__quantum__qis__cnot__body(%Qubit* inttoptr (i64 0 to %Qubit*), %Qubit* inttoptr (i64 1 to %Qubit*))
  call void @__quantum__qis__rx__body(double 1.5707963267948966, %Qubit* inttoptr (i64 0 to %Qubit*))
  call void @__quantum__qis__rx__body(double 0.5, %Qubit* inttoptr (i64 1 to %Qubit*))
  br label %continue0

continue0:
  call void @__quantum__qis__y__body(%Qubit* inttoptr (i64 1 to %Qubit*))
  call void @__quantum__qis__mz__body(%Qubit* inttoptr (i64 1 to %Qubit*), %Result* inttoptr (i64 1 to %Result*)) #1
  %1 = call i1 @__quantum__qis__read_result__body(%Result* inttoptr (i64 1 to %Result*))
  br i1 %1, label %then1, label %continue1

then1:
  call void @__quantum__qis__cnot__body(%Qubit* inttoptr (i64 1 to %Qubit*), %Qubit* inttoptr (i64 2 to %Qubit*))
  br label %continue1

continue1:
  ret void
}

declare void @__quantum__qis__h__body(%Qubit*)
declare void @__quantum__qis__mz__body(%Qubit*, %Result* writeonly) #1
declare i1 @__quantum__qis__read_result__body(%Result*)
declare void @__quantum__qis__x__body(%Qubit*)
declare void @__quantum__qis__cnot__body(%Qubit*, %Qubit*)
declare void @__quantum__qis__rx__body(double, %Qubit*)
declare void @__quantum__qis__y__body(%Qubit*)

attributes #0 = { "entry_point" "required_num_qubits"="3" "required_num_results"="2" "output_labeling_schema" "qir_profiles"="base_profile" "irreversible" }
attributes #1 = { "irreversible" }

!llvm.module.flags = !{!0, !1, !2, !3}

!0 = !{i32 1, !"qir_major_version", i32 1}
!1 = !{i32 7, !"qir_minor_version", i32 0}
!2 = !{i32 1, !"dynamic_qubit_management", i1 false}
!3 = !{i32 1, !"dynamic_result_management", i1 false}"#
    );
}

#[test]
fn loop_circuit() {
    let backend = Backend::new(None, Some("0.1")).unwrap();

    let mut body_first = Circuit::new();
    body_first.x(QubitId(0));
    body_first.h(QubitId(0));
    body_first.cx(QubitId(0), QubitId(1));
    body_first.rx(QubitId(0), FRAC_PI_2);
    body_first.rx(QubitId(1), 5.0);

    let mut body_second = Circuit::new();
    body_second.cx(QubitId(1), QubitId(2));

    let mut circuit = Circuit::new();
    circuit.h(QubitId(0));
    circuit.repeat(7, body_first);
    circuit.y(QubitId(1));
    circuit.repeat(3, body_second);

    let qir_str = backend.circuit_to_qir_str(&circuit, false).unwrap();
    assert_eq!(
        qir_str,
        r#"%Qubit = type opaque

define void @main() #0 {
entry:
  call void @__quantum__qis__h__body(%Qubit* inttoptr (i64 0 to %Qubit*))
  br label %header0

header0:
  %0 = phi i64 [ 1, %entry ], [ %2, %loop0 ]
  %1 = icmp slt i64 %0, 8
  br i1 %1, label %loop0, label %continue0

loop0:
  call void @__quantum__qis__x__body(%Qubit* inttoptr (i64 0 to %Qubit*))
  call void @__quantum__qis__h__body(%Qubit* inttoptr (i64 0 to %Qubit*))
  call void @__quantum__qis__cnot__body(%Qubit* inttoptr (i64 0 to %Qubit*), %Qubit* inttoptr (i64 1 to %Qubit*))
  call void @__quantum__qis__rx__body(double 1.5707963267948966, %Qubit* inttoptr (i64 0 to %Qubit*))
  call void @__quantum__qis__rx__body(double 5.0, %Qubit* inttoptr (i64 1 to %Qubit*))
  %2 = add i64 %0, 1
  br label %header0

continue0:
  call void @__quantum__qis__y__body(%Qubit* inttoptr (i64 1 to %Qubit*))
  br label %header1

header1:
  %3 = phi i64 [ 1, %continue0 ], [ %5, %loop1 ]
  %4 = icmp slt i64 %3, 4
  br i1 %4, label %loop1, label %continue1

loop1:
  call void @__quantum__qis__cnot__body(%Qubit* inttoptr (i64 1 to %Qubit*), %Qubit* inttoptr (i64 2 to %Qubit*))
  %5 = add i64 %3, 1
  br label %header1

continue1:
  ret void
}

declare void @__quantum__qis__h__body(%Qubit*)
declare void @__quantum__qis__x__body(%Qubit*)
declare void @__quantum__qis__cnot__body(%Qubit*, %Qubit*)
declare void @__quantum__qis__rx__body(double, %Qubit*)
declare void @__quantum__qis__y__body(%Qubit*)

attributes #0 = { "entry_point" "required_num_qubits"="3" "required_num_results"="0" "output_labeling_schema" "qir_profiles"="base_profile" }

!llvm.module.flags = !{!0, !1, !2, !3}

!0 = !{i32 1, !"qir_major_version", i32 1}
!1 = !{i32 7, !"qir_minor_version", i32 0}
!2 = !{i32 1, !"dynamic_qubit_management", i1 false}
!3 = !{i32 1, !"dynamic_result_management", i1 false}"#
    );
}

#[test]
fn gate_definition_circuit() {
    let backend = Backend::new(None, Some("0.1")).unwrap();

    let mut measure_body = Circuit::new();
    measure_body.rx(QubitId(0), FRAC_PI_4);
    measure_body.rz(QubitId(1), ParameterExpression::symbol("phi"));
    measure_body.measure(QubitId(1), ClbitId(1));

    let mut bell_body = Circuit::new();
    bell_body.x(QubitId(0));
    bell_body.h(QubitId(0));
    bell_body.cx(QubitId(0), QubitId(1));
    bell_body.rx(QubitId(0), ParameterExpression::symbol("theta"));
    bell_body.rx(QubitId(1), 2.54);

    let mut circuit = Circuit::new();
    circuit.y(QubitId(0));
    circuit.define_gate(GateDefinition::new(
        "rotate_measure",
        ["phi".to_owned()],
        [QubitId(1), QubitId(2)],
        measure_body,
    ));
    circuit.define_gate(GateDefinition::new(
        "rotate_bell",
        ["theta".to_owned()],
        [QubitId(0), QubitId(1)],
        bell_body,
    ));
    // A second definition under the same name is dropped.
    circuit.define_gate(GateDefinition::new(
        "rotate_bell",
        ["theta".to_owned()],
        [QubitId(0), QubitId(1)],
        Circuit::new(),
    ));
    circuit.z(QubitId(1));
    circuit.call_gate(
        "rotate_bell",
        [ParameterExpression::from(PI)],
        [QubitId(1), QubitId(2)],
    );
    circuit.call_gate(
        "rotate_measure",
        [ParameterExpression::from(0.1)],
        [QubitId(2), QubitId(0)],
    );
    circuit.measure(QubitId(0), ClbitId(0));

    let qir_str = backend.circuit_to_qir_str(&circuit, false).unwrap();
    assert_eq!(
        qir_str,
        r#"%Qubit = type opaque
%Result = type opaque

define void @main() #0 {
entry:
  call void @__quantum__qis__y__body(%Qubit* inttoptr (i64 0 to %Qubit*))
  call void @__quantum__qis__z__body(%Qubit* inttoptr (i64 1 to %Qubit*))
  call void @rotate_bell(double 3.141592653589793, %Qubit* inttoptr (i64 1 to %Qubit*), %Qubit* inttoptr (i64 2 to %Qubit*))
  call void @rotate_measure(double 0.1, %Qubit* inttoptr (i64 2 to %Qubit*), %Qubit* inttoptr (i64 0 to %Qubit*))
  call void @__quantum__qis__mz__body(%Qubit* inttoptr (i64 0 to %Qubit*), %Result* inttoptr (i64 0 to %Result*)) #1
  ret void
}

declare void @__quantum__qis__rx__body(double, %Qubit*)
declare void @__quantum__qis__rz__body(double, %Qubit*)
declare void @__quantum__qis__mz__body(%Qubit*, %Result* writeonly) #1

define void @rotate_measure(double %phi, %Qubit* %qubit1, %Qubit* %qubit2) #1 {
entry:
  call void @__quantum__qis__rx__body(double 0.7853981633974483, %Qubit* %qubit1)
  call void @__quantum__qis__rz__body(double %phi, %Qubit* %qubit2)
  call void @__quantum__qis__mz__body(%Qubit* %qubit2, %Result* inttoptr (i64 1 to %Result*)) #1
  ret void
}

declare void @__quantum__qis__x__body(%Qubit*)
declare void @__quantum__qis__h__body(%Qubit*)
declare void @__quantum__qis__cnot__body(%Qubit*, %Qubit*)

define void @rotate_bell(double %theta, %Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__x__body(%Qubit* %qubit0)
  call void @__quantum__qis__h__body(%Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double %theta, %Qubit* %qubit0)
  call void @__quantum__qis__rx__body(double 2.54, %Qubit* %qubit1)
  ret void
}

declare void @__quantum__qis__y__body(%Qubit*)
declare void @__quantum__qis__z__body(%Qubit*)

attributes #0 = { "entry_point" "required_num_qubits"="3" "required_num_results"="1" "output_labeling_schema" "qir_profiles"="base_profile" "irreversible" }
attributes #1 = { "irreversible" }

!llvm.module.flags = !{!0, !1, !2, !3}

!0 = !{i32 1, !"qir_major_version", i32 1}
!1 = !{i32 7, !"qir_minor_version", i32 0}
!2 = !{i32 1, !"dynamic_qubit_management", i1 false}
!3 = !{i32 1, !"dynamic_result_management", i1 false}"#
    );
}

#[test]
fn empty_circuit_is_a_valid_module() {
    let backend = Backend::new(None, None).unwrap();
    let qir_str = backend.circuit_to_qir_str(&Circuit::new(), false).unwrap();
    assert_eq!(
        qir_str,
        r#"%Qubit = type opaque

define void @main() #0 {
entry:
  ret void
}

attributes #0 = { "entry_point" "required_num_qubits"="0" "required_num_results"="0" "output_labeling_schema" "qir_profiles"="base_profile" }

!llvm.module.flags = !{!0, !1, !2, !3}

!0 = !{i32 1, !"qir_major_version", i32 1}
!1 = !{i32 7, !"qir_minor_version", i32 0}
!2 = !{i32 1, !"dynamic_qubit_management", i1 false}
!3 = !{i32 1, !"dynamic_result_management", i1 false}"#
    );
}

#[test]
fn emission_is_deterministic() {
    let backend = Backend::new(None, None).unwrap();
    let circuit = Circuit::ghz(4);
    let first = backend.circuit_to_qir_str(&circuit, false).unwrap();
    let second = backend.circuit_to_qir_str(&circuit, false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn explicit_target_and_version_match_the_defaults() {
    let explicit = Backend::new(Some("base_profile"), Some("0.1")).unwrap();
    let default = Backend::new(None, None).unwrap();
    assert_eq!(explicit, default);
    assert_eq!(Backend::new(Some("base_profile"), None).unwrap(), default);
    let circuit = Circuit::bell();
    assert_eq!(
        explicit.circuit_to_qir_str(&circuit, false).unwrap(),
        default.circuit_to_qir_str(&circuit, false).unwrap()
    );
}

#[test]
fn unknown_target_is_rejected() {
    assert!(matches!(
        Backend::new(Some("full_profile"), None),
        Err(QirError::UnsupportedProfile(_))
    ));
}

#[test]
fn unknown_version_is_rejected() {
    assert!(matches!(
        Backend::new(None, Some("0.2")),
        Err(QirError::UnsupportedVersion(_))
    ));
}

#[test]
fn single_hadamard_emits_a_nonempty_module() {
    let mut circuit = Circuit::new();
    circuit += Instruction::single_qubit_gate(StandardGate::H, QubitId(0));
    let backend = Backend::new(None, Some("0.1")).unwrap();
    let qir_str = backend.circuit_to_qir_str(&circuit, false).unwrap();
    assert!(!qir_str.is_empty());
    assert!(qir_str.contains("define void @main() #0 {"));
    assert!(qir_str.contains("call void @__quantum__qis__h__body"));
}

#[test]
fn write_to_file_appends_the_extension() {
    let backend = Backend::new(None, None).unwrap();
    let circuit = Circuit::bell();
    let dir = tempfile::tempdir().unwrap();

    backend
        .circuit_to_qir_file(&circuit, dir.path(), "out", false, false)
        .unwrap();
    let written = std::fs::read_to_string(dir.path().join("out.ll")).unwrap();
    assert_eq!(written, BELL_MODULE);

    // An explicit extension is kept as-is.
    backend
        .circuit_to_qir_file(&circuit, dir.path(), "explicit.ll", false, false)
        .unwrap();
    assert!(dir.path().join("explicit.ll").exists());
    assert!(!dir.path().join("explicit.ll.ll").exists());
}

#[test]
fn write_to_file_refuses_to_clobber() {
    let backend = Backend::new(None, None).unwrap();
    let circuit = Circuit::bell();
    let dir = tempfile::tempdir().unwrap();

    backend
        .circuit_to_qir_file(&circuit, dir.path(), "out", false, false)
        .unwrap();
    assert!(matches!(
        backend.circuit_to_qir_file(&circuit, dir.path(), "out", false, false),
        Err(QirError::FileExists(_))
    ));

    backend
        .circuit_to_qir_file(&circuit, dir.path(), "out", true, false)
        .unwrap();
    let written = std::fs::read_to_string(dir.path().join("out.ll")).unwrap();
    assert_eq!(written, BELL_MODULE);
}
