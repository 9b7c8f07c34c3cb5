//! QIR Emitter for Gyllir
//!
//! This crate lowers [`gyllir_ir::Circuit`]s to QIR (Quantum
//! Intermediate Representation) modules in LLVM textual assembly,
//! targeting the base profile.
//!
//! # Lowering
//!
//! | Instruction | Lowering |
//! |-------------|----------|
//! | `x`, `y`, `z`, `h`, `s`, `sdg`, `t`, `tdg`, `rx`, `ry`, `rz`, `cx`, `cz`, `rzz`, `ccx` | direct `__quantum__qis__*` call |
//! | `sx`, `sxdg`, `p` | rewritten to `rx`/`rz` calls |
//! | `swap`, `iswap`, `cy`, `cp`, `xy`, `rxx`, `givens`, `ccz`, `ccp`, ... | call to a helper `define` emitted into the module |
//! | measure | `__quantum__qis__mz__body` into a static result slot |
//! | conditional | `read_result` + `br` over labelled blocks |
//! | repeat | counted loop over `phi`/`icmp`/`br` blocks |
//! | gate definition / call | `define` hoisted above, called like a gate |
//!
//! # Example: Lowering a circuit
//!
//! ```rust
//! use gyllir_ir::{Circuit, QubitId};
//! use gyllir_qir::Backend;
//!
//! let mut circuit = Circuit::new();
//! circuit.h(QubitId(0));
//!
//! let backend = Backend::new(None, Some("0.1")).unwrap();
//! let qir = backend.circuit_to_qir_str(&circuit, false).unwrap();
//! assert!(!qir.is_empty());
//! assert!(qir.contains("define void @main() #0 {"));
//! ```
//!
//! # Example: Inspecting a single instruction
//!
//! ```rust
//! use gyllir_ir::{Instruction, QubitId, StandardGate};
//! use gyllir_qir::{call_instruction, gate_declaration};
//!
//! let x = Instruction::single_qubit_gate(StandardGate::X, QubitId(0));
//! assert_eq!(
//!     call_instruction(&x).unwrap(),
//!     "  call void @__quantum__qis__x__body(%Qubit* inttoptr (i64 0 to %Qubit*))"
//! );
//! assert_eq!(
//!     gate_declaration(&x).unwrap(),
//!     "declare void @__quantum__qis__x__body(%Qubit*)"
//! );
//! ```
//!
//! The emitted modules follow the base profile's conventions: qubits
//! and results are compile-time constants encoded as `inttoptr` casts,
//! `@main` carries the `entry_point` attribute with the required qubit
//! and result counts, and measurements are tagged `irreversible`.

mod backend;
mod declarations;
mod emitter;
mod error;

pub use backend::{emit, Backend, Profile, QirVersion};
pub use emitter::{call_instruction, gate_declaration};
pub use error::{QirError, QirResult};
