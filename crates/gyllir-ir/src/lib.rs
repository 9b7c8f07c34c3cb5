//! Gyllir Circuit Representation
//!
//! This crate provides the data structures for representing quantum circuits
//! in Gyllir. It is the input language of the QIR emission backend.
//!
//! # Overview
//!
//! A [`Circuit`] is a flat, append-ordered instruction sequence. There is no
//! graph structure and no reordering: the order instructions were appended is
//! the order an emitter walks, which keeps emitted output deterministic.
//! Qubits and result slots are implicit flat indices.
//!
//! # Core Components
//!
//! - **Qubits and Results**: [`QubitId`], [`ClbitId`] flat addresses
//! - **Gates**: [`StandardGate`], the closed vocabulary the backend can lower
//! - **Parameters**: [`ParameterExpression`] for symbolic gate angles
//! - **Instructions**: [`Instruction`] combining gates with operands, plus
//!   measurement, reset, conditionals, counted repetition, and named gate
//!   definitions ([`GateDefinition`]) with calls
//! - **Circuit**: [`Circuit`] high-level builder API
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use gyllir_ir::{Circuit, ClbitId, QubitId};
//!
//! let mut circuit = Circuit::new();
//!
//! // Build the Bell state: |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).cx(QubitId(0), QubitId(1));
//!
//! // Read both qubits out
//! circuit.measure(QubitId(0), ClbitId(0));
//! circuit.measure(QubitId(1), ClbitId(1));
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_clbits(), 2);
//! ```
//!
//! # Example: Parameterized Circuit
//!
//! ```rust
//! use gyllir_ir::{Circuit, ParameterExpression, QubitId};
//! use std::f64::consts::PI;
//!
//! let theta = ParameterExpression::symbol("theta");
//!
//! let mut circuit = Circuit::new();
//! circuit.rx(QubitId(0), theta.clone() / 2.0);
//!
//! // Later, bind the symbol to a concrete value
//! let bound = theta.bind("theta", PI / 4.0);
//! assert!(!bound.is_symbolic());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `I` | 1 | Identity |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `H` | 1 | Hadamard gate |
//! | `S`, `Sdg`, `T`, `Tdg` | 1 | Phase-family gates and adjoints |
//! | `SX`, `SXdg` | 1 | Square root of X and adjoint |
//! | `Rx`, `Ry`, `Rz`, `P` | 1 | Rotations and phase shift |
//! | `PRX` | 1 | Phased X-rotation |
//! | `CX`, `CY`, `CZ`, `CP` | 2 | Controlled gates |
//! | `Swap`, `ISwap`, `SISwap`, `SISwapDg`, `FSwap` | 2 | Swap family |
//! | `XY`, `RXX`, `RZZ`, `PMExchange` | 2 | Interaction gates |
//! | `Givens`, `GivensLE` | 2 | Givens rotations |
//! | `PhasedCZ`, `PhasedCP` | 2 | Phase-shifted controlled gates |
//! | `CCX`, `CCZ`, `CCP` | 3 | Doubly controlled gates |

pub mod circuit;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod qubit;

pub use circuit::Circuit;
pub use gate::StandardGate;
pub use instruction::{GateDefinition, Instruction, InstructionKind};
pub use parameter::ParameterExpression;
pub use qubit::{ClbitId, QubitId};
