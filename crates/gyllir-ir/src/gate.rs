//! The closed gate vocabulary.
//!
//! Every gate the emitter knows how to lower. Angles are
//! [`ParameterExpression`]s so circuits can stay symbolic until a concrete
//! value (or a definition scope that supplies one) is available.

use serde::{Deserialize, Serialize};

use crate::parameter::ParameterExpression;

/// A gate from the supported vocabulary, operands supplied separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity (emits nothing).
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// Hadamard.
    H,
    /// Phase gate S.
    S,
    /// Adjoint of S.
    Sdg,
    /// T gate.
    T,
    /// Adjoint of T.
    Tdg,
    /// Square root of X.
    SX,
    /// Adjoint square root of X.
    SXdg,
    /// X-rotation.
    Rx(ParameterExpression),
    /// Y-rotation.
    Ry(ParameterExpression),
    /// Z-rotation.
    Rz(ParameterExpression),
    /// Phase shift on |1⟩.
    P(ParameterExpression),
    /// Phased X-rotation: x-rotation by θ in a frame rotated by φ about z.
    PRX(ParameterExpression, ParameterExpression),
    /// Controlled-X.
    CX,
    /// Controlled-Y.
    CY,
    /// Controlled-Z.
    CZ,
    /// Controlled phase shift.
    CP(ParameterExpression),
    /// Swap.
    Swap,
    /// iSWAP.
    ISwap,
    /// Square root of iSWAP.
    SISwap,
    /// Adjoint square root of iSWAP.
    SISwapDg,
    /// Fermionic swap.
    FSwap,
    /// XY interaction by θ.
    XY(ParameterExpression),
    /// XX interaction by θ (Mølmer-Sørensen family).
    RXX(ParameterExpression),
    /// ZZ interaction by θ.
    RZZ(ParameterExpression),
    /// Plus-minus exchange interaction by θ.
    PMExchange(ParameterExpression),
    /// Givens rotation by θ with phase φ.
    Givens(ParameterExpression, ParameterExpression),
    /// Givens rotation, little-endian qubit convention.
    GivensLE(ParameterExpression, ParameterExpression),
    /// Controlled-Z with single-qubit phase shifts by φ.
    PhasedCZ(ParameterExpression),
    /// Controlled phase shift by θ with single-qubit phase shifts by φ.
    PhasedCP(ParameterExpression, ParameterExpression),
    /// Toffoli.
    CCX,
    /// Doubly controlled Z.
    CCZ,
    /// Doubly controlled phase shift.
    CCP(ParameterExpression),
}

impl StandardGate {
    /// The canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "i",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::SX => "sx",
            StandardGate::SXdg => "sxdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::P(_) => "p",
            StandardGate::PRX(_, _) => "prx",
            StandardGate::CX => "cx",
            StandardGate::CY => "cy",
            StandardGate::CZ => "cz",
            StandardGate::CP(_) => "cp",
            StandardGate::Swap => "swap",
            StandardGate::ISwap => "iswap",
            StandardGate::SISwap => "siswap",
            StandardGate::SISwapDg => "siswapdg",
            StandardGate::FSwap => "fswap",
            StandardGate::XY(_) => "xy",
            StandardGate::RXX(_) => "rxx",
            StandardGate::RZZ(_) => "rzz",
            StandardGate::PMExchange(_) => "pmx",
            StandardGate::Givens(_, _) => "givens",
            StandardGate::GivensLE(_, _) => "givens_le",
            StandardGate::PhasedCZ(_) => "phased_cz",
            StandardGate::PhasedCP(_, _) => "phased_cp",
            StandardGate::CCX => "ccx",
            StandardGate::CCZ => "ccz",
            StandardGate::CCP(_) => "ccp",
        }
    }

    /// Number of qubit operands.
    pub fn num_qubits(&self) -> usize {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::SX
            | StandardGate::SXdg
            | StandardGate::Rx(_)
            | StandardGate::Ry(_)
            | StandardGate::Rz(_)
            | StandardGate::P(_)
            | StandardGate::PRX(_, _) => 1,
            StandardGate::CX
            | StandardGate::CY
            | StandardGate::CZ
            | StandardGate::CP(_)
            | StandardGate::Swap
            | StandardGate::ISwap
            | StandardGate::SISwap
            | StandardGate::SISwapDg
            | StandardGate::FSwap
            | StandardGate::XY(_)
            | StandardGate::RXX(_)
            | StandardGate::RZZ(_)
            | StandardGate::PMExchange(_)
            | StandardGate::Givens(_, _)
            | StandardGate::GivensLE(_, _)
            | StandardGate::PhasedCZ(_)
            | StandardGate::PhasedCP(_, _) => 2,
            StandardGate::CCX | StandardGate::CCZ | StandardGate::CCP(_) => 3,
        }
    }

    /// The angle expressions carried by this gate, in declaration order.
    pub fn parameters(&self) -> Vec<&ParameterExpression> {
        match self {
            StandardGate::Rx(theta)
            | StandardGate::Ry(theta)
            | StandardGate::Rz(theta)
            | StandardGate::P(theta)
            | StandardGate::CP(theta)
            | StandardGate::XY(theta)
            | StandardGate::RXX(theta)
            | StandardGate::RZZ(theta)
            | StandardGate::PMExchange(theta)
            | StandardGate::PhasedCZ(theta)
            | StandardGate::CCP(theta) => vec![theta],
            StandardGate::PRX(theta, phi)
            | StandardGate::Givens(theta, phi)
            | StandardGate::GivensLE(theta, phi)
            | StandardGate::PhasedCP(theta, phi) => vec![theta, phi],
            _ => Vec::new(),
        }
    }

    /// Whether the gate carries any angle expression.
    pub fn is_parameterized(&self) -> bool {
        !self.parameters().is_empty()
    }

    /// Whether any carried angle is still symbolic.
    pub fn is_symbolic(&self) -> bool {
        self.parameters().iter().any(|p| p.is_symbolic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(StandardGate::H.name(), "h");
        assert_eq!(StandardGate::SISwapDg.name(), "siswapdg");
        assert_eq!(StandardGate::CCP(1.0.into()).name(), "ccp");
    }

    #[test]
    fn test_arity() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::PRX(0.1.into(), 0.2.into()).num_qubits(), 1);
        assert_eq!(StandardGate::FSwap.num_qubits(), 2);
        assert_eq!(StandardGate::CCZ.num_qubits(), 3);
    }

    #[test]
    fn test_parameters() {
        assert!(StandardGate::Swap.parameters().is_empty());
        assert_eq!(StandardGate::Rx(1.0.into()).parameters().len(), 1);
        assert_eq!(
            StandardGate::Givens(0.5.into(), 0.25.into()).parameters().len(),
            2
        );
        assert!(!StandardGate::X.is_parameterized());
        assert!(StandardGate::Rz(ParameterExpression::symbol("a")).is_symbolic());
    }
}
