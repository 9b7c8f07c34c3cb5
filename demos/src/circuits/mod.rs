//! Circuit generators for the demo suite.

pub mod parity;
pub mod teleport;

pub use parity::parity_check_circuit;
pub use teleport::teleport_circuit;
