//! Error types for QIR emission.

use thiserror::Error;

/// Errors that can occur constructing a backend or emitting a module.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QirError {
    /// Profile string not in the supported set.
    #[error("Unsupported QIR profile: {0}")]
    UnsupportedProfile(String),

    /// Version string not in the supported set.
    #[error("Unsupported QIR version: {0}")]
    UnsupportedVersion(String),

    /// Instruction has no lowering to the target profile.
    #[error("No QIR lowering for instruction: {0}")]
    UnsupportedInstruction(String),

    /// A gate angle did not fold to a value and no definition scope
    /// supplies it.
    #[error("Gate '{gate}' needs a concrete value for parameter '{parameter}'")]
    UnboundParameter { gate: String, parameter: String },

    /// A definition body references a qubit outside the definition's
    /// operand list.
    #[error("Definition '{gate}' references qubit {qubit} outside its operand list")]
    UndeclaredQubit { gate: String, qubit: u32 },

    /// Wrong number of qubit operands.
    #[error("Gate '{gate}' expects {expected} qubits, got {got}")]
    WrongQubitCount {
        gate: String,
        expected: usize,
        got: usize,
    },

    /// Measurement without a result slot operand.
    #[error("Measurement of qubit {qubit} has no result slot")]
    MissingResultSlot { qubit: u32 },

    /// Export target already exists and overwrite was not requested.
    #[error("Output file already exists: {0}")]
    FileExists(String),

    /// I/O failure during export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for emission operations.
pub type QirResult<T> = Result<T, QirError>;
