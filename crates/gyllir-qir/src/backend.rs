//! QIR backend for circuits.
//!
//! [`Backend`] pairs a target profile with a version of the emitted
//! dialect and lowers circuits to LLVM textual assembly, either as a
//! string or written to a `.ll` file.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use gyllir_ir::Circuit;

use crate::emitter::QirEmitter;
use crate::error::{QirError, QirResult};

/// QIR profile the emitted module targets.
///
/// Only the base profile is supported: no dynamic qubit or result
/// management, and classical control limited to branching on measured
/// results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    #[default]
    Base,
}

impl Profile {
    /// The identifier used in the `qir_profiles` module attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Base => "base_profile",
        }
    }
}

impl FromStr for Profile {
    type Err = QirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base_profile" => Ok(Profile::Base),
            other => Err(QirError::UnsupportedProfile(other.to_owned())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Version of the emitted QIR dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QirVersion {
    #[default]
    V0_1,
}

impl QirVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            QirVersion::V0_1 => "0.1",
        }
    }

    /// Major and minor numbers written to the `qir_major_version` and
    /// `qir_minor_version` module flags.
    pub(crate) fn module_flags(&self) -> (u32, u32) {
        match self {
            QirVersion::V0_1 => (1, 0),
        }
    }
}

impl FromStr for QirVersion {
    type Err = QirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0.1" => Ok(QirVersion::V0_1),
            other => Err(QirError::UnsupportedVersion(other.to_owned())),
        }
    }
}

impl fmt::Display for QirVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts circuits to QIR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    profile: Profile,
    version: QirVersion,
}

impl Backend {
    /// Creates a backend for the given profile and version. `None`
    /// selects the defaults, `"base_profile"` and `"0.1"`. Unknown
    /// names are rejected.
    pub fn new(profile: Option<&str>, version: Option<&str>) -> QirResult<Self> {
        let profile = match profile {
            Some(text) => text.parse()?,
            None => Profile::default(),
        };
        let version = match version {
            Some(text) => text.parse()?,
            None => QirVersion::default(),
        };
        Ok(Self { profile, version })
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn version(&self) -> QirVersion {
        self.version
    }

    /// Lowers a circuit to the text of a QIR module.
    ///
    /// With `measure_all` set, a measurement of every qubit into the
    /// result slot of the same index is appended after the last
    /// instruction.
    pub fn circuit_to_qir_str(&self, circuit: &Circuit, measure_all: bool) -> QirResult<String> {
        let mut emitter = QirEmitter::new();
        let module = emitter.emit_module(
            circuit,
            self.profile.as_str(),
            self.version.module_flags(),
            measure_all,
        )?;
        debug!(
            instructions = circuit.len(),
            bytes = module.len(),
            "lowered circuit to QIR"
        );
        Ok(module)
    }

    /// Writes the QIR module for a circuit to `folder/filename`,
    /// appending the `.ll` extension when missing. Refuses to clobber
    /// an existing file unless `overwrite` is set.
    #[instrument(skip(self, circuit))]
    pub fn circuit_to_qir_file(
        &self,
        circuit: &Circuit,
        folder: &Path,
        filename: &str,
        overwrite: bool,
        measure_all: bool,
    ) -> QirResult<()> {
        let module = self.circuit_to_qir_str(circuit, measure_all)?;
        let filename = if filename.ends_with(".ll") {
            filename.to_owned()
        } else {
            format!("{filename}.ll")
        };
        let path = folder.join(filename);
        if path.exists() && !overwrite {
            return Err(QirError::FileExists(path.display().to_string()));
        }
        fs::write(&path, module)?;
        debug!(path = %path.display(), "wrote QIR module");
        Ok(())
    }
}

/// Lowers a circuit with the default backend settings.
pub fn emit(circuit: &Circuit) -> QirResult<String> {
    Backend::default().circuit_to_qir_str(circuit, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyllir_ir::QubitId;

    #[test]
    fn defaults_are_base_profile_v0_1() {
        let backend = Backend::new(None, None).unwrap();
        assert_eq!(backend.profile(), Profile::Base);
        assert_eq!(backend.version(), QirVersion::V0_1);
        assert_eq!(backend, Backend::default());
    }

    #[test]
    fn explicit_names_are_accepted() {
        let backend = Backend::new(Some("base_profile"), Some("0.1")).unwrap();
        assert_eq!(backend, Backend::default());
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let err = Backend::new(Some("full_profile"), None).unwrap_err();
        assert!(matches!(err, QirError::UnsupportedProfile(name) if name == "full_profile"));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let err = Backend::new(None, Some("0.2")).unwrap_err();
        assert!(matches!(err, QirError::UnsupportedVersion(name) if name == "0.2"));
    }

    #[test]
    fn display_matches_the_accepted_names() {
        assert_eq!(Profile::Base.to_string(), "base_profile");
        assert_eq!(QirVersion::V0_1.to_string(), "0.1");
        assert_eq!("base_profile".parse::<Profile>().unwrap(), Profile::Base);
        assert_eq!("0.1".parse::<QirVersion>().unwrap(), QirVersion::V0_1);
    }

    #[test]
    fn debug_clone_partialeq() {
        let backend = Backend::new(None, None).unwrap();
        assert_eq!(
            format!("{backend:?}"),
            "Backend { profile: Base, version: V0_1 }"
        );
        assert_eq!(backend.clone(), backend);
        assert_eq!(backend, Backend::new(None, None).unwrap());
    }

    #[test]
    fn single_hadamard_produces_a_module() {
        let mut circuit = Circuit::new();
        circuit.h(QubitId(0));
        let backend = Backend::new(None, Some("0.1")).unwrap();
        let qir = backend.circuit_to_qir_str(&circuit, false).unwrap();
        assert!(!qir.is_empty());
        assert!(qir.contains("call void @__quantum__qis__h__body"));
    }
}
