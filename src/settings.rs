//! # Settings Module
//!
//! ## Purpose
//! Run configuration of the right-hand-side kernel: which reactor closure is used and the
//! initial state (temperature, pressure, mole fractions) replicated over all instances.
//!
//! ## File format
//! Plain JSON, every field optional; missing fields take the built-in defaults.
//! ```json
//! {
//!     "closure": "constant_volume",
//!     "temperature": 1000.0,
//!     "pressure": 101325.0,
//!     "mole_fractions": { "H2": 0.3, "O2": 0.15, "N2": 0.55 },
//!     "instances": 4
//! }
//! ```
//!
//! ## Usage Pattern
//! ```rust
//! use CombustRHS::settings::{ClosureKind, RhsSettings};
//!
//! let settings = RhsSettings::default();
//! assert_eq!(settings.closure, ClosureKind::ConstantPressure);
//! let X = settings.mole_fraction_vector().unwrap();
//! assert_eq!(X[8], 0.0); // no argon in the default mixture
//! ```
use crate::Mechanism::species::{CompositionError, NSP, SPECIES_NAMES, species_index};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// default initial temperature, K
pub const DEFAULT_T0: f64 = 881.9061350328426;
/// default pressure, Pa
pub const DEFAULT_P: f64 = 10266755625.021679;
/// default mole fractions in species order (not normalized)
pub const DEFAULT_X: [f64; NSP] = [
    1.1636247155941894e-05,
    0.022754941415572758,
    1.9895064116812003e-05,
    2.0993869462435053e-05,
    0.05131099405277086,
    0.18045534227727603,
    0.0002361082973661372,
    7.296032306490985e-05,
    0.0,
    0.0,
    0.0,
    0.0,
    0.7451171284532138,
];

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("sum of initial mole fractions is zero, set the initial composition first")]
    ZeroMoleFractionSum,
    #[error("number of reactor instances must be positive")]
    ZeroInstances,
    #[error(transparent)]
    Composition(#[from] CompositionError),
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// meaning of the auxiliary scalar passed along with the state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureKind {
    /// aux is the pressure
    #[default]
    ConstantPressure,
    /// aux is the density
    ConstantVolume,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RhsSettings {
    pub closure: ClosureKind,
    /// initial temperature, K
    pub temperature: f64,
    /// initial pressure, Pa
    pub pressure: f64,
    /// species name -> mole fraction; absent species are zero
    pub mole_fractions: HashMap<String, f64>,
    /// number of identical reactor instances
    pub instances: usize,
}

impl Default for RhsSettings {
    fn default() -> Self {
        let mole_fractions = SPECIES_NAMES
            .iter()
            .zip(DEFAULT_X.iter())
            .filter(|(_, x)| **x != 0.0)
            .map(|(name, x)| (name.to_string(), *x))
            .collect();
        Self {
            closure: ClosureKind::default(),
            temperature: DEFAULT_T0,
            pressure: DEFAULT_P,
            mole_fractions,
            instances: 1,
        }
    }
}

impl RhsSettings {
    /// reads settings from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SetupError> {
        let content = fs::read_to_string(path.as_ref())?;
        let settings: RhsSettings = serde_json::from_str(&content)?;
        info!("settings loaded from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SetupError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// mole fractions arranged in species order
    pub fn mole_fraction_vector(&self) -> Result<[f64; NSP], SetupError> {
        let mut X = [0.0; NSP];
        for (name, x) in self.mole_fractions.iter() {
            X[species_index(name)?] = *x;
        }
        Ok(X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_composition() {
        let settings = RhsSettings::default();
        assert_eq!(settings.mole_fraction_vector().unwrap(), DEFAULT_X);
        assert_eq!(settings.instances, 1);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"closure": "constant_volume", "temperature": 1200.0}"#)
            .unwrap();
        let settings = RhsSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.closure, ClosureKind::ConstantVolume);
        assert_eq!(settings.temperature, 1200.0);
        assert_eq!(settings.pressure, DEFAULT_P);
        assert_eq!(settings.mole_fraction_vector().unwrap(), DEFAULT_X);
    }

    #[test]
    fn test_save_and_load() {
        let file = NamedTempFile::new().unwrap();
        let mut settings = RhsSettings::default();
        settings.instances = 8;
        settings.temperature = 1500.0;
        settings.pressure = 2.5e6;
        settings.mole_fractions = HashMap::from([("H2".to_string(), 2.0), ("O2".to_string(), 1.0)]);
        settings.save_to_file(file.path()).unwrap();
        let loaded = RhsSettings::from_file(file.path()).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_unknown_species_is_rejected() {
        let mut settings = RhsSettings::default();
        settings.mole_fractions.insert("CH4".to_string(), 0.1);
        assert!(matches!(
            settings.mole_fraction_vector(),
            Err(SetupError::Composition(CompositionError::UnknownSpecies(_)))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(RhsSettings::from_file(file.path()), Err(SetupError::Json(_))));
        assert!(matches!(
            RhsSettings::from_file("/definitely/not/here.json"),
            Err(SetupError::Io(_))
        ));
    }
}
