//! # Species Module
//!
//! ## Purpose
//! Species table of the H2/CO mechanism and the conversions between mole and mass fractions.
//! The order of species is part of the state vector contract: the state of one cell is
//! `[T, Y_0, ..., Y_11]` and the mass fraction of the last species (N2) is never stored,
//! it is recovered from `1 - sum(Y)`.
//!
//! ## Units
//! Molecular weights are in kg/kmol, the gas constant in J/(kmol·K), so concentrations
//! come out in kmol/m^3.
use thiserror::Error;

/// number of species
pub const NSP: usize = 13;
/// number of explicitly tracked species
pub const NSP_EXPLICIT: usize = NSP - 1;
/// Universal gas constant in J/(kmol·K)
pub const R_U: f64 = 8.31446210e+03;
/// standard pressure used by equilibrium constants, Pa
pub const P_ATM: f64 = 1.01325e+05;

/// species names in state vector order, the implied species is the last one
pub const SPECIES_NAMES: [&str; NSP] = [
    "H", "H2", "O", "OH", "H2O", "O2", "HO2", "H2O2", "AR", "HE", "CO", "CO2", "N2",
];

/// molecular weights, kg/kmol
pub const MW: [f64; NSP] = [
    1.0079400000000001e+00,
    2.0158800000000001e+00,
    1.5999400000000000e+01,
    1.7007339999999999e+01,
    1.8015280000000001e+01,
    3.1998799999999999e+01,
    3.3006740000000001e+01,
    3.4014679999999998e+01,
    3.9948000000000000e+01,
    4.0026000000000002e+00,
    2.8010399999999997e+01,
    4.4009799999999998e+01,
    2.8013480000000001e+01,
];

#[derive(Debug, Error, PartialEq)]
pub enum CompositionError {
    #[error("sum of mole fractions is zero, initial composition was never set")]
    ZeroMoleSum,
    #[error("unknown species: {0}")]
    UnknownSpecies(String),
}

/// index of a species in the state vector order
pub fn species_index(name: &str) -> Result<usize, CompositionError> {
    SPECIES_NAMES
        .iter()
        .position(|s| s.eq_ignore_ascii_case(name))
        .ok_or_else(|| CompositionError::UnknownSpecies(name.to_string()))
}

/// inverse molecular weight, the factor concentrations and mean molar mass are built from
#[inline]
pub fn inv_mw(k: usize) -> f64 {
    1.0 / MW[k]
}

/// converts mole fractions (not necessarily normalized) into mass fractions of the
/// explicitly tracked species: Y_i = X_i*MW_i / sum_j(X_j*MW_j)
pub fn mole2mass(X: &[f64; NSP]) -> Result<[f64; NSP_EXPLICIT], CompositionError> {
    if X.iter().sum::<f64>() == 0.0 {
        return Err(CompositionError::ZeroMoleSum);
    }
    // average molecular weight
    let mut mw_avg = 0.0;
    for k in 0..NSP {
        mw_avg += X[k] * MW[k];
    }
    let mut Y = [0.0; NSP_EXPLICIT];
    for k in 0..NSP_EXPLICIT {
        Y[k] = X[k] * MW[k] / mw_avg;
    }
    Ok(Y)
}

/// converts mass fractions of the explicitly tracked species into mole fractions of all species
pub fn mass2mole(Y: &[f64; NSP_EXPLICIT]) -> [f64; NSP] {
    let mut y_sum = Y[0];
    for y in Y[1..].iter() {
        y_sum += *y;
    }
    let y_N = 1.0 - y_sum;
    let mut mw_avg = 0.0;
    for k in 0..NSP_EXPLICIT {
        mw_avg += Y[k] * inv_mw(k);
    }
    mw_avg += y_N * inv_mw(NSP - 1);
    let mw_avg = 1.0 / mw_avg;

    let mut X = [0.0; NSP];
    for k in 0..NSP_EXPLICIT {
        X[k] = Y[k] * mw_avg * inv_mw(k);
    }
    X[NSP - 1] = y_N * mw_avg * inv_mw(NSP - 1);
    X
}

/// mass density from temperature, pressure and mole fractions (ideal gas)
pub fn get_density(T: f64, P: f64, X: &[f64; NSP]) -> f64 {
    let mut mw = 0.0;
    for k in 0..NSP {
        mw += X[k] * MW[k];
    }
    P * mw / (R_U * T)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inverse_mw_literals() {
        // the mean molar mass sums of the kernel rely on these factors
        assert_relative_eq!(inv_mw(0), 9.9212254697700253e-01, max_relative = 1e-15);
        assert_relative_eq!(inv_mw(9), 2.4983760555638834e-01, max_relative = 1e-15);
        assert_relative_eq!(inv_mw(12), 3.5697100110375433e-02, max_relative = 1e-15);
    }

    #[test]
    fn test_species_index() {
        assert_eq!(species_index("N2").unwrap(), 12);
        assert_eq!(species_index("h2o").unwrap(), 4);
        assert_eq!(
            species_index("CH4"),
            Err(CompositionError::UnknownSpecies("CH4".to_string()))
        );
    }

    #[test]
    fn test_mole2mass_pure_species() {
        let mut X = [0.0; NSP];
        X[4] = 2.0; // not normalized on purpose
        let Y = mole2mass(&X).unwrap();
        assert_relative_eq!(Y[4], 1.0, epsilon = 1e-15);
        assert_eq!(Y.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_mole2mass_zero_sum() {
        let X = [0.0; NSP];
        assert_eq!(mole2mass(&X), Err(CompositionError::ZeroMoleSum));
    }

    #[test]
    fn test_mass2mole_recovers_mole_fractions() {
        let mut X = [0.0; NSP];
        X[1] = 0.25;
        X[5] = 0.15;
        X[10] = 0.1;
        X[12] = 0.5;
        let Y = mole2mass(&X).unwrap();
        let X_back = mass2mole(&Y);
        for k in 0..NSP {
            assert_relative_eq!(X_back[k], X[k], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mass2mole_implied_fraction_summation_order() {
        let Y: [f64; NSP_EXPLICIT] = [
            0.1, 0.2, 0.3, 1e-17, 0.05, 0.07, 3e-9, 0.01, 0.0, 0.0, 1e-3, 0.11,
        ];
        let y_N = 1.0
            - (Y[0] + Y[1] + Y[2] + Y[3] + Y[4] + Y[5] + Y[6] + Y[7] + Y[8] + Y[9] + Y[10]
                + Y[11]);
        let X = mass2mole(&Y);
        let mut mw = 0.0;
        for k in 0..NSP_EXPLICIT {
            mw += Y[k] * inv_mw(k);
        }
        mw += y_N * inv_mw(NSP - 1);
        let expected = y_N * (1.0 / mw) * inv_mw(NSP - 1);
        assert_eq!(X[NSP - 1].to_bits(), expected.to_bits());
    }

    #[test]
    fn test_density_of_air_like_mixture() {
        let mut X = [0.0; NSP];
        X[5] = 0.21;
        X[12] = 0.79;
        let rho = get_density(300.0, 101325.0, &X);
        assert_relative_eq!(rho, 1.17196, epsilon = 1e-4);
    }
}
