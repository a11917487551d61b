//! # Stiffness Metrics Module
//!
//! ## Purpose
//! Local (pointwise) measures of stiffness computed from one Jacobian of the right-hand side.
//!
//! ## Metrics
//! - **stiffness ratio**: max|λ| / min|λ| over the non-zero eigenvalues of J
//! - **stiffness indicator** (Söderlind): ½(λ_min + λ_max) of the symmetric part ½(J + Jᵀ)
//! - **reference timescale**: `t_len` for a non-negative indicator, otherwise
//!   `min(t_len, -1/indicator)`
//! - **CEMA**: largest real part of the eigenvalues of J, the chemical explosive mode;
//!   positive values mark explosive (ignition) behaviour
//! - **stiffness index** (Shampine 1985):
//!   `tol^(1/(p+1)) · N(J) · ‖y^(p+1)‖^(-1/(p+1)) · |ξ|^(-1/(p+1)) / |γ|`,
//!   where N(J) is either the spectral radius or the weighted norm of J
//!
//! ## Non-finite Jacobians
//! Eigen-decompositions run with a bounded number of iterations. A Jacobian with NaN or
//! infinite entries, or one whose decomposition does not converge, gives NaN.
use nalgebra::linalg::{Schur, SymmetricEigen};
use nalgebra::{Complex, DMatrix, DVector};

/// iteration bound of the eigenvalue solvers
const MAX_ITERATIONS: usize = 10_000;

fn is_finite(jac: &DMatrix<f64>) -> bool {
    jac.iter().all(|v| v.is_finite())
}

/// eigenvalues of a general real matrix, None if they are not available
fn complex_eigenvalues(jac: &DMatrix<f64>) -> Option<Vec<Complex<f64>>> {
    if !is_finite(jac) {
        return None;
    }
    let schur = Schur::try_new(jac.clone(), f64::EPSILON, MAX_ITERATIONS)?;
    Some(schur.complex_eigenvalues().iter().cloned().collect())
}

/// None when J has no non-zero eigenvalue; NaN when the eigenvalues are not available
pub fn stiffness_ratio(jac: &DMatrix<f64>) -> Option<f64> {
    let Some(eigenvalues) = complex_eigenvalues(jac) else {
        return Some(f64::NAN);
    };
    let moduli: Vec<f64> = eigenvalues
        .iter()
        .map(|l| l.norm())
        .filter(|m| *m != 0.0)
        .collect();
    if moduli.is_empty() {
        return None;
    }
    let max = moduli.iter().cloned().fold(f64::MIN, f64::max);
    let min = moduli.iter().cloned().fold(f64::MAX, f64::min);
    Some(max / min)
}

pub fn stiffness_indicator(jac: &DMatrix<f64>) -> f64 {
    if !is_finite(jac) {
        return f64::NAN;
    }
    let hermitian = (jac + jac.transpose()) * 0.5;
    match SymmetricEigen::try_new(hermitian, f64::EPSILON, MAX_ITERATIONS) {
        Some(eigen) => 0.5 * (eigen.eigenvalues.min() + eigen.eigenvalues.max()),
        None => f64::NAN,
    }
}

pub fn reference_timescale(indicator: f64, t_len: f64) -> f64 {
    if indicator >= 0.0 {
        t_len
    } else {
        t_len.min(-1.0 / indicator)
    }
}

/// largest real part among the eigenvalues of J
pub fn cema(jac: &DMatrix<f64>) -> f64 {
    match complex_eigenvalues(jac) {
        Some(eigenvalues) => eigenvalues
            .iter()
            .map(|l| l.re)
            .fold(f64::NEG_INFINITY, f64::max),
        None => f64::NAN,
    }
}

/// Shampine's weighted norm: `wj · max_j Σ_i |m_ij| / wi`.
/// A column vector (n×1 matrix) gives `wj · Σ|v_i| / wi`.
pub fn weighted_norm(m: &DMatrix<f64>, wi: f64, wj: f64) -> f64 {
    let max_column = m
        .column_iter()
        .map(|c| c.iter().map(|v| wj * v.abs()).sum::<f64>())
        .fold(f64::NEG_INFINITY, f64::max);
    max_column / wi
}

/// how the size of J enters the stiffness index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexMethod {
    /// spectral radius max|λ|
    SpectralRadius,
    /// weighted norm of J
    #[default]
    WeightedNorm,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StiffnessIndexParams {
    pub method: IndexMethod,
    /// stability region scale of the method
    pub gamma: f64,
    /// error constant of the method
    pub xi: f64,
    /// order p of the method
    pub order: u32,
    pub tolerance: f64,
    /// weights of the norm
    pub wi: f64,
    pub wj: f64,
}

impl Default for StiffnessIndexParams {
    fn default() -> Self {
        Self {
            method: IndexMethod::default(),
            gamma: 1.0,
            xi: 1.0,
            order: 1,
            tolerance: 1.0,
            wi: 1.0,
            wj: 1.0,
        }
    }
}

/// pointwise y'' = J·f of an autonomous system
pub fn second_derivative(jac: &DMatrix<f64>, dy: &[f64]) -> DVector<f64> {
    jac * DVector::from_column_slice(dy)
}

/// Shampine's stiffness index from J and the derivative y^(p+1) of order p+1
pub fn stiffness_index(jac: &DMatrix<f64>, deriv: &[f64], params: &StiffnessIndexParams) -> f64 {
    if !is_finite(jac) || !deriv.iter().all(|v| v.is_finite()) {
        return f64::NAN;
    }
    let size = match params.method {
        IndexMethod::SpectralRadius => match complex_eigenvalues(jac) {
            Some(eigenvalues) => eigenvalues
                .iter()
                .map(|l| l.norm())
                .fold(f64::NEG_INFINITY, f64::max),
            None => return f64::NAN,
        },
        IndexMethod::WeightedNorm => weighted_norm(jac, params.wi, params.wj),
    };
    let exponent = 1.0 / (params.order as f64 + 1.0);
    let deriv_norm = weighted_norm(
        &DMatrix::from_column_slice(deriv.len(), 1, deriv),
        params.wi,
        params.wj,
    );
    let xi_term = params.xi.abs().powf(-exponent) / params.gamma.abs();
    params.tolerance.powf(exponent) * size * deriv_norm.powf(-exponent) * xi_term
}
