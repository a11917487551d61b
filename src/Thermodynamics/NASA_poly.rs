//! # NASA Polynomial Module
//!
//! ## Purpose
//! Mass-specific heat capacities, enthalpies and internal energies of all species of the
//! mechanism from the NASA 7-coefficient fits, plus the dimensionless Gibbs energy used by
//! the equilibrium constants.
//!
//! All functions are generic over the numeric type so that they can be evaluated both on
//! `f64` and on dual numbers (forward-mode derivatives). The temperature segment is picked by
//! comparing the real part of T with `T_MID`; the fits are not blended, so every property
//! jumps slightly at the breakpoint, exactly as the tabulated data do.
use crate::Mechanism::species::{MW, NSP, R_U};
use crate::Mechanism::thermo_data::{NASA7, THERMO};
use num_dual::DualNum;

/// specific gas constant of species k, J/(kg·K)
#[inline]
pub fn specific_gas_constant(k: usize) -> f64 {
    R_U / MW[k]
}

#[inline]
fn coeffs<D: DualNum<f64> + Copy>(fit: &NASA7, T: D) -> &[f64; 7] {
    fit.segment(T.re())
}

/// Cp/R polynomial, `a0_shift` is 0 for Cp and -1 for Cv
#[inline]
fn heat_capacity_poly<D: DualNum<f64> + Copy>(a: &[f64; 7], a0_shift: f64, T: D) -> D {
    (((T * a[4] + a[3]) * T + a[2]) * T + a[1]) * T + (a[0] + a0_shift)
}

/// H/R polynomial (per unit temperature multiplied back), same shift as above
#[inline]
fn enthalpy_poly<D: DualNum<f64> + Copy>(a: &[f64; 7], a0_shift: f64, T: D) -> D {
    ((((T * (a[4] / 5.0) + a[3] / 4.0) * T + a[2] / 3.0) * T + a[1] / 2.0) * T + (a[0] + a0_shift)) * T
        + a[5]
}

/// constant pressure heat capacity of every species, J/(kg·K)
pub fn eval_cp<D: DualNum<f64> + Copy>(T: D) -> [D; NSP] {
    let mut cp = [D::from(0.0); NSP];
    for k in 0..NSP {
        let a = coeffs(&THERMO[k], T);
        cp[k] = heat_capacity_poly(a, 0.0, T) * specific_gas_constant(k);
    }
    cp
}

/// constant volume heat capacity of every species, J/(kg·K)
pub fn eval_cv<D: DualNum<f64> + Copy>(T: D) -> [D; NSP] {
    let mut cv = [D::from(0.0); NSP];
    for k in 0..NSP {
        let a = coeffs(&THERMO[k], T);
        cv[k] = heat_capacity_poly(a, -1.0, T) * specific_gas_constant(k);
    }
    cv
}

/// enthalpy of every species including the formation enthalpy, J/kg
pub fn eval_h<D: DualNum<f64> + Copy>(T: D) -> [D; NSP] {
    let mut h = [D::from(0.0); NSP];
    for k in 0..NSP {
        let a = coeffs(&THERMO[k], T);
        h[k] = enthalpy_poly(a, 0.0, T) * specific_gas_constant(k);
    }
    h
}

/// internal energy of every species, J/kg
pub fn eval_u<D: DualNum<f64> + Copy>(T: D) -> [D; NSP] {
    let mut u = [D::from(0.0); NSP];
    for k in 0..NSP {
        let a = coeffs(&THERMO[k], T);
        u[k] = enthalpy_poly(a, -1.0, T) * specific_gas_constant(k);
    }
    u
}

/// Gibbs energy of every species divided by RT:
/// g/RT = H/RT - S/R = a0 (1 - ln T) - a1 T/2 - a2 T^2/6 - a3 T^3/12 - a4 T^4/20 + a5/T - a6
pub fn eval_gibbs_rt<D: DualNum<f64> + Copy>(T: D) -> [D; NSP] {
    let mut g = [D::from(0.0); NSP];
    let lnT = T.ln();
    let invT = T.recip();
    for k in 0..NSP {
        let a = coeffs(&THERMO[k], T);
        let poly = (((T * (a[4] / 20.0) + a[3] / 12.0) * T + a[2] / 6.0) * T + a[1] / 2.0) * T;
        g[k] = (-lnT + 1.0) * a[0] - poly + invT * a[5] - a[6];
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mechanism::thermo_data::T_MID;
    use approx::assert_relative_eq;
    use num_dual::Dual64;

    #[test]
    fn test_h2_cp_at_room_temperature() {
        let cp = eval_cp(298.15);
        assert_relative_eq!(cp[1], 14322.064465, max_relative = 1e-9);
        // monatomic gases: cp = 5/2 R_s
        assert_relative_eq!(cp[8], 2.5 * R_U / MW[8], max_relative = 1e-15);
    }

    #[test]
    fn test_cp_minus_cv_is_gas_constant() {
        for T in [400.0, 1000.0, 2500.0] {
            let cp = eval_cp(T);
            let cv = eval_cv(T);
            for k in 0..NSP {
                assert_relative_eq!(cp[k] - cv[k], specific_gas_constant(k), max_relative = 1e-10);
            }
        }
    }

    #[test]
    fn test_h_minus_u_is_rs_t() {
        let T = 1500.0;
        let h = eval_h(T);
        let u = eval_u(T);
        for k in 0..NSP {
            assert_relative_eq!(h[k] - u[k], specific_gas_constant(k) * T, max_relative = 1e-8);
        }
    }

    fn reference_cp_r(a: &[f64; 7], T: f64) -> f64 {
        a[0] + a[1] * T + a[2] * T.powi(2) + a[3] * T.powi(3) + a[4] * T.powi(4)
    }

    fn reference_h_r(a: &[f64; 7], T: f64) -> f64 {
        a[5] + a[0] * T
            + a[1] * T.powi(2) / 2.0
            + a[2] * T.powi(3) / 3.0
            + a[3] * T.powi(4) / 4.0
            + a[4] * T.powi(5) / 5.0
    }

    #[test]
    fn test_breakpoint_uses_low_segment_and_jumps_above() {
        let above = T_MID + 1e-9;
        for k in 0..NSP {
            let Rs = specific_gas_constant(k);
            // at T_MID the low fit is used verbatim, just above it the high fit, no blending
            for (a, T) in [(&THERMO[k].low, T_MID), (&THERMO[k].high, above)] {
                let cp = reference_cp_r(a, T) * Rs;
                let h = reference_h_r(a, T) * Rs;
                assert_relative_eq!(eval_cp(T)[k], cp, max_relative = 1e-12);
                assert_relative_eq!(eval_cv(T)[k], cp - Rs, max_relative = 1e-12);
                assert_relative_eq!(eval_h(T)[k], h, max_relative = 1e-10);
                assert_relative_eq!(eval_u(T)[k], h - Rs * T, max_relative = 1e-10);
            }
        }
        // water: every property jumps across the breakpoint
        let low = (eval_cp(T_MID)[4], eval_cv(T_MID)[4], eval_h(T_MID)[4], eval_u(T_MID)[4]);
        let high = (eval_cp(above)[4], eval_cv(above)[4], eval_h(above)[4], eval_u(above)[4]);
        assert_ne!(low.0, high.0);
        assert_ne!(low.1, high.1);
        assert_ne!(low.2, high.2);
        assert_ne!(low.3, high.3);
        // the two fits agree to within a fraction of a percent
        assert_relative_eq!(low.0, high.0, max_relative = 1e-2);
        assert_relative_eq!(low.1, high.1, max_relative = 1e-2);
        assert_relative_eq!(low.2, high.2, max_relative = 1e-2);
        assert_relative_eq!(low.3, high.3, max_relative = 1e-2);
    }

    #[test]
    fn test_dual_derivative_of_h_is_cp() {
        let T = Dual64::new(1200.0, 1.0);
        let h = eval_h(T);
        let cp = eval_cp(1200.0);
        for k in 0..NSP {
            assert_relative_eq!(h[k].eps, cp[k], max_relative = 1e-10);
        }
    }

    #[test]
    fn test_gibbs_matches_enthalpy_minus_entropy() {
        let T: f64 = 800.0;
        let g = eval_gibbs_rt(T);
        let h = eval_h(T);
        let a = &THERMO[5].low;
        let s_R = a[0] * T.ln() + a[1] * T + a[2] * T.powi(2) / 2.0 + a[3] * T.powi(3) / 3.0
            + a[4] * T.powi(4) / 4.0
            + a[6];
        let h_RT = h[5] / (specific_gas_constant(5) * T);
        assert_relative_eq!(g[5], h_RT - s_R, max_relative = 1e-10);
    }
}
