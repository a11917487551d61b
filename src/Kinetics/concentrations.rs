//! Molar concentrations of the mixture from temperature, mass fractions and either pressure
//! (constant pressure reactor) or density (constant volume reactor).
//!
//! The mass fraction of the implied species is `1 - sum(Y)` and is not clamped: a slightly
//! negative value coming from the integrator flows through unchanged.
use crate::Mechanism::species::{NSP, NSP_EXPLICIT, R_U, inv_mw};
use num_dual::DualNum;

/// thermodynamic state of the mixture at one evaluation point
#[derive(Debug, Clone, Copy)]
pub struct MixtureState<D> {
    /// mass fraction of the implied species
    pub y_n: D,
    /// mean molar mass, kg/kmol
    pub mw_avg: D,
    /// density, kg/m^3
    pub rho: D,
    /// pressure, Pa
    pub pres: D,
    /// concentrations, kmol/m^3
    pub conc: [D; NSP],
}

/// implied mass fraction and mean molar mass
fn mixture_mass<D: DualNum<f64> + Copy>(Y: &[D; NSP_EXPLICIT]) -> (D, D) {
    // tracked mass fractions are summed first, then subtracted from one
    let mut y_sum = Y[0];
    for y in Y[1..].iter() {
        y_sum += *y;
    }
    let y_n = D::from(1.0) - y_sum;
    let mut mw_avg = D::from(0.0);
    for (k, y) in Y.iter().enumerate() {
        mw_avg += *y * inv_mw(k);
    }
    mw_avg += y_n * inv_mw(NSP - 1);
    (y_n, mw_avg.recip())
}

fn concentrations<D: DualNum<f64> + Copy>(rho: D, Y: &[D; NSP_EXPLICIT], y_n: D) -> [D; NSP] {
    let mut conc = [D::from(0.0); NSP];
    for k in 0..NSP_EXPLICIT {
        conc[k] = rho * Y[k] * inv_mw(k);
    }
    conc[NSP - 1] = rho * y_n * inv_mw(NSP - 1);
    conc
}

/// state at given temperature and pressure: rho = P*MW_avg/(R_u*T)
pub fn eval_conc<D: DualNum<f64> + Copy>(T: D, pres: D, Y: &[D; NSP_EXPLICIT]) -> MixtureState<D> {
    let (y_n, mw_avg) = mixture_mass(Y);
    let rho = pres * mw_avg / (T * R_U);
    MixtureState {
        y_n,
        mw_avg,
        rho,
        pres,
        conc: concentrations(rho, Y, y_n),
    }
}

/// state at given temperature and density: P = rho*R_u*T/MW_avg
pub fn eval_conc_rho<D: DualNum<f64> + Copy>(T: D, rho: D, Y: &[D; NSP_EXPLICIT]) -> MixtureState<D> {
    let (y_n, mw_avg) = mixture_mass(Y);
    let pres = rho * R_U * T / mw_avg;
    MixtureState {
        y_n,
        mw_avg,
        rho,
        pres,
        conc: concentrations(rho, Y, y_n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mechanism::species::{MW, mole2mass};
    use approx::assert_relative_eq;

    fn lean_mixture() -> [f64; NSP_EXPLICIT] {
        let mut X = [0.0; NSP];
        X[1] = 0.1;
        X[5] = 0.2;
        X[4] = 0.05;
        X[12] = 0.65;
        mole2mass(&X).unwrap()
    }

    #[test]
    fn test_concentrations_sum_back_to_density() {
        let Y = lean_mixture();
        let state = eval_conc(1200.0, 2.0e6, &Y);
        let rho: f64 = (0..NSP).map(|k| state.conc[k] * MW[k]).sum();
        assert_relative_eq!(rho, state.rho, max_relative = 1e-12);
        // ideal gas: total concentration is P/(R_u T)
        let c_tot: f64 = state.conc.iter().sum();
        assert_relative_eq!(c_tot, 2.0e6 / (R_U * 1200.0), max_relative = 1e-12);
    }

    #[test]
    fn test_pressure_and_density_closures_agree() {
        let Y = lean_mixture();
        let by_pressure = eval_conc(900.0, 101325.0, &Y);
        let by_density = eval_conc_rho(900.0, by_pressure.rho, &Y);
        assert_relative_eq!(by_density.pres, 101325.0, max_relative = 1e-12);
        assert_relative_eq!(by_density.mw_avg, by_pressure.mw_avg, max_relative = 1e-15);
        for k in 0..NSP {
            assert_relative_eq!(by_density.conc[k], by_pressure.conc[k], max_relative = 1e-12);
        }
    }

    /// 1 - (y0 + ... + y11) and the mean molar mass exactly as the reference kernel spells them
    fn reference_mixture(y: &[f64; NSP_EXPLICIT]) -> (f64, f64) {
        let y_n = 1.0
            - (y[0] + y[1] + y[2] + y[3] + y[4] + y[5] + y[6] + y[7] + y[8] + y[9] + y[10]
                + y[11]);
        let mw = (y[0] * 9.9212254697700253e-01)
            + (y[1] * 4.9606127348850126e-01)
            + (y[2] * 6.2502343837893923e-02)
            + (y[3] * 5.8798142449083754e-02)
            + (y[4] * 5.5508435061791990e-02)
            + (y[5] * 3.1251171918946961e-02)
            + (y[6] * 3.0296842402491128e-02)
            + (y[7] * 2.9399071224541877e-02)
            + (y[8] * 2.5032542304996495e-02)
            + (y[9] * 2.4983760555638834e-01)
            + (y[10] * 3.5701025333447579e-02)
            + (y[11] * 2.2722211870992371e-02)
            + (y_n * 3.5697100110375433e-02);
        (y_n, 1.0 / mw)
    }

    #[test]
    fn test_implied_fraction_is_bit_identical_to_reference_order() {
        // deterministic pseudo-random states, many of them sensitive to the summation order
        let mut seed: u64 = 0x2545F4914F6CDD1D;
        let mut next = || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 11) as f64 / (1u64 << 53) as f64
        };
        for _ in 0..2000 {
            let mut Y = [0.0; NSP_EXPLICIT];
            for y in Y.iter_mut() {
                *y = next() / NSP as f64;
            }
            let (y_n, mw_avg) = reference_mixture(&Y);
            let T = 881.9061350328426;
            let P = 10266755625.021679;
            let state = eval_conc(T, P, &Y);
            assert_eq!(state.y_n.to_bits(), y_n.to_bits());
            assert_eq!(state.mw_avg.to_bits(), mw_avg.to_bits());
            let rho = P * mw_avg / (8.31446210e+03 * T);
            assert_eq!(state.rho.to_bits(), rho.to_bits());
            assert_eq!(state.conc[NSP - 1].to_bits(), (rho * y_n * 3.5697100110375433e-02).to_bits());
            let by_density = eval_conc_rho(T, rho, &Y);
            assert_eq!(by_density.y_n.to_bits(), y_n.to_bits());
        }
    }

    #[test]
    fn test_implied_species_is_not_clamped() {
        let mut Y = [0.0; NSP_EXPLICIT];
        Y[1] = 0.6;
        Y[5] = 0.5;
        let state = eval_conc(1000.0, 101325.0, &Y);
        assert_relative_eq!(state.y_n, -0.1, epsilon = 1e-15);
        assert!(state.conc[NSP - 1] < 0.0);
    }
}
