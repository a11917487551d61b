//! # Homogeneous Reactor Right-Hand Side
//!
//! ## Purpose
//! Time derivative of the state `[T, Y_0, ..., Y_11]` of a homogeneous, adiabatic reactor:
//!
//! - dY_i/dt = wdot_i * MW_i / rho
//! - dT/dt = -1/(rho * c_avg) * sum_i(wdot_i * e_i * MW_i)
//!
//! where c_avg and e_i are cp and h for the constant pressure closure, cv and u for the
//! constant volume one. The implied species only enters through c_avg.
//!
//! ## Numeric type
//! The evaluation is generic over `DualNum<f64>`, so the same code gives plain values with
//! `f64` and directional derivatives with `Dual64` (see the `jacobian` module).
//! No validation is done: NaN and infinities propagate to the output.
use crate::Kinetics::rates::{eval_rxn_rates, get_rxn_pres_mod};
use crate::Kinetics::spec_rates::eval_spec_rates;
use crate::Mechanism::species::{MW, NSP, NSP_EXPLICIT};
use crate::ReactorsIVP::closure::{Closure, ClosureModel};
use num_dual::DualNum;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RhsEvaluator {
    pub closure: Closure,
}

impl RhsEvaluator {
    pub fn new(closure: impl Into<Closure>) -> Self {
        Self {
            closure: closure.into(),
        }
    }

    /// dy/dt at state y; `aux` is pressure or density depending on the closure.
    /// The system is autonomous, `t` is accepted for the integrator signature only.
    pub fn dydt<D: DualNum<f64> + Copy>(&self, _t: f64, aux: D, y: &[D; NSP]) -> [D; NSP] {
        let T = y[0];
        let Y: [D; NSP_EXPLICIT] = std::array::from_fn(|i| y[i + 1]);

        let state = self.closure.mixture(T, aux, &Y);
        let (fwd_rates, rev_rates) = eval_rxn_rates(T, state.pres, &state.conc);
        let pres_mod = get_rxn_pres_mod(T, state.pres, &state.conc);
        let (wdot, _wdot_n) = eval_spec_rates(&fwd_rates, &rev_rates, &pres_mod);

        // mass averaged heat capacity, summed in species order with the implied species last
        let c = self.closure.heat_capacities(T);
        let mut c_avg = c[0] * y[1];
        for i in 1..NSP_EXPLICIT {
            c_avg += c[i] * y[i + 1];
        }
        c_avg += c[NSP - 1] * state.y_n;

        let e = self.closure.energies(T);
        let mut heat_release = D::from(0.0);
        for i in 0..NSP_EXPLICIT {
            heat_release += wdot[i] * e[i] * MW[i];
        }

        let mut dy = [D::from(0.0); NSP];
        dy[0] = (D::from(-1.0) / (state.rho * c_avg)) * heat_release;
        for i in 0..NSP_EXPLICIT {
            dy[i + 1] = wdot[i] * (D::from(MW[i]) / state.rho);
        }
        dy
    }
}
