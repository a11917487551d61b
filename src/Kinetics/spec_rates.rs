use crate::Mechanism::reactions_data::{N_PRES_MOD, NR, REACTIONS};
use crate::Mechanism::species::{NSP, NSP_EXPLICIT};
use num_dual::DualNum;

/// net molar production rates, kmol/(m^3·s): sum over reactions of
/// nu * (fwd - rev) * pres_mod. Returns the tracked species and the implied one separately.
pub fn eval_spec_rates<D: DualNum<f64> + Copy>(
    fwd_rates: &[D; NR],
    rev_rates: &[D; NR],
    pres_mod: &[D; N_PRES_MOD],
) -> ([D; NSP_EXPLICIT], D) {
    let mut wdot = [D::from(0.0); NSP];
    for (r, rxn) in REACTIONS.iter().enumerate() {
        let mut q = fwd_rates[r] - rev_rates[r];
        if let Some(i) = rxn.pres_mod_index() {
            q *= pres_mod[i];
        }
        for &(k, nu) in rxn.reactants {
            wdot[k] -= q * nu as f64;
        }
        for &(k, nu) in rxn.products {
            wdot[k] += q * nu as f64;
        }
    }
    let mut sp_rates = [D::from(0.0); NSP_EXPLICIT];
    sp_rates.copy_from_slice(&wdot[..NSP_EXPLICIT]);
    (sp_rates, wdot[NSP - 1])
}
