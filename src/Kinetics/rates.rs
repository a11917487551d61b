//! # Reaction Rates Module
//!
//! ## Purpose
//! Rates of progress of the 27 reactions and the pressure modifications of the third-body and
//! fall-off reactions.
//!
//! ## Conventions
//! - forward rate constant: modified Arrhenius, `k = A T^b exp(-Ea/T)` with Ea in K
//! - reverse rate constant: `k_r = k_f / Kc`, `Kc = exp(-sum(nu g/RT)) (P_atm/(R_u T))^dn`
//! - forward/reverse rates already contain the concentration products, but NOT the pressure
//!   modification: it is applied when species production rates are assembled
//! - for fall-off reactions the rate constant is the high pressure limit and the pressure
//!   modification is `Pr/(1+Pr) F`
use crate::Mechanism::reactions_data::{
    N_PRES_MOD, NR, REACTIONS, RateConstant, ReactionModel, Troe,
};
use crate::Mechanism::species::{NSP, P_ATM, R_U};
use crate::Thermodynamics::NASA_poly::eval_gibbs_rt;
use num_dual::DualNum;
use std::f64::consts::LN_10;

/// smallest reduced pressure that enters the Troe logarithm
const PR_MIN: f64 = 1.0e-300;

/// k = A T^b exp(-Ea/T), evaluated as exp(ln A + b ln T - Ea/T)
#[inline]
fn arrhenius<D: DualNum<f64> + Copy>(k: &RateConstant, logT: D, invT: D) -> D {
    if k.b == 0.0 && k.Ea == 0.0 {
        return D::from(k.A);
    }
    (logT * k.b - invT * k.Ea).exp() * k.A
}

#[inline]
fn conc_product<D: DualNum<f64> + Copy>(species: &[(usize, u8)], conc: &[D; NSP]) -> D {
    let mut p = D::from(1.0);
    for &(k, nu) in species {
        for _ in 0..nu {
            p *= conc[k];
        }
    }
    p
}

/// effective third body concentration [M] = sum(eff_i * C_i), efficiencies default to 1
fn third_body_conc<D: DualNum<f64> + Copy>(efficiencies: &[(usize, f64)], conc: &[D; NSP]) -> D {
    let mut M = D::from(0.0);
    for c in conc.iter() {
        M += *c;
    }
    for &(k, eff) in efficiencies {
        M += conc[k] * (eff - 1.0);
    }
    M
}

/// Troe broadening factor log10(F); zero (Lindemann form) without Troe parameters
fn troe_log_broadening<D: DualNum<f64> + Copy>(troe: &Option<Troe>, T: D, Pr: D) -> D {
    let Some(troe) = troe else {
        return D::from(0.0);
    };
    let mut Fcent = (-T / troe.T3).exp() * (1.0 - troe.A) + (-T / troe.T1).exp() * troe.A;
    if let Some(T2) = troe.T2 {
        Fcent += (-T.recip() * T2).exp();
    }
    let logFcent = Fcent.log10();
    let logPr = if Pr.re() > PR_MIN {
        Pr.log10()
    } else {
        D::from(PR_MIN.log10())
    };
    let c = logFcent * (-0.67) - 0.4;
    let n = logFcent * (-1.27) + 0.75;
    let f1 = (logPr + c) / (n - (logPr + c) * 0.14);
    logFcent / (f1 * f1 + 1.0)
}

/// forward and reverse rates of progress of every reaction, kmol/(m^3·s)
/// (pressure enters only through the concentrations, the argument keeps the kernel signature)
pub fn eval_rxn_rates<D: DualNum<f64> + Copy>(T: D, _pres: D, conc: &[D; NSP]) -> ([D; NR], [D; NR]) {
    let logT = T.ln();
    let invT = T.recip();
    let gibbs = eval_gibbs_rt(T);
    // standard state concentration P_atm/(R_u T)
    let c_std = invT * (P_ATM / R_U);

    let mut fwd_rates = [D::from(0.0); NR];
    let mut rev_rates = [D::from(0.0); NR];
    for (r, rxn) in REACTIONS.iter().enumerate() {
        let kf = arrhenius(&rxn.rate_constant, logT, invT);

        let mut dG = D::from(0.0);
        for &(k, nu) in rxn.products {
            dG += gibbs[k] * nu as f64;
        }
        for &(k, nu) in rxn.reactants {
            dG -= gibbs[k] * nu as f64;
        }
        let Kc = (-dG).exp() * c_std.powi(rxn.delta_n());

        fwd_rates[r] = kf * conc_product(rxn.reactants, conc);
        rev_rates[r] = kf / Kc * conc_product(rxn.products, conc);
    }
    (fwd_rates, rev_rates)
}

/// pressure modification of every third-body ([M]) and fall-off (Pr/(1+Pr) F) reaction,
/// in the order of their `pres_mod` slots
pub fn get_rxn_pres_mod<D: DualNum<f64> + Copy>(T: D, _pres: D, conc: &[D; NSP]) -> [D; N_PRES_MOD] {
    let logT = T.ln();
    let invT = T.recip();
    let mut pres_mod = [D::from(1.0); N_PRES_MOD];
    for rxn in REACTIONS.iter() {
        match &rxn.model {
            ReactionModel::Elementary => {}
            ReactionModel::ThreeBody {
                efficiencies,
                pres_mod: slot,
            } => {
                pres_mod[*slot] = third_body_conc(efficiencies, conc);
            }
            ReactionModel::Falloff {
                efficiencies,
                k0,
                troe,
                pres_mod: slot,
            } => {
                let M = third_body_conc(efficiencies, conc);
                let k_inf = arrhenius(&rxn.rate_constant, logT, invT);
                let Pr = arrhenius(k0, logT, invT) * M / k_inf;
                let logF = troe_log_broadening(troe, T, Pr);
                pres_mod[*slot] = Pr / (Pr + 1.0) * (logF * LN_10).exp();
            }
        }
    }
    pres_mod
}
