//! Closure strategy of the homogeneous reactor: what the auxiliary scalar means and which
//! heat capacity / energy enter the temperature equation.
//!
//! - constant pressure: aux is P, mixture from `eval_conc`, cp and h
//! - constant volume: aux is rho, mixture from `eval_conc_rho`, cv and u
use crate::Kinetics::concentrations::{MixtureState, eval_conc, eval_conc_rho};
use crate::Mechanism::species::{NSP, NSP_EXPLICIT};
use crate::Thermodynamics::NASA_poly::{eval_cp, eval_cv, eval_h, eval_u};
use crate::settings::ClosureKind;
use enum_dispatch::enum_dispatch;
use num_dual::DualNum;

#[enum_dispatch]
pub trait ClosureModel {
    /// concentrations, density and pressure from temperature, aux scalar and mass fractions
    fn mixture<D: DualNum<f64> + Copy>(&self, T: D, aux: D, Y: &[D; NSP_EXPLICIT]) -> MixtureState<D>;
    /// per species cp or cv, J/(kg·K)
    fn heat_capacities<D: DualNum<f64> + Copy>(&self, T: D) -> [D; NSP];
    /// per species h or u, J/kg
    fn energies<D: DualNum<f64> + Copy>(&self, T: D) -> [D; NSP];
    fn kind(&self) -> ClosureKind;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConstantPressure;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConstantVolume;

impl ClosureModel for ConstantPressure {
    fn mixture<D: DualNum<f64> + Copy>(&self, T: D, aux: D, Y: &[D; NSP_EXPLICIT]) -> MixtureState<D> {
        eval_conc(T, aux, Y)
    }
    fn heat_capacities<D: DualNum<f64> + Copy>(&self, T: D) -> [D; NSP] {
        eval_cp(T)
    }
    fn energies<D: DualNum<f64> + Copy>(&self, T: D) -> [D; NSP] {
        eval_h(T)
    }
    fn kind(&self) -> ClosureKind {
        ClosureKind::ConstantPressure
    }
}

impl ClosureModel for ConstantVolume {
    fn mixture<D: DualNum<f64> + Copy>(&self, T: D, aux: D, Y: &[D; NSP_EXPLICIT]) -> MixtureState<D> {
        eval_conc_rho(T, aux, Y)
    }
    fn heat_capacities<D: DualNum<f64> + Copy>(&self, T: D) -> [D; NSP] {
        eval_cv(T)
    }
    fn energies<D: DualNum<f64> + Copy>(&self, T: D) -> [D; NSP] {
        eval_u(T)
    }
    fn kind(&self) -> ClosureKind {
        ClosureKind::ConstantVolume
    }
}

#[enum_dispatch(ClosureModel)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Closure {
    ConstantPressure,
    ConstantVolume,
}

impl From<ClosureKind> for Closure {
    fn from(kind: ClosureKind) -> Self {
        match kind {
            ClosureKind::ConstantPressure => Closure::ConstantPressure(ConstantPressure),
            ClosureKind::ConstantVolume => Closure::ConstantVolume(ConstantVolume),
        }
    }
}
