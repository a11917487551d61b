//! Initial conditions for a batch of identical homogeneous reactors.
//!
//! The batch is stored structure-of-arrays: `y[i + num*j]` is variable j of instance i,
//! j = 0 being temperature and j >= 1 the mass fraction of species j-1.
use crate::Mechanism::species::{NSP, get_density, mole2mass};
use crate::settings::{ClosureKind, RhsSettings, SetupError};
use log::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct InitialBatch {
    /// number of instances
    pub num: usize,
    pub closure: ClosureKind,
    /// states, length num*NSP
    pub y: Vec<f64>,
    /// pressure or density of each instance, depending on the closure
    pub aux: Vec<f64>,
}

impl InitialBatch {
    /// gathers the state vector [T, Y_0..Y_11] of instance i
    pub fn instance_state(&self, i: usize) -> [f64; NSP] {
        std::array::from_fn(|j| self.y[i + self.num * j])
    }
}

/// normalizes the configured mole fractions and replicates the resulting state
pub fn build(settings: &RhsSettings, num: usize) -> Result<InitialBatch, SetupError> {
    if num == 0 {
        return Err(SetupError::ZeroInstances);
    }
    let mut Xi = settings.mole_fraction_vector()?;
    if Xi.iter().any(|x| *x < 0.0) {
        warn!("negative initial mole fractions: {:?}", Xi);
    }
    let Xsum: f64 = Xi.iter().sum();
    if Xsum == 0.0 {
        return Err(SetupError::ZeroMoleFractionSum);
    }
    debug!("mole fraction sum before normalization: {}", Xsum);
    for x in Xi.iter_mut() {
        *x /= Xsum;
    }
    let Yi = mole2mass(&Xi)?;

    let T0 = settings.temperature;
    let P = settings.pressure;
    let mut y = vec![0.0; num * NSP];
    for i in 0..num {
        y[i] = T0;
        for j in 1..NSP {
            y[i + num * j] = Yi[j - 1];
        }
    }
    let aux_value = match settings.closure {
        ClosureKind::ConstantPressure => P,
        ClosureKind::ConstantVolume => {
            let rho = get_density(T0, P, &Xi);
            debug!("initial density: {} kg/m^3", rho);
            rho
        }
    };
    info!(
        "initial conditions built for {} instances, T0 = {} K, P = {} Pa, {:?}",
        num, T0, P, settings.closure
    );
    Ok(InitialBatch {
        num,
        closure: settings.closure,
        y,
        aux: vec![aux_value; num],
    })
}
