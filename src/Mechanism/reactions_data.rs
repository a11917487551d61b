//! Reaction network of the mechanism: H2/O2 chemistry with CO and CO2 acting as
//! collision partners only (27 reactions, 6 of them pressure dependent).
//!
//! Kinetic parameters are written in the usual Chemkin units (cm, mol, s, cal/mol) and
//! converted at compile time into kmol/m^3 units and activation temperatures, which is
//! what the rest of the crate works with.
use crate::Mechanism::species::R_U;

/// number of reactions
pub const NR: usize = 27;
/// number of reactions carrying a pressure modification (third body or fall-off)
pub const N_PRES_MOD: usize = 6;

/// gas constant in cal/(mol·K), used only to turn activation energies into temperatures
const R_CAL: f64 = R_U / 4184.0;

// species indices
const H: usize = 0;
const H2: usize = 1;
const O: usize = 2;
const OH: usize = 3;
const H2O: usize = 4;
const O2: usize = 5;
const HO2: usize = 6;
const H2O2: usize = 7;
const AR: usize = 8;
const HE: usize = 9;
const CO: usize = 10;
const CO2: usize = 11;
const N2: usize = 12;

/// modified Arrhenius constant k = A * T^b * exp(-Ea/T)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConstant {
    /// pre-exponential factor in kmol, m^3, s units
    pub A: f64,
    /// temperature exponent
    pub b: f64,
    /// activation temperature, K
    pub Ea: f64,
}

/// Troe fall-off broadening parameters; T2 is optional in the Chemkin format
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Troe {
    pub A: f64,
    pub T3: f64,
    pub T1: f64,
    pub T2: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReactionModel {
    Elementary,
    /// rate multiplied by [M]; `pres_mod` is the slot in the pressure modification vector
    ThreeBody {
        efficiencies: &'static [(usize, f64)],
        pres_mod: usize,
    },
    /// rate constant of the reaction is the high pressure limit, `k0` the low pressure one
    Falloff {
        efficiencies: &'static [(usize, f64)],
        k0: RateConstant,
        troe: Option<Troe>,
        pres_mod: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reaction {
    pub equation: &'static str,
    /// (species index, stoichiometric coefficient)
    pub reactants: &'static [(usize, u8)],
    pub products: &'static [(usize, u8)],
    pub rate_constant: RateConstant,
    pub model: ReactionModel,
}

impl Reaction {
    /// change in number of moles (products - reactants), third bodies excluded
    pub const fn delta_n(&self) -> i32 {
        let mut dn: i32 = 0;
        let mut i = 0;
        while i < self.products.len() {
            dn += self.products[i].1 as i32;
            i += 1;
        }
        let mut i = 0;
        while i < self.reactants.len() {
            dn -= self.reactants[i].1 as i32;
            i += 1;
        }
        dn
    }

    /// net stoichiometric coefficient of species k
    #[cfg(test)]
    pub fn nu(&self, k: usize) -> i32 {
        let prod: i32 = self
            .products
            .iter()
            .filter(|(s, _)| *s == k)
            .map(|(_, n)| *n as i32)
            .sum();
        let reac: i32 = self
            .reactants
            .iter()
            .filter(|(s, _)| *s == k)
            .map(|(_, n)| *n as i32)
            .sum();
        prod - reac
    }

    /// slot in the pressure modification vector, None for elementary reactions
    pub fn pres_mod_index(&self) -> Option<usize> {
        match self.model {
            ReactionModel::Elementary => None,
            ReactionModel::ThreeBody { pres_mod, .. } => Some(pres_mod),
            ReactionModel::Falloff { pres_mod, .. } => Some(pres_mod),
        }
    }
}

/// converts Chemkin parameters; `order` is the molecularity of the rate expression
/// including a third body when there is one
const fn chemkin(A: f64, b: f64, Ea_cal: f64, order: u8) -> RateConstant {
    let factor = match order {
        1 => 1.0,
        2 => 1.0e-3,
        _ => 1.0e-6,
    };
    RateConstant {
        A: A * factor,
        b,
        Ea: Ea_cal / R_CAL,
    }
}

const EFF_H2_M: &[(usize, f64)] = &[
    (H2, 2.5),
    (H2O, 12.0),
    (CO, 1.9),
    (CO2, 3.8),
    (AR, 0.0),
    (HE, 0.0),
];
const EFF_O_O_M: &[(usize, f64)] = &[
    (H2, 2.5),
    (H2O, 12.0),
    (AR, 0.0),
    (HE, 0.0),
    (CO, 1.9),
    (CO2, 3.8),
];
const EFF_O_H_M: &[(usize, f64)] = &[
    (H2, 2.5),
    (H2O, 12.0),
    (AR, 0.75),
    (HE, 0.75),
    (CO, 1.9),
    (CO2, 3.8),
];
const EFF_H2O_M: &[(usize, f64)] = &[
    (H2, 3.0),
    (H2O, 0.0),
    (HE, 1.1),
    (N2, 2.0),
    (O2, 1.5),
    (CO, 1.9),
    (CO2, 3.8),
];
const EFF_H_O2_M: &[(usize, f64)] = &[
    (H2, 2.0),
    (H2O, 14.0),
    (O2, 0.78),
    (CO, 1.9),
    (CO2, 3.8),
    (AR, 0.67),
    (HE, 0.8),
];
const EFF_H2O2_M: &[(usize, f64)] = &[
    (H2O, 7.5),
    (CO2, 1.6),
    (N2, 1.5),
    (O2, 1.2),
    (HE, 0.65),
    (H2O2, 7.7),
    (H2, 3.7),
    (CO, 2.8),
];

const fn elementary(
    equation: &'static str,
    reactants: &'static [(usize, u8)],
    products: &'static [(usize, u8)],
    rate_constant: RateConstant,
) -> Reaction {
    Reaction {
        equation,
        reactants,
        products,
        rate_constant,
        model: ReactionModel::Elementary,
    }
}

pub static REACTIONS: [Reaction; NR] = [
    // H2-O2 chain reactions
    elementary("H+O2<=>O+OH", &[(H, 1), (O2, 1)], &[(O, 1), (OH, 1)], chemkin(1.04e14, 0.0, 1.5286e4, 2)),
    elementary("O+H2<=>H+OH", &[(O, 1), (H2, 1)], &[(H, 1), (OH, 1)], chemkin(3.818e12, 0.0, 7.948e3, 2)),
    elementary("O+H2<=>H+OH", &[(O, 1), (H2, 1)], &[(H, 1), (OH, 1)], chemkin(8.792e14, 0.0, 1.917e4, 2)),
    elementary("H2+OH<=>H2O+H", &[(H2, 1), (OH, 1)], &[(H2O, 1), (H, 1)], chemkin(2.16e8, 1.51, 3.43e3, 2)),
    elementary("OH+OH<=>O+H2O", &[(OH, 2)], &[(O, 1), (H2O, 1)], chemkin(3.34e4, 2.42, -1.93e3, 2)),
    // dissociation/recombination
    Reaction {
        equation: "H2+M<=>H+H+M",
        reactants: &[(H2, 1)],
        products: &[(H, 2)],
        rate_constant: chemkin(4.577e19, -1.40, 1.0438e5, 2),
        model: ReactionModel::ThreeBody { efficiencies: EFF_H2_M, pres_mod: 0 },
    },
    elementary("H2+AR<=>H+H+AR", &[(H2, 1), (AR, 1)], &[(H, 2), (AR, 1)], chemkin(5.84e18, -1.10, 1.0438e5, 2)),
    elementary("H2+HE<=>H+H+HE", &[(H2, 1), (HE, 1)], &[(H, 2), (HE, 1)], chemkin(5.84e18, -1.10, 1.0438e5, 2)),
    Reaction {
        equation: "O+O+M<=>O2+M",
        reactants: &[(O, 2)],
        products: &[(O2, 1)],
        rate_constant: chemkin(6.165e15, -0.50, 0.0, 3),
        model: ReactionModel::ThreeBody { efficiencies: EFF_O_O_M, pres_mod: 1 },
    },
    elementary("O+O+AR<=>O2+AR", &[(O, 2), (AR, 1)], &[(O2, 1), (AR, 1)], chemkin(1.886e13, 0.0, -1.788e3, 3)),
    elementary("O+O+HE<=>O2+HE", &[(O, 2), (HE, 1)], &[(O2, 1), (HE, 1)], chemkin(1.886e13, 0.0, -1.788e3, 3)),
    Reaction {
        equation: "O+H+M<=>OH+M",
        reactants: &[(O, 1), (H, 1)],
        products: &[(OH, 1)],
        rate_constant: chemkin(4.714e18, -1.00, 0.0, 3),
        model: ReactionModel::ThreeBody { efficiencies: EFF_O_H_M, pres_mod: 2 },
    },
    Reaction {
        equation: "H2O+M<=>H+OH+M",
        reactants: &[(H2O, 1)],
        products: &[(H, 1), (OH, 1)],
        rate_constant: chemkin(6.064e27, -3.322, 1.2079e5, 2),
        model: ReactionModel::ThreeBody { efficiencies: EFF_H2O_M, pres_mod: 3 },
    },
    elementary("H2O+H2O<=>H+OH+H2O", &[(H2O, 2)], &[(H, 1), (OH, 1), (H2O, 1)], chemkin(1.006e26, -2.44, 1.2018e5, 2)),
    // formation and consumption of HO2
    Reaction {
        equation: "H+O2(+M)<=>HO2(+M)",
        reactants: &[(H, 1), (O2, 1)],
        products: &[(HO2, 1)],
        rate_constant: chemkin(4.65084e12, 0.44, 0.0, 2),
        model: ReactionModel::Falloff {
            efficiencies: EFF_H_O2_M,
            k0: chemkin(6.366e20, -1.72, 5.248e2, 3),
            troe: Some(Troe { A: 0.5, T3: 1.0e-30, T1: 1.0e30, T2: None }),
            pres_mod: 4,
        },
    },
    elementary("HO2+H<=>H2+O2", &[(HO2, 1), (H, 1)], &[(H2, 1), (O2, 1)], chemkin(2.75e6, 2.09, -1.451e3, 2)),
    elementary("HO2+H<=>OH+OH", &[(HO2, 1), (H, 1)], &[(OH, 2)], chemkin(7.079e13, 0.0, 2.95e2, 2)),
    elementary("HO2+O<=>O2+OH", &[(HO2, 1), (O, 1)], &[(O2, 1), (OH, 1)], chemkin(2.85e10, 1.0, -7.2393e2, 2)),
    elementary("HO2+OH<=>H2O+O2", &[(HO2, 1), (OH, 1)], &[(H2O, 1), (O2, 1)], chemkin(2.89e13, 0.0, -4.97e2, 2)),
    // formation and consumption of H2O2
    elementary("HO2+HO2<=>H2O2+O2", &[(HO2, 2)], &[(H2O2, 1), (O2, 1)], chemkin(4.2e14, 0.0, 1.1982e4, 2)),
    elementary("HO2+HO2<=>H2O2+O2", &[(HO2, 2)], &[(H2O2, 1), (O2, 1)], chemkin(1.3e11, 0.0, -1.6293e3, 2)),
    Reaction {
        equation: "H2O2(+M)<=>OH+OH(+M)",
        reactants: &[(H2O2, 1)],
        products: &[(OH, 2)],
        rate_constant: chemkin(2.0e12, 0.90, 4.8749e4, 1),
        model: ReactionModel::Falloff {
            efficiencies: EFF_H2O2_M,
            k0: chemkin(2.49e24, -2.30, 4.8749e4, 2),
            troe: Some(Troe { A: 0.42, T3: 1.0e-30, T1: 1.0e30, T2: None }),
            pres_mod: 5,
        },
    },
    elementary("H2O2+H<=>H2O+OH", &[(H2O2, 1), (H, 1)], &[(H2O, 1), (OH, 1)], chemkin(2.41e13, 0.0, 3.97e3, 2)),
    elementary("H2O2+H<=>HO2+H2", &[(H2O2, 1), (H, 1)], &[(HO2, 1), (H2, 1)], chemkin(4.82e13, 0.0, 7.95e3, 2)),
    elementary("H2O2+O<=>OH+HO2", &[(H2O2, 1), (O, 1)], &[(OH, 1), (HO2, 1)], chemkin(9.55e6, 2.0, 3.97e3, 2)),
    elementary("H2O2+OH<=>HO2+H2O", &[(H2O2, 1), (OH, 1)], &[(HO2, 1), (H2O, 1)], chemkin(1.74e12, 0.0, 3.18e2, 2)),
    elementary("H2O2+OH<=>HO2+H2O", &[(H2O2, 1), (OH, 1)], &[(HO2, 1), (H2O, 1)], chemkin(7.59e13, 0.0, 7.27e3, 2)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mechanism::species::{MW, NSP};

    #[test]
    fn test_every_reaction_conserves_mass() {
        for r in REACTIONS.iter() {
            let dm: f64 = (0..NSP).map(|k| r.nu(k) as f64 * MW[k]).sum();
            assert!(dm.abs() < 1e-10, "{} changes mass by {}", r.equation, dm);
        }
    }

    #[test]
    fn test_pressure_modification_slots_are_unique() {
        let mut slots: Vec<usize> = REACTIONS.iter().filter_map(|r| r.pres_mod_index()).collect();
        slots.sort();
        assert_eq!(slots, (0..N_PRES_MOD).collect::<Vec<_>>());
    }

    #[test]
    fn test_collision_partners_have_zero_net_stoichiometry() {
        // AR, HE, CO, CO2 and N2 never change in this network
        for k in 8..NSP {
            assert!(REACTIONS.iter().all(|r| r.nu(k) == 0));
        }
        assert_eq!(REACTIONS[6].delta_n(), 1);
        assert_eq!(REACTIONS[8].delta_n(), -1);
    }

    #[test]
    fn test_unit_conversion() {
        let r = &REACTIONS[0];
        assert!((r.rate_constant.A / 1.04e11 - 1.0).abs() < 1e-14);
        assert!((r.rate_constant.Ea - 7692.2).abs() < 1.0);
        match REACTIONS[14].model {
            ReactionModel::Falloff { k0, .. } => assert!((k0.A - 6.366e14).abs() < 1.0),
            _ => panic!("H+O2(+M) must be a fall-off reaction"),
        }
    }
}
