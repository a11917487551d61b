/// Molar concentrations, density and pressure of the mixture for both reactor closures
pub mod concentrations;
/// Forward/reverse rates of progress and pressure modifications (third body, Troe fall-off)
/// # Examples
/// ```
/// use CombustRHS::Kinetics::rates::{eval_rxn_rates, get_rxn_pres_mod};
/// use CombustRHS::Mechanism::species::NSP;
/// let conc = [1e-3; NSP];
/// let (fwd, rev) = eval_rxn_rates(1500.0, 101325.0, &conc);
/// let pres_mod = get_rxn_pres_mod(1500.0, 101325.0, &conc);
/// assert!(fwd[0] > 0.0 && rev[0] > 0.0);
/// assert!(pres_mod[4] > 0.0 && pres_mod[4] < 1.0);
/// ```
pub mod rates;
/// Net molar production rates of all species
pub mod spec_rates;
