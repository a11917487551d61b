/// Fixed data of the H2/CO mechanism: species table with molecular weights and
/// mole/mass conversions.
///
///  # Examples
/// ```
/// use CombustRHS::Mechanism::species::{NSP, mole2mass};
/// let mut X = [0.0; NSP];
/// X[1] = 0.3; // H2
/// X[5] = 0.2; // O2
/// X[12] = 0.5; // N2
/// let Y = mole2mass(&X).unwrap();
/// assert!(Y[1] > 0.0 && Y[5] > Y[1]);
/// ```
pub mod species;
/// NASA 7-coefficient fits of all species, two temperature segments each
pub mod thermo_data;
/// the 27 elementary, third-body and fall-off reactions of the mechanism
pub mod reactions_data;
