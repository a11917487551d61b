use crate::Mechanism::species::NSP;

/// temperature that separates the low and the high segment of every fit, K
pub const T_MID: f64 = 1000.0;

/// NASA format 7 coefficients of one species: a0..a4 for Cp/R, a5 enthalpy constant,
/// a6 entropy constant. `low` is used for T <= T_MID, `high` above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NASA7 {
    pub low: [f64; 7],
    pub high: [f64; 7],
}

impl NASA7 {
    /// coefficients of the segment valid at temperature t (no blending at T_MID)
    #[inline]
    pub fn segment(&self, t: f64) -> &[f64; 7] {
        if t <= T_MID { &self.low } else { &self.high }
    }
}

/// fits in the species order of `species::SPECIES_NAMES`
#[rustfmt::skip]
pub static THERMO: [NASA7; NSP] = [
    // H
    NASA7 {
        low:  [2.5, 0.0, 0.0, 0.0, 0.0, 2.547163e+04, -4.601176e-01],
        high: [2.5, 0.0, 0.0, 0.0, 0.0, 2.547163e+04, -4.601176e-01],
    },
    // H2
    NASA7 {
        low:  [3.298124, 8.249442e-04, -8.143015e-07, -9.475434e-11, 4.134872e-13, -1.012521e+03, -3.294094],
        high: [2.991423, 7.000644e-04, -5.633829e-08, -9.231578e-12, 1.582752e-15, -8.350340e+02, -1.355110],
    },
    // O
    NASA7 {
        low:  [2.946429, -1.638166e-03, 2.421032e-06, -1.602843e-09, 3.890696e-13, 2.914764e+04, 2.963995],
        high: [2.542060, -2.755062e-05, -3.102803e-09, 4.551067e-12, -4.368052e-16, 2.923080e+04, 4.920308],
    },
    // OH
    NASA7 {
        low:  [4.12530561, -3.22544939e-03, 6.52764691e-06, -5.79853643e-09, 2.06237379e-12, 3.34630913e+03, -6.90432960e-01],
        high: [2.86472886, 1.05650448e-03, -2.59082758e-07, 3.05218674e-11, -1.33195876e-15, 3.68362875e+03, 5.70164073],
    },
    // H2O
    NASA7 {
        low:  [3.386842, 3.474982e-03, -6.354696e-06, 6.968581e-09, -2.506588e-12, -3.020811e+04, 2.590233],
        high: [2.672146, 3.056293e-03, -8.730260e-07, 1.200996e-10, -6.391618e-15, -2.989921e+04, 6.862817],
    },
    // O2
    NASA7 {
        low:  [3.212936, 1.127486e-03, -5.756150e-07, 1.313877e-09, -8.768554e-13, -1.005249e+03, 6.034738],
        high: [3.697578, 6.135197e-04, -1.258842e-07, 1.775281e-11, -1.136435e-15, -1.233930e+03, 3.189166],
    },
    // HO2
    NASA7 {
        low:  [4.30179801, -4.74912051e-03, 2.11582891e-05, -2.42763894e-08, 9.29225124e-12, 2.94808040e+02, 3.71666245],
        high: [4.01721090, 2.23982013e-03, -6.33658150e-07, 1.14246370e-10, -1.07908535e-14, 1.11856713e+02, 3.78510215],
    },
    // H2O2
    NASA7 {
        low:  [3.388754, 6.569226e-03, -1.485013e-07, -4.625806e-09, 2.471515e-12, -1.766315e+04, 6.785363],
        high: [4.573167, 4.336136e-03, -1.474689e-06, 2.348904e-10, -1.431654e-14, -1.800696e+04, 5.011370e-01],
    },
    // AR
    NASA7 {
        low:  [2.5, 0.0, 0.0, 0.0, 0.0, -7.453750e+02, 4.366001],
        high: [2.5, 0.0, 0.0, 0.0, 0.0, -7.453750e+02, 4.366001],
    },
    // HE
    NASA7 {
        low:  [2.5, 0.0, 0.0, 0.0, 0.0, -7.453750e+02, 9.153488e-01],
        high: [2.5, 0.0, 0.0, 0.0, 0.0, -7.453750e+02, 9.153488e-01],
    },
    // CO
    NASA7 {
        low:  [3.262452, 1.511941e-03, -3.881755e-06, 5.581944e-09, -2.474951e-12, -1.431054e+04, 4.848897],
        high: [3.025078, 1.442689e-03, -5.630828e-07, 1.018581e-10, -6.910952e-15, -1.426835e+04, 6.108218],
    },
    // CO2
    NASA7 {
        low:  [2.275725, 9.922072e-03, -1.040911e-05, 6.866687e-09, -2.117280e-12, -4.837314e+04, 1.018849e+01],
        high: [4.453623, 3.140169e-03, -1.278411e-06, 2.393997e-10, -1.669033e-14, -4.896696e+04, -9.553959e-01],
    },
    // N2
    NASA7 {
        low:  [3.298677, 1.408240e-03, -3.963222e-06, 5.641515e-09, -2.444855e-12, -1.020900e+03, 3.950372],
        high: [2.926640, 1.487977e-03, -5.684761e-07, 1.009704e-10, -6.753351e-15, -9.227977e+02, 5.980528],
    },
];
