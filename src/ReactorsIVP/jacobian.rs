use crate::Mechanism::species::NSP;
use crate::ReactorsIVP::dydt::RhsEvaluator;
use nalgebra::DMatrix;
use num_dual::Dual64;

/// Jacobian J[(i, j)] = d(dy_i)/d(y_j) of the right-hand side together with dy itself.
/// Every column is one forward-mode pass with the dual part seeded on y_j; the auxiliary
/// scalar is held fixed.
pub fn eval_jacobian(rhs: &RhsEvaluator, t: f64, aux: f64, y: &[f64; NSP]) -> ([f64; NSP], DMatrix<f64>) {
    let mut jac = DMatrix::zeros(NSP, NSP);
    let mut dy = [0.0; NSP];
    for j in 0..NSP {
        let y_dual: [Dual64; NSP] =
            std::array::from_fn(|i| Dual64::new(y[i], if i == j { 1.0 } else { 0.0 }));
        let dy_dual = rhs.dydt(t, Dual64::from(aux), &y_dual);
        for i in 0..NSP {
            jac[(i, j)] = dy_dual[i].eps;
        }
        if j == 0 {
            dy = std::array::from_fn(|i| dy_dual[i].re);
        }
    }
    (dy, jac)
}
