/// Mass-specific cp, cv, h, u and dimensionless Gibbs energies of the mechanism species
/// from NASA 7-coefficient polynomials; generic over dual numbers
pub mod NASA_poly;
