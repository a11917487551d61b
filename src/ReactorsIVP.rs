/// Closure strategy of the reactor (constant pressure or constant volume)
pub mod closure;
/// Right-hand side of the homogeneous reactor ODE system
/// # Examples
/// ```
/// use CombustRHS::ReactorsIVP::closure::ConstantPressure;
/// use CombustRHS::ReactorsIVP::dydt::RhsEvaluator;
/// use CombustRHS::ReactorsIVP::initial_conditions::build;
/// use CombustRHS::settings::RhsSettings;
/// let batch = build(&RhsSettings::default(), 2).unwrap();
/// let rhs = RhsEvaluator::new(ConstantPressure);
/// let dy = rhs.dydt(0.0, batch.aux[0], &batch.instance_state(0));
/// assert!(dy.iter().all(|d| d.is_finite()));
/// ```
pub mod dydt;
/// initial conditions for batches of identical reactors
pub mod initial_conditions;
/// Jacobian of the right-hand side with forward-mode dual numbers
pub mod jacobian;
/// species permutation used by cache-optimized layouts
pub mod masking;
/// local stiffness metrics from the Jacobian
pub mod stiffness;
/// tabular output of states and derivatives
pub mod report;
