use CombustRHS::ReactorsIVP::closure::Closure;
use CombustRHS::ReactorsIVP::dydt::RhsEvaluator;
use CombustRHS::ReactorsIVP::initial_conditions::build;
use CombustRHS::ReactorsIVP::jacobian::eval_jacobian;
use CombustRHS::ReactorsIVP::report::print_derivative_table;
use CombustRHS::ReactorsIVP::stiffness::{
    StiffnessIndexParams, cema, second_derivative, stiffness_index, stiffness_indicator,
    stiffness_ratio,
};
use CombustRHS::settings::{RhsSettings, SetupError};
use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::process::ExitCode;

/// evaluates the right-hand side and its Jacobian at the configured initial state;
/// an optional first argument is the path to a JSON settings file
fn run() -> Result<(), SetupError> {
    let settings = match std::env::args().nth(1) {
        Some(path) => RhsSettings::from_file(path)?,
        None => {
            info!("no settings file given, using the built-in initial state");
            RhsSettings::default()
        }
    };
    let batch = build(&settings, settings.instances)?;
    let rhs = RhsEvaluator::new(Closure::from(settings.closure));

    let y = batch.instance_state(0);
    let (dy, jac) = eval_jacobian(&rhs, 0.0, batch.aux[0], &y);
    print_derivative_table(&y, &dy);

    let indicator = stiffness_indicator(&jac);
    info!("CEMA: {:.6e} 1/s", cema(&jac));
    info!("stiffness indicator: {:.6e} 1/s", indicator);
    match stiffness_ratio(&jac) {
        Some(ratio) => info!("stiffness ratio: {:.6e}", ratio),
        None => info!("stiffness ratio undefined, all eigenvalues are zero"),
    }
    let d2y = second_derivative(&jac, &dy);
    let index = stiffness_index(&jac, d2y.as_slice(), &StiffnessIndexParams::default());
    info!("stiffness index: {:.6e}", index);
    Ok(())
}

fn main() -> ExitCode {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(1)
        }
    }
}
