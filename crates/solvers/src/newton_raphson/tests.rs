use approx::assert_relative_eq;

use radroot_core::{EnergyPolynomial, Polynomial, Recorder, RootFinder, Severity};

use super::{
    Action, Error, Event, NO_CONVERGENCE, NewtonRaphson, Status, solve, solve_unobserved,
};
use crate::Config;

/// A function whose residual is NaN everywhere.
struct Undefined;

impl Polynomial for Undefined {
    fn value(&self, _x: f64) -> f64 {
        f64::NAN
    }

    fn derivative(&self, _x: f64) -> f64 {
        1.0
    }
}

#[test]
fn finds_unit_quartic_root() {
    let p = EnergyPolynomial::new(1.0, 0.0, -1.0);

    let solution = solve_unobserved(&p, 2.0, &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.0);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.root(), 1.0);
}

#[test]
fn finds_closure_root() {
    let p = EnergyPolynomial::new(1.0, 2.0, -10.0);

    let solution = solve_unobserved(&p, 4.0, &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.x >= 0.0);
    assert!(p.value(solution.x).abs() < 1e-10);
    assert!(solution.iters > 1);
}

#[test]
fn reports_negative_root() {
    // x₀ = -2 is already a root of x⁴ - 16.
    let p = EnergyPolynomial::new(1.0, 0.0, -16.0);

    let solution = solve_unobserved(&p, -4.0, &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::NegativeRoot);
    assert_relative_eq!(solution.root(), -2.0);
}

#[test]
fn reports_max_iters_with_last_iterate() {
    let p = EnergyPolynomial::new(1.0, 0.0, -2.0);
    let config = Config::new(3, 1e-12).expect("valid config");

    let solution = solve_unobserved(&p, 2.0, &config).expect("should return");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
    assert_relative_eq!(solution.root(), NO_CONVERGENCE);

    // The residual describes the iterate the final step was taken from.
    assert_relative_eq!(
        p.value(solution.x - solution.step),
        solution.residual,
        epsilon = 1e-12
    );
    assert!(solution.residual > 0.0);
    assert!(solution.step < 0.0);
    assert_relative_eq!(solution.x, 2.0_f64.powf(0.25), epsilon = 1e-3);
}

#[test]
fn zero_iterations_keeps_initial_guess() {
    let p = EnergyPolynomial::new(1.0, 0.0, -2.0);
    let config = Config::new(0, 1e-12).expect("valid config");

    let solution = solve_unobserved(&p, 3.0, &config).expect("should return");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 1.5);
    assert!(solution.residual.is_nan());
}

#[test]
fn errors_on_zero_derivative() {
    // f'(0) = 0 for any polynomial without a linear term.
    let p = EnergyPolynomial::new(1.0, 0.0, 1.0);

    let result = solve_unobserved(&p, 0.0, &Config::default());

    assert_eq!(
        result,
        Err(Error::ZeroDerivative {
            x: 0.0,
            residual: 1.0
        })
    );
}

#[test]
fn zero_derivative_at_root_still_converges() {
    // f(x) = x⁴ has a root where the derivative also vanishes.
    let p = EnergyPolynomial::new(1.0, 0.0, 0.0);

    let solution = solve_unobserved(&p, 0.0, &Config::default()).expect("root at zero");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.x, 0.0);
}

#[test]
fn errors_on_non_finite_step() {
    let result = solve_unobserved(&Undefined, 2.0, &Config::default());
    assert!(matches!(result, Err(Error::NonFiniteStep { x, .. }) if x == 1.0));
}

#[test]
fn errors_on_non_finite_guess() {
    let p = EnergyPolynomial::new(1.0, 0.0, -1.0);

    let result = solve_unobserved(&p, f64::INFINITY, &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));
}

#[test]
fn observer_sees_each_iterate() {
    let p = EnergyPolynomial::new(1.0, 2.0, -10.0);

    let mut events = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        events.push(*event);
        None
    };

    let solution = solve(&p, 4.0, &Config::default(), observer).expect("should converge");

    assert_eq!(events.len(), solution.iters);
    assert_relative_eq!(events[0].x, 2.0);
    for pair in events.windows(2) {
        assert_relative_eq!(pair[1].x, pair[0].x + pair[0].step);
    }
}

#[test]
fn observer_can_stop_iteration() {
    let p = EnergyPolynomial::new(1.0, 2.0, -10.0);

    let observer = |event: &Event| (event.iter == 2).then_some(Action::StopEarly);

    let solution = solve(&p, 4.0, &Config::default(), observer).expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
}

#[test]
fn root_finder_returns_sentinel_with_warning() {
    let recorder = Recorder::new();
    let config = Config::new(3, 1e-12).expect("valid config");
    let finder = NewtonRaphson::with_sink(config, &recorder);
    let p = EnergyPolynomial::new(1.0, 0.0, -2.0);

    let root = finder.get_root(&p, 2.0).expect("should return control");

    assert_relative_eq!(root, NO_CONVERGENCE);
    let diagnostics = recorder.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert!(diagnostics[0].message.contains("max_iters = 3"));
}

#[test]
fn root_finder_returns_negative_root_with_warning() {
    let recorder = Recorder::new();
    let finder = NewtonRaphson::with_sink(Config::default(), &recorder);
    let p = EnergyPolynomial::new(1.0, 0.0, -16.0);

    let root = finder.get_root(&p, -4.0).expect("should return control");

    assert_relative_eq!(root, -2.0);
    let warnings = recorder.with_severity(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("negative root"));
}

#[test]
fn root_finder_warns_on_zero_derivative() {
    let recorder = Recorder::new();
    let finder = NewtonRaphson::with_sink(Config::default(), &recorder);
    let p = EnergyPolynomial::new(1.0, 0.0, 1.0);

    let result = finder.get_root(&p, 0.0);

    assert!(matches!(result, Err(Error::ZeroDerivative { .. })));
    assert_eq!(recorder.with_severity(Severity::Warning).len(), 1);
    assert!(recorder.with_severity(Severity::Fatal).is_empty());
}

#[test]
fn root_finder_is_quiet_on_success() {
    let recorder = Recorder::new();
    let finder = NewtonRaphson::with_sink(Config::default(), &recorder);
    let p = EnergyPolynomial::new(1.0, 0.0, -1.0);

    let root = finder.get_root(&p, 2.0).expect("should converge");

    assert_relative_eq!(root, 1.0);
    assert!(recorder.is_empty());
}

#[test]
fn default_root_finder_uses_default_config() {
    let finder = NewtonRaphson::default();
    assert_eq!(finder.config(), &Config::default());
}
