//! Halley's method for the energy polynomial.
//!
//! Halley's method uses the second derivative to take the step
//! `dx = -(2·f·f') / (2·f'² − f·f'')`, converging cubically near a simple
//! root. It shares Newton-Raphson's initial guess (`upper_bracket_bound / 2`)
//! and convergence test (`|f(x)| < tol` or `|dx| < tol · x`).
//!
//! A negative converged root is reported as [`Status::NegativeRoot`] and
//! returned, as with Newton-Raphson. Running out of iterations is an
//! [`Error::NonConvergence`], as with bisection, so the [`Halley`] root
//! finder never returns a sentinel.

mod action;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use radroot_core::{Diagnostic, DiagnosticSink, LogSink, Observer, RootFinder, SecondDerivative};

use crate::Config;

/// Runs Halley's method on `polynomial` from `upper_bracket_bound / 2`.
///
/// # Errors
///
/// - [`Error::NonFiniteGuess`] if the initial guess is NaN or infinite.
/// - [`Error::ZeroDenominator`] if `2·f'² − f·f''` vanishes at an unconverged
///   iterate.
/// - [`Error::NonFiniteStep`] if the step is NaN or infinite.
/// - [`Error::NonConvergence`] if `config.max_iters()` iterations pass without
///   convergence.
pub fn solve<P, Obs>(
    polynomial: &P,
    upper_bracket_bound: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: SecondDerivative + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut x = 0.5 * upper_bracket_bound;
    if !x.is_finite() {
        return Err(Error::NonFiniteGuess { value: x });
    }

    let tol = config.tol();
    let mut residual = f64::NAN;

    for iter in 1..=config.max_iters() {
        residual = polynomial.value(x);
        let derivative = polynomial.derivative(x);
        let second_derivative = polynomial.second_derivative(x);

        let denominator = 2.0 * derivative * derivative - residual * second_derivative;
        let step = -(2.0 * residual * derivative) / denominator;

        let event = Event {
            iter,
            x,
            residual,
            derivative,
            second_derivative,
            step,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        x,
                        residual,
                        iters: iter,
                    });
                }
            }
        }

        let converged = if residual.abs() < tol {
            true
        } else {
            #[allow(clippy::float_cmp)]
            if denominator == 0.0 {
                return Err(Error::ZeroDenominator { x, residual });
            }
            if !step.is_finite() {
                return Err(Error::NonFiniteStep { x, residual });
            }
            step.abs() < tol * x
        };

        if converged {
            let status = if x < 0.0 {
                Status::NegativeRoot
            } else {
                Status::Converged
            };
            return Ok(Solution {
                status,
                x,
                residual,
                iters: iter,
            });
        }

        x += step;
    }

    Err(Error::NonConvergence {
        max_iters: config.max_iters(),
        x,
        residual,
    })
}

/// Runs Halley's method without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<P>(
    polynomial: &P,
    upper_bracket_bound: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    P: SecondDerivative + ?Sized,
{
    solve(polynomial, upper_bracket_bound, config, ())
}

/// Halley's method as a [`RootFinder`].
///
/// Negative roots are reported to the sink as warnings and returned. Errors
/// are reported as fatal diagnostics and returned.
#[derive(Debug, Clone, Copy)]
pub struct Halley<S = LogSink> {
    config: Config,
    sink: S,
}

impl Halley {
    /// Creates a Halley root finder that logs its diagnostics.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, LogSink)
    }
}

impl Default for Halley {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<S> Halley<S> {
    /// Creates a Halley root finder that reports to `sink`.
    pub fn with_sink(config: Config, sink: S) -> Self {
        Self { config, sink }
    }

    /// Returns the solver config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<P, S> RootFinder<P> for Halley<S>
where
    P: SecondDerivative + ?Sized,
    S: DiagnosticSink,
{
    type Error = Error;

    fn get_root(&self, polynomial: &P, upper_bracket_bound: f64) -> Result<f64, Error> {
        let solution = solve_unobserved(polynomial, upper_bracket_bound, &self.config)
            .inspect_err(|error| {
                self.sink
                    .report(&Diagnostic::fatal(format!("Halley's method failed: {error}")));
            })?;

        if solution.status == Status::NegativeRoot {
            self.sink.report(&Diagnostic::warning(format!(
                "Halley's method converged to a negative root x = {}",
                solution.x
            )));
        } else {
            log::debug!(
                target: "radroot",
                "Halley's method converged to x = {} in {} iterations",
                solution.x,
                solution.iters
            );
        }

        Ok(solution.x)
    }
}
