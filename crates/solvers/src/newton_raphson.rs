//! Newton-Raphson iteration for the energy polynomial.
//!
//! # Algorithm
//!
//! Starting from `x₀ = upper_bracket_bound / 2`, each iteration evaluates
//! `f(x)` and `f'(x)` and takes the step `dx = -f(x) / f'(x)`. The iteration
//! converges when `|f(x)| < tol` or `|dx| < tol · x`, and the converged value
//! is the current `x` (the final step is not applied).
//!
//! # Failure policy
//!
//! Unlike [`bisection`](crate::bisection), Newton-Raphson always hands
//! control back to the caller:
//!
//! - A negative converged root is reported as [`Status::NegativeRoot`] and
//!   still returned.
//! - Running out of iterations is reported as [`Status::MaxIters`]; the
//!   [`NewtonRaphson`] root finder then returns [`NO_CONVERGENCE`].
//! - A vanishing derivative or a non-finite step is an [`Error`] instead of a
//!   NaN or infinite iterate.
//!
//! The [`NewtonRaphson`] root finder reports each of these to its sink as a
//! warning. Callers must validate the value it returns.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the step is computed
//! and before any convergence or failure check. Observers can return
//! [`Action::StopEarly`] to return the current iterate immediately.

mod action;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use radroot_core::{Diagnostic, DiagnosticSink, LogSink, Observer, Polynomial, RootFinder};

use crate::Config;

/// Value returned by [`NewtonRaphson::get_root`] when the iteration does not
/// converge.
pub const NO_CONVERGENCE: f64 = -1.0;

/// Runs Newton-Raphson on `polynomial` from `upper_bracket_bound / 2`.
///
/// When the iteration limit is reached, the returned solution's `x` is the
/// iterate after the final step, while `residual`, `derivative` and `step`
/// describe the point that step was taken from.
///
/// # Errors
///
/// - [`Error::NonFiniteGuess`] if the initial guess is NaN or infinite.
/// - [`Error::ZeroDerivative`] if `f'(x) == 0` at an unconverged iterate.
/// - [`Error::NonFiniteStep`] if the step is NaN or infinite.
pub fn solve<P, Obs>(
    polynomial: &P,
    upper_bracket_bound: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: Polynomial + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut x = 0.5 * upper_bracket_bound;
    if !x.is_finite() {
        return Err(Error::NonFiniteGuess { value: x });
    }

    let tol = config.tol();
    let (mut residual, mut derivative, mut step) = (f64::NAN, f64::NAN, f64::NAN);

    for iter in 1..=config.max_iters() {
        residual = polynomial.value(x);
        derivative = polynomial.derivative(x);
        step = -residual / derivative;

        let finish = |status| Solution {
            status,
            x,
            residual,
            derivative,
            step,
            iters: iter,
        };

        let event = Event {
            iter,
            x,
            residual,
            derivative,
            step,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => return Ok(finish(Status::StoppedByObserver)),
            }
        }

        let converged = if residual.abs() < tol {
            true
        } else {
            #[allow(clippy::float_cmp)]
            if derivative == 0.0 {
                return Err(Error::ZeroDerivative { x, residual });
            }
            if !step.is_finite() {
                return Err(Error::NonFiniteStep {
                    x,
                    residual,
                    derivative,
                });
            }
            step.abs() < tol * x
        };

        if converged {
            let status = if x < 0.0 {
                Status::NegativeRoot
            } else {
                Status::Converged
            };
            return Ok(finish(status));
        }

        x += step;
    }

    Ok(Solution {
        status: Status::MaxIters,
        x,
        residual,
        derivative,
        step,
        iters: config.max_iters(),
    })
}

/// Runs Newton-Raphson without observation.
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
    P: Polynomial + ?Sized,
{
    solve(polynomial, upper_bracket_bound, config, ())
}

/// Newton-Raphson as a [`RootFinder`].
///
/// Holds the solver [`Config`] and a [`DiagnosticSink`] that receives a
/// warning for every negative root, non-convergence, or error.
#[derive(Debug, Clone, Copy)]
pub struct NewtonRaphson<S = LogSink> {
    config: Config,
    sink: S,
}

impl NewtonRaphson {
    /// Creates a Newton-Raphson root finder that logs its diagnostics.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, LogSink)
    }
}

impl Default for NewtonRaphson {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<S> NewtonRaphson<S> {
    /// Creates a Newton-Raphson root finder that reports to `sink`.
    pub fn with_sink(config: Config, sink: S) -> Self {
        Self { config, sink }
    }

    /// Returns the solver config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<P, S> RootFinder<P> for NewtonRaphson<S>
where
    P: Polynomial + ?Sized,
    S: DiagnosticSink,
{
    type Error = Error;

    /// Returns the converged iterate, which may be negative, or
    /// [`NO_CONVERGENCE`] if the iteration limit is reached.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`solve`], each reported to the sink as a
    /// warning first.
    fn get_root(&self, polynomial: &P, upper_bracket_bound: f64) -> Result<f64, Error> {
        let solution = solve_unobserved(polynomial, upper_bracket_bound, &self.config)
            .inspect_err(|error| {
                self.sink
                    .report(&Diagnostic::warning(format!("Newton-Raphson failed: {error}")));
            })?;

        match solution.status {
            Status::Converged | Status::StoppedByObserver => {
                log::debug!(
                    target: "radroot",
                    "Newton-Raphson converged to x = {} in {} iterations",
                    solution.x,
                    solution.iters
                );
            }
            Status::NegativeRoot => {
                self.sink.report(&Diagnostic::warning(format!(
                    "Newton-Raphson converged to a negative root x = {}",
                    solution.x
                )));
            }
            Status::MaxIters => {
                self.sink.report(&Diagnostic::warning(format!(
                    "Newton-Raphson failed to converge with max_iters = {}: \
                     last x = {}, dx = {}, f = {}, f' = {}",
                    solution.iters, solution.x, solution.step, solution.residual, solution.derivative
                )));
            }
        }

        Ok(solution.root())
    }
}
