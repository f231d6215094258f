//! Bisection on `[0, B]` for the energy polynomial.
//!
//! # Algorithm
//!
//! Bisection starts from the bracket `[0, upper_bracket_bound]`, whose
//! residuals must have opposite signs, and repeatedly evaluates the midpoint.
//! A midpoint whose residual is within `tol` is the root. Otherwise the
//! bracket shrinks to the half whose endpoints still have opposite signs.
//!
//! # Failure policy
//!
//! Bisection either returns a non-negative root or an [`Error`]; it never
//! returns a sentinel. A bad initial bracket, a bracket that loses its sign
//! change, a negative root, and running out of iterations are all errors. The
//! [`Bisection`] root finder also reports them to its sink as fatal
//! diagnostics, leaving the decision to terminate to the caller.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the midpoint is
//! evaluated and before the convergence check. Observers can return
//! [`Action::StopEarly`] to return the current midpoint immediately.

mod action;
mod bracket;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use radroot_core::{Diagnostic, DiagnosticSink, LogSink, Observer, Polynomial, RootFinder};

use crate::Config;

use bracket::{Bracket, brackets_root};

/// Finds a root of `polynomial` in `[0, upper_bracket_bound]` by bisection.
///
/// The endpoint residuals must have opposite signs, or one of them must be
/// exactly zero. Once that holds, an endpoint whose residual is already
/// within `config.tol()` is returned with zero iterations, lower endpoint
/// first.
///
/// # Errors
///
/// - [`Error::NonFiniteBound`] if `upper_bracket_bound` is NaN or infinite.
/// - [`Error::InvalidBracket`] if `upper_bracket_bound <= 0`, or if the
///   endpoint residuals share a strict sign (even when one of them is within
///   `tol`), or if either is NaN.
/// - [`Error::BracketInvariantViolated`] if a midpoint residual shares a sign
///   with both endpoints (for example, a NaN residual).
/// - [`Error::NegativeRoot`] if the solver converges below zero.
/// - [`Error::NonConvergence`] if `config.max_iters()` iterations pass without
///   convergence.
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
    if !upper_bracket_bound.is_finite() {
        return Err(Error::NonFiniteBound {
            value: upper_bracket_bound,
        });
    }

    let tol = config.tol();
    let lower_residual = polynomial.value(0.0);
    let upper_residual = polynomial.value(upper_bracket_bound);

    if upper_bracket_bound <= 0.0 || !brackets_root(lower_residual, upper_residual) {
        return Err(Error::InvalidBracket {
            upper: upper_bracket_bound,
            lower_residual,
            upper_residual,
        });
    }

    if lower_residual.abs() < tol {
        return Ok(Solution {
            status: Status::Converged,
            x: 0.0,
            residual: lower_residual,
            iters: 0,
        });
    }

    if upper_residual.abs() < tol {
        return Ok(Solution {
            status: Status::Converged,
            x: upper_bracket_bound,
            residual: upper_residual,
            iters: 0,
        });
    }

    let mut bracket = Bracket::new(0.0, upper_bracket_bound, lower_residual, upper_residual);
    let mut last = (upper_bracket_bound, upper_residual);

    for iter in 1..=config.max_iters() {
        let x = bracket.midpoint();
        let residual = polynomial.value(x);
        last = (x, residual);

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            x,
            residual,
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

        if residual.abs() < tol {
            if x < 0.0 {
                return Err(Error::NegativeRoot { x, residual });
            }
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                iters: iter,
            });
        }

        if !bracket.shrink(x, residual) {
            let [lower, upper] = event.bracket;
            return Err(Error::BracketInvariantViolated {
                lower,
                upper,
                x,
                residual,
            });
        }
    }

    let (x, residual) = last;
    Err(Error::NonConvergence {
        max_iters: config.max_iters(),
        x,
        residual,
    })
}

/// Runs bisection without observation.
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

/// Bisection as a [`RootFinder`].
///
/// Holds the solver [`Config`] and a [`DiagnosticSink`] that receives a fatal
/// diagnostic for every error before it is returned.
#[derive(Debug, Clone, Copy)]
pub struct Bisection<S = LogSink> {
    config: Config,
    sink: S,
}

impl Bisection {
    /// Creates a bisection root finder that logs its diagnostics.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, LogSink)
    }
}

impl Default for Bisection {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<S> Bisection<S> {
    /// Creates a bisection root finder that reports to `sink`.
    pub fn with_sink(config: Config, sink: S) -> Self {
        Self { config, sink }
    }

    /// Returns the solver config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<P, S> RootFinder<P> for Bisection<S>
where
    P: Polynomial + ?Sized,
    S: DiagnosticSink,
{
    type Error = Error;

    /// Returns a non-negative root in `[0, upper_bracket_bound]`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`solve`], each reported to the sink as a
    /// fatal diagnostic first.
    fn get_root(&self, polynomial: &P, upper_bracket_bound: f64) -> Result<f64, Error> {
        match solve_unobserved(polynomial, upper_bracket_bound, &self.config) {
            Ok(solution) => {
                log::debug!(
                    target: "radroot",
                    "bisection converged to x = {} in {} iterations",
                    solution.x,
                    solution.iters
                );
                Ok(solution.x)
            }
            Err(error) => {
                self.sink
                    .report(&Diagnostic::fatal(format!("bisection failed: {error}")));
                Err(error)
            }
        }
    }
}
