use thiserror::Error;

/// Errors that can occur during bisection solving.
///
/// Every variant is a failure that the bracketing contract treats as fatal:
/// bisection either returns a non-negative root or one of these errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("upper bracket bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error(
        "invalid initial bracket [0, {upper}]: f(0) = {lower_residual}, f({upper}) = {upper_residual}"
    )]
    InvalidBracket {
        upper: f64,
        lower_residual: f64,
        upper_residual: f64,
    },

    #[error("bracket [{lower}, {upper}] lost its sign change: f({x}) = {residual}")]
    BracketInvariantViolated {
        lower: f64,
        upper: f64,
        x: f64,
        residual: f64,
    },

    #[error("failed to converge within {max_iters} iterations: f({x}) = {residual}")]
    NonConvergence {
        max_iters: usize,
        x: f64,
        residual: f64,
    },

    #[error("converged to a negative root: f({x}) = {residual}")]
    NegativeRoot { x: f64, residual: f64 },
}
