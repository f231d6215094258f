use thiserror::Error;

/// Errors that can occur during Halley solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },

    #[error("zero step denominator at x = {x} (f(x) = {residual})")]
    ZeroDenominator { x: f64, residual: f64 },

    #[error("non-finite step at x = {x} (f(x) = {residual})")]
    NonFiniteStep { x: f64, residual: f64 },

    #[error("failed to converge within {max_iters} iterations: last x = {x}, f = {residual}")]
    NonConvergence {
        max_iters: usize,
        x: f64,
        residual: f64,
    },
}
