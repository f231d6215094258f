use thiserror::Error;

/// Errors that can occur during Newton-Raphson solving.
///
/// Non-convergence and negative roots are not errors here; they are reported
/// through [`Status`](super::Status) so the caller keeps control.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },

    /// The derivative vanished, so the Newton step would divide by zero.
    #[error("zero derivative at x = {x} (f(x) = {residual})")]
    ZeroDerivative { x: f64, residual: f64 },

    #[error("non-finite step at x = {x}: f(x) = {residual}, f'(x) = {derivative}")]
    NonFiniteStep {
        x: f64,
        residual: f64,
        derivative: f64,
    },
}
