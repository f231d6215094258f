use super::NO_CONVERGENCE;

/// Indicates how a Newton-Raphson solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged to a non-negative root.
    Converged,

    /// Converged, but to a negative (unphysical) root.
    NegativeRoot,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton-Raphson solve.
///
/// Holds the last iterate and the values computed there, which is what the
/// non-convergence warning reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last iterate.
    pub x: f64,

    /// Residual at the last evaluated iterate.
    ///
    /// That iterate is `x`, or `x - step` when the status is [`Status::MaxIters`].
    pub residual: f64,

    /// Derivative at the last evaluated iterate.
    pub derivative: f64,

    /// The last computed step.
    pub step: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Returns the value `get_root` hands back for this solution.
    ///
    /// This is `x` for every status except [`Status::MaxIters`], which maps to
    /// the sentinel [`NO_CONVERGENCE`].
    #[must_use]
    pub fn root(&self) -> f64 {
        match self.status {
            Status::MaxIters => NO_CONVERGENCE,
            Status::Converged | Status::NegativeRoot | Status::StoppedByObserver => self.x,
        }
    }
}
