/// Indicates how a successful bisection solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual at `x` is within the configured tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate. Never negative when `status` is `Converged`.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Iteration count when the solver finished.
    ///
    /// Zero when a bracket endpoint was already a root.
    pub iters: usize,
}
