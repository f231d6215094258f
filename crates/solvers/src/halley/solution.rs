/// Indicates how a successful Halley solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged to a non-negative root.
    Converged,

    /// Converged, but to a negative (unphysical) root.
    NegativeRoot,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Halley solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last iterate.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}
