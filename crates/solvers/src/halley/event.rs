/// Event emitted by the Halley solver once per iteration.
///
/// The event is emitted after the step is computed and before any
/// convergence or failure check, so `step` may be non-finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The current iterate.
    pub x: f64,

    /// Residual `f(x)`.
    pub residual: f64,

    /// Derivative `f'(x)`.
    pub derivative: f64,

    /// Second derivative `f''(x)`.
    pub second_derivative: f64,

    /// Halley step `-(2·f·f') / (2·f'² − f·f'')`.
    pub step: f64,
}
