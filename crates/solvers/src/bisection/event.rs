/// Event emitted by the bisection solver once per iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,

    /// Search bracket the midpoint was taken from.
    pub bracket: [f64; 2],

    /// The midpoint that was evaluated.
    pub x: f64,

    /// Residual `f(x)` at the midpoint.
    pub residual: f64,
}
