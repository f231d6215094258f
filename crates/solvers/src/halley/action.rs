/// Control actions supported by the Halley solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current iterate immediately.
    StopEarly,
}
