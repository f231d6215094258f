/// The `get_root` contract shared by every energy root finder.
///
/// A root finder searches for a root of `polynomial` using
/// `upper_bracket_bound` either as the upper edge of the search interval
/// `[0, upper_bracket_bound]` or to seed an initial guess. Implementations are
/// interchangeable, so closure code can hold any `RootFinder` without knowing
/// which algorithm runs.
///
/// Implementations differ in what a successful return guarantees. A
/// bracketing solver only returns non-negative roots, while an open method may
/// return a sentinel or a negative value after reporting a warning. Consult the
/// implementing type before trusting the returned value.
pub trait RootFinder<P: ?Sized> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Finds a root of `polynomial` guided by `upper_bracket_bound`.
    ///
    /// # Errors
    ///
    /// Each implementation defines the conditions it treats as failures.
    fn get_root(&self, polynomial: &P, upper_bracket_bound: f64) -> Result<f64, Self::Error>;
}
