/// Current bracket bounds and the residuals at each bound.
///
/// The residuals are carried with the bounds so each iteration evaluates the
/// polynomial exactly once, at the midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    lower: f64,
    upper: f64,
    lower_residual: f64,
    upper_residual: f64,
}

impl Bracket {
    /// Creates a bracket from its bounds and their residuals.
    pub(super) fn new(lower: f64, upper: f64, lower_residual: f64, upper_residual: f64) -> Self {
        Self {
            lower,
            upper,
            lower_residual,
            upper_residual,
        }
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Shrinks the bracket to the half that still holds a sign change.
    ///
    /// The upper bound moves to `x` when `residual` has the opposite sign of
    /// the lower residual, otherwise the lower bound moves when it has the
    /// opposite sign of the upper residual. Returns false and leaves the
    /// bracket unchanged if neither half holds a strict sign change, which
    /// includes a NaN residual.
    #[must_use]
    pub(super) fn shrink(&mut self, x: f64, residual: f64) -> bool {
        if opposite_signs(self.lower_residual, residual) {
            self.upper = x;
            self.upper_residual = residual;
            true
        } else if opposite_signs(self.upper_residual, residual) {
            self.lower = x;
            self.lower_residual = residual;
            true
        } else {
            false
        }
    }
}

/// Returns true if one value is strictly positive and the other strictly
/// negative.
///
/// Comparing signs instead of testing `a * b < 0.0` keeps tiny residuals from
/// underflowing to a zero product.
pub(super) fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}

/// Returns true if the endpoint residuals bracket a root, meaning they have
/// opposite signs or at least one is exactly zero. NaN never brackets.
#[allow(clippy::float_cmp)]
pub(super) fn brackets_root(lower: f64, upper: f64) -> bool {
    if lower.is_nan() || upper.is_nan() {
        return false;
    }
    opposite_signs(lower, upper) || lower == 0.0 || upper == 0.0
}
