/// A real function of one variable with an analytic first derivative.
///
/// Implementations must be deterministic and total over the reals: any `x`,
/// including negative values, must produce a value (possibly non-finite)
/// rather than panic.
pub trait Polynomial {
    /// Evaluates `f(x)`.
    fn value(&self, x: f64) -> f64;

    /// Evaluates `f'(x)`.
    fn derivative(&self, x: f64) -> f64;
}

/// A [`Polynomial`] that also provides its second derivative.
///
/// Only the Halley solver requires this.
pub trait SecondDerivative: Polynomial {
    /// Evaluates `f''(x)`.
    fn second_derivative(&self, x: f64) -> f64;
}

/// The radiation-closure energy polynomial `f(x) = c4·x⁴ + c1·x + c0`.
///
/// A non-negative root of this polynomial is the radiation energy density
/// that satisfies the closure relation in a mesh cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyPolynomial {
    /// Quartic coefficient.
    pub c4: f64,
    /// Linear coefficient.
    pub c1: f64,
    /// Constant term.
    pub c0: f64,
}

impl EnergyPolynomial {
    /// Creates the polynomial `c4·x⁴ + c1·x + c0`.
    #[must_use]
    pub const fn new(c4: f64, c1: f64, c0: f64) -> Self {
        Self { c4, c1, c0 }
    }
}

impl Polynomial for EnergyPolynomial {
    fn value(&self, x: f64) -> f64 {
        self.c4 * x.powi(4) + self.c1 * x + self.c0
    }

    fn derivative(&self, x: f64) -> f64 {
        4.0 * self.c4 * x.powi(3) + self.c1
    }
}

impl SecondDerivative for EnergyPolynomial {
    fn second_derivative(&self, x: f64) -> f64 {
        12.0 * self.c4 * x * x
    }
}
