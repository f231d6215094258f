use radroot_core::Observer;

use crate::traits::{CanStopEarly, HasResidual, Iterate};

/// Stops a solver once `|f(x)|` falls below a looser target than its config.
///
/// Useful when a caller wants a cheap estimate without building a second
/// solver config. The check is skipped until `min_iters` iterations have run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualTarget {
    target: f64,
    min_iters: usize,
}

impl ResidualTarget {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            min_iters: 0,
        }
    }

    /// Requires at least `min_iters` iterations before stopping.
    #[must_use]
    pub fn with_min_iters(self, min_iters: usize) -> Self {
        Self { min_iters, ..self }
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<E, A> Observer<E, A> for ResidualTarget
where
    E: Iterate + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() >= self.min_iters && event.residual().abs() < self.target)
            .then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use radroot_core::EnergyPolynomial;
    use radroot_solvers::{Config, bisection, newton_raphson};

    #[test]
    fn stops_bisection_early() {
        let p = EnergyPolynomial::new(1.0, 2.0, -10.0);
        let config = Config::default();

        let full = bisection::solve_unobserved(&p, 4.0, &config).expect("converges");
        let early =
            bisection::solve(&p, 4.0, &config, ResidualTarget::new(1e-3)).expect("stops early");

        assert_eq!(early.status, bisection::Status::StoppedByObserver);
        assert!(early.residual.abs() < 1e-3);
        assert!(early.iters < full.iters);
    }

    #[test]
    fn respects_min_iters() {
        // The first Newton iterate is already the root.
        let p = EnergyPolynomial::new(1.0, 0.0, -1.0);
        let observer = ResidualTarget::new(1.0).with_min_iters(2);

        let solution =
            newton_raphson::solve(&p, 2.0, &Config::default(), observer).expect("converges");

        assert_eq!(solution.status, newton_raphson::Status::Converged);
        assert_eq!(solution.iters, 1);
    }
}
