//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across bisection, Newton-Raphson and Halley.
//!
//! # Event traits
//!
//! - [`Iterate`] — events that carry an iteration counter and an iterate
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use radroot_core::Observer;
//! use radroot_observers::traits::{CanStopEarly, Iterate};
//!
//! struct StopAt(usize);
//!
//! impl<E: Iterate, A: CanStopEarly> Observer<E, A> for StopAt {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iter() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use radroot_solvers::{bisection, halley, newton_raphson};

/// An event emitted once per solver iteration.
pub trait Iterate {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;

    /// Returns the point evaluated in this iteration.
    fn x(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual `f(x)` for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

macro_rules! impl_event_traits {
    ($($event:ty),+ $(,)?) => {
        $(
            impl Iterate for $event {
                fn iter(&self) -> usize {
                    self.iter
                }

                fn x(&self) -> f64 {
                    self.x
                }
            }

            impl HasResidual for $event {
                fn residual(&self) -> f64 {
                    self.residual
                }
            }
        )+
    };
}

impl_event_traits!(bisection::Event, newton_raphson::Event, halley::Event);

// --- CanStopEarly impls ---

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton_raphson::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for halley::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
