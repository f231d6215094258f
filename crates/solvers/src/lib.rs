//! Root finders for the radiation-closure energy polynomial.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on the bracket `[0, upper_bracket_bound]`
//! - [`newton_raphson`] — fast local iteration that always returns control
//! - [`halley`] — cubically convergent iteration using the second derivative
//!
//! Each solver module offers a `solve` function that accepts an
//! [`Observer`](radroot_core::Observer) and a root-finder type implementing
//! [`RootFinder`](radroot_core::RootFinder). [`Solver`] picks one of them at
//! runtime from a [`Method`].

mod config;
mod method;

pub mod bisection;
pub mod halley;
pub mod newton_raphson;

pub use config::{Config, ConfigError};
pub use method::{Method, ParseMethodError, Solver, SolverError};
