//! Core traits and types for the radiation-closure energy root finders.
//!
//! This crate defines the shared abstractions the solvers and observers build
//! on:
//!
//! - [`Polynomial`], [`SecondDerivative`] — the numeric interface a solver
//!   needs from the function it solves
//! - [`EnergyPolynomial`] — the closure polynomial `c4·x⁴ + c1·x + c0`
//! - [`RootFinder`] — the `get_root` contract shared by every solver
//! - [`DiagnosticSink`] — receives warning and fatal [`Diagnostic`]s
//! - [`Observer`] — receives solver events and optionally returns control actions

mod diagnostic;
mod observer;
mod polynomial;
mod root_finder;

pub use diagnostic::{Diagnostic, DiagnosticSink, LogSink, Recorder, Severity};
pub use observer::Observer;
pub use polynomial::{EnergyPolynomial, Polynomial, SecondDerivative};
pub use root_finder::RootFinder;
