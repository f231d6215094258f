//! Reusable observers for the energy root finders.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in `radroot-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`Iterate`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — traces each iteration through the `log` facade
//! - [`History`] — records every iterate for later inspection
//! - [`ResidualTarget`] — stops a solver once the residual is small enough
//!
//! [`Observer`]: radroot_core::Observer
//! [`Iterate`]: traits::Iterate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod log_observer;
mod residual_target;

pub use history::{History, Record};
pub use log_observer::LogObserver;
pub use residual_target::ResidualTarget;
