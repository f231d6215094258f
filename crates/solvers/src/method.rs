use std::{fmt, str::FromStr};

use thiserror::Error;

use radroot_core::{DiagnosticSink, LogSink, RootFinder, SecondDerivative};

use crate::{
    Config,
    bisection::{self, Bisection},
    halley::{self, Halley},
    newton_raphson::{self, NewtonRaphson},
};

/// The root-finding algorithm a [`Solver`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Method {
    #[default]
    Bisection,
    NewtonRaphson,
    Halley,
}

impl Method {
    /// Every available method.
    pub const ALL: [Method; 3] = [Method::Bisection, Method::NewtonRaphson, Method::Halley];

    /// Returns the method's canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bisection => "bisection",
            Self::NewtonRaphson => "newton_raphson",
            Self::Halley => "halley",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Method`] name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown root-finding method: {0:?}")]
pub struct ParseMethodError(String);

impl FromStr for Method {
    type Err = ParseMethodError;

    /// Parses a method name, ignoring case and treating `-` like `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "bisection" => Ok(Self::Bisection),
            "newton_raphson" | "newton" => Ok(Self::NewtonRaphson),
            "halley" => Ok(Self::Halley),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}

/// Errors from whichever method a [`Solver`] ran.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SolverError {
    #[error(transparent)]
    Bisection(#[from] bisection::Error),

    #[error(transparent)]
    NewtonRaphson(#[from] newton_raphson::Error),

    #[error(transparent)]
    Halley(#[from] halley::Error),
}

/// A [`RootFinder`] whose algorithm is chosen at runtime.
///
/// Each call behaves exactly like the selected method's own root finder,
/// including its failure policy and its diagnostics.
///
/// The polynomial must implement [`SecondDerivative`] whichever method is
/// selected, because the method is only known at runtime. A type that only
/// implements [`Polynomial`](radroot_core::Polynomial) can use
/// [`Bisection`] or [`NewtonRaphson`] directly.
#[derive(Debug, Clone, Copy)]
pub struct Solver<S = LogSink> {
    method: Method,
    config: Config,
    sink: S,
}

impl Solver {
    /// Creates a solver that logs its diagnostics.
    #[must_use]
    pub fn new(method: Method, config: Config) -> Self {
        Self::with_sink(method, config, LogSink)
    }
}

impl<S> Solver<S> {
    /// Creates a solver that reports to `sink`.
    pub fn with_sink(method: Method, config: Config, sink: S) -> Self {
        Self {
            method,
            config,
            sink,
        }
    }

    /// Returns the selected method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the solver config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<P, S> RootFinder<P> for Solver<S>
where
    P: SecondDerivative + ?Sized,
    S: DiagnosticSink,
{
    type Error = SolverError;

    fn get_root(&self, polynomial: &P, upper_bracket_bound: f64) -> Result<f64, SolverError> {
        let sink = &self.sink;
        match self.method {
            Method::Bisection => Bisection::with_sink(self.config, sink)
                .get_root(polynomial, upper_bracket_bound)
                .map_err(SolverError::from),
            Method::NewtonRaphson => NewtonRaphson::with_sink(self.config, sink)
                .get_root(polynomial, upper_bracket_bound)
                .map_err(SolverError::from),
            Method::Halley => Halley::with_sink(self.config, sink)
                .get_root(polynomial, upper_bracket_bound)
                .map_err(SolverError::from),
        }
    }
}
