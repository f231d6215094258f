use thiserror::Error;

/// Convergence settings shared by every energy root finder.
///
/// `tol` is an absolute tolerance. Bisection compares it against the
/// midpoint residual, while the open methods also accept a step smaller than
/// `tol · x`. `max_iters` is the only bound on the work done by a single call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct Config {
    max_iters: usize,
    tol: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tol must be finite and positive, got {0}")]
    Tol(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite or not strictly positive.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol(tol));
        }

        Ok(Self { max_iters, tol })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute convergence tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}

/// Unvalidated config fields, checked by [`Config::new`] on deserialize.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    max_iters: usize,
    tol: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_iters, raw.tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(Config::new(config.max_iters(), config.tol()), Ok(config));
    }

    #[test]
    fn rejects_bad_tolerances() {
        for tol in [0.0, -1e-9, f64::NAN, f64::INFINITY] {
            assert!(matches!(Config::new(10, tol), Err(ConfigError::Tol(_))));
        }
    }

    #[test]
    fn allows_zero_iterations() {
        let config = Config::new(0, 1e-6).expect("valid config");
        assert_eq!(config.max_iters(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates() {
        let config: Config =
            serde_json::from_str(r#"{ "max_iters": 50, "tol": 1e-10 }"#).expect("valid json");
        assert_eq!(config, Config::new(50, 1e-10).expect("valid config"));

        let err = serde_json::from_str::<Config>(r#"{ "max_iters": 50, "tol": -1.0 }"#);
        assert!(err.is_err());
    }
}
