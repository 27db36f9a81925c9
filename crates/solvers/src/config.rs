use thiserror::Error;

/// Configuration shared by all search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }
}

impl Config {
    /// Iteration cap used by [`Config::default`].
    pub const DEFAULT_MAX_ITERS: usize = 1000;

    /// Creates a new config with a validated iteration cap.
    ///
    /// The cap guards against parameter combinations where floating-point
    /// rounding keeps the bracket from ever reaching the minimum length.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn new(max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self { max_iters })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
