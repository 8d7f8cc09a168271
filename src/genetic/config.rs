//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds the run-level parameters: population size,
//! optimization direction, and the initial seed.

use super::types::{Method, Options};
use crate::random::Seed;

/// Population size used when none is given.
pub const DEFAULT_POPULATION_SIZE: usize = 20;

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
}

/// Configuration for an evolution run.
///
/// # Population size
///
/// Each generation keeps the better half of the population and turns every
/// adjacent pair of survivors into four organisms, so a size that is a
/// multiple of 4 stays constant. Other sizes are accepted but the population
/// shrinks (an odd survivor count drops one organism per generation).
///
/// # Examples
///
/// ```
/// use u_evolve::genetic::{EvolutionConfig, Method};
/// use u_evolve::random::Seed;
///
/// let config = EvolutionConfig::new(Seed::new(42))
///     .with_population_size(40)
///     .with_method(Method::MinimizePenalty);
///
/// assert_eq!(config.half_population_size(), 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of organisms per generation.
    pub population_size: usize,

    /// Whether higher or lower points are better.
    pub method: Method,

    /// Initial generator state. The whole run is a function of this value.
    pub seed: Seed,
}

impl EvolutionConfig {
    /// Creates a configuration with the default population size and
    /// [`Method::MaximizeScore`].
    pub fn new(seed: Seed) -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            method: Method::MaximizeScore,
            seed,
        }
    }

    /// Takes the seed and method from `options`, with the default population
    /// size.
    pub fn from_options<D>(options: &Options<D>) -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            method: options.method,
            seed: options.initial_seed,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the optimization direction.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the initial seed.
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Number of survivors kept each generation: half the population,
    /// rounded up.
    pub fn half_population_size(&self) -> usize {
        self.population_size.div_ceil(2)
    }

    /// Returns `true` if the population size is preserved across generations.
    pub fn is_size_stable(&self) -> bool {
        self.population_size % 4 == 0
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        Ok(())
    }
}
