//! Annealing configuration.

/// Configuration for the simulated-annealing search.
///
/// The initial temperature and per-temperature iteration count come from the
/// active instance profile; the remaining fields default to the values the
/// pipeline ships with.
///
/// # Examples
///
/// ```
/// use tsp_stitch::annealing::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(1e8)
///     .with_iterations_per_temperature(75_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// The descent stops once the temperature drops to this value or below.
    pub min_temperature: f64,

    /// Number of swap neighbors evaluated at each temperature level.
    pub iterations_per_temperature: usize,

    /// Number of full random shuffles in the warm-up phase.
    pub warmup_shuffles: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1e9,
            min_temperature: 0.01,
            iterations_per_temperature: 100_000,
            warmup_shuffles: 1000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_warmup_shuffles(mut self, n: usize) -> Self {
        self.warmup_shuffles = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive and finite".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 1e9).abs() < 1e-3);
        assert!((config.min_temperature - 0.01).abs() < 1e-12);
        assert_eq!(config.iterations_per_temperature, 100_000);
        assert_eq!(config.warmup_shuffles, 1000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        assert!(AnnealConfig::default()
            .with_initial_temperature(-1.0)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_initial_temperature(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = AnnealConfig::default()
            .with_initial_temperature(950_000.0)
            .with_iterations_per_temperature(6000)
            .with_seed(9);
        assert_eq!(config.iterations_per_temperature, 6000);
        assert_eq!(config.seed, Some(9));
    }
}
