use crate::error::{ForecastError, Result};

// Every knob of the model and the simulation lives here. Engine functions take it by reference,
// so two runs with the same context (and a seed) are directly comparable.
#[derive(Debug, Clone)]
pub struct ForecastContext {
    // Rates assumed for a team without a single completed game
    pub default_regulation_rate: f64,
    pub default_extended_rate: f64,
    pub default_sample_size: u32,

    // Regulation win probability for both sides when neither has won a game in regulation
    pub fallback_regulation_probability: f64,
    pub rate_epsilon: f64,

    pub trials: u64,
    pub cutoff: usize,
    pub seed: Option<u64>,
    pub workers: usize,     // Number of independent chunks, not threads. Fixes the seed layout
}

impl Default for ForecastContext {
    fn default() -> Self {
        Self {
            default_regulation_rate: 0.5,
            default_extended_rate: 0.5,
            default_sample_size: 1,

            fallback_regulation_probability: 0.3,
            rate_epsilon: 1e-9,

            trials: 1_000_000,
            cutoff: 12,
            seed: None,
            workers: 64,
        }
    }
}

impl ForecastContext {
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(ForecastError::InvalidParameter("trials must be at least 1".to_string()));
        }
        if self.cutoff == 0 {
            return Err(ForecastError::InvalidParameter("cutoff rank is 1-based and must be at least 1".to_string()));
        }
        if self.workers == 0 {
            return Err(ForecastError::InvalidParameter("workers must be at least 1".to_string()));
        }
        if !(0.0..=0.5).contains(&self.fallback_regulation_probability) {
            return Err(ForecastError::InvalidParameter(
                "fallback regulation probability must be between 0.0 and 0.5".to_string(),
            ));
        }
        Ok(())
    }
}
