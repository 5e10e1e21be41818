//! Simulation configuration.

/// Configuration for a batch of headless games.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play back to back
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Ticks after which a still-running game is abandoned
    pub max_ticks_per_run: u64,

    /// Best score the store starts with
    pub starting_best: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ticks_per_run: 60 * 60 * 5, // five minutes of play
            starting_best: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.num_runs, 100);
        assert!(config.seed.is_none());
        assert_eq!(config.max_ticks_per_run, 18_000);
    }
}
