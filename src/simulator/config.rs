//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated profiles
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Zone a run must reach to count as complete
    pub target_zone: u32,

    /// Chance that the scripted player answers correctly
    pub hit_rate: f64,

    /// Maximum turns per run before it is cut off
    pub max_turns_per_run: u64,

    /// Coins kept back when buying research, so chests stay affordable
    pub research_reserve: u64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            target_zone: 50,
            hit_rate: 0.75,
            max_turns_per_run: 20_000,
            research_reserve: 400,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking early-zone pacing
    pub fn quick(target_zone: u32) -> Self {
        Self {
            num_runs: 50,
            target_zone,
            max_turns_per_run: 5_000,
            ..Default::default()
        }
    }

    /// `hit_rate` clamped to a valid probability.
    pub fn hit_probability(&self) -> f64 {
        if self.hit_rate.is_nan() {
            0.0
        } else {
            self.hit_rate.clamp(0.0, 1.0)
        }
    }
}
