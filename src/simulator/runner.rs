//! Main simulation runner.
//!
//! Drives a real `ProfileStore` over an in-memory backend so the numbers
//! come from the same transitions the game uses.

use super::config::SimConfig;
use super::policy::manage_between_fights;
use super::report::{RunStats, SimReport};
use crate::combat::TurnOutcome;
use crate::store::{MemoryStore, ProfileStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let run_seed = match config.seed {
            Some(seed) => seed.wrapping_add(run_idx as u64),
            None => rand::random(),
        };

        let run_stats = simulate_single_run(config, run_seed);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Zone {}, Wins {}, Losses {}, Chests {}, Research {}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_zone,
                run_stats.wins,
                run_stats.losses,
                run_stats.chests_opened,
                run_stats.research_level
            );
        }
        all_runs.push(run_stats);
    }

    info!(runs = all_runs.len(), "simulation finished");
    SimReport::from_runs(all_runs, config.target_zone)
}

/// Play one fresh profile until it reaches the target zone or runs out of turns.
pub fn simulate_single_run(config: &SimConfig, seed: u64) -> RunStats {
    let mut player_rng = StdRng::seed_from_u64(seed);
    let mut store = ProfileStore::with_seed(MemoryStore::new(), !seed);
    let hit_rate = config.hit_probability();
    let mut stats = RunStats::default();

    'run: while store.state().zone < config.target_zone {
        if stats.turns >= config.max_turns_per_run || store.start_combat().is_err() {
            break;
        }

        loop {
            if stats.turns >= config.max_turns_per_run {
                break 'run;
            }
            stats.turns += 1;
            match store.resolve_turn(player_rng.gen_bool(hit_rate)) {
                Ok(TurnOutcome::Continuing { .. }) => {}
                Ok(TurnOutcome::Victory { .. }) => {
                    stats.wins += 1;
                    break;
                }
                Ok(TurnOutcome::Defeat { .. }) => {
                    stats.losses += 1;
                    break;
                }
                Err(_) => break 'run,
            }
        }

        manage_between_fights(&mut store, config.research_reserve, &mut stats);
    }

    let state = store.state();
    stats.final_zone = state.zone;
    stats.reached_target = state.zone >= config.target_zone;
    stats.research_level = state.research.level;
    stats.premium = state.is_premium;
    stats
}
