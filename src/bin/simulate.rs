//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 200 runs to zone 50
//!   cargo run --bin simulate -- -n 100 -z 10    # 100 runs to zone 10
//!   cargo run --bin simulate -- --seed 42       # Reproducible run

use hugoland::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json_output) = parse_args(&args);

    if json_output {
        println!("{}", run_simulation(&config).to_json());
        return;
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              HUGOLAND BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Target Zone:    {}", config.target_zone);
    println!("  Hit Rate:       {:.0}%", config.hit_probability() * 100.0);
    println!("  Max Turns:      {}", config.max_turns_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json_output = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(config.num_runs);
                    i += 1;
                }
            }
            "-z" | "--zone" => {
                if i + 1 < args.len() {
                    config.target_zone = args[i + 1].parse().unwrap_or(config.target_zone);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--hit-rate" => {
                if i + 1 < args.len() {
                    config.hit_rate = args[i + 1].parse().unwrap_or(config.hit_rate);
                    i += 1;
                }
            }
            "-t" | "--turns" => {
                if i + 1 < args.len() {
                    config.max_turns_per_run =
                        args[i + 1].parse().unwrap_or(config.max_turns_per_run);
                    i += 1;
                }
            }
            "--reserve" => {
                if i + 1 < args.len() {
                    config.research_reserve =
                        args[i + 1].parse().unwrap_or(config.research_reserve);
                    i += 1;
                }
            }
            "--json" => {
                json_output = true;
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick(10);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, json_output)
}

fn print_help() {
    println!("Hugoland Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 200)");
    println!("    -z, --zone <Z>      Target zone to reach (default: 50)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    --hit-rate <P>      Chance of a correct answer, 0.0-1.0 (default: 0.75)");
    println!("    -t, --turns <T>     Max turns per run (default: 20,000)");
    println!("    --reserve <C>       Coins kept back when buying research (default: 400)");
    println!("    --json              Print the report as JSON");
    println!("    --quick             Quick test (50 runs to zone 10)");
    println!("    -v, --verbose       Per-run output");
    println!("    -h, --help          Show this help");
}
