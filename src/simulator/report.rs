//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a single simulated profile.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStats {
    pub final_zone: u32,
    pub reached_target: bool,
    pub wins: u64,
    pub losses: u64,
    pub turns: u64,
    pub chests_opened: u64,
    pub upgrades: u64,
    pub gear_swaps: u64,
    pub coins_from_sales: u64,
    pub research_level: u32,
    pub premium: bool,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimReport {
    pub num_runs: u32,
    pub target_zone: u32,
    pub runs_reached_target: u32,

    pub avg_final_zone: f64,
    pub max_final_zone: u32,
    pub avg_wins: f64,
    pub avg_losses: f64,
    pub avg_turns: f64,
    pub avg_chests_opened: f64,
    pub avg_upgrades: f64,
    pub avg_gear_swaps: f64,
    pub avg_research_level: f64,
    pub premium_rate: f64,

    pub zone_distribution: BTreeMap<u32, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], field: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(field).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, target_zone: u32) -> Self {
        let num_runs = runs.len() as u32;
        let runs_reached_target = runs.iter().filter(|r| r.reached_target).count() as u32;
        let premium_runs = runs.iter().filter(|r| r.premium).count();

        let mut zone_distribution = BTreeMap::new();
        for run in &runs {
            *zone_distribution.entry(run.final_zone).or_insert(0) += 1;
        }

        Self {
            num_runs,
            target_zone,
            runs_reached_target,
            avg_final_zone: average(&runs, |r| r.final_zone as f64),
            max_final_zone: runs.iter().map(|r| r.final_zone).max().unwrap_or(0),
            avg_wins: average(&runs, |r| r.wins as f64),
            avg_losses: average(&runs, |r| r.losses as f64),
            avg_turns: average(&runs, |r| r.turns as f64),
            avg_chests_opened: average(&runs, |r| r.chests_opened as f64),
            avg_upgrades: average(&runs, |r| r.upgrades as f64),
            avg_gear_swaps: average(&runs, |r| r.gear_swaps as f64),
            avg_research_level: average(&runs, |r| r.research_level as f64),
            premium_rate: premium_runs as f64 / num_runs.max(1) as f64,
            zone_distribution,
            run_stats: runs,
        }
    }

    pub fn completion_rate(&self) -> f64 {
        self.runs_reached_target as f64 / self.num_runs.max(1) as f64
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} | Reached zone {}: {} ({:.1}%)\n\n",
            self.num_runs,
            self.target_zone,
            self.runs_reached_target,
            self.completion_rate() * 100.0
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Zone:    {:.1} (max {})\n",
            self.avg_final_zone, self.max_final_zone
        ));
        report.push_str(&format!("  Avg Wins:          {:.1}\n", self.avg_wins));
        report.push_str(&format!("  Avg Losses:        {:.1}\n", self.avg_losses));
        report.push_str(&format!("  Avg Turns:         {:.1}\n", self.avg_turns));
        report.push_str(&format!(
            "  Premium Unlocked:  {:.1}%\n\n",
            self.premium_rate * 100.0
        ));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Chests Opened: {:.1}\n",
            self.avg_chests_opened
        ));
        report.push_str(&format!("  Avg Upgrades:      {:.1}\n", self.avg_upgrades));
        report.push_str(&format!("  Avg Gear Swaps:    {:.1}\n", self.avg_gear_swaps));
        report.push_str(&format!(
            "  Avg Research Lvl:  {:.1}\n\n",
            self.avg_research_level
        ));

        report.push_str("── FINAL ZONES ──────────────────────────────────────────────────\n");
        for (zone, count) in &self.zone_distribution {
            let pct = *count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  Zone {:3}: {:>5.1}% {}\n", zone, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
