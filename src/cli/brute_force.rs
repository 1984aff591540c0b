//! `brute-force` and `brute-force-house-allocation` verbs.

use crate::core::config::EngineConfig;
use crate::core::errors::{KstabError, Result};
use crate::enumerator;

const BRUTE_FORCE_N_MAX_CAP: usize = 6;

pub fn run(n_max: usize, json: bool, config: &EngineConfig) -> Result<()> {
    let capped = n_max.min(BRUTE_FORCE_N_MAX_CAP);
    let rows = enumerator::existence_rate_table(1..=capped.max(1), config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows).expect("rows serialize"));
    } else {
        println!("=== Enumerator Existence-Rate Study (n_max={capped}) ===");
        println!("{:>4}  {:>4}  {:>10}  {:>14}", "n", "k", "checked", "existence rate");
        for row in &rows {
            println!("{:>4}  {:>4}  {:>10}  {:>14.4}", row.n, row.k, row.instances_checked, row.existence_rate);
        }
    }
    Ok(())
}

pub fn run_house_allocation(n: usize, k: usize, json: bool, config: &EngineConfig) -> Result<()> {
    if n == 0 || n > 8 {
        return Err(KstabError::invalid_input(format!("n must be between 1 and 8, got {n}")));
    }
    let report = enumerator::analyze_all_house_allocations(n, k, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report).expect("report serializes"));
    } else {
        println!("=== Brute-Force House Allocation (n={n}, k={k}) ===");
        println!(
            "matchings={} k-stable={} avg-preferring-others={:.2} min={} max={}",
            report.analyses.len(),
            report.k_stable_count,
            report.average_agents_preferring_others,
            report.min_agents_preferring_others,
            report.max_agents_preferring_others,
        );
        if n <= 4 {
            for (idx, analysis) in report.analyses.iter().enumerate() {
                println!(
                    "matching {idx}: {:?} preferring-others={} k-stable={}",
                    analysis.pairs, analysis.agents_preferring_others, analysis.is_k_stable
                );
            }
        }
    }
    Ok(())
}
