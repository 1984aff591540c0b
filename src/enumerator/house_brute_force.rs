//! Researcher-facing exhaustive analysis of a single house-allocation instance: every one of
//! its `n!` matchings, k-stability and a "still prefers something available" count for each.
//! Grounded on `brute_force_house_allocation.c`'s `analyze_all_house_allocations`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::config::EngineConfig;
use crate::core::errors::{KstabError, Result};
use crate::generators::generate_random_house_allocation;
use crate::kernel;
use crate::model::{Matching, ProblemInstance};
use crate::verifier;

use super::permutations::generate_permutations;

#[derive(Debug, Clone, Serialize)]
pub struct MatchingAnalysis {
    pub pairs: Vec<usize>,
    pub agents_preferring_others: usize,
    pub is_k_stable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BruteForceReport {
    pub instance: ProblemInstance,
    pub k: usize,
    pub analyses: Vec<MatchingAnalysis>,
    pub k_stable_count: usize,
    pub average_agents_preferring_others: f64,
    pub min_agents_preferring_others: usize,
    pub max_agents_preferring_others: usize,
    pub generated_at: DateTime<Utc>,
}

const GENERATOR_SEED: u32 = 12345;

/// Enumerates all `n!` matchings of a freshly generated `n`-agent house-allocation instance and
/// scores each against `k`. `n` is capped at 8 because `8! = 40320` is already the practical
/// ceiling for holding every matching in memory at once.
pub fn analyze_all_house_allocations(n: usize, k: usize, config: &EngineConfig) -> Result<BruteForceReport> {
    if n == 0 || n > 8 {
        return Err(KstabError::invalid_input(format!(
            "n must be between 1 and 8 for brute-force analysis, got {n}"
        )));
    }
    if k == 0 || k > n {
        return Err(KstabError::invalid_input(format!(
            "k must be between 1 and {n}, got {k}"
        )));
    }

    let instance = generate_random_house_allocation(n, GENERATOR_SEED);
    let mut analyses = Vec::with_capacity(factorial(n));
    for pairs in generate_permutations(n) {
        let matching = Matching::from_pairs(pairs.iter().map(|&p| Some(p)).collect());
        let is_k_stable = verifier::is_k_stable(&matching, &instance, k, config)?;
        let agents_preferring_others = count_agents_preferring_others(&matching, &instance);
        analyses.push(MatchingAnalysis {
            pairs,
            agents_preferring_others,
            is_k_stable,
        });
    }

    let k_stable_count = analyses.iter().filter(|a| a.is_k_stable).count();
    let total_preferring: usize = analyses.iter().map(|a| a.agents_preferring_others).sum();
    let min_agents_preferring_others = analyses
        .iter()
        .map(|a| a.agents_preferring_others)
        .min()
        .unwrap_or(0);
    let max_agents_preferring_others = analyses
        .iter()
        .map(|a| a.agents_preferring_others)
        .max()
        .unwrap_or(0);

    Ok(BruteForceReport {
        instance,
        k,
        average_agents_preferring_others: total_preferring as f64 / analyses.len() as f64,
        min_agents_preferring_others,
        max_agents_preferring_others,
        k_stable_count,
        analyses,
        generated_at: Utc::now(),
    })
}

/// Counts agents who strictly prefer some *other* house over the one the matching gives them,
/// regardless of whether that house is actually reachable through a valid swap. This mirrors
/// the original study's "preferring others" statistic, which is deliberately coarser than
/// `verifier`'s blocking-coalition search.
fn count_agents_preferring_others(matching: &Matching, instance: &ProblemInstance) -> usize {
    let n = instance.num_agents();
    (0..n)
        .filter(|&agent| {
            let current = matching.partner(agent);
            let current_rank = kernel::rank(instance, agent, current);
            instance.agent(agent).preferences[..current_rank.min(instance.agent(agent).preferences.len())]
                .iter()
                .any(|&preferred| Some(preferred) != current)
        })
        .count()
}

fn factorial(n: usize) -> usize {
    (1..=n).product::<usize>().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_agent_report_covers_all_six_matchings() {
        let config = EngineConfig::default();
        let report = analyze_all_house_allocations(3, 1, &config).unwrap();
        assert_eq!(report.analyses.len(), 6);
        assert_eq!(report.k_stable_count, report.analyses.iter().filter(|a| a.is_k_stable).count());
    }

    #[test]
    fn rejects_out_of_range_n_and_k() {
        let config = EngineConfig::default();
        assert!(analyze_all_house_allocations(0, 1, &config).is_err());
        assert!(analyze_all_house_allocations(9, 1, &config).is_err());
        assert!(analyze_all_house_allocations(3, 0, &config).is_err());
        assert!(analyze_all_house_allocations(3, 4, &config).is_err());
    }
}
