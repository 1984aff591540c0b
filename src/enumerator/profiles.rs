//! Existence-rate tables indexed by `(n, k)`: for `n <= 3` every strict complete preference
//! profile is enumerated exhaustively; for `n >= 4` the `(n!)^n` profile space is sampled with
//! 1000 deterministic seeds, since `(4!)^4 = 331,776` is already an expensive ceiling.
//! Grounded on `existence.c`'s regime split and SPEC_FULL.md's enumerator contract.

use serde::Serialize;
use std::time::Duration;

use crate::core::config::EngineConfig;
use crate::core::errors::Result;
use crate::existence;
use crate::generators::generate_random_house_allocation;
use crate::model::{Agent, Model, ProblemInstance};

use super::permutations::generate_permutations;

const SAMPLE_TRIALS: u32 = 1000;
const EXHAUSTIVE_N_CUTOFF: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct ExistenceRateRow {
    pub n: usize,
    pub k: usize,
    pub instances_checked: usize,
    pub existence_rate: f64,
}

/// One row per `(n, k)` pair with `k` in `1..=n`, for every `n` in `n_range`.
pub fn existence_rate_table(n_range: impl Iterator<Item = usize>, config: &EngineConfig) -> Result<Vec<ExistenceRateRow>> {
    let mut rows = Vec::new();
    for n in n_range {
        if n == 0 {
            continue;
        }
        for k in 1..=n {
            let row = if n <= EXHAUSTIVE_N_CUTOFF {
                exhaustive_row(n, k, config)?
            } else {
                sampled_row(n, k, SAMPLE_TRIALS, config)?
            };
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Existence-rate sampling over an explicit `n` range and trial count, for the CLI's
/// `large-random` verb. Unlike [`existence_rate_table`] this never switches to exhaustive
/// enumeration, since the whole point of the verb is to probe sizes too large for that.
pub fn large_random_study(min_n: usize, max_n: usize, trials: u32, config: &EngineConfig) -> Result<Vec<ExistenceRateRow>> {
    let mut rows = Vec::new();
    for n in min_n.max(1)..=max_n {
        for k in 1..=n {
            rows.push(sampled_row(n, k, trials, config)?);
        }
    }
    Ok(rows)
}

fn exhaustive_row(n: usize, k: usize, config: &EngineConfig) -> Result<ExistenceRateRow> {
    let profiles = all_preference_profiles(n);
    let mut positive = 0usize;
    for agents in &profiles {
        let instance = ProblemInstance::new(Model::HouseAllocation { num_houses: n }, agents.clone());
        if existence::k_stable_exists(&instance, k, config)? {
            positive += 1;
        }
    }
    Ok(ExistenceRateRow {
        n,
        k,
        instances_checked: profiles.len(),
        existence_rate: positive as f64 / profiles.len() as f64,
    })
}

fn sampled_row(n: usize, k: usize, trials: u32, config: &EngineConfig) -> Result<ExistenceRateRow> {
    let mut positive = 0usize;
    for seed in 0..trials {
        let instance = generate_random_house_allocation(n, seed);
        if existence::k_stable_exists(&instance, k, config)? {
            positive += 1;
        }
    }
    Ok(ExistenceRateRow {
        n,
        k,
        instances_checked: trials as usize,
        existence_rate: positive as f64 / f64::from(trials),
    })
}

/// Every one of the `(n!)^n` complete strict preference profiles over `n` agents/houses: each
/// agent independently ranges over all `n!` permutations of `0..n`.
fn all_preference_profiles(n: usize) -> Vec<Vec<Agent>> {
    let perms = generate_permutations(n);
    let mut profiles = vec![Vec::with_capacity(n)];
    for id in 0..n {
        let mut next = Vec::with_capacity(profiles.len() * perms.len());
        for partial in &profiles {
            for perm in &perms {
                let mut agents = partial.clone();
                agents.push(Agent::new(id, perm.clone()));
                next.push(agents);
            }
        }
        profiles = next;
    }
    profiles
}

/// Average wall time per decision over `trials` fresh random instances of size `n`, used by the
/// benchmark harness rather than the ground-truth tables above.
pub fn average_decision_time(n: usize, k: usize, trials: u32, config: &EngineConfig) -> Result<Duration> {
    let mut total = Duration::ZERO;
    for seed in 0..trials {
        let instance = generate_random_house_allocation(n, seed);
        let started = std::time::Instant::now();
        existence::k_stable_exists(&instance, k, config)?;
        total += started.elapsed();
    }
    Ok(total / trials.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustive_profile_count_matches_n_factorial_to_the_n() {
        assert_eq!(all_preference_profiles(2).len(), 4);
        assert_eq!(all_preference_profiles(3).len(), 216);
    }

    #[test]
    fn k_equals_one_is_always_fully_existent_at_small_n() {
        let config = EngineConfig::default();
        let rows = existence_rate_table(2..=3, &config).unwrap();
        for row in rows.iter().filter(|r| r.k == 1) {
            assert_eq!(row.existence_rate, 1.0);
        }
    }

    #[test]
    fn table_covers_every_k_in_range_for_each_n() {
        let config = EngineConfig::default();
        let rows = existence_rate_table(2..=2, &config).unwrap();
        let ks: Vec<usize> = rows.iter().map(|r| r.k).collect();
        assert_eq!(ks, vec![1, 2]);
    }

    /// Exhaustive enumeration is a pure function of the instance count: two runs over the full
    /// n=3 profile space at k=3 must agree bit-for-bit, independent of run order elsewhere.
    #[test]
    fn n_three_k_three_ground_truth_is_reproducible_across_runs() {
        let config = EngineConfig::default();
        let first = exhaustive_row(3, 3, &config).unwrap();
        let second = exhaustive_row(3, 3, &config).unwrap();
        assert_eq!(first.instances_checked, 216);
        assert_eq!(first.existence_rate, second.existence_rate);
    }
}
