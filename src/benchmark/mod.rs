//! Timing harness driving the verifier and existence engine over growing instance sizes.
//! Grounded on `benchmark.c`'s `benchmark_verification_complexity` /
//! `benchmark_existence_complexity` / `analyze_k_ratio_effect`.

pub mod report;

use std::time::Instant;

use crate::core::config::EngineConfig;
use crate::core::errors::Result;
use crate::existence;
use crate::generators::generate_random_house_allocation;
use crate::model::ops::trivial_matching;
use crate::verifier;

pub use report::{print_existence_table, print_key_k_table, print_verification_table, ExistenceRow, KeyKRow, VerificationRow};

const AGENT_STEP: usize = 5;
const EXISTENCE_AGENT_STEP: usize = 2;
const K_RATIOS: [f64; 3] = [0.25, 0.5, 0.75];

/// Verification timing for `n` in `5, 10, ..., max_agents`, `k = n/2`, against the trivial
/// identity-style matching. Mirrors the C benchmark's fixed `k = n/2` choice.
pub fn verification_complexity(max_agents: usize, trials: u32, config: &EngineConfig) -> Result<Vec<VerificationRow>> {
    let mut rows = Vec::new();
    let mut n = AGENT_STEP;
    while n <= max_agents {
        let k = (n / 2).max(1);
        let mut total_ms = 0.0;
        let mut sum_squared = 0.0;
        for seed in 0..trials {
            let instance = generate_random_house_allocation(n, seed);
            let matching = trivial_matching(&instance);
            let started = Instant::now();
            verifier::is_k_stable(&matching, &instance, k, config)?;
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
            total_ms += elapsed_ms;
            sum_squared += elapsed_ms * elapsed_ms;
        }
        let avg = total_ms / f64::from(trials);
        let variance = (sum_squared / f64::from(trials)) - avg * avg;
        rows.push(VerificationRow {
            agents: n,
            avg_time_ms: avg,
            std_dev_ms: variance.max(0.0).sqrt(),
            trials,
        });
        n += AGENT_STEP;
    }
    Ok(rows)
}

/// Existence timing for `n` in `4, 6, ..., max_agents`, sweeping `k = floor(n * ratio)` for
/// each of [`K_RATIOS`].
pub fn existence_complexity(max_agents: usize, trials: u32, config: &EngineConfig) -> Result<Vec<ExistenceRow>> {
    let mut rows = Vec::new();
    let mut n = 4usize.max(EXISTENCE_AGENT_STEP);
    while n <= max_agents {
        for &ratio in &K_RATIOS {
            let k = ((n as f64 * ratio) as usize).max(1).min(n);
            let mut total_ms = 0.0;
            let mut sum_squared = 0.0;
            let mut exists_count = 0u32;
            for seed in 0..trials {
                let instance = generate_random_house_allocation(n, seed);
                let started = Instant::now();
                let exists = existence::k_stable_exists(&instance, k, config)?;
                let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                total_ms += elapsed_ms;
                sum_squared += elapsed_ms * elapsed_ms;
                if exists {
                    exists_count += 1;
                }
            }
            let avg = total_ms / f64::from(trials);
            let variance = (sum_squared / f64::from(trials)) - avg * avg;
            rows.push(ExistenceRow {
                agents: n,
                k_ratio: ratio,
                avg_time_ms: avg,
                std_dev_ms: variance.max(0.0).sqrt(),
                trials,
                exists_rate: f64::from(exists_count) / f64::from(trials),
            });
        }
        n += EXISTENCE_AGENT_STEP;
    }
    Ok(rows)
}

/// Sweeps constant small k values (1, 2, 3) alongside proportional ones (n/4, n/2, 3n/4) for a
/// fixed agent count, one trial each against a freshly generated instance.
pub fn key_k_values(n: usize, config: &EngineConfig) -> Result<Vec<KeyKRow>> {
    let instance = generate_random_house_allocation(n, 0);
    let mut entries: Vec<(usize, &'static str)> = vec![(1, "constant k=1"), (2, "constant k=2"), (3, "constant k=3")];
    entries.push(((n / 4).max(1), "proportional n/4"));
    entries.push(((n / 2).max(1), "proportional n/2"));
    entries.push(((3 * n / 4).max(1), "proportional 3n/4"));
    entries.retain(|&(k, _)| k >= 1 && k <= n);
    entries.dedup_by_key(|&mut (k, _)| k);

    let mut rows = Vec::with_capacity(entries.len());
    for (k, label) in entries {
        let started = Instant::now();
        let exists = existence::k_stable_exists(&instance, k, config)?;
        let avg_time_ms = started.elapsed().as_secs_f64() * 1000.0;
        rows.push(KeyKRow {
            agents: n,
            k,
            label: label.to_string(),
            exists,
            avg_time_ms,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_complexity_produces_one_row_per_step() {
        let config = EngineConfig::default();
        let rows = verification_complexity(10, 2, &config).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn key_k_values_covers_every_requested_k_within_range() {
        let config = EngineConfig::default();
        let rows = key_k_values(8, &config).unwrap();
        assert!(rows.iter().all(|r| r.k >= 1 && r.k <= 8));
        assert!(rows.iter().any(|r| r.k == 1));
    }
}
