//! k-stability verification: a cheap unmatched-pair witness check, then a candidate-restricted
//! blocking-coalition search. Grounded on `verification.c`'s `has_k_blocking_coalition` /
//! `check_coalitions_of_size`.
//!
//! Sound, and complete up to the `k + coalition_size_cap_offset` coalition-size cap: this
//! routine can say "not k-stable" with certainty, but "k-stable" only within that search bound.
//! Whether the underlying problem admits a genuinely polynomial-time decision procedure is left
//! open; this implementation does not claim one.

mod coalition;

use tracing::{debug, trace};

use crate::core::config::EngineConfig;
use crate::core::errors::{KstabError, Result};
use crate::kernel;
use crate::model::{Matching, ProblemInstance};

/// Is `matching` k-stable under `instance`? `Ok(false)` means a blocking coalition of size at
/// least `k` was found (or proven via the cheap witness); it is not an error condition.
pub fn is_k_stable(matching: &Matching, instance: &ProblemInstance, k: usize, config: &EngineConfig) -> Result<bool> {
    validate_query(matching, instance, k)?;

    if cheap_unmatched_witness(matching, instance, k) {
        debug!(k, "cheap unmatched-pair witness found a k-block");
        return Ok(false);
    }

    let candidates = coalition::candidate_agents(matching, instance);
    let max_size = (k + config.coalition_size_cap_offset).min(instance.num_agents());
    for size in k..=max_size {
        if candidates.len() < size {
            break;
        }
        trace!(size, candidates = candidates.len(), "trying coalition size");
        if coalition::exists_blocking_coalition(matching, instance, &candidates, size, k, config) {
            return Ok(false);
        }
    }
    Ok(true)
}

fn validate_query(matching: &Matching, instance: &ProblemInstance, k: usize) -> Result<()> {
    let n = instance.num_agents();
    if k == 0 || k > n {
        return Err(KstabError::invalid_input(format!("k must be in 1..={n}, got {k}")));
    }
    if matching.len() != n {
        return Err(KstabError::invalid_input(format!(
            "matching has {} agents, instance has {n}",
            matching.len()
        )));
    }
    if !kernel::is_valid(matching, instance) {
        return Err(KstabError::invalid_input(
            "matching is not well-formed for this instance",
        ));
    }
    Ok(())
}

/// Pairs of mutually-acceptable unmatched agents are always a valid blocking coalition on
/// their own (each joins and strictly improves from "unmatched" to "matched"). If at least
/// `k` agents can be paired off this way the matching is trivially unstable, with no need to
/// search real coalitions.
fn cheap_unmatched_witness(matching: &Matching, instance: &ProblemInstance, k: usize) -> bool {
    let unmatched: Vec<usize> = (0..instance.num_agents())
        .filter(|&i| matching.partner(i).is_none())
        .collect();
    if unmatched.len() < k {
        return false;
    }
    let mut used = vec![false; unmatched.len()];
    let mut pairs = 0usize;
    for i_idx in 0..unmatched.len() {
        if pairs * 2 >= k {
            break;
        }
        if used[i_idx] {
            continue;
        }
        let i = unmatched[i_idx];
        for j_idx in (i_idx + 1)..unmatched.len() {
            if used[j_idx] {
                continue;
            }
            let j = unmatched[j_idx];
            let mutually_acceptable =
                instance.agent(i).position_of(j).is_some() && instance.agent(j).position_of(i).is_some();
            if mutually_acceptable {
                used[i_idx] = true;
                used[j_idx] = true;
                pairs += 1;
                break;
            }
        }
    }
    pairs * 2 >= k
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::fixtures;

    #[test]
    fn three_cycle_is_three_stable() {
        let instance = fixtures::housing_three_cycle();
        let config = EngineConfig::default();
        let cycle = Matching::from_pairs(vec![Some(1), Some(2), Some(0)]);
        assert!(is_k_stable(&cycle, &instance, 3, &config).unwrap());
    }

    #[test]
    fn identity_is_not_three_stable_under_the_cycle() {
        let instance = fixtures::housing_three_cycle();
        let config = EngineConfig::default();
        let identity = Matching::from_pairs(vec![Some(0), Some(1), Some(2)]);
        assert!(!is_k_stable(&identity, &instance, 3, &config).unwrap());
    }

    #[test]
    fn a_matching_where_everyone_already_holds_their_top_choice_is_one_stable() {
        let instance = fixtures::housing_three_cycle();
        let config = EngineConfig::default();
        let cycle = Matching::from_pairs(vec![Some(1), Some(2), Some(0)]);
        assert!(is_k_stable(&cycle, &instance, 1, &config).unwrap());
    }

    #[test]
    fn a_matching_with_a_reachable_single_agent_improvement_is_not_one_stable() {
        let instance = fixtures::housing_three_cycle();
        let config = EngineConfig::default();
        let identity = Matching::from_pairs(vec![Some(0), Some(1), Some(2)]);
        assert!(!is_k_stable(&identity, &instance, 1, &config).unwrap());
    }

    #[test]
    fn marriage_rotation_top_matching_is_two_stable() {
        let instance = fixtures::restricted_marriage_example();
        let config = EngineConfig::default();
        let everyone_at_top = Matching::from_pairs(vec![Some(2), Some(3), Some(0), Some(1)]);
        assert!(is_k_stable(&everyone_at_top, &instance, 2, &config).unwrap());
    }

    #[test]
    fn marriage_rotation_second_choice_matching_is_not_two_stable() {
        let instance = fixtures::restricted_marriage_example();
        let config = EngineConfig::default();
        let everyone_at_second = Matching::from_pairs(vec![Some(3), Some(2), Some(1), Some(0)]);
        assert!(!is_k_stable(&everyone_at_second, &instance, 2, &config).unwrap());
    }

    #[test]
    fn out_of_range_k_is_invalid_input() {
        let instance = fixtures::housing_three_cycle();
        let config = EngineConfig::default();
        let identity = Matching::from_pairs(vec![Some(0), Some(1), Some(2)]);
        assert!(matches!(
            is_k_stable(&identity, &instance, 0, &config),
            Err(KstabError::InvalidInput { .. })
        ));
        assert!(matches!(
            is_k_stable(&identity, &instance, 4, &config),
            Err(KstabError::InvalidInput { .. })
        ));
    }
}
