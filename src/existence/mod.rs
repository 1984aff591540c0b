//! Existence and synthesis: does a k-stable matching exist, and if so, produce one.
//! Grounded on `existence.c`'s `k_stable_matching_exists_efficient` regime dispatch.

mod greedy;
mod large_k;
mod pruning;
mod small_k;

use tracing::{debug, info, warn};

use crate::core::config::EngineConfig;
use crate::core::errors::{KstabError, Result};
use crate::model::{Matching, ProblemInstance};

/// Does a k-stable matching exist for `instance`?
///
/// `k = 1` is a definitional shortcut, not a search: a singleton coalition can never compel
/// another agent to give up its assignment, so no instance can fail to admit a 1-stable
/// matching. This mirrors the reference engine's own `k_stable_matching_exists_small_k`,
/// which returns `true` for `k = 1` without constructing anything.
pub fn k_stable_exists(instance: &ProblemInstance, k: usize, config: &EngineConfig) -> Result<bool> {
    validate_query(instance, k)?;
    if k == 1 {
        debug!("k=1: existence holds unconditionally");
        return Ok(true);
    }

    let n = instance.num_agents();
    let rho = k as f64 / n as f64;

    if rho <= config.small_k_rho_cutoff {
        debug!(k, n, rho, "dispatch: small-k regime");
        if small_k::attempt(instance, k, config)?.is_some() {
            return Ok(true);
        }
        warn!(k, n, "small-k greedy attempt failed; falling through to pruning search");
    } else if rho >= config.large_k_rho_cutoff {
        debug!(k, n, rho, "dispatch: large-k regime");
        if large_k::attempt(instance, k, config)?.is_some() {
            return Ok(true);
        }
        if rho > config.large_k_giveup_rho_cutoff {
            info!(k, n, "large-k regime exceeds give-up threshold; reporting no witness");
            return Ok(false);
        }
        warn!(k, n, "large-k greedy attempt failed; falling through to pruning search");
    }

    debug!(k, n, "dispatch: pruning search");
    Ok(pruning::search(instance, k, config).is_some())
}

/// Finds a k-stable matching for `instance`, or `None` if the search space covered by this
/// engine's regimes doesn't contain one. `None` is a negative answer, not a failure to decide.
///
/// Unlike [`k_stable_exists`], `k = 1` takes no shortcut here: a witness must actually satisfy
/// [`crate::verifier::is_k_stable`], so the pruning search runs and returns whatever complete
/// matching it settles on first. At `k = 1` the search runs unpruned (see
/// `pruning::promising`'s `k == 1` case) so it stays complete: the promising heuristic's score
/// is not evidence about 1-stability, and pruning on it could discard the only branches leading
/// to a 1-stable matching, which `k_stable_exists`'s unconditional `true` guarantees exists.
pub fn find_k_stable(instance: &ProblemInstance, k: usize, config: &EngineConfig) -> Result<Option<Matching>> {
    validate_query(instance, k)?;
    let n = instance.num_agents();
    let rho = k as f64 / n as f64;

    if k != 1 {
        if rho <= config.small_k_rho_cutoff {
            debug!(k, n, rho, "dispatch: small-k regime");
            if let Some(m) = small_k::attempt(instance, k, config)? {
                return Ok(Some(m));
            }
            warn!(k, n, "small-k greedy attempt failed; falling through to pruning search");
        } else if rho >= config.large_k_rho_cutoff {
            debug!(k, n, rho, "dispatch: large-k regime");
            if let Some(m) = large_k::attempt(instance, k, config)? {
                return Ok(Some(m));
            }
            if rho > config.large_k_giveup_rho_cutoff {
                info!(k, n, "large-k regime exceeds give-up threshold; reporting no witness");
                return Ok(None);
            }
            warn!(k, n, "large-k greedy attempt failed; falling through to pruning search");
        }
    }

    debug!(k, n, "dispatch: pruning search");
    Ok(pruning::search(instance, k, config))
}

fn validate_query(instance: &ProblemInstance, k: usize) -> Result<()> {
    let n = instance.num_agents();
    if k == 0 || k > n {
        return Err(KstabError::invalid_input(format!("k must be in 1..={n}, got {k}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::fixtures;
    use crate::verifier;

    #[test]
    fn k_equals_one_always_exists() {
        let instance = fixtures::housing_three_cycle();
        let config = EngineConfig::default();
        let witness = find_k_stable(&instance, 1, &config).unwrap();
        assert!(witness.is_some());
    }

    #[test]
    fn witness_is_actually_k_stable() {
        let instance = fixtures::housing_three_cycle();
        let config = EngineConfig::default();
        if let Some(matching) = find_k_stable(&instance, 3, &config).unwrap() {
            assert!(verifier::is_k_stable(&matching, &instance, 3, &config).unwrap());
        }
    }

    #[test]
    fn out_of_range_k_is_invalid_input() {
        let instance = fixtures::housing_three_cycle();
        let config = EngineConfig::default();
        assert!(matches!(
            find_k_stable(&instance, 0, &config),
            Err(KstabError::InvalidInput { .. })
        ));
        assert!(matches!(
            find_k_stable(&instance, 4, &config),
            Err(KstabError::InvalidInput { .. })
        ));
    }
}
