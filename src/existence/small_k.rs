//! Small-k regime (`rho = k/n <= small_k_rho_cutoff`). Grounded on
//! `existence.c`'s `k_stable_matching_exists_small_k`.

use crate::core::config::EngineConfig;
use crate::core::errors::Result;
use crate::model::{AgentId, Matching, ProblemInstance};
use crate::verifier;

use super::greedy::greedy_quality_matching;

pub(super) fn attempt(instance: &ProblemInstance, k: usize, config: &EngineConfig) -> Result<Option<Matching>> {
    if k == 2 || k == 3 {
        let order: Vec<AgentId> = (0..instance.num_agents()).collect();
        let candidate = greedy_quality_matching(instance, &order, config.greedy_top_half_fraction);
        if verifier::is_k_stable(&candidate, instance, k, config)? {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}
