//! Large-k regime (`rho = k/n >= large_k_rho_cutoff`). Grounded on
//! `existence.c`'s `k_stable_matching_exists_large_k`.

use crate::core::config::EngineConfig;
use crate::core::errors::Result;
use crate::model::{AgentId, ProblemInstance};
use crate::model::Matching;
use crate::verifier;

use super::greedy::greedy_quality_matching;

pub(super) fn attempt(instance: &ProblemInstance, k: usize, config: &EngineConfig) -> Result<Option<Matching>> {
    let mut order: Vec<AgentId> = (0..instance.num_agents()).collect();
    order.sort_by_key(|&a| (instance.agent(a).preferences.len(), a));

    let candidate = greedy_quality_matching(instance, &order, config.greedy_top_third_fraction);
    if verifier::is_k_stable(&candidate, instance, k, config)? {
        Ok(Some(candidate))
    } else {
        Ok(None)
    }
}
