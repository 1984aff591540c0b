//! General backtracking search used for medium `rho` and as the fallback when a regime's
//! greedy attempt fails. Grounded on `existence.c`'s `find_k_stable_matching_recursive`.

use crate::core::config::EngineConfig;
use crate::kernel;
use crate::model::{ops, AgentId, Matching, ProblemInstance};
use crate::verifier;

pub(super) fn search(instance: &ProblemInstance, k: usize, config: &EngineConfig) -> Option<Matching> {
    let n = instance.num_agents();
    let mut matching = Matching::new_unmatched(n);
    if recurse(instance, k, config, &mut matching, 0) {
        Some(matching)
    } else {
        None
    }
}

fn recurse(instance: &ProblemInstance, k: usize, config: &EngineConfig, matching: &mut Matching, index: usize) -> bool {
    let n = instance.num_agents();
    if index == n {
        return verifier::is_k_stable(matching, instance, k, config).unwrap_or(false);
    }
    if !promising(instance, k, config, matching, index) {
        return false;
    }
    if matching.partner(index).is_some() {
        return recurse(instance, k, config, matching, index + 1);
    }

    for &candidate in &instance.agent(index).preferences {
        if candidate == index || ops::holder_of(matching, instance, candidate).is_some() {
            continue;
        }
        ops::assign(matching, instance, index, candidate);
        if is_partial_assignment_valid(matching, instance, index) && recurse(instance, k, config, matching, index + 1) {
            return true;
        }
        ops::release(matching, instance, index, candidate);
    }

    if instance.model.allows_voluntary_unmatched() && recurse(instance, k, config, matching, index + 1) {
        return true;
    }

    false
}

/// Re-checks house uniqueness restricted to `0..=up_to`. `model::ops::assign` already keeps
/// symmetric models consistent by construction, so this only has work to do for the house
/// variants.
fn is_partial_assignment_valid(matching: &Matching, instance: &ProblemInstance, up_to: usize) -> bool {
    if instance.model.is_symmetric() {
        return true;
    }
    let mut seen = std::collections::HashSet::with_capacity(up_to + 1);
    for i in 0..=up_to {
        if let Some(slot) = matching.partner(i) {
            if !seen.insert(slot) {
                return false;
            }
        }
    }
    true
}

/// Blocking-potential score: agents unmatched so far, plus agents matched worse than rank
/// `promising_rank_cutoff`. A branch whose score already reaches `k` can never recover (every
/// remaining agent the search adds can only add to, never shrink, that tally at completion),
/// so it's pruned immediately. One-sided: it only ever rejects a branch, never a witness.
///
/// `k == 1` never prunes. The heuristic's score only tracks "unmatched or below the rank
/// cutoff", which is unrelated to the actual 1-stability condition (no agent can unilaterally
/// improve); pruning on it at `k == 1` can reject every branch leading to the only 1-stable
/// matchings an instance admits, which may legitimately sit some agent below that cutoff.
fn promising(instance: &ProblemInstance, k: usize, config: &EngineConfig, matching: &Matching, index: usize) -> bool {
    if k == 1 {
        return true;
    }
    let n = instance.num_agents();
    let mut unmatched = 0usize;
    let mut unhappy = 0usize;
    for i in 0..index {
        match matching.partner(i) {
            None => unmatched += 1,
            Some(_) => {
                if kernel::rank(instance, i as AgentId, matching.partner(i)) > config.promising_rank_cutoff {
                    unhappy += 1;
                }
            }
        }
    }
    if unmatched + unhappy >= k {
        return false;
    }
    let remaining = n - index;
    if remaining == 0 && unmatched + remaining >= 2 * k {
        return false;
    }
    true
}
