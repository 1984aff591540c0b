//! Candidate identification and coalition search. Grounded on `verification.c`'s
//! `check_coalitions_of_size` / `generate_combinations` / `can_coalition_block` /
//! `generate_alternative_matching`.

use crate::core::config::EngineConfig;
use crate::kernel;
use crate::model::{ops, AgentId, Matching, Model, ProblemInstance};

/// Agents worth considering for a blocking coalition: anyone unmatched, plus anyone with at
/// least one better-ranked, reachable partner. Agents already at their top choice (or with no
/// reachable improvement) can never help block anything and are dropped up front.
pub(super) fn candidate_agents(matching: &Matching, instance: &ProblemInstance) -> Vec<AgentId> {
    (0..instance.num_agents())
        .filter(|&i| {
            let current = matching.partner(i);
            current.is_none() || has_better_option(matching, instance, i, current)
        })
        .collect()
}

fn has_better_option(
    matching: &Matching,
    instance: &ProblemInstance,
    agent: AgentId,
    current: Option<AgentId>,
) -> bool {
    let current_rank = kernel::rank(instance, agent, current);
    for &preferred in &instance.agent(agent).preferences {
        if kernel::rank(instance, agent, Some(preferred)) >= current_rank {
            break;
        }
        if slot_is_reachable(matching, instance, preferred, agent) {
            return true;
        }
    }
    false
}

pub(super) fn exists_blocking_coalition(
    matching: &Matching,
    instance: &ProblemInstance,
    candidates: &[AgentId],
    size: usize,
    k: usize,
    config: &EngineConfig,
) -> bool {
    if size <= config.exhaustive_coalition_limit {
        let mut combo = Vec::with_capacity(size);
        search_combinations(candidates, size, 0, &mut combo, &mut |coalition| {
            blocks(matching, instance, coalition, k)
        })
    } else {
        blocks(matching, instance, &candidates[..size], k)
    }
}

fn search_combinations(
    candidates: &[AgentId],
    size: usize,
    start: usize,
    combo: &mut Vec<AgentId>,
    test: &mut dyn FnMut(&[AgentId]) -> bool,
) -> bool {
    if combo.len() == size {
        return test(combo);
    }
    let remaining_needed = size - combo.len();
    if candidates.len() < start + remaining_needed {
        return false;
    }
    for i in start..=(candidates.len() - remaining_needed) {
        combo.push(candidates[i]);
        if search_combinations(candidates, size, i + 1, combo, test) {
            return true;
        }
        combo.pop();
    }
    false
}

fn blocks(matching: &Matching, instance: &ProblemInstance, coalition: &[AgentId], k: usize) -> bool {
    let alternative = generate_alternative(matching, instance, coalition);
    kernel::count_improved(matching, &alternative, instance) >= k
}

/// Lets each coalition member, in order, grab the best reachable partner it can. This is a
/// single greedy pass, not an exhaustive search over alternative matchings: it's a witness
/// *construction*, and `blocks` only cares whether the witness it produces clears the `k`
/// bar, not whether it's the best possible alternative.
fn generate_alternative(matching: &Matching, instance: &ProblemInstance, coalition: &[AgentId]) -> Matching {
    let mut alt = matching.clone();
    for &agent in coalition {
        try_swap(&mut alt, instance, agent);
    }
    alt
}

fn try_swap(matching: &mut Matching, instance: &ProblemInstance, agent: AgentId) {
    let current = matching.partner(agent);
    let current_rank = kernel::rank(instance, agent, current);
    for &preferred in &instance.agent(agent).preferences {
        if kernel::rank(instance, agent, Some(preferred)) >= current_rank {
            break;
        }
        let holder = ops::holder_of(matching, instance, preferred);
        let admissible = match holder {
            None => true,
            Some(h) if h == agent => continue,
            Some(h) => slot_would_accept(instance, preferred, agent, h),
        };
        if admissible {
            if let Some(old_slot) = current {
                ops::release(matching, instance, agent, old_slot);
            }
            if let Some(h) = holder {
                ops::release(matching, instance, h, preferred);
            }
            ops::assign(matching, instance, agent, preferred);
            return;
        }
    }
}

fn slot_is_reachable(matching: &Matching, instance: &ProblemInstance, slot: AgentId, agent: AgentId) -> bool {
    match ops::holder_of(matching, instance, slot) {
        None => true,
        Some(h) if h == agent => false,
        Some(h) => slot_would_accept(instance, slot, agent, h),
    }
}

/// Would `slot` accept `candidate` over its current holder `current_holder`? For marriage and
/// roommates `slot` is itself an agent with its own preferences. A house has none of its own,
/// but in the complete house-allocation models a house id and an agent id share the same
/// `0..n` range, so the house's "consent" is read off the preference list of the agent with
/// that same id — the eviction is admissible only if that agent would rather hold `candidate`
/// than `current_holder`. This is what makes a singleton coalition provably powerless (it
/// reduces house allocation to a two-sided Gale–Shapley market, which always has a solution
/// with no blocking pair): without it, any agent could evict any other unconditionally and
/// `k = 1` stability would be vacuous.
fn slot_would_accept(instance: &ProblemInstance, slot: AgentId, candidate: AgentId, current_holder: AgentId) -> bool {
    match instance.model {
        Model::Marriage { .. } | Model::Roommates => {
            kernel::prefers(instance, slot, Some(candidate), Some(current_holder))
        }
        Model::HouseAllocation { .. } | Model::HouseAllocationPartial { .. } => {
            if slot < instance.num_agents() {
                kernel::prefers(instance, slot, Some(candidate), Some(current_holder))
            } else {
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::fixtures;

    #[test]
    fn candidates_exclude_agents_already_at_top_choice() {
        let instance = fixtures::housing_three_cycle();
        let cycle = Matching::from_pairs(vec![Some(1), Some(2), Some(0)]);
        assert!(candidate_agents(&cycle, &instance).is_empty());
    }

    #[test]
    fn candidates_include_everyone_when_all_are_at_their_worst_choice() {
        let instance = fixtures::housing_three_cycle();
        let identity = Matching::from_pairs(vec![Some(0), Some(1), Some(2)]);
        assert_eq!(candidate_agents(&identity, &instance), vec![0, 1, 2]);
    }
}
