//! Model-aware matching mutation: the one place that knows whether "assign slot to agent"
//! means writing one cell (house allocation) or two (marriage, roommates).

use super::{AgentId, Matching, ProblemInstance};

/// Who currently holds `slot`. For symmetric models `slot` is itself an agent id and this is
/// just `matching.partner(slot)`; for the house variants it's a reverse lookup since nothing
/// stores the inverse mapping.
#[must_use]
pub fn holder_of(matching: &Matching, instance: &ProblemInstance, slot: AgentId) -> Option<AgentId> {
    if instance.model.is_symmetric() {
        matching.partner(slot)
    } else {
        (0..instance.num_agents()).find(|&a| matching.partner(a) == Some(slot))
    }
}

/// Assigns `agent` to `slot`, writing both sides for symmetric models.
pub fn assign(matching: &mut Matching, instance: &ProblemInstance, agent: AgentId, slot: AgentId) {
    matching.set(agent, Some(slot));
    if instance.model.is_symmetric() {
        matching.set(slot, Some(agent));
    }
}

/// Clears `agent`'s assignment to `slot`, clearing both sides for symmetric models.
pub fn release(matching: &mut Matching, instance: &ProblemInstance, agent: AgentId, slot: AgentId) {
    matching.set(agent, None);
    if instance.model.is_symmetric() {
        matching.set(slot, None);
    }
}

/// A simple, non-optimized matching used as a starting point by the CLI's model-specific
/// verbs: agent `i` to house `i` (house models), man `i` to woman `num_men + i` up to the
/// shorter side (marriage), or `2i` to `2i+1` (roommates).
#[must_use]
pub fn trivial_matching(instance: &ProblemInstance) -> Matching {
    let n = instance.num_agents();
    match instance.model {
        super::Model::HouseAllocation { .. } | super::Model::HouseAllocationPartial { .. } => {
            Matching::from_pairs((0..n).map(Some).collect())
        }
        super::Model::Marriage { num_men } => {
            let num_women = n - num_men;
            let half = num_men.min(num_women);
            let mut pairs = vec![None; n];
            for i in 0..half {
                pairs[i] = Some(num_men + i);
                pairs[num_men + i] = Some(i);
            }
            Matching::from_pairs(pairs)
        }
        super::Model::Roommates => {
            let mut pairs = vec![None; n];
            let mut i = 0;
            while i + 1 < n {
                pairs[i] = Some(i + 1);
                pairs[i + 1] = Some(i);
                i += 2;
            }
            Matching::from_pairs(pairs)
        }
    }
}
