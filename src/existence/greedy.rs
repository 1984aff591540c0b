//! Shared greedy-construction helper for the small-k and large-k regimes: each agent in
//! `order`, if still free, takes the best reachable partner that also ranks it within its own
//! top fraction of preferences. Grounded on `existence.c`'s regime-specific greedy passes.

use crate::model::{ops, AgentId, Matching, ProblemInstance};

pub(super) fn greedy_quality_matching(instance: &ProblemInstance, order: &[AgentId], top_fraction: f64) -> Matching {
    let n = instance.num_agents();
    let mut matching = Matching::new_unmatched(n);

    for &i in order {
        if matching.partner(i).is_some() {
            continue;
        }
        for &p in &instance.agent(i).preferences {
            if ops::holder_of(&matching, instance, p).is_some() {
                continue;
            }
            if instance.model.is_symmetric() && !ranks_within_top_fraction(instance, p, i, top_fraction) {
                continue;
            }
            ops::assign(&mut matching, instance, i, p);
            break;
        }
    }
    matching
}

/// Whether `p` ranks `i` within its own top `fraction` of preferences. Only meaningful for
/// symmetric models, where `p` is itself an agent with preferences of its own.
fn ranks_within_top_fraction(instance: &ProblemInstance, p: AgentId, i: AgentId, fraction: f64) -> bool {
    let p_prefs = &instance.agent(p).preferences;
    if p_prefs.is_empty() {
        return false;
    }
    let Some(rank_of_i) = p_prefs.iter().position(|&x| x == i) else {
        return false;
    };
    let cutoff = ((p_prefs.len() as f64) * fraction).ceil() as usize;
    rank_of_i < cutoff.max(1)
}
