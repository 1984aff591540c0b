//! Preference kernel: ranking, comparison, improvement counting, and matching validity.
//! Grounded on `matching.c`'s `get_agent_rank`/`agent_prefers`/`count_improved_agents`/
//! `is_valid_matching`.

use crate::model::{AgentId, Matching, Model, ProblemInstance};

/// `agent`'s rank for `partner`: position in its preference list if acceptable, `len` if
/// `partner` is `None` (unmatched), or `len + 1` if `partner` is someone `agent` didn't list.
/// Lower is better, so an acceptable partner always beats being unmatched, and being
/// unmatched always beats an unacceptable partner.
#[must_use]
pub fn rank(instance: &ProblemInstance, agent: AgentId, partner: Option<AgentId>) -> usize {
    let list = &instance.agent(agent).preferences;
    match partner {
        None => list.len(),
        Some(p) => list.iter().position(|&x| x == p).unwrap_or(list.len() + 1),
    }
}

/// Whether `agent` strictly prefers `a` over `b`.
#[must_use]
pub fn prefers(instance: &ProblemInstance, agent: AgentId, a: Option<AgentId>, b: Option<AgentId>) -> bool {
    rank(instance, agent, a) < rank(instance, agent, b)
}

/// How many agents are strictly better off under `alternative` than under `current`.
#[must_use]
pub fn count_improved(current: &Matching, alternative: &Matching, instance: &ProblemInstance) -> usize {
    (0..instance.num_agents())
        .filter(|&i| prefers(instance, i, alternative.partner(i), current.partner(i)))
        .count()
}

/// Whether `matching` is well-formed for `instance`: right size, symmetric pairs where the
/// model demands symmetry, cross-gender-only pairs in marriage, no agent sharing a roommate
/// with itself, and at most one agent per house.
#[must_use]
pub fn is_valid(matching: &Matching, instance: &ProblemInstance) -> bool {
    let n = instance.num_agents();
    if matching.len() != n {
        return false;
    }
    match instance.model {
        Model::Marriage { num_men } => {
            for i in 0..n {
                let Some(j) = matching.partner(i) else {
                    continue;
                };
                if j >= n || matching.partner(j) != Some(i) {
                    return false;
                }
                if (i < num_men) == (j < num_men) {
                    return false;
                }
            }
            true
        }
        Model::Roommates => {
            for i in 0..n {
                let Some(j) = matching.partner(i) else {
                    continue;
                };
                if j >= n || j == i || matching.partner(j) != Some(i) {
                    return false;
                }
            }
            true
        }
        Model::HouseAllocation { num_houses } | Model::HouseAllocationPartial { num_houses } => {
            let mut used = vec![false; num_houses];
            for i in 0..n {
                let Some(h) = matching.partner(i) else {
                    continue;
                };
                if h >= num_houses || used[h] {
                    return false;
                }
                used[h] = true;
            }
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Agent;

    fn house_instance() -> ProblemInstance {
        ProblemInstance::new(
            Model::HouseAllocation { num_houses: 3 },
            vec![
                Agent::new(0, vec![1, 2, 0]),
                Agent::new(1, vec![2, 0, 1]),
                Agent::new(2, vec![0, 1, 2]),
            ],
        )
    }

    #[test]
    fn rank_orders_acceptable_unmatched_unacceptable() {
        let instance = house_instance();
        let acceptable = rank(&instance, 0, Some(1));
        let unmatched = rank(&instance, 0, None);
        assert!(acceptable < unmatched);
    }

    #[test]
    fn is_valid_rejects_duplicate_house() {
        let instance = house_instance();
        let matching = Matching::from_pairs(vec![Some(0), Some(0), None]);
        assert!(!is_valid(&matching, &instance));
    }

    #[test]
    fn is_valid_accepts_bijection() {
        let instance = house_instance();
        let matching = Matching::from_pairs(vec![Some(1), Some(2), Some(0)]);
        assert!(is_valid(&matching, &instance));
    }

    #[test]
    fn count_improved_counts_strict_gains_only() {
        let instance = house_instance();
        let current = Matching::from_pairs(vec![Some(0), Some(1), Some(2)]);
        let alternative = Matching::from_pairs(vec![Some(1), Some(2), Some(0)]);
        assert_eq!(count_improved(&current, &alternative, &instance), 3);
    }
}
