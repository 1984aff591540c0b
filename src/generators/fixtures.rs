//! Small hand-built instances reused across unit and integration tests. Grounded on the fixed
//! worked examples in `existence.c` and `verification.c`'s own test harnesses.

use crate::model::{Agent, Model, ProblemInstance};

/// Three houses, three agents, cyclic top choices: agent 0 wants house 1 first, agent 1 wants
/// house 2 first, agent 2 wants house 0 first. The matching `[1, 2, 0]` gives everyone their
/// top choice; the identity matching `[0, 1, 2]` gives everyone their worst choice.
#[must_use]
pub fn housing_three_cycle() -> ProblemInstance {
    let agents = vec![
        Agent::new(0, vec![1, 2, 0]),
        Agent::new(1, vec![2, 0, 1]),
        Agent::new(2, vec![0, 1, 2]),
    ];
    ProblemInstance::new(Model::HouseAllocation { num_houses: 3 }, agents)
}

/// `num_agents` houses where every agent's first choice is house `(id + 1) % num_agents`,
/// generalizing [`housing_three_cycle`] to arbitrary size.
#[must_use]
pub fn cyclic_top_house_allocation(num_agents: usize) -> ProblemInstance {
    assert!(num_agents >= 2, "cyclic fixture needs at least two agents");
    let agents = (0..num_agents)
        .map(|id| {
            let mut prefs = Vec::with_capacity(num_agents);
            prefs.push((id + 1) % num_agents);
            prefs.extend((0..num_agents).filter(|&h| h != (id + 1) % num_agents));
            Agent::new(id, prefs)
        })
        .collect();
    ProblemInstance::new(Model::HouseAllocation { num_houses: num_agents }, agents)
}

/// Every agent's preferences are reversed relative to its id order, so the matching that gives
/// agent `i` house `i` is about as far from consensus-good as a house allocation instance gets.
#[must_use]
pub fn adversarial_house_allocation(num_agents: usize) -> ProblemInstance {
    assert!(num_agents >= 2, "adversarial fixture needs at least two agents");
    let agents = (0..num_agents)
        .map(|id| {
            let mut prefs: Vec<usize> = (0..num_agents).collect();
            prefs.reverse();
            prefs.rotate_left(id % num_agents);
            Agent::new(id, prefs)
        })
        .collect();
    ProblemInstance::new(Model::HouseAllocation { num_houses: num_agents }, agents)
}

/// Two men, two women whose preferences form a single compatible rotation: man 0 and woman 2
/// are mutual top choices, as are man 1 and woman 3. `{0<->2, 1<->3}` gives everyone their top
/// choice and is stable at every k. `{0<->3, 1<->2}` gives everyone their second choice and is
/// not 2-stable: `{0, 2}` blocks it, since both get their favorite by pairing with each other.
#[must_use]
pub fn restricted_marriage_example() -> ProblemInstance {
    let agents = vec![
        Agent::new(0, vec![2, 3]),
        Agent::new(1, vec![3, 2]),
        Agent::new(2, vec![0, 1]),
        Agent::new(3, vec![1, 0]),
    ];
    ProblemInstance::new(Model::Marriage { num_men: 2 }, agents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn housing_three_cycle_is_valid() {
        assert!(housing_three_cycle().validate().is_ok());
    }

    #[test]
    fn cyclic_top_house_allocation_is_valid_at_various_sizes() {
        for n in 2..8 {
            assert!(cyclic_top_house_allocation(n).validate().is_ok());
        }
    }

    #[test]
    fn adversarial_house_allocation_is_valid() {
        assert!(adversarial_house_allocation(5).validate().is_ok());
    }

    #[test]
    fn restricted_marriage_example_is_valid() {
        assert!(restricted_marriage_example().validate().is_ok());
    }
}
