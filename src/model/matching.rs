use serde::{Deserialize, Serialize};

use super::AgentId;

/// A (possibly partial) matching: `pairs[i]` is agent `i`'s partner, or `None` if unmatched.
///
/// This type is deliberately ignorant of model semantics (symmetry, gender, house
/// uniqueness) — those live in [`crate::kernel::is_valid`] and [`super::ops`]. It's a plain
/// indexable slot vector, the same role `matching_t.pairs[]` plays in the C original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
    pairs: Vec<Option<AgentId>>,
}

impl Matching {
    #[must_use]
    pub fn new_unmatched(num_agents: usize) -> Self {
        Self {
            pairs: vec![None; num_agents],
        }
    }

    #[must_use]
    pub fn from_pairs(pairs: Vec<Option<AgentId>>) -> Self {
        Self { pairs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn partner(&self, agent: AgentId) -> Option<AgentId> {
        self.pairs[agent]
    }

    pub fn set(&mut self, agent: AgentId, partner: Option<AgentId>) {
        self.pairs[agent] = partner;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Option<AgentId>] {
        &self.pairs
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pairs.iter().all(Option::is_some)
    }
}
