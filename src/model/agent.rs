use serde::{Deserialize, Serialize};

use super::AgentId;

/// One agent's acceptable partners, most-preferred first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    /// Acceptable partners, strictly ordered best to worst. A partner absent from this list
    /// is unacceptable to this agent, full stop.
    pub preferences: Vec<AgentId>,
    /// Parallel to `preferences`: the tie-group tag of each entry, for the partial-preferences
    /// variant's indifference classes. `None` when the instance has no ties.
    pub indifference_groups: Option<Vec<u32>>,
}

impl Agent {
    #[must_use]
    pub fn new(id: AgentId, preferences: Vec<AgentId>) -> Self {
        Self {
            id,
            preferences,
            indifference_groups: None,
        }
    }

    /// Builds an agent whose preference list carries indifference-group tags. Ties within a
    /// group are broken by ascending partner id — the list itself must already reflect that
    /// order; this constructor doesn't re-sort it.
    #[must_use]
    pub fn with_indifference_groups(id: AgentId, preferences: Vec<AgentId>, groups: Vec<u32>) -> Self {
        debug_assert_eq!(preferences.len(), groups.len());
        Self {
            id,
            preferences,
            indifference_groups: Some(groups),
        }
    }

    /// Position of `partner` in this agent's preference list, or `None` if unacceptable.
    #[must_use]
    pub fn position_of(&self, partner: AgentId) -> Option<usize> {
        self.preferences.iter().position(|&p| p == partner)
    }
}
