use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::errors::{KstabError, Result};

use super::{Agent, AgentId};

/// Which matching problem an instance poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Model {
    /// Agents are matched to houses 1:1; houses have no preferences of their own.
    HouseAllocation { num_houses: usize },
    /// Agents split into men `0..num_men` and women `num_men..n`; a matching is symmetric and
    /// cross-gender only.
    Marriage { num_men: usize },
    /// Agents are matched to each other symmetrically; self-preference is meaningless.
    Roommates,
    /// House allocation where preference lists may be short (some houses unacceptable) and
    /// `num_houses` may differ from the agent count.
    HouseAllocationPartial { num_houses: usize },
}

impl Model {
    /// Whether a matching under this model is a symmetric agent-agent pairing (`Marriage`,
    /// `Roommates`) rather than a directed agent-to-object assignment (the house variants).
    #[must_use]
    pub const fn is_symmetric(&self) -> bool {
        matches!(self, Self::Marriage { .. } | Self::Roommates)
    }

    /// Whether the existence search may leave an agent deliberately unmatched. Marriage
    /// doesn't offer this choice: every agent must be paired or the branch fails.
    #[must_use]
    pub const fn allows_voluntary_unmatched(&self) -> bool {
        !matches!(self, Self::Marriage { .. })
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HouseAllocation { .. } => "house allocation",
            Self::Marriage { .. } => "marriage",
            Self::Roommates => "roommates",
            Self::HouseAllocationPartial { .. } => "house allocation (partial preferences)",
        }
    }
}

/// A fully specified matching problem: a model and the agents competing within it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemInstance {
    pub model: Model,
    pub agents: Vec<Agent>,
}

impl ProblemInstance {
    #[must_use]
    pub fn new(model: Model, agents: Vec<Agent>) -> Self {
        Self { model, agents }
    }

    #[must_use]
    pub fn num_agents(&self) -> usize {
        self.agents.len()
    }

    #[must_use]
    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id]
    }

    /// Checks the structural invariants from the instance's own definition: contiguous ids,
    /// no duplicate preferences, no self-preference in roommates, cross-gender-only lists in
    /// marriage, and in-bounds partner/house ids everywhere.
    pub fn validate(&self) -> Result<()> {
        let n = self.num_agents();
        if n == 0 {
            return Err(KstabError::invalid_input("instance has zero agents"));
        }
        for (idx, agent) in self.agents.iter().enumerate() {
            if agent.id != idx {
                return Err(KstabError::invalid_input(format!(
                    "agent at position {idx} has id {}, ids must be contiguous from 0",
                    agent.id
                )));
            }
            let mut seen = HashSet::with_capacity(agent.preferences.len());
            for &p in &agent.preferences {
                if !seen.insert(p) {
                    return Err(KstabError::invalid_input(format!(
                        "agent {idx} lists partner {p} more than once"
                    )));
                }
            }
            match self.model {
                Model::Marriage { num_men } => {
                    if num_men > n {
                        return Err(KstabError::invalid_input(format!(
                            "num_men {num_men} exceeds agent count {n}"
                        )));
                    }
                    let is_man = idx < num_men;
                    for &p in &agent.preferences {
                        if p >= n {
                            return Err(KstabError::invalid_input(format!(
                                "agent {idx} lists out-of-range partner {p}"
                            )));
                        }
                        if is_man == (p < num_men) {
                            return Err(KstabError::invalid_input(format!(
                                "agent {idx} lists same-side partner {p} in a marriage instance"
                            )));
                        }
                    }
                }
                Model::Roommates => {
                    for &p in &agent.preferences {
                        if p >= n {
                            return Err(KstabError::invalid_input(format!(
                                "agent {idx} lists out-of-range partner {p}"
                            )));
                        }
                        if p == idx {
                            return Err(KstabError::invalid_input(format!(
                                "agent {idx} lists itself as a partner"
                            )));
                        }
                    }
                }
                Model::HouseAllocation { num_houses } | Model::HouseAllocationPartial { num_houses } => {
                    for &p in &agent.preferences {
                        if p >= num_houses {
                            return Err(KstabError::invalid_input(format!(
                                "agent {idx} lists out-of-range house {p} (num_houses={num_houses})"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
