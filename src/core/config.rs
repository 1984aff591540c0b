//! Tuning constants for the verifier and existence engines.
//!
//! Nothing here is persisted or read from the environment: it's an in-process, `Default`-
//! implementing bundle threaded by reference into every entry point, the same way the teacher
//! threads its own `Config` through `cli/install.rs`.

use serde::Serialize;

/// Heuristic knobs for coalition search and existence-engine regime dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineConfig {
    /// How far past `k` the verifier will grow a candidate coalition before giving up
    /// (`k..=k+offset`).
    pub coalition_size_cap_offset: usize,
    /// Coalition sizes at or below this are searched exhaustively; above it, the search
    /// settles for the single largest greedy candidate set.
    pub exhaustive_coalition_limit: usize,
    /// `k / n` at or below this selects the small-k regime.
    pub small_k_rho_cutoff: f64,
    /// `k / n` at or above this selects the large-k regime.
    pub large_k_rho_cutoff: f64,
    /// `k / n` above this makes the large-k regime report "no witness" outright rather than
    /// falling through to the general pruning search.
    pub large_k_giveup_rho_cutoff: f64,
    /// Fraction of each agent's own preference list that counts as "happy enough to accept"
    /// in the small-k greedy construction.
    pub greedy_top_half_fraction: f64,
    /// Same, for the large-k greedy construction.
    pub greedy_top_third_fraction: f64,
    /// Agents matched no better than this rank (0-indexed) don't count toward the pruning
    /// search's blocking-potential score.
    pub promising_rank_cutoff: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            coalition_size_cap_offset: 5,
            exhaustive_coalition_limit: 6,
            small_k_rho_cutoff: 0.1,
            large_k_rho_cutoff: 0.8,
            large_k_giveup_rho_cutoff: 0.9,
            greedy_top_half_fraction: 0.5,
            greedy_top_third_fraction: 1.0 / 3.0,
            promising_rank_cutoff: 2,
        }
    }
}
