//! Exhaustive and sampled ground-truth studies. Unlike the engine's two collaborators in
//! [`crate::existence`], this module is allowed to be slow: it exists to produce tables the rest
//! of the crate can be checked against, not to answer a single query quickly.

pub mod house_brute_force;
pub mod permutations;
pub mod profiles;

pub use house_brute_force::{analyze_all_house_allocations, BruteForceReport, MatchingAnalysis};
pub use permutations::generate_permutations;
pub use profiles::{existence_rate_table, large_random_study, ExistenceRateRow};
