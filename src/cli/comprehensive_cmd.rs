//! `comprehensive` verb: runs the brute-force, large-random, and key-k studies back to back.

use crate::core::config::EngineConfig;
use crate::core::errors::Result;

use super::{brute_force, key_k_values_cmd, large_random_cmd};

const BRUTE_FORCE_N_MAX: usize = 6;
const LARGE_RANDOM_MIN: usize = 4;
const LARGE_RANDOM_MAX: usize = 10;
const LARGE_RANDOM_TRIALS: u32 = 200;

pub fn run(json: bool, config: &EngineConfig) -> Result<()> {
    brute_force::run(BRUTE_FORCE_N_MAX, json, config)?;
    if !json {
        println!();
    }
    large_random_cmd::run(LARGE_RANDOM_MIN, LARGE_RANDOM_MAX, LARGE_RANDOM_TRIALS, json, config)?;
    if !json {
        println!();
    }
    key_k_values_cmd::run(json, config)
}
