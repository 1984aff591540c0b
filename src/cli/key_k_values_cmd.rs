//! `key-k-values` verb: sweeps constant (1, 2, 3) and proportional (n/4, n/2, 3n/4) k values.

use crate::benchmark;
use crate::core::config::EngineConfig;
use crate::core::errors::Result;

/// Agent count used for the sweep. Fixed rather than argument-driven, matching the verb's
/// parameterless signature.
const SWEEP_AGENTS: usize = 12;

pub fn run(json: bool, config: &EngineConfig) -> Result<()> {
    let rows = benchmark::key_k_values(SWEEP_AGENTS, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&rows).expect("rows serialize"));
    } else {
        benchmark::print_key_k_table(&rows);
    }
    Ok(())
}
