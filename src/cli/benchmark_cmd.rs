//! `benchmark` verb: fixed-parameter verification and existence timing tables.

use crate::benchmark;
use crate::core::config::EngineConfig;
use crate::core::errors::Result;

const MAX_AGENTS: usize = 20;
const TRIALS: u32 = 5;

pub fn run(json: bool, config: &EngineConfig) -> Result<()> {
    let verification_rows = benchmark::verification_complexity(MAX_AGENTS, TRIALS, config)?;
    let existence_rows = benchmark::existence_complexity(MAX_AGENTS, TRIALS, config)?;

    if json {
        let combined = serde_json::json!({
            "generated_at": chrono::Utc::now(),
            "verification": verification_rows,
            "existence": existence_rows,
        });
        println!("{}", serde_json::to_string_pretty(&combined).expect("report serializes"));
    } else {
        benchmark::print_verification_table(&verification_rows);
        println!();
        benchmark::print_existence_table(&existence_rows);
    }
    Ok(())
}
