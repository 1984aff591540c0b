//! `large-random` verb: random-sampling existence study over an explicit `n` range.

use crate::core::config::EngineConfig;
use crate::core::errors::{KstabError, Result};
use crate::enumerator;

pub fn run(min: usize, max: usize, trials: u32, json: bool, config: &EngineConfig) -> Result<()> {
    if min == 0 || max < min {
        return Err(KstabError::invalid_input(format!("expected 1 <= min <= max, got min={min} max={max}")));
    }
    let rows = enumerator::large_random_study(min, max, trials, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows).expect("rows serialize"));
    } else {
        println!("=== Large-Random Existence Study (n in {min}..={max}, trials={trials}) ===");
        println!("{:>4}  {:>4}  {:>10}  {:>14}", "n", "k", "checked", "existence rate");
        for row in &rows {
            println!("{:>4}  {:>4}  {:>10}  {:>14.4}", row.n, row.k, row.instances_checked, row.existence_rate);
        }
    }
    Ok(())
}
