//! `existence` and `existence-model` verbs.

use serde::Serialize;

use crate::cli_app::ModelArg;
use crate::core::config::EngineConfig;
use crate::core::errors::Result;
use crate::existence;
use crate::generators::generate_random_house_allocation;
use crate::model::ProblemInstance;

use super::verify_cmd::build_instance;

#[derive(Serialize)]
struct ExistenceReport {
    n: usize,
    k: usize,
    seed: u32,
    exists: bool,
    witness: Option<Vec<Option<usize>>>,
}

pub fn run(n: usize, k: usize, seed: u32, json: bool, config: &EngineConfig) -> Result<()> {
    let instance = generate_random_house_allocation(n, seed);
    report(&instance, n, k, seed, json, config)
}

pub fn run_model(model: ModelArg, n: usize, k: usize, seed: u32, json: bool, config: &EngineConfig) -> Result<()> {
    let instance = build_instance(model, n, seed);
    report(&instance, instance.num_agents(), k, seed, json, config)
}

fn report(instance: &ProblemInstance, n: usize, k: usize, seed: u32, json: bool, config: &EngineConfig) -> Result<()> {
    let exists = existence::k_stable_exists(instance, k, config)?;
    let witness = if exists { existence::find_k_stable(instance, k, config)? } else { None };

    if json {
        let report = ExistenceReport {
            n,
            k,
            seed,
            exists,
            witness: witness.as_ref().map(|m| m.as_slice().to_vec()),
        };
        println!("{}", serde_json::to_string_pretty(&report).expect("report serializes"));
    } else {
        println!("n={n} k={k} seed={seed} model={}", instance.model.label());
        println!("{k}-stable matching exists: {exists}");
        if let Some(matching) = witness {
            println!("witness: {:?}", matching.as_slice());
        }
    }
    Ok(())
}
