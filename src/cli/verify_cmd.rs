//! `verify` and `verify-model` verbs.

use serde::Serialize;

use crate::cli_app::ModelArg;
use crate::core::config::EngineConfig;
use crate::core::errors::Result;
use crate::generators::{generate_random_house_allocation, generate_random_marriage, generate_random_roommates};
use crate::model::ops::trivial_matching;
use crate::model::ProblemInstance;
use crate::verifier;

#[derive(Serialize)]
struct VerifyReport {
    n: usize,
    k: usize,
    seed: u32,
    is_k_stable: bool,
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
    let matching = trivial_matching(instance);
    let stable = verifier::is_k_stable(&matching, instance, k, config)?;
    if json {
        let report = VerifyReport { n, k, seed, is_k_stable: stable };
        println!("{}", serde_json::to_string_pretty(&report).expect("report serializes"));
    } else {
        println!("n={n} k={k} seed={seed} model={}", instance.model.label());
        println!("identity matching is {}-stable: {}", k, stable);
    }
    Ok(())
}

pub(super) fn build_instance(model: ModelArg, n: usize, seed: u32) -> ProblemInstance {
    match model {
        ModelArg::House => generate_random_house_allocation(n, seed),
        ModelArg::Marriage => {
            let num_men = n / 2;
            generate_random_marriage(num_men, n - num_men, seed)
        }
        ModelArg::Roommates => generate_random_roommates(n, seed),
    }
}
