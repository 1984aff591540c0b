//! `generate` verb: print a random instance without running any query against it.

use crate::cli_app::ModelArg;
use crate::core::errors::Result;
use crate::model::ProblemInstance;

use super::verify_cmd::build_instance;

pub fn run(model: ModelArg, n: usize, seed: u32, json: bool) -> Result<()> {
    let instance = build_instance(model, n, seed);
    if json {
        println!("{}", serde_json::to_string_pretty(&instance).expect("instance serializes"));
    } else {
        print_human(&instance, seed);
    }
    Ok(())
}

fn print_human(instance: &ProblemInstance, seed: u32) {
    println!("model={} n={} seed={seed}", instance.model.label(), instance.num_agents());
    for agent in &instance.agents {
        println!("agent {}: {:?}", agent.id, agent.preferences);
    }
}
