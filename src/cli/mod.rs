//! Verb dispatch. Each submodule owns one CLI verb's behaviour; this module only resolves the
//! parsed [`crate::cli_app::Command`] to a handler and threads the shared `--seed`/`--json`
//! flags and [`EngineConfig`] through.

mod benchmark_cmd;
mod brute_force;
mod comprehensive_cmd;
mod existence_cmd;
mod generate;
mod key_k_values_cmd;
mod large_random_cmd;
mod smoke;
mod verify_cmd;

use tracing::info;

use crate::cli_app::{Cli, Command};
use crate::core::config::EngineConfig;
use crate::core::errors::Result;

/// The engine's default fixed seed, used whenever a verb generates an instance and the caller
/// didn't override it with `--seed`.
pub const DEFAULT_SEED: u32 = 42;

pub fn run(cli: &Cli) -> Result<()> {
    let config = EngineConfig::default();
    let seed = cli.seed.unwrap_or(DEFAULT_SEED);
    info!(verb = ?command_name(&cli.command), seed, json = cli.json, "dispatching verb");

    match &cli.command {
        Command::Test => smoke::run(),
        Command::Benchmark => benchmark_cmd::run(cli.json, &config),
        Command::Verify { n, k } => verify_cmd::run(*n, *k, seed, cli.json, &config),
        Command::Existence { n, k } => existence_cmd::run(*n, *k, seed, cli.json, &config),
        Command::Generate { model, n } => generate::run(*model, *n, seed, cli.json),
        Command::VerifyModel { model, n, k } => verify_cmd::run_model(*model, *n, *k, seed, cli.json, &config),
        Command::ExistenceModel { model, n, k } => existence_cmd::run_model(*model, *n, *k, seed, cli.json, &config),
        Command::BruteForce { n_max } => brute_force::run(*n_max, cli.json, &config),
        Command::LargeRandom { min, max, trials } => large_random_cmd::run(*min, *max, *trials, cli.json, &config),
        Command::Comprehensive => comprehensive_cmd::run(cli.json, &config),
        Command::KeyKValues => key_k_values_cmd::run(cli.json, &config),
        Command::BruteForceHouseAllocation { n, k } => brute_force::run_house_allocation(*n, *k, cli.json, &config),
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Test => "test",
        Command::Benchmark => "benchmark",
        Command::Verify { .. } => "verify",
        Command::Existence { .. } => "existence",
        Command::Generate { .. } => "generate",
        Command::VerifyModel { .. } => "verify-model",
        Command::ExistenceModel { .. } => "existence-model",
        Command::BruteForce { .. } => "brute-force",
        Command::LargeRandom { .. } => "large-random",
        Command::Comprehensive => "comprehensive",
        Command::KeyKValues => "key-k-values",
        Command::BruteForceHouseAllocation { .. } => "brute-force-house-allocation",
    }
}
