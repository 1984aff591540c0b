//! Top-level CLI definition. Dispatch lives in [`crate::cli`]; this module only declares the
//! argument grammar so `Cli::parse()` and its `--help` text stay in one place.

use clap::{Parser, Subcommand, ValueEnum};

/// Research engine for k-stability across house allocation, marriage, and roommates matching.
#[derive(Parser)]
#[command(name = "kstab", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Overrides the default fixed seed for any verb that generates an instance.
    #[arg(long, global = true)]
    pub seed: Option<u32>,

    /// Emit machine-readable JSON instead of a human-readable table.
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise the tracing log level to debug.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Which matching model a model-aware verb should build.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModelArg {
    House,
    Marriage,
    Roommates,
}

#[derive(Subcommand)]
pub enum Command {
    /// Runs smoke checks on core APIs.
    Test,
    /// Fixed-parameter verification and existence timing tables.
    Benchmark,
    /// Generates a random house allocation instance and verifies its identity matching.
    Verify { n: usize, k: usize },
    /// Generates a random house allocation instance and runs the existence engine.
    Existence { n: usize, k: usize },
    /// Prints a random instance for the given model.
    Generate { model: ModelArg, n: usize },
    /// Model-specific verification.
    VerifyModel { model: ModelArg, n: usize, k: usize },
    /// Model-specific existence.
    ExistenceModel { model: ModelArg, n: usize, k: usize },
    /// Enumerator study up to `n_max` (capped at 6).
    BruteForce { n_max: usize },
    /// Random-sampling existence study over an n range.
    LargeRandom { min: usize, max: usize, trials: u32 },
    /// Composite: brute-force + large-random + key-k sweep.
    Comprehensive,
    /// Sweeps constant and proportional k values.
    KeyKValues,
    /// Enumerates all n! matchings of one random house allocation instance.
    BruteForceHouseAllocation { n: usize, k: usize },
}
