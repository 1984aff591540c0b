//! Row types and table printing for the benchmark harness. Grounded on `benchmark.c`'s
//! printf-table layout; colored highlighting of pass/fail-style columns is the one idiom this
//! collaborator borrows from the CLI rather than the C original, which had no color at all.

use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VerificationRow {
    pub agents: usize,
    pub avg_time_ms: f64,
    pub std_dev_ms: f64,
    pub trials: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExistenceRow {
    pub agents: usize,
    pub k_ratio: f64,
    pub avg_time_ms: f64,
    pub std_dev_ms: f64,
    pub trials: u32,
    pub exists_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyKRow {
    pub agents: usize,
    pub k: usize,
    pub label: String,
    pub exists: bool,
    pub avg_time_ms: f64,
}

pub fn print_verification_table(rows: &[VerificationRow]) {
    println!("{}", "=== Verification Complexity ===".bold());
    println!("{:>8}  {:>14}  {:>10}  {:>8}", "Agents", "Avg Time (ms)", "Std Dev", "Trials");
    for row in rows {
        println!(
            "{:>8}  {:>14.3}  {:>10.3}  {:>8}",
            row.agents, row.avg_time_ms, row.std_dev_ms, row.trials
        );
    }
}

pub fn print_existence_table(rows: &[ExistenceRow]) {
    println!("{}", "=== Existence Complexity ===".bold());
    println!(
        "{:>8}  {:>5}  {:>14}  {:>10}  {:>8}  {:>8}",
        "Agents", "k/n", "Avg Time (ms)", "Std Dev", "Trials", "Exists"
    );
    for row in rows {
        let exists_cell = format!("{:.2}", row.exists_rate);
        let exists_cell = if row.exists_rate >= 1.0 {
            exists_cell.green()
        } else if row.exists_rate <= 0.0 {
            exists_cell.red()
        } else {
            exists_cell.yellow()
        };
        println!(
            "{:>8}  {:>5.2}  {:>14.3}  {:>10.3}  {:>8}  {:>8}",
            row.agents, row.k_ratio, row.avg_time_ms, row.std_dev_ms, row.trials, exists_cell
        );
    }
}

pub fn print_key_k_table(rows: &[KeyKRow]) {
    println!("{}", "=== Key k Values ===".bold());
    println!("{:>8}  {:>5}  {:<18}  {:>7}  {:>12}", "Agents", "k", "Regime", "Exists", "Time (ms)");
    for row in rows {
        let exists_cell = if row.exists {
            "yes".green()
        } else {
            "no".red()
        };
        println!(
            "{:>8}  {:>5}  {:<18}  {:>7}  {:>12.3}",
            row.agents, row.k, row.label, exists_cell, row.avg_time_ms
        );
    }
}
