//! Output formatting utilities.

use anyhow::Result;

use extremum_observers::{render_summary, render_table};
use extremum_solvers::Solution;

/// Prints a heading, the trace table, and the summary of one solution.
pub fn print_solution(solution: &Solution) {
    println!("\n{} search ({})", solution.strategy, solution.direction);
    println!("{}", render_table(&solution.records));
    println!("{}", render_summary(solution));
}

/// Prints solutions as a JSON array.
pub fn print_json(solutions: &[Solution]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(solutions)?);
    Ok(())
}
