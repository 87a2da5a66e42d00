use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Builder;

use simplex_tableau::algorithm::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, solve_with, SolverOptions};
use simplex_tableau::data::linear_program::problem::Problem;
use simplex_tableau::io::import;

/// Solve a linear program with the simplex method, printing every tableau.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// JSON file containing the problem description
    problem_file: PathBuf,
    /// Maximum number of pivots before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Relative costs above minus this value count as nonnegative
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    Builder::new().filter_level(opts.verbose.log_level_filter()).init();

    log::info!("Reading problem file: {:?}", opts.problem_file);
    let problem: Problem<f64> = import(&opts.problem_file)
        .with_context(|| format!("Reading {:?}", opts.problem_file))?;

    let options = SolverOptions { max_iterations: opts.max_iterations, tolerance: opts.tolerance };
    let solved = solve_with(&problem, &options).context("Solving the problem")?;

    println!("{}", solved.trace);
    println!("{}", solved.solution);

    Ok(())
}
