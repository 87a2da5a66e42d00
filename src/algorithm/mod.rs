//! # Algorithms
//!
//! Solving a `Problem` happens in four steps: conversion to standard form, construction of the
//! initial tableau, pivoting until optimality and reading off the solution.
use std::fmt::Display;

use num_traits::Float;
use thiserror::Error;

use crate::algorithm::simplex::logic::primal;
use crate::algorithm::simplex::strategy::pivot_rule::MostNegative;
use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::simplex::trace::SolveTrace;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;

pub mod simplex;

/// Default number of pivots after which the simplex method gives up.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Default tolerance below zero that a relative cost may have in an optimal tableau.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Reasons for which no solution is returned.
///
/// None of these are worth retrying with the same input.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The problem is empty or inconsistent; the contained `String` is a message for the end user.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A column that could improve the objective function has no positive entry.
    #[error("problem is unbounded")]
    Unbounded,
    /// The simplex method didn't reach an optimum within the allowed number of pivots.
    #[error("maximum number of iterations ({max_iterations}) reached")]
    IterationLimitExceeded {
        #[allow(missing_docs)]
        max_iterations: usize,
    },
}

/// Parameters of the simplex method.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverOptions<F> {
    /// Maximum number of pivots. A problem that is optimal after exactly this many pivots is
    /// solved.
    pub max_iterations: usize,
    /// A tableau is optimal when all relative costs are at least `-tolerance`.
    pub tolerance: F,
}

impl<F: Float> Default for SolverOptions<F> {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: F::from(DEFAULT_TOLERANCE).unwrap_or_else(F::epsilon),
        }
    }
}

/// The outcome of a successful solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Solved<F> {
    /// Every tableau from the initial to the optimal one.
    pub trace: SolveTrace<F>,
    #[allow(missing_docs)]
    pub solution: Solution<F>,
}

/// Solve a problem with the default options.
///
/// See `solve_with`.
pub fn solve<F: Float + Display>(problem: &Problem<F>) -> Result<Solved<F>, SolveError> {
    solve_with(problem, &SolverOptions::default())
}

/// Solve a problem with the primal simplex method.
///
/// No first phase is performed: the slack variables form the initial basis, also when that basis
/// is not feasible (for `Greater` and `Equal` constraints, or negative right-hand sides). In that
/// case a warning is logged and the result is not guaranteed to be feasible.
///
/// # Errors
///
/// `SolveError::InvalidInput` if the problem doesn't pass `Problem::validate`,
/// `SolveError::Unbounded` and `SolveError::IterationLimitExceeded` as described at
/// `simplex::logic::primal`.
pub fn solve_with<F: Float + Display>(
    problem: &Problem<F>,
    options: &SolverOptions<F>,
) -> Result<Solved<F>, SolveError> {
    problem.validate()?;
    log::info!(
        "Solving a problem with {} variables and {} constraints",
        problem.nr_variables(), problem.nr_constraints(),
    );

    let standard_form = StandardForm::from_problem(problem);
    let infeasible_rows = standard_form.rows_without_feasible_slack();
    if !infeasible_rows.is_empty() {
        log::warn!(
            "The initial basis is not feasible in constraint(s) {:?}; no first phase is performed, \
             the result may violate these constraints",
            infeasible_rows.iter().map(|i| i + 1).collect::<Vec<_>>(),
        );
    }

    let initial = Tableau::from_standard_form(&standard_form);
    let trace = primal::<_, MostNegative>(initial, options)?;
    let solution = Solution::from_tableau(trace.final_tableau(), &standard_form);
    log::info!(
        "Optimum {} found after {} iterations",
        solution.objective_value, trace.nr_iterations(),
    );

    Ok(Solved { trace, solution })
}
