//! # Linear programs in standard form
//!
//! The problem is rewritten as a maximization with one slack (or surplus) column per constraint.
//! No artificial variables are introduced: rows of `Greater` or `Equal` type, or rows with a
//! negative right-hand side, do not get a feasible starting basis.
use num_traits::Float;

use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::Problem;

/// A linear program with all inequalities turned into equalities.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    /// Objective function, always to be maximized. Has length `nr_original_variables`.
    pub objective: Vec<F>,
    /// Rows of length `nr_original_variables + nr_slacks` together with their right-hand side.
    pub constraints: Vec<(Vec<F>, F)>,
    #[allow(missing_docs)]
    pub nr_original_variables: usize,
    /// Always equal to the number of constraints.
    pub nr_slacks: usize,
    /// Direction of optimization of the problem this form was derived from.
    pub original_sense: Objective,
}

impl<F: Float> StandardForm<F> {
    /// Convert a problem into standard form.
    ///
    /// Minimization problems are negated. Constraint `i` gets slack column `i` with coefficient
    /// `+1` for `Less`, `-1` for `Greater` and `0` for `Equal`, all other slack columns are zero.
    ///
    /// The problem is assumed to be valid, see `Problem::validate`.
    pub fn from_problem(problem: &Problem<F>) -> Self {
        debug_assert!(problem.validate().is_ok());

        let objective = match problem.sense {
            Objective::Maximize => problem.objective.clone(),
            Objective::Minimize => problem.objective.iter().map(|&c| -c).collect(),
        };

        let nr_slacks = problem.nr_constraints();
        let constraints = problem.constraints.iter()
            .enumerate()
            .map(|(i, constraint)| {
                let slacks = (0..nr_slacks).map(|j| if j == i {
                    constraint.relation.slack_coefficient()
                } else {
                    F::zero()
                });
                let row = constraint.coefficients.iter().copied().chain(slacks).collect::<Vec<_>>();

                (row, constraint.rhs)
            })
            .collect();

        Self {
            objective,
            constraints,
            nr_original_variables: problem.nr_variables(),
            nr_slacks,
            original_sense: problem.sense,
        }
    }

    /// Total number of variables, original and slack.
    pub fn nr_columns(&self) -> usize {
        self.nr_original_variables + self.nr_slacks
    }

    /// Indices of the constraints for which the slack variable is not a feasible basic variable.
    ///
    /// That is the case when the slack column of a row is not `+1`, or when its right-hand side is
    /// negative.
    pub fn rows_without_feasible_slack(&self) -> Vec<usize> {
        self.constraints.iter()
            .enumerate()
            .filter(|(i, (row, rhs))| {
                row[self.nr_original_variables + *i] != F::one() || *rhs < F::zero()
            })
            .map(|(i, _)| i)
            .collect()
    }
}
