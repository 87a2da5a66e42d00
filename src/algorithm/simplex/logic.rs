//! # High-level Simplex logic
//!
//! The loop of the primal simplex method. The details of this logic are hidden away mostly in the
//! `Tableau` type.
use std::fmt::Display;

use num_traits::Float;

use crate::algorithm::{SolveError, SolverOptions};
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::simplex::trace::{PivotCell, SolveTrace, TraceStep};

/// Reduces the cost of the basic solution to the minimum, recording every tableau on the way.
///
/// The initial tableau is not checked for feasibility: the method pivots from whatever basis it is
/// given.
///
/// # Arguments
///
/// * `initial`: Tableau to start from.
/// * `options`: Iteration limit and tolerance for the optimality test.
///
/// # Errors
///
/// `SolveError::Unbounded` when a pivot column has no positive entry, and
/// `SolveError::IterationLimitExceeded` when no optimum was reached within the allowed number of
/// pivots. The steps recorded so far are dropped in both cases.
pub(crate) fn primal<F, PR>(
    initial: Tableau<F>,
    options: &SolverOptions<F>,
) -> Result<SolveTrace<F>, SolveError>
where
    F: Float + Display,
    PR: PivotRule,
{
    let mut rule = PR::new();
    let mut steps = Vec::new();
    let mut tableau = initial;
    let mut nr_iterations = 0;

    loop {
        log::trace!("Iteration {}\n{}", nr_iterations, tableau);

        match rule.select_primal_pivot_column(&tableau, options.tolerance) {
            Some(column) => {
                if nr_iterations == options.max_iterations {
                    log::debug!("No optimum after {} iterations", nr_iterations);
                    break Err(SolveError::IterationLimitExceeded { max_iterations: options.max_iterations });
                }

                let Some(row) = tableau.select_primal_pivot_row(column) else {
                    log::debug!("Column {} has no positive entry", tableau.column_labels()[column]);
                    break Err(SolveError::Unbounded);
                };

                let next = tableau.pivot(row, column);
                nr_iterations += 1;
                log::debug!(
                    "Iteration {}: pivot ({}, {}), {} enters, {} leaves, objective {}",
                    nr_iterations, row + 1, column + 1,
                    tableau.column_labels()[column], tableau.basis()[row],
                    next.objective_function_value(),
                );

                steps.push(TraceStep { tableau, pivot: Some(PivotCell { row, column }) });
                tableau = next;
            },
            None => {
                debug_assert!(tableau.is_optimal(options.tolerance));
                steps.push(TraceStep { tableau, pivot: None });
                break Ok(SolveTrace::new(steps));
            },
        }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::{SolveError, SolverOptions};
    use crate::algorithm::simplex::logic::primal;
    use crate::algorithm::simplex::strategy::pivot_rule::MostNegative;
    use crate::algorithm::simplex::tableau::Tableau;
    use crate::algorithm::simplex::trace::PivotCell;
    use crate::data::linear_program::standard_form::StandardForm;
    use crate::tests::{problem_1, problem_2};

    #[test]
    fn test_simplex() {
        let trace = primal::<_, MostNegative>(problem_1::tableau_form(), &SolverOptions::default()).unwrap();

        assert_eq!(trace.nr_iterations(), 2);
        let cells = trace.steps().iter().map(|step| step.pivot).collect::<Vec<_>>();
        assert_eq!(cells, vec![
            Some(PivotCell { row: 1, column: 1 }),
            Some(PivotCell { row: 2, column: 0 }),
            None,
        ]);
        assert_eq!(trace.steps()[0].tableau, problem_1::tableau_form());
        assert_eq!(trace.final_tableau().basis(), problem_1::final_tableau_form().basis());
        assert_eq!(trace.final_tableau().objective_function_value(), 36f64);
    }

    #[test]
    fn steps_follow_from_their_pivot() {
        let trace = primal::<_, MostNegative>(problem_1::tableau_form(), &SolverOptions::default()).unwrap();
        for pair in trace.steps().windows(2) {
            let cell = pair[0].pivot.unwrap();
            assert_eq!(pair[0].tableau.pivot(cell.row, cell.column), pair[1].tableau);
        }
    }

    #[test]
    fn already_optimal() {
        let trace = primal::<_, MostNegative>(problem_1::final_tableau_form(), &SolverOptions::default()).unwrap();
        assert_eq!(trace.nr_iterations(), 0);
        assert_eq!(trace.final_tableau(), &problem_1::final_tableau_form());
    }

    #[test]
    fn unbounded() {
        let tableau = Tableau::from_standard_form(&StandardForm::from_problem(&problem_2::unbounded()));
        assert_eq!(
            primal::<_, MostNegative>(tableau, &SolverOptions::default()),
            Err(SolveError::Unbounded),
        );
    }

    #[test]
    fn iteration_limit_is_inclusive() {
        // Dantzig's rule visits all 2^3 vertices of this cube
        let tableau = || Tableau::from_standard_form(&StandardForm::from_problem(&problem_2::klee_minty(3)));

        let enough = SolverOptions { max_iterations: 7, ..SolverOptions::default() };
        let trace = primal::<_, MostNegative>(tableau(), &enough).unwrap();
        assert_eq!(trace.nr_iterations(), 7);
        assert_eq!(trace.final_tableau().objective_function_value(), 125f64);

        let too_few = SolverOptions { max_iterations: 6, ..SolverOptions::default() };
        assert_eq!(
            primal::<_, MostNegative>(tableau(), &too_few),
            Err(SolveError::IterationLimitExceeded { max_iterations: 6 }),
        );
    }
}
