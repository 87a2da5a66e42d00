use approx::assert_relative_eq;

use simplex_tableau::algorithm::{solve, solve_with, SolveError, SolverOptions};
use simplex_tableau::algorithm::simplex::trace::PivotCell;
use simplex_tableau::data::linear_program::elements::{Objective, Relation};
use simplex_tableau::data::linear_program::problem::Problem;

use super::read;

fn klee_minty(dimension: i32) -> Problem<f64> {
    (1..=dimension).fold(
        Problem::<f64>::new(Objective::Maximize, (1..=dimension).map(|j| 2f64.powi(dimension - j)).collect()),
        |problem, i| {
            let coefficients = (1..=dimension)
                .map(|j| match j.cmp(&i) {
                    std::cmp::Ordering::Less => 2f64.powi(i - j + 1),
                    std::cmp::Ordering::Equal => 1f64,
                    std::cmp::Ordering::Greater => 0f64,
                })
                .collect();
            problem.with_constraint(coefficients, Relation::Less, 5f64.powi(i))
        },
    )
}

#[test]
fn product_mix() {
    let problem = read("product_mix");
    let solved = solve(&problem).unwrap();

    assert_relative_eq!(solved.solution.variables[0], 2f64, epsilon = 1e-10);
    assert_relative_eq!(solved.solution.variables[1], 6f64, epsilon = 1e-10);
    assert_relative_eq!(solved.solution.objective_value, 36f64, epsilon = 1e-10);

    let cells = solved.trace.steps().iter().map(|step| step.pivot).collect::<Vec<_>>();
    assert_eq!(cells, vec![
        Some(PivotCell { row: 1, column: 1 }),
        Some(PivotCell { row: 2, column: 0 }),
        None,
    ]);
}

#[test]
fn trace_is_displayed() {
    let solved = solve(&read("product_mix")).unwrap();
    let text = solved.trace.to_string();

    assert!(text.starts_with("Initial tableau\nBasic"));
    assert!(text.contains("Pivot element: (2, 2)"));
    assert!(text.contains("Iteration 1\n"));
    assert!(text.contains("Pivot element: (3, 1)"));
    assert!(text.contains("Iteration 2\n"));
    assert!(!text.contains("Iteration 3"));
    assert_eq!(text.matches("Pivot element").count(), 2);
    assert!(text.contains("z     0.00 0.00 0.00  1.50  1.00 36.00"));
}

/// No first phase is performed, so the infeasible starting basis is reported as optimal.
#[test]
fn covering_starts_infeasible() {
    let problem = read("covering");
    let solved = solve(&problem).unwrap();

    assert_eq!(solved.trace.nr_iterations(), 0);
    assert_eq!(solved.solution.variables, vec![0f64, 0f64]);
    assert_eq!(solved.solution.objective_value, 0f64);
    assert!(!problem.is_satisfied_by(&solved.solution.variables, 1e-9));
}

#[test]
fn unbounded() {
    assert_eq!(solve(&read("unbounded")), Err(SolveError::Unbounded));
}

#[test]
fn empty() {
    let problem = Problem::<f64>::new(Objective::Maximize, vec![]);
    assert!(matches!(solve(&problem), Err(SolveError::InvalidInput(_))));
    let problem = Problem::<f64>::new(Objective::Minimize, vec![1f64, 2f64]);
    assert!(matches!(solve(&problem), Err(SolveError::InvalidInput(_))));
}

#[test]
fn iteration_limit() {
    // 2^7 - 1 = 127 pivots are needed
    assert_eq!(
        solve(&klee_minty(7)),
        Err(SolveError::IterationLimitExceeded { max_iterations: 100 }),
    );

    let options = SolverOptions { max_iterations: 10, ..SolverOptions::default() };
    assert_eq!(
        solve_with(&klee_minty(4), &options),
        Err(SolveError::IterationLimitExceeded { max_iterations: 10 }),
    );
}

#[test]
fn slow_but_within_limit() {
    let solved = solve(&klee_minty(6)).unwrap();
    assert_eq!(solved.trace.nr_iterations(), 63);
    assert_eq!(solved.solution.variables, vec![0f64, 0f64, 0f64, 0f64, 0f64, 15625f64]);
    assert_relative_eq!(solved.solution.objective_value, 15625f64);
}

#[test]
fn optimal_solutions_are_feasible() {
    let problems = vec![
        read("product_mix"),
        Problem::new(Objective::Maximize, vec![2f64, 3f64, 4f64])
            .with_constraint(vec![3f64, 2f64, 1f64], Relation::Less, 10f64)
            .with_constraint(vec![2f64, 5f64, 3f64], Relation::Less, 15f64),
        Problem::new(Objective::Maximize, vec![5f64, 4f64, 3f64])
            .with_constraint(vec![2f64, 3f64, 1f64], Relation::Less, 5f64)
            .with_constraint(vec![4f64, 1f64, 2f64], Relation::Less, 11f64)
            .with_constraint(vec![3f64, 4f64, 2f64], Relation::Less, 8f64),
        klee_minty(5),
    ];
    let expected = [36f64, 20f64, 13f64, 3125f64];

    for (problem, expected) in problems.iter().zip(expected) {
        let solved = solve(problem).unwrap();
        assert!(solved.trace.final_tableau().is_optimal(1e-10));
        assert!(problem.is_satisfied_by(&solved.solution.variables, 1e-9));
        assert_relative_eq!(solved.solution.objective_value, expected, epsilon = 1e-9);
        assert_relative_eq!(problem.objective_value(&solved.solution.variables), expected, epsilon = 1e-9);
    }
}

#[test]
fn pivot_columns_become_unit_columns() {
    let solved = solve(&read("product_mix")).unwrap();
    for step in solved.trace.steps() {
        if let Some(PivotCell { row, column }) = step.pivot {
            let next = step.tableau.pivot(row, column);
            for (i, matrix_row) in next.matrix().iter().enumerate() {
                assert_eq!(matrix_row[column], if i == row { 1f64 } else { 0f64 });
            }
        }
    }
}
