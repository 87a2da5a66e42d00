//! # Dense simplex tableau
//!
//! Contains the simplex tableau and the elementary operations which can be performed upon it. The
//! tableau is stored densely: one row per constraint followed by the objective row, each row
//! holding one entry per variable and a right-hand side.
//!
//! Tableaus are values. A pivot produces a new tableau and leaves the original untouched, such
//! that every intermediate tableau can be kept around for inspection.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter::once;

use itertools::Itertools;
use num_traits::Float;

use crate::data::linear_program::standard_form::StandardForm;

/// Name of a tableau column.
///
/// Indices are zero based; they are displayed one based, as `x1` or `s1`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Label {
    /// A variable of the original problem.
    Original(usize),
    /// The slack (or surplus) variable of a constraint.
    Slack(usize),
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            Label::Original(index) => write!(f, "x{}", index + 1),
            Label::Slack(index) => write!(f, "s{}", index + 1),
        }
    }
}

/// The simplex tableau.
///
/// For `m` constraints and `n` columns, the matrix has `m + 1` rows of length `n + 1`. The last
/// row is the objective ("z") row holding the negated relative costs, the last entry of each row
/// is its right-hand side.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    matrix: Vec<Vec<F>>,
    /// Names of the `n` columns; the right-hand side column is unlabeled.
    column_labels: Vec<Label>,
    /// For each of the `m` constraint rows, the variable that is basic in that row.
    ///
    /// The objective row is not included.
    basis: Vec<Label>,
}

impl<F: Float> Tableau<F> {
    /// Create a tableau from its parts.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Constraint rows followed by the objective row, each ending in a right-hand side.
    /// * `column_labels`: One label per column, excluding the right-hand side.
    /// * `basis`: One label per constraint row.
    pub fn new(matrix: Vec<Vec<F>>, column_labels: Vec<Label>, basis: Vec<Label>) -> Self {
        debug_assert_eq!(matrix.len(), basis.len() + 1);
        debug_assert!(matrix.iter().all(|row| row.len() == column_labels.len() + 1));

        Self { matrix, column_labels, basis }
    }

    /// Lay out a linear program in standard form as an initial tableau.
    ///
    /// The slack variables form the initial basis. Whether that basis is feasible depends on the
    /// problem, see `StandardForm::rows_without_feasible_slack`.
    pub fn from_standard_form(standard_form: &StandardForm<F>) -> Self {
        let column_labels = (0..standard_form.nr_original_variables).map(Label::Original)
            .chain((0..standard_form.nr_slacks).map(Label::Slack))
            .collect();

        let objective_row = standard_form.objective.iter()
            .map(|&cost| -cost)
            .chain((0..standard_form.nr_slacks).map(|_| F::zero()))
            .chain(once(F::zero()));
        let matrix = standard_form.constraints.iter()
            .map(|(row, rhs)| row.iter().copied().chain(once(*rhs)).collect::<Vec<_>>())
            .chain(once(objective_row.collect::<Vec<_>>()))
            .collect();

        let basis = (0..standard_form.nr_slacks).map(Label::Slack).collect();

        Self::new(matrix, column_labels, basis)
    }

    /// Whether the current basic solution is optimal.
    ///
    /// That is the case when no relative cost is below `-tolerance`.
    pub fn is_optimal(&self, tolerance: F) -> bool {
        self.relative_costs().iter().all(|&cost| cost >= -tolerance)
    }

    /// Determine the row to pivot on for a given column, using the minimum ratio test.
    ///
    /// Only rows with a strictly positive entry in the column are considered. On ties, the first
    /// row wins.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut minimum: Option<(usize, F)> = None;
        for (row_index, row) in self.constraint_rows().iter().enumerate() {
            let coefficient = row[column];
            if coefficient > F::zero() {
                let ratio = row[self.nr_columns()] / coefficient;
                match minimum {
                    Some((_, min_ratio)) if ratio >= min_ratio => {},
                    _ => minimum = Some((row_index, ratio)),
                }
            }
        }

        minimum.map(|(row_index, _)| row_index)
    }

    /// Pivot on a cell, bringing the variable of `column` into the basis in row `row`.
    ///
    /// The pivot row is divided by the pivot element, after which the column is eliminated from all
    /// other rows (including the objective row). Afterwards, the column is a unit column.
    ///
    /// # Return value
    ///
    /// A new tableau; `self` is not modified.
    #[must_use]
    pub fn pivot(&self, row: usize, column: usize) -> Self {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_columns());

        let pivot_value = self.matrix[row][column];
        debug_assert!(pivot_value != F::zero());

        let pivot_row = self.matrix[row].iter()
            .map(|&value| value / pivot_value)
            .collect::<Vec<_>>();
        let matrix = self.matrix.iter()
            .enumerate()
            .map(|(i, current)| if i == row {
                pivot_row.clone()
            } else {
                let factor = current[column];
                current.iter()
                    .zip(&pivot_row)
                    .map(|(&value, &pivot_row_value)| value - factor * pivot_row_value)
                    .collect()
            })
            .collect();

        let mut basis = self.basis.clone();
        basis[row] = self.column_labels[column];

        Self::new(matrix, self.column_labels.clone(), basis)
    }

    /// The objective row without its right-hand side.
    pub fn relative_costs(&self) -> &[F] {
        &self.matrix[self.nr_rows()][..self.nr_columns()]
    }

    /// Value of the objective function of the current basic solution, in maximization direction.
    pub fn objective_function_value(&self) -> F {
        self.matrix[self.nr_rows()][self.nr_columns()]
    }

    /// Right-hand side of a constraint row, the value of the basic variable of that row.
    pub fn rhs(&self, row: usize) -> F {
        debug_assert!(row < self.nr_rows());

        self.matrix[row][self.nr_columns()]
    }
}

impl<F> Tableau<F> {
    /// All rows, the objective row last.
    pub fn matrix(&self) -> &[Vec<F>] {
        &self.matrix
    }

    fn constraint_rows(&self) -> &[Vec<F>] {
        &self.matrix[..self.nr_rows()]
    }

    #[allow(missing_docs)]
    pub fn column_labels(&self) -> &[Label] {
        &self.column_labels
    }

    /// Label of the basic variable of each constraint row.
    pub fn basis(&self) -> &[Label] {
        &self.basis
    }

    /// Number of constraint rows, the objective row not included.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of variable columns, the right-hand side not included.
    pub fn nr_columns(&self) -> usize {
        self.column_labels.len()
    }
}

impl<F: Float + Display> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let header = once("Basic".to_string())
            .chain(self.column_labels.iter().map(Label::to_string))
            .chain(once("RHS".to_string()))
            .collect::<Vec<_>>();
        let rows = self.matrix.iter()
            .enumerate()
            .map(|(i, row)| {
                let label = self.basis.get(i).map_or("z".to_string(), Label::to_string);
                once(label)
                    // Don't print "-0.00" for negative zeros
                    .chain(row.iter().map(|&v| format!("{:.2}", if v == F::zero() { F::zero() } else { v })))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let widths = (0..header.len())
            .map(|j| once(&header).chain(&rows).map(|line| line[j].len()).max().unwrap_or(0))
            .collect::<Vec<_>>();
        write_line(f, &header, &widths)?;
        writeln!(f, "{}", "-".repeat(widths.iter().sum::<usize>() + widths.len() - 1))?;
        for row in &rows {
            write_line(f, row, &widths)?;
        }

        Ok(())
    }
}

/// Write one line of cells, the first left aligned and all others right aligned.
fn write_line(f: &mut Formatter, line: &[String], widths: &[usize]) -> FormatResult {
    let cells = line.iter().zip(widths).enumerate()
        .map(|(j, (cell, &width))| if j == 0 {
            format!("{:<width$}", cell, width = width)
        } else {
            format!("{:>width$}", cell, width = width)
        })
        .join(" ");
    writeln!(f, "{}", cells)
}
