//! # Recording the steps of the simplex method
//!
//! Every tableau visited by the simplex method is kept, together with the cell that was pivoted on
//! to leave it. This allows the whole computation to be displayed afterwards.
use std::fmt::{Display, Formatter, Result as FormatResult};

use num_traits::Float;

use crate::algorithm::simplex::tableau::Tableau;

/// Position of a pivot element in a tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PivotCell {
    /// Constraint row index.
    pub row: usize,
    /// Column index, the variable that enters the basis.
    pub column: usize,
}

/// One tableau of the computation.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceStep<F> {
    #[allow(missing_docs)]
    pub tableau: Tableau<F>,
    /// Cell of `tableau` that is pivoted on to produce the next step.
    ///
    /// Only the last step has no pivot cell.
    pub pivot: Option<PivotCell>,
}

/// All tableaus visited while solving a problem, in order.
///
/// The first step is the initial tableau, the last step is the optimal tableau.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveTrace<F> {
    steps: Vec<TraceStep<F>>,
}

impl<F> SolveTrace<F> {
    pub(crate) fn new(steps: Vec<TraceStep<F>>) -> Self {
        debug_assert!(!steps.is_empty());
        debug_assert!(steps.last().is_some_and(|step| step.pivot.is_none()));
        debug_assert!(steps.iter().rev().skip(1).all(|step| step.pivot.is_some()));

        Self { steps }
    }

    #[allow(missing_docs)]
    pub fn steps(&self) -> &[TraceStep<F>] {
        &self.steps
    }

    /// Number of pivots that were performed.
    pub fn nr_iterations(&self) -> usize {
        self.steps.len() - 1
    }

    /// The tableau in which the computation ended.
    pub fn final_tableau(&self) -> &Tableau<F> {
        // The trace is never empty, see `new`
        &self.steps[self.steps.len() - 1].tableau
    }
}

impl<F: Float + Display> Display for SolveTrace<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if i == 0 {
                writeln!(f, "Initial tableau")?;
            } else {
                writeln!(f, "Iteration {}", i)?;
            }
            write!(f, "{}", step.tableau)?;
            if let Some(PivotCell { row, column }) = step.pivot {
                writeln!(f, "Pivot element: ({}, {})", row + 1, column + 1)?;
            }
        }

        Ok(())
    }
}
