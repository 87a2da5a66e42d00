//! # Representation of optimal solutions
//!
//! Once the simplex method reaches an optimal tableau, the values of the original variables and
//! the objective function are read off the tableau.
use std::fmt;

use itertools::Itertools;
use num_traits::Float;

use crate::algorithm::simplex::tableau::{Label, Tableau};
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::standard_form::StandardForm;

/// Values of the original variables together with the objective function value.
///
/// The objective value is expressed in the direction of the original problem, so for a
/// minimization problem it is the minimum.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// One value per original variable, in order.
    pub variables: Vec<F>,
    #[allow(missing_docs)]
    pub objective_value: F,
}

impl<F: Float> Solution<F> {
    /// Read the solution off a (final) tableau.
    ///
    /// Original variables that are basic take the right-hand side of their row, all others are
    /// zero. Slack variables are not reported.
    pub fn from_tableau(tableau: &Tableau<F>, standard_form: &StandardForm<F>) -> Self {
        let mut variables = vec![F::zero(); standard_form.nr_original_variables];
        for (row, label) in tableau.basis().iter().enumerate() {
            if let Label::Original(index) = *label {
                variables[index] = tableau.rhs(row);
            }
        }

        let value = tableau.objective_function_value();
        let objective_value = match standard_form.original_sense {
            Objective::Maximize => value,
            Objective::Minimize => -value,
        };

        Self { variables, objective_value }
    }
}

impl<F: Float + fmt::Display> fmt::Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Optimal value: {:.2}", self.objective_value)?;
        write!(
            f,
            "Variables: {}",
            self.variables.iter()
                .enumerate()
                .map(|(i, value)| format!("x{} = {:.2}", i + 1, value))
                .join(", "),
        )
    }
}
