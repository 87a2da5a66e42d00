//! # Linear programs as entered by a user
//!
//! A `Problem` is the input of the solver: a linear objective function to maximize or minimize,
//! subject to a list of linear (in)equalities. All variables are implicitly nonnegative.
use num_traits::Float;
use serde::Deserialize;

use crate::algorithm::SolveError;
use crate::data::linear_program::elements::{Objective, Relation};

/// A single linear (in)equality `coefficients · x (relation) rhs`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Constraint<F> {
    /// One coefficient per variable of the problem.
    pub coefficients: Vec<F>,
    #[allow(missing_docs)]
    pub relation: Relation,
    /// Right-hand side.
    pub rhs: F,
}

impl<F> Constraint<F> {
    /// Create a new constraint.
    pub fn new(coefficients: Vec<F>, relation: Relation, rhs: F) -> Self {
        Self { coefficients, relation, rhs }
    }
}

impl<F: Float> Constraint<F> {
    /// Evaluate the left-hand side for the given variable values.
    pub fn lhs(&self, values: &[F]) -> F {
        self.coefficients.iter()
            .zip(values)
            .fold(F::zero(), |total, (&coefficient, &value)| total + coefficient * value)
    }

    /// Whether the values satisfy this constraint, allowing a violation of at most `tolerance`.
    pub fn is_satisfied_by(&self, values: &[F], tolerance: F) -> bool {
        let lhs = self.lhs(values);
        match self.relation {
            Relation::Less => lhs <= self.rhs + tolerance,
            Relation::Greater => lhs >= self.rhs - tolerance,
            Relation::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// A linear program in the form in which it is entered.
///
/// Every constraint should have exactly one coefficient per variable; this is checked by
/// `validate` before the problem is solved.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Problem<F> {
    /// Direction of optimization.
    #[serde(default)]
    pub sense: Objective,
    /// Cost coefficient of each variable.
    pub objective: Vec<F>,
    #[allow(missing_docs)]
    pub constraints: Vec<Constraint<F>>,
}

impl<F> Problem<F> {
    /// Create a problem without any constraints.
    ///
    /// Constraints can be added with `with_constraint`.
    pub fn new(sense: Objective, objective: Vec<F>) -> Self {
        Self { sense, objective, constraints: Vec::new() }
    }

    /// Add a constraint, builder style.
    #[must_use]
    pub fn with_constraint(mut self, coefficients: Vec<F>, relation: Relation, rhs: F) -> Self {
        self.constraints.push(Constraint::new(coefficients, relation, rhs));
        self
    }

    /// Number of (original, non-slack) variables.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }

    #[allow(missing_docs)]
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }
}

impl<F: Float> Problem<F> {
    /// Check that the problem can be handed to the solver.
    ///
    /// # Errors
    ///
    /// `SolveError::InvalidInput` if the objective or the constraint list is empty, if a
    /// constraint has the wrong number of coefficients or if any number is not finite.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.objective.is_empty() || self.constraints.is_empty() {
            return Err(SolveError::InvalidInput(
                "please define the objective function and constraints".to_string(),
            ));
        }
        if !self.objective.iter().all(|c| c.is_finite()) {
            return Err(SolveError::InvalidInput(
                "objective function coefficients should be finite".to_string(),
            ));
        }

        for (i, constraint) in self.constraints.iter().enumerate() {
            if constraint.coefficients.len() != self.nr_variables() {
                return Err(SolveError::InvalidInput(format!(
                    "constraint {} has {} coefficients, but the problem has {} variables",
                    i + 1, constraint.coefficients.len(), self.nr_variables(),
                )));
            }
            if !constraint.coefficients.iter().chain([&constraint.rhs]).all(|v| v.is_finite()) {
                return Err(SolveError::InvalidInput(format!(
                    "constraint {} contains a value that is not finite", i + 1,
                )));
            }
        }

        Ok(())
    }

    /// Objective function value of the given variable values, in the original direction.
    pub fn objective_value(&self, values: &[F]) -> F {
        self.objective.iter()
            .zip(values)
            .fold(F::zero(), |total, (&cost, &value)| total + cost * value)
    }

    /// Whether the values are nonnegative and satisfy every constraint within `tolerance`.
    pub fn is_satisfied_by(&self, values: &[F], tolerance: F) -> bool {
        values.len() == self.nr_variables()
            && values.iter().all(|&v| v >= -tolerance)
            && self.constraints.iter().all(|constraint| constraint.is_satisfied_by(values, tolerance))
    }
}
