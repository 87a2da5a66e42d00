//! # Building blocks to describe linear programs.
use std::ops::Neg;

use num_traits::{One, Zero};
use serde::Deserialize;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
pub enum Relation {
    #[serde(rename = "<=", alias = "≤", alias = "le")]
    Less,
    #[serde(rename = ">=", alias = "≥", alias = "ge")]
    Greater,
    #[serde(rename = "=", alias = "eq")]
    Equal,
}

impl Relation {
    /// Coefficient of the slack (or surplus) variable belonging to a constraint of this type.
    ///
    /// Upper bounds need positive slacks, lower bounds need negative slacks. Equality constraints
    /// get no slack at all, which is represented by a zero coefficient.
    #[must_use]
    pub fn slack_coefficient<F: Zero + One + Neg<Output = F>>(self) -> F {
        match self {
            Relation::Less => F::one(),
            Relation::Greater => -F::one(),
            Relation::Equal => F::zero(),
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
pub enum Objective {
    #[default]
    #[serde(rename = "max", alias = "maximize")]
    Maximize,
    #[serde(rename = "min", alias = "minimize")]
    Minimize,
}
