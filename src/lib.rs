//! # A linear program solver
//!
//! Linear programs are solved using the primal Simplex method on a dense tableau. Every tableau
//! visited is recorded, such that the computation can be inspected or displayed afterwards.
//!
//! ```
//! use simplex_tableau::algorithm::solve;
//! use simplex_tableau::data::linear_program::elements::{Objective, Relation};
//! use simplex_tableau::data::linear_program::problem::Problem;
//!
//! let problem = Problem::new(Objective::Maximize, vec![3f64, 5f64])
//!     .with_constraint(vec![1f64, 0f64], Relation::Less, 4f64)
//!     .with_constraint(vec![0f64, 2f64], Relation::Less, 12f64)
//!     .with_constraint(vec![3f64, 2f64], Relation::Less, 18f64);
//!
//! let solved = solve(&problem).unwrap();
//! assert_eq!(solved.trace.nr_iterations(), 2);
//! assert_eq!(solved.solution.objective_value, 36f64);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
