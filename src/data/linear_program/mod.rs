//! # Representing linear programs
//!
//! This module contains different representations of linear programs. A `Problem` may contain any
//! type of constraint, a `StandardForm` contains equality constraints only.
pub mod elements;
pub mod problem;
pub mod solution;
pub mod standard_form;
