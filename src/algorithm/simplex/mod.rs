//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm operates on a dense tableau and only implements the second phase: the slack
//! variables are taken as the initial basis.
pub mod logic;
pub mod strategy;
pub mod tableau;
pub mod trace;
