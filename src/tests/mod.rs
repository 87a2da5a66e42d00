//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn problem()`
//! * `fn standard_form()`
//! * `fn tableau_form()`
//! * `fn final_tableau_form()`
