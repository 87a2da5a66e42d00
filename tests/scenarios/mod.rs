//! # Small problems with known outcomes
//!
//! Problem files are stored next to this module.
use std::path::{Path, PathBuf};

use simplex_tableau::data::linear_program::problem::Problem;
use simplex_tableau::io::import;

/// # Generation and execution
mod test;

/// Folder where the problem files are stored, relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Read a problem file by name, without extension.
fn read(name: &str) -> Problem<f64> {
    import(&problem_file_directory().join(name).with_extension("json")).unwrap()
}
