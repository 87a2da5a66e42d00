//! # Reading of linear programs
//!
//! Problems are stored as JSON documents of the form
//!
//! ```json
//! {
//!     "sense": "max",
//!     "objective": [3, 5],
//!     "constraints": [
//!         { "coefficients": [1, 0], "relation": "<=", "rhs": 4 },
//!         { "coefficients": [3, 2], "relation": "<=", "rhs": 18 }
//!     ]
//! }
//! ```
//!
//! The `sense` field is optional and defaults to maximization.
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::data::linear_program::problem::Problem;
use crate::io::error::ImportError;

pub mod error;

/// Import a problem from a file.
///
/// Currently only supports the JSON filetype.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read or the contents don't describe
/// a problem, an error type is returned.
pub fn import<F: DeserializeOwned>(file_path: &Path) -> Result<Problem<F>, ImportError> {
    match file_path.extension().map(|extension| extension.to_str()) {
        Some(Some("json")) => {
            let program = fs::read_to_string(file_path)?;
            parse(&program)
        },
        Some(Some(extension)) => Err(ImportError::FileExtension(format!(
            "Could not recognise file extension \"{}\" of file: {:?}",
            extension, file_path,
        ))),
        Some(None) => Err(ImportError::FileExtension(format!(
            "Could not convert OsStr to &str, probably invalid unicode: {:?}",
            file_path,
        ))),
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    }
}

/// Parse a problem from a JSON string.
///
/// # Errors
///
/// If the string is not valid JSON or doesn't have the expected structure.
pub fn parse<F: DeserializeOwned>(program: &str) -> Result<Problem<F>, ImportError> {
    Ok(serde_json::from_str(program)?)
}
