//! # Error reporting for reading of linear program files
//!
//! Describes any problems encountered during reading and parsing.
use std::io;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem file: {0}")]
    Io(#[from] io::Error),
    /// Contents of the file could not be parsed into a linear program.
    ///
    /// A problem that is parsed successfully may still be inconsistent, that is only detected by
    /// `Problem::validate`.
    #[error("could not parse the problem: {0}")]
    Json(#[from] serde_json::Error),
}
