//! Error handling for the plugsmith application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for plugsmith operations.
///
/// This enum represents all possible errors that can occur while generating
/// a plugin. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The destination directory pre-exists; generation aborts before any
    /// filesystem mutation
    #[error("Destination directory already exists: {dest_dir}.")]
    DestinationExists { dest_dir: String },

    /// A source entry could not be read during copy or substitution
    #[error("Cannot read '{path}': {source}.")]
    SourceRead { path: String, source: io::Error },

    /// A destination path could not be written during copy or substitution
    #[error("Cannot write '{path}': {source}.")]
    DestWrite { path: String, source: io::Error },

    #[error("Template directory does not exist: {template_dir}.")]
    TemplateDoesNotExist { template_dir: String },

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors during interactive prompting
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with plugsmith's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
