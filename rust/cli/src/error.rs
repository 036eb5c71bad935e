//! Error types for the CLI application.
//!
//! `CliError` is what every command handler returns; [`crate::run`] turns it
//! into an `Error: ...` line on stderr and exit code `2`.
//!
//! ## Batch Validation Errors
//!
//! `BatchValidationError<T>` collects one error per bad item when a command
//! takes several inputs at once (for example the card labels given to
//! `classify`), so the user sees every problem in a single pass.

use std::fmt;

use handsim_engine::SimError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// The simulation core rejected the run parameters
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<SimError> for CliError {
    fn from(error: SimError) -> Self {
        CliError::Engine(error.to_string())
    }
}

/// Generic error type for batch validation operations.
///
/// # Type Parameters
///
/// * `T` - Context identifying the failed item (a position, the raw input
///   token, ...). Must implement `Display` for error formatting.
///
/// # Examples
///
/// ```rust
/// use handsim_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: "Zx".to_string(),
///     message: "unknown suit 'x'".to_string(),
/// };
/// assert_eq!(error.to_string(), "Zx: unknown suit 'x'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}
