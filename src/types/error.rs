use anyhow::Error;
use thiserror::Error;

/// Application-level error types for r2sweep.
///
/// ## Exit Codes
///
/// Each variant maps to an exit code (via `exit_code()`):
/// - 0: Non-error conditions (Cancelled)
/// - 1: Configuration errors (InvalidConfig)
///
/// Listing failures and per-key or per-batch deletion failures are reported
/// on the console and in the run summary, never as process errors.
#[derive(Error, Debug, PartialEq)]
pub enum SweepError {
    /// Configuration error (missing bucket, credentials, or criteria).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Operation cancelled at the confirmation prompt.
    #[error("Operation cancelled by user")]
    Cancelled,
}

impl SweepError {
    /// Get the appropriate process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::Cancelled => 0,
            SweepError::InvalidConfig(_) => 1,
        }
    }
}

/// Check if an anyhow::Error wraps a cancellation error.
pub fn is_cancelled_error(e: &Error) -> bool {
    if let Some(err) = e.downcast_ref::<SweepError>() {
        return *err == SweepError::Cancelled;
    }
    false
}

/// Extract the exit code from an anyhow::Error, defaulting to 1.
pub fn exit_code_from_error(e: &Error) -> i32 {
    if let Some(err) = e.downcast_ref::<SweepError>() {
        return err.exit_code();
    }
    1
}
