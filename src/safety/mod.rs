//! Safety gate for destructive operations.
//!
//! Deletion only proceeds when the user types the exact literal `DELETE`
//! at the confirmation prompt. Anything else — empty input, lowercase
//! `delete`, trailing whitespace — cancels the operation. Dry-run mode
//! never reaches the prompt.

use anyhow::{Result, anyhow};
use std::io::{BufRead, Write};

use crate::types::error::SweepError;

/// The literal the user must type to confirm deletion.
pub const CONFIRMATION_TOKEN: &str = "DELETE";

// ---------------------------------------------------------------------------
// PromptHandler trait (for testability)
// ---------------------------------------------------------------------------

/// Trait for handling user prompts, enabling testability.
///
/// The default implementation ([`StdioPromptHandler`]) uses stdin/stdout.
/// Tests can provide custom implementations to avoid blocking on user input.
pub trait PromptHandler: Send + Sync {
    /// Display the confirmation prompt and read a line of user input.
    ///
    /// Only the line terminator is stripped from the returned string;
    /// surrounding whitespace is preserved so that it cannot satisfy the
    /// exact-literal check by accident.
    fn read_confirmation(&self) -> Result<String>;
}

/// Default prompt handler using stdin/stdout.
///
/// Uses `print!` for the prompt (not tracing): the prompt is part of the
/// user-facing console surface, not diagnostics.
pub struct StdioPromptHandler;

impl PromptHandler for StdioPromptHandler {
    fn read_confirmation(&self) -> Result<String> {
        print!("Type '{CONFIRMATION_TOKEN}' to confirm: ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().lock().read_line(&mut input)?;

        if input.ends_with('\n') {
            input.pop();
            if input.ends_with('\r') {
                input.pop();
            }
        }
        Ok(input)
    }
}

// ---------------------------------------------------------------------------
// SafetyChecker
// ---------------------------------------------------------------------------

/// Validates the confirmation gate before deletion.
pub struct SafetyChecker {
    prompt_handler: Box<dyn PromptHandler>,
}

impl SafetyChecker {
    pub fn new() -> Self {
        Self {
            prompt_handler: Box::new(StdioPromptHandler),
        }
    }

    /// Create a SafetyChecker with a custom prompt handler (for testing).
    pub fn with_prompt_handler(prompt_handler: Box<dyn PromptHandler>) -> Self {
        Self { prompt_handler }
    }

    /// Prompt the user and require the exact confirmation literal.
    ///
    /// Returns `Err(SweepError::Cancelled)` for any other input.
    pub fn confirm_deletion(&self) -> Result<()> {
        let input = self.prompt_handler.read_confirmation()?;

        if input != CONFIRMATION_TOKEN {
            return Err(anyhow!(SweepError::Cancelled));
        }

        Ok(())
    }
}

impl Default for SafetyChecker {
    fn default() -> Self {
        Self::new()
    }
}
