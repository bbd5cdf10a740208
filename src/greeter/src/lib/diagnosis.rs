use anyhow::Error as AnyhowError;
use greeter_core::error::clock::ClockError;
use std::io;
use thiserror::Error as ThisError;

/// Contains two Option<Strings> that can be displayed to the user:
///   - Error explanation: Goes into a bit of detail on what the error is.
///   - Action suggestion: Tells the user how to move forward to resolve the error.
pub type Diagnosis = (Option<String>, Option<String>);
pub const NULL_DIAGNOSIS: Diagnosis = (None, None);

#[derive(ThisError, Debug)]
// This message will appear in the context trace of the stack. The diagnosis should not be displayed there yet.
#[error("Diagnosis was added here.")]
/// Attach with .context(err: DiagnosedError) to skip the generic diagnosis.
/// The last-added explanation and suggestion are printed out.
pub struct DiagnosedError {
    /// A user-friendly explanation of what went wrong.
    pub error_explanation: Option<String>,

    /// Suggestions for the user on how to move forward to recover from the error.
    pub action_suggestion: Option<String>,
}

impl DiagnosedError {
    pub fn new(error_explanation: String, action_suggestion: String) -> Self {
        Self {
            error_explanation: Some(error_explanation),
            action_suggestion: Some(action_suggestion),
        }
    }
}

/// Attempts to give helpful suggestions on how to resolve errors.
pub fn diagnose(err: &AnyhowError) -> Diagnosis {
    if let Some(diagnosed_error) = err.downcast_ref::<DiagnosedError>() {
        (
            diagnosed_error.error_explanation.clone(),
            diagnosed_error.action_suggestion.clone(),
        )
    } else if let Some(clock_err) = err.downcast_ref::<ClockError>() {
        match clock_err {
            ClockError::FormatTimeFailed(_) => diagnose_clock(),
        }
    } else if let Some(io_err) = err.downcast_ref::<io::Error>() {
        match io_err.kind() {
            io::ErrorKind::BrokenPipe => diagnose_broken_pipe(),
            _ => NULL_DIAGNOSIS,
        }
    } else {
        NULL_DIAGNOSIS
    }
}

fn diagnose_clock() -> Diagnosis {
    let error_explanation = "The system clock reported a time that cannot be displayed.";
    let action_suggestion = "Check the system date and time settings.";
    (
        Some(error_explanation.to_string()),
        Some(action_suggestion.to_string()),
    )
}

fn diagnose_broken_pipe() -> Diagnosis {
    let error_explanation = "Standard output was closed before all lines were written.";
    let action_suggestion =
        "If the output is piped into another program, make sure it reads all of it (e.g. avoid `| head -n 1`).";
    (
        Some(error_explanation.to_string()),
        Some(action_suggestion.to_string()),
    )
}
