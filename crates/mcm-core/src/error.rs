//! Error taxonomy shared by every host-control operation.
//!
//! Errors are constructed at the point an operation concludes and carry
//! whatever diagnostics were observed (exit code, captured output). Core
//! code never prints or logs them; rendering is the CLI's job.

use thiserror::Error;

/// Result alias used throughout the host-control layer.
pub type HostResult<T> = Result<T, OperationError>;

/// Why a host-control operation failed.
///
/// The taxonomy is closed on purpose so callers can match exhaustively
/// and react per category instead of string-matching messages.
#[derive(Debug, Clone, Error)]
pub enum OperationError {
    /// An external command ran but reported failure.
    #[error("command failed: {message}")]
    CommandFailed {
        message: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// An operation did not complete within its allotted time.
    #[error("timed out: {message}")]
    Timeout { message: String },

    /// The referenced resource (session, binary, server) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The operating system refused the operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The operation is not valid in the current state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Anything that does not fit the categories above.
    #[error("{0}")]
    Unknown(String),
}

impl OperationError {
    /// Captured diagnostics worth showing the user, if any.
    ///
    /// Kept out of [`std::fmt::Display`] so log lines and one-line error
    /// messages stay short.
    pub fn diagnostics(&self) -> Option<String> {
        match self {
            Self::CommandFailed {
                exit_code, stderr, ..
            } => {
                let mut parts = Vec::new();
                if let Some(code) = exit_code {
                    parts.push(format!("exit code: {code}"));
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    parts.push(format!("stderr: {stderr}"));
                }
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("; "))
                }
            }
            _ => None,
        }
    }
}
