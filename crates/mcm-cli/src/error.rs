//! CLI error type and exit-code mapping.

use mcm_core::paths::PathError;
use mcm_core::{OperationError, ProfileStoreError};
use mcm_runtime::{BackupError, DetectError};
use thiserror::Error;

/// Everything a command handler can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Host(#[from] OperationError),

    #[error("{0}")]
    Profile(#[from] ProfileStoreError),

    #[error("{0}")]
    Backup(#[from] BackupError),

    #[error("{0}")]
    Platform(#[from] DetectError),

    #[error("{0}")]
    Paths(#[from] PathError),

    #[error("invalid arguments: {0}")]
    Arguments(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),

    /// The user declined a confirmation prompt.
    #[error("aborted")]
    Aborted,
}

impl CliError {
    /// Process exit code, sysexits-style where a category fits.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,                  // EX_USAGE
            Self::Profile(_) => 66,                   // EX_NOINPUT
            Self::Platform(_) => 69,                  // EX_UNAVAILABLE
            Self::Host(_) => 71,                      // EX_OSERR
            Self::Io(_) | Self::Backup(_) => 74,      // EX_IOERR
            Self::Paths(_) => 78,                     // EX_CONFIG
            Self::Other(_) | Self::Aborted => 1,
        }
    }
}
