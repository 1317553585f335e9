//! Synchronous external command execution with output capture.

use mcm_core::{HostResult, OperationError};
use std::io;
use std::process::Command;
use tracing::debug;

/// Captured outcome of one external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code, `None` when the process died to a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs one external command to completion, capturing both streams.
///
/// A non-zero exit status is data at this layer, not an error; callers
/// decide what a given code means. Only a failure to spawn at all maps
/// into the error taxonomy.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, argv: &[String]) -> HostResult<CommandOutput>;
}

/// Runner backed by [`std::process::Command`]. The only place in the
/// workspace that spawns processes.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, argv: &[String]) -> HostResult<CommandOutput> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| OperationError::InvalidState("empty command line".to_string()))?;

        debug!(command = %argv.join(" "), "running external command");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|err| spawn_error(program, &err))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn spawn_error(program: &str, err: &io::Error) -> OperationError {
    match err.kind() {
        io::ErrorKind::NotFound => OperationError::NotFound(format!("{program}: {err}")),
        io::ErrorKind::PermissionDenied => {
            OperationError::PermissionDenied(format!("{program}: {err}"))
        }
        _ => OperationError::Unknown(format!("failed to spawn {program}: {err}")),
    }
}
