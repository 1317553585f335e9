//! GNU screen session backend.
//!
//! Wraps the `screen` binary: detached session creation, keystroke
//! injection (`stuff`) and session-table listing. Screen's `-ls` output
//! is a header line, one indented line per session whose first field is
//! the `"<pid>.<name>"` token, and a footer line.

use crate::command::{CommandOutput, CommandRunner, SystemCommandRunner};
use mcm_core::names::sanitize_name;
use mcm_core::{HostResult, OperationError, SessionBackend, trim_session_id};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Exit code screen reports from `-ls` when no sessions exist at all.
/// That is an empty table, not a failure.
const NO_SESSIONS_EXIT: i32 = 1;

/// [`SessionBackend`] over the `screen` binary.
pub struct ScreenBackend {
    runner: Box<dyn CommandRunner>,
}

impl ScreenBackend {
    pub fn new() -> Self {
        Self::with_runner(Box::new(SystemCommandRunner))
    }

    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    fn run(&self, argv: &[&str]) -> HostResult<CommandOutput> {
        let argv: Vec<String> = argv.iter().map(ToString::to_string).collect();
        self.runner.run(&argv)
    }
}

impl Default for ScreenBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBackend for ScreenBackend {
    fn list(&self, trim_id: bool) -> HostResult<Vec<String>> {
        let output = self.run(&["screen", "-ls"])?;
        match output.code {
            Some(0 | NO_SESSIONS_EXIT) => {}
            code => {
                return Err(OperationError::CommandFailed {
                    message: "failed to list screen sessions".to_string(),
                    exit_code: code,
                    stdout: output.stdout,
                    stderr: output.stderr,
                });
            }
        }

        let lines: Vec<&str> = output.stdout.lines().collect();
        if lines.len() < 2 {
            return Ok(Vec::new());
        }

        let mut sessions = Vec::new();
        for line in &lines[1..lines.len() - 1] {
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            let name = if trim_id { trim_session_id(token) } else { token };
            sessions.push(name.to_string());
        }
        Ok(sessions)
    }

    fn create(&self, name: &str, command: &str, workdir: Option<&Path>) -> HostResult<()> {
        let name = sanitize_name(name);
        let command = match workdir {
            Some(dir) => format!("cd {} && {command}", dir.display()),
            None => command.to_string(),
        };

        debug!(session = %name, "creating detached screen session");
        let output = self.run(&["screen", "-dmS", &name, "bash", "-c", &command])?;
        if !output.success() {
            return Err(OperationError::CommandFailed {
                message: format!("failed to create screen session '{name}'"),
                exit_code: output.code,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }
        Ok(())
    }

    fn stuff(&self, name: &str, command: &str) -> HostResult<()> {
        let name = sanitize_name(name);
        // screen types exactly what it is given; the newline submits the
        // command to whatever is reading the terminal.
        let keystrokes = format!("{command}\n");

        let output = self.run(&["screen", "-S", &name, "-X", "stuff", &keystrokes])?;
        if !output.success() {
            return Err(OperationError::CommandFailed {
                message: format!("failed to send command to screen session '{name}'"),
                exit_code: output.code,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }
        Ok(())
    }

    fn wait_term(
        &self,
        name: &str,
        poll_interval: Duration,
        timeout: Option<Duration>,
    ) -> HostResult<()> {
        let name = sanitize_name(name);
        let start = Instant::now();

        loop {
            if !self.exists(&name)? {
                return Ok(());
            }
            if let Some(limit) = timeout
                && start.elapsed() > limit
            {
                return Err(OperationError::Timeout {
                    message: format!(
                        "screen session '{name}' still alive after {limit:?}"
                    ),
                });
            }
            thread::sleep(poll_interval);
        }
    }

    fn exists(&self, name: &str) -> HostResult<bool> {
        let name = sanitize_name(name);
        Ok(self.list(true)?.iter().any(|session| *session == name))
    }
}
