//! Session backend port - named, detachable sessions on the local host.
//!
//! The contract is deliberately narrow: sessions are created detached
//! running a command, listed, fed keystrokes, and polled until they
//! disappear. There is no read-back channel; command delivery is text
//! typed at the session's controlling terminal.

use crate::error::HostResult;
use std::path::Path;
use std::time::Duration;

/// A multiplexer hosting named detachable sessions (GNU screen in
/// production).
pub trait SessionBackend: Send + Sync {
    /// All live session names.
    ///
    /// With `trim_id` the backend's numeric id prefix is stripped and
    /// bare names are returned; without it the raw `"<pid>.<name>"`
    /// tokens come back.
    fn list(&self, trim_id: bool) -> HostResult<Vec<String>>;

    /// Create a detached session named `name` running `command`.
    ///
    /// When `workdir` is given the command runs from that directory.
    fn create(&self, name: &str, command: &str, workdir: Option<&Path>) -> HostResult<()>;

    /// Type `command` (plus a newline) into the session's terminal.
    fn stuff(&self, name: &str, command: &str) -> HostResult<()>;

    /// Block until the session disappears, polling every `poll_interval`.
    ///
    /// Returns [`crate::OperationError::Timeout`] once elapsed wall-clock
    /// time exceeds `timeout`; waits indefinitely when `timeout` is
    /// `None`.
    fn wait_term(
        &self,
        name: &str,
        poll_interval: Duration,
        timeout: Option<Duration>,
    ) -> HostResult<()>;

    /// Whether a session with this name currently exists.
    ///
    /// Fail-closed: a failing `list` propagates its error instead of
    /// reading as "absent".
    fn exists(&self, name: &str) -> HostResult<bool> {
        Ok(self.list(true)?.iter().any(|session| session == name))
    }
}

/// Strip the numeric id from a `"<pid>.<name>"` session token.
///
/// Tokens without a `.` are already bare names and pass through whole.
pub fn trim_session_id(session: &str) -> &str {
    match session.split_once('.') {
        Some((_, name)) => name,
        None => session,
    }
}
