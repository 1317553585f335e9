//! Host process controller.
//!
//! Maps logical server names onto namespaced backend sessions and owns
//! the start/stop/run-command lifecycle. State is never cached: every
//! query round-trips to the live session table, so external session
//! changes are picked up on the next call. There is no locking between
//! a state check and a subsequent mutation; callers sequence their own
//! check-then-act.

use crate::domain::HostDescriptor;
use crate::error::HostResult;
use crate::ports::{SessionBackend, trim_session_id};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Namespace prefix for sessions owned by this manager. Keeps managed
/// sessions distinguishable from anything else in the session table.
pub const SESSION_PREFIX: &str = "mcm";

/// Console command a Minecraft server understands as "shut down cleanly".
const STOP_COMMAND: &str = "stop";

/// Timing for the graceful-stop wait.
#[derive(Debug, Clone)]
pub struct StopPolicy {
    /// How often to re-check whether the session is gone.
    pub poll_interval: Duration,
    /// How long to wait before giving up with a timeout.
    pub timeout: Duration,
}

impl Default for StopPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Controls server processes on the local host through a
/// [`SessionBackend`].
pub struct HostService {
    backend: Arc<dyn SessionBackend>,
    stop_policy: StopPolicy,
}

impl HostService {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self::with_stop_policy(backend, StopPolicy::default())
    }

    pub fn with_stop_policy(backend: Arc<dyn SessionBackend>, stop_policy: StopPolicy) -> Self {
        Self {
            backend,
            stop_policy,
        }
    }

    /// Namespace a logical server name into its session name.
    fn local_name(name: &str) -> String {
        format!("{SESSION_PREFIX}-{name}")
    }

    /// Inverse of [`Self::local_name`]. Only valid on names that carry
    /// the prefix.
    fn strip_local_name(session: &str) -> &str {
        &session[SESSION_PREFIX.len() + 1..]
    }

    /// Whether a server with this logical name has a live session.
    ///
    /// Fail-closed: backend listing failures propagate rather than
    /// reading as "not running".
    pub fn is_server_running(&self, name: &str) -> HostResult<bool> {
        self.backend.exists(&Self::local_name(name))
    }

    /// Launch the server inside a fresh detached session.
    ///
    /// No already-running pre-check happens here; the caller decides
    /// whether a duplicate start is an error.
    pub fn start_server(&self, name: &str, workdir: &Path, entrypoint: &str) -> HostResult<()> {
        let session = Self::local_name(name);
        debug!(server = name, session = %session, "starting server session");
        self.backend.create(&session, entrypoint, Some(workdir))
    }

    /// Ask the server to shut down cleanly, then wait for its session to
    /// disappear.
    ///
    /// When delivering the stop command fails the wait is never
    /// attempted; the delivery error comes straight back.
    pub fn stop_server(&self, name: &str) -> HostResult<()> {
        let session = Self::local_name(name);
        debug!(server = name, "stopping server");
        self.backend.stuff(&session, STOP_COMMAND)?;
        self.backend.wait_term(
            &session,
            self.stop_policy.poll_interval,
            Some(self.stop_policy.timeout),
        )
    }

    /// Type a console command into a running server.
    ///
    /// Fire-and-forget: success means the keystrokes were delivered, not
    /// that the server accepted the command.
    pub fn run_in_server(&self, name: &str, command: &str) -> HostResult<()> {
        self.backend.stuff(&Self::local_name(name), command)
    }

    /// Every server this manager is currently running on the host.
    ///
    /// Sessions outside the manager's namespace are ignored.
    pub fn list_running(&self) -> HostResult<Vec<HostDescriptor>> {
        let sessions = self.backend.list(false)?;
        let local_prefix = format!("{SESSION_PREFIX}-");

        let mut running = Vec::new();
        for session in &sessions {
            let trimmed = trim_session_id(session);
            if !trimmed.starts_with(&local_prefix) {
                continue;
            }
            running.push(HostDescriptor {
                name: Self::strip_local_name(trimmed).to_string(),
                host_location: format!("screen@{session}"),
            });
        }
        Ok(running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OperationError;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Recording in-memory backend. Sessions live as raw
    /// `"<pid>.<name>"` tokens so trimming behaves like the real thing.
    #[derive(Default)]
    struct RecordingBackend {
        sessions: Mutex<Vec<String>>,
        created: Mutex<Vec<(String, String, Option<PathBuf>)>>,
        stuffed: Mutex<Vec<(String, String)>>,
        waited: Mutex<Vec<String>>,
        stuff_error: Option<OperationError>,
        wait_error: Option<OperationError>,
        list_error: Option<OperationError>,
    }

    impl RecordingBackend {
        fn with_sessions(sessions: &[&str]) -> Self {
            Self {
                sessions: Mutex::new(sessions.iter().map(ToString::to_string).collect()),
                ..Self::default()
            }
        }
    }

    impl SessionBackend for RecordingBackend {
        fn list(&self, trim_id: bool) -> HostResult<Vec<String>> {
            if let Some(err) = &self.list_error {
                return Err(err.clone());
            }
            let sessions = self.sessions.lock().unwrap();
            Ok(sessions
                .iter()
                .map(|s| {
                    if trim_id {
                        trim_session_id(s).to_string()
                    } else {
                        s.clone()
                    }
                })
                .collect())
        }

        fn create(&self, name: &str, command: &str, workdir: Option<&Path>) -> HostResult<()> {
            self.created.lock().unwrap().push((
                name.to_string(),
                command.to_string(),
                workdir.map(Path::to_path_buf),
            ));
            self.sessions.lock().unwrap().push(format!("100.{name}"));
            Ok(())
        }

        fn stuff(&self, name: &str, command: &str) -> HostResult<()> {
            if let Some(err) = &self.stuff_error {
                return Err(err.clone());
            }
            self.stuffed
                .lock()
                .unwrap()
                .push((name.to_string(), command.to_string()));
            Ok(())
        }

        fn wait_term(
            &self,
            name: &str,
            _poll_interval: Duration,
            _timeout: Option<Duration>,
        ) -> HostResult<()> {
            self.waited.lock().unwrap().push(name.to_string());
            match &self.wait_error {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn service(backend: RecordingBackend) -> (HostService, Arc<RecordingBackend>) {
        let backend = Arc::new(backend);
        (HostService::new(backend.clone()), backend)
    }

    #[test]
    fn test_namespacing_round_trip_is_stable() {
        for name in ["alpha", "my_server", "a-b-c"] {
            let session = HostService::local_name(name);
            assert_eq!(HostService::strip_local_name(&session), name);
            assert_eq!(HostService::local_name(HostService::strip_local_name(&session)), session);
        }
    }

    #[test]
    fn test_started_server_reports_running() {
        let (service, backend) = service(RecordingBackend::default());

        service
            .start_server("alpha", Path::new("/srv/alpha"), "./run.sh")
            .unwrap();
        assert!(service.is_server_running("alpha").unwrap());

        let created = backend.created.lock().unwrap();
        assert_eq!(
            *created,
            vec![(
                "mcm-alpha".to_string(),
                "./run.sh".to_string(),
                Some(PathBuf::from("/srv/alpha"))
            )]
        );
    }

    #[test]
    fn test_unknown_server_is_not_running() {
        let (service, _backend) = service(RecordingBackend::with_sessions(&["1.mcm-alpha"]));
        assert!(!service.is_server_running("beta").unwrap());
    }

    #[test]
    fn test_is_running_propagates_listing_failure() {
        let backend = RecordingBackend {
            list_error: Some(OperationError::CommandFailed {
                message: "screen -ls failed".to_string(),
                exit_code: Some(2),
                stdout: String::new(),
                stderr: String::new(),
            }),
            ..RecordingBackend::default()
        };
        let (service, _backend) = service(backend);

        let err = service.is_server_running("alpha").unwrap_err();
        assert!(matches!(err, OperationError::CommandFailed { .. }));
    }

    #[test]
    fn test_stop_sends_stop_then_waits() {
        let (service, backend) = service(RecordingBackend::with_sessions(&["1.mcm-alpha"]));

        service.stop_server("alpha").unwrap();

        assert_eq!(
            *backend.stuffed.lock().unwrap(),
            vec![("mcm-alpha".to_string(), "stop".to_string())]
        );
        assert_eq!(*backend.waited.lock().unwrap(), vec!["mcm-alpha".to_string()]);
    }

    #[test]
    fn test_stop_skips_wait_when_delivery_fails() {
        let backend = RecordingBackend {
            stuff_error: Some(OperationError::CommandFailed {
                message: "no such session".to_string(),
                exit_code: Some(1),
                stdout: String::new(),
                stderr: String::new(),
            }),
            ..RecordingBackend::default()
        };
        let (service, backend) = service(backend);

        let err = service.stop_server("alpha").unwrap_err();
        assert!(matches!(err, OperationError::CommandFailed { .. }));
        assert!(backend.waited.lock().unwrap().is_empty());
    }

    #[test]
    fn test_stop_propagates_wait_timeout() {
        let backend = RecordingBackend {
            wait_error: Some(OperationError::Timeout {
                message: "still alive".to_string(),
            }),
            ..RecordingBackend::with_sessions(&["1.mcm-alpha"])
        };
        let (service, _backend) = service(backend);

        let err = service.stop_server("alpha").unwrap_err();
        assert!(matches!(err, OperationError::Timeout { .. }));
    }

    #[test]
    fn test_list_running_filters_and_strips_namespace() {
        let (service, _backend) = service(RecordingBackend::with_sessions(&[
            "1.mcm-alpha",
            "2.other-beta",
        ]));

        let running = service.list_running().unwrap();
        assert_eq!(
            running,
            vec![HostDescriptor {
                name: "alpha".to_string(),
                host_location: "screen@1.mcm-alpha".to_string(),
            }]
        );
    }

    #[test]
    fn test_list_running_empty_table() {
        let (service, _backend) = service(RecordingBackend::default());
        assert!(service.list_running().unwrap().is_empty());
    }

    #[test]
    fn test_run_in_server_targets_namespaced_session() {
        let (service, backend) = service(RecordingBackend::with_sessions(&["1.mcm-alpha"]));

        service.run_in_server("alpha", "say hello").unwrap();

        assert_eq!(
            *backend.stuffed.lock().unwrap(),
            vec![("mcm-alpha".to_string(), "say hello".to_string())]
        );
    }

    #[test]
    fn test_custom_stop_policy_reaches_backend() {
        struct PolicyCheck {
            seen: Mutex<Option<(Duration, Option<Duration>)>>,
        }
        impl SessionBackend for PolicyCheck {
            fn list(&self, _trim_id: bool) -> HostResult<Vec<String>> {
                Ok(vec![])
            }
            fn create(&self, _: &str, _: &str, _: Option<&Path>) -> HostResult<()> {
                Ok(())
            }
            fn stuff(&self, _: &str, _: &str) -> HostResult<()> {
                Ok(())
            }
            fn wait_term(
                &self,
                _: &str,
                poll_interval: Duration,
                timeout: Option<Duration>,
            ) -> HostResult<()> {
                *self.seen.lock().unwrap() = Some((poll_interval, timeout));
                Ok(())
            }
        }

        let backend = Arc::new(PolicyCheck {
            seen: Mutex::new(None),
        });
        let service = HostService::with_stop_policy(
            backend.clone(),
            StopPolicy {
                poll_interval: Duration::from_millis(250),
                timeout: Duration::from_secs(3),
            },
        );

        service.stop_server("alpha").unwrap();

        assert_eq!(
            *backend.seen.lock().unwrap(),
            Some((Duration::from_millis(250), Some(Duration::from_secs(3))))
        );
    }
}
