//! Session backend detection.
//!
//! Inspects the platform and available tooling once at startup and
//! hands back the one supported backend. Unsupported hosts fail fast
//! with an actionable message instead of breaking later mid-operation.

use crate::screen::ScreenBackend;
use mcm_core::SessionBackend;
use std::sync::Arc;
use thiserror::Error;

/// Why no session backend could be constructed on this host.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("system requirements not met, please install: {0}")]
    MissingTool(&'static str),

    #[error("platform '{0}' is not supported")]
    UnsupportedPlatform(&'static str),
}

/// Pick the session backend for this host.
///
/// Linux with GNU screen on PATH is the only supported combination.
#[cfg(target_os = "linux")]
pub fn detect_session_backend() -> Result<Arc<dyn SessionBackend>, DetectError> {
    if which::which("screen").is_err() {
        return Err(DetectError::MissingTool("screen"));
    }
    Ok(Arc::new(ScreenBackend::new()))
}

#[cfg(not(target_os = "linux"))]
pub fn detect_session_backend() -> Result<Arc<dyn SessionBackend>, DetectError> {
    Err(DetectError::UnsupportedPlatform(std::env::consts::OS))
}
