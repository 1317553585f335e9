//! CLI bootstrap - the composition root.
//!
//! The only place where infrastructure is wired together: the profiles
//! directory is resolved and created, the file profile store and the
//! detected session backend are instantiated, and the host service is
//! assembled. Command handlers receive the composed [`CliContext`] and
//! never construct adapters themselves.

use std::path::PathBuf;
use std::sync::Arc;

use mcm_core::paths::{ensure_dir, profiles_dir};
use mcm_core::{HostService, ProfileRepository, SessionBackend};
use mcm_runtime::{FileProfileStore, detect_session_backend};

use crate::error::CliError;

/// Resolved configuration for one CLI invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding profile documents.
    pub profiles_dir: PathBuf,
}

impl CliConfig {
    /// Resolve config, preferring an explicit `--profiles-dir` over the
    /// default location.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, CliError> {
        let profiles_dir = match override_dir {
            Some(dir) => dir,
            None => profiles_dir()?,
        };
        Ok(Self { profiles_dir })
    }
}

/// Fully composed application context for command handlers.
pub struct CliContext {
    pub profiles: Arc<dyn ProfileRepository>,
    pub host: HostService,
}

/// Compose the application: profile store, session backend, host
/// service.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    ensure_dir(&config.profiles_dir)?;
    let profiles: Arc<dyn ProfileRepository> =
        Arc::new(FileProfileStore::new(config.profiles_dir.clone())?);

    let backend = detect_session_backend()?;
    Ok(CliContext {
        profiles,
        host: HostService::new(backend),
    })
}

/// Compose a context from pre-built parts (tests).
pub fn bootstrap_with(
    profiles: Arc<dyn ProfileRepository>,
    backend: Arc<dyn SessionBackend>,
) -> CliContext {
    CliContext {
        profiles,
        host: HostService::new(backend),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins_over_default() {
        let config = CliConfig::resolve(Some(PathBuf::from("/tmp/custom"))).unwrap();
        assert_eq!(config.profiles_dir, PathBuf::from("/tmp/custom"));
    }
}
