//! Profile repository port.

use crate::domain::{Profile, ProfileInfo};
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by profile storage.
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("profile '{0}' does not exist")]
    NotFound(String),

    #[error("profile storage error: {0}")]
    Storage(String),

    #[error("profile serialization error: {0}")]
    Serialization(String),
}

/// Storage for server profiles, keyed by profile name.
pub trait ProfileRepository: Send + Sync {
    /// Load the profile named `name`.
    fn load(&self, name: &str) -> Result<Profile, ProfileStoreError>;

    /// Persist `profile`, returning the location it was written to.
    /// Saving over an existing profile of the same name replaces it.
    fn save(&self, profile: &Profile) -> Result<PathBuf, ProfileStoreError>;

    /// Every stored profile, including entries that failed to parse.
    fn list(&self) -> Result<Vec<ProfileInfo>, ProfileStoreError>;

    /// Whether a profile named `name` exists.
    fn exists(&self, name: &str) -> Result<bool, ProfileStoreError>;
}
