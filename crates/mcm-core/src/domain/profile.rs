//! Profile records describing a managed server instance.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything the manager needs to know about one server instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Logical name; also the key for sessions and backup archives.
    pub name: String,
    /// Directory the server runs in.
    pub server_location: PathBuf,
    /// Directory backup archives are written to.
    pub backup_location: PathBuf,
    /// Minecraft version/flavour, e.g. `"1.20.4/fabric"`. Informational.
    pub server_version: String,
    /// Command line that launches the server, run from `server_location`.
    pub entrypoint: String,
}

/// One row of a profile listing.
///
/// The store reports every profile file it sees, including ones it could
/// not parse; those carry a location but no profile.
#[derive(Debug, Clone)]
pub struct ProfileInfo {
    /// Where the profile document lives on disk.
    pub location: PathBuf,
    /// The parsed document, or `None` when unreadable/unparseable.
    pub profile: Option<Profile>,
}

impl ProfileInfo {
    /// Whether the file at `location` parsed into a usable profile.
    pub fn is_valid(&self) -> bool {
        self.profile.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_validity_follows_parse_result() {
        let parsed = ProfileInfo {
            location: PathBuf::from("/tmp/alpha.yml"),
            profile: Some(Profile {
                name: "alpha".to_string(),
                server_location: PathBuf::from("/srv/alpha"),
                backup_location: PathBuf::from("/backups/alpha"),
                server_version: "1.20.4/fabric".to_string(),
                entrypoint: "java -jar server.jar".to_string(),
            }),
        };
        assert!(parsed.is_valid());

        let broken = ProfileInfo {
            location: PathBuf::from("/tmp/broken.yml"),
            profile: None,
        };
        assert!(!broken.is_valid());
    }
}
