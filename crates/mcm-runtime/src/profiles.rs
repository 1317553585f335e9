//! File-backed profile repository.
//!
//! One YAML document per profile at `<dir>/<sanitized-name>.yml`. Lookup
//! first tries the expected filename, then falls back to scanning every
//! profile file for a document whose `name` field matches, so profiles
//! renamed on disk are still found. Unparseable files are skipped for
//! lookup and surface as invalid rows in listings.

use mcm_core::names::sanitize_name;
use mcm_core::{Profile, ProfileInfo, ProfileRepository, ProfileStoreError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const PROFILE_EXT: &str = "yml";

/// [`ProfileRepository`] over a flat directory of YAML files.
#[derive(Debug)]
pub struct FileProfileStore {
    storage_dir: PathBuf,
}

impl FileProfileStore {
    /// Open a store over `dir`, which must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ProfileStoreError> {
        let storage_dir = dir.into();
        if !storage_dir.is_dir() {
            return Err(ProfileStoreError::Storage(format!(
                "{} does not exist or is not a directory",
                storage_dir.display()
            )));
        }
        Ok(Self { storage_dir })
    }

    /// Expected path of the profile named `name`.
    fn scoped_path(&self, name: &str) -> PathBuf {
        self.storage_dir
            .join(format!("{}.{PROFILE_EXT}", sanitize_name(name)))
    }

    /// Parse the file at `path`, if it is a readable profile document.
    fn try_load(path: &Path) -> Option<Profile> {
        if !path.is_file() {
            return None;
        }
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable profile file");
                return None;
            }
        };
        match serde_yaml::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unparseable profile file");
                None
            }
        }
    }

    /// Every `*.yml` in the storage directory, sorted for stable output.
    fn profile_files(&self) -> Result<Vec<PathBuf>, ProfileStoreError> {
        let entries = fs::read_dir(&self.storage_dir)
            .map_err(|err| ProfileStoreError::Storage(err.to_string()))?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == PROFILE_EXT))
            .collect();
        files.sort();
        Ok(files)
    }

    fn find_profile(&self, query: &str) -> Result<Option<Profile>, ProfileStoreError> {
        let expected = self.scoped_path(query);
        if let Some(profile) = Self::try_load(&expected)
            && profile.name == query
        {
            return Ok(Some(profile));
        }

        // Renamed on disk? The document's own name field is the truth.
        for path in self.profile_files()? {
            if let Some(profile) = Self::try_load(&path)
                && profile.name == query
            {
                return Ok(Some(profile));
            }
        }
        Ok(None)
    }
}

impl ProfileRepository for FileProfileStore {
    fn load(&self, name: &str) -> Result<Profile, ProfileStoreError> {
        self.find_profile(name)?
            .ok_or_else(|| ProfileStoreError::NotFound(name.to_string()))
    }

    fn save(&self, profile: &Profile) -> Result<PathBuf, ProfileStoreError> {
        let path = self.scoped_path(&profile.name);
        let serialized = serde_yaml::to_string(profile)
            .map_err(|err| ProfileStoreError::Serialization(err.to_string()))?;
        fs::write(&path, serialized).map_err(|err| ProfileStoreError::Storage(err.to_string()))?;
        Ok(path)
    }

    fn list(&self) -> Result<Vec<ProfileInfo>, ProfileStoreError> {
        Ok(self
            .profile_files()?
            .into_iter()
            .map(|path| {
                let profile = Self::try_load(&path);
                ProfileInfo {
                    location: path,
                    profile,
                }
            })
            .collect())
    }

    fn exists(&self, name: &str) -> Result<bool, ProfileStoreError> {
        Ok(self.find_profile(name)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            server_location: PathBuf::from("/srv").join(name),
            backup_location: PathBuf::from("/backups").join(name),
            server_version: "1.20.4/fabric".to_string(),
            entrypoint: "java -jar server.jar".to_string(),
        }
    }

    fn store(dir: &TempDir) -> FileProfileStore {
        FileProfileStore::new(dir.path()).unwrap()
    }

    #[test]
    fn test_rejects_missing_directory() {
        let err = FileProfileStore::new("/no/such/dir/anywhere").unwrap_err();
        assert!(matches!(err, ProfileStoreError::Storage(_)));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let saved_to = store.save(&profile("alpha")).unwrap();
        assert_eq!(saved_to, dir.path().join("alpha.yml"));

        assert_eq!(store.load("alpha").unwrap(), profile("alpha"));
    }

    #[test]
    fn test_filenames_are_sanitized() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let saved_to = store.save(&profile("My Server")).unwrap();
        assert_eq!(saved_to, dir.path().join("my_server.yml"));

        // Lookup is by the profile's real name, not the filename.
        assert_eq!(store.load("My Server").unwrap().name, "My Server");
    }

    #[test]
    fn test_load_unknown_profile_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = store(&dir).load("ghost").unwrap_err();
        assert!(matches!(err, ProfileStoreError::NotFound(_)));
    }

    #[test]
    fn test_load_finds_profiles_renamed_on_disk() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&profile("alpha")).unwrap();

        fs::rename(dir.path().join("alpha.yml"), dir.path().join("moved.yml")).unwrap();

        assert_eq!(store.load("alpha").unwrap(), profile("alpha"));
        assert!(store.exists("alpha").unwrap());
    }

    #[test]
    fn test_save_overwrites_same_name() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&profile("alpha")).unwrap();

        let mut updated = profile("alpha");
        updated.server_version = "1.21/vanilla".to_string();
        store.save(&updated).unwrap();

        assert_eq!(store.load("alpha").unwrap().server_version, "1.21/vanilla");
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_list_reports_broken_files_as_invalid() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&profile("alpha")).unwrap();
        fs::write(dir.path().join("broken.yml"), "{ not yaml: [").unwrap();

        let infos = store.list().unwrap();
        assert_eq!(infos.len(), 2);

        let valid: Vec<_> = infos.iter().filter(|info| info.is_valid()).collect();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].profile.as_ref().unwrap().name, "alpha");
    }

    #[test]
    fn test_list_ignores_unrelated_files() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(dir.path().join("notes.txt"), "hi").unwrap();

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_exists_is_false_for_unknown_names() {
        let dir = TempDir::new().unwrap();
        assert!(!store(&dir).exists("ghost").unwrap());
    }
}
