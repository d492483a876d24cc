//! Credential stores.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while reading credential material
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Credential material not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read credential material '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl CredentialError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            CredentialError::NotFound {
                path: path.display().to_string(),
            }
        } else {
            CredentialError::Read {
                path: path.display().to_string(),
                source,
            }
        }
    }
}

/// Source of raw credential material, addressed by paths relative to a root.
pub trait CredentialStore {
    /// Location a relative path maps to, used for reads and log messages.
    fn locate(&self, relative: &Path) -> PathBuf;

    /// Read a single credential file.
    fn read(&self, relative: &Path) -> Result<String, CredentialError>;

    /// Read the first file inside a directory.
    ///
    /// Returns `Ok(None)` when the directory is missing or holds no files.
    fn read_first_in(&self, relative_dir: &Path) -> Result<Option<String>, CredentialError>;
}

/// Credential store backed by a crypto-material directory tree on disk
#[derive(Debug, Clone)]
pub struct FsCredentialStore {
    root: PathBuf,
}

impl FsCredentialStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CredentialStore for FsCredentialStore {
    fn locate(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    fn read(&self, relative: &Path) -> Result<String, CredentialError> {
        let path = self.locate(relative);
        fs::read_to_string(&path).map_err(|e| CredentialError::from_io(&path, e))
    }

    fn read_first_in(&self, relative_dir: &Path) -> Result<Option<String>, CredentialError> {
        let dir = self.locate(relative_dir);
        if !dir.is_dir() {
            return Ok(None);
        }

        let entries = fs::read_dir(&dir).map_err(|e| CredentialError::from_io(&dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CredentialError::from_io(&dir, e))?;
            if entry.path().is_file() {
                files.push(entry.path());
            }
        }
        // Directory order is platform dependent; pick by name to stay deterministic.
        files.sort();

        match files.first() {
            Some(first) => fs::read_to_string(first)
                .map(Some)
                .map_err(|e| CredentialError::from_io(first, e)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_existing_and_missing() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("org1/ca")).unwrap();
        fs::write(dir.path().join("org1/ca/ca.org1-cert.pem"), "CERT").unwrap();

        let store = FsCredentialStore::new(dir.path());
        assert_eq!(store.read(Path::new("org1/ca/ca.org1-cert.pem")).unwrap(), "CERT");

        let err = store.read(Path::new("org2/ca/ca.org2-cert.pem")).unwrap_err();
        assert!(matches!(err, CredentialError::NotFound { .. }));
    }

    #[test]
    fn test_read_first_in_picks_lowest_name() {
        let dir = tempdir().unwrap();
        let keystore = dir.path().join("keystore");
        fs::create_dir_all(&keystore).unwrap();
        fs::write(keystore.join("b_sk"), "SECOND").unwrap();
        fs::write(keystore.join("a_sk"), "FIRST").unwrap();

        let store = FsCredentialStore::new(dir.path());
        assert_eq!(
            store.read_first_in(Path::new("keystore")).unwrap(),
            Some("FIRST".to_string())
        );
    }

    #[test]
    fn test_read_first_in_missing_or_empty_dir() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();

        let store = FsCredentialStore::new(dir.path());
        assert_eq!(store.read_first_in(Path::new("absent")).unwrap(), None);
        assert_eq!(store.read_first_in(Path::new("empty")).unwrap(), None);
    }

    #[test]
    fn test_locate_joins_root() {
        let store = FsCredentialStore::new("/crypto");
        assert_eq!(store.locate(Path::new("org1/ca")), Path::new("/crypto/org1/ca"));
    }
}
