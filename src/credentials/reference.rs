//! Credential references embedded in connection profiles.

use super::store::{CredentialError, CredentialStore};
use log::warn;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::Path;

/// Either inline PEM text or the location of the material on disk.
///
/// Serializes as a single-key map, `{pem: ...}` or `{path: ...}`. A missing
/// inline value keeps its `pem` key and serializes as null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialReference {
    InlinePem(Option<String>),
    FilePath(String),
}

impl CredentialReference {
    pub fn pem(&self) -> Option<&str> {
        match self {
            CredentialReference::InlinePem(text) => text.as_deref(),
            CredentialReference::FilePath(_) => None,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            CredentialReference::FilePath(path) => Some(path),
            CredentialReference::InlinePem(_) => None,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, CredentialReference::InlinePem(_))
    }
}

impl Serialize for CredentialReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            CredentialReference::InlinePem(text) => map.serialize_entry("pem", text)?,
            CredentialReference::FilePath(path) => map.serialize_entry("path", path)?,
        }
        map.end()
    }
}

/// Builds credential references against a store in either PEM or path mode.
pub struct CredentialLookup<'a> {
    store: &'a dyn CredentialStore,
    use_pem: bool,
}

impl<'a> CredentialLookup<'a> {
    pub fn new(store: &'a dyn CredentialStore, use_pem: bool) -> Self {
        Self { store, use_pem }
    }

    fn path_reference(&self, relative: &Path) -> CredentialReference {
        CredentialReference::FilePath(relative.display().to_string())
    }

    /// Reference that must be backed by readable material in PEM mode.
    pub fn strict(&self, relative: &Path) -> Result<CredentialReference, CredentialError> {
        if !self.use_pem {
            return Ok(self.path_reference(relative));
        }
        let text = self.store.read(relative)?;
        Ok(CredentialReference::InlinePem(Some(text)))
    }

    /// Reference whose material may be missing; failures leave the PEM absent.
    pub fn tolerant(&self, relative: &Path) -> CredentialReference {
        if !self.use_pem {
            return self.path_reference(relative);
        }
        match self.store.read(relative) {
            Ok(text) => CredentialReference::InlinePem(Some(text)),
            Err(e) => {
                warn!("Leaving credential empty: {}", e);
                CredentialReference::InlinePem(None)
            }
        }
    }

    /// Tolerant reference to the first file of a directory (admin keystores).
    ///
    /// In path mode the directory itself is referenced.
    pub fn tolerant_first_in(&self, relative_dir: &Path) -> CredentialReference {
        if !self.use_pem {
            return self.path_reference(relative_dir);
        }
        match self.store.read_first_in(relative_dir) {
            Ok(Some(text)) => CredentialReference::InlinePem(Some(text)),
            Ok(None) => {
                warn!(
                    "No key material in {}, leaving credential empty",
                    self.store.locate(relative_dir).display()
                );
                CredentialReference::InlinePem(None)
            }
            Err(e) => {
                warn!("Leaving credential empty: {}", e);
                CredentialReference::InlinePem(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::FsCredentialStore;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_serializes_single_key() {
        let inline = serde_json::to_value(CredentialReference::InlinePem(Some("PEM".into()))).unwrap();
        assert_eq!(inline, serde_json::json!({ "pem": "PEM" }));

        let empty = serde_json::to_value(CredentialReference::InlinePem(None)).unwrap();
        assert_eq!(empty, serde_json::json!({ "pem": null }));

        let path = serde_json::to_value(CredentialReference::FilePath("a/b".into())).unwrap();
        assert_eq!(path, serde_json::json!({ "path": "a/b" }));
    }

    #[test]
    fn test_strict_fails_on_missing_material() {
        let dir = tempdir().unwrap();
        let store = FsCredentialStore::new(dir.path());
        let lookup = CredentialLookup::new(&store, true);

        assert!(lookup.strict(Path::new("missing.pem")).is_err());
    }

    #[test]
    fn test_tolerant_degrades_to_absent_pem() {
        let dir = tempdir().unwrap();
        let store = FsCredentialStore::new(dir.path());
        let lookup = CredentialLookup::new(&store, true);

        assert_eq!(
            lookup.tolerant(Path::new("missing.pem")),
            CredentialReference::InlinePem(None)
        );
        assert_eq!(
            lookup.tolerant_first_in(Path::new("keystore")),
            CredentialReference::InlinePem(None)
        );
    }

    #[test]
    fn test_path_mode_never_reads() {
        let dir = tempdir().unwrap();
        let store = FsCredentialStore::new(dir.path());
        let lookup = CredentialLookup::new(&store, false);

        let reference = lookup.strict(Path::new("org1/ca/ca.org1-cert.pem")).unwrap();
        assert_eq!(reference.path(), Some("org1/ca/ca.org1-cert.pem"));
        assert!(!reference.is_inline());

        let keystore = lookup.tolerant_first_in(Path::new("org1/users/Admin@org1/msp/keystore"));
        assert_eq!(keystore.path(), Some("org1/users/Admin@org1/msp/keystore"));
    }

    #[test]
    fn test_inline_reads_material() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tls.pem"), "TLS").unwrap();
        let store = FsCredentialStore::new(dir.path());
        let lookup = CredentialLookup::new(&store, true);

        assert_eq!(lookup.strict(Path::new("tls.pem")).unwrap().pem(), Some("TLS"));
        assert_eq!(lookup.tolerant(Path::new("tls.pem")).pem(), Some("TLS"));
    }
}
