//! Network description files.
//!
//! A YAML document names the network, its organizations and channel, the
//! crypto-material root and the address/port overrides. [`NetworkFile`]
//! validates it and converts it into a [`NetworkSpec`].

use crate::network_spec::{NetworkSpec, DEFAULT_PEER_COUNT};
use crate::utils::ip_utils::is_valid_address;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// Override for one organization key.
///
/// A scalar applies at organization level (keyed by the organization name);
/// a map binds values to specific peers or to `*`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum OverrideEntry<V> {
    Organization(V),
    Peers(BTreeMap<String, V>),
}

impl<V: Clone> OverrideEntry<V> {
    /// `(peer-or-none, value)` pairs, sorted by peer key
    pub fn bindings(&self) -> Vec<(Option<&str>, V)> {
        match self {
            OverrideEntry::Organization(value) => vec![(None, value.clone())],
            OverrideEntry::Peers(peers) => peers
                .iter()
                .map(|(peer, value)| (Some(peer.as_str()), value.clone()))
                .collect(),
        }
    }
}

/// Network description file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NetworkFile {
    pub name: String,
    pub channel: String,
    pub organizations: Vec<String>,
    #[serde(default = "default_peer_count")]
    pub peers: usize,
    #[serde(default = "default_use_pem")]
    pub use_pem: bool,
    /// Crypto material root, relative to the description file
    pub root: PathBuf,
    /// Organizations to generate profiles for; every organization when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clients: Vec<String>,
    #[serde(default)]
    pub attach_query_policy: bool,
    #[serde(default)]
    pub addresses: BTreeMap<String, OverrideEntry<String>>,
    #[serde(default)]
    pub ports: BTreeMap<String, OverrideEntry<u16>>,
}

fn default_peer_count() -> usize {
    DEFAULT_PEER_COUNT
}

fn default_use_pem() -> bool {
    true
}

impl NetworkFile {
    /// Validate the description
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidNetwork(
                "name cannot be empty".to_string(),
            ));
        }
        if self.channel.trim().is_empty() {
            return Err(ValidationError::InvalidNetwork(
                "channel cannot be empty".to_string(),
            ));
        }
        if self.organizations.is_empty() {
            return Err(ValidationError::InvalidOrganizations(
                "at least one organization is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for org in &self.organizations {
            if org.trim().is_empty() {
                return Err(ValidationError::InvalidOrganizations(
                    "organization names cannot be empty".to_string(),
                ));
            }
            if !seen.insert(org.as_str()) {
                return Err(ValidationError::InvalidOrganizations(format!(
                    "organization '{}' is listed more than once",
                    org
                )));
            }
        }

        for client in &self.clients {
            if !seen.contains(client.as_str()) {
                return Err(ValidationError::InvalidOrganizations(format!(
                    "client '{}' is not one of the listed organizations",
                    client
                )));
            }
        }

        self.validate_overrides()
    }

    fn validate_overrides(&self) -> Result<(), ValidationError> {
        for (org, entry) in &self.addresses {
            for (peer, address) in entry.bindings() {
                if address.trim().is_empty() {
                    return Err(ValidationError::InvalidOverride(format!(
                        "empty address for {} {}",
                        org,
                        peer.unwrap_or("(organization)")
                    )));
                }
                if !is_valid_address(&address) {
                    warn!(
                        "Address '{}' for {} is neither an IP address nor a hostname",
                        address, org
                    );
                }
            }
        }

        for (org, entry) in &self.ports {
            for (peer, port) in entry.bindings() {
                if port == 0 {
                    return Err(ValidationError::InvalidOverride(format!(
                        "port 0 for {} {}",
                        org,
                        peer.unwrap_or("(organization)")
                    )));
                }
            }
        }
        Ok(())
    }

    /// Organizations to generate profiles for
    pub fn client_organizations(&self) -> &[String] {
        if self.clients.is_empty() {
            &self.organizations
        } else {
            &self.clients
        }
    }

    /// Seed a [`NetworkSpec`], resolving `root` against `base_dir`.
    ///
    /// The client organization is left unset.
    pub fn to_spec(&self, base_dir: &Path) -> NetworkSpec {
        let mut spec = NetworkSpec::new()
            .with_name(self.name.as_str())
            .with_channel(self.channel.as_str())
            .with_organizations(self.organizations.iter().cloned())
            .with_peer_count(self.peers)
            .with_use_pem(self.use_pem)
            .with_root(base_dir.join(&self.root))
            .with_query_policy(self.attach_query_policy);

        for (org, entry) in &self.addresses {
            for (peer, address) in entry.bindings() {
                spec = spec.add_address_override(org, peer, address);
            }
        }
        for (org, entry) in &self.ports {
            for (peer, port) in entry.bindings() {
                spec = spec.add_port_override(org, peer, port);
            }
        }
        spec
    }
}

/// Network description validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(String),
    #[error("Invalid organizations: {0}")]
    InvalidOrganizations(String),
    #[error("Invalid override: {0}")]
    InvalidOverride(String),
}
