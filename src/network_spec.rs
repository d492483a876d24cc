//! Network specification accumulator.
//!
//! [`NetworkSpec`] collects everything needed to expand a network into a
//! connection profile. Setters consume and return the spec so calls can be
//! chained in any order; the last write wins. Nothing is validated until
//! [`NetworkSpec::build`].

use crate::builder::{BuildError, TopologyBuilder};
use crate::credentials::{CredentialStore, FsCredentialStore};
use crate::profile::ConnectionProfile;
use crate::resolver::{AddressResolver, OverrideTable};
use std::path::{Path, PathBuf};

/// Peers per organization when none is configured
pub const DEFAULT_PEER_COUNT: usize = 4;

/// Missing or invalid accumulator settings detected by `build`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("The network name is not specified")]
    MissingName,

    #[error("The network organizations are not specified")]
    MissingOrganizations,

    #[error("The network channel is not specified")]
    MissingChannel,

    #[error("The crypto material root directory is not specified")]
    MissingRoot,

    #[error("The crypto material root directory does not exist: {path}")]
    RootNotFound { path: String },
}

#[derive(Debug, Clone)]
pub struct NetworkSpec {
    name: Option<String>,
    channel: Option<String>,
    organizations: Option<Vec<String>>,
    peer_count: usize,
    use_pem: bool,
    addresses: OverrideTable<String>,
    ports: OverrideTable<u16>,
    root: Option<PathBuf>,
    client_organization: Option<String>,
    attach_query_policy: bool,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        Self {
            name: None,
            channel: None,
            organizations: None,
            peer_count: DEFAULT_PEER_COUNT,
            use_pem: true,
            addresses: OverrideTable::new(),
            ports: OverrideTable::new(),
            root: None,
            client_organization: None,
            attach_query_policy: false,
        }
    }
}

impl NetworkSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn with_client_organization(mut self, org: impl Into<String>) -> Self {
        self.client_organization = Some(org.into());
        self
    }

    /// Root directory of the crypto material tree.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Embed credential text (`true`) or reference files by path (`false`).
    pub fn with_use_pem(mut self, use_pem: bool) -> Self {
        self.use_pem = use_pem;
        self
    }

    pub fn with_organizations<I, S>(mut self, organizations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.organizations = Some(organizations.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_peer_count(mut self, peer_count: usize) -> Self {
        self.peer_count = peer_count;
        self
    }

    /// Emit the query-channel retry policy under each channel's `policies`.
    pub fn with_query_policy(mut self, attach: bool) -> Self {
        self.attach_query_policy = attach;
        self
    }

    /// Register an address for `org`, a specific peer, or `*` for every peer.
    ///
    /// Without a peer the address is keyed by the organization name itself.
    pub fn add_address_override(
        mut self,
        org: &str,
        peer: Option<&str>,
        address: impl Into<String>,
    ) -> Self {
        self.addresses.insert(org, peer, address.into());
        self
    }

    /// Register a port, keyed the same way as addresses.
    pub fn add_port_override(mut self, org: &str, peer: Option<&str>, port: u16) -> Self {
        self.ports.insert(org, peer, port);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    pub fn organizations(&self) -> &[String] {
        self.organizations.as_deref().unwrap_or(&[])
    }

    pub fn peer_count(&self) -> usize {
        self.peer_count
    }

    pub fn use_pem(&self) -> bool {
        self.use_pem
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn client_organization(&self) -> Option<&str> {
        self.client_organization.as_deref()
    }

    pub fn attach_query_policy(&self) -> bool {
        self.attach_query_policy
    }

    pub fn addresses(&self) -> &OverrideTable<String> {
        &self.addresses
    }

    pub fn ports(&self) -> &OverrideTable<u16> {
        &self.ports
    }

    pub fn resolver(&self) -> AddressResolver<'_> {
        AddressResolver::new(&self.addresses, &self.ports)
    }

    /// Check the build preconditions in order; the first failure wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.as_deref().map_or(true, str::is_empty) {
            return Err(ConfigError::MissingName);
        }
        if self.organizations.as_ref().map_or(true, Vec::is_empty) {
            return Err(ConfigError::MissingOrganizations);
        }
        if self.channel.as_deref().map_or(true, str::is_empty) {
            return Err(ConfigError::MissingChannel);
        }
        match &self.root {
            None => Err(ConfigError::MissingRoot),
            Some(root) if !root.exists() => Err(ConfigError::RootNotFound {
                path: root.display().to_string(),
            }),
            Some(_) => Ok(()),
        }
    }

    /// Expand the spec into a connection profile, reading credential
    /// material from the root directory.
    pub fn build(&self) -> Result<ConnectionProfile, BuildError> {
        // An unset root is rejected by `TopologyBuilder::new` before any read.
        let store = FsCredentialStore::new(self.root.clone().unwrap_or_default());
        TopologyBuilder::new(self, &store)?.build()
    }

    /// Expand the spec against an explicit credential store.
    pub fn build_with_store(
        &self,
        store: &dyn CredentialStore,
    ) -> Result<ConnectionProfile, BuildError> {
        TopologyBuilder::new(self, store)?.build()
    }
}
