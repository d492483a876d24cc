//! Topology expansion.
//!
//! [`TopologyBuilder`] walks the organization × peer cross-product of a
//! validated [`NetworkSpec`] and assembles the six sections of a
//! [`ConnectionProfile`]. Each section is produced by its own module:
//!
//! - `client`: fixed client options
//! - `channel`: orderer list, peer role records and policies
//! - `organizations`: MSP ids and admin identities
//! - `endpoints`: orderers, peers and certificate authorities
//!
//! A build either returns a complete profile or an error; no partially
//! assembled profile ever leaves this module.

mod channel;
mod client;
mod endpoints;
mod organizations;

use crate::credentials::{CredentialError, CredentialLookup, CredentialStore};
use crate::network_spec::{ConfigError, NetworkSpec};
use crate::profile::ConnectionProfile;
use crate::resolver::{AddressResolver, ResolveError};
use log::{debug, info};

/// Profile schema version written at the top of every profile
pub const PROFILE_VERSION: &str = "1.0.0";

/// Profile flavour understood by Fabric SDKs
pub const PROFILE_TYPE: &str = "hlfv1";

/// Errors that abort a build
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Invalid network configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Address resolution failed: {0}")]
    AddressResolution(#[from] ResolveError),

    #[error("Credential read failed: {0}")]
    CredentialRead(#[from] CredentialError),
}

/// Borrowed view of everything a build needs, created per build.
pub struct TopologyBuilder<'a> {
    spec: &'a NetworkSpec,
    name: &'a str,
    channel: &'a str,
    organizations: &'a [String],
    resolver: AddressResolver<'a>,
    credentials: CredentialLookup<'a>,
}

impl<'a> TopologyBuilder<'a> {
    /// Validate `spec` and prepare a builder reading from `store`.
    pub fn new(spec: &'a NetworkSpec, store: &'a dyn CredentialStore) -> Result<Self, BuildError> {
        spec.validate()?;
        let name = spec.name().ok_or(ConfigError::MissingName)?;
        let channel = spec.channel().ok_or(ConfigError::MissingChannel)?;

        Ok(Self {
            spec,
            name,
            channel,
            organizations: spec.organizations(),
            resolver: spec.resolver(),
            credentials: CredentialLookup::new(store, spec.use_pem()),
        })
    }

    pub fn build(&self) -> Result<ConnectionProfile, BuildError> {
        info!(
            "Expanding network '{}': {} organizations, {} peers each, channel '{}'",
            self.name,
            self.organizations.len(),
            self.spec.peer_count(),
            self.channel
        );

        let client = client::build_client(self.spec.client_organization());
        let channels = channel::build_channels(
            self.channel,
            self.organizations,
            self.spec.peer_count(),
            self.spec.attach_query_policy(),
        );
        let organizations = organizations::build_organizations(
            self.organizations,
            self.spec.peer_count(),
            &self.credentials,
        );
        let orderers =
            endpoints::build_orderers(self.organizations, &self.resolver, &self.credentials)?;
        let peers = endpoints::build_peers(
            self.organizations,
            self.spec.peer_count(),
            &self.resolver,
            &self.credentials,
        )?;
        let certificate_authorities = endpoints::build_certificate_authorities(
            self.organizations,
            &self.resolver,
            &self.credentials,
        )?;

        debug!(
            "Assembled {} orderers, {} peers, {} certificate authorities",
            orderers.len(),
            peers.len(),
            certificate_authorities.len()
        );

        Ok(ConnectionProfile {
            name: self.name.to_string(),
            version: PROFILE_VERSION.to_string(),
            x_type: PROFILE_TYPE.to_string(),
            client,
            channels,
            organizations,
            orderers,
            peers,
            certificate_authorities,
        })
    }
}
