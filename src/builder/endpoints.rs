//! Orderer, peer and certificate authority endpoints.

use super::BuildError;
use crate::credentials::{paths, CredentialLookup};
use crate::naming::{self, WILDCARD};
use crate::profile::{
    CaGrpcOptions, CertificateAuthoritySection, HttpOptions, OrdererGrpcOptions, OrdererSection,
    PeerGrpcOptions, PeerSection, Registrar, Section,
};
use crate::resolver::{AddressResolver, ResolveError};
use log::debug;

pub const ORDERER_PORT: u16 = 7050;
pub const PEER_PORT: u16 = 7051;
pub const CA_PORT: u16 = 7054;

const ORDERER_MAX_SEND_MESSAGE_LENGTH: i64 = 15;
const ORDERER_KEEPALIVE_TIME_MS: u64 = 360_000;
const ORDERER_KEEPALIVE_TIMEOUT_MS: u64 = 180_000;

const PEER_HTTP2_KEEPALIVE_TIME: u64 = 15;
const PEER_REQUEST_TIMEOUT: u64 = 120_001;

const CA_REGISTRAR_ID: &str = "admin";
const CA_REGISTRAR_SECRET: &str = "adminpw";

/// Address of `orderer`, the orderer synthesized for `organization`.
///
/// The orderer identifier is looked up as its own override key first. When
/// it has no overrides at all, the orderer shares the org-level address of
/// the organization at the same position. If neither resolves, the error of
/// the orderer lookup is reported.
fn orderer_address<'r>(
    orderer: &str,
    organization: &str,
    resolver: &AddressResolver<'r>,
) -> Result<&'r str, ResolveError> {
    match resolver.address(orderer, None) {
        Ok(address) => Ok(address),
        Err(err @ ResolveError::NoOverrides { .. }) => {
            debug!(
                "No address registered for {}, using organization {}",
                orderer, organization
            );
            resolver.address(organization, None).map_err(|_| err)
        }
        Err(err) => Err(err),
    }
}

pub(super) fn build_orderers(
    organizations: &[String],
    resolver: &AddressResolver<'_>,
    credentials: &CredentialLookup<'_>,
) -> Result<Section<OrdererSection>, BuildError> {
    let mut section = Section::new();
    for (index, org) in organizations.iter().enumerate() {
        let orderer = naming::orderer_id(index);
        let address = orderer_address(&orderer, org, resolver)?;

        let node = OrdererSection {
            url: format!("grpcs://{}:{}", address, ORDERER_PORT),
            grpc_options: OrdererGrpcOptions {
                max_send_message_length: ORDERER_MAX_SEND_MESSAGE_LENGTH,
                keepalive_time_ms: ORDERER_KEEPALIVE_TIME_MS,
                keepalive_timeout_ms: ORDERER_KEEPALIVE_TIMEOUT_MS,
                hostname_override: orderer.clone(),
            },
            tls_ca_certs: credentials.strict(&paths::orderer_tls_cert(&orderer))?,
        };
        section.insert(orderer, node);
    }
    Ok(section)
}

pub(super) fn build_peers(
    organizations: &[String],
    peer_count: usize,
    resolver: &AddressResolver<'_>,
    credentials: &CredentialLookup<'_>,
) -> Result<Section<PeerSection>, BuildError> {
    let mut section = Section::new();
    for org in organizations {
        for index in 0..peer_count {
            let peer = naming::peer_id(index);
            let name = naming::peer_name(org, index);
            let address = resolver.address(org, Some(peer.as_str()))?;
            let port = resolver.port(WILDCARD, Some(peer.as_str()), PEER_PORT);

            let node = PeerSection {
                url: format!("grpcs://{}:{}", address, port),
                grpc_options: PeerGrpcOptions {
                    ssl_target_name_override: name.clone(),
                    http2_keepalive_time: PEER_HTTP2_KEEPALIVE_TIME,
                    request_timeout: PEER_REQUEST_TIMEOUT,
                    hostname_override: name.clone(),
                },
                tls_ca_certs: credentials.strict(&paths::peer_tls_cert(org, &peer))?,
            };
            section.insert(name, node);
        }
    }
    Ok(section)
}

pub(super) fn build_certificate_authorities(
    organizations: &[String],
    resolver: &AddressResolver<'_>,
    credentials: &CredentialLookup<'_>,
) -> Result<Section<CertificateAuthoritySection>, BuildError> {
    let mut section = Section::new();
    for org in organizations {
        let ca = naming::ca_id(org);
        let address = resolver.address(org, None)?;

        let node = CertificateAuthoritySection {
            url: format!("https://{}:{}", address, CA_PORT),
            grpc_options: CaGrpcOptions {
                ssl_target_name_override: ca.clone(),
                allow_insecure: 0,
                trust_server_certificate: true,
                hostname_override: ca.clone(),
            },
            http_options: HttpOptions { verify: false },
            registrar: vec![Registrar {
                enroll_id: CA_REGISTRAR_ID.to_string(),
                enroll_secret: CA_REGISTRAR_SECRET.to_string(),
            }],
            tls_ca_certs: credentials.tolerant(&paths::ca_cert(org)),
        };
        section.insert(ca, node);
    }
    Ok(section)
}
