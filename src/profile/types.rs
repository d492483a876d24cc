//! Connection profile type definitions.
//!
//! These structures mirror the network configuration document consumed by
//! Fabric client SDKs. Field names follow the SDK's spelling through serde
//! renames; keyed sections keep insertion order so the rendered document
//! lists organizations and peers in declaration order.

use super::roles::PeerRoleRecord;
use crate::credentials::CredentialReference;
use indexmap::IndexMap;
use serde::Serialize;
use std::time::Duration;

// ============================================================================
// Ordered Sections
// ============================================================================

/// Insertion-ordered map from synthesized identifier to section content.
///
/// Re-inserting an existing key replaces its value in place.
pub type Section<T> = IndexMap<String, T>;

// ============================================================================
// Profile Root
// ============================================================================

/// Complete connection profile for one client organization.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ConnectionProfile {
    /// Network name
    pub name: String,
    /// Profile schema version
    pub version: String,
    /// Profile flavour understood by the SDK
    #[serde(rename = "x-type")]
    pub x_type: String,
    pub client: ClientSection,
    pub channels: Section<ChannelSection>,
    pub organizations: Section<OrganizationSection>,
    pub orderers: Section<OrdererSection>,
    pub peers: Section<PeerSection>,
    #[serde(rename = "certificateAuthorities")]
    pub certificate_authorities: Section<CertificateAuthoritySection>,
}

// ============================================================================
// Client
// ============================================================================

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ClientSection {
    pub logging: LoggingOptions,
    pub connection: ConnectionOptions,
    /// Organization the SDK client acts on behalf of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LoggingOptions {
    pub level: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ConnectionOptions {
    pub timeout: TimeoutOptions,
}

/// Client-side timeouts in milliseconds.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TimeoutOptions {
    pub peer: PeerTimeouts,
    pub orderer: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeerTimeouts {
    pub endorser: u64,
    pub event_hub: u64,
    pub event_reg: u64,
}

// ============================================================================
// Channels
// ============================================================================

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChannelSection {
    /// Orderer identifiers serving the channel
    pub orderers: Vec<String>,
    /// Role records keyed by composite peer name
    pub peers: Section<PeerRoleRecord>,
    pub policies: ChannelPolicies,
}

/// Channel policies. Empty unless the query policy is explicitly attached.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPolicies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_channel_config: Option<QueryChannelConfig>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryChannelConfig {
    pub min_responses: u32,
    pub max_targets: u32,
    pub retry_opts: RetryOptions,
}

/// Retry policy handed to the SDK; durations render as `"500ms"`, `"5s"`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RetryOptions {
    pub attempts: u32,
    #[serde(with = "humantime_serde")]
    pub initial_backoff: Duration,
    #[serde(with = "humantime_serde")]
    pub max_backoff: Duration,
    /// Rendered as a decimal string, e.g. `"2.0"`
    #[serde(serialize_with = "serialize_decimal_string")]
    pub backoff_factor: f64,
}

fn serialize_decimal_string<S: serde::Serializer>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{:?}", value))
}

// ============================================================================
// Organizations
// ============================================================================

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSection {
    pub mspid: String,
    /// CA identifiers serving this organization
    pub certificate_authorities: Vec<String>,
    pub admin_private_key: CredentialReference,
    pub signed_cert: CredentialReference,
    /// Composite peer names, omitted for organizations without peers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers: Option<Vec<String>>,
}

// ============================================================================
// Orderers and Peers
// ============================================================================

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrdererSection {
    /// `grpcs://host:port`
    pub url: String,
    pub grpc_options: OrdererGrpcOptions,
    #[serde(rename = "tlsCACerts")]
    pub tls_ca_certs: CredentialReference,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OrdererGrpcOptions {
    #[serde(rename = "grpc-max-send-message-length")]
    pub max_send_message_length: i64,
    #[serde(rename = "grpc.keepalive_time_ms")]
    pub keepalive_time_ms: u64,
    #[serde(rename = "grpc.keepalive_timeout_ms")]
    pub keepalive_timeout_ms: u64,
    #[serde(rename = "hostnameOverride")]
    pub hostname_override: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeerSection {
    /// `grpcs://host:port`
    pub url: String,
    pub grpc_options: PeerGrpcOptions,
    #[serde(rename = "tlsCACerts")]
    pub tls_ca_certs: CredentialReference,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PeerGrpcOptions {
    #[serde(rename = "ssl-target-name-override")]
    pub ssl_target_name_override: String,
    #[serde(rename = "grpc.http2.keepalive_time")]
    pub http2_keepalive_time: u64,
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,
    #[serde(rename = "hostnameOverride")]
    pub hostname_override: String,
}

// ============================================================================
// Certificate Authorities
// ============================================================================

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAuthoritySection {
    /// `https://host:port`
    pub url: String,
    pub grpc_options: CaGrpcOptions,
    pub http_options: HttpOptions,
    pub registrar: Vec<Registrar>,
    #[serde(rename = "tlsCACerts")]
    pub tls_ca_certs: CredentialReference,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CaGrpcOptions {
    #[serde(rename = "ssl-target-name-override")]
    pub ssl_target_name_override: String,
    #[serde(rename = "allow-insecure")]
    pub allow_insecure: u8,
    #[serde(rename = "trustServerCertificate")]
    pub trust_server_certificate: bool,
    #[serde(rename = "hostnameOverride")]
    pub hostname_override: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HttpOptions {
    pub verify: bool,
}

/// Enrollment identity registered with a CA.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registrar {
    pub enroll_id: String,
    pub enroll_secret: String,
}
