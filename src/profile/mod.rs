//! # Connection Profile Module
//!
//! Typed representation of the connection profile handed to Fabric client
//! SDKs. A profile has six sections:
//!
//! - **client**: logging level, timeouts and the acting organization
//! - **channels**: orderers, per-peer role records and policies per channel
//! - **organizations**: MSP id, CA, admin identity and peers per organization
//! - **orderers** / **peers**: endpoints, gRPC options and TLS roots
//! - **certificateAuthorities**: CA endpoints, registrar and TLS roots
//!
//! Profiles are plain data. They are produced by [`crate::builder`] and
//! rendered by [`crate::emit`].

pub mod roles;
pub mod types;

pub use roles::{PeerRole, PeerRoleRecord};
pub use types::{
    CaGrpcOptions, CertificateAuthoritySection, ChannelPolicies, ChannelSection, ClientSection,
    ConnectionOptions, ConnectionProfile, HttpOptions, LoggingOptions, OrdererGrpcOptions,
    OrdererSection, OrganizationSection, PeerGrpcOptions, PeerSection, PeerTimeouts,
    QueryChannelConfig, Registrar, RetryOptions, Section, TimeoutOptions,
};
