//! # Fabric NetGen - Connection profile generator for Fabric networks
//!
//! This library expands a compact description of a permissioned
//! multi-organization network into the fully expanded connection profile
//! that Fabric client SDKs load.
//!
//! ## Overview
//!
//! A network is described by its name, a channel, the participating
//! organizations, a peer count per organization, address and port overrides,
//! and the root of a crypto-material tree. From that the generator derives
//! every orderer, peer and certificate authority, assigns channel roles to
//! peers, and embeds (or references) the TLS and admin credential material.
//!
//! ## Architecture
//!
//! - `network_spec`: fluent accumulator for the network description
//! - `resolver`: layered address/port override resolution
//! - `naming`: deterministic orderer, peer and CA identifiers
//! - `builder`: topology expansion into a connection profile
//! - `profile`: typed connection profile sections and peer roles
//! - `credentials`: crypto-material layout, store and lookup policies
//! - `config_file` / `config_loader`: YAML network description files
//! - `emit`: YAML/JSON rendering and output
//! - `utils`: address validation helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fabric_netgen::NetworkSpec;
//! use fabric_netgen::emit::{render, OutputFormat};
//!
//! let profile = NetworkSpec::new()
//!     .with_name("example-fabric")
//!     .with_client_organization("org1")
//!     .with_organizations(["org1", "org2"])
//!     .with_channel("common")
//!     .with_root("crypto-config")
//!     .add_address_override("org1", Some("*"), "10.0.0.1")
//!     .add_address_override("org2", Some("*"), "10.0.0.2")
//!     .build()?;
//!
//! println!("{}", render(&profile, OutputFormat::Yaml)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Library operations return typed `thiserror` errors ([`BuildError`],
//! [`emit::EmitError`], [`config_file::ValidationError`]). The binary and the
//! description loader report through `color_eyre`.

pub mod builder;
pub mod config_file;
pub mod config_loader;
pub mod credentials;
pub mod emit;
pub mod naming;
pub mod network_spec;
pub mod profile;
pub mod resolver;
pub mod utils;

pub use builder::{BuildError, TopologyBuilder};
pub use network_spec::{ConfigError, NetworkSpec};
pub use profile::{ConnectionProfile, PeerRole};
pub use resolver::{AddressResolver, OverrideTable, ResolveError};
