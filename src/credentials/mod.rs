//! Credential material lookup.
//!
//! Connection profiles reference TLS certificates and admin identities either
//! inline (`pem`) or by filesystem location (`path`). This module owns the
//! conventional on-disk layout of a crypto-material tree, the store that reads
//! it, and the two lookup policies the builder needs:
//!
//! - **tolerant** lookups degrade to an absent PEM value when material is
//!   missing (admin identities, CA certificates);
//! - **strict** lookups propagate the failure (orderer and peer TLS roots).

pub mod paths;
pub mod reference;
pub mod store;

pub use reference::{CredentialLookup, CredentialReference};
pub use store::{CredentialError, CredentialStore, FsCredentialStore};
