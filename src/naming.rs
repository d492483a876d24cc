//! Identifier synthesis.
//!
//! Every node in a generated connection profile is named by convention from
//! its organization and a zero-based index. These helpers are the single place
//! those conventions live, so map keys, hostname overrides and credential
//! paths always agree with each other.

/// Literal used as the "every peer" / "every organization" override key.
pub const WILDCARD: &str = "*";

/// Peer identifier within an organization (`peer0`, `peer1`, ...).
pub fn peer_id(index: usize) -> String {
    format!("peer{}", index)
}

/// Composite peer name used as the key in the peers section (`org1-peer0`).
pub fn peer_name(org: &str, index: usize) -> String {
    format!("{}-{}", org, peer_id(index))
}

/// Orderer identifier (`orderer0`, `orderer1`, ...).
pub fn orderer_id(index: usize) -> String {
    format!("orderer{}", index)
}

/// Certificate authority identifier for an organization (`ca.org1`).
pub fn ca_id(org: &str) -> String {
    format!("ca.{}", org)
}

/// Membership service provider identifier for an organization (`org1MSP`).
pub fn msp_id(org: &str) -> String {
    format!("{}MSP", org)
}

/// One orderer identifier per organization.
pub fn orderer_ids(org_count: usize) -> Vec<String> {
    (0..org_count).map(orderer_id).collect()
}
