//! Address and port resolution.
//!
//! Overrides are stored per organization as `peer-or-wildcard -> value`.
//! Lookups walk a fixed precedence chain: the exact peer key, then the
//! organization's own name, then the `*` wildcard.

use crate::naming::WILDCARD;
use std::collections::BTreeMap;

/// Errors raised when no address can be found for an organization or peer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("No address configured for organization '{org}'")]
    NoOverrides { org: String },

    #[error("No address configured for peer '{peer}' in organization '{org}'")]
    NoAddress { org: String, peer: String },
}

/// Two-level override map: `org -> (peer-or-wildcard -> value)`.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideTable<V> {
    entries: BTreeMap<String, BTreeMap<String, V>>,
}

impl<V> Default for OverrideTable<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V> OverrideTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override. Without a peer the value is keyed by the
    /// organization name itself, which is distinct from the `*` key.
    pub fn insert(&mut self, org: &str, peer: Option<&str>, value: V) {
        let key = peer.unwrap_or(org);
        self.entries
            .entry(org.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Overrides registered for an organization, if any.
    pub fn for_org(&self, org: &str) -> Option<&BTreeMap<String, V>> {
        self.entries.get(org)
    }

    pub fn has_entries(&self, org: &str) -> bool {
        self.entries.get(org).map_or(false, |peers| !peers.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &V)> {
        self.entries.iter().flat_map(|(org, peers)| {
            peers
                .iter()
                .map(move |(peer, value)| (org.as_str(), peer.as_str(), value))
        })
    }

    /// First match of `key`, `org`, `*` in the organization's map.
    fn lookup(&self, org: &str, key: &str) -> Option<&V> {
        let peers = self.entries.get(org)?;
        peers
            .get(key)
            .or_else(|| peers.get(org))
            .or_else(|| peers.get(WILDCARD))
    }
}

/// Read-only view over the address and port override tables
#[derive(Debug, Clone, Copy)]
pub struct AddressResolver<'a> {
    addresses: &'a OverrideTable<String>,
    ports: &'a OverrideTable<u16>,
}

impl<'a> AddressResolver<'a> {
    pub fn new(addresses: &'a OverrideTable<String>, ports: &'a OverrideTable<u16>) -> Self {
        Self { addresses, ports }
    }

    /// Effective address for `org` and an optional peer.
    ///
    /// An absent peer is looked up under `*` first. Fails if the
    /// organization has no overrides at all or none of the keys match.
    pub fn address(&self, org: &str, peer: Option<&str>) -> Result<&'a str, ResolveError> {
        let addresses: &'a OverrideTable<String> = self.addresses;
        if !addresses.has_entries(org) {
            return Err(ResolveError::NoOverrides {
                org: org.to_string(),
            });
        }
        let key = peer.unwrap_or(WILDCARD);
        addresses
            .lookup(org, key)
            .map(String::as_str)
            .ok_or_else(|| ResolveError::NoAddress {
                org: org.to_string(),
                peer: key.to_string(),
            })
    }

    /// Effective port, falling back to `default` when nothing matches.
    ///
    /// `org` is the port map key exactly as stored (the builder passes `*`).
    /// An absent peer is looked up under that key.
    pub fn port(&self, org: &str, peer: Option<&str>, default: u16) -> u16 {
        let key = peer.unwrap_or(org);
        self.ports.lookup(org, key).copied().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> (OverrideTable<String>, OverrideTable<u16>) {
        (OverrideTable::new(), OverrideTable::new())
    }

    #[test]
    fn test_exact_peer_beats_wildcard() {
        let (mut addresses, ports) = tables();
        addresses.insert("org1", Some("peer0"), "10.0.0.10".to_string());
        addresses.insert("org1", Some("*"), "10.0.0.1".to_string());
        let resolver = AddressResolver::new(&addresses, &ports);

        assert_eq!(resolver.address("org1", Some("peer0")).unwrap(), "10.0.0.10");
        assert_eq!(resolver.address("org1", Some("peer7")).unwrap(), "10.0.0.1");
        assert_eq!(resolver.address("org1", None).unwrap(), "10.0.0.1");
    }

    #[test]
    fn test_org_level_override_is_keyed_by_org_name() {
        let (mut addresses, ports) = tables();
        addresses.insert("org1", None, "10.0.0.1".to_string());
        assert!(addresses.for_org("org1").unwrap().contains_key("org1"));
        assert!(!addresses.for_org("org1").unwrap().contains_key("*"));

        let resolver = AddressResolver::new(&addresses, &ports);
        assert_eq!(resolver.address("org1", Some("peer0")).unwrap(), "10.0.0.1");
        assert_eq!(resolver.address("org1", None).unwrap(), "10.0.0.1");
    }

    #[test]
    fn test_org_name_key_beats_wildcard() {
        let (mut addresses, ports) = tables();
        addresses.insert("org1", Some("*"), "10.0.0.2".to_string());
        addresses.insert("org1", None, "10.0.0.1".to_string());
        let resolver = AddressResolver::new(&addresses, &ports);

        assert_eq!(resolver.address("org1", Some("peer3")).unwrap(), "10.0.0.1");
    }

    #[test]
    fn test_missing_org_fails() {
        let (addresses, ports) = tables();
        let resolver = AddressResolver::new(&addresses, &ports);

        assert_eq!(
            resolver.address("org9", Some("peer0")),
            Err(ResolveError::NoOverrides {
                org: "org9".to_string()
            })
        );
    }

    #[test]
    fn test_unmatched_peer_fails_naming_org_and_peer() {
        let (mut addresses, ports) = tables();
        addresses.insert("org1", Some("peer0"), "10.0.0.10".to_string());
        let resolver = AddressResolver::new(&addresses, &ports);

        let err = resolver.address("org1", Some("peer1")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::NoAddress {
                org: "org1".to_string(),
                peer: "peer1".to_string()
            }
        );
        let message = err.to_string();
        assert!(message.contains("org1") && message.contains("peer1"));
    }

    #[test]
    fn test_port_lookup_defaults_and_overrides() {
        let (addresses, mut ports) = tables();
        ports.insert("*", Some("peer1"), 8051);
        ports.insert("org1", Some("peer0"), 9051);
        let resolver = AddressResolver::new(&addresses, &ports);

        assert_eq!(resolver.port("*", Some("peer1"), 7051), 8051);
        assert_eq!(resolver.port("*", Some("peer0"), 7051), 7051);
        // Port lookups never substitute the caller's organization for the map key.
        assert_eq!(resolver.port("org2", Some("peer0"), 7051), 7051);
        assert_eq!(resolver.port("org1", Some("peer0"), 7051), 9051);
    }

    #[test]
    fn test_port_org_level_override() {
        let (addresses, mut ports) = tables();
        ports.insert("*", None, 10051);
        let resolver = AddressResolver::new(&addresses, &ports);

        assert_eq!(resolver.port("*", Some("peer5"), 7051), 10051);
        assert_eq!(resolver.port("*", None, 7051), 10051);
    }

    #[test]
    fn test_last_write_wins() {
        let (mut addresses, ports) = tables();
        addresses.insert("org1", Some("*"), "10.0.0.1".to_string());
        addresses.insert("org1", Some("*"), "10.0.0.9".to_string());
        let resolver = AddressResolver::new(&addresses, &ports);

        assert_eq!(resolver.address("org1", None).unwrap(), "10.0.0.9");
        assert_eq!(addresses.iter().count(), 1);
    }
}
