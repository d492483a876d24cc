//! Channel section: orderers, peer roles and policies.

use crate::naming;
use crate::profile::{
    ChannelPolicies, ChannelSection, PeerRole, QueryChannelConfig, RetryOptions, Section,
};
use log::debug;
use std::time::Duration;

/// Query-channel retry policy for the SDK. Describes client behavior only.
pub(super) fn query_channel_config() -> QueryChannelConfig {
    QueryChannelConfig {
        min_responses: 1,
        max_targets: 1,
        retry_opts: RetryOptions {
            attempts: 5,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(5),
            backoff_factor: 2.0,
        },
    }
}

pub(super) fn build_channels(
    channel: &str,
    organizations: &[String],
    peer_count: usize,
    attach_query_policy: bool,
) -> Section<ChannelSection> {
    let mut peers = Section::new();
    for org in organizations {
        for index in 0..peer_count {
            match PeerRole::for_index(index) {
                Some(role) => {
                    peers.insert(naming::peer_name(org, index), role.record());
                }
                None => debug!(
                    "Peer {} has no channel role",
                    naming::peer_name(org, index)
                ),
            }
        }
    }

    let query_policy = query_channel_config();
    let policies = if attach_query_policy {
        ChannelPolicies {
            query_channel_config: Some(query_policy),
        }
    } else {
        ChannelPolicies::default()
    };

    let mut channels = Section::new();
    channels.insert(
        channel.to_string(),
        ChannelSection {
            orderers: naming::orderer_ids(organizations.len()),
            peers,
            policies,
        },
    );
    channels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orgs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_roles_follow_peer_index() {
        let channels = build_channels("common", &orgs(&["org1"]), 5, false);
        let channel = channels.get("common").unwrap();

        let peer0 = channel.peers.get("org1-peer0").unwrap();
        assert!(peer0.endorsing_peer && peer0.chaincode_query && peer0.ledger_query && peer0.event_source);

        let peer1 = channel.peers.get("org1-peer1").unwrap();
        assert_eq!(
            (peer1.endorsing_peer, peer1.chaincode_query, peer1.ledger_query, peer1.event_source),
            (false, true, false, false)
        );

        let peer2 = channel.peers.get("org1-peer2").unwrap();
        assert_eq!(
            (peer2.endorsing_peer, peer2.chaincode_query, peer2.ledger_query, peer2.event_source),
            (false, false, true, false)
        );

        let peer3 = channel.peers.get("org1-peer3").unwrap();
        assert_eq!(
            (peer3.endorsing_peer, peer3.chaincode_query, peer3.ledger_query, peer3.event_source),
            (false, false, false, true)
        );

        assert!(!channel.peers.contains_key("org1-peer4"));
        assert_eq!(channel.peers.len(), 4);
    }

    #[test]
    fn test_orderers_track_organizations() {
        let channels = build_channels("common", &orgs(&["org1", "org2", "org3"]), 1, false);
        let channel = channels.get("common").unwrap();
        assert_eq!(channel.orderers, vec!["orderer0", "orderer1", "orderer2"]);
        assert_eq!(channel.peers.keys().collect::<Vec<_>>(), vec!["org1-peer0", "org2-peer0", "org3-peer0"]);
    }

    #[test]
    fn test_policies_empty_unless_attached() {
        let detached = build_channels("common", &orgs(&["org1"]), 1, false);
        assert_eq!(detached.get("common").unwrap().policies, ChannelPolicies::default());

        let attached = build_channels("common", &orgs(&["org1"]), 1, true);
        let policy = attached
            .get("common")
            .unwrap()
            .policies
            .query_channel_config
            .as_ref()
            .unwrap();
        assert_eq!(policy.retry_opts.attempts, 5);
        assert_eq!(policy.retry_opts.max_backoff, Duration::from_secs(5));
    }
}
