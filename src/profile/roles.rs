//! Peer capability roles within a channel.

use serde::Serialize;

/// Role assigned to a peer from its index within its organization.
///
/// Only the first four peers of an organization carry a role; later peers
/// are left without a role record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerRole {
    /// Endorses, answers chaincode and ledger queries, and sources events
    Endorsing,
    ChaincodeQueryOnly,
    LedgerQueryOnly,
    EventSourceOnly,
}

impl PeerRole {
    pub const ALL: [PeerRole; 4] = [
        PeerRole::Endorsing,
        PeerRole::ChaincodeQueryOnly,
        PeerRole::LedgerQueryOnly,
        PeerRole::EventSourceOnly,
    ];

    /// Role for the peer at `index`, or `None` past the fourth peer.
    pub fn for_index(index: usize) -> Option<PeerRole> {
        Self::ALL.get(index).copied()
    }

    /// `(endorsing, chaincode_query, ledger_query, event_source)`
    pub fn capabilities(self) -> (bool, bool, bool, bool) {
        match self {
            PeerRole::Endorsing => (true, true, true, true),
            PeerRole::ChaincodeQueryOnly => (false, true, false, false),
            PeerRole::LedgerQueryOnly => (false, false, true, false),
            PeerRole::EventSourceOnly => (false, false, false, true),
        }
    }

    pub fn record(self) -> PeerRoleRecord {
        let (endorsing_peer, chaincode_query, ledger_query, event_source) = self.capabilities();
        PeerRoleRecord {
            endorsing_peer,
            chaincode_query,
            ledger_query,
            event_source,
        }
    }
}

/// Per-peer capability flags as emitted under `channels.<name>.peers`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PeerRoleRecord {
    pub endorsing_peer: bool,
    pub chaincode_query: bool,
    pub ledger_query: bool,
    pub event_source: bool,
}
