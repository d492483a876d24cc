//! Client section.

use crate::profile::{ClientSection, ConnectionOptions, LoggingOptions, PeerTimeouts, TimeoutOptions};

const CLIENT_LOG_LEVEL: &str = "debug";
const CLIENT_TIMEOUT_MS: u64 = 30_000;

pub(super) fn build_client(organization: Option<&str>) -> ClientSection {
    ClientSection {
        logging: LoggingOptions {
            level: CLIENT_LOG_LEVEL.to_string(),
        },
        connection: ConnectionOptions {
            timeout: TimeoutOptions {
                peer: PeerTimeouts {
                    endorser: CLIENT_TIMEOUT_MS,
                    event_hub: CLIENT_TIMEOUT_MS,
                    event_reg: CLIENT_TIMEOUT_MS,
                },
                orderer: CLIENT_TIMEOUT_MS,
            },
        },
        organization: organization.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_section() {
        let client = build_client(Some("org2"));
        assert_eq!(client.logging.level, "debug");
        assert_eq!(client.connection.timeout.orderer, 30_000);
        assert_eq!(client.connection.timeout.peer.event_reg, 30_000);
        assert_eq!(client.organization.as_deref(), Some("org2"));

        let value = serde_json::to_value(build_client(None)).unwrap();
        assert!(value.get("organization").is_none());
        assert_eq!(value["connection"]["timeout"]["peer"]["eventHub"], 30_000);
    }
}
