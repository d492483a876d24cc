//! Conventional locations of credential material, relative to the crypto root.

use std::path::PathBuf;

/// Directory holding the crypto material of the ordering service.
const ORDERER_ORG_DIR: &str = "org-orderer";

/// `{org}/ca/ca.{org}-cert.pem`
pub fn ca_cert(org: &str) -> PathBuf {
    PathBuf::from(org)
        .join("ca")
        .join(format!("ca.{}-cert.pem", org))
}

/// `org-orderer/orderers/{orderer}/msp/tlscacerts/tlsca.org-orderer-cert.pem`
pub fn orderer_tls_cert(orderer: &str) -> PathBuf {
    PathBuf::from(ORDERER_ORG_DIR)
        .join("orderers")
        .join(orderer)
        .join("msp")
        .join("tlscacerts")
        .join(format!("tlsca.{}-cert.pem", ORDERER_ORG_DIR))
}

/// `{org}/peers/{peer}/msp/tlscacerts/tlsca.{org}-cert.pem`
pub fn peer_tls_cert(org: &str, peer: &str) -> PathBuf {
    PathBuf::from(org)
        .join("peers")
        .join(peer)
        .join("msp")
        .join("tlscacerts")
        .join(format!("tlsca.{}-cert.pem", org))
}

fn admin_msp(org: &str) -> PathBuf {
    PathBuf::from(org)
        .join("users")
        .join(format!("Admin@{}", org))
        .join("msp")
}

/// `{org}/users/Admin@{org}/msp/admincerts/Admin@{org}-cert.pem`
pub fn admin_cert(org: &str) -> PathBuf {
    admin_msp(org)
        .join("admincerts")
        .join(format!("Admin@{}-cert.pem", org))
}

/// `{org}/users/Admin@{org}/msp/keystore` (a directory)
pub fn admin_keystore(org: &str) -> PathBuf {
    admin_msp(org).join("keystore")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_conventional_paths() {
        assert_eq!(ca_cert("org1"), Path::new("org1/ca/ca.org1-cert.pem"));
        assert_eq!(
            orderer_tls_cert("orderer0"),
            Path::new("org-orderer/orderers/orderer0/msp/tlscacerts/tlsca.org-orderer-cert.pem")
        );
        assert_eq!(
            peer_tls_cert("org2", "peer1"),
            Path::new("org2/peers/peer1/msp/tlscacerts/tlsca.org2-cert.pem")
        );
        assert_eq!(
            admin_cert("org1"),
            Path::new("org1/users/Admin@org1/msp/admincerts/Admin@org1-cert.pem")
        );
        assert_eq!(admin_keystore("org1"), Path::new("org1/users/Admin@org1/msp/keystore"));
    }
}
