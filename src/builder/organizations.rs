//! Organizations section.

use crate::credentials::{paths, CredentialLookup};
use crate::naming;
use crate::profile::{OrganizationSection, Section};

pub(super) fn build_organizations(
    organizations: &[String],
    peer_count: usize,
    credentials: &CredentialLookup<'_>,
) -> Section<OrganizationSection> {
    let mut section = Section::new();
    for org in organizations {
        section.insert(org.clone(), build_organization(org, peer_count, credentials));
    }
    section
}

fn build_organization(
    org: &str,
    peer_count: usize,
    credentials: &CredentialLookup<'_>,
) -> OrganizationSection {
    let peers = (peer_count > 0)
        .then(|| (0..peer_count).map(|i| naming::peer_name(org, i)).collect());

    OrganizationSection {
        mspid: naming::msp_id(org),
        certificate_authorities: vec![naming::ca_id(org)],
        admin_private_key: credentials.tolerant_first_in(&paths::admin_keystore(org)),
        signed_cert: credentials.tolerant(&paths::admin_cert(org)),
        peers,
    }
}
