//! Address utility functions for validating override targets.

use regex::Regex;
use std::net::IpAddr;
use std::sync::OnceLock;

/// Check if a string is a valid IP address (IPv4 or IPv6)
fn is_valid_ip(ip: &str) -> bool {
    ip.parse::<IpAddr>().is_ok()
}

fn hostname_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // RFC 1123 labels joined by dots
        Regex::new(r"^(?i)[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?(\.[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?)*$")
            .expect("hostname pattern is valid")
    })
}

/// Check if a string is a syntactically valid DNS hostname
fn is_valid_hostname(host: &str) -> bool {
    host.len() <= 253 && hostname_pattern().is_match(host)
}

/// Check if a string can be used as the host part of an endpoint URL
pub fn is_valid_address(address: &str) -> bool {
    is_valid_ip(address) || is_valid_hostname(address)
}
