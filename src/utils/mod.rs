//! Shared utilities: address validation helpers.

pub mod ip_utils;

pub use ip_utils::is_valid_address;
