//! Error types for subnet planning

use std::net::Ipv4Addr;
use thiserror::Error;

/// Result type for planner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Subnet planner errors
#[derive(Debug, Clone, Error)]
pub enum Error {
    // Request validation errors
    #[error("required host count {0} is outside 1..=4294967294")]
    InvalidHostCount(u64),

    #[error("segment {segment}: required host count {required_hosts} is outside 1..=4294967294")]
    InvalidRequest { segment: String, required_hosts: u64 },

    #[error("base network {0} is not canonical (host bits set)")]
    InvalidBaseNetwork(String),

    #[error("invalid prefix length: {0}")]
    InvalidPrefixLen(String),

    // Capacity errors
    #[error(
        "segments need {total_needed} addresses but base network {base} only has {total_available}"
    )]
    CapacityExceeded {
        base: String,
        total_needed: u64,
        total_available: u64,
    },

    // Packing errors
    #[error("segment {segment}: /{prefix_len} block at {network} extends past the end of {base}")]
    Overflow {
        segment: String,
        network: Ipv4Addr,
        prefix_len: u8,
        base: String,
    },
}

impl From<ipnet::PrefixLenError> for Error {
    fn from(e: ipnet::PrefixLenError) -> Self {
        Error::InvalidPrefixLen(e.to_string())
    }
}

impl From<std::net::AddrParseError> for Error {
    fn from(e: std::net::AddrParseError) -> Self {
        Error::InvalidBaseNetwork(e.to_string())
    }
}
