//! VLSM Subnet Planner
//!
//! Partitions a private IPv4 base network into the smallest set of
//! non-overlapping subnets that satisfy a list of per-segment host
//! requirements:
//! - Minimal prefix derivation from a required host count
//! - Aggregate capacity validation against the base network
//! - Deterministic largest-first packing with stable tie-breaking
//! - Network/broadcast/gateway/usable-range derivation per subnet
//!
//! The planner is pure and stateless: it consumes validated structured
//! input and returns value objects or a typed error. Input acquisition,
//! DHCP/DNS text generation, and persistence live with the caller.

pub mod error;
pub mod models;
pub mod planner;

// Re-export core types
pub use error::{Error, Result};
pub use models::{AllocatedSubnet, SegmentRequest};
pub use planner::{derive_prefix, plan, MAX_HOSTS};

/// Private address space catalog
pub mod address_space {
    use ipnet::Ipv4Net;
    use std::net::Ipv4Addr;

    /// RFC 1918 class A block: 10.0.0.0/8
    pub const PRIVATE_10: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(10, 0, 0, 0), 8);

    /// RFC 1918 class B block: 172.16.0.0/12
    pub const PRIVATE_172_16: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(172, 16, 0, 0), 12);

    /// RFC 1918 class C block: 192.168.0.0/16
    pub const PRIVATE_192_168: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(192, 168, 0, 0), 16);

    /// The full RFC 1918 catalog offered to callers as planning bases
    pub const RFC1918: [Ipv4Net; 3] = [PRIVATE_10, PRIVATE_172_16, PRIVATE_192_168];

    /// Segment count ceiling for interactive callers; the planner itself
    /// accepts any count
    pub const MAX_SEGMENTS: usize = 100;
}
