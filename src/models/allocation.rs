//! Allocated subnet model

use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// A fully-described subnet allocation for one segment
///
/// Read-only result produced by the planner. All address fields are
/// derived from `cidr`; consumers (DHCP scope or zone generators) own
/// the value after planning and format it however they need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedSubnet {
    /// Identifier copied from the originating segment request
    pub id: String,
    /// Host count the segment asked for
    pub required_hosts: u64,
    /// Allocated CIDR block
    pub cidr: Ipv4Net,
    /// Dotted-quad subnet mask
    pub netmask: Ipv4Addr,
    /// Network address (first address of the block)
    pub network: Ipv4Addr,
    /// Broadcast address (last address of the block)
    pub broadcast: Ipv4Addr,
    /// Gateway address, by convention network + 1
    pub gateway: Ipv4Addr,
    /// First address of the usable host range (network + 2)
    pub first_usable: Ipv4Addr,
    /// Last address of the usable host range (broadcast - 1)
    pub last_usable: Ipv4Addr,
}

impl AllocatedSubnet {
    /// Derive the full allocation from a CIDR block
    ///
    /// Callers must pass a canonical block with prefix <= 30 so the
    /// gateway and usable range exist; the planner guarantees this.
    pub(crate) fn new(id: String, required_hosts: u64, cidr: Ipv4Net) -> Self {
        let network = cidr.network();
        let broadcast = cidr.broadcast();

        Self {
            id,
            required_hosts,
            cidr,
            netmask: cidr.netmask(),
            network,
            broadcast,
            gateway: Ipv4Addr::from(u32::from(network) + 1),
            first_usable: Ipv4Addr::from(u32::from(network) + 2),
            last_usable: Ipv4Addr::from(u32::from(broadcast) - 1),
        }
    }

    /// Prefix length of the allocated block
    pub fn prefix_len(&self) -> u8 {
        self.cidr.prefix_len()
    }

    /// Total addresses in the block, including network and broadcast
    pub fn address_count(&self) -> u64 {
        1u64 << (32 - self.cidr.prefix_len())
    }

    /// Check if an IP falls within this allocation
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.cidr.contains(&ip)
    }
}
