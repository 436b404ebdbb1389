//! VLSM planner for IPv4 base networks
//!
//! Packs variable-length subnets into a base block, largest first, with
//! u32 address arithmetic throughout. The whole computation is pure:
//! identical inputs always yield identical plans.

use crate::models::{AllocatedSubnet, SegmentRequest};
use crate::{Error, Result};
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// Largest host count any IPv4 block can satisfy (2^32 minus the
/// network and broadcast addresses)
pub const MAX_HOSTS: u64 = (1u64 << 32) - 2;

/// Compute the minimal prefix length for a required host count
///
/// Returns the unique `p` with `2^(32-p) >= required_hosts + 2`, the two
/// extra addresses being the network and broadcast of the block. A
/// single-host segment therefore lands in a /30.
pub fn derive_prefix(required_hosts: u64) -> Result<u8> {
    if required_hosts < 1 || required_hosts > MAX_HOSTS {
        return Err(Error::InvalidHostCount(required_hosts));
    }

    // hosts + network + broadcast, rounded up to a power of two
    let needed = required_hosts + 2;
    let bits = needed.next_power_of_two().trailing_zeros() as u8;

    Ok(32 - bits)
}

/// Plan a VLSM layout for the given segments within a base network
///
/// Each segment receives the smallest block that fits its host count,
/// blocks are packed contiguously from the base network address in
/// descending size order (input order breaks ties), and the result is
/// returned in the caller's original segment order. Either every
/// segment receives an allocation or the whole plan fails.
pub fn plan(base: Ipv4Net, segments: &[SegmentRequest]) -> Result<Vec<AllocatedSubnet>> {
    if base.trunc() != base {
        return Err(Error::InvalidBaseNetwork(base.to_string()));
    }

    // Derive every prefix and total demand before touching any addresses,
    // so invalid input surfaces as a single error with no partial work.
    let mut sized: Vec<(usize, u8)> = Vec::with_capacity(segments.len());
    let mut total_needed: u64 = 0;
    for (idx, seg) in segments.iter().enumerate() {
        let prefix = derive_prefix(seg.required_hosts).map_err(|_| Error::InvalidRequest {
            segment: seg.id.clone(),
            required_hosts: seg.required_hosts,
        })?;
        sized.push((idx, prefix));
        total_needed += seg.required_hosts + 2;
    }

    // Every segment reserves its own network and broadcast address in the
    // aggregate check, mirroring the per-block reservation model.
    let total_available = 1u64 << (32 - base.prefix_len());
    if total_needed > total_available {
        return Err(Error::CapacityExceeded {
            base: base.to_string(),
            total_needed,
            total_available,
        });
    }

    // Largest blocks first; the sort is stable so equal sizes keep input
    // order. Packing in descending size keeps the cursor aligned for every
    // subsequent block without explicit rounding.
    sized.sort_by_key(|&(_, prefix)| prefix);

    let space_start = u64::from(u32::from(base.network()));
    let space_end = u64::from(u32::from(base.broadcast()));
    let mut cursor = space_start;
    let mut allocations: Vec<(usize, AllocatedSubnet)> = Vec::with_capacity(segments.len());

    for (idx, prefix) in sized {
        let seg = &segments[idx];
        let block_size = 1u64 << (32 - prefix);
        let block_end = cursor + block_size - 1;

        // The aggregate check sums raw host counts while blocks round up
        // to powers of two, so packing can still run past the base.
        if block_end > space_end {
            return Err(Error::Overflow {
                segment: seg.id.clone(),
                network: Ipv4Addr::from(cursor as u32),
                prefix_len: prefix,
                base: base.to_string(),
            });
        }

        let cidr = Ipv4Net::new(Ipv4Addr::from(cursor as u32), prefix)?;
        tracing::debug!(
            segment = %seg.id,
            %cidr,
            required_hosts = seg.required_hosts,
            "allocated block"
        );

        allocations.push((
            idx,
            AllocatedSubnet::new(seg.id.clone(), seg.required_hosts, cidr),
        ));
        cursor = block_end + 1;
    }

    tracing::info!(
        %base,
        segments = segments.len(),
        addresses_used = cursor - space_start,
        "planned subnet layout"
    );

    // Hand results back in the caller's segment order.
    allocations.sort_by_key(|&(idx, _)| idx);
    Ok(allocations.into_iter().map(|(_, subnet)| subnet).collect())
}
