//! Property-based tests for the VLSM planner

use ipnet::Ipv4Net;
use proptest::collection::vec;
use proptest::prelude::*;
use std::str::FromStr;
use subnet_planner::{derive_prefix, plan, SegmentRequest};

/// Base network used for randomized packing runs; large enough that the
/// generated host counts below can never exhaust it.
fn test_base() -> Ipv4Net {
    Ipv4Net::from_str("10.0.0.0/16").unwrap()
}

fn to_segments(host_counts: &[u64]) -> Vec<SegmentRequest> {
    host_counts
        .iter()
        .enumerate()
        .map(|(i, &hosts)| SegmentRequest::new(format!("seg-{i}"), hosts))
        .collect()
}

/// Pack blocks at a cursor in the given order without sorting, returning
/// the total span consumed. Mirrors what a naive planner would do.
fn unsorted_span(host_counts: &[u64]) -> u64 {
    host_counts
        .iter()
        .map(|&hosts| 1u64 << (32 - derive_prefix(hosts).unwrap()))
        .sum()
}

proptest! {
    #[test]
    fn prop_derive_prefix_is_minimal(hosts in 1u64..=1_000_000) {
        let prefix = derive_prefix(hosts).unwrap();
        let block = 1u64 << (32 - prefix);

        prop_assert!(block >= hosts + 2);
        prop_assert!(block / 2 < hosts + 2);
    }

    #[test]
    fn prop_allocations_disjoint_and_contained(
        host_counts in vec(1u64..=2000, 1..8)
    ) {
        let base = test_base();
        let result = plan(base, &to_segments(&host_counts)).unwrap();

        let mut ranges: Vec<(u32, u32)> = result
            .iter()
            .map(|s| (u32::from(s.network), u32::from(s.broadcast)))
            .collect();
        ranges.sort();

        for &(start, end) in &ranges {
            prop_assert!(start <= end);
            prop_assert!(start >= u32::from(base.network()));
            prop_assert!(end <= u32::from(base.broadcast()));
        }
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].1 < pair[1].0, "overlapping allocations");
        }
    }

    #[test]
    fn prop_packing_is_contiguous_and_aligned(
        host_counts in vec(1u64..=2000, 1..8)
    ) {
        let base = test_base();
        let result = plan(base, &to_segments(&host_counts)).unwrap();

        let mut by_network: Vec<_> = result.iter().collect();
        by_network.sort_by_key(|s| u32::from(s.network));

        prop_assert_eq!(by_network[0].network, base.network());
        for pair in by_network.windows(2) {
            prop_assert_eq!(
                u32::from(pair[0].broadcast) + 1,
                u32::from(pair[1].network)
            );
        }

        // Descending-size packing keeps every block on its own boundary
        for subnet in &by_network {
            let block = subnet.address_count();
            prop_assert_eq!(u64::from(u32::from(subnet.network)) % block, 0);
        }
    }

    #[test]
    fn prop_sorted_packing_never_wider_than_input_order(
        host_counts in vec(1u64..=2000, 1..8)
    ) {
        let base = test_base();
        let result = plan(base, &to_segments(&host_counts)).unwrap();

        let span: u64 = result.iter().map(|s| s.address_count()).sum();
        prop_assert!(span <= unsorted_span(&host_counts));
    }

    #[test]
    fn prop_plan_is_idempotent(host_counts in vec(1u64..=2000, 1..8)) {
        let base = test_base();
        let segs = to_segments(&host_counts);

        let first = plan(base, &segs).unwrap();
        let second = plan(base, &segs).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_output_order_matches_input(host_counts in vec(1u64..=2000, 1..8)) {
        let base = test_base();
        let result = plan(base, &to_segments(&host_counts)).unwrap();

        for (i, subnet) in result.iter().enumerate() {
            prop_assert_eq!(&subnet.id, &format!("seg-{i}"));
            prop_assert_eq!(subnet.required_hosts, host_counts[i]);
        }
    }

    #[test]
    fn prop_every_block_satisfies_its_request(
        host_counts in vec(1u64..=2000, 1..8)
    ) {
        let base = test_base();
        let result = plan(base, &to_segments(&host_counts)).unwrap();

        for subnet in &result {
            prop_assert!(subnet.address_count() >= subnet.required_hosts + 2);
        }
    }
}
