//! Segment request model

use serde::{Deserialize, Serialize};

/// A single segment's address requirement
///
/// Supplied wholesale by the caller and immutable once handed to the
/// planner. The identifier is opaque; it is carried through to the
/// resulting [`AllocatedSubnet`](crate::AllocatedSubnet) unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRequest {
    /// Caller-supplied label (name or stringified index)
    pub id: String,
    /// Usable host addresses the segment must provide (>= 1)
    pub required_hosts: u64,
}

impl SegmentRequest {
    /// Create a new segment request
    pub fn new(id: impl Into<String>, required_hosts: u64) -> Self {
        Self {
            id: id.into(),
            required_hosts,
        }
    }
}
