//! Data models for subnet planning

mod allocation;
mod segment;

pub use allocation::AllocatedSubnet;
pub use segment::SegmentRequest;
