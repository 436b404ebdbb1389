//! VLSM planning
//!
//! Pure, single-pass computation: derives minimal prefixes from host
//! counts and packs the resulting blocks into a base network.

mod vlsm;

pub use vlsm::{derive_prefix, plan, MAX_HOSTS};
