//! forgepool-host — host capability queries for ForgePool.
//!
//! What the reuse policy consumes but cannot compute itself: how many
//! worker processes are alive machine-wide, and how much parallelism the
//! host offers. Both are snapshot reads of host-global state, modeled as
//! explicit capability calls so the policy stays pure.

pub mod census;
pub mod parallel;

pub use census::{CensusError, ProcessCensus};
pub use parallel::{available_parallel_units, default_reuse_threshold};
