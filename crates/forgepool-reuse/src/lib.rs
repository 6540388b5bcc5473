//! forgepool-reuse — worker-node reuse decisions.
//!
//! When a build finishes, its persistent worker nodes could stay alive so
//! the next build skips process startup. Left unchecked, concurrent build
//! instances on one machine accumulate idle workers without bound. This
//! crate decides which nodes each instance may keep so the host-wide total
//! stays under a shared threshold, with no cross-instance coordination.
//!
//! # Decision Algorithm
//!
//! ```text
//! other   = max(0, system_wide - node_count)   // nodes held by other instances
//! allowed = max(0, threshold - other)          // room left for this instance
//! keep    = min(node_count, allowed)
//! ```
//!
//! The first `keep` positions are kept, the rest terminated. Callers order
//! their nodes most-worth-keeping first, so a one-step threshold shift
//! flips exactly one node's fate.
//!
//! Every instance decides from its own (possibly stale) snapshot of the
//! host-wide count. The clamping tolerates the race: over successive
//! builds the machine converges toward the threshold even though a single
//! decision may overshoot.

pub mod policy;
pub mod pool;

pub use policy::{NodeCensus, ReusePolicy, ThresholdSource, allowed_keep_count};
pub use pool::{NodePool, TrimPlan};
