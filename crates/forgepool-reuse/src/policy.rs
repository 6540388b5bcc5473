//! The node-reuse decision policy.
//!
//! `ReusePolicy` consumes two injected collaborators: a census of worker
//! nodes alive host-wide, and the host-wide threshold. Both are consulted
//! fresh on every call; the policy itself holds no state and performs no
//! side effects beyond logging.

use tracing::debug;

/// Supplies the number of worker nodes currently alive on this machine,
/// across all build instances (including the caller's own).
///
/// Implementations typically snapshot the OS process table, so the value
/// may be stale by the time a caller acts on it. The policy clamps rather
/// than trusting the snapshot.
pub trait NodeCensus {
    fn active_nodes(&self) -> usize;
}

impl<F> NodeCensus for F
where
    F: Fn() -> usize,
{
    fn active_nodes(&self) -> usize {
        self()
    }
}

/// Supplies the host-wide cap on live worker nodes.
///
/// Values <= 0 mean no node may be reused.
pub trait ThresholdSource {
    fn reuse_threshold(&self) -> i64;
}

impl<F> ThresholdSource for F
where
    F: Fn() -> i64,
{
    fn reuse_threshold(&self) -> i64 {
        self()
    }
}

/// How many of this instance's `node_count` nodes may stay alive so the
/// host-wide total does not exceed `threshold`, given a `system_wide`
/// snapshot.
///
/// Total over its inputs: an inconsistent snapshot (`system_wide` below
/// `node_count`) or a non-positive threshold clamps to a valid count
/// instead of faulting. The result is always in `0..=node_count`.
pub fn allowed_keep_count(node_count: usize, system_wide: usize, threshold: i64) -> usize {
    let other = system_wide.saturating_sub(node_count) as i64;
    let allowed = threshold.saturating_sub(other).max(0) as usize;
    node_count.min(allowed)
}

/// Decides which of a build instance's worker nodes to keep at end of
/// build.
pub struct ReusePolicy<C, T> {
    census: C,
    threshold: T,
}

impl<C, T> ReusePolicy<C, T>
where
    C: NodeCensus,
    T: ThresholdSource,
{
    pub fn new(census: C, threshold: T) -> Self {
        Self { census, threshold }
    }

    /// Decide the fate of this instance's `node_count` nodes.
    ///
    /// Returns one entry per node; `true` at position `i` keeps node `i`
    /// alive. Kept positions always form a prefix, so callers should place
    /// the nodes most worth keeping first.
    ///
    /// When `reuse_enabled` is false the collaborators are not consulted
    /// and every node is terminated.
    pub fn decide(&self, node_count: usize, reuse_enabled: bool) -> Vec<bool> {
        if !reuse_enabled {
            debug!(node_count, "node reuse disabled, terminating all nodes");
            return vec![false; node_count];
        }

        let system_wide = self.census.active_nodes();
        let threshold = self.threshold.reuse_threshold();
        let keep = allowed_keep_count(node_count, system_wide, threshold);

        debug!(
            node_count,
            system_wide,
            threshold,
            keep,
            "node reuse decision"
        );

        (0..node_count).map(|index| index < keep).collect()
    }
}
