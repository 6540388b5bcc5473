//! Worker-node pool bookkeeping.
//!
//! `NodePool` tracks the live worker nodes one build instance owns and
//! turns a reuse decision into a `TrimPlan`. The pool orders nodes
//! most-recently-used first before consulting the policy, so the prefix of
//! kept positions lands on the warmest workers. Executing the plan
//! (signaling and reaping processes) is the build engine's job.

use serde::{Deserialize, Serialize};
use tracing::info;

use forgepool_core::{NodeId, WorkerNode};

use crate::policy::{NodeCensus, ReusePolicy, ThresholdSource};

/// Outcome of trimming a pool: which nodes stay warm for the next build
/// and which the engine must shut down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrimPlan {
    pub keep: Vec<WorkerNode>,
    pub terminate: Vec<WorkerNode>,
}

/// Live worker nodes owned by a single build instance.
#[derive(Debug, Default)]
pub struct NodePool {
    nodes: Vec<WorkerNode>,
}

impl NodePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<WorkerNode>) -> Self {
        Self { nodes }
    }

    /// Add a node to the pool (a worker that just finished spawning, or a
    /// kept node adopted from a previous build).
    pub fn checkin(&mut self, node: WorkerNode) {
        self.nodes.push(node);
    }

    /// Record that `id` executed work at `now` (Unix seconds).
    pub fn touch(&mut self, id: NodeId, now: u64) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.last_used = now;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[WorkerNode] {
        &self.nodes
    }

    /// Trim the pool at end of build.
    ///
    /// Sorts nodes most-recently-used first, asks the policy how many may
    /// stay, and partitions accordingly. The pool retains the kept nodes;
    /// the caller owns termination of the rest.
    pub fn trim<C, T>(&mut self, policy: &ReusePolicy<C, T>, reuse_enabled: bool) -> TrimPlan
    where
        C: NodeCensus,
        T: ThresholdSource,
    {
        self.nodes.sort_by(|a, b| b.last_used.cmp(&a.last_used));

        let decision = policy.decide(self.nodes.len(), reuse_enabled);

        let mut keep = Vec::new();
        let mut terminate = Vec::new();
        for (node, keep_node) in self.nodes.drain(..).zip(decision) {
            if keep_node {
                keep.push(node);
            } else {
                terminate.push(node);
            }
        }

        info!(
            kept = keep.len(),
            terminated = terminate.len(),
            "worker pool trimmed"
        );

        self.nodes = keep.clone();
        TrimPlan { keep, terminate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: NodeId, last_used: u64) -> WorkerNode {
        WorkerNode::new(id, 1000 + id, last_used)
    }

    fn policy(
        system_wide: usize,
        threshold: i64,
    ) -> ReusePolicy<impl NodeCensus, impl ThresholdSource> {
        ReusePolicy::new(move || system_wide, move || threshold)
    }

    #[test]
    fn trim_keeps_most_recently_used() {
        let mut pool = NodePool::from_nodes(vec![node(1, 50), node(2, 200), node(3, 100)]);

        // 3 foreign nodes and a threshold of 4: room for one of ours.
        let plan = pool.trim(&policy(6, 4), true);

        assert_eq!(plan.keep.len(), 1);
        assert_eq!(plan.keep[0].id, 2);
        assert_eq!(plan.terminate.len(), 2);
    }

    #[test]
    fn trim_disabled_empties_pool() {
        let mut pool = NodePool::from_nodes(vec![node(1, 10), node(2, 20)]);

        let plan = pool.trim(&policy(2, 8), false);

        assert!(plan.keep.is_empty());
        assert_eq!(plan.terminate.len(), 2);
        assert!(pool.is_empty());
    }

    #[test]
    fn trim_retains_kept_nodes_in_pool() {
        let mut pool = NodePool::from_nodes(vec![node(1, 10), node(2, 20), node(3, 30)]);

        // Alone on the host with a generous threshold: keep everything.
        let plan = pool.trim(&policy(3, 8), true);

        assert_eq!(plan.keep.len(), 3);
        assert!(plan.terminate.is_empty());
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn touch_promotes_node_for_next_trim() {
        let mut pool = NodePool::from_nodes(vec![node(1, 50), node(2, 200)]);
        pool.touch(1, 300);

        // Room for exactly one node.
        let plan = pool.trim(&policy(4, 3), true);

        assert_eq!(plan.keep.len(), 1);
        assert_eq!(plan.keep[0].id, 1);
    }

    #[test]
    fn trim_empty_pool_is_a_noop() {
        let mut pool = NodePool::new();

        let plan = pool.trim(&policy(0, 4), true);

        assert!(plan.keep.is_empty());
        assert!(plan.terminate.is_empty());
    }

    #[test]
    fn checkin_grows_pool() {
        let mut pool = NodePool::new();
        pool.checkin(node(1, 10));
        pool.checkin(node(2, 20));

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.nodes()[0].id, 1);
    }
}
