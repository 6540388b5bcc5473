//! Domain types for the worker-node pool.

use serde::{Deserialize, Serialize};

/// Identifier for a worker node within a single build instance.
pub type NodeId = u32;

/// Handle to one live persistent worker process.
///
/// The handle only describes the worker; spawning, IPC, and termination
/// belong to the build engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkerNode {
    pub id: NodeId,
    /// OS process id of the worker.
    pub pid: u32,
    /// Unix timestamp (seconds) when the node last executed work.
    pub last_used: u64,
}

impl WorkerNode {
    pub fn new(id: NodeId, pid: u32, last_used: u64) -> Self {
        Self { id, pid, last_used }
    }
}
