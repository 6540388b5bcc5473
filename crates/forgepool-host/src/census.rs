//! System-wide worker-process census.
//!
//! Counts live worker processes across every build instance on the host by
//! scanning an OS process-table snapshot. The count is a best-effort
//! observation: by the time a caller acts on it, workers may already have
//! started or exited. The reuse policy clamps around that.

use sysinfo::System;
use thiserror::Error;
use tracing::warn;

use forgepool_reuse::NodeCensus;

/// Errors from process-table enumeration.
#[derive(Debug, Error)]
pub enum CensusError {
    #[error("process enumeration is not supported on this platform")]
    Unsupported,

    #[error("census task aborted: {0}")]
    Join(String),
}

/// Counts live worker processes host-wide by executable name.
#[derive(Debug, Clone)]
pub struct ProcessCensus {
    process_name: String,
}

impl ProcessCensus {
    pub fn new(process_name: impl Into<String>) -> Self {
        Self {
            process_name: process_name.into(),
        }
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// Snapshot the process table and count workers.
    ///
    /// Blocks briefly while the OS enumerates processes.
    pub fn try_count(&self) -> Result<usize, CensusError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(CensusError::Unsupported);
        }

        let mut system = System::new();
        system.refresh_processes();

        Ok(system
            .processes()
            .values()
            .filter(|process| process.name() == self.process_name)
            .count())
    }

    /// Count workers, substituting `fallback` when enumeration fails.
    ///
    /// A failed census must never take a build down with it; the caller
    /// picks the conservative value to proceed with.
    pub fn count_or(&self, fallback: usize) -> usize {
        match self.try_count() {
            Ok(count) => count,
            Err(error) => {
                warn!(error = %error, fallback, "worker census failed");
                fallback
            }
        }
    }

    /// Async census; enumeration can block on the OS, so it runs on the
    /// blocking pool.
    pub async fn try_count_async(&self) -> Result<usize, CensusError> {
        let census = self.clone();
        tokio::task::spawn_blocking(move || census.try_count())
            .await
            .map_err(|e| CensusError::Join(e.to_string()))?
    }
}

impl NodeCensus for ProcessCensus {
    fn active_nodes(&self) -> usize {
        // Fallback 0 reads as an idle host: the instance keeps up to the
        // threshold and the next decision point corrects any overshoot.
        self.count_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn own_process_name() -> Option<String> {
        let mut system = System::new();
        system.refresh_processes();
        let pid = sysinfo::get_current_pid().ok()?;
        system
            .processes()
            .get(&pid)
            .map(|process| process.name().to_string())
    }

    #[test]
    fn counts_own_process() {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return;
        }
        let name = own_process_name().expect("own process visible in snapshot");
        let census = ProcessCensus::new(name);

        assert!(census.try_count().unwrap() >= 1);
    }

    #[test]
    fn unknown_process_name_counts_zero() {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return;
        }
        let census = ProcessCensus::new("forgepool-no-such-worker");

        assert_eq!(census.try_count().unwrap(), 0);
        assert_eq!(census.count_or(7), 0);
    }

    #[test]
    fn census_trait_returns_snapshot_count() {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return;
        }
        let census = ProcessCensus::new("forgepool-no-such-worker");

        assert_eq!(census.active_nodes(), 0);
    }

    #[tokio::test]
    async fn async_census_matches_sync() {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return;
        }
        let census = ProcessCensus::new("forgepool-no-such-worker");

        assert_eq!(census.try_count_async().await.unwrap(), 0);
    }
}
