//! forgepool-core — shared types and configuration for ForgePool.
//!
//! ForgePool manages the persistent out-of-process worker nodes a build
//! instance keeps between builds. This crate holds the domain types shared
//! across the workspace and the `forgepool.toml` parser.

pub mod config;
pub mod types;

pub use config::{PoolConfig, ReuseConfig, WorkerConfig};
pub use types::{NodeId, WorkerNode};
