pub mod census;
pub mod plan;
pub mod threshold;

use std::path::Path;

use forgepool_core::PoolConfig;
use tracing::debug;

/// Load forgepool.toml when a path was given, else built-in defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<PoolConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            PoolConfig::from_file(path)
        }
        None => Ok(PoolConfig::default()),
    }
}
