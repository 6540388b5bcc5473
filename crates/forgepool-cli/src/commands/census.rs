use anyhow::Result;

use forgepool_core::PoolConfig;
use forgepool_host::ProcessCensus;

pub fn run(config: &PoolConfig, process_name: Option<&str>, format: &str) -> Result<()> {
    let name = process_name.unwrap_or(&config.worker.process_name);
    let census = ProcessCensus::new(name);
    let count = census.try_count()?;

    match format {
        "json" => {
            let output = serde_json::json!({
                "process_name": name,
                "active_nodes": count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!("{count} live worker node(s) named '{name}'");
        }
    }

    Ok(())
}
