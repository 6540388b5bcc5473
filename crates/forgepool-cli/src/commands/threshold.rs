use anyhow::Result;

use forgepool_host::{available_parallel_units, default_reuse_threshold};

pub fn run(format: &str) -> Result<()> {
    let units = available_parallel_units();
    let threshold = default_reuse_threshold();

    match format {
        "json" => {
            let output = serde_json::json!({
                "parallel_units": units,
                "default_threshold": threshold,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!("parallel units: {units}");
            println!("default reuse threshold: {threshold}");
        }
    }

    Ok(())
}
