use anyhow::Result;

use forgepool_core::PoolConfig;
use forgepool_host::{ProcessCensus, default_reuse_threshold};
use forgepool_reuse::ReusePolicy;

pub fn run(
    config: &PoolConfig,
    nodes: usize,
    system_wide: Option<usize>,
    threshold: Option<i64>,
    no_reuse: bool,
    format: &str,
) -> Result<()> {
    let system_wide = match system_wide {
        Some(count) => count,
        None => ProcessCensus::new(config.worker.process_name.as_str()).count_or(0),
    };
    let threshold = threshold
        .or(config.reuse.threshold)
        .unwrap_or_else(default_reuse_threshold);
    let reuse_enabled = !no_reuse && config.reuse.enabled;

    let policy = ReusePolicy::new(move || system_wide, move || threshold);
    let decision = policy.decide(nodes, reuse_enabled);
    let keep = decision.iter().filter(|&&kept| kept).count();

    match format {
        "json" => {
            let output = serde_json::json!({
                "nodes": nodes,
                "system_wide": system_wide,
                "threshold": threshold,
                "reuse_enabled": reuse_enabled,
                "keep": keep,
                "terminate": nodes - keep,
                "decision": decision,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!("system-wide nodes: {system_wide}, threshold: {threshold}");
            println!("keep {keep} of {nodes} node(s)");
            for (index, kept) in decision.iter().enumerate() {
                let fate = if *kept { "keep" } else { "terminate" };
                println!("  node {index}: {fate}");
            }
        }
    }

    Ok(())
}
