use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "forgepool",
    about = "ForgePool — build worker-node pool manager",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Path to forgepool.toml (built-in defaults when omitted).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count live worker processes host-wide
    Census {
        /// Worker executable name to count (overrides config)
        #[arg(short, long)]
        process_name: Option<String>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Compute a reuse decision for a pool of worker nodes.
    ///
    /// By default the live process census and the host-derived threshold
    /// are consulted; --system-wide and --threshold substitute fixed
    /// values for either collaborator.
    Plan {
        /// Number of worker nodes this build instance holds
        #[arg(short, long)]
        nodes: usize,
        /// Fixed system-wide node count instead of the live census
        #[arg(long)]
        system_wide: Option<usize>,
        /// Fixed reuse threshold instead of config/host default
        #[arg(short, long)]
        threshold: Option<i64>,
        /// Disable reuse: terminate every node
        #[arg(long)]
        no_reuse: bool,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Show host parallelism and the derived default threshold
    Threshold {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("forgepool=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Census {
            process_name,
            format,
        } => commands::census::run(&config, process_name.as_deref(), &format),
        Commands::Plan {
            nodes,
            system_wide,
            threshold,
            no_reuse,
            format,
        } => commands::plan::run(&config, nodes, system_wide, threshold, no_reuse, &format),
        Commands::Threshold { format } => commands::threshold::run(&format),
    }
}
