use clap::Parser;
use replica_store::cluster::service::ReplicatedStore;
use replica_store::config::StoreConfig;
use replica_store::shell::{self, OutputFormat};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Replicated file store simulator.
#[derive(Parser, Debug)]
#[command(name = "replica-store", version, about)]
struct Args {
    /// JSON config file; flags below override its values.
    #[arg(short, long, env = "REPLICA_STORE_CONFIG")]
    config: Option<PathBuf>,

    /// Number of storage nodes.
    #[arg(long, env = "REPLICA_STORE_NODES")]
    nodes: Option<usize>,

    /// Target replicas per file.
    #[arg(short = 'r', long, env = "REPLICA_STORE_REPLICATION")]
    replication_factor: Option<usize>,

    /// Capacity of the file table.
    #[arg(long)]
    max_files: Option<usize>,

    /// Print file and node listings as JSON lines.
    #[arg(long)]
    json: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => StoreConfig::from_file(path)?,
        None => StoreConfig::default(),
    };
    if let Some(nodes) = args.nodes {
        config.node_count = nodes;
    }
    if let Some(r) = args.replication_factor {
        config.replication_factor = r;
    }
    if let Some(max_files) = args.max_files {
        config.max_files = max_files;
    }

    let mut store = ReplicatedStore::new(config)?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let interactive = std::io::stdin().is_terminal();
    if interactive {
        println!("Replicated File Store Simulator. Type 'help' for commands.");
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    shell::run(&mut store, stdin, tokio::io::stdout(), format, interactive).await?;

    tracing::info!("Exiting");
    Ok(())
}
