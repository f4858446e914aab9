//! medcare workload CLI
//!
//! Lists the registered workloads and previews the requests a worker would
//! send, without contacting a network.

use clap::{Parser, Subcommand};
use medcare_types::WorkerIndex;
use medcare_workload::{
    create_workload_module, DryRunAdapter, FixedClock, WorkloadConfig, WorkloadContext,
    WorkloadKind,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "medcare-workload")]
#[command(about = "Benchmark workloads for the medcare contract")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered workloads and the contract function each invokes
    List,

    /// Print the requests one worker would submit, as JSON
    Preview {
        /// Workload name (e.g. createAsset, readAsset)
        #[arg(short, long)]
        workload: String,

        /// Worker index
        #[arg(long, default_value = "0")]
        worker_index: u32,

        /// Number of submissions
        #[arg(short, long, default_value = "1")]
        count: u64,

        /// Pin the clock to this Unix time in milliseconds
        #[arg(long)]
        at_millis: Option<u64>,

        /// TOML file overriding request literals
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for kind in WorkloadKind::ALL {
                println!("{:<20} {}", kind.name(), kind.function());
            }
        }

        Commands::Preview {
            workload,
            worker_index,
            count,
            at_millis,
            config,
        } => {
            // Requests go to stdout; logs stay on stderr.
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .init();

            let config = match config {
                Some(path) => WorkloadConfig::load(path)?,
                None => WorkloadConfig::default(),
            };

            let adapter = DryRunAdapter::new().with_sink(|request| {
                match serde_json::to_string(request) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("Failed to encode request: {}", e),
                }
            });

            let mut ctx = WorkloadContext::new(WorkerIndex(worker_index), Arc::new(adapter));
            if let Some(millis) = at_millis {
                ctx = ctx.with_clock(Arc::new(FixedClock::new(millis)));
            }

            let mut module = create_workload_module(&workload, ctx, &config)?;
            for _ in 0..count {
                module.submit_transaction().await?;
            }
            module.cleanup_workload_module().await;
        }
    }

    Ok(())
}
