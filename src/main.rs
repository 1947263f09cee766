#[cfg(not(feature = "server"))]
fn main() {}

#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use broadside::{init_logging, server, session::SessionStore, simulate, DEFAULT_MAX_SESSIONS};
#[cfg(feature = "server")]
use clap::{Parser, Subcommand};
#[cfg(feature = "server")]
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "server")]
enum Commands {
    /// Serve the game over HTTP for polling clients.
    Serve {
        #[arg(long, default_value = "127.0.0.1:5000")]
        bind: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Keep new sessions waiting until POST /start")]
        manual_start: bool,
        #[arg(long, default_value_t = DEFAULT_MAX_SESSIONS, help = "Live sessions kept before the least recently used is evicted")]
        max_sessions: usize,
    },
    /// Play one complete game in-process and print a JSON summary.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            seed,
            manual_start,
            max_sessions,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            info!("base seed {seed}, auto start {}", !manual_start);
            let store = Arc::new(SessionStore::new(seed, !manual_start).with_max_sessions(max_sessions));
            server::serve(&bind, store).await?;
        }
        Commands::Simulate { seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            let summary = simulate(seed).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}
