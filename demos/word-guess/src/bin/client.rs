//! Word-guessing game client.
//!
//! Connects to a running server and plays one interactive session on the
//! console: menu, local word validation, per-letter feedback.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordwire::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "Word-guessing game client")]
struct Args {
    /// Server address to connect to
    address: String,

    /// Server port
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    run_client(&format!("{}:{}", args.address, args.port)).await?;
    Ok(())
}
