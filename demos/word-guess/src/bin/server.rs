//! Word-guessing game server.
//!
//! Listens on the given port and serves one game per connection, one
//! connection at a time: a secret 5-letter word, per-letter feedback, and
//! a bounded number of attempts.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordwire::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Word-guessing game server")]
struct Args {
    /// Port to listen on
    port: u16,

    /// Maximum guesses per game
    #[arg(default_value_t = DEFAULT_MAX_ATTEMPTS,
          value_parser = clap::value_parser!(u32).range(6..=10))]
    max_attempts: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let server = GuessServerBuilder::new()
        .bind(&format!("0.0.0.0:{}", args.port))
        .max_attempts(args.max_attempts)
        .build()
        .await?;

    server.run().await?;
    Ok(())
}
