//! Pokedex CLI - An interactive explorer over the PokeAPI
//!
//! Pages through location areas with a cursor-driven pager backed by a
//! time-expiring read-through response cache.

use std::io;

use tokio::io::BufReader;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::{repl, Config, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the session: HTTP client, response cache and its sweep task
/// 4. Run the REPL on stdin/stdout until `exit`, end of input or Ctrl+C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt;
    // override with RUST_LOG, e.g. RUST_LOG=pokedex_cli=debug
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, api_base_url={}, fetch_timeout={}s",
        config.cache_ttl, config.api_base_url, config.fetch_timeout
    );

    let mut session = Session::from_config(&config)?;
    info!("Session initialized");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    tokio::select! {
        result = repl::run(&mut session, stdin, &mut stdout, &config.prompt) => result?,
        _ = signal::ctrl_c() => {
            println!();
            info!("Received Ctrl+C, closing the Pokedex");
        }
    }

    session.cache().shutdown();
    info!("Pokedex closed");
    Ok(())
}
