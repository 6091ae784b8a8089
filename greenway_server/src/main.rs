//! # greenway
//!
//! Serve or export the Greenway Landscaping website.
//!
//! ```bash
//! # Serve on localhost:8080 using ./greenway.toml
//! greenway serve
//!
//! # Maintenance mode without touching the config file
//! GREENWAY_MAINTENANCE_MODE=true greenway serve --port 3000
//!
//! # Static export for any file host
//! greenway build --out dist
//!
//! # What would visitors see right now?
//! greenway status
//! ```

use clap::Parser;
use greenway_server::{cli, logging};

#[tokio::main]
async fn main() {
    logging::init();

    let cli = cli::Cli::parse();
    tracing::debug!(?cli, "starting greenway v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli::execute(cli).await {
        eprintln!("greenway: {e:#}");
        std::process::exit(1);
    }
}
