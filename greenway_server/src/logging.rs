//! Tracing subscriber setup.
//!
//! `RUST_LOG` controls the filter; `GREENWAY_LOG_FORMAT=json` switches to
//! machine-parseable output. Logs always go to stderr so `greenway status`
//! keeps stdout clean.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FORMAT_ENV: &str = "GREENWAY_LOG_FORMAT";
pub const DEFAULT_FILTER: &str = "greenway=info,greenway_server=info,tower_http=info";

/// Install the global subscriber. Safe to call once per process.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
