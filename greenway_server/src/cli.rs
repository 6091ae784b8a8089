//! `greenway` command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use greenway_site::{SiteConfigStore, SiteConfiguration, StatusReport, decide, status_label};
use tracing::info;

use crate::{export, server};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "greenway.toml";

#[derive(Parser, Debug)]
#[command(name = "greenway")]
#[command(about = "Serve or export the Greenway Landscaping website")]
#[command(version)]
pub struct Cli {
    /// Site config file (default: ./greenway.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
    /// Render every page into a directory
    Build {
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
    /// Print the current site status
    Status {
        /// Print the full status report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration and exit
    Check,
}

/// Resolve the config file path: explicit flag, else `greenway.toml` if it exists.
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    }
}

/// Layer file + environment and validate. Any error here is fatal.
pub fn load_config(explicit: Option<&Path>) -> Result<SiteConfiguration> {
    let path = config_path(explicit);
    let config = SiteConfiguration::resolve(path.as_deref(), |key| std::env::var(key).ok())
        .context("invalid site configuration")?;

    let source = path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<env>".into());
    info!(
        config = %source,
        maintenance_mode = config.maintenance_mode,
        show_status_banner = config.show_status_banner,
        decision = ?decide(&config),
        "configuration loaded"
    );
    Ok(config)
}

pub async fn execute(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { host, port } => {
            let store = SiteConfigStore::new(config);
            server::run_server(&format!("{host}:{port}"), store).await
        }
        Command::Build { out } => {
            let written = export::export_site(&config, &out)?;
            if !cli.quiet {
                println!("wrote {} files to {}", written.len(), out.display());
            }
            Ok(())
        }
        Command::Status { json } => {
            if json {
                let report = StatusReport::from_config(&config);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", status_label(&config));
            }
            Ok(())
        }
        Command::Check => {
            if !cli.quiet {
                println!(
                    "config ok: maintenance_mode={} show_status_banner={} base_url={}",
                    config.maintenance_mode, config.show_status_banner, config.base_url
                );
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_defaults() {
        let cli = Cli::try_parse_from(["greenway", "serve"]).expect("parse");
        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8080);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "greenway", "build", "--out", "public", "-c", "site.toml", "-q",
        ])
        .expect("parse");
        assert_eq!(cli.config.as_deref(), Some(Path::new("site.toml")));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Command::Build { out } if out == Path::new("public")));
    }

    #[test]
    fn explicit_config_path_wins() {
        let explicit = Path::new("/etc/greenway/site.toml");
        assert_eq!(config_path(Some(explicit)).as_deref(), Some(explicit));
    }
}
