//! Site configuration: schema, validation and the process-wide store.
//!
//! Configuration is layered once at startup:
//!
//! 1. optional TOML file with a `[site]` table
//! 2. environment overrides (`GREENWAY_*`)
//!
//! After layering every flag must have a value. Anything missing or malformed
//! is a [`ConfigError`] and the process refuses to start.
//!
//! ```toml
//! [site]
//! maintenance_mode = false
//! show_status_banner = true
//! base_url = "https://greenway-landscaping.com"
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

/// Environment variable overriding `maintenance_mode`.
pub const ENV_MAINTENANCE_MODE: &str = "GREENWAY_MAINTENANCE_MODE";
/// Environment variable overriding `show_status_banner`.
pub const ENV_SHOW_STATUS_BANNER: &str = "GREENWAY_SHOW_STATUS_BANNER";
/// Environment variable overriding `base_url`.
pub const ENV_BASE_URL: &str = "GREENWAY_BASE_URL";

/// Public origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const KEY_MAINTENANCE_MODE: &str = "maintenance_mode";
const KEY_SHOW_STATUS_BANNER: &str = "show_status_banner";
const KEY_BASE_URL: &str = "base_url";

/// Startup-time configuration failures. None of these can occur during a render.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required flag `{flag}` is not set (add it to [site] or set {env})")]
    Missing { flag: &'static str, env: &'static str },

    #[error("flag `{flag}` expects a boolean, found {found}")]
    InvalidFlag { flag: &'static str, found: String },

    #[error("`{key}` has the wrong type, found {found}")]
    InvalidValue { key: &'static str, found: String },

    #[error("unknown key `{key}` in [site]")]
    UnknownKey { key: String },

    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config{}: {source}", display_path(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| format!(" {}", p.display())).unwrap_or_default()
}

/// Validated, immutable site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfiguration {
    /// Replace the home page with the maintenance placeholder.
    pub maintenance_mode: bool,
    /// Show the site status badge in the footer of every page.
    pub show_status_banner: bool,
    /// Public origin for absolute URLs (sitemap.xml).
    pub base_url: String,
}

impl SiteConfiguration {
    /// Configuration with the given `maintenance_mode` and defaults for the
    /// optional flags (no status banner, [`DEFAULT_BASE_URL`]).
    pub fn new(maintenance_mode: bool) -> Self {
        Self {
            maintenance_mode,
            show_status_banner: false,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Parse and validate a standalone TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        PartialConfig::from_toml_str(input, None)?.finish()
    }

    /// Layer the optional file and the environment, then validate.
    ///
    /// `env` is the variable lookup, normally `|k| std::env::var(k).ok()`.
    pub fn resolve<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut partial = match path {
            Some(path) => PartialConfig::load_from_path(path)?,
            None => PartialConfig::default(),
        };
        partial.apply_env(env)?;
        partial.finish()
    }
}

/// Flags collected from the sources before validation.
#[derive(Debug, Default)]
struct PartialConfig {
    maintenance_mode: Option<bool>,
    show_status_banner: Option<bool>,
    base_url: Option<String>,
}

impl PartialConfig {
    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, Some(path))
    }

    fn from_toml_str(input: &str, path: Option<&Path>) -> Result<Self, ConfigError> {
        let doc: toml::Table = toml::from_str(input).map_err(|source| ConfigError::Parse {
            path: path.map(Path::to_path_buf),
            source,
        })?;

        let mut partial = Self::default();
        let Some(site) = doc.get("site") else {
            return Ok(partial);
        };
        let Some(site) = site.as_table() else {
            return Err(ConfigError::InvalidValue {
                key: "site",
                found: site.type_str().to_string(),
            });
        };

        for (key, value) in site {
            match key.as_str() {
                KEY_MAINTENANCE_MODE => {
                    partial.maintenance_mode = Some(toml_bool(KEY_MAINTENANCE_MODE, value)?);
                }
                KEY_SHOW_STATUS_BANNER => {
                    partial.show_status_banner = Some(toml_bool(KEY_SHOW_STATUS_BANNER, value)?);
                }
                KEY_BASE_URL => match value.as_str() {
                    Some(url) => partial.base_url = Some(url.to_string()),
                    None => {
                        return Err(ConfigError::InvalidValue {
                            key: KEY_BASE_URL,
                            found: value.type_str().to_string(),
                        });
                    }
                },
                other => {
                    return Err(ConfigError::UnknownKey {
                        key: other.to_string(),
                    });
                }
            }
        }
        Ok(partial)
    }

    fn apply_env<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = env(ENV_MAINTENANCE_MODE) {
            self.maintenance_mode = Some(parse_bool(KEY_MAINTENANCE_MODE, &raw)?);
        }
        if let Some(raw) = env(ENV_SHOW_STATUS_BANNER) {
            self.show_status_banner = Some(parse_bool(KEY_SHOW_STATUS_BANNER, &raw)?);
        }
        if let Some(raw) = env(ENV_BASE_URL) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.base_url = Some(trimmed.to_string());
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<SiteConfiguration, ConfigError> {
        let maintenance_mode = self.maintenance_mode.ok_or(ConfigError::Missing {
            flag: KEY_MAINTENANCE_MODE,
            env: ENV_MAINTENANCE_MODE,
        })?;
        let base_url = self
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(SiteConfiguration {
            maintenance_mode,
            show_status_banner: self.show_status_banner.unwrap_or(false),
            base_url,
        })
    }
}

fn toml_bool(flag: &'static str, value: &toml::Value) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| ConfigError::InvalidFlag {
        flag,
        found: format!("{} `{}`", value.type_str(), value),
    })
}

/// Boolean spellings accepted from the environment.
fn parse_bool(flag: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            flag,
            found: format!("`{raw}`"),
        }),
    }
}

/// The single authoritative configuration for a running process.
///
/// Written once at startup, then only read. Every reader gets the same
/// `Arc` snapshot, so concurrent renders need no locking.
#[derive(Debug, Clone)]
pub struct SiteConfigStore {
    current: Arc<SiteConfiguration>,
}

impl SiteConfigStore {
    pub fn new(config: SiteConfiguration) -> Self {
        Self {
            current: Arc::new(config),
        }
    }

    /// Current configuration snapshot.
    pub fn get(&self) -> Arc<SiteConfiguration> {
        Arc::clone(&self.current)
    }
}
