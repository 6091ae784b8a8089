//! Status reporter - read-only view of the current gate decision.

use serde::Serialize;

use crate::config::SiteConfiguration;
use crate::gate::{GateDecision, decide};

/// `"Maintenance Mode"` or `"Online"`.
pub fn status_label(config: &SiteConfiguration) -> &'static str {
    decide(config).label()
}

/// Serializable status snapshot (`/status`, `greenway status --json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub status: &'static str,
    pub maintenance_mode: bool,
    pub decision: GateDecision,
    pub version: &'static str,
}

impl StatusReport {
    pub fn from_config(config: &SiteConfiguration) -> Self {
        let decision = decide(config);
        Self {
            status: decision.label(),
            maintenance_mode: config.maintenance_mode,
            decision,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
