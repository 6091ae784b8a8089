//! Maintenance gate - picks the render path for a gated page.
//!
//! The decision is recomputed on every render from the configuration
//! snapshot and never stored. [`RenderTable`] maps each [`GateDecision`]
//! variant to the function that builds its content, and only the selected
//! entry is ever invoked.

use serde::Serialize;

use crate::config::SiteConfiguration;

/// Which content a gated page renders for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDecision {
    /// Placeholder only; normal content is not built.
    Maintenance,
    /// Regular page content.
    Normal,
}

impl GateDecision {
    pub fn is_maintenance(self) -> bool {
        matches!(self, GateDecision::Maintenance)
    }

    /// Human-readable site status for this decision.
    pub fn label(self) -> &'static str {
        match self {
            GateDecision::Maintenance => "Maintenance Mode",
            GateDecision::Normal => "Online",
        }
    }
}

/// `Maintenance` iff `maintenance_mode` is set.
pub fn decide(config: &SiteConfiguration) -> GateDecision {
    if config.maintenance_mode {
        GateDecision::Maintenance
    } else {
        GateDecision::Normal
    }
}

/// One render function per gate decision.
#[derive(Debug, Clone, Copy)]
pub struct RenderTable<R> {
    pub maintenance: fn(&SiteConfiguration) -> R,
    pub normal: fn(&SiteConfiguration) -> R,
}

impl<R> RenderTable<R> {
    /// Decide, then build the selected content only.
    pub fn dispatch(&self, config: &SiteConfiguration) -> R {
        let render = match decide(config) {
            GateDecision::Maintenance => self.maintenance,
            GateDecision::Normal => self.normal,
        };
        render(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn decision_follows_the_flag() {
        assert_eq!(
            decide(&SiteConfiguration::new(true)),
            GateDecision::Maintenance
        );
        assert_eq!(decide(&SiteConfiguration::new(false)), GateDecision::Normal);
    }

    #[test]
    fn decision_ignores_other_flags() {
        let mut config = SiteConfiguration::new(false);
        config.show_status_banner = true;
        config.base_url = "https://elsewhere.example".into();
        assert_eq!(decide(&config), GateDecision::Normal);
    }

    #[test]
    fn decide_is_repeatable() {
        for flag in [true, false] {
            let config = SiteConfiguration::new(flag);
            let first = decide(&config);
            let second = decide(&config);
            assert_eq!(first, second);
            assert_eq!(config, SiteConfiguration::new(flag));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(GateDecision::Maintenance.label(), "Maintenance Mode");
        assert_eq!(GateDecision::Normal.label(), "Online");
        assert!(GateDecision::Maintenance.is_maintenance());
        assert!(!GateDecision::Normal.is_maintenance());
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&GateDecision::Maintenance).expect("serialize");
        assert_eq!(json, "\"maintenance\"");
    }

    static MAINTENANCE_CALLS: AtomicUsize = AtomicUsize::new(0);
    static NORMAL_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn count_maintenance(_: &SiteConfiguration) -> &'static str {
        MAINTENANCE_CALLS.fetch_add(1, Ordering::SeqCst);
        "placeholder"
    }

    fn count_normal(_: &SiteConfiguration) -> &'static str {
        NORMAL_CALLS.fetch_add(1, Ordering::SeqCst);
        "content"
    }

    #[test]
    fn dispatch_builds_only_the_selected_entry() {
        let table = RenderTable {
            maintenance: count_maintenance,
            normal: count_normal,
        };

        assert_eq!(table.dispatch(&SiteConfiguration::new(true)), "placeholder");
        assert_eq!(MAINTENANCE_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(NORMAL_CALLS.load(Ordering::SeqCst), 0);

        assert_eq!(table.dispatch(&SiteConfiguration::new(false)), "content");
        assert_eq!(MAINTENANCE_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(NORMAL_CALLS.load(Ordering::SeqCst), 1);
    }
}
