//! Site status badge - renders the status reporter label.

use leptos::prelude::*;

use super::icons::{ICON_CHECK_CIRCLE, ICON_WRENCH, Icon};
use crate::config::SiteConfiguration;
use crate::status::status_label;

/// Small pill showing "Online" or "Maintenance Mode".
#[component]
pub fn StatusBadge(config: SiteConfiguration) -> impl IntoView {
    let label = status_label(&config);
    let (class, icon) = if config.maintenance_mode {
        ("status-badge status-maintenance", ICON_WRENCH)
    } else {
        ("status-badge status-online", ICON_CHECK_CIRCLE)
    };

    view! {
        <span class=class data-status=label>
            <Icon path=icon size="14" class="icon-sm" />
            <span class="status-label">{label}</span>
        </span>
    }
}
