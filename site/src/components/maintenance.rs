//! Maintenance placeholder shown in place of the home page content.

use leptos::prelude::*;

use super::StatusBadge;
use super::icons::{ICON_PHONE, ICON_WRENCH, Icon};
use crate::config::SiteConfiguration;
use crate::content::{BUSINESS_NAME, EMAIL, PHONE, PHONE_HREF};

/// Text that identifies the placeholder in rendered output.
pub const MAINTENANCE_HEADLINE: &str = "We'll be right back";

#[component]
pub fn MaintenanceNotice(config: SiteConfiguration) -> impl IntoView {
    view! {
        <section class="maintenance" id="maintenance">
            <div class="container maintenance-inner">
                <div class="maintenance-icon">
                    <Icon path=ICON_WRENCH size="48" />
                </div>
                <h1>{MAINTENANCE_HEADLINE}</h1>
                <p class="maintenance-lead">
                    "The " {BUSINESS_NAME} " website is under maintenance while we make a few improvements. "
                    "Please check back shortly."
                </p>
                <StatusBadge config=config />
                <p class="maintenance-contact">
                    <Icon path=ICON_PHONE size="16" class="icon-sm" />
                    "Need us today? Call "
                    <a href=PHONE_HREF>{PHONE}</a>
                    " or email "
                    <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                    "."
                </p>
            </div>
        </section>
    }
}
