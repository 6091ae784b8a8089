use leptos::prelude::*;

use super::Page;
use crate::components::MaintenanceNotice;
use crate::config::SiteConfiguration;
use crate::gate::GateDecision;

pub(super) fn maintenance_page(config: &SiteConfiguration) -> Page {
    let config = config.clone();
    Page {
        title: "Down for maintenance | Greenway Landscaping",
        description: "The Greenway Landscaping website is temporarily under maintenance.",
        decision: GateDecision::Maintenance,
        content: view! { <MaintenanceNotice config=config /> }.into_any(),
    }
}
