use leptos::prelude::*;

use super::icons::{ICON_LEAF, Icon};
use crate::content::Service;

/// One service tile on the home page.
#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <article class="service-card" id=service.slug>
            <h3>
                <Icon path=ICON_LEAF size="18" class="icon-sm" />
                {service.name}
            </h3>
            <p>{service.summary}</p>
            <ul class="service-highlights">
                {service.highlights.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
