use leptos::prelude::*;

use super::Page;
use crate::components::{Hero, ServiceCard};
use crate::config::SiteConfiguration;
use crate::content::{PHONE, PHONE_HREF, SERVICES};
use crate::routes::Route;

pub(super) fn home_page(_config: &SiteConfiguration) -> Page {
    let content = view! {
        <Hero />
        <section class="services" id="services">
            <div class="container">
                <h2>"Our Services"</h2>
                <div class="service-grid">
                    {SERVICES.iter().map(|service| view! {
                        <ServiceCard service=*service />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
        <section class="cta-band">
            <div class="container">
                <h2>"Ready for a yard you love?"</h2>
                <p>
                    <a href=Route::Contact.path()>"Request a free estimate"</a>
                    " or call "
                    <a href=PHONE_HREF>{PHONE}</a>
                </p>
            </div>
        </section>
    };

    Page::normal(Route::Home, content.into_any())
}
