use leptos::prelude::*;

use super::StatusBadge;
use crate::config::SiteConfiguration;
use crate::content::{ADDRESS, BUSINESS_NAME, copyright};
use crate::routes::Route;

const FOOTER_ROUTES: [Route; 3] = [Route::Privacy, Route::Terms, Route::Sitemap];

#[component]
pub fn Footer(config: SiteConfiguration) -> impl IntoView {
    let show_status = config.show_status_banner;
    let badge = show_status
        .then(move || view! { <div class="footer-status"><StatusBadge config=config /></div> });

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">{BUSINESS_NAME}</span>
                    <span class="footer-address">{ADDRESS}</span>
                </div>
                <div class="footer-links">
                    {FOOTER_ROUTES.into_iter().map(|route| view! {
                        <a href=route.path() class="footer-link">{route.nav_label()}</a>
                    }).collect::<Vec<_>>()}
                </div>
                {badge}
                <p class="footer-copyright">{copyright()}</p>
            </div>
        </footer>
    }
}
