//! Root document component - the complete HTML page
//!
//! Every page is composed inside the same chrome: navigation on top, footer
//! below, page content in `<main>`.

use leptos::prelude::*;

use super::{Footer, Nav};
use crate::config::SiteConfiguration;
use crate::routes::Route;
use crate::styles::{CSP, SITE_CSS};

#[component]
pub fn SiteDocument(
    title: &'static str,
    description: &'static str,
    config: SiteConfiguration,
    /// Route highlighted in the navigation (none for error pages)
    #[prop(optional_no_strip)]
    active: Option<Route>,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div class="page">
                    <Nav active=active />
                    <main class="page-main">{children()}</main>
                    <Footer config=config />
                </div>
            </body>
        </html>
    }
}
