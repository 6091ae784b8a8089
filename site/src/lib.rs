//! # greenway-site
//!
//! Pages, layout and the maintenance gate for the Greenway Landscaping
//! website, rendered with [Leptos](https://leptos.dev/) server-side rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use greenway_site::{render_page, Route, SiteConfiguration};
//!
//! let config = SiteConfiguration::from_toml_str("[site]\nmaintenance_mode = false\n")
//!     .expect("valid config");
//!
//! let html = render_page(Route::Home, &config);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - validated [`SiteConfiguration`] and the [`SiteConfigStore`]
//! - [`gate`] - [`decide`] and the [`RenderTable`] dispatch for gated pages
//! - [`status`] - status label and serializable [`StatusReport`]
//! - [`routes`] - [`Route`] table and `sitemap.xml`
//! - [`pages`] - one entry point per route
//! - [`components`] - Leptos UI components
//! - [`content`] - page copy
//! - [`styles`] - CSS constants
//!
//! Rendering is pure: every function here takes the configuration snapshot
//! as an argument and reads no global state.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod gate;
pub mod pages;
pub mod routes;
pub mod status;
pub mod styles;

pub use config::{ConfigError, SiteConfigStore, SiteConfiguration};
pub use gate::{GateDecision, RenderTable, decide};
pub use pages::Page;
pub use routes::{Route, sitemap_xml};
pub use status::{StatusReport, status_label};

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// A full HTML document and the gate path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub decision: GateDecision,
}

/// Render a route as a complete HTML document.
///
/// ```rust
/// use greenway_site::{render_route, GateDecision, Route, SiteConfiguration};
///
/// let page = render_route(Route::Home, &SiteConfiguration::new(true));
/// assert_eq!(page.decision, GateDecision::Maintenance);
/// ```
pub fn render_route(route: Route, config: &SiteConfiguration) -> RenderedPage {
    render_document(pages::page_for(route, config), Some(route), config)
}

/// [`render_route`], HTML only.
pub fn render_page(route: Route, config: &SiteConfiguration) -> String {
    render_route(route, config).html
}

/// 404 document in the regular site chrome.
pub fn render_not_found(config: &SiteConfiguration) -> String {
    render_document(pages::render_not_found(), None, config).html
}

fn render_document(page: Page, active: Option<Route>, config: &SiteConfiguration) -> RenderedPage {
    let Page {
        title,
        description,
        decision,
        content,
    } = page;

    let doc = view! {
        <SiteDocument title=title description=description config=config.clone() active=active>
            {content}
        </SiteDocument>
    };

    // Leptos doesn't include DOCTYPE, so we add it
    let html = format!("<!DOCTYPE html>\n{}", doc.to_html());
    RenderedPage { html, decision }
}
