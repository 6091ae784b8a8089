//! Page entry points.
//!
//! Each entry point returns a [`Page`]: metadata plus the content tree that
//! goes inside the shared layout. Only [`render_home`] is wired to the
//! maintenance gate; every other page renders unconditionally.

mod contact;
mod home;
mod legal;
mod maintenance;
mod not_found;
mod sitemap;

use leptos::prelude::*;

use crate::config::SiteConfiguration;
use crate::gate::{GateDecision, RenderTable};
use crate::routes::Route;

/// Content tree for one page plus its head metadata.
pub struct Page {
    pub title: &'static str,
    pub description: &'static str,
    /// Which gate path produced this page (`Normal` for ungated pages).
    pub decision: GateDecision,
    pub content: AnyView,
}

impl Page {
    fn normal(route: Route, content: AnyView) -> Self {
        Self {
            title: route.title(),
            description: route.description(),
            decision: GateDecision::Normal,
            content,
        }
    }
}

/// Gate dispatch for the home page.
pub const HOME_TABLE: RenderTable<Page> = RenderTable {
    maintenance: maintenance::maintenance_page,
    normal: home::home_page,
};

/// Home: maintenance placeholder or the normal home content.
pub fn render_home(config: &SiteConfiguration) -> Page {
    HOME_TABLE.dispatch(config)
}

pub fn render_contact() -> Page {
    contact::contact_page()
}

pub fn render_privacy() -> Page {
    legal::privacy_page()
}

pub fn render_terms() -> Page {
    legal::terms_page()
}

pub fn render_sitemap() -> Page {
    sitemap::sitemap_page()
}

pub fn render_not_found() -> Page {
    not_found::not_found_page()
}

/// Entry point for a route.
pub fn page_for(route: Route, config: &SiteConfiguration) -> Page {
    match route {
        Route::Home => render_home(config),
        Route::Contact => render_contact(),
        Route::Privacy => render_privacy(),
        Route::Terms => render_terms(),
        Route::Sitemap => render_sitemap(),
    }
}
