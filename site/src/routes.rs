//! Route table for the site pages.

use crate::config::SiteConfiguration;

/// Every page the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Contact,
    Privacy,
    Terms,
    Sitemap,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Contact,
        Route::Privacy,
        Route::Terms,
        Route::Sitemap,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Contact => "/contact",
            Route::Privacy => "/privacy",
            Route::Terms => "/terms",
            Route::Sitemap => "/sitemap",
        }
    }

    /// Resolve a request path. Accepts `/contact`, `/contact/` and `/contact.html`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let trimmed = trimmed.strip_suffix(".html").unwrap_or(trimmed);
        match trimmed {
            "" | "/index" => Some(Route::Home),
            "/contact" => Some(Route::Contact),
            "/privacy" => Some(Route::Privacy),
            "/terms" => Some(Route::Terms),
            "/sitemap" => Some(Route::Sitemap),
            _ => None,
        }
    }

    /// Short name shown in navigation.
    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Contact => "Contact",
            Route::Privacy => "Privacy",
            Route::Terms => "Terms",
            Route::Sitemap => "Sitemap",
        }
    }

    /// `<title>` text.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Greenway Landscaping | Lawn, Garden & Hardscape Services",
            Route::Contact => "Contact Us | Greenway Landscaping",
            Route::Privacy => "Privacy Policy | Greenway Landscaping",
            Route::Terms => "Terms of Service | Greenway Landscaping",
            Route::Sitemap => "Sitemap | Greenway Landscaping",
        }
    }

    /// `<meta name="description">` text.
    pub fn description(self) -> &'static str {
        match self {
            Route::Home => {
                "Residential and commercial landscaping: lawn care, garden design, \
                 hardscaping, irrigation and seasonal cleanups."
            }
            Route::Contact => "Request a free estimate or reach the Greenway Landscaping crew.",
            Route::Privacy => "How Greenway Landscaping collects and uses your information.",
            Route::Terms => "Terms that apply to the Greenway Landscaping website and services.",
            Route::Sitemap => "Every page on the Greenway Landscaping website.",
        }
    }

    /// Output file for static export, relative to the export root.
    ///
    /// Each page is a directory index so extensionless links such as
    /// `/contact` resolve on plain file hosts.
    pub fn file_name(self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::Contact => "contact/index.html",
            Route::Privacy => "privacy/index.html",
            Route::Terms => "terms/index.html",
            Route::Sitemap => "sitemap/index.html",
        }
    }

    /// Only the home page goes through the maintenance gate.
    pub fn is_gated(self) -> bool {
        matches!(self, Route::Home)
    }
}

/// XML sitemap for search engines, absolute URLs under `base_url`.
pub fn sitemap_xml(config: &SiteConfiguration) -> String {
    let base = xml_escape(config.base_url.trim_end_matches('/'));
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for route in Route::ALL {
        let priority = if route == Route::Home { "1.0" } else { "0.5" };
        out.push_str(&format!(
            "  <url><loc>{}{}</loc><priority>{}</priority></url>\n",
            base,
            route.path(),
            priority
        ));
    }
    out.push_str("</urlset>\n");
    out
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
