use leptos::prelude::*;

use super::icons::{ICON_LEAF, Icon};
use crate::content::{BUSINESS_NAME, PHONE, PHONE_HREF};
use crate::routes::Route;

const NAV_ROUTES: [Route; 2] = [Route::Home, Route::Contact];

/// Top navigation bar shared by every page.
#[component]
pub fn Nav(#[prop(optional_no_strip)] active: Option<Route>) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href=Route::Home.path() class="nav-brand">
                    <span class="nav-logo"><Icon path=ICON_LEAF size="24" /></span>
                    <span class="nav-title">{BUSINESS_NAME}</span>
                </a>
                <div class="nav-links">
                    {NAV_ROUTES.into_iter().map(|route| {
                        let is_active = active == Some(route);
                        let class = if is_active { "nav-link active" } else { "nav-link" };
                        view! {
                            <a
                                href=route.path()
                                class=class
                                aria-current=is_active.then_some("page")
                            >
                                {route.nav_label()}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                    <a href=PHONE_HREF class="nav-cta">{PHONE}</a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn marks_only_the_active_link() {
        let html = view! { <Nav active=Some(Route::Contact) /> }.to_html();
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains("nav-link active"));
    }

    #[test]
    fn active_is_optional() {
        let html = view! { <Nav /> }.to_html();
        assert!(!html.contains("aria-current"));

        let none: Option<Route> = None;
        assert_eq!(view! { <Nav active=none /> }.to_html(), html);
    }
}
