use leptos::prelude::*;

use super::Page;
use crate::routes::Route;

pub(super) fn sitemap_page() -> Page {
    let content = view! {
        <section class="content-page">
            <div class="container">
                <h1>"Sitemap"</h1>
                <ul class="sitemap-list">
                    {Route::ALL.into_iter().map(|route| view! {
                        <li>
                            <a href=route.path()>{route.nav_label()}</a>
                            <span class="muted">{format!(" - {}", route.description())}</span>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
                <p class="muted">
                    "Search engines: see "
                    <a href="/sitemap.xml">"sitemap.xml"</a>
                </p>
            </div>
        </section>
    };

    Page::normal(Route::Sitemap, content.into_any())
}
