use leptos::prelude::*;

use super::Page;
use crate::gate::GateDecision;
use crate::routes::Route;

pub(super) fn not_found_page() -> Page {
    Page {
        title: "Page not found | Greenway Landscaping",
        description: "The page you asked for does not exist.",
        decision: GateDecision::Normal,
        content: view! {
            <section class="content-page">
                <div class="container">
                    <h1>"Page not found"</h1>
                    <p>"That page seems to have been mulched."</p>
                    <p><a href=Route::Home.path()>"Back to the home page"</a></p>
                </div>
            </section>
        }
        .into_any(),
    }
}
