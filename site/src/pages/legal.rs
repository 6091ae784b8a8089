//! Privacy policy and terms of service.

use leptos::prelude::*;

use super::Page;
use crate::content::{LegalSection, PRIVACY, PRIVACY_UPDATED, TERMS, TERMS_UPDATED};
use crate::routes::Route;

#[component]
fn LegalText(
    heading: &'static str,
    updated: &'static str,
    sections: &'static [LegalSection],
) -> impl IntoView {
    view! {
        <section class="content-page legal">
            <div class="container">
                <h1>{heading}</h1>
                <p class="muted">{format!("Last updated {updated}")}</p>
                {sections.iter().map(|section| view! {
                    <div class="legal-section">
                        <h2>{section.heading}</h2>
                        <p>{section.body}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

pub(super) fn privacy_page() -> Page {
    let content = view! {
        <LegalText heading="Privacy Policy" updated=PRIVACY_UPDATED sections=PRIVACY />
    };
    Page::normal(Route::Privacy, content.into_any())
}

pub(super) fn terms_page() -> Page {
    let content = view! {
        <LegalText heading="Terms of Service" updated=TERMS_UPDATED sections=TERMS />
    };
    Page::normal(Route::Terms, content.into_any())
}
