use leptos::prelude::*;

use super::Page;
use crate::components::ContactCard;
use crate::routes::Route;

pub(super) fn contact_page() -> Page {
    let content = view! {
        <section class="content-page">
            <div class="container">
                <h1>"Contact Us"</h1>
                <p class="muted">
                    "Estimates are free. Tell us about your yard and we will get back to you within one business day."
                </p>
                <ContactCard />
            </div>
        </section>
    };

    Page::normal(Route::Contact, content.into_any())
}
