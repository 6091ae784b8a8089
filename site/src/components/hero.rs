use leptos::prelude::*;

use super::icons::{ICON_LEAF, Icon};
use crate::content::{BUSINESS_NAME, INTRO, TAGLINE};
use crate::routes::Route;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id="top">
            <div class="container hero-inner">
                <span class="hero-mark">
                    <Icon path=ICON_LEAF size="40" />
                </span>
                <h1 class="hero-title">{BUSINESS_NAME}</h1>
                <p class="hero-tagline">{TAGLINE}</p>
                <p class="hero-intro">{INTRO}</p>
                <div class="hero-actions">
                    <a href=Route::Contact.path() class="btn btn-primary">"Get a free estimate"</a>
                    <a href="#services" class="btn btn-ghost">"See our services"</a>
                </div>
            </div>
        </section>
    }
}
