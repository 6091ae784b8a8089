//! Contact details block used on the contact page.

use leptos::prelude::*;

use super::icons::{ICON_CLOCK, ICON_ENVELOPE, ICON_MAP_PIN, ICON_PHONE, Icon};
use crate::content::{ADDRESS, EMAIL, HOURS, PHONE, PHONE_HREF, SERVICE_AREA};

#[component]
pub fn ContactCard() -> impl IntoView {
    view! {
        <div class="contact-card">
            <dl class="contact-list">
                <dt><Icon path=ICON_PHONE size="16" class="icon-sm" />"Phone"</dt>
                <dd><a href=PHONE_HREF>{PHONE}</a></dd>

                <dt><Icon path=ICON_ENVELOPE size="16" class="icon-sm" />"Email"</dt>
                <dd><a href=format!("mailto:{EMAIL}")>{EMAIL}</a></dd>

                <dt><Icon path=ICON_MAP_PIN size="16" class="icon-sm" />"Yard"</dt>
                <dd>{ADDRESS}</dd>
            </dl>

            <h3><Icon path=ICON_CLOCK size="16" class="icon-sm" />"Office hours"</h3>
            <table class="hours-table">
                <tbody>
                    {HOURS.iter().map(|(days, hours)| view! {
                        <tr>
                            <th scope="row">{*days}</th>
                            <td>{*hours}</td>
                        </tr>
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
            <p class="muted">"We serve " {SERVICE_AREA} "."</p>
        </div>
    }
}
