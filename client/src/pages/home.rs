//! Identity picker listing every roster entry.
//!
//! Opening an entry navigates to `/u/<id>`, the messaging page for that
//! identity. Picking an identity is not authentication.

use leptos::prelude::*;

use crate::net::types::Recipient;
use crate::state::roster::Roster;
use crate::state::session::SessionState;
use crate::util::color::name_color;
use crate::util::initials;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Route for the messaging page of `id`.
pub fn identity_href(id: &str) -> String {
    format!("/u/{}", urlencoding::encode(id))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let roster = expect_context::<RwSignal<Roster>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let loading = move || session.with(|s| s.roster_loading);
    let error = move || session.with(|s| s.roster_error.clone());

    view! {
        <div class="home-page">
            <h1>"Who are you?"</h1>
            <Show when=move || !loading() fallback=|| view! { <p class="home-page__loading">"Loading..."</p> }>
                {move || error().map(|e| view! { <p class="home-page__error">{e}</p> })}
                <ul class="home-page__identities">
                    <For
                        each=move || roster.with(|r| r.recipients().to_vec())
                        key=|r: &Recipient| r.id.clone()
                        children=|r: Recipient| {
                            let acronym = initials::acronym(&r.name).unwrap_or_default();
                            view! {
                                <li>
                                    <a href=identity_href(&r.id)>
                                        <span class="acronym" style:color=name_color(&r.color)>{acronym}</span>
                                        " "
                                        {r.name}
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
