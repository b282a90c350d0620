//! Live summary of the selected recipients, e.g. `> [AB,CD]`.
//!
//! The token list is rendered with a keyed `<For>`, so a toggle inserts or
//! removes only the affected label and separator elements. Submit failures
//! replace the summary with a red `!error!` marker that expands on click.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::compose::ComposeState;
use crate::state::roster::Roster;
use crate::state::selection::{SelectionTracker, Token, TokenView};
use crate::util::color::name_color;

#[component]
pub fn StatusBar() -> impl IntoView {
    let tracker = expect_context::<RwSignal<SelectionTracker>>();
    let roster = expect_context::<RwSignal<Roster>>();
    let compose = expect_context::<RwSignal<ComposeState>>();

    let has_error = move || compose.with(|c| c.error.is_some());
    let listing = move || tracker.with(SelectionTracker::is_listing);
    let placeholder = move || tracker.with(|t| t.placeholder().unwrap_or_default());

    let token_view = move |item: TokenView| match item.token {
        Token::Label { recipient_id, text } => {
            let (name, color) = roster.with_untracked(|r| {
                r.get(&recipient_id)
                    .map(|rec| (rec.name.clone(), name_color(&rec.color)))
                    .unwrap_or_default()
            });
            view! { <span class="acronym" title=name style:color=color>{text}</span> }.into_any()
        }
        other => view! { <span class="status-bar__punct">{other.text().to_owned()}</span> }.into_any(),
    };

    view! {
        <div id="form-status-bar" class="status-bar">
            <Show
                when=move || !has_error()
                fallback=move || view! { <StatusError/> }
            >
                <Show
                    when=listing
                    fallback=move || view! { <span class="status-bar__placeholder">{placeholder}</span> }
                >
                    <For
                        each=move || tracker.with(SelectionTracker::tokens)
                        key=|item: &TokenView| item.key
                        children=token_view
                    />
                </Show>
            </Show>
        </div>
    }
}

/// Error marker; clicking it reveals the message, clicking the details
/// dismisses them and restores the selection summary.
#[component]
fn StatusError() -> impl IntoView {
    let compose = expect_context::<RwSignal<ComposeState>>();

    let expanded = move || compose.with(|c| c.error_expanded);
    let details = move || compose.with(|c| c.error.clone().unwrap_or_default());

    view! {
        <span
            class="status-bar__error"
            style:color="red"
            style:cursor="pointer"
            on:click=move |_| compose.update(|c| c.error_expanded = true)
        >
            "!error!"
        </span>
        <Show when=expanded>
            <pre
                class="status-bar__error-details"
                on:click=move |_| compose.update(|c| {
                    c.error = None;
                    c.error_expanded = false;
                })
            >
                {details}
            </pre>
        </Show>
    }
}
