//! Recipient checkboxes inside a popup container.
//!
//! Every checkbox change is mirrored into the `Roster` first and then fed
//! to the `SelectionTracker` as one toggle event, in firing order.

use leptos::prelude::*;

use crate::net::types::Recipient;
use crate::state::roster::{RecipientRegistry, Roster};
use crate::state::selection::{SelectionTracker, SkipReason, ToggleOutcome};
use crate::util::color::name_color;
use crate::util::initials;

#[component]
pub fn RecipientPicker() -> impl IntoView {
    let roster = expect_context::<RwSignal<Roster>>();
    let open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    crate::util::popup::install_outside_click_close(open);

    view! {
        <div class="popup-container recipient-picker">
            <button
                type="button"
                class="btn recipient-picker__trigger"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "To..."
            </button>
            <Show when=move || open.get()>
                <div class="recipient-picker__popup">
                    <For
                        each=move || roster.with(|r| r.recipients().to_vec())
                        key=|r: &Recipient| r.id.clone()
                        children=move |r: Recipient| view! { <RecipientOption recipient=r/> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn RecipientOption(recipient: Recipient) -> impl IntoView {
    let roster = expect_context::<RwSignal<Roster>>();
    let tracker = expect_context::<RwSignal<SelectionTracker>>();

    let acronym = initials::acronym(&recipient.name).unwrap_or_default();
    let color = name_color(&recipient.color);
    let input_name = format!("usr{}", recipient.id);
    let id_for_checked = recipient.id.clone();
    let id_for_change = recipient.id;

    let on_change = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        roster.update(|r| {
            r.set_checked(&id_for_change, checked);
        });
        let outcome = roster.with_untracked(|r| tracker.try_update(|t| t.on_toggle(r, &id_for_change, checked)));
        if let Some(ToggleOutcome::Skipped(SkipReason::Unresolvable)) = outcome {
            leptos::logging::warn!("recipient {id_for_change} has no label to show");
        }
    };

    view! {
        <label class="recipient-picker__option">
            <input
                type="checkbox"
                class="recipient-checkbox"
                name=input_name
                prop:checked=move || roster.with(|r| r.is_checked(&id_for_checked))
                on:change=on_change
            />
            <span class="acronym" style:color=color>{acronym}</span>
            <span class="recipient-picker__name">{recipient.name}</span>
        </label>
    }
}
