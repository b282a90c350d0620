//! Message compose form: text input, recipient picker, status bar, submit.

use leptos::prelude::*;

use crate::components::recipient_picker::RecipientPicker;
use crate::components::status_bar::StatusBar;
use crate::state::compose::{ComposeState, validate_compose};
use crate::state::roster::Roster;
use crate::state::selection::SelectionTracker;
use crate::state::session::SessionState;

#[component]
pub fn ComposeForm() -> impl IntoView {
    let compose = expect_context::<RwSignal<ComposeState>>();
    let roster = expect_context::<RwSignal<Roster>>();
    let tracker = expect_context::<RwSignal<SelectionTracker>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if compose.with_untracked(|c| c.pending) {
            return;
        }
        let Some(sender_id) = session.with_untracked(|s| s.user_id.clone()) else {
            return;
        };
        let recipients = roster.with_untracked(Roster::checked_ids);
        let text = compose.with_untracked(|c| c.text.clone());
        let req = match validate_compose(&sender_id, &text, recipients) {
            Ok(req) => req,
            Err(message) => {
                compose.update(|c| c.fail(message.to_owned()));
                return;
            }
        };
        compose.update(|c| {
            c.pending = true;
            c.error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::post_message(&req).await {
                Ok(()) => {
                    compose.update(ComposeState::reset);
                    // A reset fires no per-checkbox events, so rebuild from scratch.
                    roster.update(Roster::clear_checks);
                    roster.with_untracked(|r| tracker.update(|t| t.initialize(r)));
                }
                Err(e) => {
                    leptos::logging::warn!("message submit failed: {e}");
                    compose.update(|c| c.fail(e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (req, tracker);
    };

    let pending = move || compose.with(|c| c.pending);

    view! {
        <form class="sender" on:submit=on_submit>
            <div class="sender__row">
                <input
                    class="sender__text"
                    type="text"
                    name="text"
                    placeholder="Message..."
                    prop:value=move || compose.with(|c| c.text.clone())
                    on:input=move |ev| compose.update(|c| c.text = event_target_value(&ev))
                />
                <RecipientPicker/>
                <input class="btn btn--primary" type="submit" value="Send" disabled=pending/>
            </div>
            <StatusBar/>
        </form>
    }
}
