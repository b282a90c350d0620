//! Messaging page for one identity (`/u/:id`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Once the roster is loaded and the route id resolves to a known
//! recipient, the page records the identity in `SessionState` and opens
//! one message stream for it. Unknown ids render a notice instead of the
//! form.
//!
//! LIFECYCLE
//! =========
//! Leaving the page, or changing `:id` in place, drops the stream handle
//! (closing the socket) and resets the per-identity state: message log,
//! recipient checks, status bar, compose form, and session identity.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::compose_form::ComposeForm;
use crate::components::connection_badge::ConnectionBadge;
use crate::components::message_list::MessageList;
use crate::state::compose::ComposeState;
use crate::state::messages::MessageLog;
use crate::state::roster::Roster;
use crate::state::selection::SelectionTracker;
use crate::state::session::SessionState;
use crate::util::initials;

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

/// Header label for the active identity, e.g. `Alice Smith (AS)`.
/// `None` when the id is not in the roster.
pub fn identity_label(roster: &Roster, id: &str) -> Option<String> {
    let recipient = roster.get(id)?;
    Some(match initials::acronym(&recipient.name) {
        Some(acronym) => format!("{} ({acronym})", recipient.name),
        None => recipient.name.clone(),
    })
}

/// Return every per-identity model to its state before an identity was
/// chosen. The roster itself and its load state are kept.
pub fn reset_conversation(
    roster: &mut Roster,
    tracker: &mut SelectionTracker,
    log: &mut MessageLog,
    compose: &mut ComposeState,
    session: &mut SessionState,
) {
    roster.clear_checks();
    tracker.initialize(roster);
    log.clear();
    compose.reset();
    session.end_conversation();
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let roster = expect_context::<RwSignal<Roster>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let log = expect_context::<RwSignal<MessageLog>>();
    let tracker = expect_context::<RwSignal<SelectionTracker>>();
    let compose = expect_context::<RwSignal<ComposeState>>();
    let params = use_params_map();

    let route_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let label = move || roster.with(|r| identity_label(r, &route_id()));

    let end_conversation = move || {
        roster.try_update(|r| {
            tracker.try_update(|t| {
                log.try_update(|l| {
                    compose.try_update(|c| session.try_update(|s| reset_conversation(r, t, l, c, s)));
                });
            });
        });
    };

    // One stream per route id; a param-only change switches identity too.
    let active_id = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let stream = StoredValue::new(None::<crate::net::message_stream::StreamHandle>);

    Effect::new(move || {
        if session.with(|s| s.roster_loading) {
            return;
        }
        let id = route_id();
        if active_id.with_untracked(|a| a.as_deref() == Some(id.as_str())) {
            return;
        }

        #[cfg(feature = "hydrate")]
        stream.set_value(None);
        end_conversation();
        active_id.set(Some(id.clone()));

        if roster.with_untracked(|r| r.get(&id).is_none()) {
            leptos::logging::warn!("unknown identity {id}");
            return;
        }
        session.update(|s| s.user_id = Some(id.clone()));

        #[cfg(feature = "hydrate")]
        stream.set_value(Some(crate::net::message_stream::spawn_message_stream(id, session, log)));
    });

    on_cleanup(move || {
        #[cfg(feature = "hydrate")]
        stream.try_update_value(Option::take);
        end_conversation();
    });

    view! {
        <div class="messages-page">
            <Show
                when=move || session.with(|s| s.roster_loading) || label().is_some()
                fallback=|| view! {
                    <p class="messages-page__unknown">"Unknown identity. " <a href="/">"Pick one"</a></p>
                }
            >
                <header class="messages-page__header">
                    <span class="messages-page__identity">{move || label().unwrap_or_default()}</span>
                    <ConnectionBadge/>
                </header>
                <MessageList/>
                <ComposeForm/>
            </Show>
        </div>
    }
}
