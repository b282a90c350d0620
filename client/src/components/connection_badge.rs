//! Message-stream connection indicator.

use leptos::prelude::*;

use crate::state::session::{ConnectionStatus, SessionState};

#[component]
pub fn ConnectionBadge() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let status_class = move || match session.with(|s| s.connection_status) {
        ConnectionStatus::Connected => "connection__dot connection__dot--connected",
        ConnectionStatus::Connecting => "connection__dot connection__dot--connecting",
        ConnectionStatus::Disconnected => "connection__dot connection__dot--disconnected",
    };
    let status_label = move || session.with(|s| s.connection_status.label());

    view! {
        <span class="connection">
            <span class=status_class></span>
            {status_label}
        </span>
    }
}
