//! Scrollable, append-only list of received messages.

use leptos::prelude::*;

use crate::state::messages::{
    ARROW_TOKEN, DisplayRecord, HEADER_CLOSE, InitialsToken, MessageLog, RECIPIENT_SPACER,
};

#[component]
pub fn MessageList() -> impl IntoView {
    let log = expect_context::<RwSignal<MessageLog>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = log.with(MessageLog::len);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="messages" node_ref=list_ref>
            <Show
                when=move || !log.with(MessageLog::is_empty)
                fallback=|| view! { <div class="messages__empty">"No messages yet"</div> }
            >
                <For
                    each=move || log.with(|l| l.records().to_vec())
                    key=|record: &DisplayRecord| record.seq
                    children=move |record: DisplayRecord| view! { <MessageRecord record/> }
                />
            </Show>
        </div>
    }
}

#[component]
fn MessageRecord(record: DisplayRecord) -> impl IntoView {
    let header = record.header;
    let recipients = header
        .recipients
        .into_iter()
        .map(|r| view! { <Initials token=r/>{RECIPIENT_SPACER} })
        .collect::<Vec<_>>();

    view! {
        <div class="message">
            <div class="head">
                <Initials token=header.sender/>
                {ARROW_TOKEN}
                {recipients}
                {HEADER_CLOSE}
                <span class="time" title=header.time.full>{header.time.short}</span>
            </div>
            <div class="text">{record.body}</div>
        </div>
    }
}

#[component]
fn Initials(token: InitialsToken) -> impl IntoView {
    view! { <span class="initials" title=token.name style:color=token.color>{token.initials}</span> }
}
