//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, messages::MessagesPage};
use crate::state::{
    compose::ComposeState, messages::MessageLog, roster::Roster, selection::SelectionTracker,
    session::SessionState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, loads the roster once, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let roster = RwSignal::new(Roster::default());
    let tracker = RwSignal::new(SelectionTracker::default());
    let log = RwSignal::new(MessageLog::default());
    let compose = RwSignal::new(ComposeState::default());
    let session = RwSignal::new(SessionState { roster_loading: true, ..SessionState::default() });

    provide_context(roster);
    provide_context(tracker);
    provide_context(log);
    provide_context(compose);
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_roster().await {
            Ok(recipients) => {
                let loaded = Roster::new(recipients);
                tracker.update(|t| t.initialize(&loaded));
                leptos::logging::log!("roster loaded: {} recipients", loaded.recipients().len());
                roster.set(loaded);
                session.update(|s| s.roster_loading = false);
            }
            Err(e) => {
                leptos::logging::warn!("roster load failed: {e}");
                session.update(|s| {
                    s.roster_loading = false;
                    s.roster_error = Some(e);
                });
            }
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/courier.css"/>
        <Title text="Courier"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("u"), ParamSegment("id")) view=MessagesPage/>
            </Routes>
        </Router>
    }
}
