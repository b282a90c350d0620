//! Websocket message stream.
//!
//! Opens `/api/ws?user=<id>`, decodes every text event into an
//! `IncomingMessage`, and appends it to the session `MessageLog` in delivery
//! order. Malformed events are logged and dropped.
//!
//! There is no reconnection: when the socket closes the session is marked
//! `Disconnected` and stays that way until the page reloads. The page owns
//! the returned `StreamHandle` and drops it on navigation, which closes the
//! socket.

#[cfg(test)]
#[path = "message_stream_test.rs"]
mod message_stream_test;

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use crate::state::messages::{MessageLog, MessageRenderer};
#[cfg(feature = "hydrate")]
use crate::state::session::{ConnectionStatus, SessionState};

/// Websocket URL for `user_id`, matching the page's scheme.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn stream_url(page_href: &str, host: &str, user_id: &str) -> String {
    let proto = if page_href.starts_with("https") { "wss" } else { "ws" };
    format!("{proto}://{host}/api/ws?user={}", urlencoding::encode(user_id))
}

/// Owner of a running stream. Dropping it closes the socket; nothing from
/// that stream reaches the session or the log afterwards.
#[cfg(feature = "hydrate")]
#[derive(Debug)]
pub struct StreamHandle {
    _stop: futures::channel::oneshot::Sender<()>,
}

#[cfg(feature = "hydrate")]
enum StreamEnd {
    Closed,
    Stopped,
}

/// Spawn the stream for `user_id` as a local task.
#[cfg(feature = "hydrate")]
pub fn spawn_message_stream(user_id: String, session: RwSignal<SessionState>, log: RwSignal<MessageLog>) -> StreamHandle {
    let (stop_tx, stop_rx) = futures::channel::oneshot::channel();
    session.update(|s| s.connection_status = ConnectionStatus::Connecting);

    leptos::task::spawn_local(async move {
        let window = web_sys::window();
        let href = window
            .as_ref()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let host = window
            .as_ref()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let url = stream_url(&href, &host, &user_id);

        match run_stream(&url, stop_rx, session, log).await {
            Ok(StreamEnd::Stopped) => {
                leptos::logging::log!("message stream for {user_id} stopped");
                return;
            }
            Ok(StreamEnd::Closed) => leptos::logging::warn!("message stream closed"),
            Err(e) => leptos::logging::warn!("message stream error: {e}"),
        }
        session.try_update(|s| s.connection_status = ConnectionStatus::Disconnected);
    });

    StreamHandle { _stop: stop_tx }
}

#[cfg(feature = "hydrate")]
async fn run_stream(
    url: &str,
    mut stop: futures::channel::oneshot::Receiver<()>,
    session: RwSignal<SessionState>,
    log: RwSignal<MessageLog>,
) -> Result<StreamEnd, String> {
    use futures::{SinkExt, StreamExt};
    use futures::future::{Either, select};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    // A handle dropped before the task first ran never opens a socket.
    if !matches!(stop.try_recv(), Ok(None)) {
        return Ok(StreamEnd::Stopped);
    }

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut sink, mut events) = ws.split();
    session.update(|s| s.connection_status = ConnectionStatus::Connected);

    let renderer = MessageRenderer::local();
    loop {
        match select(&mut stop, events.next()).await {
            Either::Left(_) => {
                let _ = sink.close().await;
                return Ok(StreamEnd::Stopped);
            }
            Either::Right((None, _)) => return Ok(StreamEnd::Closed),
            Either::Right((Some(Ok(Message::Text(text))), _)) => log.update(|l| {
                if let Err(e) = l.receive_text(&renderer, &text) {
                    leptos::logging::warn!("dropping stream event: {e}");
                }
            }),
            Either::Right((Some(Ok(Message::Bytes(_))), _)) => {}
            Either::Right((Some(Err(e)), _)) => return Err(e.to_string()),
        }
    }
}
