//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so roster and submit
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{PostMessageRequest, Recipient};

pub const RECIPIENTS_ENDPOINT: &str = "/api/recipients";
pub const MESSAGES_ENDPOINT: &str = "/api/messages";

#[cfg(any(test, feature = "hydrate"))]
fn roster_failed_message(status: u16) -> String {
    format!("recipient list request failed: {status}")
}

/// Turn a non-OK submit response into the text shown behind `!error!`.
#[cfg(any(test, feature = "hydrate"))]
fn post_failed_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("message rejected: {status}")
    } else {
        format!("message rejected: {status}: {body}")
    }
}

/// Fetch the recipient roster from `GET /api/recipients`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_roster() -> Result<Vec<Recipient>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(RECIPIENTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(roster_failed_message(resp.status()));
        }
        resp.json::<Vec<Recipient>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Submit a composed message via `POST /api/messages`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the
/// message.
pub async fn post_message(req: &PostMessageRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(MESSAGES_ENDPOINT)
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(post_failed_message(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}
