//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server serializes these same types, so the JSON shape is defined in
//! exactly one place. Inbound stream events are decoded with
//! [`decode_incoming`], which reports malformed payloads as a typed error
//! instead of panicking.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A selectable message recipient as published by `GET /api/recipients`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Stable identifier, unique per roster.
    pub id: String,
    /// Display name; the status-bar acronym is derived from it.
    pub name: String,
    /// Per-user color (`#rgb` / `#rrggbb`).
    pub color: String,
}

/// Recipient reference embedded in a pushed message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecipient {
    pub name: String,
    pub color: String,
}

/// One message pushed over the websocket stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Message body.
    pub text: String,
    /// Sender display name.
    pub sender_name: String,
    /// Sender color (`#rgb` / `#rrggbb`).
    pub sender_color: String,
    /// Recipients in the order the sender selected them.
    pub recipients: Vec<MessageRecipient>,
    /// POSIX time of the message, in seconds.
    #[serde(deserialize_with = "deserialize_seconds")]
    pub timestamp: i64,
}

/// Body of `POST /api/messages`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMessageRequest {
    /// Identity the message is sent as.
    pub sender_id: String,
    /// Recipient ids, in registration order.
    pub recipients: Vec<String>,
    pub text: String,
}

/// Failure to decode one stream event.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("malformed message payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode one websocket text event into an [`IncomingMessage`].
///
/// # Errors
///
/// Returns [`PayloadError::Malformed`] if the text is not JSON or is missing
/// required fields.
pub fn decode_incoming(text: &str) -> Result<IncomingMessage, PayloadError> {
    Ok(serde_json::from_str(text)?)
}

/// Accept integer or fractional seconds; fractions are truncated toward
/// negative infinity.
fn deserialize_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float.floor() as i64);
            }
            Err(D::Error::custom("expected seconds as a finite number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
