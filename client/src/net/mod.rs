//! Networking modules for HTTP + websocket message delivery.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `message_stream` consumes the websocket push
//! channel, and `types` defines the shared wire schema.

pub mod api;
pub mod message_stream;
pub mod types;
