//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the compose form, status bar, and message list while
//! reading/writing shared state from Leptos context providers.

pub mod compose_form;
pub mod connection_badge;
pub mod message_list;
pub mod recipient_picker;
pub mod status_bar;
