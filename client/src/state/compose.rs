//! Compose-form state and validation.
//!
//! The form posts `{sender_id, recipients, text}` to the server. Validation
//! mirrors the server's checks so most mistakes never leave the browser.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use crate::net::types::PostMessageRequest;

pub const NO_RECIPIENTS_MESSAGE: &str = "No message recipients provided.";
pub const EMPTY_TEXT_MESSAGE: &str = "Message text is empty.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeState {
    /// Current text input value.
    pub text: String,
    /// True while a submit request is in flight.
    pub pending: bool,
    /// Last submit failure, shown behind the status-bar error marker.
    pub error: Option<String>,
    /// Whether the error details are expanded.
    pub error_expanded: bool,
}

impl ComposeState {
    /// Clear the form after a successful submit.
    pub fn reset(&mut self) {
        self.text.clear();
        self.pending = false;
        self.error = None;
        self.error_expanded = false;
    }

    pub fn fail(&mut self, message: String) {
        self.pending = false;
        self.error = Some(message);
        self.error_expanded = false;
    }
}

/// Validate the form and build the request body.
///
/// # Errors
///
/// Returns a user-facing message when no recipient is selected or the text
/// is blank.
pub fn validate_compose(
    sender_id: &str,
    text: &str,
    recipients: Vec<String>,
) -> Result<PostMessageRequest, &'static str> {
    if recipients.is_empty() {
        return Err(NO_RECIPIENTS_MESSAGE);
    }
    let text = text.trim();
    if text.is_empty() {
        return Err(EMPTY_TEXT_MESSAGE);
    }
    Ok(PostMessageRequest { sender_id: sender_id.to_owned(), recipients, text: text.to_owned() })
}
