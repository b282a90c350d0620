//! Messaging-session state: who we are and whether the stream is live.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Websocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Socket closed, failed, or not yet opened.
    #[default]
    Disconnected,
    /// Handshake in progress.
    Connecting,
    Connected,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "Disconnected",
            Self::Connecting => "Connecting...",
            Self::Connected => "Connected",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Identity messages are sent as (roster id).
    pub user_id: Option<String>,
    pub connection_status: ConnectionStatus,
    /// True until the roster request finishes.
    pub roster_loading: bool,
    /// Roster request failure, if any.
    pub roster_error: Option<String>,
}

impl SessionState {
    /// Forget the active identity; roster load state is kept.
    pub fn end_conversation(&mut self) {
        self.user_id = None;
        self.connection_status = ConnectionStatus::Disconnected;
    }
}
