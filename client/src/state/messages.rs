//! Incoming message rendering and the session message log.
//!
//! DESIGN
//! ======
//! `MessageRenderer` is a pure transform from one decoded
//! [`IncomingMessage`] into a [`DisplayRecord`]. `MessageLog` appends
//! records in delivery order and never reorders, mutates, or evicts them.
//!
//! ERROR HANDLING
//! ==============
//! Malformed stream events are dropped: `receive_text` counts the drop and
//! returns the decode error so the caller can log it. Later valid events
//! are unaffected.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::fmt::Display;

use chrono::TimeZone;

use crate::net::types::{IncomingMessage, PayloadError, decode_incoming};
use crate::util::color::name_color;
use crate::util::initials::initials;
use crate::util::time_label::{TimeLabel, time_label};

/// Separator between the sender and the recipient list.
pub const ARROW_TOKEN: &str = " -> [ ";
/// Spacing emitted after every recipient token.
pub const RECIPIENT_SPACER: &str = " ";
/// Closes the recipient list.
pub const HEADER_CLOSE: &str = "]";

/// Compact, colored reference to a person in a message header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitialsToken {
    /// Upper-case initials; may be empty.
    pub initials: String,
    /// Full name, used as the hover label.
    pub name: String,
    /// Sanitized `#rrggbb` color.
    pub color: String,
}

impl InitialsToken {
    fn new(name: &str, color: &str) -> Self {
        Self { initials: initials(name), name: name.to_owned(), color: name_color(color) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageHeader {
    pub sender: InitialsToken,
    pub recipients: Vec<InitialsToken>,
    pub time: TimeLabel,
}

impl MessageHeader {
    /// Header as one line of text, e.g. `BX -> [ CY ]00:00`.
    pub fn text(&self) -> String {
        let mut line = String::new();
        line.push_str(&self.sender.initials);
        line.push_str(ARROW_TOKEN);
        for recipient in &self.recipients {
            line.push_str(&recipient.initials);
            line.push_str(RECIPIENT_SPACER);
        }
        line.push_str(HEADER_CLOSE);
        line.push_str(&self.time.short);
        line
    }
}

/// Rendered form of one received message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRecord {
    /// Arrival sequence number within the session, starting at 0.
    pub seq: u64,
    pub header: MessageHeader,
    pub body: String,
}

/// Turns decoded messages into display records.
#[derive(Clone, Debug)]
pub struct MessageRenderer<Tz: TimeZone> {
    tz: Tz,
}

impl MessageRenderer<chrono::Local> {
    /// Renderer that labels times in the local time zone.
    pub fn local() -> Self {
        Self { tz: chrono::Local }
    }
}

impl<Tz> MessageRenderer<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Render `msg` as the record with arrival number `seq`.
    pub fn render(&self, seq: u64, msg: &IncomingMessage) -> DisplayRecord {
        let header = MessageHeader {
            sender: InitialsToken::new(&msg.sender_name, &msg.sender_color),
            recipients: msg
                .recipients
                .iter()
                .map(|r| InitialsToken::new(&r.name, &r.color))
                .collect(),
            time: time_label(msg.timestamp, &self.tz),
        };
        DisplayRecord { seq, header, body: msg.text.clone() }
    }
}

/// Append-only list of rendered messages for one identity's session.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    records: Vec<DisplayRecord>,
    dropped: usize,
}

impl MessageLog {
    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of stream events dropped as malformed.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Drop every record; used when the page switches identity.
    pub fn clear(&mut self) {
        self.records.clear();
        self.dropped = 0;
    }

    /// Render and append one decoded message.
    pub fn append<Tz>(&mut self, renderer: &MessageRenderer<Tz>, msg: &IncomingMessage) -> &DisplayRecord
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let seq = self.records.len() as u64;
        self.records.push(renderer.render(seq, msg));
        &self.records[self.records.len() - 1]
    }

    /// Decode, render, and append one raw stream event.
    ///
    /// # Errors
    ///
    /// Returns the decode error when the event is malformed; the event is
    /// dropped and the log is otherwise unchanged.
    pub fn receive_text<Tz>(&mut self, renderer: &MessageRenderer<Tz>, text: &str) -> Result<&DisplayRecord, PayloadError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match decode_incoming(text) {
            Ok(msg) => Ok(self.append(renderer, &msg)),
            Err(e) => {
                self.dropped += 1;
                Err(e)
            }
        }
    }
}
