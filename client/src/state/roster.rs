//! Recipient registry: who can be selected, in what order, and what is
//! currently checked.
//!
//! SYSTEM CONTEXT
//! ==============
//! The roster is populated from `GET /api/recipients` and mirrors the
//! checkbox inputs of the recipient picker. It is the authoritative source
//! of selection state; the status-bar tracker only derives from it.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use std::collections::HashMap;

use crate::net::types::Recipient;
use crate::util::initials;

/// Read access to recipients, their order, labels, and checked state.
pub trait RecipientRegistry {
    /// Recipient ids in registration order.
    fn recipient_ids(&self) -> Vec<&str>;
    /// Registration index of `id`, if registered.
    fn position(&self, id: &str) -> Option<usize>;
    /// Live checked state; unknown ids are unchecked.
    fn is_checked(&self, id: &str) -> bool;
    /// Short label for `id`, or `None` when it cannot be resolved.
    fn acronym(&self, id: &str) -> Option<String>;
}

/// Concrete registry backing the recipient picker.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    recipients: Vec<Recipient>,
    index: HashMap<String, usize>,
    checked: HashMap<String, bool>,
}

impl Roster {
    /// Build a roster, keeping the first occurrence of a duplicated id.
    pub fn new(recipients: Vec<Recipient>) -> Self {
        let mut unique = Vec::with_capacity(recipients.len());
        let mut index = HashMap::with_capacity(recipients.len());
        for recipient in recipients {
            if index.contains_key(&recipient.id) {
                continue;
            }
            index.insert(recipient.id.clone(), unique.len());
            unique.push(recipient);
        }
        Self { recipients: unique, index, checked: HashMap::new() }
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn get(&self, id: &str) -> Option<&Recipient> {
        self.index.get(id).map(|i| &self.recipients[*i])
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    /// Mirror a checkbox change. Returns `false` for unknown ids.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        if !self.index.contains_key(id) {
            return false;
        }
        self.checked.insert(id.to_owned(), checked);
        true
    }

    /// Uncheck everything, as a form reset does.
    pub fn clear_checks(&mut self) {
        self.checked.clear();
    }

    /// Checked recipient ids in registration order.
    pub fn checked_ids(&self) -> Vec<String> {
        self.recipients
            .iter()
            .filter(|r| self.is_checked(&r.id))
            .map(|r| r.id.clone())
            .collect()
    }
}

impl RecipientRegistry for Roster {
    fn recipient_ids(&self) -> Vec<&str> {
        self.recipients.iter().map(|r| r.id.as_str()).collect()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn is_checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    fn acronym(&self, id: &str) -> Option<String> {
        self.get(id).and_then(|r| initials::acronym(&r.name))
    }
}
