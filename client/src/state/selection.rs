//! Recipient-selection status bar.
//!
//! DESIGN
//! ======
//! The status bar is a bracketed, comma-separated list of the acronyms of
//! the checked recipients: `> [AB,CD]`. Tokens live in an arena-backed
//! doubly linked list whose head is the open bracket and whose tail is the
//! close bracket; both are permanent. Each recipient owns exactly one label
//! node, resolved lazily and kept for the session, which is linked in and
//! out of the list as the recipient is toggled. Separators are pooled.
//!
//! A toggle touches only the label and one adjacent separator, so list
//! edits are O(1). In `LabelOrder::Registration` mode, finding the
//! insertion point costs one O(log n) ordered-map lookup for the nearest
//! checked predecessor; `LabelOrder::Toggle` appends before the close
//! bracket and stays O(1) end to end.
//!
//! LIFECYCLE
//! =========
//! `Uninitialized` -> `initialize` (full rebuild) -> `Ready`. Only `Ready`
//! accepts incremental edits; an early toggle is handled per
//! [`EarlyToggle`].

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::{BTreeMap, HashMap};

use super::roster::RecipientRegistry;

/// Text shown before the first full rebuild.
pub const RENDERING_TEXT: &str = "rendering...";
/// Prefix that carries the open bracket.
pub const OPEN_PREFIX: &str = "> [";
pub const SEPARATOR: &str = ",";
pub const CLOSE_BRACKET: &str = "]";

const OPEN_NODE: NodeId = 0;
const CLOSE_NODE: NodeId = 1;

/// Stable key of a token node; usable as a DOM key.
pub type NodeId = usize;

/// What the status bar shows when nothing is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptySelection {
    /// `> []`: the legacy literal, i.e. the open-bracket prefix followed
    /// directly by the close bracket.
    #[default]
    Brackets,
    /// `no recipients`
    NoRecipients,
}

impl EmptySelection {
    pub fn text(self) -> &'static str {
        match self {
            Self::Brackets => "> []",
            Self::NoRecipients => "no recipients",
        }
    }
}

/// Handling of a toggle that arrives before `initialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EarlyToggle {
    /// Run a full rebuild from the live registry.
    #[default]
    Rebuild,
    /// Drop the event; `initialize` reads the live state later.
    Ignore,
}

/// Where a newly checked label is inserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelOrder {
    /// Registration order, identical to what a full rebuild produces.
    #[default]
    Registration,
    /// Check order: new labels go right before the close bracket.
    Toggle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionPolicy {
    pub empty: EmptySelection,
    pub early_toggle: EarlyToggle,
    pub order: LabelOrder,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Uninitialized,
    Ready,
}

/// One atomic unit of the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    OpenBracket,
    Label { recipient_id: String, text: String },
    Separator,
    CloseBracket,
}

impl Token {
    pub fn text(&self) -> &str {
        match self {
            Self::OpenBracket => OPEN_PREFIX,
            Self::Label { text, .. } => text,
            Self::Separator => SEPARATOR,
            Self::CloseBracket => CLOSE_BRACKET,
        }
    }
}

/// A token together with its node key, for keyed rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenView {
    pub key: NodeId,
    pub token: Token,
}

/// Renderable state of the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusView {
    Rendering,
    Empty(&'static str),
    List(Vec<TokenView>),
}

/// Why a toggle left the token list untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The recipient has no resolvable label.
    Unresolvable,
    /// Check for a label that is already shown.
    AlreadyPlaced,
    /// Uncheck for a label that is not shown.
    NotPlaced,
    /// Early toggle dropped by [`EarlyToggle::Ignore`].
    Deferred,
}

/// Effect of one `on_toggle` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Placed,
    Removed,
    Rebuilt,
    Skipped(SkipReason),
}

#[derive(Clone, Debug)]
struct Node {
    token: Token,
    prev: Option<NodeId>,
    next: Option<NodeId>,
    attached: bool,
}

#[derive(Clone, Copy, Debug)]
struct LabelSlot {
    node: NodeId,
    position: usize,
    key: Option<u64>,
}

/// Owns the status-bar token list and the per-recipient label cache.
#[derive(Clone, Debug)]
pub struct SelectionTracker {
    policy: SelectionPolicy,
    phase: Phase,
    nodes: Vec<Node>,
    free_separators: Vec<NodeId>,
    labels: HashMap<String, LabelSlot>,
    placed: BTreeMap<u64, NodeId>,
    next_seq: u64,
}

impl Default for SelectionTracker {
    fn default() -> Self {
        Self::new(SelectionPolicy::default())
    }
}

impl SelectionTracker {
    pub fn new(policy: SelectionPolicy) -> Self {
        let open = Node { token: Token::OpenBracket, prev: None, next: Some(CLOSE_NODE), attached: true };
        let close = Node { token: Token::CloseBracket, prev: Some(OPEN_NODE), next: None, attached: true };
        Self {
            policy,
            phase: Phase::Uninitialized,
            nodes: vec![open, close],
            free_separators: Vec::new(),
            labels: HashMap::new(),
            placed: BTreeMap::new(),
            next_seq: 0,
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of labels currently shown.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Number of recipients whose label has been resolved so far.
    pub fn cached_label_count(&self) -> usize {
        self.labels.len()
    }

    /// Rebuild the token list from scratch out of the live registry and
    /// enter `Ready`.
    pub fn initialize(&mut self, registry: &impl RecipientRegistry) {
        self.reset_links();
        for id in registry.recipient_ids() {
            if !registry.is_checked(id) {
                continue;
            }
            let Some(node) = self.resolve_label(registry, id) else {
                continue;
            };
            let key = self.order_key(id);
            if !self.placed.is_empty() {
                let separator = self.alloc_separator();
                self.link_before(CLOSE_NODE, separator);
            }
            self.link_before(CLOSE_NODE, node);
            self.mark_placed(id, node, key);
        }
        self.phase = Phase::Ready;
    }

    /// Apply one checkbox change for `recipient_id`.
    pub fn on_toggle(
        &mut self,
        registry: &impl RecipientRegistry,
        recipient_id: &str,
        checked: bool,
    ) -> ToggleOutcome {
        if self.phase == Phase::Uninitialized {
            return match self.policy.early_toggle {
                EarlyToggle::Rebuild => {
                    self.initialize(registry);
                    ToggleOutcome::Rebuilt
                }
                EarlyToggle::Ignore => ToggleOutcome::Skipped(SkipReason::Deferred),
            };
        }
        if checked { self.place(registry, recipient_id) } else { self.remove(recipient_id) }
    }

    fn place(&mut self, registry: &impl RecipientRegistry, id: &str) -> ToggleOutcome {
        let Some(node) = self.resolve_label(registry, id) else {
            return ToggleOutcome::Skipped(SkipReason::Unresolvable);
        };
        if self.nodes[node].attached {
            return ToggleOutcome::Skipped(SkipReason::AlreadyPlaced);
        }

        let key = self.order_key(id);
        let predecessor = self.placed.range(..key).next_back().map(|(_, n)| *n);
        match predecessor {
            Some(prev_label) => {
                let separator = self.alloc_separator();
                self.link_after(prev_label, separator);
                self.link_after(separator, node);
            }
            None => {
                self.link_after(OPEN_NODE, node);
                if self.nodes[node].next != Some(CLOSE_NODE) {
                    let separator = self.alloc_separator();
                    self.link_after(node, separator);
                }
            }
        }
        self.mark_placed(id, node, key);
        ToggleOutcome::Placed
    }

    fn remove(&mut self, id: &str) -> ToggleOutcome {
        let Some(slot) = self.labels.get_mut(id) else {
            return ToggleOutcome::Skipped(SkipReason::NotPlaced);
        };
        let Some(key) = slot.key.take() else {
            return ToggleOutcome::Skipped(SkipReason::NotPlaced);
        };
        let node = slot.node;
        self.placed.remove(&key);

        let prev = self.nodes[node].prev;
        let next = self.nodes[node].next;
        self.unlink(node);
        if let Some(prev) = prev.filter(|p| self.nodes[*p].token == Token::Separator) {
            self.release_separator(prev);
        } else if let Some(next) = next.filter(|n| self.nodes[*n].token == Token::Separator) {
            self.release_separator(next);
        }
        ToggleOutcome::Removed
    }

    /// Status bar as plain text.
    pub fn render(&self) -> String {
        match self.view() {
            StatusView::Rendering => RENDERING_TEXT.to_owned(),
            StatusView::Empty(text) => text.to_owned(),
            StatusView::List(tokens) => tokens.iter().map(|t| t.token.text()).collect(),
        }
    }

    /// Status bar as renderable tokens.
    pub fn view(&self) -> StatusView {
        if self.phase == Phase::Uninitialized {
            return StatusView::Rendering;
        }
        if self.placed.is_empty() {
            return StatusView::Empty(self.policy.empty.text());
        }
        StatusView::List(self.tokens())
    }

    /// True when the status bar shows a bracketed list rather than a
    /// placeholder.
    pub fn is_listing(&self) -> bool {
        self.phase == Phase::Ready && !self.placed.is_empty()
    }

    /// Placeholder text when not listing.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Uninitialized => Some(RENDERING_TEXT),
            Phase::Ready if self.placed.is_empty() => Some(self.policy.empty.text()),
            Phase::Ready => None,
        }
    }

    /// Tokens from open to close bracket; empty unless listing.
    pub fn tokens(&self) -> Vec<TokenView> {
        if !self.is_listing() {
            return Vec::new();
        }
        self.walk()
            .map(|id| TokenView { key: id, token: self.nodes[id].token.clone() })
            .collect()
    }

    /// Check the token grammar: open bracket, `Label (Separator Label)*`,
    /// close bracket, with labels in the order of their placement keys.
    pub fn is_well_formed(&self) -> bool {
        let sequence: Vec<NodeId> = self.walk().collect();
        if sequence.first() != Some(&OPEN_NODE) || sequence.last() != Some(&CLOSE_NODE) {
            return false;
        }
        let inner = &sequence[1..sequence.len() - 1];
        let mut labels = Vec::new();
        for (i, id) in inner.iter().enumerate() {
            let expect_label = i % 2 == 0;
            match self.nodes[*id].token {
                Token::Label { .. } if expect_label => labels.push(*id),
                Token::Separator if !expect_label => {}
                _ => return false,
            }
        }
        if !inner.is_empty() && inner.len() % 2 == 0 {
            return false;
        }
        labels.iter().copied().eq(self.placed.values().copied())
    }

    fn walk(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(OPEN_NODE), |id| self.nodes[*id].next)
    }

    fn resolve_label(&mut self, registry: &impl RecipientRegistry, id: &str) -> Option<NodeId> {
        if let Some(slot) = self.labels.get(id) {
            return Some(slot.node);
        }
        let position = registry.position(id)?;
        let text = registry.acronym(id)?;
        let node = self.nodes.len();
        self.nodes.push(Node {
            token: Token::Label { recipient_id: id.to_owned(), text },
            prev: None,
            next: None,
            attached: false,
        });
        self.labels.insert(id.to_owned(), LabelSlot { node, position, key: None });
        Some(node)
    }

    fn order_key(&mut self, id: &str) -> u64 {
        match self.policy.order {
            LabelOrder::Registration => self.labels.get(id).map_or(u64::MAX, |s| s.position as u64),
            LabelOrder::Toggle => {
                self.next_seq += 1;
                self.next_seq
            }
        }
    }

    fn mark_placed(&mut self, id: &str, node: NodeId, key: u64) {
        self.placed.insert(key, node);
        if let Some(slot) = self.labels.get_mut(id) {
            slot.key = Some(key);
        }
    }

    fn reset_links(&mut self) {
        self.free_separators.clear();
        for (id, node) in self.nodes.iter_mut().enumerate() {
            node.prev = None;
            node.next = None;
            node.attached = false;
            if node.token == Token::Separator {
                self.free_separators.push(id);
            }
        }
        self.nodes[OPEN_NODE].next = Some(CLOSE_NODE);
        self.nodes[OPEN_NODE].attached = true;
        self.nodes[CLOSE_NODE].prev = Some(OPEN_NODE);
        self.nodes[CLOSE_NODE].attached = true;
        for slot in self.labels.values_mut() {
            slot.key = None;
        }
        self.placed.clear();
        self.next_seq = 0;
    }

    fn alloc_separator(&mut self) -> NodeId {
        if let Some(id) = self.free_separators.pop() {
            return id;
        }
        self.nodes.push(Node { token: Token::Separator, prev: None, next: None, attached: false });
        self.nodes.len() - 1
    }

    fn release_separator(&mut self, id: NodeId) {
        self.unlink(id);
        self.free_separators.push(id);
    }

    fn link_after(&mut self, anchor: NodeId, node: NodeId) {
        let next = self.nodes[anchor].next;
        self.nodes[node].prev = Some(anchor);
        self.nodes[node].next = next;
        self.nodes[node].attached = true;
        self.nodes[anchor].next = Some(node);
        if let Some(next) = next {
            self.nodes[next].prev = Some(node);
        }
    }

    fn link_before(&mut self, anchor: NodeId, node: NodeId) {
        if let Some(prev) = self.nodes[anchor].prev {
            self.link_after(prev, node);
        }
    }

    fn unlink(&mut self, node: NodeId) {
        let prev = self.nodes[node].prev.take();
        let next = self.nodes[node].next.take();
        self.nodes[node].attached = false;
        if let Some(prev) = prev {
            self.nodes[prev].next = next;
        }
        if let Some(next) = next {
            self.nodes[next].prev = prev;
        }
    }
}
