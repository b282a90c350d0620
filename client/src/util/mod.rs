//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate text derivation and browser concerns from page
//! and component logic to improve reuse and testability.

pub mod color;
pub mod initials;
pub mod popup;
pub mod time_label;
