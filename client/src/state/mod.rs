//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`roster`, `selection`, `messages`, etc.) so
//! individual components depend on small focused models. Every model is a
//! plain struct wrapped in an `RwSignal` by `App`.

pub mod compose;
pub mod messages;
pub mod roster;
pub mod selection;
pub mod session;
