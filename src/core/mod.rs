//! Core event matching types and logic.
//!
//! This module contains the pure core of the engine:
//! - Event kinds and payloads via the `EventKind` and `Event` traits
//! - Accept sets declared at suspension points
//! - The matcher: `wants` membership tests and `extract` payload extraction
//!
//! All logic in this module is pure (no side effects); the imperative
//! suspend/resume machinery lives in [`crate::engine`].

mod accept;
mod event;
pub mod macros;
mod matcher;

pub use accept::AcceptSet;
pub use event::{Envelope, Event, EventKind};
pub use matcher::{extract, wants, Matched};
