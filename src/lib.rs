//! Eventide: an event-driven process engine with typed suspension points.
//!
//! A process is a sequential computation that suspends at declared points,
//! names the set of event kinds it will accept next, and resumes exactly
//! when a matching event is delivered — receiving that event's payload,
//! strongly typed. Everything runs inline on the delivering thread: no
//! queues, no background scheduling, no internal locking.
//!
//! # Core Concepts
//!
//! - **Events**: closed families of payload enums with kind discriminants
//!   (`Event`, `EventKind`, `event_enum!`)
//! - **Accept sets**: the never-empty set of kinds a suspension point is
//!   willing to consume
//! - **Processes**: bodies implementing [`Process`], owned and driven by a
//!   [`ProcessHandle`]
//! - **Flows**: declarative rule tables compiled onto the engine
//!   ([`flow`])
//!
//! Every `deliver` call reports exactly one of five outcomes — `Inert`,
//! `Ignored`, `Suspended`, `Completed`, `Faulted` — and is recorded in the
//! process's delivery log.
//!
//! # Example
//!
//! ```rust
//! use eventide::flow::{FlowBuilder, RuleBuilder};
//! use eventide::{event_enum, flow_state, DeliveryOutcome, ProcessHandle};
//!
//! event_enum! {
//!     pub enum DoorEvent {
//!         Open,
//!         Close,
//!         Knock,
//!     }
//!     kinds: DoorKind
//! }
//!
//! flow_state! {
//!     pub enum DoorState {
//!         Closed,
//!         Opened,
//!     }
//! }
//!
//! let flow = FlowBuilder::new()
//!     .initial(DoorState::Closed)
//!     .rule(
//!         RuleBuilder::new()
//!             .from(DoorState::Closed)
//!             .on(DoorKind::Knock)
//!             .to(DoorState::Closed)
//!             .emit("Come in, it's open!"),
//!     )
//!     .unwrap()
//!     .rule(
//!         RuleBuilder::new()
//!             .from(DoorState::Closed)
//!             .on(DoorKind::Open)
//!             .to(DoorState::Opened)
//!             .emit("*Door opened*"),
//!     )
//!     .unwrap()
//!     .rule(
//!         RuleBuilder::new()
//!             .from(DoorState::Opened)
//!             .on(DoorKind::Close)
//!             .to(DoorState::Closed)
//!             .emit("*Door closed*"),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let mut door = ProcessHandle::start(flow).unwrap();
//!
//! assert!(matches!(door.deliver(DoorEvent::Knock), DeliveryOutcome::Suspended));
//! assert_eq!(
//!     door.body_mut().unwrap().take_outputs(),
//!     vec!["Come in, it's open!".to_string()]
//! );
//!
//! assert!(matches!(door.deliver(DoorEvent::Open), DeliveryOutcome::Suspended));
//! // While open, only Close is wanted; a knock is discarded.
//! assert!(matches!(door.deliver(DoorEvent::Knock), DeliveryOutcome::Ignored));
//! assert!(matches!(door.deliver(DoorEvent::Close), DeliveryOutcome::Suspended));
//! ```

pub mod core;
pub mod engine;
pub mod flow;

// Re-export commonly used types
pub use crate::core::{extract, wants, AcceptSet, Envelope, Event, EventKind, Matched};
pub use crate::engine::{
    DeliveryLog, DeliveryOutcome, DeliveryRecord, Disposition, Fault, Process, ProcessHandle,
    ProcessId, Step,
};
pub use crate::flow::{BuildError, Flow, FlowBuilder, FlowState, Guard, Rule, RuleBuilder};
