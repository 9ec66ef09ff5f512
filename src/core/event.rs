//! Event model: kinds, payloads, and delivery envelopes.
//!
//! Events belong to a closed family declared by the host. The payload type
//! implements [`Event`] and names its kind enum, so matching against an
//! accept set is an exact membership test over a closed set rather than a
//! runtime type-identity comparison.

use std::fmt::Debug;

/// Trait for event kind discriminants.
///
/// Kinds are small fieldless `Copy` enums. They carry no payload; they only
/// identify which category an event belongs to, which is what suspension
/// points declare and what the matcher tests.
///
/// # Example
///
/// ```rust
/// use eventide::core::EventKind;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum DoorKind {
///     Open,
///     Close,
///     Knock,
/// }
///
/// impl EventKind for DoorKind {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Close => "Close",
///             Self::Knock => "Knock",
///         }
///     }
/// }
///
/// assert_eq!(DoorKind::Knock.name(), "Knock");
/// ```
pub trait EventKind: Copy + PartialEq + Eq + Debug + Send + Sync + 'static {
    /// Get the kind's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait tying an event payload to its kind discriminant.
///
/// Implemented by the host's closed event enum. `kind` recovers the
/// discriminant without inspecting the payload, which is all the matcher
/// needs at delivery time.
///
/// The [`event_enum!`](crate::event_enum) macro generates the payload enum,
/// its kind enum, and both trait implementations.
///
/// # Example
///
/// ```rust
/// use eventide::core::{Event, EventKind};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum DoorKind {
///     Open,
///     Knock,
/// }
///
/// impl EventKind for DoorKind {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Knock => "Knock",
///         }
///     }
/// }
///
/// #[derive(Debug)]
/// enum DoorEvent {
///     Open,
///     Knock(String),
/// }
///
/// impl Event for DoorEvent {
///     type Kind = DoorKind;
///
///     fn kind(&self) -> DoorKind {
///         match self {
///             Self::Open => DoorKind::Open,
///             Self::Knock(_) => DoorKind::Knock,
///         }
///     }
/// }
///
/// let event = DoorEvent::Knock("anyone home?".to_string());
/// assert_eq!(event.kind(), DoorKind::Knock);
/// ```
pub trait Event: Debug + Send + 'static {
    /// The kind enum this event family is discriminated by.
    type Kind: EventKind;

    /// Recover the event's concrete kind.
    fn kind(&self) -> Self::Kind;
}

/// By-value carrier for one event at delivery time.
///
/// Created by the host, passed into [`deliver`](crate::ProcessHandle::deliver)
/// by value, moved into the process if matched, and dropped otherwise. The
/// envelope exposes the event's kind without consuming it, so the matcher can
/// decide membership before the payload moves.
#[derive(Debug)]
pub struct Envelope<E: Event> {
    event: E,
}

impl<E: Event> Envelope<E> {
    /// Wrap an event for delivery.
    pub fn new(event: E) -> Self {
        Self { event }
    }

    /// The concrete kind of the carried event.
    pub fn kind(&self) -> E::Kind {
        self.event.kind()
    }

    /// Consume the envelope, yielding the carried event.
    pub fn into_event(self) -> E {
        self.event
    }
}

impl<E: Event> From<E> for Envelope<E> {
    fn from(event: E) -> Self {
        Self::new(event)
    }
}
