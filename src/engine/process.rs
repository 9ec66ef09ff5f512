//! The process-description contract: steps, bodies, and faults.

use crate::core::{AcceptSet, Event, EventKind, Matched};
use thiserror::Error;

/// Kind type of a process, spelled via its event family.
pub type EventKindOf<P> = <<P as Process>::Event as Event>::Kind;

/// What a process body does next after running a stretch of its logic.
///
/// Returned from [`Process::start`] and [`Process::resume`]: either the body
/// suspends on a fresh accept set, or it has run to completion.
#[derive(Debug)]
pub enum Step<K: EventKind> {
    /// Suspend until an event matching the accept set is delivered.
    Await(AcceptSet<K>),

    /// The body returned; the process terminates.
    Done,
}

/// An unhandled fault raised by a process body.
///
/// Faults terminate the process but never the host: the engine surfaces
/// them to the `deliver` caller as
/// [`DeliveryOutcome::Faulted`](crate::DeliveryOutcome::Faulted).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Fault(Box<dyn std::error::Error + Send + Sync + 'static>);

impl Fault {
    /// Wrap an error value as a process fault.
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self(source.into())
    }

    /// Create a fault from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }
}

/// A sequential process driven by externally delivered events.
///
/// A process is authored as a sequence of steps. Wherever it needs external
/// input it declares an [`AcceptSet`] by returning [`Step::Await`]; the
/// engine hands back a [`Matched`] value scoped to exactly that set on the
/// next successful delivery. The body has no way to poll for events — it
/// only receives what `deliver` feeds it.
///
/// `start` runs eagerly: a process never begins in a pre-suspended state.
/// Returning `Err` from either method is an unhandled fault; the engine
/// terminates the process and reports the fault to the caller.
///
/// # Example
///
/// ```rust
/// use eventide::core::{AcceptSet, Matched};
/// use eventide::engine::{Fault, Process, Step};
/// use eventide::event_enum;
///
/// event_enum! {
///     pub enum CounterEvent {
///         Add(u32),
///         Stop,
///     }
///     kinds: CounterKind
/// }
///
/// struct Counter {
///     total: u32,
/// }
///
/// impl Process for Counter {
///     type Event = CounterEvent;
///
///     fn start(&mut self) -> Result<Step<CounterKind>, Fault> {
///         Ok(Step::Await(
///             AcceptSet::new(CounterKind::Add).and(CounterKind::Stop),
///         ))
///     }
///
///     fn resume(&mut self, matched: Matched<CounterEvent>) -> Result<Step<CounterKind>, Fault> {
///         match matched.into_event() {
///             CounterEvent::Add(n) => {
///                 self.total += n;
///                 Ok(Step::Await(
///                     AcceptSet::new(CounterKind::Add).and(CounterKind::Stop),
///                 ))
///             }
///             CounterEvent::Stop => Ok(Step::Done),
///         }
///     }
/// }
/// ```
pub trait Process {
    /// The closed event family this process consumes.
    type Event: Event;

    /// Run the body eagerly up to its first suspension point.
    fn start(&mut self) -> Result<Step<EventKindOf<Self>>, Fault>;

    /// Resume the body with a matched event and run it to the next
    /// suspension point or to completion.
    fn resume(&mut self, matched: Matched<Self::Event>) -> Result<Step<EventKindOf<Self>>, Fault>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn fault_from_message() {
        let fault = Fault::msg("body gave up");
        assert_eq!(fault.to_string(), "body gave up");
    }

    #[test]
    fn fault_wraps_error_values() {
        let io_error = io::Error::new(io::ErrorKind::Other, "disk on fire");
        let fault = Fault::new(io_error);
        assert_eq!(fault.to_string(), "disk on fire");
    }
}
