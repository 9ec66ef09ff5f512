//! Matching: membership tests and typed payload extraction.
//!
//! Two operations make up the matcher contract. [`wants`] is a pure
//! predicate over an accept set and an envelope. [`extract`] moves the
//! payload out of the envelope into a [`Matched`] value, and must only be
//! called after `wants` returned true for the same pairing.

use super::accept::AcceptSet;
use super::event::{Envelope, Event, EventKind};

/// A matched event: the payload together with the kind it matched as.
///
/// Produced only by [`extract`]; hosts cannot construct one, which keeps
/// [`Process::resume`](crate::Process::resume) unreachable from outside the
/// engine. The process receives a `Matched` scoped to exactly the accept
/// set it declared.
#[derive(Debug)]
pub struct Matched<E: Event> {
    kind: E::Kind,
    event: E,
}

impl<E: Event> Matched<E> {
    /// The kind the event matched as.
    pub fn kind(&self) -> E::Kind {
        self.kind
    }

    /// Borrow the matched payload.
    pub fn event(&self) -> &E {
        &self.event
    }

    /// Consume the match, yielding the payload.
    pub fn into_event(self) -> E {
        self.event
    }
}

/// True iff the envelope's concrete kind is a member of the accept set.
///
/// Pure predicate; neither argument is modified or consumed.
pub fn wants<E: Event>(accept: &AcceptSet<E::Kind>, envelope: &Envelope<E>) -> bool {
    accept.contains(envelope.kind())
}

/// Move the payload out of the envelope as a [`Matched`] value.
///
/// # Panics
///
/// Panics if the envelope's kind is not in the accept set. Calling `extract`
/// without a prior true [`wants`] check is a programming error, not a
/// recoverable condition.
pub fn extract<E: Event>(accept: &AcceptSet<E::Kind>, envelope: Envelope<E>) -> Matched<E> {
    let kind = envelope.kind();
    if !accept.contains(kind) {
        panic!(
            "extract called for kind '{}' outside the accept set",
            kind.name()
        );
    }
    Matched {
        kind,
        event: envelope.into_event(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Envelope, Event, EventKind};

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum TestKind {
        Ping,
        Data,
        Stop,
    }

    impl EventKind for TestKind {
        fn name(&self) -> &str {
            match self {
                Self::Ping => "Ping",
                Self::Data => "Data",
                Self::Stop => "Stop",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    enum TestEvent {
        Ping,
        Data(u32),
        Stop,
    }

    impl Event for TestEvent {
        type Kind = TestKind;

        fn kind(&self) -> TestKind {
            match self {
                Self::Ping => TestKind::Ping,
                Self::Data(_) => TestKind::Data,
                Self::Stop => TestKind::Stop,
            }
        }
    }

    #[test]
    fn wants_is_exact_membership() {
        let accept = AcceptSet::new(TestKind::Ping).and(TestKind::Data);

        assert!(wants(&accept, &Envelope::new(TestEvent::Ping)));
        assert!(wants(&accept, &Envelope::new(TestEvent::Data(1))));
        assert!(!wants(&accept, &Envelope::new(TestEvent::Stop)));
    }

    #[test]
    fn extract_moves_payload_out() {
        let accept = AcceptSet::new(TestKind::Data);
        let matched = extract(&accept, Envelope::new(TestEvent::Data(42)));

        assert_eq!(matched.kind(), TestKind::Data);
        assert_eq!(matched.event(), &TestEvent::Data(42));
        assert_eq!(matched.into_event(), TestEvent::Data(42));
    }

    #[test]
    #[should_panic(expected = "outside the accept set")]
    fn extract_without_wants_is_a_programming_error() {
        let accept = AcceptSet::new(TestKind::Ping);
        let _ = extract(&accept, Envelope::new(TestEvent::Stop));
    }

    #[test]
    fn wants_does_not_consume_the_envelope() {
        let accept = AcceptSet::new(TestKind::Data);
        let envelope = Envelope::new(TestEvent::Data(9));

        assert!(wants(&accept, &envelope));
        // Still available for extraction afterwards.
        let matched = extract(&accept, envelope);
        assert_eq!(matched.into_event(), TestEvent::Data(9));
    }
}
