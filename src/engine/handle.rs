//! The process handle: exclusive ownership, delivery, and teardown.

use chrono::Utc;

use crate::core::{extract, wants, AcceptSet, Envelope, EventKind};
use crate::engine::log::{DeliveryLog, DeliveryRecord, Disposition, ProcessId};
use crate::engine::process::{EventKindOf, Fault, Process, Step};

/// Result of a single `deliver` call.
///
/// The five outcomes are never conflated: hosts can always tell a dropped
/// delivery to a terminated process (`Inert`) apart from a discarded
/// mismatch (`Ignored`), and a normal completion apart from a fault.
#[derive(Debug)]
pub enum DeliveryOutcome {
    /// The process was already terminated. The envelope is dropped and
    /// nothing changes.
    Inert,

    /// The envelope's kind is not in the current accept set. The envelope
    /// is dropped and the process stays suspended on the same set. This is
    /// the discard-on-mismatch policy, not an error.
    Ignored,

    /// The event matched; the body resumed inline and declared a new
    /// accept set.
    Suspended,

    /// The event matched; the body resumed inline and ran to completion.
    /// The process is now terminated.
    Completed,

    /// The event matched but the body faulted while resuming. The process
    /// is now terminated and the fault belongs to the caller.
    Faulted(Fault),
}

impl DeliveryOutcome {
    /// The comparable, loggable discriminant of this outcome.
    pub fn disposition(&self) -> Disposition {
        match self {
            Self::Inert => Disposition::Inert,
            Self::Ignored => Disposition::Ignored,
            Self::Suspended => Disposition::Suspended,
            Self::Completed => Disposition::Completed,
            Self::Faulted(_) => Disposition::Faulted,
        }
    }
}

/// The owned computation, if any.
///
/// While suspended the body sits next to its accept set. Normal completion
/// keeps the finished body so hosts can collect what it accumulated; faults
/// and teardown release it by ordinary drop.
enum ProcessState<P: Process> {
    Suspended {
        accept: AcceptSet<EventKindOf<P>>,
        body: P,
    },
    Terminated {
        body: Option<P>,
    },
}

/// Exclusive owner of one process.
///
/// A handle is movable but not clonable: only one logical owner may resume
/// or destroy a given process. Dropping the handle while the process is
/// suspended tears down the captured state without ever resuming the body.
///
/// # Example
///
/// ```rust
/// use eventide::core::{AcceptSet, Matched};
/// use eventide::engine::{DeliveryOutcome, Fault, Process, ProcessHandle, Step};
/// use eventide::event_enum;
///
/// event_enum! {
///     pub enum GateEvent {
///         Pass,
///         Shut,
///     }
///     kinds: GateKind
/// }
///
/// struct Gate;
///
/// impl Process for Gate {
///     type Event = GateEvent;
///
///     fn start(&mut self) -> Result<Step<GateKind>, Fault> {
///         Ok(Step::Await(AcceptSet::new(GateKind::Shut)))
///     }
///
///     fn resume(&mut self, _matched: Matched<GateEvent>) -> Result<Step<GateKind>, Fault> {
///         Ok(Step::Done)
///     }
/// }
///
/// let mut gate = ProcessHandle::start(Gate).unwrap();
/// assert!(matches!(gate.deliver(GateEvent::Pass), DeliveryOutcome::Ignored));
/// assert!(matches!(gate.deliver(GateEvent::Shut), DeliveryOutcome::Completed));
/// assert!(gate.is_terminated());
/// ```
pub struct ProcessHandle<P: Process> {
    id: ProcessId,
    state: ProcessState<P>,
    log: DeliveryLog,
}

impl<P: Process> ProcessHandle<P> {
    /// Start a process, running the body eagerly to its first suspension
    /// point.
    ///
    /// A body that completes without ever suspending yields a handle that
    /// is already terminated. A fault during startup yields `Err`: nothing
    /// was suspended, so no handle exists.
    pub fn start(mut body: P) -> Result<Self, Fault> {
        let state = match body.start()? {
            Step::Await(accept) => ProcessState::Suspended { accept, body },
            Step::Done => ProcessState::Terminated { body: Some(body) },
        };
        Ok(Self {
            id: ProcessId::new(),
            state,
            log: DeliveryLog::new(),
        })
    }

    /// Deliver one event to the process.
    ///
    /// If the event's kind matches the current accept set, the body resumes
    /// synchronously on the calling thread — no queuing, no new thread —
    /// and runs until it suspends again, completes, or faults. Otherwise
    /// the envelope is dropped. Every delivery, including discarded ones,
    /// is recorded in the [log](Self::log).
    pub fn deliver(&mut self, envelope: impl Into<Envelope<P::Event>>) -> DeliveryOutcome {
        let envelope = envelope.into();
        let kind = envelope.kind().name().to_string();
        let outcome = self.advance(envelope);
        self.log = self.log.record(DeliveryRecord {
            sequence: self.log.records().len(),
            kind,
            disposition: outcome.disposition(),
            timestamp: Utc::now(),
        });
        outcome
    }

    fn advance(&mut self, envelope: Envelope<P::Event>) -> DeliveryOutcome {
        // The state is parked while the body runs; every arm restores what
        // the outcome leaves behind.
        match std::mem::replace(&mut self.state, ProcessState::Terminated { body: None }) {
            ProcessState::Terminated { body } => {
                self.state = ProcessState::Terminated { body };
                DeliveryOutcome::Inert
            }
            ProcessState::Suspended { accept, mut body } => {
                if !wants(&accept, &envelope) {
                    self.state = ProcessState::Suspended { accept, body };
                    return DeliveryOutcome::Ignored;
                }
                let matched = extract(&accept, envelope);
                match body.resume(matched) {
                    Ok(Step::Await(next)) => {
                        self.state = ProcessState::Suspended { accept: next, body };
                        DeliveryOutcome::Suspended
                    }
                    Ok(Step::Done) => {
                        // Keep the finished body: output it emitted on the
                        // completing step stays observable.
                        self.state = ProcessState::Terminated { body: Some(body) };
                        DeliveryOutcome::Completed
                    }
                    Err(fault) => DeliveryOutcome::Faulted(fault),
                }
            }
        }
    }

    /// Tear down a still-suspended process without resuming it.
    ///
    /// Consuming the handle makes double-destroy and use-after-destroy
    /// unrepresentable; destroying an already-terminated process is a
    /// no-op. All captured state is released.
    pub fn destroy(self) {}

    /// True once the process has completed, faulted, or been torn down.
    pub fn is_terminated(&self) -> bool {
        matches!(self.state, ProcessState::Terminated { .. })
    }

    /// The accept set the process is currently suspended on, if any.
    pub fn accept_set(&self) -> Option<&AcceptSet<EventKindOf<P>>> {
        match &self.state {
            ProcessState::Suspended { accept, .. } => Some(accept),
            ProcessState::Terminated { .. } => None,
        }
    }

    /// Unique identity assigned when the process was started.
    pub fn id(&self) -> ProcessId {
        self.id
    }

    /// The delivery history of this process.
    pub fn log(&self) -> &DeliveryLog {
        &self.log
    }

    /// Borrow the process body, if it still exists.
    ///
    /// The body is present while the process is suspended and after a
    /// normal completion; it is gone once the process faulted.
    pub fn body(&self) -> Option<&P> {
        match &self.state {
            ProcessState::Suspended { body, .. } => Some(body),
            ProcessState::Terminated { body } => body.as_ref(),
        }
    }

    /// Mutably borrow the process body, if it still exists.
    ///
    /// Useful for draining host-visible output the body accumulated while
    /// resuming — including output emitted on the completing step.
    pub fn body_mut(&mut self) -> Option<&mut P> {
        match &mut self.state {
            ProcessState::Suspended { body, .. } => Some(body),
            ProcessState::Terminated { body } => body.as_mut(),
        }
    }

    /// Consume the handle, yielding the body if it still exists.
    ///
    /// Taking the body of a still-suspended process tears it down exactly
    /// like [`destroy`](Self::destroy) would, without resuming it.
    pub fn into_body(self) -> Option<P> {
        match self.state {
            ProcessState::Suspended { body, .. } => Some(body),
            ProcessState::Terminated { body } => body,
        }
    }
}
