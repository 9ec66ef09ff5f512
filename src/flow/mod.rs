//! Declarative flows: enumerable states driven by a rule table.
//!
//! This layer replaces hand-written process bodies with a transition table:
//! each [`Rule`] names a source state, the event kind it consumes, a target
//! state, and optional emitted output. The accept set at every suspension
//! point is exactly the kinds of the rules eligible in the current state,
//! so states and legal transitions are enumerable and testable in
//! isolation. A [`Flow`] implements [`Process`](crate::Process) and runs on
//! an ordinary [`ProcessHandle`](crate::ProcessHandle).

pub mod builder;
pub mod error;
pub mod guard;
pub mod machine;
pub mod macros;
pub mod rule;
pub mod state;

pub use builder::{FlowBuilder, RuleBuilder};
pub use error::BuildError;
pub use guard::Guard;
pub use machine::Flow;
pub use rule::{Rule, RuleAction};
pub use state::FlowState;

use crate::core::Event;

/// Create a bare transition rule.
///
/// # Example
///
/// ```
/// use eventide::event_enum;
/// use eventide::flow::rule as flow_rule;
/// use eventide::flow_state;
///
/// event_enum! {
///     pub enum LampEvent {
///         Toggle,
///     }
///     kinds: LampKind
/// }
///
/// flow_state! {
///     pub enum LampState {
///         Off,
///         On,
///     }
/// }
///
/// let rule = flow_rule::<LampState, LampEvent>(LampState::Off, LampKind::Toggle, LampState::On);
/// assert!(rule.handles(&LampState::Off, LampKind::Toggle));
/// ```
pub fn rule<S, E>(from: S, on: E::Kind, to: S) -> Rule<S, E>
where
    S: FlowState,
    E: Event,
{
    Rule {
        from,
        on,
        to,
        emit: None,
        guard: None,
        action: None,
    }
}

/// Create a rule that emits fixed text when it fires.
pub fn emitting_rule<S, E>(from: S, on: E::Kind, to: S, text: impl Into<String>) -> Rule<S, E>
where
    S: FlowState,
    E: Event,
{
    Rule {
        from,
        on,
        to,
        emit: Some(text.into()),
        guard: None,
        action: None,
    }
}

/// Create a rule gated by a guard predicate.
pub fn guarded_rule<S, E, F>(from: S, on: E::Kind, to: S, guard: F) -> Rule<S, E>
where
    S: FlowState,
    E: Event,
    F: Fn(&S) -> bool + Send + Sync + 'static,
{
    Rule {
        from,
        on,
        to,
        emit: None,
        guard: Some(Guard::new(guard)),
        action: None,
    }
}
