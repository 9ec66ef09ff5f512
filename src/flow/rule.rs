//! Rules: one enumerable transition each.

use crate::core::Event;
use crate::flow::guard::Guard;
use crate::flow::state::FlowState;
use std::sync::Arc;

/// Type alias for payload actions attached to a rule.
///
/// An action inspects the matched event's payload and may produce an extra
/// line of emitted output. Actions are stored behind `Arc` so rules stay
/// cheaply clonable.
pub type RuleAction<E> = Arc<dyn Fn(&E) -> Option<String> + Send + Sync>;

/// One entry of a flow's transition table: in state `from`, an event of
/// kind `on` moves the flow to state `to`, optionally emitting output.
///
/// Rules make states and legal transitions enumerable and testable in
/// isolation; the set of eligible rules at the current state is exactly
/// what the flow's suspension point accepts.
pub struct Rule<S: FlowState, E: Event> {
    /// State this rule fires from.
    pub from: S,
    /// Event kind this rule consumes.
    pub on: E::Kind,
    /// State the flow moves to.
    pub to: S,
    /// Text emitted when the rule fires.
    pub emit: Option<String>,
    /// Predicate gating eligibility in the current state.
    pub guard: Option<Guard<S>>,
    /// Payload inspection producing extra emitted output.
    pub action: Option<RuleAction<E>>,
}

impl<S: FlowState, E: Event> Rule<S, E> {
    /// Check if this rule is eligible in the current state (pure).
    pub fn applies(&self, current: &S) -> bool {
        if *current != self.from {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(current))
    }

    /// Check if this rule consumes the given kind in the current state.
    pub fn handles(&self, current: &S, kind: E::Kind) -> bool {
        self.applies(current) && self.on == kind
    }
}

impl<S: FlowState, E: Event> Clone for Rule<S, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            on: self.on,
            to: self.to.clone(),
            emit: self.emit.clone(),
            guard: self.guard.clone(),
            action: self.action.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_enum;
    use crate::flow::Guard;

    event_enum! {
        enum TestEvent {
            Go,
            Halt,
        }
        kinds: TestKind
    }

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Idle,
        Busy,
    }

    impl FlowState for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
            }
        }
    }

    fn go_rule() -> Rule<TestState, TestEvent> {
        Rule {
            from: TestState::Idle,
            on: TestKind::Go,
            to: TestState::Busy,
            emit: None,
            guard: None,
            action: None,
        }
    }

    #[test]
    fn applies_matches_from_state() {
        let rule = go_rule();

        assert!(rule.applies(&TestState::Idle));
        assert!(!rule.applies(&TestState::Busy));
    }

    #[test]
    fn applies_respects_guard() {
        let mut rule = go_rule();
        rule.guard = Some(Guard::new(|_: &TestState| false));

        assert!(!rule.applies(&TestState::Idle));
    }

    #[test]
    fn handles_checks_state_and_kind() {
        let rule = go_rule();

        assert!(rule.handles(&TestState::Idle, TestKind::Go));
        assert!(!rule.handles(&TestState::Idle, TestKind::Halt));
        assert!(!rule.handles(&TestState::Busy, TestKind::Go));
    }

    #[test]
    fn clone_preserves_table_entry() {
        let mut rule = go_rule();
        rule.emit = Some("moving".to_string());
        let clone = rule.clone();

        assert_eq!(clone.from, TestState::Idle);
        assert_eq!(clone.to, TestState::Busy);
        assert_eq!(clone.emit.as_deref(), Some("moving"));
    }
}
