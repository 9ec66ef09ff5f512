//! Guard predicates for controlling rule eligibility.
//!
//! Guards are pure boolean functions over the current flow state. An
//! ineligible rule contributes nothing to the accept set, so a guard can
//! narrow what a suspension point is willing to receive.

use super::state::FlowState;
use std::sync::Arc;

/// Pure predicate that determines whether a rule is eligible in a state.
///
/// # Example
///
/// ```rust
/// use eventide::flow::{FlowState, Guard};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Phase {
///     Draft,
///     Sealed,
/// }
///
/// impl FlowState for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Draft => "Draft",
///             Self::Sealed => "Sealed",
///         }
///     }
/// }
///
/// let editable = Guard::new(|phase: &Phase| matches!(phase, Phase::Draft));
///
/// assert!(editable.check(&Phase::Draft));
/// assert!(!editable.check(&Phase::Sealed));
/// ```
pub struct Guard<S: FlowState> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: FlowState> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic: the engine evaluates it both
    /// when building the accept set and when selecting the rule to apply,
    /// and the two answers have to agree.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard passes in this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: FlowState> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Open,
        Closed,
        Locked,
    }

    impl FlowState for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Open => "Open",
                Self::Closed => "Closed",
                Self::Locked => "Locked",
            }
        }
    }

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &TestState| matches!(s, TestState::Open));

        assert!(guard.check(&TestState::Open));
        assert!(!guard.check(&TestState::Closed));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|s: &TestState| !matches!(s, TestState::Locked));

        assert_eq!(guard.check(&TestState::Closed), guard.check(&TestState::Closed));
        assert!(!guard.check(&TestState::Locked));
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard =
            Guard::new(|s: &TestState| matches!(s, TestState::Open | TestState::Closed));

        assert!(guard.check(&TestState::Open));
        assert!(guard.check(&TestState::Closed));
        assert!(!guard.check(&TestState::Locked));
    }

    #[test]
    fn guard_clones_share_the_predicate() {
        let guard = Guard::new(|s: &TestState| matches!(s, TestState::Open));
        let clone = guard.clone();

        assert_eq!(guard.check(&TestState::Open), clone.check(&TestState::Open));
    }
}
