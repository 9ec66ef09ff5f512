//! The trait for enumerable flow states.

use std::fmt::Debug;

/// Trait for flow states.
///
/// Flow states are immutable values naming a position in a rule-driven
/// flow. Final states complete the process; every non-final state must
/// have at least one outgoing rule so the flow can always declare a
/// non-empty accept set.
///
/// The [`flow_state!`](crate::flow_state) macro generates implementations
/// for simple enums.
///
/// # Example
///
/// ```rust
/// use eventide::flow::FlowState;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum DoorState {
///     Closed,
///     Opened,
/// }
///
/// impl FlowState for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opened => "Opened",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Closed.name(), "Closed");
/// assert!(!DoorState::Closed.is_final());
/// ```
pub trait FlowState: Clone + PartialEq + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final state.
    ///
    /// Entering a final state completes the process. Default
    /// implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
