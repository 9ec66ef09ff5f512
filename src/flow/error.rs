//! Build errors for flow and rule builders.

use thiserror::Error;

/// Errors that can occur when building flows and rules.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No rules defined. Add at least one rule")]
    NoRules,

    #[error("Rule source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Rule event kind not specified. Call .on(kind)")]
    MissingOnKind,

    #[error("Rule target state not specified. Call .to(state)")]
    MissingToState,

    #[error("State '{state}' is not final and has no outgoing rules")]
    DeadEndState { state: String },
}
