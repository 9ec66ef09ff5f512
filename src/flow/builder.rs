//! Builders for constructing flows and rules with a fluent API.

use crate::core::Event;
use crate::flow::error::BuildError;
use crate::flow::guard::Guard;
use crate::flow::machine::Flow;
use crate::flow::rule::{Rule, RuleAction};
use crate::flow::state::FlowState;
use std::sync::Arc;

/// Builder for constructing a single [`Rule`].
pub struct RuleBuilder<S: FlowState, E: Event> {
    from: Option<S>,
    on: Option<E::Kind>,
    to: Option<S>,
    emit: Option<String>,
    guard: Option<Guard<S>>,
    action: Option<RuleAction<E>>,
}

impl<S: FlowState, E: Event> RuleBuilder<S, E> {
    /// Create a new rule builder.
    pub fn new() -> Self {
        Self {
            from: None,
            on: None,
            to: None,
            emit: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the consumed event kind (required).
    pub fn on(mut self, kind: E::Kind) -> Self {
        self.on = Some(kind);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set text emitted when the rule fires (optional).
    pub fn emit(mut self, text: impl Into<String>) -> Self {
        self.emit = Some(text.into());
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Add a payload action (optional).
    ///
    /// The action sees the matched event and may produce an extra line of
    /// emitted output.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&E) -> Option<String> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<Rule<S, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let on = self.on.ok_or(BuildError::MissingOnKind)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Rule {
            from,
            on,
            to,
            emit: self.emit,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<S: FlowState, E: Event> Default for RuleBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`Flow`] with a fluent API.
pub struct FlowBuilder<S: FlowState, E: Event> {
    initial: Option<S>,
    rules: Vec<Rule<S, E>>,
}

impl<S: FlowState, E: Event> FlowBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            rules: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn rule(mut self, builder: RuleBuilder<S, E>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: Rule<S, E>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: Vec<Rule<S, E>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the flow.
    ///
    /// Validates that the initial state is set, at least one rule exists,
    /// and every reachable non-final state has an outgoing rule. The
    /// dead-end check ignores guards — a guard that rejects at runtime
    /// still faults the flow through the engine.
    pub fn build(self) -> Result<Flow<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.rules.is_empty() {
            return Err(BuildError::NoRules);
        }

        let mut candidates: Vec<&S> = vec![&initial];
        for rule in &self.rules {
            if !candidates.contains(&&rule.to) {
                candidates.push(&rule.to);
            }
        }
        for state in candidates {
            if !state.is_final() && !self.rules.iter().any(|r| r.from == *state) {
                return Err(BuildError::DeadEndState {
                    state: state.name().to_string(),
                });
            }
        }

        Ok(Flow::new(initial, self.rules))
    }
}

impl<S: FlowState, E: Event> Default for FlowBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_enum;
    use crate::flow_state;

    event_enum! {
        enum TestEvent {
            Go,
            Halt,
        }
        kinds: TestKind
    }

    flow_state! {
        enum TestState {
            Idle,
            Busy,
            Done,
        }
        final: [Done]
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = FlowBuilder::<TestState, TestEvent>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_rules() {
        let result = FlowBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Idle)
            .build();

        assert!(matches!(result, Err(BuildError::NoRules)));
    }

    #[test]
    fn rule_builder_validates_required_fields() {
        let result = RuleBuilder::<TestState, TestEvent>::new()
            .from(TestState::Idle)
            .build();

        assert!(matches!(result, Err(BuildError::MissingOnKind)));

        let result = RuleBuilder::<TestState, TestEvent>::new()
            .from(TestState::Idle)
            .on(TestKind::Go)
            .build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn dead_end_states_are_rejected() {
        // Busy has no outgoing rule and is not final.
        let result = FlowBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Idle)
            .rule(
                RuleBuilder::new()
                    .from(TestState::Idle)
                    .on(TestKind::Go)
                    .to(TestState::Busy),
            )
            .unwrap()
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DeadEndState { state }) if state == "Busy"
        ));
    }

    #[test]
    fn fluent_api_builds_flow() {
        let flow = FlowBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Idle)
            .rule(
                RuleBuilder::new()
                    .from(TestState::Idle)
                    .on(TestKind::Go)
                    .to(TestState::Busy)
                    .emit("working"),
            )
            .unwrap()
            .rule(
                RuleBuilder::new()
                    .from(TestState::Busy)
                    .on(TestKind::Halt)
                    .to(TestState::Done),
            )
            .unwrap()
            .build();

        assert!(flow.is_ok());
        let flow = flow.unwrap();
        assert_eq!(flow.current_state(), &TestState::Idle);
    }

    #[test]
    fn add_multiple_rules() {
        let rules: Vec<Rule<TestState, TestEvent>> = vec![
            RuleBuilder::new()
                .from(TestState::Idle)
                .on(TestKind::Go)
                .to(TestState::Busy)
                .build()
                .unwrap(),
            RuleBuilder::new()
                .from(TestState::Busy)
                .on(TestKind::Halt)
                .to(TestState::Done)
                .build()
                .unwrap(),
        ];

        let flow = FlowBuilder::new()
            .initial(TestState::Idle)
            .rules(rules)
            .build();

        assert!(flow.is_ok());
    }
}
