//! The flow: a rule table driven as a process.

use crate::core::{AcceptSet, Event, EventKind, Matched};
use crate::engine::{Fault, Process, Step};
use crate::flow::rule::Rule;
use crate::flow::state::FlowState;

/// A rule-driven process: enumerable states, a transition table, and
/// emitted output collected as the flow runs.
///
/// A flow suspends on exactly the kinds its eligible rules consume at the
/// current state, applies the matching rule on resumption, and completes
/// when it enters a final state. Build one with
/// [`FlowBuilder`](crate::flow::FlowBuilder) and hand it to
/// [`ProcessHandle::start`](crate::ProcessHandle::start).
pub struct Flow<S: FlowState, E: Event> {
    current: S,
    rules: Vec<Rule<S, E>>,
    outputs: Vec<String>,
}

impl<S: FlowState, E: Event> Flow<S, E> {
    /// Create a flow in the given initial state.
    ///
    /// [`FlowBuilder`](crate::flow::FlowBuilder) is the validated way to
    /// get here.
    pub fn new(initial: S, rules: Vec<Rule<S, E>>) -> Self {
        Self {
            current: initial,
            rules,
            outputs: Vec::new(),
        }
    }

    /// Get the current state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Output emitted so far, in emission order.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Drain the emitted output collected since the last call.
    pub fn take_outputs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.outputs)
    }

    /// The accept set at the current state, or `Done` on a final state.
    fn next_step(&self) -> Result<Step<E::Kind>, Fault> {
        if self.current.is_final() {
            return Ok(Step::Done);
        }

        let mut kinds = self
            .rules
            .iter()
            .filter(|r| r.applies(&self.current))
            .map(|r| r.on);

        let Some(first) = kinds.next() else {
            // Guards can produce a dead end the builder could not see.
            return Err(Fault::msg(format!(
                "flow state '{}' has no eligible rules",
                self.current.name()
            )));
        };

        let mut accept = AcceptSet::new(first);
        for kind in kinds {
            accept = accept.and(kind);
        }
        Ok(Step::Await(accept))
    }
}

impl<S: FlowState, E: Event> Process for Flow<S, E> {
    type Event = E;

    fn start(&mut self) -> Result<Step<E::Kind>, Fault> {
        self.next_step()
    }

    fn resume(&mut self, matched: Matched<E>) -> Result<Step<E::Kind>, Fault> {
        let kind = matched.kind();
        let index = self
            .rules
            .iter()
            .position(|r| r.handles(&self.current, kind))
            .ok_or_else(|| {
                Fault::msg(format!(
                    "no rule consumes '{}' in state '{}'",
                    kind.name(),
                    self.current.name()
                ))
            })?;

        let rule = &self.rules[index];
        if let Some(text) = &rule.emit {
            self.outputs.push(text.clone());
        }
        if let Some(action) = &rule.action {
            if let Some(text) = action(matched.event()) {
                self.outputs.push(text);
            }
        }
        self.current = self.rules[index].to.clone();
        self.next_step()
    }
}
