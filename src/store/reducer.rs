//! Reducer trait for store state transitions.

use super::intent::Intent;
use super::state::StoreState;

/// Result of a single state transition.
///
/// Carries the next state plus any follow-up command the transition
/// schedules. The dispatcher, not the reducer, executes commands, so
/// sequencing stays testable.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, C> {
    /// The state after the transition.
    pub state: S,
    /// Follow-up work scheduled by the transition, if any.
    pub command: Option<C>,
}

impl<S, C> Transition<S, C> {
    /// Transition with no follow-up work.
    pub fn to(state: S) -> Self {
        Self {
            state,
            command: None,
        }
    }

    /// Transition that schedules a command.
    pub fn with(state: S, command: C) -> Self {
        Self {
            state,
            command: Some(command),
        }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> Transition.
/// Side effects are never performed here; they are declared as
/// commands for the dispatcher to run.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Follow-up work a transition can schedule.
    type Command;

    /// Process an intent and return the transition.
    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Command>;
}
