//! Reducer for the specialties store.

use crate::store::{Reducer, Transition};

use super::intent::{Outcome, SpecialtyIntent};
use super::model::Specialty;
use super::state::SpecialtyState;

/// Follow-up work scheduled by specialty transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialtyCommand {
    /// Re-fetch the full list so the cached list matches backend state.
    RefreshList,
}

/// Reducer for specialty state transitions.
pub struct SpecialtyReducer;

impl Reducer for SpecialtyReducer {
    type State = SpecialtyState;
    type Intent = SpecialtyIntent;
    type Command = SpecialtyCommand;

    fn reduce(
        state: Self::State,
        intent: Self::Intent,
    ) -> Transition<SpecialtyState, SpecialtyCommand> {
        match intent {
            // Starting a read clears any stale error and success flag.
            SpecialtyIntent::FetchList(Outcome::Pending)
            | SpecialtyIntent::Search(Outcome::Pending)
            | SpecialtyIntent::FetchOne(Outcome::Pending) => Transition::to(SpecialtyState {
                error_message: None,
                update_success: false,
                loading: true,
                ..state
            }),

            SpecialtyIntent::Create(Outcome::Pending)
            | SpecialtyIntent::Update(Outcome::Pending)
            | SpecialtyIntent::PartialUpdate(Outcome::Pending)
            | SpecialtyIntent::Delete(Outcome::Pending) => Transition::to(SpecialtyState {
                error_message: None,
                update_success: false,
                updating: true,
                ..state
            }),

            // The cached list is replaced wholesale, never merged.
            SpecialtyIntent::FetchList(Outcome::Fulfilled(entities))
            | SpecialtyIntent::Search(Outcome::Fulfilled(entities)) => {
                Transition::to(SpecialtyState {
                    loading: false,
                    entities,
                    ..state
                })
            }

            SpecialtyIntent::FetchOne(Outcome::Fulfilled(entity)) => {
                Transition::to(SpecialtyState {
                    loading: false,
                    entity,
                    ..state
                })
            }

            // The server representation wins over the locally sent one,
            // so server-computed fields are reflected.
            SpecialtyIntent::Create(Outcome::Fulfilled(entity))
            | SpecialtyIntent::Update(Outcome::Fulfilled(entity))
            | SpecialtyIntent::PartialUpdate(Outcome::Fulfilled(entity)) => Transition::with(
                SpecialtyState {
                    updating: false,
                    loading: false,
                    update_success: true,
                    entity,
                    ..state
                },
                SpecialtyCommand::RefreshList,
            ),

            SpecialtyIntent::Delete(Outcome::Fulfilled(())) => Transition::with(
                SpecialtyState {
                    updating: false,
                    update_success: true,
                    entity: Specialty::default(),
                    ..state
                },
                SpecialtyCommand::RefreshList,
            ),

            SpecialtyIntent::FetchList(Outcome::Rejected(message))
            | SpecialtyIntent::Search(Outcome::Rejected(message))
            | SpecialtyIntent::FetchOne(Outcome::Rejected(message)) => {
                Transition::to(SpecialtyState {
                    loading: false,
                    error_message: Some(message),
                    ..state
                })
            }

            SpecialtyIntent::Create(Outcome::Rejected(message))
            | SpecialtyIntent::Update(Outcome::Rejected(message))
            | SpecialtyIntent::PartialUpdate(Outcome::Rejected(message))
            | SpecialtyIntent::Delete(Outcome::Rejected(message)) => {
                Transition::to(SpecialtyState {
                    updating: false,
                    error_message: Some(message),
                    ..state
                })
            }

            SpecialtyIntent::Reset => Transition::to(SpecialtyState::default()),
        }
    }
}
