//! Dispatcher owning the specialties state.

use std::sync::{Arc, RwLock};

use crate::api::{ApiError, SpecialtyApi};
use crate::store::Reducer;

use super::intent::{Outcome, SpecialtyIntent};
use super::model::{QueryParams, Specialty};
use super::reducer::{SpecialtyCommand, SpecialtyReducer};
use super::state::SpecialtyState;

/// Thread-safe store for the specialties resource.
///
/// Owns the single shared state record and translates operation calls
/// into HTTP requests plus reducer transitions. Many readers can
/// snapshot state concurrently; each transition takes the write lock
/// briefly at a request or response boundary.
///
/// Operations run to completion once dispatched. A later operation does
/// not cancel an earlier one, so racing responses resolve
/// last-resolved-wins.
#[derive(Clone)]
pub struct SpecialtyStore {
    state: Arc<RwLock<SpecialtyState>>,
    api: SpecialtyApi,
}

impl SpecialtyStore {
    /// Create a store backed by the given API client.
    pub fn new(api: SpecialtyApi) -> Self {
        Self {
            state: Arc::new(RwLock::new(SpecialtyState::default())),
            api,
        }
    }

    /// Get a snapshot of the current state.
    ///
    /// This is cheap because the state is Clone. Multiple readers can
    /// call this concurrently.
    pub fn state(&self) -> SpecialtyState {
        self.state.read().expect("state lock poisoned").clone()
    }

    /// Apply an intent through the reducer, returning any scheduled command.
    fn dispatch(&self, intent: SpecialtyIntent) -> Option<SpecialtyCommand> {
        let mut guard = self.state.write().expect("state lock poisoned");
        let transition = SpecialtyReducer::reduce(guard.clone(), intent);
        *guard = transition.state;
        transition.command
    }

    /// Execute follow-up work scheduled by a transition.
    ///
    /// A failed refresh folds into state like any other list fetch;
    /// it is not re-propagated to the operation that scheduled it.
    async fn run_command(&self, command: Option<SpecialtyCommand>) {
        match command {
            Some(SpecialtyCommand::RefreshList) => {
                let _ = self.get_entities(&QueryParams::default()).await;
            }
            None => {}
        }
    }

    /// Fetch the full list of specialties.
    pub async fn get_entities(&self, _params: &QueryParams) -> Result<Vec<Specialty>, ApiError> {
        self.dispatch(SpecialtyIntent::FetchList(Outcome::Pending));
        match self.api.list().await {
            Ok(entities) => {
                tracing::debug!(count = entities.len(), "Specialty list fetched");
                self.dispatch(SpecialtyIntent::FetchList(Outcome::Fulfilled(
                    entities.clone(),
                )));
                Ok(entities)
            }
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "List fetch failed");
                self.dispatch(SpecialtyIntent::FetchList(Outcome::Rejected(
                    err.to_string(),
                )));
                Err(err)
            }
        }
    }

    /// Query the search endpoint and replace the cached list with the hits.
    pub async fn search_entities(
        &self,
        query: &str,
        _params: &QueryParams,
    ) -> Result<Vec<Specialty>, ApiError> {
        self.dispatch(SpecialtyIntent::Search(Outcome::Pending));
        match self.api.search(query).await {
            Ok(entities) => {
                tracing::debug!(query = %query, hits = entities.len(), "Search completed");
                self.dispatch(SpecialtyIntent::Search(Outcome::Fulfilled(
                    entities.clone(),
                )));
                Ok(entities)
            }
            Err(err) => {
                tracing::warn!(query = %query, error = %err, "Search failed");
                self.dispatch(SpecialtyIntent::Search(Outcome::Rejected(err.to_string())));
                Err(err)
            }
        }
    }

    /// Fetch a single specialty by id.
    pub async fn get_entity(&self, id: i64) -> Result<Specialty, ApiError> {
        self.dispatch(SpecialtyIntent::FetchOne(Outcome::Pending));
        match self.api.get(id).await {
            Ok(entity) => {
                self.dispatch(SpecialtyIntent::FetchOne(Outcome::Fulfilled(
                    entity.clone(),
                )));
                Ok(entity)
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "Fetch failed");
                self.dispatch(SpecialtyIntent::FetchOne(Outcome::Rejected(
                    err.to_string(),
                )));
                Err(err)
            }
        }
    }

    /// Create a specialty, then re-fetch the list.
    pub async fn create_entity(&self, entity: Specialty) -> Result<Specialty, ApiError> {
        self.dispatch(SpecialtyIntent::Create(Outcome::Pending));
        match self.api.create(&entity).await {
            Ok(created) => {
                tracing::info!(id = ?created.id, "Specialty created");
                let command =
                    self.dispatch(SpecialtyIntent::Create(Outcome::Fulfilled(created.clone())));
                self.run_command(command).await;
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Create failed");
                self.dispatch(SpecialtyIntent::Create(Outcome::Rejected(err.to_string())));
                Err(err)
            }
        }
    }

    /// Replace a specialty, then re-fetch the list.
    pub async fn update_entity(&self, entity: Specialty) -> Result<Specialty, ApiError> {
        self.dispatch(SpecialtyIntent::Update(Outcome::Pending));
        match self.api.update(&entity).await {
            Ok(updated) => {
                tracing::info!(id = ?updated.id, "Specialty updated");
                let command =
                    self.dispatch(SpecialtyIntent::Update(Outcome::Fulfilled(updated.clone())));
                self.run_command(command).await;
                Ok(updated)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Update failed");
                self.dispatch(SpecialtyIntent::Update(Outcome::Rejected(err.to_string())));
                Err(err)
            }
        }
    }

    /// Patch a specialty, then re-fetch the list.
    pub async fn partial_update_entity(&self, entity: Specialty) -> Result<Specialty, ApiError> {
        self.dispatch(SpecialtyIntent::PartialUpdate(Outcome::Pending));
        match self.api.partial_update(&entity).await {
            Ok(patched) => {
                tracing::info!(id = ?patched.id, "Specialty patched");
                let command = self.dispatch(SpecialtyIntent::PartialUpdate(Outcome::Fulfilled(
                    patched.clone(),
                )));
                self.run_command(command).await;
                Ok(patched)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Patch failed");
                self.dispatch(SpecialtyIntent::PartialUpdate(Outcome::Rejected(
                    err.to_string(),
                )));
                Err(err)
            }
        }
    }

    /// Delete a specialty, then re-fetch the list.
    pub async fn delete_entity(&self, id: i64) -> Result<(), ApiError> {
        self.dispatch(SpecialtyIntent::Delete(Outcome::Pending));
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Specialty deleted");
                let command = self.dispatch(SpecialtyIntent::Delete(Outcome::Fulfilled(())));
                self.run_command(command).await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "Delete failed");
                self.dispatch(SpecialtyIntent::Delete(Outcome::Rejected(err.to_string())));
                Err(err)
            }
        }
    }

    /// Drop all cached data and flags.
    pub fn reset(&self) {
        self.dispatch(SpecialtyIntent::Reset);
    }
}
