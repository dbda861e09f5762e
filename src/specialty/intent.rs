//! Intents for the specialties store.

use crate::store::Intent;

use super::model::Specialty;

/// Lifecycle of a single asynchronous operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The request was dispatched and is in flight.
    Pending,
    /// The backend answered; carries the response payload.
    Fulfilled(T),
    /// The request failed; carries the serialized error description.
    Rejected(String),
}

/// Intents that can be dispatched to the specialties store.
///
/// One variant per operation kind; the payload type encodes what a
/// successful response carries.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecialtyIntent {
    /// Fetch the full list.
    FetchList(Outcome<Vec<Specialty>>),

    /// Query the search endpoint.
    Search(Outcome<Vec<Specialty>>),

    /// Fetch a single record by id.
    FetchOne(Outcome<Specialty>),

    /// Create a new record.
    Create(Outcome<Specialty>),

    /// Replace an existing record.
    Update(Outcome<Specialty>),

    /// Patch an existing record; merge semantics are the backend's.
    PartialUpdate(Outcome<Specialty>),

    /// Delete a record. The response payload, if any, is ignored.
    Delete(Outcome<()>),

    /// Restore the initial state.
    Reset,
}

impl Intent for SpecialtyIntent {}
