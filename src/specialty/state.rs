//! State for the specialties store.

use crate::store::StoreState;

use super::model::Specialty;

/// Snapshot of the specialties resource as last seen from the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecialtyState {
    /// Cached list, replaced wholesale on every successful list or search.
    pub entities: Vec<Specialty>,
    /// The current record; empty before any fetch and after a delete.
    pub entity: Specialty,
    /// True while a read (list/search/get) is in flight.
    pub loading: bool,
    /// True while a write (create/update/patch/delete) is in flight.
    pub updating: bool,
    /// True immediately after a write completes successfully.
    pub update_success: bool,
    /// Serialized description of the most recent failure.
    pub error_message: Option<String>,
}

impl StoreState for SpecialtyState {}

impl SpecialtyState {
    /// Check if any operation is in flight.
    pub fn is_busy(&self) -> bool {
        self.loading || self.updating
    }

    /// Check if the most recent operation failed.
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
