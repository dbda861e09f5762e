//! Specialties resource feature module.
//!
//! Mirrors the `api/specialties` REST resource into an in-memory store
//! with loading/updating/error flags.
//!
//! # Architecture
//!
//! - `model.rs` - the record and query parameters
//! - `state.rs` - store state
//! - `intent.rs` - operation lifecycle events
//! - `reducer.rs` - state transitions
//! - `store.rs` - dispatcher and HTTP sequencing

mod intent;
mod model;
mod reducer;
mod state;
mod store;

pub use intent::{Outcome, SpecialtyIntent};
pub use model::{QueryParams, Specialty};
pub use reducer::{SpecialtyCommand, SpecialtyReducer};
pub use state::SpecialtyState;
pub use store::SpecialtyStore;
