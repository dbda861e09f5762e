//! Client-side state management for a specialties REST resource.
//!
//! Translates the resource intents (list, search, get, create, update,
//! partial-update, delete) into HTTP calls against a conventional REST
//! backend and folds each asynchronous outcome into a shared in-memory
//! state record.
//!
//! # Architecture
//!
//! ```text
//! caller ──→ SpecialtyStore ──→ SpecialtyApi ──→ backend
//!               │      ↑
//!               ▼      │
//!        SpecialtyReducer (pure transitions + follow-up commands)
//! ```
//!
//! - **State**: snapshot of the resource plus in-flight/error flags
//! - **Intent**: operation lifecycle events (pending/fulfilled/rejected)
//! - **Reducer**: pure function producing the next state and, for
//!   list-mutating operations, a command to re-fetch the full list

pub mod api;
pub mod config;
pub mod specialty;
pub mod store;
pub mod telemetry;

pub use api::{ApiError, SpecialtyApi};
pub use specialty::{Specialty, SpecialtyState, SpecialtyStore};
