//! Unidirectional data-flow primitives for resource stores.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Caller
//!    ↑           │
//!    │           └──→ Command ──→ Dispatcher
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of store state
//! - **Intent**: Caller-initiated operations and their async outcomes
//! - **Reducer**: Pure function that transforms state based on intents
//!   and returns follow-up work as explicit commands

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reducer, Transition};
pub use state::StoreState;
