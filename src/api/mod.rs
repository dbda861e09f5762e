//! HTTP boundary for the specialties REST backend.

mod client;
mod error;

pub use client::SpecialtyApi;
pub use error::ApiError;
