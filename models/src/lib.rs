//! Domain models for imagegen.
//!
//! This crate contains pure data structures representing the core
//! concepts in our application. Models have no business logic - they're
//! just data that can be passed between layers.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **client-core**: Business logic operating on models
//! - **imagegen**: The API server wiring everything together
//!
//! This layered architecture keeps concerns separated and makes testing easier.

pub mod error;
pub mod generate;
pub mod hello;

pub use error::model_error::ModelError;
pub use generate::builder::GenerateRequestBuilder;
pub use generate::GenerateRequest;
pub use hello::HelloMessage;

#[cfg(test)]
mod tests;
