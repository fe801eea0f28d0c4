//! Shared plumbing for the imagegen workspace.
//!
//! This crate holds the small pieces every other crate leans on:
//!
//! - **ErrorLocation**: file/line/column capture so error values record
//!   where they were raised without backtraces.
//! - **HttpStatusCode**: status categorization for errors that relay an
//!   upstream HTTP status.
//!
//! No business logic lives here.

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
