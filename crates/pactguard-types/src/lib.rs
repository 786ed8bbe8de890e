//! Stable DTOs shared across the pactguard workspace.
//!
//! This crate is intentionally boring:
//! - the violation record produced when a pact is broken
//! - the library error taxonomy
//! - stable diagnostic codes

#![forbid(unsafe_code)]

pub mod error;
pub mod ids;
pub mod violation;

pub use error::PactError;
pub use violation::PactViolation;
