//! Pure pact evaluation (no IO).
//!
//! Input: a pact description plus a deadline and/or a condition.
//! Output: `Ok(())`, or a typed error carrying the violation record.

#![forbid(unsafe_code)]

mod date;
mod pact;

pub use pact::{Condition, Deadline, check_condition, check_deadline, evaluate, wrap};
pub use pactguard_types::{PactError, PactViolation};

#[cfg(test)]
mod props;
