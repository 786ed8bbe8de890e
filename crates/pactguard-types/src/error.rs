use crate::violation::PactViolation;
use thiserror::Error;

/// Library error taxonomy.
///
/// `Violated` is the expected-path failure callers routinely match on; the
/// other two variants are caller mistakes and always fatal to the call.
#[derive(Debug, Error)]
pub enum PactError {
    /// Neither a deadline nor a condition was supplied.
    #[error(
        "invalid arguments: specify at least one of (deadline, condition) \
         or we cannot bind you to this pact"
    )]
    Unbound,

    /// A deadline input could not be normalized to a timestamp.
    #[error("invalid date: {input}")]
    InvalidDate { input: String },

    /// The pact is broken.
    #[error("{0}")]
    Violated(#[from] PactViolation),
}

impl PactError {
    /// Borrow the violation record, if this is a broken pact.
    pub fn violation(&self) -> Option<&PactViolation> {
        match self {
            PactError::Violated(v) => Some(v),
            _ => None,
        }
    }
}
