//! The pact model and the four evaluation operations.
//!
//! Everything here is stateless: callers hand in the inputs, the functions
//! sample the clock where needed and return. The phase helpers take an
//! explicit `now` so tests can pin the instant; the public surface always
//! samples fresh.

use std::fmt;

use pactguard_types::{PactError, PactViolation};
use time::OffsetDateTime;

use crate::date;

/// A point in time a pact must be completed by.
///
/// Heterogeneous inputs are tagged up front instead of sniffed at check
/// time; normalization is a single exhaustive match in [`Deadline::resolve`].
#[derive(Clone, Debug, PartialEq)]
pub enum Deadline {
    /// An already-structured timestamp, passed through unchanged.
    At(OffsetDateTime),
    /// A free-form date string, parsed by the grammars in the `date` module.
    Text(String),
    /// Seconds since the Unix epoch, integral or fractional.
    Epoch(f64),
}

impl Deadline {
    /// Normalize to a concrete timestamp.
    pub fn resolve(&self) -> Result<OffsetDateTime, PactError> {
        match self {
            Deadline::At(t) => Ok(*t),
            Deadline::Text(s) => date::parse_text(s),
            Deadline::Epoch(secs) => date::from_epoch_seconds(*secs),
        }
    }
}

impl From<OffsetDateTime> for Deadline {
    fn from(t: OffsetDateTime) -> Self {
        Deadline::At(t)
    }
}

impl From<&str> for Deadline {
    fn from(s: &str) -> Self {
        Deadline::Text(s.to_string())
    }
}

impl From<String> for Deadline {
    fn from(s: String) -> Self {
        Deadline::Text(s)
    }
}

impl From<f64> for Deadline {
    fn from(secs: f64) -> Self {
        Deadline::Epoch(secs)
    }
}

impl From<i64> for Deadline {
    fn from(secs: i64) -> Self {
        Deadline::Epoch(secs as f64)
    }
}

/// A boolean trigger that marks a pact violated when it comes true.
///
/// `Check` boxes an `FnOnce`: a predicate is invoked at most once per
/// evaluation, and the type makes a second invocation impossible.
pub enum Condition {
    Flag(bool),
    Check(Box<dyn FnOnce() -> bool>),
}

impl Condition {
    /// Wrap a zero-argument predicate.
    pub fn check(predicate: impl FnOnce() -> bool + 'static) -> Self {
        Condition::Check(Box::new(predicate))
    }
}

impl From<bool> for Condition {
    fn from(flag: bool) -> Self {
        Condition::Flag(flag)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            Condition::Check(_) => f.write_str("Check(..)"),
        }
    }
}

/// Combined entrypoint: deadline first, then condition.
///
/// At least one of the two must be supplied; otherwise the call is rejected
/// with [`PactError::Unbound`] before any check runs. A deadline violation
/// short-circuits, so the condition (and any predicate) is never evaluated
/// once the deadline has passed.
pub fn evaluate(
    pact: &str,
    deadline: Option<Deadline>,
    condition: Option<Condition>,
) -> Result<(), PactError> {
    if deadline.is_none() && condition.is_none() {
        return Err(PactError::Unbound);
    }
    deadline_phase(pact, deadline, OffsetDateTime::now_utc())?;
    condition_phase(pact, condition)
}

/// Deadline-only shorthand. Unlike [`evaluate`] there is no
/// at-least-one-condition precondition.
pub fn check_deadline(pact: &str, deadline: impl Into<Deadline>) -> Result<(), PactError> {
    deadline_phase(pact, Some(deadline.into()), OffsetDateTime::now_utc())
}

/// Condition-only shorthand.
pub fn check_condition(pact: &str, condition: impl Into<Condition>) -> Result<(), PactError> {
    condition_phase(pact, Some(condition.into()))
}

/// Pass-through wrapper: runs the pact check now, at wrap time, and on
/// success returns `func` unchanged. A violated pact therefore prevents the
/// wrapped function from being produced, not from being called.
pub fn wrap<F>(
    pact: &str,
    deadline: Option<Deadline>,
    condition: Option<Condition>,
    func: F,
) -> Result<F, PactError> {
    evaluate(pact, deadline, condition)?;
    Ok(func)
}

/// Violated iff `now` is strictly after the resolved deadline; a deadline
/// exactly equal to `now` still passes.
pub(crate) fn deadline_phase(
    pact: &str,
    deadline: Option<Deadline>,
    now: OffsetDateTime,
) -> Result<(), PactError> {
    let Some(deadline) = deadline else {
        return Ok(());
    };
    let due = deadline.resolve()?;
    if now > due {
        return Err(PactViolation::new(
            pact,
            format!(
                "you agreed to complete this TODO by {}.",
                date::calendar_date(due)
            ),
        )
        .into());
    }
    Ok(())
}

pub(crate) fn condition_phase(
    pact: &str,
    condition: Option<Condition>,
) -> Result<(), PactError> {
    match condition {
        None | Some(Condition::Flag(false)) => Ok(()),
        Some(Condition::Flag(true)) => Err(PactViolation::new(
            pact,
            "you agreed to complete this TODO when the condition was True \
             and it has come to pass.",
        )
        .into()),
        Some(Condition::Check(predicate)) => {
            if predicate() {
                Err(PactViolation::new(
                    pact,
                    "you agreed to complete this TODO when the function returned True \
                     and it has come to pass.",
                )
                .into())
            } else {
                Ok(())
            }
        }
    }
}
