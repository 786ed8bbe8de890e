//! Physical-line annotation rule.
//!
//! Scans one line of source text for the annotation
//! `TODO-OR-ELSE(<deadline>)<description>` (token case-insensitive, deadline
//! delimited by the parentheses) and runs the deadline check on it. Only a
//! broken pact produces a diagnostic; an unparseable deadline expression
//! propagates as an error for the caller to surface.

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use pactguard_core::{Deadline, check_deadline};
use pactguard_types::{PactError, ids};
use regex::Regex;

/// Rule name reported to lint runners.
pub const NAME: &str = "todo_or_else";
/// Rule semantic version reported to lint runners.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static RX_TODO_OR_ELSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bTODO-OR-ELSE\(([^)]+)\)(.*)$").expect("annotation pattern is valid")
});

/// A diagnostic for one expired annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Byte offset of the annotation token within the line.
    pub offset: usize,
    /// `DIE001 Pact '<text>' violated because <reason>`
    pub message: String,
}

/// Check one physical line.
///
/// `Ok(None)` when the line carries no annotation or the deadline has not
/// passed; `Ok(Some(_))` when the pact is broken. Usage and validation
/// errors (e.g. an unparseable deadline expression) are the caller's
/// concern and come back as `Err`.
pub fn check_physical_line(line: &str) -> Result<Option<Diagnostic>, PactError> {
    let Some(caps) = RX_TODO_OR_ELSE.captures(line) else {
        return Ok(None);
    };
    let offset = caps.get(0).map_or(0, |m| m.start());
    let deadline = Deadline::from(&caps[1]);
    let pact = caps[2].trim();

    match check_deadline(pact, deadline) {
        Ok(()) => Ok(None),
        Err(PactError::Violated(violation)) => Ok(Some(Diagnostic {
            offset,
            message: format!("{} {}", ids::RULE_CODE, violation.short()),
        })),
        Err(other) => Err(other),
    }
}
