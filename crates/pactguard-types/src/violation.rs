use std::fmt;

/// Record of a broken pact.
///
/// Constructed only by the evaluator once a check has failed. Immutable:
/// the pact text is carried verbatim and the reason is a fully formed
/// sentence fragment ending in a period (e.g. `you agreed to complete this
/// TODO by 2021-09-30.`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PactViolation {
    pact: String,
    reason: String,
}

impl PactViolation {
    pub fn new(pact: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            pact: pact.into(),
            reason: reason.into(),
        }
    }

    /// The task description the pact was made over.
    pub fn pact(&self) -> &str {
        &self.pact
    }

    /// Why the pact is considered violated.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// One-line rendering used by linter diagnostics.
    ///
    /// The shape `Pact '<pact>' violated because <reason>` is a stable
    /// contract; the reason already supplies the terminal period.
    pub fn short(&self) -> String {
        format!("Pact '{}' violated because {}", self.pact, self.reason)
    }
}

/// The long admonition form, suitable for a human reading full output.
impl fmt::Display for PactViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "You made a pact to complete this TODO: '{}'", self.pact)?;
        writeln!(f, "The time has come because {}", self.reason)?;
        write!(f, "Complete this TODO or face the consequences.")
    }
}

impl std::error::Error for PactViolation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_is_stable() {
        let v = PactViolation::new(
            "this will fail",
            "you agreed to complete this TODO when the condition was True and it has come to pass.",
        );
        assert_eq!(
            v.short(),
            "Pact 'this will fail' violated because you agreed to complete this TODO \
             when the condition was True and it has come to pass."
        );
    }

    #[test]
    fn long_form_embeds_pact_and_reason() {
        let v = PactViolation::new("ship it", "you agreed to complete this TODO by 2021-09-30.");
        let long = v.to_string();
        assert!(long.contains("You made a pact to complete this TODO: 'ship it'"));
        assert!(long.contains("The time has come because you agreed to complete this TODO by 2021-09-30."));
        assert!(long.ends_with("Complete this TODO or face the consequences."));
    }

    #[test]
    fn accessors_return_stored_text() {
        let v = PactViolation::new("a", "b.");
        assert_eq!(v.pact(), "a");
        assert_eq!(v.reason(), "b.");
    }
}
