//! Property-based tests for deadline semantics.
//!
//! Invariants covered:
//! - any deadline strictly in the past violates; any at-or-after `now` passes
//! - integral epoch inputs normalize to the same instant as direct
//!   construction from the epoch value

use crate::pact::{Deadline, deadline_phase};
use pactguard_types::PactError;
use proptest::prelude::*;
use time::{Duration, OffsetDateTime};

fn fixed_now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
}

proptest! {
    #[test]
    fn past_deadlines_always_violate(offset_secs in 1i64..=3_000_000_000i64) {
        let now = fixed_now();
        let due = now - Duration::seconds(offset_secs);
        let result = deadline_phase("pact", Some(Deadline::At(due)), now);
        prop_assert!(matches!(result, Err(PactError::Violated(_))));
    }

    #[test]
    fn future_or_present_deadlines_never_violate(offset_secs in 0i64..=3_000_000_000i64) {
        let now = fixed_now();
        let due = now + Duration::seconds(offset_secs);
        prop_assert!(deadline_phase("pact", Some(Deadline::At(due)), now).is_ok());
    }

    #[test]
    fn epoch_round_trips_to_the_same_instant(secs in -2_000_000_000i64..=4_000_000_000i64) {
        let resolved = Deadline::from(secs).resolve().unwrap();
        let direct = OffsetDateTime::from_unix_timestamp(secs).unwrap();
        prop_assert_eq!(resolved, direct);
    }
}
