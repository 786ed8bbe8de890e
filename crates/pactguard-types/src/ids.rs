//! Stable identifiers for diagnostics.
//!
//! `RULE_CODE` is prefixed to every short violation message emitted by the
//! line rule; external tooling matches on it, so it must never change.

pub const RULE_CODE: &str = "DIE001";
