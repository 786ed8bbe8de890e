//! Use-case layer for the pactguard CLI.
//!
//! Walks source trees, runs the line rule, aggregates findings into a
//! report, and renders it. IO stops here; the CLI above is a thin shell and
//! the crates below are pure.

#![forbid(unsafe_code)]

mod render;
mod report;
mod scan;

pub use render::{render_markdown, render_text};
pub use report::{
    Finding, Report, SCHEMA_REPORT_V1, ScanData, ToolMeta, Verdict, serialize_report,
    verdict_exit_code,
};
pub use scan::run_scan;
