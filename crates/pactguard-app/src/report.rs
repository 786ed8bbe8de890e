use serde::{Deserialize, Serialize};

/// Stable schema identifier for the emitted report.
pub const SCHEMA_REPORT_V1: &str = "pactguard.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// One expired annotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Path of the scanned file, as given to the scanner.
    pub path: String,
    /// 1-based line number.
    pub line: u32,
    /// 0-based byte offset of the annotation token within the line.
    pub offset: u32,
    /// Always [`pactguard_types::ids::RULE_CODE`].
    pub code: String,
    /// The coded short violation message.
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanData {
    pub files_scanned: u32,
    pub lines_scanned: u64,
    pub findings_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub schema: String,
    pub tool: ToolMeta,
    pub verdict: Verdict,
    pub data: ScanData,
    pub findings: Vec<Finding>,
}

pub fn serialize_report(report: &Report) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

/// CI exit-code mapping: pass is 0, fail is 2 (1 is reserved for runtime
/// errors).
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
