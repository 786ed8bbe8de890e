//! The scan use case: walk the given paths, run the line rule on every
//! physical line, aggregate findings into a report.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use pactguard_lint::check_physical_line;
use pactguard_types::ids;
use walkdir::WalkDir;

use crate::report::{Finding, Report, SCHEMA_REPORT_V1, ScanData, ToolMeta, Verdict};

/// Scan the given files and directories.
///
/// Directories are walked recursively; files that are not valid UTF-8 are
/// skipped (not source text). An annotation whose deadline expression does
/// not parse aborts the scan with an error naming the file and line;
/// validation failures are never swallowed into a clean verdict.
pub fn run_scan(paths: &[Utf8PathBuf]) -> anyhow::Result<Report> {
    let mut findings: Vec<Finding> = Vec::new();
    let mut files_scanned = 0u32;
    let mut lines_scanned = 0u64;

    for root in paths {
        for entry in WalkDir::new(root.as_std_path()) {
            let entry = entry.with_context(|| format!("walk {root}"))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = Utf8PathBuf::from_path_buf(entry.into_path())
                .map_err(|p| anyhow::anyhow!("non-UTF-8 path: {}", p.display()))?;

            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                // Binary content is not scannable source text.
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => continue,
                Err(e) => return Err(e).with_context(|| format!("read {path}")),
            };

            files_scanned += 1;
            scan_text(&path, &text, &mut findings, &mut lines_scanned)?;
        }
    }

    // Deterministic ordering regardless of walk order.
    findings.sort_by(compare_findings);

    let verdict = if findings.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    Ok(Report {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "pactguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        verdict,
        data: ScanData {
            files_scanned,
            lines_scanned,
            findings_total: findings.len() as u32,
        },
        findings,
    })
}

fn scan_text(
    path: &Utf8Path,
    text: &str,
    out: &mut Vec<Finding>,
    lines_scanned: &mut u64,
) -> anyhow::Result<()> {
    for (idx, line) in text.lines().enumerate() {
        *lines_scanned += 1;
        let diagnostic = check_physical_line(line)
            .with_context(|| format!("invalid annotation at {}:{}", path, idx + 1))?;
        if let Some(d) = diagnostic {
            out.push(Finding {
                path: path.to_string(),
                line: (idx + 1) as u32,
                offset: d.offset as u32,
                code: ids::RULE_CODE.to_string(),
                message: d.message,
            });
        }
    }
    Ok(())
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    a.path
        .cmp(&b.path)
        .then(a.line.cmp(&b.line))
        .then(a.offset.cmp(&b.offset))
}
