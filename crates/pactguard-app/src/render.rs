use crate::report::{Report, Verdict};

/// Plain-text rendering: one `path:line:offset: message` line per finding,
/// then a one-line summary.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    for f in &report.findings {
        out.push_str(&format!(
            "{}:{}:{}: {}\n",
            f.path, f.line, f.offset, f.message
        ));
    }

    if report.findings.is_empty() {
        out.push_str(&format!(
            "No findings ({} files, {} lines scanned).\n",
            report.data.files_scanned, report.data.lines_scanned
        ));
    } else {
        out.push_str(&format!(
            "{} broken pact(s) across {} files.\n",
            report.data.findings_total, report.data.files_scanned
        ));
    }

    out
}

pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("# Pactguard report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Findings: {}\n- Scanned: {} files, {} lines\n\n",
        verdict, report.data.findings_total, report.data.files_scanned, report.data.lines_scanned
    ));

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");
    for f in &report.findings {
        out.push_str(&format!(
            "- `{}` — {} (`{}`:{})\n",
            f.code, f.message, f.path, f.line
        ));
    }

    out
}
