//! CLI entry point for pactguard.
//!
//! This module is intentionally thin: it handles argument parsing, IO, and
//! exit codes. All business logic lives in the `pactguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use pactguard_app::{render_markdown, render_text, run_scan, serialize_report, verdict_exit_code};

#[derive(Parser, Debug)]
#[command(
    name = "pactguard",
    version,
    about = "Deadline-enforcing TODO pact checker"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan files and directories for expired TODO-OR-ELSE annotations.
    Check {
        /// Files or directories to scan.
        #[arg(default_value = ".")]
        paths: Vec<Utf8PathBuf>,

        /// Where to write the JSON report (omitted: no report file).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Write a Markdown report as well.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/pactguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Run the line rule on a single physical line of text.
    Line {
        /// The line to check.
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            paths,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_check(paths, report_out, write_markdown, markdown_out),
        Commands::Line { text } => cmd_line(&text),
    }
}

fn cmd_check(
    paths: Vec<Utf8PathBuf>,
    report_out: Option<Utf8PathBuf>,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let report = run_scan(&paths)?;

    print!("{}", render_text(&report));

    if let Some(path) = report_out {
        let json = serialize_report(&report).context("serialize report")?;
        write_text_file(&path, &json).context("write report json")?;
    }
    if write_markdown {
        write_text_file(&markdown_out, &render_markdown(&report)).context("write markdown")?;
    }

    let code = verdict_exit_code(report.verdict);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_line(text: &str) -> anyhow::Result<()> {
    match pactguard_lint::check_physical_line(text)? {
        Some(diagnostic) => {
            println!("{}: {}", diagnostic.offset, diagnostic.message);
            std::process::exit(2);
        }
        None => Ok(()),
    }
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write file: {}", path))?;
    Ok(())
}
