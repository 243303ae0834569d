//! Terminal presenter.
//!
//! Renders a [`Report`] to stdout: one message per finding, a summary
//! table, and the pass/fail banner. Styling goes through the `console`
//! crate, so `--no-color` and non-tty output degrade to plain text.

use console::style;

use crate::engine::{Finding, FindingKind};

use super::Report;

/// Print the full report to stdout.
pub fn print_report(report: &Report) {
    for finding in &report.findings {
        println!("{}", format_finding(finding));
    }

    print_summary(report);
    print_verdict(report);
}

/// Render one finding as its human-readable message.
#[must_use]
pub fn format_finding(finding: &Finding) -> String {
    let mut message = format!("{} {}\n", format_title(finding), kind_phrase(finding.kind));
    for (i, occurrence) in finding.occurrences.iter().enumerate() {
        message.push_str(&format!("{}.)\n\t {}\n", i + 1, style(occurrence).red()));
    }
    message
}

/// Participant paths joined with commas and "and".
fn format_title(finding: &Finding) -> String {
    let names: Vec<String> = finding
        .files
        .iter()
        .map(|p| style(p.display()).yellow().to_string())
        .collect();

    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

fn kind_phrase(kind: FindingKind) -> String {
    match kind {
        FindingKind::IdenticalFile => format!("are {} !!!", style("IDENTICAL").red().bold()),
        FindingKind::InterFileDuplicate => "repeat the following:".to_string(),
        FindingKind::IntraFileDuplicate => "repeats the following within the file:".to_string(),
    }
}

fn print_summary(report: &Report) {
    let summary = &report.summary;
    println!();
    println!("{}", style("Summary").bold().underlined());
    print_row("Files analyzed", summary.files_analyzed);
    print_row("Lines analyzed", summary.lines_analyzed);
    print_row("Duplicate files", summary.duplicate_files);
    print_row("Duplicate lines", summary.duplicate_lines);
    print_row("Duplicate blocks", summary.duplicate_blocks);
    print_row(
        "Duplicate blocks within files",
        summary.duplicate_blocks_within_files,
    );
    println!();
}

fn print_row(label: &str, value: usize) {
    println!("  {:<32}{}", label, style(value).cyan());
}

fn print_verdict(report: &Report) {
    let verdict = if report.pass {
        style(format!(
            "You passed your threshold of {}% with a score of {}%",
            report.threshold, report.score
        ))
        .green()
        .bold()
    } else {
        style(format!(
            "You failed your threshold of {}% with a score of {}%",
            report.threshold, report.score
        ))
        .red()
        .bold()
    };
    println!("{verdict}");
}
