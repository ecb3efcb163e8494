//! Human-readable suite report.
//!
//! Passing results are green, failing results are red. Colors are only
//! emitted when enabled, so the same writer works for pipes and files.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::config::SuiteSettings;
use crate::harness::runner::{CaseResult, SuiteReport};

const RULE: &str = "===========================================";
const THIN_RULE: &str = "-------------------------------------------";

/// Write the per-case section followed by the summary.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &SuiteReport,
    settings: &SuiteSettings,
) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "URL Matcher Test Suite")?;
    writeln!(out, "{}", RULE)?;

    for result in &report.results {
        write_case(out, result, settings)?;
    }

    write_summary(out, report, settings.color)
}

/// Write one case block.
pub fn write_case<W: Write>(
    out: &mut W,
    result: &CaseResult,
    settings: &SuiteSettings,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[TEST] {}", result.name)?;

    if settings.verbose {
        let detail = &result.detail;
        if !detail.target.is_empty() {
            writeln!(out, "  URL:     {}", detail.target)?;
        }
        if !detail.pattern.is_empty() {
            writeln!(out, "  Pattern: {}", detail.pattern)?;
        }
        if let Some(matched) = detail.matched {
            writeln!(out, "  Matched: {}", matched)?;
        }
        if !detail.params.is_empty() {
            writeln!(out, "  Parameters:")?;
            for name in detail.params.names() {
                writeln!(out, "    {} = {}", name, detail.params.get_all(name).join(","))?;
            }
        }
        if let Some(note) = &detail.note {
            writeln!(out, "  Note:    {}", note)?;
        }
    }

    writeln!(
        out,
        "  Result:  {}",
        paint(
            &format!("{} ({:.2}ms)", status(result.passed), millis(result)),
            result.passed,
            settings.color
        )
    )?;
    if let Some(error) = &result.error {
        writeln!(out, "  Error:   {}", error)?;
    }
    if let Some(failure) = &result.failure {
        writeln!(out, "  Reason:  {}", paint(failure, false, settings.color))?;
    }
    Ok(())
}

/// Write the closing table and totals.
pub fn write_summary<W: Write>(out: &mut W, report: &SuiteReport, color: bool) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "TEST SUMMARY")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;

    let width = report.results.iter().map(|r| r.name.chars().count()).max().unwrap_or(0) + 2;
    for result in &report.results {
        writeln!(
            out,
            "  {} {:<width$}{:.2}ms",
            paint(&format!("[{}]", status(result.passed)), result.passed, color),
            result.name,
            millis(result),
            width = width
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", THIN_RULE)?;
    writeln!(out, "Total Tests:  {}", report.total())?;
    writeln!(out, "{}", paint(&format!("Passed:       {}", report.passed()), true, color))?;
    writeln!(out, "{}", paint(&format!("Failed:       {}", report.failed()), false, color))?;
    writeln!(
        out,
        "Total Time:   {:.2}ms",
        report.total_elapsed.as_secs_f64() * 1000.0
    )?;
    writeln!(out)?;

    if report.all_passed() {
        writeln!(out, "{}", paint("*** ALL TESTS PASSED ***", true, color))
    } else {
        writeln!(out, "{}", paint("*** SOME TESTS FAILED ***", false, color))
    }
}

fn status(passed: bool) -> &'static str {
    if passed { "PASS" } else { "FAIL" }
}

fn millis(result: &CaseResult) -> f64 {
    result.elapsed.as_secs_f64() * 1000.0
}

/// Color `text` green for success or red for failure when `color` is set.
pub fn paint(text: &str, passed: bool, color: bool) -> String {
    match (color, passed) {
        (false, _) => text.to_string(),
        (true, true) => text.green().to_string(),
        (true, false) => text.red().to_string(),
    }
}
