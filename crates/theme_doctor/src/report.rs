//! Report rendering: summary and detailed text, Markdown, and JSON.
//!
//! Suggestions are computed here, on demand per failing check; audit results
//! carry measurements only.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use theme_doctor_color::{Rgb, contrast_ratio};

use crate::adjust::suggest_adjustment;
use crate::audit::{AuditSession, SessionError, SessionSummary, ThemeAuditResult};
use crate::check::{CheckCategory, ContrastCheck};
use crate::error::Result;
use crate::util::{now_utc_iso, write_string};

const TEXT_REPORT_FILE: &str = "accessibility-audit-report.txt";
const MARKDOWN_REPORT_FILE: &str = "ACCESSIBILITY_AUDIT_REPORT.md";
const JSON_REPORT_FILE: &str = "accessibility-audit-report.json";

fn heavy_rule() -> String {
    "=".repeat(80)
}

fn light_rule() -> String {
    "-".repeat(80)
}

fn status_label(pass: bool) -> &'static str {
    if pass { "✓ PASS" } else { "✗ FAIL" }
}

/// Concise session overview: totals, percentages, and a quick-reference
/// table ordered by theme name.
#[must_use]
pub fn render_summary(session: &AuditSession) -> String {
    let summary = session.summary();
    let mut lines = Vec::new();

    lines.push(heavy_rule());
    lines.push("WCAG AA ACCESSIBILITY AUDIT - SUMMARY".to_string());
    lines.push(heavy_rule());
    lines.push(String::new());
    lines.push(format!("Total themes audited: {}", summary.total));
    lines.push(format!(
        "Passing: {} ({}%)",
        summary.passing, summary.passing_percent
    ));
    lines.push(format!(
        "Failing: {} ({}%)",
        summary.failing, summary.failing_percent
    ));
    lines.push(String::new());

    lines.push("QUICK REFERENCE".to_string());
    lines.push(light_rule());
    for result in &session.results {
        lines.push(format!(
            "{:<8} {:<35} ({}/{})",
            status_label(result.overall_pass),
            result.theme_name,
            result.passed_count(),
            result.checks.len()
        ));
    }

    if !session.errors.is_empty() {
        lines.push(String::new());
        lines.push("UNREADABLE THEMES".to_string());
        lines.push(light_rule());
        for error in &session.errors {
            lines.push(format!("✗ {}: {}", error.source, error.message));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

fn failure_detail_lines(check: &ContrastCheck, lines: &mut Vec<String>) {
    lines.push(format!("    • {}", check.description));
    lines.push(format!("      Foreground: {}", check.foreground));
    lines.push(format!("      Background: {}", check.background));
    lines.push(format!(
        "      Ratio: {:.2}:1 (required: {:.1}:1)",
        check.ratio, check.requirement
    ));
    lines.push(format!("      Deficit: {:.2}:1", check.deficit()));

    if let Some(suggestion) =
        suggest_adjustment(check.foreground, check.background, check.requirement)
    {
        lines.push(format!(
            "      Suggested fix: {} {} → {}",
            suggestion.direction.as_str(),
            check.foreground,
            suggestion.color
        ));
        lines.push(format!("      New ratio: {:.2}:1", suggestion.ratio));
    }
    lines.push(String::new());
}

fn category_breakdown(result: &ThemeAuditResult) -> BTreeMap<&'static str, (usize, usize)> {
    let mut categories: BTreeMap<&'static str, (usize, usize)> = BTreeMap::new();
    for check in &result.checks {
        let counts = categories.entry(check.category.as_str()).or_default();
        if check.passes {
            counts.0 += 1;
        } else {
            counts.1 += 1;
        }
    }
    categories
}

/// Full audit report: criteria, per-theme details with fix suggestions,
/// category breakdowns, recommendations, and a calculation-validation
/// footer.
#[must_use]
pub fn render_detailed(session: &AuditSession, generated_at: &str) -> String {
    let summary = session.summary();
    let mut lines = Vec::new();

    lines.push(heavy_rule());
    lines.push("WCAG AA ACCESSIBILITY AUDIT REPORT".to_string());
    lines.push("Terminal Theme Collection".to_string());
    lines.push(heavy_rule());
    lines.push(String::new());
    lines.push(format!("Generated: {generated_at}"));
    lines.push(format!("Total themes audited: {}", summary.total));
    lines.push(String::new());

    lines.push("SUMMARY".to_string());
    lines.push(light_rule());
    lines.push(format!(
        "Passing themes: {} ({}%)",
        summary.passing, summary.passing_percent
    ));
    lines.push(format!(
        "Failing themes: {} ({}%)",
        summary.failing, summary.failing_percent
    ));
    if summary.errored > 0 {
        lines.push(format!("Unreadable themes: {}", summary.errored));
    }
    lines.push(String::new());

    lines.push("WCAG AA CRITERIA".to_string());
    lines.push(light_rule());
    lines.push("Normal text:     4.5:1 minimum contrast ratio".to_string());
    lines.push("Large text:      3.0:1 minimum contrast ratio".to_string());
    lines.push("UI components:   3.0:1 minimum contrast ratio".to_string());
    lines.push(String::new());

    lines.push("DETAILED RESULTS".to_string());
    lines.push(heavy_rule());
    lines.push(String::new());

    for result in &session.results {
        lines.push(format!("Theme: {}", result.theme_name));
        lines.push(format!("File: {}", result.source));
        lines.push(format!("Status: {}", status_label(result.overall_pass)));
        lines.push(format!(
            "Checks: {} passed, {} failed",
            result.passed_count(),
            result.failed_count()
        ));
        lines.push(String::new());

        if !result.overall_pass {
            lines.push("  FAILURES:".to_string());
            for check in result.failures() {
                failure_detail_lines(check, &mut lines);
            }
        }

        lines.push("  CATEGORY BREAKDOWN:".to_string());
        for (category, (passed, failed)) in category_breakdown(result) {
            let mark = if failed == 0 { "✓" } else { "✗" };
            lines.push(format!(
                "    {mark} {category}: {passed} passed, {failed} failed"
            ));
        }

        lines.push(String::new());
        lines.push(light_rule());
        lines.push(String::new());
    }

    for error in &session.errors {
        lines.push(format!("Theme source: {}", error.source));
        lines.push(format!("Status: unreadable ({})", error.message));
        lines.push(String::new());
        lines.push(light_rule());
        lines.push(String::new());
    }

    render_recommendations(session, &mut lines);
    render_validation_footer(&mut lines);

    lines.push(heavy_rule());
    lines.push("END OF REPORT".to_string());
    lines.push(heavy_rule());
    lines.push(String::new());
    lines.join("\n")
}

fn render_recommendations(session: &AuditSession, lines: &mut Vec<String>) {
    let failed_themes: Vec<&ThemeAuditResult> = session
        .results
        .iter()
        .filter(|result| !result.overall_pass)
        .collect();

    lines.push("RECOMMENDATIONS".to_string());
    lines.push(heavy_rule());
    lines.push(String::new());

    if failed_themes.is_empty() {
        lines.push("✓ All themes meet WCAG AA accessibility standards!".to_string());
        lines.push(String::new());
        lines.push("All tested themes provide adequate contrast for users with".to_string());
        lines.push("visual impairments.".to_string());
    } else {
        lines.push("The following themes require attention:".to_string());
        lines.push(String::new());

        for result in &failed_themes {
            lines.push(format!("{} ({}):", result.theme_name, result.source));
            lines.push(format!(
                "  - {} contrast issue(s) detected",
                result.failed_count()
            ));
            let primary_failures = result
                .failures()
                .filter(|check| check.category == CheckCategory::Primary)
                .count();
            if primary_failures > 0 {
                lines.push("  - ⚠ CRITICAL: Primary text contrast issues".to_string());
            }
            lines.push(String::new());
        }

        lines.push("Priority order for fixes:".to_string());
        lines.push("1. Primary text (foreground/background) - affects all text".to_string());
        lines.push("2. UI components (cursor, selection) - affects usability".to_string());
        lines.push("3. Console colors - affects syntax highlighting and terminal output".to_string());
    }

    lines.push(String::new());
}

fn render_validation_footer(lines: &mut Vec<String>) {
    lines.push(heavy_rule());
    lines.push("CONTRAST CALCULATION VALIDATION".to_string());
    lines.push(heavy_rule());
    lines.push(String::new());
    lines.push("The audit uses a WCAG 2.0 compliant contrast calculation:".to_string());
    lines.push("- Converts colors to the sRGB color space".to_string());
    lines.push("- Calculates relative luminance with gamma correction".to_string());
    lines.push("- Computes contrast ratio: (L1 + 0.05) / (L2 + 0.05)".to_string());
    lines.push(String::new());

    let black_white = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
    let red = Rgb::new(255, 0, 0);
    let same_color = contrast_ratio(red, red);
    lines.push("Validation tests:".to_string());
    lines.push(format!(
        "- Black/white contrast: {black_white:.2}:1 (expected: 21:1)"
    ));
    lines.push(format!(
        "- Same color contrast: {same_color:.2}:1 (expected: 1:1)"
    ));
    lines.push(String::new());
}

/// Markdown rendering of the full report.
#[must_use]
pub fn render_markdown(session: &AuditSession, generated_at: &str) -> String {
    let summary = session.summary();
    let mut lines = Vec::new();

    lines.push("# WCAG AA Accessibility Audit Report".to_string());
    lines.push(String::new());
    lines.push("**Terminal Theme Collection**".to_string());
    lines.push(String::new());
    lines.push(format!("- **Generated:** {generated_at}"));
    lines.push(format!("- **Total themes audited:** {}", summary.total));
    lines.push(String::new());

    lines.push("## Summary".to_string());
    lines.push(String::new());
    lines.push("| Status | Count | Percentage |".to_string());
    lines.push("|--------|-------|------------|".to_string());
    lines.push(format!(
        "| ✓ Passing | {} | {}% |",
        summary.passing, summary.passing_percent
    ));
    lines.push(format!(
        "| ✗ Failing | {} | {}% |",
        summary.failing, summary.failing_percent
    ));
    lines.push(String::new());

    lines.push("## WCAG AA Criteria".to_string());
    lines.push(String::new());
    lines.push("| Type | Minimum Contrast Ratio |".to_string());
    lines.push("|------|------------------------|".to_string());
    lines.push("| Normal text | 4.5:1 |".to_string());
    lines.push("| Large text | 3.0:1 |".to_string());
    lines.push("| UI components | 3.0:1 |".to_string());
    lines.push(String::new());

    lines.push("## Quick Reference".to_string());
    lines.push(String::new());
    lines.push("| Theme | Status | Pass/Total | File |".to_string());
    lines.push("|-------|--------|------------|------|".to_string());
    for result in &session.results {
        lines.push(format!(
            "| {} | {} | {}/{} | `{}` |",
            result.theme_name,
            status_label(result.overall_pass),
            result.passed_count(),
            result.checks.len(),
            result.source
        ));
    }
    lines.push(String::new());

    if !session.errors.is_empty() {
        lines.push("## Unreadable Themes".to_string());
        lines.push(String::new());
        for error in &session.errors {
            lines.push(format!("- `{}`: {}", error.source, error.message));
        }
        lines.push(String::new());
    }

    let failed_themes: Vec<&ThemeAuditResult> = session
        .results
        .iter()
        .filter(|result| !result.overall_pass)
        .collect();

    if !failed_themes.is_empty() {
        lines.push("## Detailed Failures".to_string());
        lines.push(String::new());

        for result in &failed_themes {
            lines.push(format!("### {}", result.theme_name));
            lines.push(String::new());
            lines.push(format!("- **File:** `{}`", result.source));
            lines.push(format!("- **Failed checks:** {}", result.failed_count()));
            lines.push(String::new());

            for check in result.failures() {
                lines.push(format!("**{}**", check.description));
                lines.push(String::new());
                lines.push(format!("- Foreground: `{}`", check.foreground));
                lines.push(format!("- Background: `{}`", check.background));
                lines.push(format!(
                    "- Contrast ratio: **{:.2}:1** (required: {:.1}:1)",
                    check.ratio, check.requirement
                ));
                lines.push(format!("- Deficit: {:.2}:1", check.deficit()));

                if let Some(suggestion) =
                    suggest_adjustment(check.foreground, check.background, check.requirement)
                {
                    lines.push(format!(
                        "- **Suggested fix:** {} `{}` → `{}`",
                        suggestion.direction.as_str(),
                        check.foreground,
                        suggestion.color
                    ));
                    lines.push(format!("- **New ratio:** {:.2}:1", suggestion.ratio));
                }
                lines.push(String::new());
            }

            lines.push("---".to_string());
            lines.push(String::new());
        }
    }

    lines.push("## Recommendations".to_string());
    lines.push(String::new());
    if failed_themes.is_empty() {
        lines.push("✓ **All themes meet WCAG AA accessibility standards!**".to_string());
    } else {
        lines.push("### Priority Order for Fixes".to_string());
        lines.push(String::new());
        lines.push(
            "1. **Primary text** (foreground/background) - Affects all text readability"
                .to_string(),
        );
        lines.push("2. **UI components** (cursor, selection) - Affects user interaction".to_string());
        lines.push(
            "3. **Console colors** - Affects syntax highlighting and terminal output".to_string(),
        );
    }
    lines.push(String::new());

    lines.join("\n")
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: &'a str,
    summary: SessionSummary,
    themes: &'a [ThemeAuditResult],
    errors: &'a [SessionError],
}

/// Machine-readable rendering of the full session.
pub fn render_json(session: &AuditSession, generated_at: &str) -> Result<String> {
    let report = JsonReport {
        generated_at,
        summary: session.summary(),
        themes: &session.results,
        errors: &session.errors,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Where [`write_reports`] placed its artifacts.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub text: PathBuf,
    pub markdown: PathBuf,
    pub json: PathBuf,
}

/// Render and write all three report artifacts under `reports_dir`,
/// creating the directory as needed.
pub fn write_reports(session: &AuditSession, reports_dir: &Path) -> Result<ReportPaths> {
    let generated_at = now_utc_iso();
    let paths = ReportPaths {
        text: reports_dir.join(TEXT_REPORT_FILE),
        markdown: reports_dir.join(MARKDOWN_REPORT_FILE),
        json: reports_dir.join(JSON_REPORT_FILE),
    };
    write_string(&paths.text, &render_detailed(session, &generated_at))?;
    write_string(&paths.markdown, &render_markdown(session, &generated_at))?;
    write_string(&paths.json, &render_json(session, &generated_at)?)?;
    Ok(paths)
}
