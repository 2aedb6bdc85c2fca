//! Theme checklists, per-theme audits, and the audit session.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use theme_doctor_color::{Rgb, WCAG_AA_NORMAL_TEXT, WCAG_AA_UI_COMPONENT};

use crate::check::{CheckCategory, ContrastCheck};
use crate::error::{AuditError, Result};
use crate::theme::{CONSOLE_COLOR_KEYS, ThemeRecord, load_theme_record, source_name};

/// All contrast checks computed for one theme, in checklist order.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeAuditResult {
    pub theme_name: String,
    pub source: String,
    pub checks: Vec<ContrastCheck>,
    pub overall_pass: bool,
}

impl ThemeAuditResult {
    #[must_use]
    pub fn new(theme_name: String, source: String, checks: Vec<ContrastCheck>) -> Self {
        let overall_pass = checks.iter().all(|check| check.passes);
        Self {
            theme_name,
            source,
            checks,
            overall_pass,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &ContrastCheck> {
        self.checks.iter().filter(|check| !check.passes)
    }

    pub fn passing(&self) -> impl Iterator<Item = &ContrastCheck> {
        self.checks.iter().filter(|check| check.passes)
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.passing().count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }
}

/// Build the fixed checklist for one theme record.
///
/// Three primary checks always run, against documented defaults when the
/// record omits a field. Console colors run only when the record defines
/// them.
pub fn build_checklist(record: &ThemeRecord) -> Result<Vec<ContrastCheck>> {
    let background = parse_optional(record.background.as_deref())?.unwrap_or(Rgb::BLACK);
    let foreground = parse_optional(record.foreground.as_deref())?.unwrap_or(Rgb::WHITE);
    let cursor = parse_optional(record.cursor_color.as_deref())?.unwrap_or(foreground);
    let selection = parse_optional(record.selection_background.as_deref())?.unwrap_or(background);

    let mut checks = vec![
        ContrastCheck::new(
            "Primary text (foreground on background)",
            foreground,
            background,
            WCAG_AA_NORMAL_TEXT,
            CheckCategory::Primary,
        ),
        ContrastCheck::new(
            "Cursor visibility (cursor on background)",
            cursor,
            background,
            WCAG_AA_UI_COMPONENT,
            CheckCategory::UiComponent,
        ),
        ContrastCheck::new(
            "Selection visibility (foreground on selection)",
            foreground,
            selection,
            WCAG_AA_NORMAL_TEXT,
            CheckCategory::Primary,
        ),
    ];

    for key in CONSOLE_COLOR_KEYS {
        if let Some(value) = record.console_color(key) {
            checks.push(ContrastCheck::new(
                format!("Console {key} on background"),
                Rgb::parse_hex(value)?,
                background,
                WCAG_AA_NORMAL_TEXT,
                CheckCategory::ConsoleColor,
            ));
        }
    }

    Ok(checks)
}

fn parse_optional(value: Option<&str>) -> Result<Option<Rgb>> {
    value
        .map(Rgb::parse_hex)
        .transpose()
        .map_err(AuditError::from)
}

/// Audit one already-parsed theme record.
pub fn audit_theme(record: &ThemeRecord, source: impl Into<String>) -> Result<ThemeAuditResult> {
    let source = source.into();
    let theme_name = record.name.clone().unwrap_or_else(|| source.clone());
    let checks = build_checklist(record)?;
    Ok(ThemeAuditResult::new(theme_name, source, checks))
}

/// Load and audit one theme JSON file.
pub fn audit_theme_file(path: &Path) -> Result<ThemeAuditResult> {
    let record = load_theme_record(path)?;
    audit_theme(&record, source_name(path))
}

/// The outcome of one theme source: an audit result, or the error that kept
/// the theme out of the aggregate counts.
#[derive(Debug)]
pub struct ThemeOutcome {
    pub source: String,
    pub outcome: std::result::Result<ThemeAuditResult, AuditError>,
}

/// A theme source the session could not audit.
#[derive(Debug, Clone, Serialize)]
pub struct SessionError {
    pub source: String,
    pub message: String,
}

/// Aggregate pass/fail counts for one session.
///
/// Percentages use integer floor division and exclude unreadable sources
/// from the denominator; an empty session reports 0%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub total: usize,
    pub passing: usize,
    pub failing: usize,
    pub errored: usize,
    pub passing_percent: usize,
    pub failing_percent: usize,
}

/// Results of auditing a collection of theme sources.
///
/// One unreadable theme never aborts the session; it is recorded in
/// `errors` while every readable theme is still audited.
#[derive(Debug, Serialize)]
pub struct AuditSession {
    pub results: Vec<ThemeAuditResult>,
    pub errors: Vec<SessionError>,
}

impl AuditSession {
    /// Audit every `*.json` file directly under `themes_dir`.
    pub fn run(themes_dir: &Path) -> Result<Self> {
        let files = find_theme_files(themes_dir)?;
        let outcomes = files
            .iter()
            .map(|path| ThemeOutcome {
                source: source_name(path),
                outcome: audit_theme_file(path),
            })
            .collect();
        Ok(Self::from_outcomes(outcomes))
    }

    /// Partition per-source outcomes and fix the result order: theme name,
    /// ascending, case-sensitive.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<ThemeOutcome>) -> Self {
        let mut results = Vec::new();
        let mut errors = Vec::new();
        for entry in outcomes {
            match entry.outcome {
                Ok(result) => results.push(result),
                Err(error) => errors.push(SessionError {
                    source: entry.source,
                    message: error.to_string(),
                }),
            }
        }
        results.sort_by(|a, b| a.theme_name.cmp(&b.theme_name));
        Self { results, errors }
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let total = self.results.len();
        let passing = self
            .results
            .iter()
            .filter(|result| result.overall_pass)
            .count();
        let failing = total - passing;
        SessionSummary {
            total,
            passing,
            failing,
            errored: self.errors.len(),
            passing_percent: floor_percent(passing, total),
            failing_percent: floor_percent(failing, total),
        }
    }
}

fn floor_percent(count: usize, total: usize) -> usize {
    if total == 0 { 0 } else { count * 100 / total }
}

/// List the `*.json` files directly under `themes_dir`, sorted by file name.
pub fn find_theme_files(themes_dir: &Path) -> Result<Vec<PathBuf>> {
    if !themes_dir.exists() {
        return Err(AuditError::MissingPath {
            path: themes_dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(themes_dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
